//! Column definitions for the product table.

use egui_extras::Column;

/// Fixed column widths for consistent table layout
pub const ID_WIDTH: f32 = 50.0;
pub const CATEGORY_WIDTH: f32 = 180.0;
pub const USER_WIDTH: f32 = 120.0;
pub const ROW_HEIGHT: f32 = 30.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Table column configuration, in order:
/// - ID (fixed width with border indicator)
/// - Product (flexible, fills remaining space)
/// - Category (fixed)
/// - User (fixed)
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::exact(ID_WIDTH),             // ID
        Column::remainder().at_least(120.0), // Product - flexible
        Column::exact(CATEGORY_WIDTH),       // Category - fixed
        Column::exact(USER_WIDTH),           // User - fixed
    ]
}
