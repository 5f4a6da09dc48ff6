//! Table components for the product list.
//!
//! - `columns`: Column definitions and widths
//! - `header`: Table header rendering
//! - `row`: Individual row rendering with cells
//! - `cells`: Cell rendering functions for each column type

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use catalog_business::EnrichedProduct;
use egui::{Align, Layout, Ui};
use egui_extras::TableBuilder;

use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use row::render_product_row;

/// Renders `products` as a striped table, one row per product.
pub fn product_table<'a>(ui: &mut Ui, products: impl Iterator<Item = &'a EnrichedProduct>) {
    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .cell_layout(Layout::left_to_right(Align::Center));
    for column in table_columns() {
        builder = builder.column(column);
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            render_table_header(&mut header);
        })
        .body(|mut body| {
            for product in products {
                body.row(ROW_HEIGHT, |mut row| {
                    render_product_row(&mut row, product);
                });
            }
        });
}
