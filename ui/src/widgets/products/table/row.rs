//! Row rendering for the product table.

use catalog_business::EnrichedProduct;
use egui::{Stroke, Ui};
use egui_extras::TableRow;

use super::cells::{render_category_cell, render_id_cell, render_name_cell, render_user_cell};

/// Renders a single product row: ID, name, category and owner.
#[inline]
pub fn render_product_row(row: &mut TableRow<'_, '_>, product: &EnrichedProduct) {
    row.col(|ui| {
        render_id_cell(ui, product.id);
        draw_cell_bottom_border(ui);
    });

    row.col(|ui| {
        render_name_cell(ui, &product.name);
        draw_cell_bottom_border(ui);
    });

    row.col(|ui| {
        render_category_cell(ui, &product.category_label());
        draw_cell_bottom_border(ui);
    });

    row.col(|ui| {
        render_user_cell(ui, &product.user);
        draw_cell_bottom_border(ui);
    });
}

/// Draws a bottom border line for a cell.
#[inline]
fn draw_cell_bottom_border(ui: &mut Ui) {
    let rect = ui.available_rect_before_wrap();
    let border_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter().hline(
        rect.left()..=rect.right(),
        rect.bottom(),
        Stroke::new(1.0, border_color),
    );
}
