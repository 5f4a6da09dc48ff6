//! Cell rendering functions for the product table.

use catalog_business::{ProductId, User};
use egui::{RichText, Ui};

use crate::utils::colors::owner_color;

/// Renders the ID cell with a border indicator.
#[inline]
pub fn render_id_cell(ui: &mut Ui, id: ProductId) {
    // Draw left border indicator
    let rect = ui.available_rect_before_wrap();
    let border_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter().vline(
        rect.left(),
        rect.top()..=rect.bottom(),
        egui::Stroke::new(2.0, border_color),
    );

    ui.label(RichText::new(id.to_string()).strong().monospace());
}

#[inline]
pub fn render_name_cell(ui: &mut Ui, name: &str) {
    ui.label(name);
}

/// Renders `{icon} - {title}`.
#[inline]
pub fn render_category_cell(ui: &mut Ui, label: &str) {
    ui.label(label);
}

/// Renders the owner name, colored by the owner's sex.
#[inline]
pub fn render_user_cell(ui: &mut Ui, user: &User) {
    ui.label(RichText::new(user.name.as_str()).color(owner_color(user.sex)));
}
