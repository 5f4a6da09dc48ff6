use egui::Ui;

pub const EMPTY_STATE_MESSAGE: &str = "No products matching selected criteria";

#[inline]
pub fn empty_state(ui: &mut Ui) {
    ui.label(EMPTY_STATE_MESSAGE);
}
