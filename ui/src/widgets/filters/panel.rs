use catalog_business::{Catalog, FilterAction, FilterState};
use catalog_states::StateCtx;
use egui::{Button, Frame, Response, Ui};

use super::{category_buttons, owner_tabs, search_field};

const RESET_BUTTON_HEIGHT: f32 = 24.0;

/// Displays the filters panel and applies whatever the user changed.
///
/// Widgets only read the current [`FilterState`]; the resulting action is
/// applied after rendering so the catalog borrow is released first.
pub fn filters_panel(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let response = Frame::group(ui.style()).show(ui, |ui| {
        let catalog = state_ctx.state::<Catalog>();
        let filter = state_ctx.state::<FilterState>();

        ui.strong("Filters");
        ui.add_space(4.0);

        let mut action = owner_tabs(ui, catalog.users(), filter);
        ui.separator();
        action = search_field(ui, filter).or(action);
        ui.separator();
        action = category_buttons(ui, catalog.categories(), filter).or(action);
        ui.separator();

        let reset = ui.add_sized(
            [ui.available_width(), RESET_BUTTON_HEIGHT],
            Button::new("Reset all filters"),
        );
        if reset.clicked() {
            action = Some(FilterAction::Reset);
        }

        action
    });

    if let Some(action) = response.inner {
        state_ctx.update::<FilterState>(|filter| filter.apply(action));
        // recompute before the next frame is drawn
        ui.ctx().request_repaint();
    }

    response.response
}
