use catalog_business::{Category, FilterAction, FilterState};
use egui::{Button, RichText, Ui};

use crate::utils::colors::COLOR_SUCCESS;

/// Renders the "All" button followed by one toggle per category.
pub fn category_buttons(
    ui: &mut Ui,
    categories: &[Category],
    filter: &FilterState,
) -> Option<FilterAction> {
    let mut action = None;

    ui.horizontal_wrapped(|ui| {
        let all_selected = filter.all_categories_selected();
        let all = if all_selected {
            Button::new(RichText::new("All").strong()).fill(COLOR_SUCCESS)
        } else {
            Button::new("All")
        };
        if ui.add(all).clicked() {
            action = Some(FilterAction::SelectAllCategories);
        }

        ui.add_space(16.0);

        for category in categories {
            let selected = filter.is_category_selected(&category.title);
            if ui
                .add(Button::new(category.title.as_str()).selected(selected))
                .clicked()
            {
                action = Some(FilterAction::ToggleCategory(category.title));
            }
        }
    });

    action
}
