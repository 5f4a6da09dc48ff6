use catalog_business::{FilterAction, FilterState};
use egui::{TextEdit, Ui};

const SEARCH_WIDTH: f32 = 260.0;

/// Renders the search input and, while it holds text, the clear button.
pub fn search_field(ui: &mut Ui, filter: &FilterState) -> Option<FilterAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.label("🔍");

        let mut text = filter.search().to_owned();
        let response = ui.add(
            TextEdit::singleline(&mut text)
                .hint_text("Search")
                .desired_width(SEARCH_WIDTH),
        );
        if response.changed() {
            action = Some(FilterAction::SetSearch(text));
        }

        if !filter.search().is_empty()
            && ui
                .small_button("✖")
                .on_hover_text("Clear search")
                .clicked()
        {
            action = Some(FilterAction::ClearSearch);
        }
    });

    action
}
