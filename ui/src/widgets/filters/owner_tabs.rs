use catalog_business::{FilterAction, FilterState, User, UserFilter};
use egui::Ui;

/// Renders the owner tabs. Returns the selection change, if any.
pub fn owner_tabs(ui: &mut Ui, users: &[User], filter: &FilterState) -> Option<FilterAction> {
    let mut action = None;

    ui.horizontal_wrapped(|ui| {
        if ui
            .selectable_label(filter.is_user_selected(UserFilter::All), "All")
            .clicked()
        {
            action = Some(FilterAction::SelectUser(UserFilter::All));
        }

        for user in users {
            let selection = UserFilter::User(user.id);
            if ui
                .selectable_label(filter.is_user_selected(selection), user.name.as_str())
                .clicked()
            {
                action = Some(FilterAction::SelectUser(selection));
            }
        }
    });

    action
}
