mod filters;
mod products;

pub use filters::{category_buttons, filters_panel, owner_tabs, search_field};
pub use products::{EMPTY_STATE_MESSAGE, empty_state, products_view, table};
