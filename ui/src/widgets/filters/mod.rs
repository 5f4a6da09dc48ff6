//! Filters panel above the product table.
//!
//! - `owner_tabs`: "All" plus one tab per user
//! - `search_field`: product name search with a clear button
//! - `category_buttons`: "All" plus one toggle per category
//! - `panel`: frame, reset button and applying the collected action

mod category_buttons;
mod owner_tabs;
mod panel;
mod search_field;

pub use category_buttons::category_buttons;
pub use owner_tabs::owner_tabs;
pub use panel::filters_panel;
pub use search_field::search_field;
