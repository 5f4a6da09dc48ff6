//! Product table and the empty-state message shown in its place.

mod empty_state;
pub mod table;

use catalog_business::{Catalog, VisibleProducts};
use catalog_states::StateCtx;
use egui::Ui;

pub use empty_state::{EMPTY_STATE_MESSAGE, empty_state};

/// Renders the visible products, or the empty state when nothing matches.
pub fn products_view(state_ctx: &StateCtx, ui: &mut Ui) {
    let catalog = state_ctx.state::<Catalog>();

    match state_ctx.cached::<VisibleProducts>() {
        Some(visible) if !visible.is_empty() => {
            table::product_table(ui, visible.products(catalog));
        }
        _ => empty_state(ui),
    }
}
