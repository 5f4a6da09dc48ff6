use catalog_business::{Catalog, CatalogConfig, FilterState, VisibleProducts};
use catalog_states::StateCtx;

/// The main application state.
pub struct State {
    /// Catalog, filter selections and the visible products compute.
    pub ctx: StateCtx,
    /// Page heading.
    pub title: String,
}

impl State {
    pub fn new(config: &CatalogConfig, catalog: Catalog) -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(catalog);
        ctx.add_state(FilterState::default());
        ctx.record_compute(VisibleProducts::default());

        Self {
            ctx,
            title: config.title().to_owned(),
        }
    }
}
