use catalog_business::{Catalog, CatalogConfig, FilterState};
use catalog_ui::CatalogApp;
use catalog_ui::state::State;
use egui_kittest::Harness;

/// Frames needed for a click to reach the state and the recomputed list to render.
pub const UI_PROPAGATION_FRAMES: usize = 3;

pub struct TestCtx<'a> {
    harness: Harness<'a, CatalogApp>,
}

impl<'a> TestCtx<'a> {
    /// App over the built-in sample catalog, with the first frames rendered.
    pub fn new_app() -> Self {
        let catalog = Catalog::sample().expect("sample catalog should load");
        let state = State::new(&CatalogConfig::default(), catalog);
        let app = CatalogApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        let mut ctx = Self { harness };
        ctx.settle();
        ctx
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, CatalogApp> {
        &mut self.harness
    }

    pub fn harness(&self) -> &Harness<'a, CatalogApp> {
        &self.harness
    }

    pub fn settle(&mut self) {
        for _ in 0..UI_PROPAGATION_FRAMES {
            self.harness.step();
        }
    }

    pub fn filter(&self) -> &FilterState {
        self.harness.state().state.ctx.state::<FilterState>()
    }

    pub fn update_filter(&mut self, f: impl FnOnce(&mut FilterState)) {
        self.harness
            .state_mut()
            .state
            .ctx
            .update::<FilterState>(f);
        self.settle();
    }
}
