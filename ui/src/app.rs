use crate::{state::State, widgets};

pub struct CatalogApp {
    pub state: State,
}

impl CatalogApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }
}

impl eframe::App for CatalogApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Sync Compute for render
        self.state.ctx.sync_computes();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.state.title.as_str());
            ui.add_space(8.0);

            widgets::filters_panel(&mut self.state.ctx, ui);

            ui.add_space(12.0);
            widgets::products_view(&self.state.ctx, ui);
        });
    }
}
