mod controller;
mod state;
mod ui;
mod view;

use crate::utils::color::Palette;
use eframe::{egui, App};

pub use controller::{NativePicker, UploadController};
use view::Intent;

pub struct CatOrLoaf {
    controller: UploadController,
    palette: Palette,
}

impl CatOrLoaf {
    pub fn new(_cc: &eframe::CreationContext<'_>, controller: UploadController) -> Self {
        tracing::info!("initializing Cat or Loaf");
        Self {
            controller,
            palette: Palette::default(),
        }
    }

    fn dispatch(&mut self, intent: Intent) {
        tracing::debug!(?intent, "user intent");
        match intent {
            Intent::PickFile => {
                self.controller.request_file_pick();
            }
            Intent::Reset => {
                self.controller.reset();
            }
        }
    }
}

impl App for CatOrLoaf {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.controller.poll() {
            tracing::debug!(phase = ?self.controller.state().phase(), "request resolved");
        }

        let view = view::render(self.controller.state(), self.controller.pending_upload());
        if let Some(intent) = ui::paint(ctx, &view, &self.palette) {
            if view.intents().contains(&intent) {
                self.dispatch(intent);
            }
        }

        ctx.request_repaint();
    }
}
