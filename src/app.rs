use eframe::egui;

use crate::state::AppState;
use crate::theme::Theme;
use crate::ui::plot::PlotConfig;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ScatterApp {
    pub state: AppState,
    pub plot_config: PlotConfig,
}

impl ScatterApp {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        Theme::ggplot().apply(&cc.egui_ctx);
        Self {
            state,
            plot_config: PlotConfig::default(),
        }
    }
}

impl eframe::App for ScatterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::scatter_plot(ui, &self.state, &self.plot_config);
        });
    }
}
