use eframe::egui::{self, Color32, RichText, Ui};
use egui_plot::{MarkerShape, Plot, PlotBounds, PlotPoints, Points};

use crate::data::model::SampleSet;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Fixed display parameters
// ---------------------------------------------------------------------------

/// Display parameters of the scatter chart. The visible window never
/// follows the data.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    pub x_label: String,
    pub y_label: String,
    pub label_size: f32,
    pub marker_color: Color32,
    pub marker_radius: f32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            x_bounds: [0.0, 2.0],
            y_bounds: [0.0, 15.0],
            x_label: "x".to_owned(),
            y_label: "y".to_owned(),
            label_size: 18.0,
            marker_color: Color32::BLUE,
            marker_radius: 2.5,
        }
    }
}

impl PlotConfig {
    /// `[x_min, x_max, y_min, y_max]`
    pub fn axis(&self) -> [f64; 4] {
        [
            self.x_bounds[0],
            self.x_bounds[1],
            self.y_bounds[0],
            self.y_bounds[1],
        ]
    }

    pub fn bounds(&self) -> PlotBounds {
        PlotBounds::from_min_max(
            [self.x_bounds[0], self.y_bounds[0]],
            [self.x_bounds[1], self.y_bounds[1]],
        )
    }
}

/// Global id of the scatter plot, stable across layouts.
pub fn plot_id() -> egui::Id {
    egui::Id::new("scatter_plot")
}

/// Sample pairs as plot coordinates, in generation order.
pub fn scatter_points(samples: &SampleSet) -> Vec<[f64; 2]> {
    samples.iter().map(|p| [p.x, p.y]).collect()
}

// ---------------------------------------------------------------------------
// Scatter plot (central panel)
// ---------------------------------------------------------------------------

/// Render the scatter plot in the central panel.
pub fn scatter_plot(ui: &mut Ui, state: &AppState, config: &PlotConfig) {
    let points = Points::new(PlotPoints::new(scatter_points(&state.samples)))
        .name("samples")
        .shape(MarkerShape::Circle)
        .filled(true)
        .radius(config.marker_radius)
        .color(config.marker_color);

    // egui_plot always rotates the y axis label, so it is drawn beside the
    // plot instead.
    ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui: &mut Ui| {
        ui.label(RichText::new(&config.y_label).size(config.label_size));

        Plot::new("scatter_plot")
            .id(plot_id())
            .x_axis_label(RichText::new(&config.x_label).size(config.label_size))
            .height(ui.available_height())
            .allow_boxed_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_double_click_reset(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(config.bounds());
                plot_ui.points(points);
            });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generator::LinearModel;
    use crate::data::model::SamplePair;
    use egui_plot::PlotMemory;

    #[test]
    fn axis_is_fixed() {
        assert_eq!(PlotConfig::default().axis(), [0.0, 2.0, 0.0, 15.0]);
    }

    #[test]
    fn bounds_ignore_data() {
        let config = PlotConfig::default();
        let bounds = config.bounds();
        assert_eq!(bounds.min(), [0.0, 0.0]);
        assert_eq!(bounds.max(), [2.0, 15.0]);
    }

    #[test]
    fn points_follow_sample_order() {
        let samples = SampleSet::from_pairs(vec![
            SamplePair { x: 1.5, y: 20.0 },
            SamplePair { x: 0.25, y: -3.0 },
        ]);
        assert_eq!(scatter_points(&samples), vec![[1.5, 20.0], [0.25, -3.0]]);
    }

    #[test]
    fn default_style() {
        let config = PlotConfig::default();
        assert_eq!(config.marker_color, Color32::from_rgb(0, 0, 255));
        assert_eq!(config.x_label, "x");
        assert_eq!(config.y_label, "y");
    }

    #[test]
    fn rendered_window_stays_fixed_for_outlying_data() {
        let samples = SampleSet::from_pairs(vec![
            SamplePair { x: 5.0, y: 40.0 },
            SamplePair { x: -1.0, y: -3.0 },
        ]);
        let state = AppState::new(LinearModel::default(), samples);
        let config = PlotConfig::default();

        let ctx = egui::Context::default();
        for _ in 0..3 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    scatter_plot(ui, &state, &config);
                });
            });
        }

        let memory = PlotMemory::load(&ctx, plot_id()).expect("plot memory stored");
        let bounds = memory.bounds();
        let close = |a: [f64; 2], b: [f64; 2]| (a[0] - b[0]).abs() < 1e-9 && (a[1] - b[1]).abs() < 1e-9;
        assert!(close(bounds.min(), [0.0, 0.0]), "min {:?}", bounds.min());
        assert!(close(bounds.max(), [2.0, 15.0]), "max {:?}", bounds.max());
    }
}
