use std::str::FromStr;

use eframe::egui::{self, Color32};
use palette::rgb::FromHexError;
use palette::Srgb;

// ---------------------------------------------------------------------------
// ggplot-like look
// ---------------------------------------------------------------------------

const PLOT_BACKGROUND_HEX: &str = "#E5E5E5";
const FIGURE_BACKGROUND_HEX: &str = "#FFFFFF";
const TEXT_HEX: &str = "#555555";

/// Parse a `#rrggbb` (or `rrggbb`) string into a [`Color32`].
pub fn hex_color(hex: &str) -> Result<Color32, FromHexError> {
    let rgb: Srgb<u8> = Srgb::from_str(hex)?;
    Ok(Color32::from_rgb(rgb.red, rgb.green, rgb.blue))
}

/// Colours applied on top of egui's light visuals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Fill behind the plot area (egui_plot uses `extreme_bg_color`).
    pub plot_background: Color32,
    pub figure_background: Color32,
    pub text: Color32,
}

impl Theme {
    pub fn ggplot() -> Self {
        Self {
            plot_background: parse_or(PLOT_BACKGROUND_HEX, Color32::LIGHT_GRAY),
            figure_background: parse_or(FIGURE_BACKGROUND_HEX, Color32::WHITE),
            text: parse_or(TEXT_HEX, Color32::DARK_GRAY),
        }
    }

    pub fn visuals(&self) -> egui::Visuals {
        let mut visuals = egui::Visuals::light();
        visuals.extreme_bg_color = self.plot_background;
        visuals.panel_fill = self.figure_background;
        visuals.window_fill = self.figure_background;
        visuals.override_text_color = Some(self.text);
        visuals
    }

    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_visuals(self.visuals());
    }
}

fn parse_or(hex: &str, fallback: Color32) -> Color32 {
    hex_color(hex).unwrap_or_else(|e| {
        log::warn!("Invalid theme colour {hex}: {e}");
        fallback
    })
}
