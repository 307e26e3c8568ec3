use colorgrad::Gradient;
use eframe::egui::{self, Align2, Color32, FontId, Grid, RichText, Sense, Vec2};

use crate::analysis::{CellKind, CorrelationMatrix};
use crate::config::plot::PLOT_CONFIG;
use crate::utils::maths_utils::clamp_unit;

/// Maps correlation coefficients to cell colours.
pub struct HeatPalette {
    gradient: Option<colorgrad::CatmullRomGradient>,
}

impl Default for HeatPalette {
    fn default() -> Self {
        Self::new()
    }
}

impl HeatPalette {
    pub fn new() -> Self {
        let gradient = colorgrad::GradientBuilder::new()
            .html_colors(PLOT_CONFIG.heatmap_gradient_colors)
            .build::<colorgrad::CatmullRomGradient>();
        if let Err(e) = &gradient {
            log::warn!("Heatmap gradient unavailable, using flat colours: {}", e);
        }
        Self {
            gradient: gradient.ok(),
        }
    }

    /// Hue from the sign, opacity from the magnitude.
    /// Self-pairs and exact zeros get their own fixed colours.
    pub fn cell_color(&self, row: &str, col: &str, value: f64) -> Color32 {
        match CellKind::classify(row, col, value) {
            CellKind::SelfPair => PLOT_CONFIG.heatmap_self_color,
            CellKind::NoSignal => PLOT_CONFIG.heatmap_no_signal_color,
            kind => {
                let value = clamp_unit(value);
                let [r, g, b] = match &self.gradient {
                    Some(gradient) => {
                        let rgba = gradient.at(((value + 1.0) / 2.0) as f32).to_rgba8();
                        [rgba[0], rgba[1], rgba[2]]
                    }
                    None if kind == CellKind::Positive => [0, 255, 0],
                    None => [255, 0, 0],
                };
                let alpha = (value.abs() as f32).max(PLOT_CONFIG.heatmap_min_alpha);
                Color32::from_rgba_unmultiplied(r, g, b, (alpha * 255.0).round() as u8)
            }
        }
    }
}

/// Labelled grid of coloured cells, one per symbol pair.
pub fn show_heatmap(ui: &mut egui::Ui, matrix: &CorrelationMatrix, palette: &HeatPalette) {
    let symbols: Vec<&str> = matrix.symbols().collect();
    let size = Vec2::splat(PLOT_CONFIG.heatmap_cell_size);
    let spacing = PLOT_CONFIG.heatmap_cell_spacing;

    egui::ScrollArea::horizontal()
        .id_salt("heatmap_scroll")
        .show(ui, |ui| {
            Grid::new("correlation_heatmap")
                .spacing([spacing, spacing])
                .show(ui, |ui| {
                    ui.label("");
                    for col in &symbols {
                        ui.label(RichText::new(*col).monospace().small());
                    }
                    ui.end_row();

                    for row in &symbols {
                        ui.label(RichText::new(*row).monospace().small());
                        for col in &symbols {
                            let value = matrix.get(row, col).unwrap_or(0.0);
                            let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
                            let painter = ui.painter();
                            painter.rect_filled(rect, 2.0, palette.cell_color(row, col, value));
                            painter.text(
                                rect.center(),
                                Align2::CENTER_CENTER,
                                format!("{:.2}", value),
                                FontId::proportional(12.0),
                                PLOT_CONFIG.heatmap_text_color,
                            );
                            response.on_hover_text(format!("{} / {}: {:.4}", row, col, value));
                        }
                        ui.end_row();
                    }
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_cells_have_fixed_colours() {
        let palette = HeatPalette::new();
        assert_eq!(palette.cell_color("A", "A", 1.0), PLOT_CONFIG.heatmap_self_color);
        assert_eq!(palette.cell_color("A", "B", 0.0), PLOT_CONFIG.heatmap_no_signal_color);
    }

    #[test]
    fn sign_sets_hue_and_magnitude_sets_alpha() {
        let palette = HeatPalette::new();
        let strong_up = palette.cell_color("A", "B", 1.0).to_srgba_unmultiplied();
        let strong_down = palette.cell_color("A", "B", -1.0).to_srgba_unmultiplied();
        let weak_up = palette.cell_color("A", "B", 0.3).to_srgba_unmultiplied();

        assert!(strong_up[1] > strong_up[0]);
        assert!(strong_down[0] > strong_down[1]);
        assert_eq!(strong_up[3], 255);
        assert!(weak_up[3] < strong_up[3]);
    }

    #[test]
    fn tiny_values_stay_visible() {
        let palette = HeatPalette::new();
        let faint = palette.cell_color("A", "B", 0.001).to_srgba_unmultiplied();
        assert!(faint[3] > 0);
    }
}
