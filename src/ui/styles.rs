use eframe::egui::{Color32, RichText, Ui};

use crate::ui::config::UI_CONFIG;
use crate::ui::utils::{change_color, format_change};

/// Semantic text styles for the dashboard, available on any `egui::Ui`.
pub trait UiStyleExt {
    /// Small gray text for captions and secondary details.
    fn label_subdued(&mut self, text: impl Into<String>);

    /// "Label: Value" with a subdued label and a coloured value.
    fn metric(&mut self, label: &str, value: &str, color: Color32);

    /// Uppercase monospace heading in the heading colour.
    fn label_header(&mut self, text: impl Into<String>);

    fn label_subheader(&mut self, text: impl Into<String>);

    /// Signed change, green when up and red when down. `size` is in points.
    fn label_change(&mut self, change: f64, size: f32);

    fn label_error(&mut self, text: impl Into<String>);

    /// Gold notice, e.g. while waiting for the first snapshot.
    fn label_warning(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(Color32::GRAY));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).small().color(color));
        });
    }

    fn label_header(&mut self, text: impl Into<String>) {
        let text = text.into().to_uppercase();
        self.heading(RichText::new(text).color(UI_CONFIG.colors.heading).monospace());
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(UI_CONFIG.colors.subsection_heading));
    }

    fn label_change(&mut self, change: f64, size: f32) {
        self.label(
            RichText::new(format_change(change))
                .size(size)
                .color(change_color(change)),
        );
    }

    fn label_error(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(UI_CONFIG.colors.price_down));
    }

    fn label_warning(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(Color32::from_rgb(255, 215, 0)));
    }
}
