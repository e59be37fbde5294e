// src/gui/components/panels.rs
//
// Loading / error / empty panels, the egui twin of the markup panels.

use eframe::egui::{self, Color32, RichText};
use crate::pages::{messages, Panels};

/// Draws whichever status panel is visible. Returns whether the page content
/// should be drawn after it.
pub fn draw(ui: &mut egui::Ui, panels: Panels<'_>, empty_text: &str) -> bool {
    if panels.loading {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(messages::LOADING);
        });
    }
    if let Some(msg) = panels.error {
        ui.label(RichText::new(msg).color(Color32::from_rgb(200, 40, 40)));
    }
    if panels.empty {
        ui.label(RichText::new(empty_text).italics());
    }
    panels.content
}
