// src/gui/pages/mod.rs
use eframe::egui;

use crate::{config::options::PageKind, store::DataSet};
use super::app::App;

pub mod advisors;
pub mod calendar;
pub mod project;
pub mod repository;

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Draw the page body (controls + content) for the current controller state.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);

    /// What Copy/Export operate on: the visible records, once the page is ready.
    fn dataset(&self, _app: &App) -> Option<DataSet> {
        None
    }
}

/// `Label: value` line, skipped when the value is empty.
pub(super) fn field(ui: &mut egui::Ui, label: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    ui.horizontal_wrapped(|ui| {
        ui.label(egui::RichText::new(label).strong());
        ui.label(value);
    });
}
