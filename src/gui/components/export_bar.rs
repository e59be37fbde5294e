// src/gui/components/export_bar.rs

use eframe::egui;
use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers ---
        let prev_fmt = export.format;
        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");

            let before_headers = export.include_headers;
            ui.checkbox(&mut export.include_headers, "Include headers");
            if export.include_headers != before_headers {
                logf!("UI: Include_headers → {}", export.include_headers);
            }
        });
        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
        }
    }

    ui.horizontal(|ui| {
        ui.label("Output dir:");
        ui.add(egui::TextEdit::singleline(&mut app.out_dir_text).font(egui::TextStyle::Monospace));

        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.button("Export").clicked() {
            actions::export(app);
        }

        let status = app.status_text();
        ui.label(format!("Status: {status}"));
    });
}
