// src/gui/actions/copy.rs
use eframe::egui;
use crate::{csv::to_export_string, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(data) = super::current_dataset(app) else {
        app.status("Nothing to copy (page not loaded)");
        logd!("Copy: Clicked, but the page is not ready");
        return;
    };
    if data.rows.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let export = &app.state.options.export;
    logf!(
        "Copy: page={:?}, rows={}, headers={}",
        app.current_page_kind(),
        data.row_count(),
        data.header_count()
    );
    let txt = to_export_string(&data, export.include_headers, export.format.delim());

    ui_ctx.copy_text(txt);
    app.status(format!("Copied {} rows to clipboard", data.row_count()));
}
