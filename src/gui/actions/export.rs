// src/gui/actions/export.rs
use std::path::{Path, PathBuf};

use crate::{
    config::{consts::CONFIG_FILE, file as config_file},
    file,
    gui::app::App,
};

pub fn export(app: &mut App) {
    // apply the output field first
    let typed = app.out_dir_text.trim();
    if !typed.is_empty() && PathBuf::from(typed) != app.state.options.export.out_dir {
        app.state.options.export.out_dir = PathBuf::from(typed);
        logf!("Export: Out dir set → {}", app.state.options.export.out_dir.display());
    }

    let kind = app.current_page_kind();
    let Some(data) = super::current_dataset(app) else {
        logd!("Export: Clicked, but the page is not ready");
        app.status("Nothing to export (page not loaded)");
        return;
    };
    if data.rows.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    logf!(
        "Export: Begin page={:?}, rows={}, headers={}, format={:?}",
        kind,
        data.row_count(),
        data.header_count(),
        app.state.options.export.format
    );

    let msg = match file::write_export(&app.state.options.export, kind, &data) {
        Ok(path) => {
            // remember format / headers / dir for the next session
            if let Err(e) = config_file::save(Path::new(CONFIG_FILE), &app.state.options) {
                logw!("Config: Save failed: {}", e);
            }
            format!("Exported {} rows → {}", data.row_count(), path.display())
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };
    app.status(msg);
}
