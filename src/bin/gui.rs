// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use acervo::{
    config::{
        consts::{CONFIG_FILE, LOG_SUBDIR, STORE_DIR},
        file as config_file,
        state::GuiState,
    },
    gui, logging,
};
use eframe::egui::ViewportBuilder;

fn main() {
    let options = config_file::load(Path::new(CONFIG_FILE));
    if let Err(e) = logging::init(&options.log_level, &Path::new(STORE_DIR).join(LOG_SUBDIR)) {
        eprintln!("Logging disabled: {e}");
    }

    let gui_state = GuiState::default();
    let native = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Acervo")
            .with_inner_size(gui_state.inner_size()),
        ..Default::default()
    };

    if let Err(e) = gui::run(native, options, gui_state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
