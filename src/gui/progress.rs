// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::{progress::Progress, sheets::SheetKind};

/// Writes load status into the shared status line the export bar shows.
/// Lives on the worker thread.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status }
    }

    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, sheet: SheetKind) {
        self.set_status(format!("Loading {sheet}…"));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn sheet_done(&mut self, sheet: SheetKind, records: usize) {
        self.set_status(format!("Loaded {sheet}: {records} records"));
    }
    fn sheet_failed(&mut self, sheet: SheetKind) {
        self.set_status(format!("Failed to load {sheet}"));
    }
}
