// src/progress.rs
use crate::sheets::SheetKind;

/// Lightweight progress reporting used by sheet loads.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called when the request for a sheet is about to go out.
    fn begin(&mut self, _sheet: SheetKind) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when a sheet has been fetched and normalized.
    fn sheet_done(&mut self, _sheet: SheetKind, _records: usize) {}

    /// Called when a sheet load failed.
    fn sheet_failed(&mut self, _sheet: SheetKind) {}
}
