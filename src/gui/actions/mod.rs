// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy, export, ensure_loaded, poll}.

mod copy;   // src/gui/actions/copy.rs
mod export; // src/gui/actions/export.rs
mod load;   // src/gui/actions/load.rs

pub use copy::copy;
pub use export::export;
pub use load::{ensure_loaded, poll};

use crate::{gui::app::App, store::DataSet};

/// Visible rows of the current page, if it is ready.
#[inline]
pub(super) fn current_dataset(app: &App) -> Option<DataSet> {
    app.current_page().dataset(app)
}
