// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::{ExportOptions, PageKind};
use crate::csv::to_export_string;
use crate::store::DataSet;

/// Write one page's listing according to ExportOptions (dir, format, headers policy).
/// Returns the final path written to.
pub fn write_export(
    export: &ExportOptions,
    page: PageKind,
    data: &DataSet,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path(page);
    write_export_to(&path, export, data)?;
    Ok(path)
}

/// Same as [`write_export`] but to an explicit path (CLI `--out`).
pub fn write_export_to(
    path: &Path,
    export: &ExportOptions,
    data: &DataSet,
) -> Result<(), Box<dyn std::error::Error>> {
    ensure_parent(path)?;
    let contents = to_export_string(data, export.include_headers, export.format.delim());
    fs::write(path, contents)?;
    logf!("Export: Wrote {} rows={}", path.display(), data.row_count());
    Ok(())
}

/// Write rendered page markup.
pub fn write_html(path: &Path, html: &str) -> Result<(), Box<dyn std::error::Error>> {
    ensure_parent(path)?;
    fs::write(path, html)?;
    logf!("Render: Wrote {}", path.display());
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
