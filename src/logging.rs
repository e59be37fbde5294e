// src/logging.rs
//! File logging for both front ends.
//!
//! The `logf!` / `logd!` / `logw!` / `loge!` macros forward to the `log` facade,
//! so they are silent until [`init`] has installed the file logger. Tests never
//! call `init` and therefore never touch the disk.
//!
//! Lines look like `Area: message key=value`, e.g.
//! `Fetch: OK sheet=Projetos rows=42`.

use std::path::{Path, PathBuf};

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use once_cell::sync::OnceCell;

const LOG_FILE_BASENAME: &str = "acervo";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 2 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

static LOGGER: OnceCell<(PathBuf, LoggerHandle)> = OnceCell::new();

/// Start the file logger in `dir` at `level` (trace|debug|info|warn|error).
///
/// Calling it again with the same directory is a no-op; a different directory
/// is rejected.
pub fn init(level: &str, dir: &Path) -> Result<(), String> {
    let level = normalize_level(level)?;

    if let Some((active, _)) = LOGGER.get() {
        if active == dir {
            return Ok(());
        }
        return Err(format!(
            "logging already initialized at `{}`; refusing to switch to `{}`",
            active.display(),
            dir.display()
        ));
    }

    let (active, _) = LOGGER.get_or_try_init(|| -> Result<_, String> {
        std::fs::create_dir_all(dir)
            .map_err(|e| format!("failed to create log directory `{}`: {e}", dir.display()))?;

        let handle = Logger::try_with_str(level)
            .map_err(|e| format!("invalid log level `{level}`: {e}"))?
            .log_to_file(FileSpec::default().directory(dir).basename(LOG_FILE_BASENAME))
            .rotate(
                Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(MAX_LOG_FILES),
            )
            .write_mode(WriteMode::BufferAndFlush)
            .append()
            .format_for_files(flexi_logger::detailed_format)
            .start()
            .map_err(|e| format!("failed to start logger: {e}"))?;

        Ok((dir.to_path_buf(), handle))
    })?;

    log::info!(
        "Init: logging level={} dir={} version={}",
        level,
        active.display(),
        env!("CARGO_PKG_VERSION")
    );
    Ok(())
}

/// `debug` for debug builds, `info` otherwise.
pub fn default_level() -> &'static str {
    if cfg!(debug_assertions) { "debug" } else { "info" }
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::log::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::log::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::log::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::log::error!($($arg)*)
    };
}
