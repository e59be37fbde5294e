// src/config/file.rs
//! `acervo.cfg`: flat `key=value` lines, `#` comments.
//!
//! ```text
//! spreadsheet_id=1WREleFc...
//! sheet_projects=Projetos
//! export_format=tsv
//! include_headers=1
//! ```
//!
//! Missing file or unreadable file → defaults. Unknown keys are logged and skipped.
use std::{fs, io, path::{Path, PathBuf}};

use super::options::{AppOptions, ExportFormat};

pub fn load(path: &Path) -> AppOptions {
    let mut opts = AppOptions::default();
    if !path.exists() {
        return opts;
    }
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            logw!("Config: Unreadable {} ({}), using defaults", path.display(), e);
            return opts;
        }
    };
    apply(&mut opts, &text);
    logf!("Config: Loaded {}", path.display());
    opts
}

/// Overlay every recognised `key=value` line of `text` onto `opts`.
pub fn apply(opts: &mut AppOptions, text: &str) {
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        let Some(eq) = line.find('=') else {
            logw!("Config: Ignoring line without '=': {}", line);
            continue;
        };
        let key = line[..eq].trim();
        let val = line[eq + 1..].trim();
        match key {
            "spreadsheet_id"  => opts.source.spreadsheet_id = s!(val),
            "base_url"        => opts.source.base_url = s!(val),
            "sheet_projects"  => opts.source.sheet_projects = s!(val),
            "sheet_calendar"  => opts.source.sheet_calendar = s!(val),
            "sheet_advisors"  => opts.source.sheet_advisors = s!(val),
            "log_level"       => opts.log_level = s!(val),
            "export_format"   => match ExportFormat::parse(val) {
                Some(f) => opts.export.format = f,
                None => logw!("Config: Unknown export_format {:?}", val),
            },
            "include_headers" => opts.export.include_headers = val == "1" || val.eq_ignore_ascii_case("true"),
            "out_dir"         => opts.export.out_dir = PathBuf::from(val),
            other             => logw!("Config: Unknown key {:?}", other),
        }
    }
}

pub fn save(path: &Path, opts: &AppOptions) -> io::Result<()> {
    let mut s = s!();
    s.push_str(&format!("spreadsheet_id={}\n", opts.source.spreadsheet_id));
    s.push_str(&format!("base_url={}\n", opts.source.base_url));
    s.push_str(&format!("sheet_projects={}\n", opts.source.sheet_projects));
    s.push_str(&format!("sheet_calendar={}\n", opts.source.sheet_calendar));
    s.push_str(&format!("sheet_advisors={}\n", opts.source.sheet_advisors));
    s.push_str(&format!("log_level={}\n", opts.log_level));
    s.push_str(&format!("export_format={}\n", opts.export.format.ext()));
    s.push_str(&format!("include_headers={}\n", if opts.export.include_headers { 1 } else { 0 }));
    s.push_str(&format!("out_dir={}\n", opts.export.out_dir.display()));
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_keeps_defaults_for_missing_keys() {
        let mut opts = AppOptions::default();
        apply(&mut opts, "# comment\nspreadsheet_id = XYZ\nexport_format=TSV\ninclude_headers=0\nbogus=1\nnot a pair\n");
        assert_eq!(opts.source.spreadsheet_id, "XYZ");
        assert_eq!(opts.export.format, ExportFormat::Tsv);
        assert!(!opts.export.include_headers);
        assert_eq!(opts.source.sheet_projects, "Projetos");
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("acervo.cfg");
        let mut opts = AppOptions::default();
        opts.source.sheet_advisors = s!("Docentes");
        opts.export.out_dir = PathBuf::from("exports");
        save(&path, &opts).unwrap();

        let back = load(&path);
        assert_eq!(back, opts);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let opts = load(Path::new("/definitely/not/here/acervo.cfg"));
        assert_eq!(opts, AppOptions::default());
    }
}
