// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;
use crate::sheets::SheetKind;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub export: ExportOptions,
    pub log_level: String,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            source: SourceOptions::default(),
            export: ExportOptions::default(),
            log_level: s!(crate::logging::default_level()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Repository,
    ProjectDetail,
    Calendar,
    Advisors,
}

impl PageKind {
    /// Root element id the hosted page carries for this controller.
    pub fn root_id(self) -> &'static str {
        match self {
            PageKind::Repository    => "repository-page",
            PageKind::ProjectDetail => "project-detail-page",
            PageKind::Calendar      => "calendar-page",
            PageKind::Advisors      => "advisors-page",
        }
    }

    /// Which sheet feeds the page.
    pub fn sheet(self) -> SheetKind {
        match self {
            PageKind::Repository | PageKind::ProjectDetail => SheetKind::Projects,
            PageKind::Calendar => SheetKind::Calendar,
            PageKind::Advisors => SheetKind::Advisors,
        }
    }

    pub fn file_stem(self) -> &'static str {
        match self {
            PageKind::Repository    => "repositorio",
            PageKind::ProjectDetail => "projeto",
            PageKind::Calendar      => "calendario",
            PageKind::Advisors      => "orientadores",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub spreadsheet_id: String,
    pub base_url: String,
    pub sheet_projects: String,
    pub sheet_calendar: String,
    pub sheet_advisors: String,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            spreadsheet_id: s!(SPREADSHEET_ID),
            base_url: s!(BASE_URL),
            sheet_projects: s!(SHEET_PROJECTS),
            sheet_calendar: s!(SHEET_CALENDAR),
            sheet_advisors: s!(SHEET_ADVISORS),
        }
    }
}

impl SourceOptions {
    /// Tab name inside the spreadsheet for a sheet kind.
    pub fn sheet_name(&self, sheet: SheetKind) -> &str {
        match sheet {
            SheetKind::Projects => &self.sheet_projects,
            SheetKind::Calendar => &self.sheet_calendar,
            SheetKind::Advisors => &self.sheet_advisors,
        }
    }

    /// `{base}/spreadsheets/d/{id}/gviz/tq?sheet={name}&headers=1`
    pub fn sheet_url(&self, sheet: SheetKind) -> String {
        format!(
            "{}/spreadsheets/d/{}/gviz/tq?sheet={}&headers=1",
            self.base_url.trim_end_matches('/'),
            self.spreadsheet_id,
            urlencoding::encode(self.sheet_name(sheet)),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    pub out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl ExportOptions {
    /// `<out_dir>/<page stem>.<ext>`
    pub fn out_path(&self, page: PageKind) -> PathBuf {
        self.out_dir.join(join!(page.file_stem(), ".", self.format.ext()))
    }
}
