// src/config/consts.rs

// Sheet source
pub const SPREADSHEET_ID: &str = "1WREleFc-FAj-4w1RiWwNEsgB_ZNbmjShe4377HoXx5g";
pub const BASE_URL: &str = "https://docs.google.com";

// Sheet (tab) names
pub const SHEET_PROJECTS: &str = "Projetos";
pub const SHEET_CALENDAR: &str = "Calendario";
pub const SHEET_ADVISORS: &str = "Orientadores";

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_SUBDIR: &str = "logs";
pub const CONFIG_FILE: &str = "acervo.cfg";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";

// Links into the hosted site
pub const DETAIL_PAGE: &str = "projeto.html";

// Drive share links → direct thumbnail
pub const DRIVE_HOST: &str = "drive.google.com";
pub const DRIVE_THUMBNAIL_WIDTH: &str = "w1000";
