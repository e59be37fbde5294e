// src/specs/mod.rs
//! # Record “specs” module
//!
//! One spec per sheet. Each spec owns the **fixed record shape** for its sheet and
//! the **synonym lists** that map whatever headers the spreadsheet editors typed onto
//! that shape.
//!
//! ## What lives here
//! - Record structs (`Project`, `CalendarEvent`, `Advisor`), all-`String` fields.
//! - Per-field synonym lists, ordered: earlier names win.
//! - `normalize(&Row)`: pure, no I/O. Every field is present; missing → `""`.
//! - `is_listed()`: the identity rule deciding whether a record survives collection.
//!
//! ## What does **not** live here
//! - Fetching (`sheets`), caching (`store`), filtering/sorting (`data`), markup (`render`).
//!
//! ## Typical call chain
//! ```text
//! pages::<page> → store::Session → collect::<sheet>() → sheets::SheetLoader::load()
//!                                                    ↘ specs::<sheet>::normalize()
//! ```
pub mod advisors;
pub mod calendar;
pub mod projects;

pub use advisors::Advisor;
pub use calendar::CalendarEvent;
pub use projects::Project;

use crate::sheets::Row;

/// First synonym whose cell is non-empty after trimming, trimmed; else `""`.
pub fn first_present(row: &Row, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|k| row.get(k))
        .map(str::trim)
        .find(|v| !v.is_empty())
        .map(String::from)
        .unwrap_or_default()
}

/// Header names in the order a record's fields are displayed/exported.
pub trait Record {
    fn headers() -> &'static [&'static str];
    fn to_row(&self) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earlier_synonym_wins_and_blanks_are_skipped() {
        let row: Row = [("Titulo", "second"), ("Título", "   "), ("titulo", "third")]
            .into_iter()
            .collect();
        assert_eq!(first_present(&row, &["Título", "Titulo", "titulo"]), "second");
    }

    #[test]
    fn nothing_matches_gives_empty() {
        let row: Row = [("X", "1")].into_iter().collect();
        assert_eq!(first_present(&row, &["Y", "Z"]), "");
    }

    #[test]
    fn values_are_trimmed() {
        let row: Row = [("Ano", "  2023 \n")].into_iter().collect();
        assert_eq!(first_present(&row, &["Ano"]), "2023");
    }
}
