// src/sheets.rs
//! Rows as they come off the sheet endpoint, and the loaders that fetch them.
use std::fmt;

use reqwest::blocking::Client;

use crate::{
    config::options::SourceOptions,
    core::{gviz, net},
    error::SheetError,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SheetKind {
    Projects,
    Calendar,
    Advisors,
}

impl fmt::Display for SheetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SheetKind::Projects => "projects",
            SheetKind::Calendar => "calendar",
            SheetKind::Advisors => "advisors",
        })
    }
}

/// One spreadsheet row: column label → cell text, in column order.
///
/// A repeated label keeps its first position and takes the later value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<(String, String)>,
}

impl Row {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, key: impl Into<String>, val: impl Into<String>) {
        let key = key.into();
        let val = val.into();
        match self.cells.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = val,
            None => self.cells.push((key, val)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.cells.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize { self.cells.len() }

    pub fn is_empty(&self) -> bool { self.cells.is_empty() }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}

/// Where rows come from. The HTTP loader is the real one; tests plug in fixtures.
pub trait SheetLoader: Send + Sync {
    fn load(&self, sheet: SheetKind) -> Result<Vec<Row>, SheetError>;
}

/// Fetches sheets from the gviz endpoint described by [`SourceOptions`].
#[derive(Clone)]
pub struct HttpLoader {
    client: Client,
    source: SourceOptions,
}

impl HttpLoader {
    pub fn new(source: SourceOptions) -> Result<Self, SheetError> {
        Ok(Self { client: net::client()?, source })
    }
}

impl SheetLoader for HttpLoader {
    fn load(&self, sheet: SheetKind) -> Result<Vec<Row>, SheetError> {
        let url = self.source.sheet_url(sheet);
        let body = net::http_get(&self.client, &url)?;
        let rows = gviz::parse(&body)?;
        logd!("Fetch: Parsed sheet={} rows={}", self.source.sheet_name(sheet), rows.len());
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_label_keeps_position_takes_last_value() {
        let mut row = Row::new();
        row.insert("Ano", "2022");
        row.insert("Título", "A");
        row.insert("Ano", "2023");
        assert_eq!(row.get("Ano"), Some("2023"));
        assert_eq!(row.keys().collect::<Vec<_>>(), vec!["Ano", "Título"]);
        assert_eq!(row.len(), 2);
    }
}
