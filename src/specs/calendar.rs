// src/specs/calendar.rs
//! Record spec for the calendar sheet (`Calendario`).
//!
//! No key column; duplicates are allowed. A row needs both `Ano` and `Data`
//! to be listed.

use super::{first_present, Record};
use crate::sheets::Row;

pub const ANO: &[&str] = &["Ano", "ano"];
pub const SEMESTRE: &[&str] = &["Semestre", "semestre"];
pub const DATA: &[&str] = &["Data", "data"];
pub const TIPO: &[&str] = &["Tipo", "tipo"];
pub const ATIVIDADE: &[&str] = &["Atividade", "Título", "Titulo"];
pub const DESCRICAO: &[&str] = &["Descrição", "Descricao", "descrição"];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CalendarEvent {
    pub ano: String,
    pub semestre: String,
    pub data: String,
    pub tipo: String,
    pub atividade: String,
    pub descricao: String,
}

pub fn normalize(row: &Row) -> CalendarEvent {
    CalendarEvent {
        ano: first_present(row, ANO),
        semestre: first_present(row, SEMESTRE),
        data: first_present(row, DATA),
        tipo: first_present(row, TIPO),
        atividade: first_present(row, ATIVIDADE),
        descricao: first_present(row, DESCRICAO),
    }
}

impl CalendarEvent {
    pub fn is_listed(&self) -> bool {
        !self.ano.is_empty() && !self.data.is_empty()
    }

    /// Group heading: `"2024 - 1º semestre"`, or just the year.
    pub fn group_label(&self) -> String {
        if self.semestre.is_empty() {
            self.ano.clone()
        } else {
            format!("{} - {}º semestre", self.ano, self.semestre)
        }
    }

    pub fn search_haystack(&self) -> String {
        [self.tipo.as_str(), self.atividade.as_str(), self.descricao.as_str()]
            .join(" ")
            .to_lowercase()
    }
}

impl Record for CalendarEvent {
    fn headers() -> &'static [&'static str] {
        &["Ano", "Semestre", "Data", "Tipo", "Atividade", "Descrição"]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.ano.clone(),
            self.semestre.clone(),
            self.data.clone(),
            self.tipo.clone(),
            self.atividade.clone(),
            self.descricao.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_falls_back_to_title_header() {
        let row: Row = [("Ano", "2024"), ("Data", "2024-03-01"), ("Título", "Entrega da proposta")]
            .into_iter()
            .collect();
        let ev = normalize(&row);
        assert_eq!(ev.atividade, "Entrega da proposta");
        assert!(ev.is_listed());
    }

    #[test]
    fn group_label_with_and_without_semester() {
        let mut ev = CalendarEvent { ano: s!("2024"), semestre: s!("1"), ..Default::default() };
        assert_eq!(ev.group_label(), "2024 - 1º semestre");
        ev.semestre.clear();
        assert_eq!(ev.group_label(), "2024");
    }

    #[test]
    fn needs_year_and_date() {
        let only_year = CalendarEvent { ano: s!("2024"), ..Default::default() };
        let only_date = CalendarEvent { data: s!("2024-03-01"), ..Default::default() };
        assert!(!only_year.is_listed());
        assert!(!only_date.is_listed());
    }
}
