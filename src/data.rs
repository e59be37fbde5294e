// src/data.rs
//
// In-memory queries over cached records: filters, orderings, and the value
// lists that populate the filter controls.
//
// - Filters are plain values; `matches` is a pure function of filter + record.
// - `filter_*` return row indices into the slice they were given, in slice order,
//   so a slice sorted once stays sorted under any filter.
// - Orderings are total and `sort_by` is stable, so sorting twice changes nothing.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::core::collate;
use crate::specs::{Advisor, CalendarEvent, Project};

/* ---------------- Projects ---------------- */

/// Repository listing controls. Empty string = no constraint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub year: String,
    pub author: String,
    pub advisor: String,
    pub term: String,
}

impl ProjectFilter {
    pub fn is_empty(&self) -> bool {
        self.year.is_empty() && self.author.is_empty() && self.advisor.is_empty() && self.term.trim().is_empty()
    }

    /// All active criteria must hold.
    pub fn matches(&self, p: &Project) -> bool {
        if !self.year.is_empty() && p.ano != self.year { return false; }
        if !self.author.is_empty() && p.autor != self.author { return false; }
        if !self.advisor.is_empty() && p.orientador != self.advisor { return false; }

        let term = self.term.trim().to_lowercase();
        if !term.is_empty() && !p.search_haystack().contains(&term) {
            return false;
        }
        true
    }
}

pub fn filter_projects(projects: &[Project], filter: &ProjectFilter) -> Vec<usize> {
    projects
        .iter()
        .enumerate()
        .filter(|(_, p)| filter.matches(p))
        .map(|(ix, _)| ix)
        .collect()
}

/// Year descending, then title ascending.
pub fn project_order(a: &Project, b: &Project) -> Ordering {
    b.ano
        .cmp(&a.ano)
        .then_with(|| collate::compare(&a.titulo, &b.titulo))
}

pub fn sort_projects(projects: &mut [Project]) {
    projects.sort_by(project_order);
}

/// Distinct values feeding the repository selections.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectOptions {
    /// Descending.
    pub years: Vec<String>,
    pub authors: Vec<String>,
    pub advisors: Vec<String>,
}

pub fn project_options(projects: &[Project]) -> ProjectOptions {
    let mut years = distinct(projects.iter().map(|p| p.ano.as_str()));
    years.sort_by(|a, b| b.cmp(a));

    let mut authors = distinct(projects.iter().map(|p| p.autor.as_str()));
    authors.sort_by(|a, b| collate::compare(a, b));

    let mut advisors = distinct(projects.iter().map(|p| p.orientador.as_str()));
    advisors.sort_by(|a, b| collate::compare(a, b));

    ProjectOptions { years, authors, advisors }
}

/* ---------------- Calendar ---------------- */

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CalendarFilter {
    pub year: String,
    pub semester: String,
    pub term: String,
}

impl CalendarFilter {
    pub fn is_empty(&self) -> bool {
        self.year.is_empty() && self.semester.is_empty() && self.term.trim().is_empty()
    }

    pub fn matches(&self, e: &CalendarEvent) -> bool {
        if !self.year.is_empty() && e.ano != self.year { return false; }
        if !self.semester.is_empty() && e.semestre != self.semester { return false; }

        let term = self.term.trim().to_lowercase();
        if !term.is_empty() && !e.search_haystack().contains(&term) {
            return false;
        }
        true
    }
}

pub fn filter_events(events: &[CalendarEvent], filter: &CalendarFilter) -> Vec<usize> {
    events
        .iter()
        .enumerate()
        .filter(|(_, e)| filter.matches(e))
        .map(|(ix, _)| ix)
        .collect()
}

/// Year descending, semester ascending, date ascending.
pub fn event_order(a: &CalendarEvent, b: &CalendarEvent) -> Ordering {
    b.ano
        .cmp(&a.ano)
        .then_with(|| a.semestre.cmp(&b.semestre))
        .then_with(|| a.data.cmp(&b.data))
}

pub fn sort_events(events: &mut [CalendarEvent]) {
    events.sort_by(event_order);
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CalendarOptions {
    /// Descending.
    pub years: Vec<String>,
    /// Ascending.
    pub semesters: Vec<String>,
}

pub fn calendar_options(events: &[CalendarEvent]) -> CalendarOptions {
    let mut years = distinct(events.iter().map(|e| e.ano.as_str()));
    years.sort_by(|a, b| b.cmp(a));
    let semesters = distinct(events.iter().map(|e| e.semestre.as_str()));
    CalendarOptions { years, semesters }
}

/* ---------------- Advisors ---------------- */

pub fn advisor_order(a: &Advisor, b: &Advisor) -> Ordering {
    collate::compare(&a.nome, &b.nome)
}

pub fn sort_advisors(advisors: &mut [Advisor]) {
    advisors.sort_by(advisor_order);
}

/* ---------------- helpers ---------------- */

// Non-empty distinct values, ascending byte order (callers re-sort as needed).
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, ano: &str, titulo: &str) -> Project {
        Project { id: s!(id), ano: s!(ano), titulo: s!(titulo), ..Default::default() }
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let ps = vec![project("1", "2023", "A"), project("2", "", "")];
        assert!(ProjectFilter::default().is_empty());
        assert_eq!(filter_projects(&ps, &ProjectFilter::default()), vec![0, 1]);
    }

    #[test]
    fn whitespace_only_term_is_no_constraint() {
        let ps = vec![project("1", "2023", "A")];
        let f = ProjectFilter { term: s!("   "), ..Default::default() };
        assert!(f.is_empty());
        assert_eq!(filter_projects(&ps, &f), vec![0]);
    }

    #[test]
    fn projects_sort_year_desc_then_title() {
        let mut ps = vec![
            project("1", "2022", "Zeta"),
            project("2", "2023", "beta"),
            project("3", "2023", "Alfa"),
            project("4", "", "Sem ano"),
        ];
        sort_projects(&mut ps);
        let ids: Vec<&str> = ps.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "2", "1", "4"]);
    }

    #[test]
    fn options_are_distinct_and_ordered() {
        let mut a = project("1", "2022", "x");
        a.autor = s!("Bruno");
        a.orientador = s!("Éder");
        let mut b = project("2", "2023", "y");
        b.autor = s!("ana");
        b.orientador = s!("Carla");
        let mut c = project("3", "2023", "z");
        c.autor = s!("Bruno");
        let opts = project_options(&[a, b, c]);
        assert_eq!(opts.years, vec!["2023", "2022"]);
        assert_eq!(opts.authors, vec!["ana", "Bruno"]);
        assert_eq!(opts.advisors, vec!["Carla", "Éder"]);
    }

    #[test]
    fn events_sort_year_desc_semester_then_date() {
        let ev = |ano: &str, sem: &str, data: &str| CalendarEvent {
            ano: s!(ano), semestre: s!(sem), data: s!(data), ..Default::default()
        };
        let mut es = vec![
            ev("2023", "2", "2023-09-01"),
            ev("2024", "2", "2024-08-01"),
            ev("2024", "1", "2024-05-10"),
            ev("2024", "1", "2024-03-01"),
        ];
        sort_events(&mut es);
        let dates: Vec<&str> = es.iter().map(|e| e.data.as_str()).collect();
        assert_eq!(dates, vec!["2024-03-01", "2024-05-10", "2024-08-01", "2023-09-01"]);
    }

    #[test]
    fn calendar_filter_combines_semester_and_term() {
        let es = vec![
            CalendarEvent { ano: s!("2024"), semestre: s!("1"), data: s!("a"), atividade: s!("Entrega da Proposta"), ..Default::default() },
            CalendarEvent { ano: s!("2024"), semestre: s!("2"), data: s!("b"), atividade: s!("Entrega final"), ..Default::default() },
            CalendarEvent { ano: s!("2024"), semestre: s!("1"), data: s!("c"), tipo: s!("Banca"), ..Default::default() },
        ];
        let f = CalendarFilter { semester: s!("1"), term: s!("ENTREGA"), ..Default::default() };
        assert_eq!(filter_events(&es, &f), vec![0]);
        let opts = calendar_options(&es);
        assert_eq!(opts.years, vec!["2024"]);
        assert_eq!(opts.semesters, vec!["1", "2"]);
    }

    #[test]
    fn advisors_sort_by_folded_name() {
        let a = |n: &str| Advisor { nome: s!(n), ..Default::default() };
        let mut v = vec![a("Óscar"), a("nádia"), a("Bia")];
        sort_advisors(&mut v);
        let names: Vec<&str> = v.iter().map(|x| x.nome.as_str()).collect();
        assert_eq!(names, vec!["Bia", "nádia", "Óscar"]);
    }
}
