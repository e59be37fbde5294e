// tests/filtering.rs
use acervo::{
    data::{self, CalendarFilter, ProjectFilter},
    specs::{CalendarEvent, Project},
};

fn project(id: &str, ano: &str, titulo: &str, autor: &str, orientador: &str) -> Project {
    Project {
        id: id.into(),
        ano: ano.into(),
        titulo: titulo.into(),
        autor: autor.into(),
        orientador: orientador.into(),
        ..Default::default()
    }
}

fn sample() -> Vec<Project> {
    vec![
        project("1", "2023", "Sistema X", "J. Silva", "Profa. Lima"),
        project("2", "2022", "Pontes", "Ana Souza", "Prof. Reis"),
        project("3", "2023", "Drenagem urbana", "Carlos Silveira", "Profa. Lima"),
        project("4", "", "Sem ano", "Bia", ""),
    ]
}

#[test]
fn year_filter_selects_exact_year() {
    let ps = vec![project("a", "2023", "T1", "", ""), project("b", "2022", "T2", "", "")];
    let f = ProjectFilter { year: "2023".into(), ..Default::default() };
    assert_eq!(data::filter_projects(&ps, &f), vec![0]);
}

#[test]
fn search_is_case_insensitive_substring() {
    let ps = sample();
    let f = ProjectFilter { term: "silva".into(), ..Default::default() };
    assert_eq!(data::filter_projects(&ps, &f), vec![0]);

    let f = ProjectFilter { term: "  SILV ".into(), ..Default::default() };
    assert_eq!(data::filter_projects(&ps, &f), vec![0, 2]);

    // advisor names are searchable too
    let f = ProjectFilter { term: "lima".into(), ..Default::default() };
    assert_eq!(data::filter_projects(&ps, &f), vec![0, 2]);
}

#[test]
fn adding_constraints_never_grows_the_result() {
    let ps = sample();
    let steps = [
        ProjectFilter::default(),
        ProjectFilter { year: "2023".into(), ..Default::default() },
        ProjectFilter { year: "2023".into(), advisor: "Profa. Lima".into(), ..Default::default() },
        ProjectFilter { year: "2023".into(), advisor: "Profa. Lima".into(), term: "sistema".into(), ..Default::default() },
        ProjectFilter {
            year: "2023".into(),
            advisor: "Profa. Lima".into(),
            term: "sistema".into(),
            author: "Ana Souza".into(),
        },
    ];
    let sizes: Vec<usize> = steps.iter().map(|f| data::filter_projects(&ps, f).len()).collect();
    assert_eq!(sizes, vec![4, 2, 2, 1, 0]);
    assert!(sizes.windows(2).all(|w| w[1] <= w[0]));
}

#[test]
fn sorting_is_stable_and_idempotent() {
    let mut ps = sample();
    ps.push(project("5", "2023", "sistema x", "Outro", ""));
    data::sort_projects(&mut ps);
    let once: Vec<String> = ps.iter().map(|p| p.id.clone()).collect();
    data::sort_projects(&mut ps);
    let twice: Vec<String> = ps.iter().map(|p| p.id.clone()).collect();
    assert_eq!(once, twice);
    // same folded title: raw string breaks the tie ("Sistema X" < "sistema x")
    assert_eq!(once, vec!["3", "1", "5", "2", "4"]);
}

#[test]
fn accents_do_not_push_titles_to_the_end() {
    let mut ps = vec![
        project("1", "2023", "Zoneamento", "", ""),
        project("2", "2023", "Érosão costeira", "", ""),
        project("3", "2023", "Aterro", "", ""),
    ];
    data::sort_projects(&mut ps);
    let ids: Vec<&str> = ps.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "2", "1"]);
}

#[test]
fn calendar_filter_is_monotonic_too() {
    let ev = |ano: &str, sem: &str, tipo: &str| CalendarEvent {
        ano: ano.into(),
        semestre: sem.into(),
        data: "x".into(),
        tipo: tipo.into(),
        ..Default::default()
    };
    let es = vec![ev("2024", "1", "Prazo"), ev("2024", "2", "Banca"), ev("2023", "1", "Prazo")];
    let a = data::filter_events(&es, &CalendarFilter { year: "2024".into(), ..Default::default() });
    let b = data::filter_events(&es, &CalendarFilter { year: "2024".into(), term: "prazo".into(), ..Default::default() });
    assert_eq!(a, vec![0, 1]);
    assert_eq!(b, vec![0]);
}
