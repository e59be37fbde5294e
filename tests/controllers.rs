// tests/controllers.rs
use std::sync::atomic::{AtomicUsize, Ordering};

use acervo::{
    data::{CalendarFilter, ProjectFilter},
    error::SheetError,
    pages::{
        messages, AdvisorsPage, CalendarPage, PageState, ProjectDetailPage, RepositoryPage,
    },
    sheets::{Row, SheetKind, SheetLoader},
    store::Session,
};

/// Serves fixed rows per sheet and counts every request.
#[derive(Default)]
struct Counting {
    projects: Vec<Row>,
    calendar: Vec<Row>,
    advisors: Vec<Row>,
    fail: bool,
    calls: AtomicUsize,
}

impl Counting {
    fn calls(&self) -> usize { self.calls.load(Ordering::SeqCst) }
}

impl SheetLoader for Counting {
    fn load(&self, sheet: SheetKind) -> Result<Vec<Row>, SheetError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(SheetError::Network { status: 500, url: format!("fake://{sheet}") });
        }
        Ok(match sheet {
            SheetKind::Projects => self.projects.clone(),
            SheetKind::Calendar => self.calendar.clone(),
            SheetKind::Advisors => self.advisors.clone(),
        })
    }
}

fn row(cells: &[(&str, &str)]) -> Row {
    cells.iter().copied().collect()
}

fn with_projects() -> Counting {
    Counting {
        projects: vec![
            row(&[("ID", "1"), ("Ano", "2022"), ("Título", "Pontes"), ("Autor", "Ana")]),
            row(&[("ID", "2"), ("Ano", "2023"), ("Título", "Sistema X"), ("Autor", "J. Silva")]),
            row(&[("Título", "Rascunho sem id")]),
        ],
        ..Default::default()
    }
}

#[test]
fn sheet_is_fetched_once_per_session() {
    let loader = with_projects();
    let mut session = Session::new();

    let repo = RepositoryPage::load(&mut session, &loader, None);
    assert_eq!(repo.state().label(), "ready");
    assert_eq!(loader.calls(), 1);

    // Detail shares the projects sheet.
    let detail = ProjectDetailPage::load(&mut session, &loader, None, Some("2"));
    assert_eq!(detail.project().map(|p| p.titulo.as_str()), Some("Sistema X"));
    let again = RepositoryPage::load(&mut session, &loader, None);
    assert_eq!(again, repo);
    assert_eq!(loader.calls(), 1);
}

#[test]
fn listing_is_sorted_and_drops_rows_without_id() {
    let loader = with_projects();
    let mut session = Session::new();
    let repo = RepositoryPage::load(&mut session, &loader, None);

    let listing = repo.state().ready().unwrap();
    assert_eq!(listing.total(), 2);
    let ids: Vec<&str> = listing.visible().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "1"]);
    assert_eq!(listing.options().years, vec!["2023", "2022"]);
}

#[test]
fn filter_that_matches_nothing_stays_ready_with_empty_panel() {
    let loader = with_projects();
    let mut session = Session::new();
    let mut repo = RepositoryPage::load(&mut session, &loader, None);

    assert!(repo.set_filter(ProjectFilter { term: "inexistente".into(), ..Default::default() }));
    assert_eq!(repo.state().label(), "ready");
    let panels = repo.panels();
    assert!(panels.content);
    assert!(panels.empty);
    assert!(!panels.loading);
    assert_eq!(panels.error, None);

    assert!(repo.set_filter(ProjectFilter::default()));
    assert!(!repo.panels().empty);
}

#[test]
fn filter_before_ready_is_ignored() {
    let mut repo = RepositoryPage::new();
    assert!(repo.state().is_loading());
    assert!(!repo.set_filter(ProjectFilter { year: "2023".into(), ..Default::default() }));
    assert!(repo.panels().loading);

    let mut cal = CalendarPage::new();
    assert!(!cal.set_filter(CalendarFilter::default()));
}

#[test]
fn empty_sheet_settles_empty_and_is_not_refetched() {
    let loader = Counting::default();
    let mut session = Session::new();

    let cal = CalendarPage::load(&mut session, &loader, None);
    assert_eq!(cal.state(), &PageState::Empty);
    let panels = cal.panels();
    assert!(panels.empty && !panels.content && !panels.loading);

    let adv = AdvisorsPage::load(&mut session, &loader, None);
    assert_eq!(adv.state().label(), "empty");

    let _ = CalendarPage::load(&mut session, &loader, None);
    assert_eq!(loader.calls(), 2);
}

#[test]
fn failure_shows_fixed_message_and_is_retried_next_visit() {
    let loader = Counting { fail: true, ..Default::default() };
    let mut session = Session::new();

    let repo = RepositoryPage::load(&mut session, &loader, None);
    assert_eq!(repo.state().error(), Some(messages::REPOSITORY_ERROR));
    let panels = repo.panels();
    assert_eq!(panels.error, Some(messages::REPOSITORY_ERROR));
    assert!(!panels.loading && !panels.content && !panels.empty);

    let cal = CalendarPage::load(&mut session, &loader, None);
    assert_eq!(cal.state().error(), Some(messages::CALENDAR_ERROR));
    let adv = AdvisorsPage::load(&mut session, &loader, None);
    assert_eq!(adv.state().error(), Some(messages::ADVISORS_ERROR));

    let _ = RepositoryPage::load(&mut session, &loader, None);
    assert_eq!(loader.calls(), 4);
    assert!(!session.is_loaded(SheetKind::Projects));
}

#[test]
fn detail_without_id_does_not_fetch() {
    let loader = with_projects();
    let mut session = Session::new();

    for id in [None, Some(""), Some("   ")] {
        let page = ProjectDetailPage::load(&mut session, &loader, None, id);
        assert_eq!(page.state().error(), Some(messages::PROJECT_NO_ID));
    }
    assert_eq!(loader.calls(), 0);
}

#[test]
fn detail_unknown_id_and_failure_messages_differ() {
    let loader = with_projects();
    let mut session = Session::new();
    let page = ProjectDetailPage::load(&mut session, &loader, None, Some("99"));
    assert_eq!(page.state().error(), Some(messages::PROJECT_NOT_FOUND));

    let broken = Counting { fail: true, ..Default::default() };
    let page = ProjectDetailPage::load(&mut Session::new(), &broken, None, Some("1"));
    assert_eq!(page.state().error(), Some(messages::PROJECT_ERROR));
}

#[test]
fn detail_id_is_trimmed() {
    let loader = with_projects();
    let page = ProjectDetailPage::load(&mut Session::new(), &loader, None, Some(" 1 "));
    assert_eq!(page.project().map(|p| p.autor.as_str()), Some("Ana"));
}

#[test]
fn calendar_groups_follow_sort_order() {
    let loader = Counting {
        calendar: vec![
            row(&[("Ano", "2023"), ("Semestre", "2"), ("Data", "2023-09-01"), ("Atividade", "Banca")]),
            row(&[("Ano", "2024"), ("Semestre", "1"), ("Data", "2024-05-10"), ("Atividade", "Entrega final")]),
            row(&[("Ano", "2024"), ("Semestre", "1"), ("Data", "2024-03-01"), ("Atividade", "Proposta")]),
        ],
        ..Default::default()
    };
    let mut cal = CalendarPage::load(&mut Session::new(), &loader, None);

    let agenda = cal.state().ready().unwrap();
    let groups: Vec<(String, usize)> = agenda.groups().into_iter().map(|(g, es)| (g, es.len())).collect();
    assert_eq!(groups, vec![("2024 - 1º semestre".into(), 2), ("2023 - 2º semestre".into(), 1)]);

    assert!(cal.set_filter(CalendarFilter { year: "2023".into(), ..Default::default() }));
    assert_eq!(cal.state().ready().unwrap().visible_count(), 1);
}

#[test]
fn advisors_are_listed_by_name() {
    let loader = Counting {
        advisors: vec![row(&[("Nome", "Óscar")]), row(&[("Nome", "Bia")]), row(&[("Email", "sem@nome")])],
        ..Default::default()
    };
    let page = AdvisorsPage::load(&mut Session::new(), &loader, None);
    let names: Vec<&str> = page
        .state()
        .ready()
        .unwrap()
        .advisors()
        .iter()
        .map(|a| a.nome.as_str())
        .collect();
    assert_eq!(names, vec!["Bia", "Óscar"]);
}
