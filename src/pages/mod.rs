// src/pages/mod.rs
//! Page controllers.
//!
//! Every page walks the same state machine, once per session:
//!
//! ```text
//! Loading ──fetch ok, 0 records──▶ Empty
//!    │    ──fetch ok, records────▶ Ready ──filter change──▶ Ready
//!    └────fetch/parse failure────▶ Error(fixed message)
//! ```
//!
//! There is no way back to `Loading`. Errors are logged with their cause and shown
//! to the user only as the page's fixed message.
//!
//! Controllers have two entry points: `load` (blocking, drives the session; used by
//! the CLI and tests) and `finish` (takes an already-finished load; used by the GUI,
//! which fetches on a worker thread).
pub mod advisors;
pub mod calendar;
pub mod project_detail;
pub mod repository;

pub use advisors::AdvisorsPage;
pub use calendar::CalendarPage;
pub use project_detail::ProjectDetailPage;
pub use repository::RepositoryPage;

use crate::error::SheetError;

/// User-facing texts (pt-BR), fixed per page.
pub mod messages {
    pub const LOADING: &str = "Carregando…";

    pub const REPOSITORY_ERROR: &str =
        "Ocorreu um erro ao carregar o repositório. Verifique a configuração da planilha e tente novamente.";
    pub const REPOSITORY_EMPTY: &str = "Nenhum trabalho encontrado.";

    pub const PROJECT_NO_ID: &str =
        "Nenhum identificador de trabalho foi informado. Volte ao repositório e selecione um trabalho.";
    pub const PROJECT_NOT_FOUND: &str =
        "Não foi possível encontrar este trabalho. Verifique se o link está correto ou volte ao repositório.";
    pub const PROJECT_ERROR: &str =
        "Ocorreu um erro ao carregar os dados do trabalho. Verifique a configuração da planilha e tente novamente.";

    pub const CALENDAR_ERROR: &str =
        "Ocorreu um erro ao carregar o calendário. Verifique a configuração da planilha e tente novamente.";
    pub const CALENDAR_EMPTY: &str = "Nenhuma atividade cadastrada no calendário.";

    pub const ADVISORS_ERROR: &str =
        "Ocorreu um erro ao carregar a lista de orientadores. Verifique a configuração da planilha e tente novamente.";
    pub const ADVISORS_EMPTY: &str = "Nenhum orientador cadastrado.";
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageState<T> {
    Loading,
    Error(String),
    Empty,
    Ready(T),
}

impl<T> Default for PageState<T> {
    fn default() -> Self { PageState::Loading }
}

impl<T> PageState<T> {
    /// Settle a finished load. Zero records → `Empty`; otherwise `build` the ready view.
    pub fn resolve<R>(
        result: Result<&[R], &SheetError>,
        error_msg: &str,
        build: impl FnOnce(&[R]) -> T,
    ) -> Self {
        match result {
            Err(e) => {
                loge!("Page: Load failed: {}", e);
                PageState::Error(s!(error_msg))
            }
            Ok([]) => PageState::Empty,
            Ok(records) => PageState::Ready(build(records)),
        }
    }

    pub fn is_loading(&self) -> bool { matches!(self, PageState::Loading) }

    pub fn ready(&self) -> Option<&T> {
        match self {
            PageState::Ready(v) => Some(v),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            PageState::Ready(v) => Some(v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PageState::Error(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PageState::Loading => "loading",
            PageState::Error(_) => "error",
            PageState::Empty => "empty",
            PageState::Ready(_) => "ready",
        }
    }
}

/// Which panels of a page are visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Panels<'a> {
    pub loading: bool,
    pub error: Option<&'a str>,
    pub empty: bool,
    pub content: bool,
}

impl<'a> Panels<'a> {
    /// `has_results` only matters in `Ready`: a filter that matches nothing shows
    /// the empty panel next to the (empty) content.
    pub fn of<T>(state: &'a PageState<T>, has_results: impl FnOnce(&T) -> bool) -> Self {
        match state {
            PageState::Loading => Panels { loading: true, error: None, empty: false, content: false },
            PageState::Error(msg) => Panels { loading: false, error: Some(msg), empty: false, content: false },
            PageState::Empty => Panels { loading: false, error: None, empty: true, content: false },
            PageState::Ready(v) => Panels { loading: false, error: None, empty: !has_results(v), content: true },
        }
    }
}
