// src/pages/project_detail.rs
//! Single-project view, selected by id. Shares the projects sheet with the
//! repository page, so a repository load earlier in the session is reused.
use super::{messages, PageState, Panels};
use crate::{
    error::SheetError,
    progress::Progress,
    sheets::SheetLoader,
    specs::Project,
    store::Session,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectDetailPage {
    state: PageState<Project>,
}

impl ProjectDetailPage {
    pub fn new() -> Self { Self::default() }

    /// Without an id nothing is fetched.
    pub fn load(
        session: &mut Session,
        loader: &dyn SheetLoader,
        progress: Option<&mut dyn Progress>,
        id: Option<&str>,
    ) -> Self {
        let Some(id) = normalize_id(id) else {
            return Self::missing_id();
        };
        let result = session.projects(loader, progress);
        Self::finish(Some(id), result.as_ref().copied())
    }

    pub fn finish(id: Option<&str>, result: Result<&[Project], &SheetError>) -> Self {
        let Some(id) = normalize_id(id) else {
            return Self::missing_id();
        };
        let state = match result {
            Err(e) => {
                loge!("Detail: Load failed id={}: {}", id, e);
                PageState::Error(s!(messages::PROJECT_ERROR))
            }
            Ok(projects) => match projects.iter().find(|p| p.id == id) {
                Some(p) => PageState::Ready(p.clone()),
                None => {
                    logw!("Detail: {}", SheetError::NotFound(s!(id)));
                    PageState::Error(s!(messages::PROJECT_NOT_FOUND))
                }
            },
        };
        Self { state }
    }

    fn missing_id() -> Self {
        logw!("Detail: No id supplied");
        Self { state: PageState::Error(s!(messages::PROJECT_NO_ID)) }
    }

    pub fn state(&self) -> &PageState<Project> { &self.state }

    pub fn project(&self) -> Option<&Project> { self.state.ready() }

    pub fn panels(&self) -> Panels<'_> {
        Panels::of(&self.state, |_| true)
    }
}

fn normalize_id(id: Option<&str>) -> Option<&str> {
    id.map(str::trim).filter(|v| !v.is_empty())
}
