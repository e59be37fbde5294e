// src/pages/repository.rs
use super::{messages, PageState, Panels};
use crate::{
    data::{self, ProjectFilter, ProjectOptions},
    error::SheetError,
    progress::Progress,
    sheets::SheetLoader,
    specs::Project,
    store::{DataSet, Session},
};

/// The ready view: sorted projects, selection lists, active filter and the
/// indices it lets through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Listing {
    projects: Vec<Project>,
    options: ProjectOptions,
    filter: ProjectFilter,
    visible: Vec<usize>,
}

impl Listing {
    pub fn new(projects: &[Project]) -> Self {
        let mut projects = projects.to_vec();
        data::sort_projects(&mut projects);
        let options = data::project_options(&projects);
        let visible = (0..projects.len()).collect();
        Self { projects, options, filter: ProjectFilter::default(), visible }
    }

    pub fn set_filter(&mut self, filter: ProjectFilter) {
        self.visible = data::filter_projects(&self.projects, &filter);
        self.filter = filter;
        logd!("Repository: Filter visible={} total={}", self.visible.len(), self.projects.len());
    }

    pub fn filter(&self) -> &ProjectFilter { &self.filter }
    pub fn options(&self) -> &ProjectOptions { &self.options }
    pub fn total(&self) -> usize { self.projects.len() }
    pub fn visible_count(&self) -> usize { self.visible.len() }
    pub fn has_results(&self) -> bool { !self.visible.is_empty() }

    /// Visible projects in display order.
    pub fn visible(&self) -> impl Iterator<Item = &Project> + '_ {
        self.visible.iter().map(|&ix| &self.projects[ix])
    }

    pub fn dataset(&self) -> DataSet {
        DataSet::from_records(self.visible())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RepositoryPage {
    state: PageState<Listing>,
}

impl RepositoryPage {
    pub fn new() -> Self { Self::default() }

    /// Fetch (once per session) and settle.
    pub fn load(
        session: &mut Session,
        loader: &dyn SheetLoader,
        progress: Option<&mut dyn Progress>,
    ) -> Self {
        let result = session.projects(loader, progress);
        Self::finish(result.as_ref().copied())
    }

    pub fn finish(result: Result<&[Project], &SheetError>) -> Self {
        Self { state: PageState::resolve(result, messages::REPOSITORY_ERROR, Listing::new) }
    }

    /// Apply a filter. Only meaningful in `Ready`; returns whether it applied.
    pub fn set_filter(&mut self, filter: ProjectFilter) -> bool {
        match self.state.ready_mut() {
            Some(listing) => {
                listing.set_filter(filter);
                true
            }
            None => false,
        }
    }

    pub fn state(&self) -> &PageState<Listing> { &self.state }

    pub fn panels(&self) -> Panels<'_> {
        Panels::of(&self.state, Listing::has_results)
    }
}
