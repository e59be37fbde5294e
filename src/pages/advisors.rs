// src/pages/advisors.rs
use super::{messages, PageState, Panels};
use crate::{
    data,
    error::SheetError,
    progress::Progress,
    sheets::SheetLoader,
    specs::Advisor,
    store::{DataSet, Session},
};

/// Advisors sorted by name. No filters on this page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Directory {
    advisors: Vec<Advisor>,
}

impl Directory {
    pub fn new(advisors: &[Advisor]) -> Self {
        let mut advisors = advisors.to_vec();
        data::sort_advisors(&mut advisors);
        Self { advisors }
    }

    pub fn advisors(&self) -> &[Advisor] { &self.advisors }

    pub fn dataset(&self) -> DataSet {
        DataSet::from_records(&self.advisors)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdvisorsPage {
    state: PageState<Directory>,
}

impl AdvisorsPage {
    pub fn new() -> Self { Self::default() }

    pub fn load(
        session: &mut Session,
        loader: &dyn SheetLoader,
        progress: Option<&mut dyn Progress>,
    ) -> Self {
        let result = session.advisors(loader, progress);
        Self::finish(result.as_ref().copied())
    }

    pub fn finish(result: Result<&[Advisor], &SheetError>) -> Self {
        Self { state: PageState::resolve(result, messages::ADVISORS_ERROR, Directory::new) }
    }

    pub fn state(&self) -> &PageState<Directory> { &self.state }

    pub fn panels(&self) -> Panels<'_> {
        Panels::of(&self.state, |_| true)
    }
}
