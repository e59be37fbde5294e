// src/store.rs
//! In-memory state for one viewing session.
//!
//! - `Session`: the three sheet collections, each either not-yet-loaded (`None`)
//!   or loaded (`Some`, possibly empty). A loaded sheet is never fetched again.
//!   Failed loads are not cached; the page shows its error and stays there.
//! - `DataSet`: headers + rows projection used for the GUI tables, copy and export.
use crate::{
    collect,
    error::SheetError,
    progress::Progress,
    sheets::{SheetKind, SheetLoader},
    specs::{Advisor, CalendarEvent, Project, Record},
};

#[derive(Clone, Debug, Default)]
pub struct Session {
    projects: Option<Vec<Project>>,
    events: Option<Vec<CalendarEvent>>,
    advisors: Option<Vec<Advisor>>,
}

impl Session {
    pub fn new() -> Self { Self::default() }

    pub fn is_loaded(&self, sheet: SheetKind) -> bool {
        match sheet {
            SheetKind::Projects => self.projects.is_some(),
            SheetKind::Calendar => self.events.is_some(),
            SheetKind::Advisors => self.advisors.is_some(),
        }
    }

    /// Cached projects, fetching once if needed.
    pub fn projects(
        &mut self,
        loader: &dyn SheetLoader,
        progress: Option<&mut dyn Progress>,
    ) -> Result<&[Project], SheetError> {
        if self.projects.is_none() {
            self.projects = Some(collect::collect_projects(loader, progress)?);
        } else {
            logd!("Cache: Hit sheet={}", SheetKind::Projects);
        }
        Ok(self.projects.as_deref().unwrap_or_default())
    }

    pub fn events(
        &mut self,
        loader: &dyn SheetLoader,
        progress: Option<&mut dyn Progress>,
    ) -> Result<&[CalendarEvent], SheetError> {
        if self.events.is_none() {
            self.events = Some(collect::collect_events(loader, progress)?);
        } else {
            logd!("Cache: Hit sheet={}", SheetKind::Calendar);
        }
        Ok(self.events.as_deref().unwrap_or_default())
    }

    pub fn advisors(
        &mut self,
        loader: &dyn SheetLoader,
        progress: Option<&mut dyn Progress>,
    ) -> Result<&[Advisor], SheetError> {
        if self.advisors.is_none() {
            self.advisors = Some(collect::collect_advisors(loader, progress)?);
        } else {
            logd!("Cache: Hit sheet={}", SheetKind::Advisors);
        }
        Ok(self.advisors.as_deref().unwrap_or_default())
    }

    /// Store a collection loaded elsewhere (GUI worker thread).
    /// Ignored when the sheet is already loaded: the first load wins.
    pub fn store(&mut self, loaded: Loaded) {
        let sheet = loaded.sheet();
        if self.is_loaded(sheet) {
            logd!("Cache: Ignoring second load sheet={}", sheet);
            return;
        }
        match loaded {
            Loaded::Projects(v) => self.projects = Some(v),
            Loaded::Events(v) => self.events = Some(v),
            Loaded::Advisors(v) => self.advisors = Some(v),
        }
    }

    pub fn cached_projects(&self) -> Option<&[Project]> { self.projects.as_deref() }
    pub fn cached_events(&self) -> Option<&[CalendarEvent]> { self.events.as_deref() }
    pub fn cached_advisors(&self) -> Option<&[Advisor]> { self.advisors.as_deref() }
}

/// A freshly collected sheet, ready to move into a [`Session`].
#[derive(Clone, Debug)]
pub enum Loaded {
    Projects(Vec<Project>),
    Events(Vec<CalendarEvent>),
    Advisors(Vec<Advisor>),
}

impl Loaded {
    pub fn sheet(&self) -> SheetKind {
        match self {
            Loaded::Projects(_) => SheetKind::Projects,
            Loaded::Events(_) => SheetKind::Calendar,
            Loaded::Advisors(_) => SheetKind::Advisors,
        }
    }

    /// Collect `sheet` through `loader`.
    pub fn collect(
        sheet: SheetKind,
        loader: &dyn SheetLoader,
        progress: Option<&mut dyn Progress>,
    ) -> Result<Self, SheetError> {
        Ok(match sheet {
            SheetKind::Projects => Loaded::Projects(collect::collect_projects(loader, progress)?),
            SheetKind::Calendar => Loaded::Events(collect::collect_events(loader, progress)?),
            SheetKind::Advisors => Loaded::Advisors(collect::collect_advisors(loader, progress)?),
        })
    }
}

/// Headers + rows, the shape tables and exports consume.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn from_records<'a, T, I>(records: I) -> Self
    where
        T: Record + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        Self {
            headers: Some(T::headers().iter().map(|h| s!(*h)).collect()),
            rows: records.into_iter().map(|r| r.to_row()).collect(),
        }
    }

    pub fn row_count(&self) -> usize { self.rows.len() }

    pub fn header_count(&self) -> usize {
        self.headers.as_ref().map(|h| h.len()).unwrap_or(0)
    }
}
