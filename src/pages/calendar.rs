// src/pages/calendar.rs
use super::{messages, PageState, Panels};
use crate::{
    data::{self, CalendarFilter, CalendarOptions},
    error::SheetError,
    progress::Progress,
    sheets::SheetLoader,
    specs::CalendarEvent,
    store::{DataSet, Session},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Agenda {
    events: Vec<CalendarEvent>,
    options: CalendarOptions,
    filter: CalendarFilter,
    visible: Vec<usize>,
}

impl Agenda {
    pub fn new(events: &[CalendarEvent]) -> Self {
        let mut events = events.to_vec();
        data::sort_events(&mut events);
        let options = data::calendar_options(&events);
        let visible = (0..events.len()).collect();
        Self { events, options, filter: CalendarFilter::default(), visible }
    }

    pub fn set_filter(&mut self, filter: CalendarFilter) {
        self.visible = data::filter_events(&self.events, &filter);
        self.filter = filter;
        logd!("Calendar: Filter visible={} total={}", self.visible.len(), self.events.len());
    }

    pub fn filter(&self) -> &CalendarFilter { &self.filter }
    pub fn options(&self) -> &CalendarOptions { &self.options }
    pub fn total(&self) -> usize { self.events.len() }
    pub fn visible_count(&self) -> usize { self.visible.len() }
    pub fn has_results(&self) -> bool { !self.visible.is_empty() }

    pub fn visible(&self) -> impl Iterator<Item = &CalendarEvent> + '_ {
        self.visible.iter().map(|&ix| &self.events[ix])
    }

    /// Visible events split into consecutive runs sharing a group label.
    pub fn groups(&self) -> Vec<(String, Vec<&CalendarEvent>)> {
        let mut out: Vec<(String, Vec<&CalendarEvent>)> = Vec::new();
        for ev in self.visible() {
            let label = ev.group_label();
            match out.last_mut() {
                Some((last, items)) if *last == label => items.push(ev),
                _ => out.push((label, vec![ev])),
            }
        }
        out
    }

    pub fn dataset(&self) -> DataSet {
        DataSet::from_records(self.visible())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CalendarPage {
    state: PageState<Agenda>,
}

impl CalendarPage {
    pub fn new() -> Self { Self::default() }

    pub fn load(
        session: &mut Session,
        loader: &dyn SheetLoader,
        progress: Option<&mut dyn Progress>,
    ) -> Self {
        let result = session.events(loader, progress);
        Self::finish(result.as_ref().copied())
    }

    pub fn finish(result: Result<&[CalendarEvent], &SheetError>) -> Self {
        Self { state: PageState::resolve(result, messages::CALENDAR_ERROR, Agenda::new) }
    }

    pub fn set_filter(&mut self, filter: CalendarFilter) -> bool {
        match self.state.ready_mut() {
            Some(agenda) => {
                agenda.set_filter(filter);
                true
            }
            None => false,
        }
    }

    pub fn state(&self) -> &PageState<Agenda> { &self.state }

    pub fn panels(&self) -> Panels<'_> {
        Panels::of(&self.state, Agenda::has_results)
    }
}
