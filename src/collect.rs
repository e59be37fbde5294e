// src/collect.rs
//! Fetch one sheet, normalize every row, keep only rows with an identity.
//! No caching here; `store::Session` decides when a sheet is loaded.
use crate::{
    error::SheetError,
    progress::Progress,
    sheets::{Row, SheetKind, SheetLoader},
    specs::{self, Advisor, CalendarEvent, Project},
};

fn fetch(
    loader: &dyn SheetLoader,
    sheet: SheetKind,
    progress: &mut Option<&mut dyn Progress>,
) -> Result<Vec<Row>, SheetError> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(sheet);
    }
    match loader.load(sheet) {
        Ok(rows) => Ok(rows),
        Err(e) => {
            loge!("Fetch: Error sheet={}: {}", sheet, e);
            if let Some(p) = progress.as_deref_mut() {
                p.sheet_failed(sheet);
            }
            Err(e)
        }
    }
}

fn finish<T>(
    sheet: SheetKind,
    raw: usize,
    kept: Vec<T>,
    progress: &mut Option<&mut dyn Progress>,
) -> Vec<T> {
    logf!("Fetch: OK sheet={} rows={} kept={}", sheet, raw, kept.len());
    if let Some(p) = progress.as_deref_mut() {
        let skipped = raw - kept.len();
        if skipped > 0 {
            p.log(&format!("Skipped {skipped} {sheet} rows without identity"));
        }
        p.sheet_done(sheet, kept.len());
    }
    kept
}

/// Projects with a non-empty id, in sheet order.
pub fn collect_projects(
    loader: &dyn SheetLoader,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<Project>, SheetError> {
    let rows = fetch(loader, SheetKind::Projects, &mut progress)?;
    let kept = rows
        .iter()
        .map(specs::projects::normalize)
        .filter(Project::is_listed)
        .collect();
    Ok(finish(SheetKind::Projects, rows.len(), kept, &mut progress))
}

/// Events with both year and date, in sheet order.
pub fn collect_events(
    loader: &dyn SheetLoader,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<CalendarEvent>, SheetError> {
    let rows = fetch(loader, SheetKind::Calendar, &mut progress)?;
    let kept = rows
        .iter()
        .map(specs::calendar::normalize)
        .filter(CalendarEvent::is_listed)
        .collect();
    Ok(finish(SheetKind::Calendar, rows.len(), kept, &mut progress))
}

/// Advisors with a name, in sheet order.
pub fn collect_advisors(
    loader: &dyn SheetLoader,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<Advisor>, SheetError> {
    let rows = fetch(loader, SheetKind::Advisors, &mut progress)?;
    let kept = rows
        .iter()
        .map(specs::advisors::normalize)
        .filter(Advisor::is_listed)
        .collect();
    Ok(finish(SheetKind::Advisors, rows.len(), kept, &mut progress))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Rows(Vec<Row>);
    impl SheetLoader for Rows {
        fn load(&self, _sheet: SheetKind) -> Result<Vec<Row>, SheetError> {
            Ok(self.0.clone())
        }
    }

    struct Broken;
    impl SheetLoader for Broken {
        fn load(&self, sheet: SheetKind) -> Result<Vec<Row>, SheetError> {
            Err(SheetError::Network { status: 404, url: s!(sheet.to_string()) })
        }
    }

    #[derive(Default)]
    struct Recorder(Vec<String>);
    impl Progress for Recorder {
        fn begin(&mut self, sheet: SheetKind) { self.0.push(format!("begin {sheet}")); }
        fn log(&mut self, msg: &str) { self.0.push(s!(msg)); }
        fn sheet_done(&mut self, sheet: SheetKind, records: usize) { self.0.push(format!("done {sheet} {records}")); }
        fn sheet_failed(&mut self, sheet: SheetKind) { self.0.push(format!("failed {sheet}")); }
    }

    #[test]
    fn progress_sees_begin_skip_and_done() {
        let loader = Rows(vec![
            [("Nome", "Rita")].into_iter().collect(),
            [("Email", "x@y")].into_iter().collect(),
        ]);
        let mut rec = Recorder::default();
        let kept = collect_advisors(&loader, Some(&mut rec)).unwrap();
        assert_eq!(kept.len(), 1);
        assert_eq!(
            rec.0,
            vec!["begin advisors", "Skipped 1 advisors rows without identity", "done advisors 1"]
        );
    }

    #[test]
    fn failure_is_reported_and_returned() {
        let mut rec = Recorder::default();
        let err = collect_events(&Broken, Some(&mut rec)).unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(rec.0, vec!["begin calendar", "failed calendar"]);
    }
}
