// src/gui/actions/load.rs
//
// Sheet fetches run on a worker thread (one per sheet, never two for the same
// sheet). The UI thread polls the channel every frame and settles the pages
// that were waiting on that sheet.

use std::{sync::mpsc, thread};

use eframe::egui;

use crate::{
    config::options::PageKind,
    error::SheetError,
    gui::{app::App, progress::GuiProgress},
    pages::{AdvisorsPage, CalendarPage, ProjectDetailPage, RepositoryPage},
    sheets::SheetKind,
    store::Loaded,
};

const ALL_PAGES: [PageKind; 4] = [
    PageKind::Repository,
    PageKind::ProjectDetail,
    PageKind::Calendar,
    PageKind::Advisors,
];

fn is_loading(app: &App, kind: PageKind) -> bool {
    match kind {
        PageKind::Repository => app.repository.state().is_loading(),
        PageKind::ProjectDetail => app.detail.state().is_loading(),
        PageKind::Calendar => app.calendar.state().is_loading(),
        PageKind::Advisors => app.advisors.state().is_loading(),
    }
}

/// Settle `kind` if it is still loading: from the session cache when the sheet
/// is there, otherwise by starting (at most one) fetch.
pub fn ensure_loaded(app: &mut App, kind: PageKind, ctx: &egui::Context) {
    if !is_loading(app, kind) {
        return;
    }

    // The detail page needs an id before anything is fetched.
    if kind == PageKind::ProjectDetail && app.state.gui.selected_project_id.is_none() {
        app.detail = ProjectDetailPage::finish(None, Ok(&[]));
        return;
    }

    let sheet = kind.sheet();
    if app.session.is_loaded(sheet) {
        settle_from_cache(app, kind);
        return;
    }
    if app.pending.contains_key(&sheet) {
        logd!("Load: Already in flight sheet={}", sheet);
        return;
    }

    logf!("Load: Begin page={:?} sheet={}", kind, sheet);
    let (tx, rx) = mpsc::channel();
    let loader = app.loader.clone();
    let status = app.status.clone();
    let ctx2 = ctx.clone();

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);
        let res = Loaded::collect(sheet, &*loader, Some(&mut prog));
        // Receiver gone means the app closed; nothing to report.
        let _ = tx.send(res);
        ctx2.request_repaint();
    });

    app.pending.insert(sheet, rx);
}

/// Drain finished fetches. Called once per frame.
pub fn poll(app: &mut App) {
    let finished: Vec<(SheetKind, Result<Loaded, SheetError>)> = app
        .pending
        .iter()
        .filter_map(|(sheet, rx)| match rx.try_recv() {
            Ok(res) => Some((*sheet, res)),
            Err(mpsc::TryRecvError::Empty) => None,
            Err(mpsc::TryRecvError::Disconnected) => Some((
                *sheet,
                Err(SheetError::Parse(s!("worker stopped without a result"))),
            )),
        })
        .collect();

    for (sheet, res) in finished {
        app.pending.remove(&sheet);
        match res {
            Ok(loaded) => {
                app.session.store(loaded);
                for kind in ALL_PAGES.into_iter().filter(|k| k.sheet() == sheet) {
                    if is_loading(app, kind) {
                        settle_from_cache(app, kind);
                    }
                }
                app.status("Ready");
            }
            Err(e) => {
                for kind in ALL_PAGES.into_iter().filter(|k| k.sheet() == sheet) {
                    if is_loading(app, kind) {
                        settle_error(app, kind, &e);
                    }
                }
                app.status(format!("Error: {e}"));
            }
        }
    }
}

fn settle_from_cache(app: &mut App, kind: PageKind) {
    match kind {
        PageKind::Repository => {
            app.repository = RepositoryPage::finish(Ok(app.session.cached_projects().unwrap_or_default()));
            app.repository.set_filter(app.state.gui.project_filter.clone());
        }
        PageKind::ProjectDetail => {
            let id = app.state.gui.selected_project_id.as_deref();
            app.detail = ProjectDetailPage::finish(id, Ok(app.session.cached_projects().unwrap_or_default()));
        }
        PageKind::Calendar => {
            app.calendar = CalendarPage::finish(Ok(app.session.cached_events().unwrap_or_default()));
            app.calendar.set_filter(app.state.gui.calendar_filter.clone());
        }
        PageKind::Advisors => {
            app.advisors = AdvisorsPage::finish(Ok(app.session.cached_advisors().unwrap_or_default()));
        }
    }
}

fn settle_error(app: &mut App, kind: PageKind, e: &SheetError) {
    match kind {
        PageKind::Repository => app.repository = RepositoryPage::finish(Err(e)),
        PageKind::ProjectDetail => {
            let id = app.state.gui.selected_project_id.as_deref();
            app.detail = ProjectDetailPage::finish(id, Err(e));
        }
        PageKind::Calendar => app.calendar = CalendarPage::finish(Err(e)),
        PageKind::Advisors => app.advisors = AdvisorsPage::finish(Err(e)),
    }
}
