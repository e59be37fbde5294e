// src/gui/app.rs
use std::{
    collections::HashMap,
    error::Error,
    sync::{mpsc::Receiver, Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{
        options::{AppOptions, PageKind},
        state::{AppState, GuiState},
    },
    error::SheetError,
    pages::{AdvisorsPage, CalendarPage, ProjectDetailPage, RepositoryPage},
    sheets::{HttpLoader, SheetKind, SheetLoader},
    store::{Loaded, Session},
};

use super::{actions, pages::Page, router};

pub fn run(
    native: eframe::NativeOptions,
    options: AppOptions,
    gui: GuiState,
) -> Result<(), Box<dyn Error>> {
    let loader: Arc<dyn SheetLoader> = Arc::new(HttpLoader::new(options.source.clone())?);
    let state = AppState { options, gui };
    eframe::run_native(
        "Acervo",
        native,
        Box::new(move |cc| Ok(Box::new(App::new(state, loader, &cc.egui_ctx)))),
    )?;
    Ok(())
}

/// A sheet fetch running on a worker thread.
pub type PendingLoad = Receiver<Result<Loaded, SheetError>>;

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // fetched sheets for this session; shared by the pages
    pub session: Session,
    pub loader: Arc<dyn SheetLoader>,
    pub pending: HashMap<SheetKind, PendingLoad>,

    // one controller per page
    pub repository: RepositoryPage,
    pub detail: ProjectDetailPage,
    pub calendar: CalendarPage,
    pub advisors: AdvisorsPage,

    // output dir text field (mapped to ExportOptions on export)
    pub out_dir_text: String,

    // status line (workers write here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState, loader: Arc<dyn SheetLoader>, ctx: &egui::Context) -> Self {
        let out_dir_text = state.options.export.out_dir.to_string_lossy().into_owned();
        logf!(
            "Init: spreadsheet={} sheets={}/{}/{}",
            state.options.source.spreadsheet_id,
            state.options.source.sheet_projects,
            state.options.source.sheet_calendar,
            state.options.source.sheet_advisors
        );

        let mut app = Self {
            state,
            session: Session::new(),
            loader,
            pending: HashMap::new(),
            repository: RepositoryPage::new(),
            detail: ProjectDetailPage::new(),
            calendar: CalendarPage::new(),
            advisors: AdvisorsPage::new(),
            out_dir_text,
            status: Arc::new(Mutex::new(s!("Idle"))),
        };

        let first = app.current_page_kind();
        actions::ensure_loaded(&mut app, first, ctx);
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages[self.current_index().min(pages.len() - 1)]
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Switch tabs and make sure the new page has (or is getting) its data.
    pub fn open_page(&mut self, kind: PageKind, ctx: &egui::Context) {
        let prev = self.current_page_kind();
        self.set_current_index(router::index_of(kind));
        if prev != kind {
            logf!("UI: Tab switch {:?} → {:?}", prev, kind);
        }
        actions::ensure_loaded(self, kind, ctx);
    }

    /// "Ver detalhes": select a project and show the detail tab.
    pub fn open_project(&mut self, id: &str, ctx: &egui::Context) {
        if self.state.gui.selected_project_id.as_deref() != Some(id) {
            self.state.gui.selected_project_id = Some(s!(id));
            self.detail = ProjectDetailPage::new();
        }
        self.open_page(PageKind::ProjectDetail, ctx);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll(self);

        egui::TopBottomPanel::bottom("export_bar").show(ctx, |ui| {
            super::components::export_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::tabs::draw(ui, self);

            ui.separator();

            let page = self.current_page();
            page.draw(ui, self);
        });
    }
}
