// src/cli.rs
//! Command-line front end (`cli` feature).
//!
//! ```text
//! acervo-cli projects --year 2023 --search silva --format tsv --out out/2023.tsv
//! acervo-cli show P-12
//! acervo-cli calendar --semester 1
//! acervo-cli render repository --out site/repositorio.html
//! ```
//!
//! Options layer: defaults ← `acervo.cfg` ← flags / environment.
use std::{
    error::Error,
    io::{self, Write},
    path::{Path, PathBuf},
};

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::{
    config::{
        consts::{CONFIG_FILE, LOG_SUBDIR, STORE_DIR},
        file as config_file,
        options::{AppOptions, ExportFormat, PageKind},
    },
    csv::to_export_string,
    data::{CalendarFilter, ProjectFilter},
    file,
    logging,
    pages::{
        messages, AdvisorsPage, CalendarPage, PageState, ProjectDetailPage, RepositoryPage,
    },
    progress::Progress,
    render,
    sheets::{HttpLoader, SheetKind},
    specs::{Project, Record},
    store::{DataSet, Session},
};

#[derive(Parser, Debug)]
#[command(
    name = "acervo-cli",
    version,
    about = "List, export and render the project repository, calendar and advisors"
)]
pub struct Cli {
    /// key=value options file.
    #[arg(long, global = true, env = "ACERVO_CONFIG", default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Spreadsheet to read instead of the configured one.
    #[arg(long, global = true, env = "ACERVO_SPREADSHEET_ID")]
    pub spreadsheet_id: Option<String>,

    /// Endpoint host, e.g. a local mirror.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// trace|debug|info|warn|error
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Repository listing, filtered.
    Projects {
        #[command(flatten)]
        filter: ProjectArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// One project by id.
    Show { id: String },
    /// Calendar of activities, grouped by semester.
    Calendar {
        #[command(flatten)]
        filter: CalendarArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Advisors by name.
    Advisors {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Page markup, including the loading/error/empty panels.
    Render {
        #[arg(value_enum)]
        page: RenderPage,
        /// Project id (project page only).
        #[arg(long)]
        id: Option<String>,
        /// Output file; stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Values available to the repository and calendar filters.
    Options,
}

#[derive(Args, Debug, Default)]
pub struct ProjectArgs {
    #[arg(long)]
    pub year: Option<String>,
    #[arg(long)]
    pub author: Option<String>,
    #[arg(long)]
    pub advisor: Option<String>,
    /// Case-insensitive substring over title, author, advisor, keywords.
    #[arg(long)]
    pub search: Option<String>,
}

impl From<ProjectArgs> for ProjectFilter {
    fn from(a: ProjectArgs) -> Self {
        ProjectFilter {
            year: a.year.unwrap_or_default(),
            author: a.author.unwrap_or_default(),
            advisor: a.advisor.unwrap_or_default(),
            term: a.search.unwrap_or_default(),
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct CalendarArgs {
    #[arg(long)]
    pub year: Option<String>,
    #[arg(long)]
    pub semester: Option<String>,
    /// Case-insensitive substring over type, activity, description.
    #[arg(long)]
    pub search: Option<String>,
}

impl From<CalendarArgs> for CalendarFilter {
    fn from(a: CalendarArgs) -> Self {
        CalendarFilter {
            year: a.year.unwrap_or_default(),
            semester: a.semester.unwrap_or_default(),
            term: a.search.unwrap_or_default(),
        }
    }
}

#[derive(Args, Debug)]
pub struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
    /// Write to this file instead of stdout (csv/tsv only).
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Omit the header line (csv/tsv only).
    #[arg(long)]
    pub no_headers: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Tsv,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RenderPage {
    Repository,
    Project,
    Calendar,
    Advisors,
}

impl From<RenderPage> for PageKind {
    fn from(p: RenderPage) -> Self {
        match p {
            RenderPage::Repository => PageKind::Repository,
            RenderPage::Project => PageKind::ProjectDetail,
            RenderPage::Calendar => PageKind::Calendar,
            RenderPage::Advisors => PageKind::Advisors,
        }
    }
}

/// Status lines on stderr so stdout stays clean for piping.
struct StderrProgress;

impl Progress for StderrProgress {
    fn begin(&mut self, sheet: SheetKind) {
        eprintln!("Loading {sheet}…");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn sheet_done(&mut self, sheet: SheetKind, records: usize) {
        eprintln!("Loaded {sheet}: {records} records");
    }
}

/// Defaults ← config file ← flags/env.
pub fn resolve_options(cli: &Cli) -> AppOptions {
    let mut opts = config_file::load(&cli.config);
    if let Some(id) = &cli.spreadsheet_id {
        opts.source.spreadsheet_id = id.clone();
    }
    if let Some(url) = &cli.base_url {
        opts.source.base_url = url.clone();
    }
    if let Some(level) = &cli.log_level {
        opts.log_level = level.clone();
    }
    opts
}

pub fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let opts = resolve_options(&cli);
    logging::init(&opts.log_level, &Path::new(STORE_DIR).join(LOG_SUBDIR))?;
    logf!("CLI: {:?}", cli.command);

    let loader = HttpLoader::new(opts.source.clone())?;
    let mut session = Session::new();
    let mut progress = StderrProgress;

    match cli.command {
        Command::Projects { filter, output } => {
            let mut page = RepositoryPage::load(&mut session, &loader, Some(&mut progress));
            page.set_filter(filter.into());
            let data = match page.state() {
                PageState::Ready(listing) => listing.dataset(),
                other => return settle(other, messages::REPOSITORY_EMPTY),
            };
            emit(&opts, &output, &data, &[1, 4, 3, 5], messages::REPOSITORY_EMPTY)
        }
        Command::Show { id } => {
            let page = ProjectDetailPage::load(&mut session, &loader, Some(&mut progress), Some(&id));
            match page.project() {
                Some(p) => print_project(p),
                None => Err(page.state().error().unwrap_or(messages::PROJECT_ERROR).into()),
            }
        }
        Command::Calendar { filter, output } => {
            let mut page = CalendarPage::load(&mut session, &loader, Some(&mut progress));
            page.set_filter(filter.into());
            let PageState::Ready(agenda) = page.state() else {
                return settle(page.state(), messages::CALENDAR_EMPTY);
            };
            if output.format == OutputFormat::Table {
                let mut out = io::stdout().lock();
                for (label, events) in agenda.groups() {
                    writeln!(out, "== {label} ==")?;
                    for ev in events {
                        writeln!(out, "{}  {}  {}  {}", ev.data, ev.tipo, ev.atividade, ev.descricao)?;
                    }
                }
                return Ok(());
            }
            emit(&opts, &output, &agenda.dataset(), &[], messages::CALENDAR_EMPTY)
        }
        Command::Advisors { output } => {
            let page = AdvisorsPage::load(&mut session, &loader, Some(&mut progress));
            let data = match page.state() {
                PageState::Ready(dir) => dir.dataset(),
                other => return settle(other, messages::ADVISORS_EMPTY),
            };
            emit(&opts, &output, &data, &[0, 2, 3], messages::ADVISORS_EMPTY)
        }
        Command::Render { page, id, out } => {
            let kind = PageKind::from(page);
            let html = match kind {
                PageKind::Repository => render::repository::page(&RepositoryPage::load(&mut session, &loader, Some(&mut progress))),
                PageKind::ProjectDetail => render::project::page(&ProjectDetailPage::load(
                    &mut session,
                    &loader,
                    Some(&mut progress),
                    id.as_deref(),
                )),
                PageKind::Calendar => render::calendar::page(&CalendarPage::load(&mut session, &loader, Some(&mut progress))),
                PageKind::Advisors => render::advisors::page(&AdvisorsPage::load(&mut session, &loader, Some(&mut progress))),
            };
            match out {
                Some(path) => file::write_html(&path, &html),
                None => {
                    println!("{html}");
                    Ok(())
                }
            }
        }
        Command::Options => {
            let repo = RepositoryPage::load(&mut session, &loader, Some(&mut progress));
            let cal = CalendarPage::load(&mut session, &loader, Some(&mut progress));
            let mut out = io::stdout().lock();
            if let Some(listing) = repo.state().ready() {
                let o = listing.options();
                writeln!(out, "years:     {}", o.years.join(", "))?;
                writeln!(out, "authors:   {}", o.authors.join(", "))?;
                writeln!(out, "advisors:  {}", o.advisors.join(", "))?;
            }
            if let Some(agenda) = cal.state().ready() {
                let o = agenda.options();
                writeln!(out, "calendar years:     {}", o.years.join(", "))?;
                writeln!(out, "calendar semesters: {}", o.semesters.join(", "))?;
            }
            Ok(())
        }
    }
}

/// Non-ready outcome of a listing command: errors fail the command, an empty
/// sheet just says so.
fn settle<T>(state: &PageState<T>, empty_msg: &str) -> Result<(), Box<dyn Error>> {
    match state {
        PageState::Error(msg) => Err(msg.clone().into()),
        _ => {
            eprintln!("{empty_msg}");
            Ok(())
        }
    }
}

/// Table on stdout (selected columns), or csv/tsv to stdout or `--out`.
fn emit(
    opts: &AppOptions,
    output: &OutputArgs,
    data: &DataSet,
    table_cols: &[usize],
    empty_msg: &str,
) -> Result<(), Box<dyn Error>> {
    let format = match output.format {
        OutputFormat::Table => {
            if data.rows.is_empty() {
                eprintln!("{empty_msg}");
            }
            return print_table(data, table_cols);
        }
        OutputFormat::Csv => ExportFormat::Csv,
        OutputFormat::Tsv => ExportFormat::Tsv,
    };
    let mut export = opts.export.clone();
    export.format = format;
    export.include_headers = export.include_headers && !output.no_headers;

    match &output.out {
        Some(path) => file::write_export_to(path, &export, data),
        None => {
            print!("{}", to_export_string(data, export.include_headers, format.delim()));
            Ok(())
        }
    }
}

fn print_table(data: &DataSet, cols: &[usize]) -> Result<(), Box<dyn Error>> {
    let cols: Vec<usize> = if cols.is_empty() { (0..data.header_count()).collect() } else { cols.to_vec() };
    let cell = |row: &[String], c: usize| row.get(c).cloned().unwrap_or_default();

    let mut widths: Vec<usize> = cols
        .iter()
        .map(|&c| data.headers.as_ref().map(|h| cell(h.as_slice(), c).chars().count()).unwrap_or(0))
        .collect();
    for row in &data.rows {
        for (w, &c) in widths.iter_mut().zip(&cols) {
            *w = (*w).max(cell(row.as_slice(), c).chars().count());
        }
    }

    let mut out = io::stdout().lock();
    let line = |row: &[String]| -> String {
        cols.iter()
            .zip(&widths)
            .map(|(&c, &w)| {
                let v = cell(row, c);
                let pad = w.saturating_sub(v.chars().count());
                join!(v, &" ".repeat(pad))
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };
    if let Some(h) = &data.headers {
        writeln!(out, "{}", line(h.as_slice()))?;
    }
    for row in &data.rows {
        writeln!(out, "{}", line(row.as_slice()))?;
    }
    Ok(())
}

fn print_project(p: &Project) -> Result<(), Box<dyn Error>> {
    let mut out = io::stdout().lock();
    for (label, value) in Project::headers().iter().zip(p.to_row()) {
        if !value.is_empty() {
            writeln!(out, "{label}: {value}")?;
        }
    }
    Ok(())
}
