// src/gui/pages/repository.rs
use eframe::egui::{self, RichText};

use crate::{
    config::options::PageKind::{self, *},
    gui::{app::App, components::{filters, panels}},
    pages::messages,
    store::DataSet,
};

use super::Page;

pub struct RepositoryPage;
pub static PAGE: RepositoryPage = RepositoryPage;

impl Page for RepositoryPage {
    fn kind(&self) -> PageKind { Repository }
    fn title(&self) -> &'static str { "Repositório" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        if !panels::draw(ui, app.repository.panels(), messages::REPOSITORY_EMPTY) {
            return;
        }
        let Some(listing) = app.repository.state().ready() else { return };

        // --- Filters ---
        let mut filter = app.state.gui.project_filter.clone();
        let mut changed = false;
        ui.horizontal_wrapped(|ui| {
            changed |= filters::search(
                ui,
                "Buscar por título, autor, orientador ou palavra-chave",
                &mut filter.term,
            );
            let o = listing.options();
            changed |= filters::combo(ui, "year-filter", "Todos os anos", &o.years, &mut filter.year);
            changed |= filters::combo(ui, "author-filter", "Todos os autores", &o.authors, &mut filter.author);
            changed |= filters::combo(ui, "advisor-filter", "Todos os orientadores", &o.advisors, &mut filter.advisor);
        });
        ui.label(format!("{} de {} trabalhos", listing.visible_count(), listing.total()));
        ui.separator();

        // --- Cards ---
        let mut open: Option<String> = None;
        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            let mut current_year: Option<&str> = None;
            for p in listing.visible() {
                if !p.ano.is_empty() && current_year != Some(p.ano.as_str()) {
                    current_year = Some(p.ano.as_str());
                    ui.add_space(6.0);
                    ui.heading(p.ano.as_str());
                }
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    let title = if p.titulo.is_empty() { "(Sem título)" } else { p.titulo.as_str() };
                    if ui.link(RichText::new(title).strong()).clicked() {
                        open = Some(p.id.clone());
                    }
                    let period = p.period();
                    let meta: Vec<String> = [
                        ("Autor(a): ", p.autor.as_str()),
                        ("Orientador(a): ", p.orientador.as_str()),
                        ("Período: ", period.as_str()),
                    ]
                    .into_iter()
                    .filter(|(_, v)| !v.is_empty())
                    .map(|(l, v)| join!(l, v))
                    .collect();
                    if !meta.is_empty() {
                        ui.label(meta.join(" | "));
                    }
                    if !p.palavras_chave.is_empty() {
                        ui.label(RichText::new(join!("Palavras-chave: ", &p.palavras_chave)).italics());
                    }
                    ui.horizontal(|ui| {
                        if ui.button("Ver detalhes").clicked() {
                            open = Some(p.id.clone());
                        }
                        if !p.link_pdf.is_empty() {
                            ui.hyperlink_to("Baixar PDF", &p.link_pdf);
                        }
                    });
                });
            }
        });

        if changed {
            logd!("UI: Repository filter → {:?}", filter);
            app.repository.set_filter(filter.clone());
            app.state.gui.project_filter = filter;
        }
        if let Some(id) = open {
            let ctx = ui.ctx().clone();
            app.open_project(&id, &ctx);
        }
    }

    fn dataset(&self, app: &App) -> Option<DataSet> {
        app.repository.state().ready().map(|l| l.dataset())
    }
}
