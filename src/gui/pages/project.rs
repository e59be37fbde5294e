// src/gui/pages/project.rs
use eframe::egui::{self, RichText};

use crate::{
    config::options::PageKind::{self, *},
    core::sanitize::drive_thumbnail_url,
    gui::{app::App, components::panels},
    render::project::{NO_ABSTRACT, NO_TITLE},
    store::DataSet,
};

use super::{field, Page};

pub struct ProjectPage;
pub static PAGE: ProjectPage = ProjectPage;

impl Page for ProjectPage {
    fn kind(&self) -> PageKind { ProjectDetail }
    fn title(&self) -> &'static str { "Trabalho" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let mut back = false;
        if ui.button("← Voltar ao repositório").clicked() {
            back = true;
        }
        ui.add_space(4.0);

        if panels::draw(ui, app.detail.panels(), "") {
            if let Some(p) = app.detail.project() {
                egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                    ui.heading(if p.titulo.is_empty() { NO_TITLE } else { p.titulo.as_str() });
                    field(ui, "Autor(a): ", &p.autor);

                    let advisors: Vec<String> = [("Orientador(a): ", &p.orientador), ("Coorientador(a): ", &p.coorientador)]
                        .into_iter()
                        .filter(|(_, v)| !v.is_empty())
                        .map(|(l, v)| join!(l, v))
                        .collect();
                    if !advisors.is_empty() {
                        ui.label(advisors.join(" | "));
                    }
                    field(ui, "Banca: ", &p.banca);

                    let period = p.period();
                    let extra: Vec<String> = [
                        ("Curso: ", p.curso.as_str()),
                        ("Período: ", period.as_str()),
                        ("Data da defesa: ", p.data_defesa.as_str()),
                        ("Licença: ", p.licenca.as_str()),
                    ]
                    .into_iter()
                    .filter(|(_, v)| !v.is_empty())
                    .map(|(l, v)| join!(l, v))
                    .collect();
                    if !extra.is_empty() {
                        ui.label(extra.join(" | "));
                    }
                    if !p.palavras_chave.is_empty() {
                        ui.label(RichText::new(join!("Palavras-chave: ", &p.palavras_chave)).italics());
                    }

                    ui.separator();
                    ui.label(if p.resumo.is_empty() { NO_ABSTRACT } else { p.resumo.as_str() });
                    ui.separator();

                    ui.horizontal_wrapped(|ui| {
                        if !p.imagem.is_empty() {
                            ui.hyperlink_to("Imagem ilustrativa", drive_thumbnail_url(&p.imagem));
                        }
                        if !p.link_pdf.is_empty() {
                            ui.hyperlink_to("Baixar PDF do trabalho", &p.link_pdf);
                        }
                        if !p.link_outros.is_empty() {
                            ui.hyperlink_to("Outros materiais", &p.link_outros);
                        }
                    });
                });
            }
        }

        if back {
            let ctx = ui.ctx().clone();
            app.open_page(Repository, &ctx);
        }
    }

    fn dataset(&self, app: &App) -> Option<DataSet> {
        app.detail.project().map(|p| DataSet::from_records([p]))
    }
}
