// src/gui/pages/advisors.rs
use eframe::egui::{self, RichText};

use crate::{
    config::options::PageKind::{self, *},
    gui::{app::App, components::panels},
    pages::messages,
    store::DataSet,
};

use super::{field, Page};

pub struct AdvisorsPage;
pub static PAGE: AdvisorsPage = AdvisorsPage;

impl Page for AdvisorsPage {
    fn kind(&self) -> PageKind { Advisors }
    fn title(&self) -> &'static str { "Orientadores" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        if !panels::draw(ui, app.advisors.panels(), messages::ADVISORS_EMPTY) {
            return;
        }
        let Some(dir) = app.advisors.state().ready() else { return };

        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            for a in dir.advisors() {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(a.nome.as_str()).strong().size(16.0));
                    field(ui, "Áreas de orientação: ", &a.areas);
                    field(ui, "Palavras-chave: ", &a.palavras_chave);
                    let meta = a.meta_line();
                    if !meta.is_empty() {
                        ui.label(RichText::new(meta).weak());
                    }
                    ui.horizontal(|ui| {
                        if !a.lattes.is_empty() {
                            ui.hyperlink_to("Currículo Lattes", &a.lattes);
                        }
                        if !a.email.is_empty() {
                            ui.hyperlink_to(a.email.as_str(), join!("mailto:", &a.email));
                        }
                    });
                });
            }
        });
    }

    fn dataset(&self, app: &App) -> Option<DataSet> {
        app.advisors.state().ready().map(|d| d.dataset())
    }
}
