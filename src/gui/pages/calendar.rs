// src/gui/pages/calendar.rs
use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::{
    config::options::PageKind::{self, *},
    gui::{app::App, components::{filters, panels}},
    pages::messages,
    store::DataSet,
};

use super::Page;

pub struct CalendarPage;
pub static PAGE: CalendarPage = CalendarPage;

/// One table line: a group heading or an event.
enum Line<'a> {
    Group(String),
    Event([&'a str; 4]),
}

impl Page for CalendarPage {
    fn kind(&self) -> PageKind { Calendar }
    fn title(&self) -> &'static str { "Calendário" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        if !panels::draw(ui, app.calendar.panels(), messages::CALENDAR_EMPTY) {
            return;
        }
        let Some(agenda) = app.calendar.state().ready() else { return };

        let mut filter = app.state.gui.calendar_filter.clone();
        let mut changed = false;
        ui.horizontal_wrapped(|ui| {
            changed |= filters::search(ui, "Buscar por tipo, atividade ou descrição", &mut filter.term);
            let o = agenda.options();
            changed |= filters::combo(ui, "calendar-year", "Todos os anos", &o.years, &mut filter.year);
            changed |= filters::combo(ui, "calendar-semester", "Todos os semestres", &o.semesters, &mut filter.semester);
        });
        ui.separator();

        let mut lines: Vec<Line> = Vec::new();
        for (label, events) in agenda.groups() {
            lines.push(Line::Group(label));
            lines.extend(events.into_iter().map(|ev| {
                Line::Event([ev.data.as_str(), ev.tipo.as_str(), ev.atividade.as_str(), ev.descricao.as_str()])
            }));
        }

        TableBuilder::new(ui)
            .striped(true)
            .column(Column::initial(100.0).resizable(true))
            .column(Column::initial(120.0).resizable(true))
            .column(Column::initial(220.0).resizable(true).clip(true))
            .column(Column::remainder().clip(true))
            .header(22.0, |mut header| {
                for h in ["Data", "Tipo", "Atividade", "Descrição"] {
                    header.col(|ui| { ui.strong(h); });
                }
            })
            .body(|body| {
                body.rows(20.0, lines.len(), |mut row| {
                    match &lines[row.index()] {
                        Line::Group(label) => {
                            row.col(|ui| { ui.label(RichText::new(label.as_str()).strong()); });
                            for _ in 0..3 {
                                row.col(|_| {});
                            }
                        }
                        Line::Event(cells) => {
                            for c in cells {
                                row.col(|ui| { ui.label(*c); });
                            }
                        }
                    }
                });
            });

        if changed {
            logd!("UI: Calendar filter → {:?}", filter);
            app.calendar.set_filter(filter.clone());
            app.state.gui.calendar_filter = filter;
        }
    }

    fn dataset(&self, app: &App) -> Option<DataSet> {
        app.calendar.state().ready().map(|a| a.dataset())
    }
}
