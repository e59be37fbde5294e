// src/render/calendar.rs
use super::shell;
use crate::{
    config::options::PageKind,
    core::html::El,
    pages::{calendar::Agenda, messages, CalendarPage},
};

pub fn page(page: &CalendarPage) -> String {
    let body = page
        .state()
        .ready()
        .map(table_body)
        .unwrap_or_else(|| El::new("tbody").id("calendar-table-body"));

    let head = El::new("thead").child(
        El::new("tr").children(["Data", "Tipo", "Atividade", "Descrição"].map(|h| El::new("th").text(h))),
    );
    let table = El::new("table").class("calendar-table").child(head).child(body);

    shell(PageKind::Calendar, "calendar", page.panels(), Some(messages::CALENDAR_EMPTY), table).to_html()
}

/// One `calendar-group-row` per label run, then one row per event.
pub fn table_body(agenda: &Agenda) -> El {
    let mut body = El::new("tbody").id("calendar-table-body");
    for (label, events) in agenda.groups() {
        body = body.child(
            El::new("tr")
                .class("calendar-group-row")
                .child(El::new("td").attr("colspan", "4").text(label)),
        );
        for ev in events {
            body = body.child(El::new("tr").children(
                [&ev.data, &ev.tipo, &ev.atividade, &ev.descricao].map(|v| El::new("td").text(v.as_str())),
            ));
        }
    }
    body
}
