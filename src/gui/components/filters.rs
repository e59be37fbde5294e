// src/gui/components/filters.rs

use eframe::egui;

/// Selection with an "all" entry mapped to the empty string. Returns true on change.
pub fn combo(ui: &mut egui::Ui, id: &str, all_label: &str, values: &[String], current: &mut String) -> bool {
    let before = current.clone();
    let shown = if current.is_empty() { all_label } else { current.as_str() };
    egui::ComboBox::from_id_salt(id)
        .selected_text(shown.to_owned())
        .show_ui(ui, |ui| {
            ui.selectable_value(current, s!(), all_label);
            for v in values {
                ui.selectable_value(current, v.clone(), v.as_str());
            }
        });
    *current != before
}

/// Free-text search box. Returns true on change.
pub fn search(ui: &mut egui::Ui, hint: &str, term: &mut String) -> bool {
    ui.add(egui::TextEdit::singleline(term).hint_text(hint).desired_width(260.0))
        .changed()
}
