use eframe::egui::{ComboBox, Ui};

/// Labelled selector over `(value, label)` options; returns true when the selection changed.
pub fn combo_box<T>(
    ui: &mut Ui,
    selector_var: &mut Option<T>,
    label: impl Into<String>,
    placeholder: impl Into<String>,
    potential_values: Vec<(T, String)>,
    locked: bool,
    width: f32,
) -> bool where T: Clone + PartialEq {
    let mut changed = false;
    let mut c = selector_var.clone();
    let selector = if locked {
        &mut c
    } else {
        selector_var
    };
    let string = label.into();
    let selected_text = selector.as_ref()
        .and_then(|s| potential_values.iter().find(|(v, _)| v == s))
        .map(|(_, l)| l.clone())
        .unwrap_or(placeholder.into());
    ui.push_id(string.clone(), |ui| {
        ComboBox::from_label(string)
            .width(width)
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for (value, text) in potential_values.into_iter() {
                    if ui.selectable_value(selector, Some(value), text).changed() {
                        changed = true;
                    }
                }
            });
    });
    changed
}
