use eframe::egui::{Color32, RichText, Ui};

/// Single choice among string keys.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RadioGroup {
    pub value: String,
    changed: bool,
}

impl RadioGroup {
    pub fn select(&mut self, key: impl Into<String>) {
        let key = key.into();
        if self.value != key {
            self.value = key;
            self.changed = true;
        }
    }

    pub fn changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    pub fn radio(&mut self, ui: &mut Ui, key: &str, label: &str, color: Color32) {
        let checked = self.value == key;
        if ui.radio(checked, RichText::new(label).color(color)).clicked() {
            self.select(key);
        }
    }
}
