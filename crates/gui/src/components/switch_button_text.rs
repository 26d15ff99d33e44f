use eframe::egui;
use eframe::egui::{Color32, Margin, Response, RichText, Stroke, Ui};

use crate::components::clickable::Clickable;
use crate::theme::{values, Theme};

#[derive(Debug, Clone)]
pub struct SwitchItem {
    pub text: String,
    button: Clickable,
    background: Color32,
    color: Color32,
}

/// Horizontal row of mutually exclusive text buttons.
#[derive(Debug, Clone)]
pub struct SwitchButtonText {
    pub active_text_color: Color32,
    pub inactive_text_color: Color32,
    pub active: Color32,
    pub inactive: Color32,
    card_color: Color32,
    items: Vec<SwitchItem>,
    selected: usize,
    changed: bool,
}

impl SwitchButtonText {
    pub fn new<S: Into<String>>(theme: &Theme, labels: impl IntoIterator<Item = S>) -> Self {
        let (active, inactive) = (theme.color.surface, Color32::TRANSPARENT);
        let (active_text_color, inactive_text_color) = (theme.color.gray_text1, theme.color.text);
        let items = labels.into_iter()
            .map(|l| SwitchItem {
                text: l.into(),
                button: Clickable::new(),
                background: inactive,
                color: inactive_text_color,
            })
            .collect();
        let mut sw = Self {
            active_text_color,
            inactive_text_color,
            active,
            inactive,
            card_color: theme.color.gray2,
            items,
            selected: 0,
            changed: false,
        };
        sw.apply_colors();
        sw
    }

    /// Queue a click on item `index`, processed by the next `handle_click_event`.
    pub fn click(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            item.button.click();
        }
    }

    pub fn handle_click_event(&mut self) {
        for index in 0..self.items.len() {
            while self.items[index].button.clicked() {
                self.select(index);
            }
        }
        self.apply_colors();
    }

    /// Out of range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        if self.selected != index {
            self.changed = true;
        }
        self.selected = index;
        self.apply_colors();
    }

    fn apply_colors(&mut self) {
        for (index, item) in self.items.iter_mut().enumerate() {
            if index == self.selected {
                item.background = self.active;
                item.color = self.active_text_color;
            } else {
                item.background = self.inactive;
                item.color = self.inactive_text_color;
            }
        }
    }

    pub fn selected_option(&self) -> &str {
        self.items.get(self.selected).map(|i| i.text.as_str()).unwrap_or("")
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        index == self.selected && index < self.items.len()
    }

    pub fn item_colors(&self, index: usize) -> Option<(Color32, Color32)> {
        self.items.get(index).map(|i| (i.background, i.color))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True once after the selection moves to a different item.
    pub fn changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    pub fn layout(&mut self, ui: &mut Ui) -> Response {
        self.handle_click_event();
        egui::Frame::none()
            .fill(self.card_color)
            .rounding(values::CARD_RADIUS)
            .inner_margin(Margin::same(values::MARGIN_PADDING_2))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 0.0;
                    ui.spacing_mut().button_padding = egui::vec2(values::MARGIN_PADDING_8, values::MARGIN_PADDING_4);
                    for item in self.items.iter_mut() {
                        let button = egui::Button::new(
                            RichText::new(item.text.clone()).size(values::TEXT_SIZE_14).color(item.color),
                        )
                            .fill(item.background)
                            .stroke(Stroke::NONE)
                            .rounding(values::CARD_RADIUS);
                        item.button.add(ui, button);
                    }
                });
            })
            .response
    }
}
