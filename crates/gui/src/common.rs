use eframe::egui;
use eframe::egui::{Color32, InnerResponse, Margin, RichText, Stroke, Ui};

use crate::theme::{values, Theme};

pub fn error_label(ui: &mut Ui, theme: &Theme, message: impl Into<String>) {
    ui.label(RichText::new(message.into()).size(values::TEXT_SIZE_12).color(theme.color.danger));
}

pub fn h6(ui: &mut Ui, theme: &Theme, text: impl Into<String>) {
    ui.label(RichText::new(text.into()).size(values::TEXT_SIZE_16).strong().color(theme.color.text));
}

pub fn body2(ui: &mut Ui, theme: &Theme, text: impl Into<String>) {
    ui.label(RichText::new(text.into()).size(values::TEXT_SIZE_14).color(theme.color.gray_text2));
}

pub fn small_label(ui: &mut Ui, color: Color32, text: impl Into<String>) {
    ui.label(RichText::new(text.into()).size(values::TEXT_SIZE_12).color(color));
}

pub fn card<R>(ui: &mut Ui, theme: &Theme, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    egui::Frame::none()
        .fill(theme.color.surface)
        .rounding(values::CARD_RADIUS)
        .inner_margin(Margin::same(values::MARGIN_PADDING_16))
        .stroke(Stroke::NONE)
        .show(ui, add_contents)
}

/// Primary action button, greyed out when disabled.
pub fn primary_button(theme: &Theme, text: impl Into<String>, enabled: bool) -> egui::Button<'static> {
    let fill = if enabled { theme.color.primary } else { theme.color.gray3 };
    egui::Button::new(RichText::new(text.into()).color(theme.color.white).strong())
        .fill(fill)
        .min_size(egui::vec2(88.0, 32.0))
}

pub fn outline_button(theme: &Theme, text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(RichText::new(text.into()).color(theme.color.primary).strong())
        .fill(Color32::TRANSPARENT)
        .stroke(Stroke::new(1.0, theme.color.gray2))
        .min_size(egui::vec2(88.0, 32.0))
}
