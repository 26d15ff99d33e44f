use eframe::egui;
use eframe::egui::{RichText, Ui};

use crate::components::clickable::Clickable;
use crate::theme::{values, Theme};

/// Header row shared by pages pushed on top of another page.
pub fn sub_page_header(ui: &mut Ui, theme: &Theme, back_button: &mut Clickable, title: &str, wallet_name: Option<&str>) {
    ui.horizontal(|ui| {
        back_button.add(ui, egui::Button::new(RichText::new("⬅").size(values::TEXT_SIZE_20)).frame(false));
        ui.label(RichText::new(title).size(values::TEXT_SIZE_20).color(theme.color.text));
        if let Some(name) = wallet_name {
            egui::Frame::none()
                .fill(theme.color.gray2)
                .rounding(values::MARGIN_PADDING_4)
                .inner_margin(egui::Margin::symmetric(values::MARGIN_PADDING_8, values::MARGIN_PADDING_2))
                .show(ui, |ui| {
                    ui.label(RichText::new(name).size(values::TEXT_SIZE_12).color(theme.color.gray_text2));
                });
        }
    });
    ui.add_space(values::MARGIN_PADDING_16);
}
