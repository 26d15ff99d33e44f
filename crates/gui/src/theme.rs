use std::sync::Arc;

use arc_swap::ArcSwap;
use eframe::egui;
use eframe::egui::{Color32, Visuals};
use log::warn;

pub mod values {
    pub const MARGIN_PADDING_2: f32 = 2.0;
    pub const MARGIN_PADDING_4: f32 = 4.0;
    pub const MARGIN_PADDING_8: f32 = 8.0;
    pub const MARGIN_PADDING_10: f32 = 10.0;
    pub const MARGIN_PADDING_12: f32 = 12.0;
    pub const MARGIN_PADDING_16: f32 = 16.0;
    pub const MARGIN_PADDING_20: f32 = 20.0;
    pub const MARGIN_PADDING_24: f32 = 24.0;

    pub const TEXT_SIZE_12: f32 = 12.0;
    pub const TEXT_SIZE_14: f32 = 14.0;
    pub const TEXT_SIZE_16: f32 = 16.0;
    pub const TEXT_SIZE_20: f32 = 20.0;

    pub const MODAL_WIDTH: f32 = 380.0;
    pub const CARD_RADIUS: f32 = 8.0;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Colors {
    pub primary: Color32,
    pub surface: Color32,
    pub surface_highlight: Color32,
    pub background: Color32,
    pub text: Color32,
    pub gray_text1: Color32,
    pub gray_text2: Color32,
    pub gray1: Color32,
    pub gray2: Color32,
    pub gray3: Color32,
    pub danger: Color32,
    pub success: Color32,
    pub yellow: Color32,
    pub deep_blue: Color32,
    pub white: Color32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwitchStyle {
    pub active_color: Color32,
    pub inactive_color: Color32,
    pub thumb_color: Color32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub dark_mode: bool,
    pub color: Colors,
    pub switch_style: SwitchStyle,
}

pub type SharedTheme = Arc<ArcSwap<Theme>>;

pub fn shared_theme(dark_mode: bool) -> SharedTheme {
    Arc::new(ArcSwap::from_pointee(Theme::new(dark_mode)))
}

fn hex(s: &str) -> Color32 {
    match csscolorparser::parse(s) {
        Ok(c) => {
            let [r, g, b, a] = c.to_rgba8();
            Color32::from_rgba_unmultiplied(r, g, b, a)
        }
        Err(e) => {
            warn!("Invalid palette color {}: {}", s, e);
            Color32::TRANSPARENT
        }
    }
}

impl Colors {
    pub fn light() -> Self {
        Self {
            primary: hex("#2970ff"),
            surface: hex("#ffffff"),
            surface_highlight: hex("#f3f5f6"),
            background: hex("#f3f5f6"),
            text: hex("#091440"),
            gray_text1: hex("#3d5873"),
            gray_text2: hex("#596d81"),
            gray1: hex("#8997a5"),
            gray2: hex("#e6eaed"),
            gray3: hex("#c4cbd2"),
            danger: hex("#ed6d47"),
            success: hex("#41be53"),
            yellow: hex("#ffc84e"),
            deep_blue: hex("#091440"),
            white: hex("#ffffff"),
        }
    }

    pub fn dark() -> Self {
        Self {
            primary: hex("#57b6ff"),
            surface: hex("#252525"),
            surface_highlight: hex("#303030"),
            background: hex("#181818"),
            text: hex("#ffffffde"),
            gray_text1: hex("#ffffffde"),
            gray_text2: hex("#ffffff99"),
            gray1: hex("#ffffff61"),
            gray2: hex("#3d3d3d"),
            gray3: hex("#8997a5"),
            danger: hex("#ed6d47"),
            success: hex("#41be53"),
            yellow: hex("#ffc84e"),
            deep_blue: hex("#ffffffde"),
            white: hex("#ffffff"),
        }
    }
}

impl Theme {
    pub fn new(dark_mode: bool) -> Self {
        let color = if dark_mode { Colors::dark() } else { Colors::light() };
        let switch_style = SwitchStyle {
            active_color: color.primary,
            inactive_color: color.gray3,
            thumb_color: color.white,
        };
        Self { dark_mode, color, switch_style }
    }

    pub fn visuals(&self) -> Visuals {
        let mut visuals = if self.dark_mode { Visuals::dark() } else { Visuals::light() };
        visuals.panel_fill = self.color.background;
        visuals.window_fill = self.color.surface;
        visuals.extreme_bg_color = self.color.surface;
        visuals.selection.bg_fill = self.color.primary;
        visuals.hyperlink_color = self.color.primary;
        visuals.override_text_color = Some(self.color.text);
        visuals
    }

    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_visuals(self.visuals());
    }
}

/// Approximate luminance of an sRGB color, weights scaled to a 16 bit sum.
fn approx_luminance(r: u8, g: u8, b: u8) -> u8 {
    const R: u32 = 13933;
    const G: u32 = 46871;
    const B: u32 = 4732;
    const T: u32 = R + G + B;
    ((R * r as u32 + G * g as u32 + B * b as u32) / T) as u8
}

fn mix(a: u8, b: u8, ratio: u32) -> u8 {
    ((a as u32 * ratio + b as u32 * (256 - ratio)) / 256) as u8
}

/// Greyed out variant of a color used by disabled widgets.
pub fn disabled(c: Color32) -> Color32 {
    const BLEND: u32 = 80;
    const ALPHA: u32 = 128 + 32;
    let [r, g, b, a] = c.to_srgba_unmultiplied();
    let lum = approx_luminance(r, g, b);
    let a = mix(a, a, BLEND);
    let a = (a as u32 * ALPHA / 0xFF) as u8;
    Color32::from_rgba_unmultiplied(mix(r, lum, BLEND), mix(g, lum, BLEND), mix(b, lum, BLEND), a)
}
