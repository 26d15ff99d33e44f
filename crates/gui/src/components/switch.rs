use eframe::egui::{vec2, Color32, Pos2, Rect, Response, Sense, Ui, Vec2};

use crate::theme::{disabled, SwitchStyle};

const TRACK_WIDTH: f32 = 32.0;
const TRACK_HEIGHT: f32 = 20.0;
const THUMB_SIZE: f32 = 18.0;
const CLICK_SIZE: f32 = 38.0;
const SHADOW_DROP: f32 = 0.25;

/// Where each part of a switch is painted, relative to the widget origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchGeometry {
    pub track: Rect,
    pub track_rounding: f32,
    pub thumb_center: Pos2,
    pub thumb_radius: f32,
    pub shadow_center: Pos2,
    pub shadow_radius: f32,
    pub click_area: Rect,
    pub size: Vec2,
}

impl SwitchGeometry {
    pub fn compute(origin: Pos2, checked: bool) -> Self {
        // Track is taller than the thumb, so it sits slightly above the origin.
        let track_off = ((THUMB_SIZE - TRACK_HEIGHT) / 2.0).trunc();
        let track = Rect::from_min_size(
            origin + vec2(0.0, track_off),
            vec2(TRACK_WIDTH, TRACK_HEIGHT),
        );
        let thumb_radius = THUMB_SIZE / 2.0;
        let thumb_x = if checked { TRACK_WIDTH - THUMB_SIZE } else { 0.0 };
        let thumb_center = origin + vec2(thumb_x + thumb_radius, thumb_radius);
        let shadow_center = thumb_center + vec2(0.0, SHADOW_DROP);
        // The click circle travels with the thumb.
        let click_off = vec2(
            thumb_x + TRACK_WIDTH - CLICK_SIZE,
            TRACK_HEIGHT - (CLICK_SIZE / 2.0).trunc() + track_off,
        );
        let click_area = Rect::from_min_size(origin + click_off, vec2(CLICK_SIZE, CLICK_SIZE));
        Self {
            track,
            track_rounding: TRACK_HEIGHT / 2.0,
            thumb_center,
            thumb_radius,
            shadow_center,
            shadow_radius: thumb_radius + 1.0,
            click_area,
            size: vec2(TRACK_WIDTH, THUMB_SIZE),
        }
    }

    /// The click area is the circle inscribed in `click_area`.
    pub fn hits(&self, pos: Pos2) -> bool {
        let r = self.click_area.width() / 2.0;
        self.click_area.center().distance(pos) <= r
    }
}

#[derive(Debug, Clone)]
pub struct Switch {
    style: SwitchStyle,
    disabled: bool,
    checked: bool,
    changed: bool,
}

impl Switch {
    pub fn new(style: SwitchStyle) -> Self {
        Self {
            style,
            disabled: false,
            checked: false,
            changed: false,
        }
    }

    /// Flip the value as a click would. Ignored while disabled.
    pub fn toggle(&mut self) {
        if self.disabled {
            return;
        }
        self.checked = !self.checked;
        self.changed = true;
    }

    /// True once after each toggle.
    pub fn changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, value: bool) {
        self.checked = value;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    pub fn is_enabled(&self) -> bool {
        !self.disabled
    }

    pub fn set_style(&mut self, style: SwitchStyle) {
        self.style = style;
    }

    /// Track and thumb colors for the current state.
    pub fn colors(&self) -> (Color32, Color32) {
        let (mut active, mut inactive, mut thumb) =
            (self.style.active_color, self.style.inactive_color, self.style.thumb_color);
        if self.disabled {
            active = disabled(active);
            inactive = disabled(inactive);
            thumb = disabled(thumb);
        }
        let track = if self.checked { active } else { inactive };
        (track, thumb)
    }

    pub fn layout(&mut self, ui: &mut Ui) -> Response {
        let size = SwitchGeometry::compute(Pos2::ZERO, self.checked).size;
        let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
        let geometry = SwitchGeometry::compute(rect.min, self.checked);

        let click = ui.interact(geometry.click_area, response.id.with("switch_click"), Sense::click());
        if click.clicked() {
            let inside = click.interact_pointer_pos().map(|p| geometry.hits(p)).unwrap_or(true);
            if inside {
                self.toggle();
            }
        }
        // The painted state follows the toggle in the same frame.
        let geometry = SwitchGeometry::compute(rect.min, self.checked);
        let (track_color, thumb_color) = self.colors();

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            painter.rect_filled(geometry.track, geometry.track_rounding, track_color);
            painter.circle_filled(geometry.shadow_center, geometry.shadow_radius, track_color);
            painter.circle_filled(geometry.thumb_center, geometry.thumb_radius, thumb_color);
        }
        click.union(response)
    }
}
