use eframe::egui;
use eframe::egui::{Key, Response, Ui};

use crate::common::error_label;
use crate::theme::Theme;

/// Single line text field state: text, hint, inline error and pending events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Editor {
    pub hint: String,
    text: String,
    error: Option<String>,
    password: bool,
    edited: bool,
    submitted: bool,
    focus_requested: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditorEvents {
    pub submit: bool,
    pub changed: bool,
}

impl Editor {
    pub fn new(hint: impl Into<String>) -> Self {
        Self {
            hint: hint.into(),
            ..Default::default()
        }
    }

    pub fn password(hint: impl Into<String>) -> Self {
        Self {
            password: true,
            ..Self::new(hint)
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the text and reports it as an edit, the same as typing would.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.text {
            self.text = text;
            self.edited = true;
        }
    }

    /// Clears the text without reporting an edit.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// An empty message clears the error.
    pub fn set_error(&mut self, error: impl Into<String>) {
        let error = error.into();
        self.error = if error.is_empty() { None } else { Some(error) };
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Enter pressed in this field.
    pub fn submit(&mut self) {
        self.submitted = true;
    }

    pub fn focus(&mut self) {
        self.focus_requested = true;
    }

    pub fn take_events(&mut self) -> EditorEvents {
        EditorEvents {
            submit: std::mem::take(&mut self.submitted),
            changed: std::mem::take(&mut self.edited),
        }
    }

    pub fn layout(&mut self, ui: &mut Ui, theme: &Theme) -> Response {
        let response = ui.add(
            egui::TextEdit::singleline(&mut self.text)
                .hint_text(self.hint.clone())
                .password(self.password)
                .desired_width(f32::INFINITY),
        );
        if std::mem::take(&mut self.focus_requested) {
            response.request_focus();
        }
        if response.changed() {
            self.edited = true;
        }
        if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            self.submitted = true;
        }
        if let Some(err) = &self.error {
            error_label(ui, theme, err.clone());
        }
        response
    }
}

/// Drains pending events of every editor: whether any submitted, whether any changed.
pub fn handle_editor_events(editors: &mut [&mut Editor]) -> EditorEvents {
    let mut events = EditorEvents::default();
    for e in editors.iter_mut() {
        let ev = e.take_events();
        events.submit |= ev.submit;
        events.changed |= ev.changed;
    }
    events
}

pub fn editors_not_empty(editors: &[&Editor]) -> bool {
    editors.iter().all(|e| !e.is_empty())
}
