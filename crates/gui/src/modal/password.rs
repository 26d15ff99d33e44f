use dcrdesk_schema::errors::ERR_INVALID_PASSPHRASE;
use dcrdesk_schema::values::{string, Str};
use eframe::egui;
use eframe::egui::Layout;

use crate::common::{body2, error_label, h6, outline_button, primary_button};
use crate::components::clickable::Clickable;
use crate::components::editor::Editor;
use crate::modal::{modal_event_channel, Modal, ModalEventSender, ModalFrame, PasswordModalEvent};
use crate::page::GuiContext;
use crate::theme::values;

pub const PASSWORD_MODAL_ID: &str = "password_modal";

pub type PasswordEntered<G> = Box<dyn FnMut(&str, &mut PasswordModal<G>, &mut G) -> bool>;

/// Asks for the spending password of an existing wallet.
pub struct PasswordModal<G> {
    frame: ModalFrame<G>,
    gctx: GuiContext<G>,
    title: String,
    description: String,
    password: Editor,
    confirm: Clickable,
    cancel: Clickable,
    is_loading: bool,
    error: String,
    callback: Option<PasswordEntered<G>>,
    negative_button: Option<Box<dyn FnMut(&mut G)>>,
    events: flume::Receiver<PasswordModalEvent>,
    event_sender: ModalEventSender,
}

impl<G: 'static> PasswordModal<G> {
    pub fn new(gctx: &GuiContext<G>) -> Self {
        let (event_sender, events) = modal_event_channel();
        Self {
            frame: ModalFrame::new(PASSWORD_MODAL_ID, gctx.nav.clone()),
            gctx: gctx.clone(),
            title: String::new(),
            description: String::new(),
            password: Editor::password(string(Str::SpendingPassword)),
            confirm: Clickable::new(),
            cancel: Clickable::new(),
            is_loading: false,
            error: String::new(),
            callback: None,
            negative_button: None,
            events,
            event_sender,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.password.hint = hint.into();
        self
    }

    pub fn password_entered(mut self, callback: impl FnMut(&str, &mut PasswordModal<G>, &mut G) -> bool + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    pub fn negative_button(mut self, callback: impl FnMut(&mut G) + 'static) -> Self {
        self.negative_button = Some(Box::new(callback));
        self
    }

    pub fn event_sender(&self) -> ModalEventSender {
        self.event_sender.clone()
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        let error = error.into();
        self.error = if error == ERR_INVALID_PASSPHRASE {
            string(Str::InvalidPassphrase).to_string()
        } else {
            error
        };
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn set_password(&mut self, text: impl Into<String>) {
        self.password.set_text(text);
    }

    pub fn click_confirm(&mut self) {
        self.confirm.click();
    }

    pub fn click_cancel(&mut self) {
        self.cancel.click();
    }

    pub fn is_dismissed(&self) -> bool {
        self.frame.is_dismissed()
    }

    pub fn dismiss(&mut self) {
        self.frame.dismiss();
    }

    fn submit(&mut self, g: &mut G) {
        self.set_loading(true);
        let password = self.password.text().to_string();
        match self.callback.take() {
            Some(mut callback) => {
                let done = callback(&password, self, g);
                self.callback = Some(callback);
                if done {
                    self.frame.dismiss();
                }
            }
            None => self.frame.dismiss(),
        }
    }
}

impl<G: 'static> Modal<G> for PasswordModal<G> {
    fn id(&self) -> &str {
        self.frame.id()
    }

    fn on_resume(&mut self, _g: &mut G) {
        self.password.focus();
    }

    fn handle(&mut self, g: &mut G) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                PasswordModalEvent::SetError(e) => self.set_error(e),
                PasswordModalEvent::SetLoading(l) => self.set_loading(l),
                PasswordModalEvent::Dismiss => self.frame.dismiss(),
            }
        }
        if self.frame.is_dismissed() {
            return;
        }

        let events = self.password.take_events();
        if events.changed {
            self.error.clear();
            self.password.set_error("");
        }

        let confirm_clicked = self.confirm.clicked();
        if (confirm_clicked || events.submit) && !self.is_loading {
            if self.password.is_empty() {
                self.password.set_error(string(Str::EnterSpendingPassword));
            } else {
                self.submit(g);
            }
        }

        let cancelled = self.cancel.clicked() || self.frame.backdrop_clicked();
        if cancelled && !self.is_loading {
            if let Some(callback) = self.negative_button.as_mut() {
                callback(g);
            }
            self.frame.dismiss();
        }
    }

    fn layout(&mut self, ctx: &egui::Context, _g: &G) {
        let theme = self.gctx.theme();
        let Self { frame, title, description, password, confirm, cancel, is_loading, error, .. } = self;
        frame.layout(ctx, &theme, |ui| {
            h6(ui, &theme, title.clone());
            if !description.is_empty() {
                body2(ui, &theme, description.clone());
            }
            ui.add_space(values::MARGIN_PADDING_12);
            ui.add_enabled_ui(!*is_loading, |ui| {
                password.layout(ui, &theme);
            });
            if !error.is_empty() {
                error_label(ui, &theme, error.clone());
            }
            ui.add_space(values::MARGIN_PADDING_16);
            ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
                if *is_loading {
                    ui.spinner();
                } else {
                    let enabled = !password.is_empty();
                    confirm.add_enabled(ui, enabled, primary_button(&theme, string(Str::Confirm), enabled));
                    cancel.add(ui, outline_button(&theme, string(Str::Cancel)));
                }
            });
        });
    }
}
