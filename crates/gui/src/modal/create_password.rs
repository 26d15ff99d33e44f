use dcrdesk_schema::errors::{ERR_EXIST, ERR_INVALID_PASSPHRASE};
use dcrdesk_schema::values::{string, string_f, Str};
use eframe::egui;
use eframe::egui::{Layout, RichText, Ui};

use crate::common::{body2, h6, outline_button, primary_button, small_label};
use crate::components::clickable::Clickable;
use crate::components::editor::{handle_editor_events, Editor};
use crate::components::password_strength::PasswordStrength;
use crate::modal::{modal_event_channel, Modal, ModalEventSender, ModalFrame, PasswordModalEvent};
use crate::page::GuiContext;
use crate::theme::{values, Theme};

pub const CREATE_PASSWORD_MODAL_ID: &str = "create_password_modal";

/// Receives `(wallet_name, password, modal, deps)`; returning true dismisses the modal.
pub type PasswordCreated<G> = Box<dyn FnMut(&str, &str, &mut CreatePasswordModal<G>, &mut G) -> bool>;
pub type NegativeButton<G> = Box<dyn FnMut(&mut G)>;

pub struct CreatePasswordModal<G> {
    frame: ModalFrame<G>,
    gctx: GuiContext<G>,
    title: String,
    description: String,

    wallet_name: Editor,
    password: Editor,
    confirm_password: Editor,
    strength: PasswordStrength,

    name_enabled: bool,
    show_wallet_info_tip: bool,
    is_loading: bool,
    is_cancelable: bool,
    positive_enabled: bool,
    server_error: String,

    confirm: Clickable,
    cancel: Clickable,
    parent: Option<String>,

    password_created: Option<PasswordCreated<G>>,
    negative_button: Option<NegativeButton<G>>,
    events: flume::Receiver<PasswordModalEvent>,
    event_sender: ModalEventSender,
}

impl<G: 'static> CreatePasswordModal<G> {
    pub fn new(gctx: &GuiContext<G>) -> Self {
        let (event_sender, events) = modal_event_channel();
        Self {
            frame: ModalFrame::new(CREATE_PASSWORD_MODAL_ID, gctx.nav.clone()),
            gctx: gctx.clone(),
            title: string(Str::CreateWallet).to_string(),
            description: String::new(),
            wallet_name: Editor::new(string(Str::WalletName)),
            password: Editor::password(string(Str::SpendingPassword)),
            confirm_password: Editor::password(string(Str::ConfirmSpendingPassword)),
            strength: PasswordStrength::default(),
            name_enabled: false,
            show_wallet_info_tip: false,
            is_loading: false,
            is_cancelable: true,
            positive_enabled: false,
            server_error: String::new(),
            confirm: Clickable::new(),
            cancel: Clickable::new(),
            parent: None,
            password_created: None,
            negative_button: None,
            events,
            event_sender,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn enable_name(mut self, enable: bool) -> Self {
        self.name_enabled = enable;
        self
    }

    pub fn password_hint(mut self, hint: impl Into<String>) -> Self {
        self.password.hint = hint.into();
        self
    }

    pub fn confirm_password_hint(mut self, hint: impl Into<String>) -> Self {
        self.confirm_password.hint = hint.into();
        self
    }

    pub fn show_wallet_info_tip(mut self, show: bool) -> Self {
        self.show_wallet_info_tip = show;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn set_cancelable(mut self, cancelable: bool) -> Self {
        self.is_cancelable = cancelable;
        self
    }

    /// Page id to re-navigate to when the modal is cancelled.
    pub fn parent(mut self, page_id: impl Into<String>) -> Self {
        self.parent = Some(page_id.into());
        self
    }

    pub fn negative_button(mut self, callback: impl FnMut(&mut G) + 'static) -> Self {
        self.negative_button = Some(Box::new(callback));
        self
    }

    pub fn password_created(mut self, callback: impl FnMut(&str, &str, &mut CreatePasswordModal<G>, &mut G) -> bool + 'static) -> Self {
        self.password_created = Some(Box::new(callback));
        self
    }

    /// Sender for results of work spawned from the password callback.
    pub fn event_sender(&self) -> ModalEventSender {
        self.event_sender.clone()
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Server side error. `exists` becomes the wallet name error when the name
    /// field is shown; anything else is shown as a banner.
    pub fn set_error(&mut self, error: impl Into<String>) {
        let error = error.into();
        if error == ERR_EXIST && self.name_enabled {
            let name = self.wallet_name.text().to_string();
            self.wallet_name.set_error(string_f(Str::WalletExist, name));
            self.server_error.clear();
        } else if error == ERR_INVALID_PASSPHRASE {
            self.server_error = string(Str::InvalidPassphrase).to_string();
        } else {
            self.server_error = error;
        }
    }

    pub fn server_error(&self) -> &str {
        &self.server_error
    }

    pub fn name_error(&self) -> Option<&str> {
        self.wallet_name.error()
    }

    pub fn password_error(&self) -> Option<&str> {
        self.password.error()
    }

    pub fn confirm_error(&self) -> Option<&str> {
        self.confirm_password.error()
    }

    pub fn is_positive_enabled(&self) -> bool {
        self.positive_enabled
    }

    pub fn strength(&self) -> f32 {
        self.strength.progress
    }

    pub fn is_dismissed(&self) -> bool {
        self.frame.is_dismissed()
    }

    pub fn set_wallet_name(&mut self, text: impl Into<String>) {
        self.wallet_name.set_text(text);
    }

    pub fn set_password(&mut self, text: impl Into<String>) {
        self.password.set_text(text);
    }

    pub fn set_confirm_password(&mut self, text: impl Into<String>) {
        self.confirm_password.set_text(text);
    }

    pub fn click_confirm(&mut self) {
        self.confirm.click();
    }

    pub fn click_cancel(&mut self) {
        self.cancel.click();
    }

    pub fn click_backdrop(&mut self) {
        self.frame.click_backdrop();
    }

    /// Enter pressed in the password field.
    pub fn submit_password(&mut self) {
        self.password.submit();
    }

    pub fn dismiss(&mut self) {
        self.frame.dismiss();
    }

    fn clear_errors(&mut self) {
        self.server_error.clear();
        self.wallet_name.set_error("");
        self.password.set_error("");
        self.confirm_password.set_error("");
    }

    fn any_editor_filled(&self) -> bool {
        (self.name_enabled && !self.wallet_name.is_empty())
            || !self.password.is_empty()
            || !self.confirm_password.is_empty()
    }

    /// First failing rule sets its field error.
    fn validate(&mut self) -> bool {
        if self.name_enabled && self.wallet_name.is_empty() {
            self.wallet_name.set_error(string(Str::EnterWalletName));
            return false;
        }
        if self.password.is_empty() {
            self.password.set_error(string(Str::EnterSpendingPassword));
            return false;
        }
        if self.confirm_password.is_empty() {
            self.confirm_password.set_error(string(Str::ConfirmSpendingPassword));
            return false;
        }
        if self.password.text() != self.confirm_password.text() {
            self.confirm_password.set_error(string(Str::PasswordNotMatch));
            return false;
        }
        true
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                PasswordModalEvent::SetError(e) => self.set_error(e),
                PasswordModalEvent::SetLoading(l) => self.set_loading(l),
                PasswordModalEvent::Dismiss => self.frame.dismiss(),
            }
        }
    }

    fn submit(&mut self, g: &mut G) {
        self.set_loading(true);
        let name = self.wallet_name.text().to_string();
        let password = self.password.text().to_string();
        match self.password_created.take() {
            Some(mut callback) => {
                let done = callback(&name, &password, self, g);
                self.password_created = Some(callback);
                if done {
                    self.frame.dismiss();
                }
            }
            None => self.frame.dismiss(),
        }
    }

    fn editor_block(ui: &mut Ui, theme: &Theme, editor: &mut Editor, counter: bool) {
        editor.layout(ui, theme);
        if counter && editor.len() > 0 {
            ui.with_layout(Layout::right_to_left(egui::Align::Min), |ui| {
                small_label(ui, theme.color.gray_text2, editor.len().to_string());
            });
        }
        ui.add_space(values::MARGIN_PADDING_8);
    }
}

impl<G: 'static> Modal<G> for CreatePasswordModal<G> {
    fn id(&self) -> &str {
        self.frame.id()
    }

    fn on_resume(&mut self, _g: &mut G) {
        if self.name_enabled {
            self.wallet_name.focus();
        } else {
            self.password.focus();
        }
    }

    fn handle(&mut self, g: &mut G) {
        self.drain_events();
        if self.frame.is_dismissed() {
            return;
        }

        let editors = handle_editor_events(&mut [&mut self.wallet_name, &mut self.password, &mut self.confirm_password]);
        if editors.changed {
            self.clear_errors();
        }
        self.positive_enabled = self.any_editor_filled();
        self.strength.compute(self.password.text());

        let confirm_clicked = self.confirm.clicked();
        if (confirm_clicked || editors.submit) && self.positive_enabled && !self.is_loading && self.validate() {
            self.submit(g);
        }

        let cancel_clicked = self.cancel.clicked();
        if cancel_clicked && !self.is_loading {
            if let Some(parent) = &self.parent {
                self.gctx.nav.resume_page(parent.clone());
            }
            if let Some(callback) = self.negative_button.as_mut() {
                callback(g);
            }
            self.frame.dismiss();
        }

        let backdrop = self.frame.backdrop_clicked();
        if backdrop && self.is_cancelable && !self.is_loading {
            self.frame.dismiss();
        }
    }

    fn layout(&mut self, ctx: &egui::Context, _g: &G) {
        let theme = self.gctx.theme();
        let theme: &Theme = &theme;
        let Self {
            frame,
            title,
            description,
            wallet_name,
            password,
            confirm_password,
            strength,
            name_enabled,
            show_wallet_info_tip,
            is_loading,
            positive_enabled,
            server_error,
            confirm,
            cancel,
            ..
        } = self;
        frame.layout(ctx, theme, |ui| {
            h6(ui, theme, title.clone());
            if !description.is_empty() {
                body2(ui, theme, description.clone());
            }
            if !server_error.is_empty() {
                egui::Frame::none()
                    .fill(theme.color.danger)
                    .rounding(values::MARGIN_PADDING_4)
                    .inner_margin(egui::Margin::same(values::MARGIN_PADDING_8))
                    .show(ui, |ui| {
                        ui.label(RichText::new(server_error.clone()).color(theme.color.white));
                    });
            }
            ui.add_space(values::MARGIN_PADDING_12);

            ui.add_enabled_ui(!*is_loading, |ui| {
                if *name_enabled {
                    Self::editor_block(ui, theme, wallet_name, false);
                }
                Self::editor_block(ui, theme, password, true);
                strength.layout(ui, theme);
                ui.add_space(values::MARGIN_PADDING_8);
                Self::editor_block(ui, theme, confirm_password, true);
            });

            if *show_wallet_info_tip {
                small_label(ui, theme.color.gray_text2, string(Str::SpendingPasswordInfo2));
            }
            ui.add_space(values::MARGIN_PADDING_16);

            ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
                if *is_loading {
                    ui.spinner();
                } else {
                    let enabled = *positive_enabled;
                    confirm.add_enabled(ui, enabled, primary_button(theme, string(Str::Confirm), enabled));
                    cancel.add(ui, outline_button(theme, string(Str::Cancel)));
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::navigator::{NavCommand, Navigator};
    use crate::theme::shared_theme;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Calls = Rc<RefCell<Vec<(String, String)>>>;

    fn modal(name: bool, result: bool) -> (CreatePasswordModal<()>, flume::Receiver<NavCommand<()>>, Calls) {
        let (nav, rx) = Navigator::channel();
        let gctx = GuiContext { theme: shared_theme(false), nav };
        let calls: Calls = Rc::new(RefCell::new(vec![]));
        let seen = calls.clone();
        let m = CreatePasswordModal::new(&gctx)
            .enable_name(name)
            .parent("Wallets")
            .password_created(move |n, p, _m, _g| {
                seen.borrow_mut().push((n.to_string(), p.to_string()));
                result
            });
        (m, rx, calls)
    }

    fn sent(rx: &flume::Receiver<NavCommand<()>>) -> Vec<String> {
        rx.try_iter().map(|c| c.describe()).collect()
    }

    #[test]
    fn matching_passwords_are_submitted() {
        let (mut m, rx, calls) = modal(true, true);
        m.set_wallet_name("w1");
        m.set_password("abc");
        m.set_confirm_password("abc");
        m.click_confirm();
        m.handle(&mut ());
        assert_eq!(*calls.borrow(), vec![("w1".to_string(), "abc".to_string())]);
        assert!(m.is_loading());
        assert!(m.is_dismissed());
        assert_eq!(sent(&rx), vec!["dismiss_modal:create_password_modal"]);
    }

    #[test]
    fn mismatch_blocks_with_confirm_error() {
        let (mut m, rx, calls) = modal(true, true);
        m.set_wallet_name("w1");
        m.set_password("abc");
        m.set_confirm_password("abx");
        m.click_confirm();
        m.handle(&mut ());
        assert!(calls.borrow().is_empty());
        assert_eq!(m.confirm_error(), Some("Passwords do not match"));
        assert!(!m.is_loading());
        assert!(rx.is_empty());
    }

    #[test]
    fn required_fields_in_order() {
        let (mut m, _rx, calls) = modal(true, true);
        m.set_confirm_password("x");
        m.click_confirm();
        m.handle(&mut ());
        assert_eq!(m.name_error(), Some("Enter wallet name"));
        assert_eq!(m.password_error(), None);

        m.set_wallet_name("w1");
        m.click_confirm();
        m.handle(&mut ());
        assert_eq!(m.name_error(), None);
        assert_eq!(m.password_error(), Some("Enter spending password"));

        m.set_password("abc");
        m.set_confirm_password("");
        m.click_confirm();
        m.handle(&mut ());
        assert_eq!(m.confirm_error(), Some("Confirm spending password"));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn nothing_typed_keeps_confirm_disabled() {
        let (mut m, _rx, calls) = modal(false, true);
        m.click_confirm();
        m.handle(&mut ());
        assert!(!m.is_positive_enabled());
        assert_eq!(m.password_error(), None);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn any_edit_clears_every_error() {
        let (mut m, _rx, _calls) = modal(true, false);
        m.set_wallet_name("w1");
        m.set_password("abc");
        m.set_confirm_password("abx");
        m.click_confirm();
        m.handle(&mut ());
        m.set_error("disk full");
        assert!(m.confirm_error().is_some());
        assert_eq!(m.server_error(), "disk full");

        m.set_wallet_name("w2");
        m.handle(&mut ());
        assert_eq!(m.confirm_error(), None);
        assert_eq!(m.name_error(), None);
        assert_eq!(m.password_error(), None);
        assert_eq!(m.server_error(), "");
    }

    #[test]
    fn exists_sentinel_maps_to_name_error() {
        let (mut m, _rx, _calls) = modal(true, false);
        m.set_wallet_name("w1");
        m.set_error(ERR_EXIST);
        assert_eq!(m.name_error(), Some("Wallet with name: w1 already exists"));
        assert_eq!(m.server_error(), "");

        let (mut no_name, _rx, _calls) = modal(false, false);
        no_name.set_error(ERR_EXIST);
        assert_eq!(no_name.server_error(), ERR_EXIST);
    }

    #[test]
    fn callback_false_keeps_modal_loading() {
        let (mut m, rx, calls) = modal(false, false);
        m.set_password("abc");
        m.set_confirm_password("abc");
        m.submit_password();
        m.handle(&mut ());
        assert_eq!(calls.borrow().len(), 1);
        assert!(m.is_loading());
        assert!(!m.is_dismissed());

        // cancel is ignored while loading
        m.click_cancel();
        m.click_backdrop();
        m.handle(&mut ());
        assert!(!m.is_dismissed());
        assert!(rx.is_empty());
    }

    #[test]
    fn spawned_results_arrive_through_events() {
        let (mut m, rx, _calls) = modal(true, false);
        let events = m.event_sender();
        m.set_wallet_name("w1");
        m.set_password("abc");
        m.set_confirm_password("abc");
        m.click_confirm();
        m.handle(&mut ());
        assert!(m.is_loading());

        events.set_error(ERR_EXIST);
        events.set_loading(false);
        m.handle(&mut ());
        assert!(!m.is_loading());
        assert_eq!(m.name_error(), Some("Wallet with name: w1 already exists"));

        events.dismiss();
        m.handle(&mut ());
        assert_eq!(sent(&rx), vec!["dismiss_modal:create_password_modal"]);
    }

    #[test]
    fn cancel_resumes_parent_and_dismisses() {
        let (mut m, rx, _calls) = modal(false, true);
        m.click_cancel();
        m.handle(&mut ());
        assert_eq!(sent(&rx), vec!["resume_page:Wallets", "dismiss_modal:create_password_modal"]);
    }

    #[test]
    fn backdrop_respects_cancelable() {
        let (m, rx, _calls) = modal(false, true);
        let mut m = m.set_cancelable(false);
        m.click_backdrop();
        m.handle(&mut ());
        assert!(!m.is_dismissed());
        assert!(rx.is_empty());
    }

    #[test]
    fn strength_follows_password() {
        let (mut m, _rx, _calls) = modal(false, true);
        m.set_password("abcd");
        m.handle(&mut ());
        assert_eq!(m.strength(), 0.5);
    }

    #[test]
    fn renders_headless() {
        let (mut m, _rx, _calls) = modal(true, true);
        m.set_password("abc");
        m.set_error("disk full");
        let ctx = egui::Context::default();
        for _ in 0..2 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                m.layout(ctx, &());
            });
        }
        assert_eq!(m.server_error(), "disk full");
    }
}
