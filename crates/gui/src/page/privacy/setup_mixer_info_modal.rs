use dcrdesk_schema::values::{string, Str};
use dcrdesk_schema::wallet::{MIXED_ACCOUNT_NAME, UNMIXED_ACCOUNT_NAME};
use eframe::egui;
use eframe::egui::{Layout, RichText};
use log::error;

use crate::common::{body2, h6, outline_button, primary_button};
use crate::components::clickable::Clickable;
use crate::dependencies::gui_depends::WalletDepends;
use crate::modal::password::PasswordModal;
use crate::modal::{Modal, ModalFrame};
use crate::page::privacy::MixerSetupDone;
use crate::page::GuiContext;
use crate::theme::values;

pub const SETUP_MIXER_INFO_MODAL_ID: &str = "setup_mixer_info_modal";

/// Explains the mixed/unmixed accounts before creating them.
pub struct SetupMixerInfoModal<G> {
    frame: ModalFrame<G>,
    gctx: GuiContext<G>,
    wallet_id: i32,
    auto_move_funds: bool,
    cancel: Clickable,
    begin_setup: Clickable,
    done: flume::Sender<MixerSetupDone>,
    interrupt: flume::Receiver<()>,
}

impl<G: WalletDepends> SetupMixerInfoModal<G> {
    pub fn new(
        gctx: &GuiContext<G>,
        wallet_id: i32,
        done: flume::Sender<MixerSetupDone>,
        interrupt: flume::Receiver<()>,
    ) -> Self {
        Self {
            frame: ModalFrame::new(SETUP_MIXER_INFO_MODAL_ID, gctx.nav.clone()),
            gctx: gctx.clone(),
            wallet_id,
            auto_move_funds: false,
            cancel: Clickable::new(),
            begin_setup: Clickable::new(),
            done,
            interrupt,
        }
    }

    pub fn set_auto_move_funds(&mut self, value: bool) {
        self.auto_move_funds = value;
    }

    pub fn click_begin_setup(&mut self) {
        self.begin_setup.click();
    }

    pub fn click_cancel(&mut self) {
        self.cancel.click();
    }

    pub fn is_dismissed(&self) -> bool {
        self.frame.is_dismissed()
    }

    /// Password prompt that creates both accounts in the background.
    pub fn password_modal(&self) -> PasswordModal<G> {
        let wallet_id = self.wallet_id;
        let auto_move_funds = self.auto_move_funds;
        let done = self.done.clone();
        let interrupt = self.interrupt.clone();
        PasswordModal::new(&self.gctx)
            .title(string(Str::ConfirmCreateNeededAccounts))
            .password_entered(move |password, modal, g: &mut G| {
                let events = modal.event_sender();
                let wallet = g.clone();
                let password = password.to_string();
                let done = done.clone();
                g.spawn_interrupt(async move {
                    match wallet.create_mixer_accounts(wallet_id, MIXED_ACCOUNT_NAME, UNMIXED_ACCOUNT_NAME, &password) {
                        Ok(()) => {
                            let _ = done.send(MixerSetupDone { auto_move_funds: Some(auto_move_funds) });
                            events.dismiss();
                        }
                        Err(e) => {
                            error!("Creating mixer accounts failed: {}", e);
                            events.fail(&e);
                        }
                    }
                }, interrupt.clone());
                false
            })
    }
}

impl<G: WalletDepends> Modal<G> for SetupMixerInfoModal<G> {
    fn id(&self) -> &str {
        self.frame.id()
    }

    fn handle(&mut self, _g: &mut G) {
        let cancelled = self.cancel.clicked() || self.frame.backdrop_clicked();
        if cancelled {
            self.frame.dismiss();
            return;
        }
        if self.begin_setup.clicked() {
            self.frame.dismiss();
            let modal = self.password_modal();
            self.gctx.nav.show_modal(modal);
        }
    }

    fn layout(&mut self, ctx: &egui::Context, _g: &G) {
        let theme = self.gctx.theme();
        let Self { frame, auto_move_funds, cancel, begin_setup, .. } = self;
        frame.layout(ctx, &theme, |ui| {
            h6(ui, &theme, string(Str::SetupNeededAccounts));
            ui.add_space(values::MARGIN_PADDING_8);
            body2(ui, &theme, string(Str::MixerAccountsIntro));
            ui.add_space(values::MARGIN_PADDING_8);
            for (name, desc) in [(MIXED_ACCOUNT_NAME, Str::MixedAccountDesc), (UNMIXED_ACCOUNT_NAME, Str::UnmixedAccountDesc)] {
                ui.label(RichText::new(name).strong().color(theme.color.text));
                body2(ui, &theme, string(desc));
            }
            ui.add_space(values::MARGIN_PADDING_12);
            ui.checkbox(auto_move_funds, string(Str::AutoMoveFunds));
            ui.add_space(values::MARGIN_PADDING_16);
            ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
                begin_setup.add(ui, primary_button(&theme, string(Str::BeginSetup), true));
                cancel.add(ui, outline_button(&theme, string(Str::Cancel)));
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependencies::mock_depends::MockWallet;
    use crate::page::navigator::{NavCommand, Navigator};
    use crate::page::PageContext;
    use crate::theme::shared_theme;

    struct Fixture {
        modal: SetupMixerInfoModal<MockWallet>,
        rx: flume::Receiver<NavCommand<MockWallet>>,
        done: flume::Receiver<MixerSetupDone>,
        ctx: PageContext,
        g: MockWallet,
    }

    fn fixture() -> Fixture {
        let g = MockWallet::with_wallet("w1", "pw");
        let (nav, rx) = Navigator::channel();
        let gctx = GuiContext { theme: shared_theme(false), nav };
        let (done_sender, done) = flume::unbounded();
        let ctx = PageContext::new();
        let modal = SetupMixerInfoModal::new(&gctx, 1, done_sender, ctx.interrupt());
        Fixture { modal, rx, done, ctx, g }
    }

    #[test]
    fn begin_setup_swaps_to_password_prompt() {
        let mut f = fixture();
        f.modal.click_begin_setup();
        f.modal.handle(&mut f.g);
        assert!(f.modal.is_dismissed());
        let sent: Vec<String> = f.rx.try_iter().map(|c| c.describe()).collect();
        assert_eq!(sent, vec!["dismiss_modal:setup_mixer_info_modal", "show_modal:password_modal"]);
    }

    #[test]
    fn correct_password_creates_accounts() {
        let mut f = fixture();
        f.modal.set_auto_move_funds(true);
        let mut pw = f.modal.password_modal();
        pw.set_password("pw");
        pw.click_confirm();
        pw.handle(&mut f.g);
        assert_eq!(f.g.calls(), vec!["create_mixer_accounts:1:mixed:unmixed"]);
        assert_eq!(f.done.try_recv().ok(), Some(MixerSetupDone { auto_move_funds: Some(true) }));
        pw.handle(&mut f.g);
        assert!(pw.is_dismissed());
    }

    #[test]
    fn wrong_password_stays_open_with_error() {
        let mut f = fixture();
        let mut pw = f.modal.password_modal();
        pw.set_password("nope");
        pw.click_confirm();
        pw.handle(&mut f.g);
        pw.handle(&mut f.g);
        assert!(!pw.is_dismissed());
        assert!(!pw.is_loading());
        assert_eq!(pw.error(), "Password entered was not recognized");
        assert!(f.done.is_empty());
    }

    #[test]
    fn cancelled_page_drops_the_work() {
        let mut f = fixture();
        let mut pw = f.modal.password_modal();
        f.ctx.cancel();
        pw.set_password("pw");
        pw.click_confirm();
        pw.handle(&mut f.g);
        assert!(f.g.calls().is_empty());
        assert_eq!(f.g.state.lock().unwrap().interrupted, 1);
    }

    #[test]
    fn cancel_dismisses_without_prompt() {
        let mut f = fixture();
        f.modal.click_cancel();
        f.modal.handle(&mut f.g);
        let sent: Vec<String> = f.rx.try_iter().map(|c| c.describe()).collect();
        assert_eq!(sent, vec!["dismiss_modal:setup_mixer_info_modal"]);
    }
}
