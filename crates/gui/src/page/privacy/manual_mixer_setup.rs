use dcrdesk_schema::values::{string, Str};
use dcrdesk_schema::wallet::{AccountInfo, WalletInfo};
use eframe::egui::Ui;
use log::{error, info};

use crate::common::{body2, card, error_label, primary_button};
use crate::components::clickable::Clickable;
use crate::components::combo_box::combo_box;
use crate::components::sub_page::sub_page_header;
use crate::dependencies::gui_depends::WalletDepends;
use crate::modal::password::PasswordModal;
use crate::page::privacy::MixerSetupDone;
use crate::page::{renew_context, GuiContext, Page, PageContext};
use crate::theme::values;

pub const MANUAL_MIXER_SETUP_PAGE_ID: &str = "ManualMixerSetup";

/// Picks two existing accounts as the mixed and unmixed pair.
pub struct ManualMixerSetupPage<G> {
    gctx: GuiContext<G>,
    wallet: WalletInfo,
    ctx: Option<PageContext>,
    accounts: Vec<AccountInfo>,
    mixed_account: Option<i32>,
    unmixed_account: Option<i32>,
    back_button: Clickable,
    set_up: Clickable,
    finished_sender: flume::Sender<()>,
    finished: flume::Receiver<()>,
    parent_done: flume::Sender<MixerSetupDone>,
}

impl<G: WalletDepends> ManualMixerSetupPage<G> {
    pub fn new(gctx: &GuiContext<G>, wallet: WalletInfo, parent_done: flume::Sender<MixerSetupDone>) -> Self {
        let (finished_sender, finished) = flume::unbounded();
        Self {
            gctx: gctx.clone(),
            mixed_account: wallet.mixed_account,
            unmixed_account: wallet.unmixed_account,
            wallet,
            ctx: None,
            accounts: vec![],
            back_button: Clickable::new(),
            set_up: Clickable::new(),
            finished_sender,
            finished,
            parent_done,
        }
    }

    pub fn accounts(&self) -> &[AccountInfo] {
        &self.accounts
    }

    pub fn select_mixed(&mut self, account: i32) {
        self.mixed_account = Some(account);
    }

    pub fn select_unmixed(&mut self, account: i32) {
        self.unmixed_account = Some(account);
    }

    pub fn click_set_up(&mut self) {
        self.set_up.click();
    }

    pub fn click_back(&mut self) {
        self.back_button.click();
    }

    /// Both accounts chosen and distinct.
    pub fn can_set_up(&self) -> bool {
        match (self.mixed_account, self.unmixed_account) {
            (Some(m), Some(u)) => m != u,
            _ => false,
        }
    }

    fn password_modal(&mut self, mixed: i32, unmixed: i32) -> PasswordModal<G> {
        let wallet_id = self.wallet.id;
        let finished = self.finished_sender.clone();
        let interrupt = match &self.ctx {
            Some(ctx) => ctx.interrupt(),
            None => renew_context(&mut self.ctx),
        };
        PasswordModal::new(&self.gctx)
            .title(string(Str::ConfirmCreateNeededAccounts))
            .password_entered(move |password, modal, g: &mut G| {
                let events = modal.event_sender();
                let wallet = g.clone();
                let password = password.to_string();
                let finished = finished.clone();
                g.spawn_interrupt(async move {
                    match wallet.set_mixer_accounts(wallet_id, mixed, unmixed, &password) {
                        Ok(()) => {
                            let _ = finished.send(());
                            events.dismiss();
                        }
                        Err(e) => {
                            error!("Setting mixer accounts failed: {}", e);
                            events.fail(&e);
                        }
                    }
                }, interrupt.clone());
                false
            })
    }
}

impl<G: WalletDepends> Page<G> for ManualMixerSetupPage<G> {
    fn id(&self) -> &str {
        MANUAL_MIXER_SETUP_PAGE_ID
    }

    fn on_navigated_to(&mut self, g: &mut G) {
        renew_context(&mut self.ctx);
        self.accounts = match g.accounts(self.wallet.id) {
            Ok(accounts) => accounts,
            Err(e) => {
                error!("Loading accounts of wallet {} failed: {}", self.wallet.id, e);
                vec![]
            }
        };
    }

    fn handle_user_interactions(&mut self, _g: &mut G) {
        if self.finished.try_recv().is_ok() {
            info!("Manual mixer setup done for wallet {}", self.wallet.name);
            let _ = self.parent_done.send(MixerSetupDone { auto_move_funds: None });
            self.gctx.nav.close_current_page();
            return;
        }

        if self.back_button.clicked() {
            self.gctx.nav.close_current_page();
        }

        let set_up = self.set_up.clicked();
        if set_up && self.can_set_up() {
            if let (Some(mixed), Some(unmixed)) = (self.mixed_account, self.unmixed_account) {
                let modal = self.password_modal(mixed, unmixed);
                self.gctx.nav.show_modal(modal);
            }
        }
    }

    fn layout(&mut self, ui: &mut Ui, _g: &G) {
        let theme = self.gctx.theme();
        sub_page_header(ui, &theme, &mut self.back_button, string(Str::ManualSetup), Some(self.wallet.name.as_str()));
        let options: Vec<(i32, String)> = self.accounts.iter()
            .map(|a| (a.number, format!("{} ({})", a.name, a.balance_string())))
            .collect();
        let Self { mixed_account, unmixed_account, set_up, .. } = self;
        card(ui, &theme, |ui| {
            body2(ui, &theme, string(Str::MixedAccountDesc));
            combo_box(ui, mixed_account, string(Str::MixedAccount), string(Str::SelectAccount), options.clone(), false, 240.0);
            ui.add_space(values::MARGIN_PADDING_12);
            body2(ui, &theme, string(Str::UnmixedAccountDesc));
            combo_box(ui, unmixed_account, string(Str::UnmixedAccount), string(Str::SelectAccount), options, false, 240.0);
        });
        let same = mixed_account.is_some() && mixed_account == unmixed_account;
        if same {
            error_label(ui, &theme, string(Str::SameAccountSelected));
        }
        ui.add_space(values::MARGIN_PADDING_16);
        let enabled = mixed_account.is_some() && unmixed_account.is_some() && !same;
        set_up.add_enabled(ui, enabled, primary_button(&theme, string(Str::SetUp), enabled));
    }

    fn on_navigated_from(&mut self) {
        if let Some(ctx) = self.ctx.as_mut() {
            ctx.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependencies::mock_depends::MockWallet;
    use crate::modal::Modal;
    use crate::page::navigator::{NavCommand, Navigator};
    use crate::theme::shared_theme;

    fn page() -> (ManualMixerSetupPage<MockWallet>, flume::Receiver<NavCommand<MockWallet>>, flume::Receiver<MixerSetupDone>, MockWallet) {
        let g = MockWallet::with_wallet("w1", "pw");
        g.state.lock().unwrap().accounts.get_mut(&1).unwrap().push(AccountInfo {
            number: 1,
            name: "savings".to_string(),
            balance_atoms: 5,
        });
        let (nav, rx) = Navigator::channel();
        let gctx = GuiContext { theme: shared_theme(false), nav };
        let (done_sender, done) = flume::unbounded();
        let wallet = g.wallets()[0].clone();
        (ManualMixerSetupPage::new(&gctx, wallet, done_sender), rx, done, g)
    }

    #[test]
    fn accounts_load_on_navigation() {
        let (mut p, _rx, _done, mut g) = page();
        assert!(p.accounts().is_empty());
        p.on_navigated_to(&mut g);
        assert_eq!(p.accounts().len(), 2);
    }

    #[test]
    fn same_account_cannot_be_both() {
        let (mut p, rx, _done, mut g) = page();
        p.on_navigated_to(&mut g);
        assert!(!p.can_set_up());
        p.select_mixed(0);
        p.select_unmixed(0);
        assert!(!p.can_set_up());
        p.click_set_up();
        p.handle_user_interactions(&mut g);
        assert!(rx.is_empty());
        p.select_unmixed(1);
        assert!(p.can_set_up());
        p.click_set_up();
        p.handle_user_interactions(&mut g);
        let sent: Vec<String> = rx.try_iter().map(|c| c.describe()).collect();
        assert_eq!(sent, vec!["show_modal:password_modal"]);
    }

    #[test]
    fn success_closes_and_tells_parent() {
        let (mut p, rx, done, mut g) = page();
        p.on_navigated_to(&mut g);
        let mut pw = p.password_modal(1, 0);
        pw.set_password("pw");
        pw.click_confirm();
        pw.handle(&mut g);
        assert_eq!(g.calls(), vec!["set_mixer_accounts:1:1:0"]);

        p.handle_user_interactions(&mut g);
        assert_eq!(done.try_recv().ok(), Some(MixerSetupDone { auto_move_funds: None }));
        let sent: Vec<String> = rx.try_iter().map(|c| c.describe()).collect();
        assert_eq!(sent, vec!["close_current_page"]);
    }
}
