use dcrdesk_schema::config_data::{wallet_config_key, AUTO_MOVE_FUNDS_CONFIG_SUFFIX};
use dcrdesk_schema::values::{string, Str};
use dcrdesk_schema::wallet::{WalletInfo, MIXED_ACCOUNT_NAME, UNMIXED_ACCOUNT_NAME};
use eframe::egui;
use eframe::egui::{RichText, Ui};
use log::info;

use crate::common::{body2, card};
use crate::components::clickable::Clickable;
use crate::components::sub_page::sub_page_header;
use crate::dependencies::gui_depends::WalletDepends;
use crate::page::privacy::manual_mixer_setup::ManualMixerSetupPage;
use crate::page::privacy::setup_mixer_info_modal::SetupMixerInfoModal;
use crate::page::privacy::MixerSetupDone;
use crate::page::{renew_context, GuiContext, Page, PageContext};
use crate::theme::{values, Theme};

pub const SETUP_MIXER_ACCOUNTS_PAGE_ID: &str = "SetupMixerAccounts";

/// Lets the user choose between automatic and manual mixer account setup.
pub struct SetupMixerAccountsPage<G> {
    gctx: GuiContext<G>,
    wallet: WalletInfo,
    ctx: Option<PageContext>,
    back_button: Clickable,
    auto_setup: Clickable,
    manual_setup: Clickable,
    done_sender: flume::Sender<MixerSetupDone>,
    done: flume::Receiver<MixerSetupDone>,
}

impl<G: WalletDepends> SetupMixerAccountsPage<G> {
    pub fn new(gctx: &GuiContext<G>, wallet: WalletInfo) -> Self {
        let (done_sender, done) = flume::unbounded();
        Self {
            gctx: gctx.clone(),
            wallet,
            ctx: None,
            back_button: Clickable::new(),
            auto_setup: Clickable::new(),
            manual_setup: Clickable::new(),
            done_sender,
            done,
        }
    }

    pub fn click_back(&mut self) {
        self.back_button.click();
    }

    pub fn click_auto_setup(&mut self) {
        self.auto_setup.click();
    }

    pub fn click_manual_setup(&mut self) {
        self.manual_setup.click();
    }

    pub fn context(&self) -> Option<&PageContext> {
        self.ctx.as_ref()
    }

    fn interrupt(&mut self) -> flume::Receiver<()> {
        match &self.ctx {
            Some(ctx) => ctx.interrupt(),
            None => renew_context(&mut self.ctx),
        }
    }

    fn intro_card(ui: &mut Ui, theme: &Theme) {
        card(ui, theme, |ui| {
            ui.set_width(ui.available_width());
            body2(ui, theme, string(Str::MixerAccountsIntro));
            ui.add_space(values::MARGIN_PADDING_8);
            for (name, desc) in [(MIXED_ACCOUNT_NAME, Str::MixedAccountDesc), (UNMIXED_ACCOUNT_NAME, Str::UnmixedAccountDesc)] {
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new("\u{2022}").color(theme.color.text));
                    ui.label(RichText::new(name).strong().color(theme.color.text));
                    body2(ui, theme, string(desc));
                });
            }
        });
    }

    fn option_card(ui: &mut Ui, theme: &Theme, button: &mut Clickable, title: Str, desc: Str) {
        let response = card(ui, theme, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(string(title)).size(values::TEXT_SIZE_16).color(theme.color.text));
            body2(ui, theme, string(desc));
        })
        .response
        .interact(egui::Sense::click());
        button.record(&response);
    }
}

impl<G: WalletDepends> Page<G> for SetupMixerAccountsPage<G> {
    fn id(&self) -> &str {
        SETUP_MIXER_ACCOUNTS_PAGE_ID
    }

    fn on_navigated_to(&mut self, _g: &mut G) {
        renew_context(&mut self.ctx);
    }

    fn handle_user_interactions(&mut self, g: &mut G) {
        if let Ok(done) = self.done.try_recv() {
            if let Some(auto_move) = done.auto_move_funds {
                let key = wallet_config_key(self.wallet.id, AUTO_MOVE_FUNDS_CONFIG_SUFFIX);
                g.set_bool_config_value_for_key(&key, auto_move);
            }
            info!("Mixer accounts configured for wallet {}", self.wallet.name);
            self.gctx.nav.close_current_page();
            return;
        }

        if self.back_button.clicked() {
            self.gctx.nav.close_current_page();
        }

        if self.auto_setup.clicked() {
            let interrupt = self.interrupt();
            let modal = SetupMixerInfoModal::new(&self.gctx, self.wallet.id, self.done_sender.clone(), interrupt);
            self.gctx.nav.show_modal(modal);
        }

        if self.manual_setup.clicked() {
            let page = ManualMixerSetupPage::new(&self.gctx, self.wallet.clone(), self.done_sender.clone());
            self.gctx.nav.display(page);
        }
    }

    fn layout(&mut self, ui: &mut Ui, _g: &G) {
        let theme = self.gctx.theme();
        sub_page_header(ui, &theme, &mut self.back_button, string(Str::SetupNeededAccounts), Some(self.wallet.name.as_str()));
        Self::intro_card(ui, &theme);
        ui.add_space(values::MARGIN_PADDING_16);
        Self::option_card(ui, &theme, &mut self.auto_setup, Str::AutoSetup, Str::AutoSetupDesc);
        ui.add_space(values::MARGIN_PADDING_8);
        Self::option_card(ui, &theme, &mut self.manual_setup, Str::ManualSetup, Str::ManualSetupDesc);
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
    use dcrdesk_schema::conf::config_store::ConfigStore;
    use crate::page::navigator::{NavCommand, Navigator};
    use crate::theme::shared_theme;

    fn page() -> (SetupMixerAccountsPage<MockWallet>, flume::Receiver<NavCommand<MockWallet>>, MockWallet) {
        let g = MockWallet::with_wallet("w1", "pw");
        let (nav, rx) = Navigator::channel();
        let gctx = GuiContext { theme: shared_theme(false), nav };
        let wallet = g.wallets()[0].clone();
        (SetupMixerAccountsPage::new(&gctx, wallet), rx, g)
    }

    fn sent(rx: &flume::Receiver<NavCommand<MockWallet>>) -> Vec<String> {
        rx.try_iter().map(|c| c.describe()).collect()
    }

    #[test]
    fn context_follows_navigation() {
        let (mut p, _rx, mut g) = page();
        p.on_navigated_to(&mut g);
        let interrupt = p.context().map(|c| c.interrupt());
        assert!(!p.context().map(|c| c.is_cancelled()).unwrap_or(true));
        p.on_navigated_from();
        assert!(p.context().map(|c| c.is_cancelled()).unwrap_or(false));
        assert!(interrupt.map(|i| i.is_disconnected()).unwrap_or(false));
        p.on_navigated_to(&mut g);
        assert!(!p.context().map(|c| c.is_cancelled()).unwrap_or(true));
    }

    #[test]
    fn each_choice_leads_somewhere_else() {
        let (mut p, rx, mut g) = page();
        p.on_navigated_to(&mut g);
        p.click_auto_setup();
        p.handle_user_interactions(&mut g);
        assert_eq!(sent(&rx), vec!["show_modal:setup_mixer_info_modal"]);
        p.click_manual_setup();
        p.handle_user_interactions(&mut g);
        assert_eq!(sent(&rx), vec!["display:ManualMixerSetup"]);
        p.click_back();
        p.handle_user_interactions(&mut g);
        assert_eq!(sent(&rx), vec!["close_current_page"]);
    }

    fn collect_text(shape: &egui::Shape, out: &mut Vec<(String, f32)>) {
        match shape {
            egui::Shape::Text(t) => out.push((t.galley.text().to_string(), t.pos.y)),
            egui::Shape::Vec(shapes) => shapes.iter().for_each(|s| collect_text(s, out)),
            _ => {}
        }
    }

    #[test]
    fn intro_is_shown_above_the_choices() {
        let (mut p, _rx, g) = page();
        let ctx = egui::Context::default();
        let mut texts = vec![];
        for _ in 0..2 {
            let out = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| p.layout(ui, &g));
            });
            texts.clear();
            out.shapes.iter().for_each(|c| collect_text(&c.shape, &mut texts));
        }
        let y_of = |needle: &str| texts.iter().find(|(t, _)| t == needle).map(|(_, y)| *y);
        let intro = y_of(string(Str::MixerAccountsIntro)).unwrap();
        let mixed = y_of(string(Str::MixedAccountDesc)).unwrap();
        let unmixed = y_of(string(Str::UnmixedAccountDesc)).unwrap();
        let auto = y_of(string(Str::AutoSetup)).unwrap();
        assert!(y_of(MIXED_ACCOUNT_NAME).is_some() && y_of(UNMIXED_ACCOUNT_NAME).is_some());
        assert!(intro < mixed && mixed < unmixed && unmixed < auto);
    }

    #[test]
    fn finished_setup_stores_auto_move_and_closes() {
        let (mut p, rx, mut g) = page();
        p.on_navigated_to(&mut g);
        p.done_sender.send(MixerSetupDone { auto_move_funds: Some(true) }).unwrap();
        p.handle_user_interactions(&mut g);
        assert_eq!(g.read_string_config_value_for_key("1_auto_move_funds"), "true");
        assert_eq!(sent(&rx), vec!["close_current_page"]);
    }
}
