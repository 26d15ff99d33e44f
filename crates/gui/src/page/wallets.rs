use std::collections::BTreeMap;

use dcrdesk_schema::values::{string, Str};
use dcrdesk_schema::wallet::WalletInfo;
use eframe::egui;
use eframe::egui::{Layout, RichText, Ui};
use log::{debug, error, info};

use crate::common::{body2, card, h6, outline_button, primary_button};
use crate::components::clickable::Clickable;
use crate::components::switch_button_text::SwitchButtonText;
use crate::dependencies::gui_depends::WalletDepends;
use crate::modal::create_password::CreatePasswordModal;
use crate::page::privacy::setup_mixer_accounts::SetupMixerAccountsPage;
use crate::page::settings::SettingsPage;
use crate::page::{GuiContext, Page};
use crate::theme::values;

pub const WALLETS_PAGE_ID: &str = "Wallets";

const WATCH_ONLY_TAB: usize = 1;

/// Home page: the wallet list filtered by the segmented switch.
pub struct WalletsPage<G> {
    gctx: GuiContext<G>,
    wallets: Vec<WalletInfo>,
    filter: SwitchButtonText,
    create_wallet: Clickable,
    settings: Clickable,
    privacy: BTreeMap<i32, Clickable>,
    created_sender: flume::Sender<WalletInfo>,
    created: flume::Receiver<WalletInfo>,
}

impl<G: WalletDepends> WalletsPage<G> {
    pub fn new(gctx: &GuiContext<G>) -> Self {
        let filter = SwitchButtonText::new(&gctx.theme(), [string(Str::Wallets), string(Str::WatchOnly)]);
        let (created_sender, created) = flume::unbounded();
        Self {
            gctx: gctx.clone(),
            wallets: vec![],
            filter,
            create_wallet: Clickable::new(),
            settings: Clickable::new(),
            privacy: BTreeMap::new(),
            created_sender,
            created,
        }
    }

    fn reload(&mut self, g: &G) {
        self.wallets = g.wallets();
        self.privacy = self.wallets.iter().map(|w| (w.id, Clickable::new())).collect();
    }

    /// Wallets shown under the selected tab.
    pub fn visible_wallets(&self) -> Vec<&WalletInfo> {
        let watch_only = self.filter.selected_index() == WATCH_ONLY_TAB;
        self.wallets.iter().filter(|w| w.watch_only == watch_only).collect()
    }

    pub fn select_tab(&mut self, index: usize) {
        self.filter.click(index);
    }

    pub fn click_create_wallet(&mut self) {
        self.create_wallet.click();
    }

    pub fn click_settings(&mut self) {
        self.settings.click();
    }

    pub fn click_privacy(&mut self, wallet_id: i32) {
        if let Some(c) = self.privacy.get_mut(&wallet_id) {
            c.click();
        }
    }

    pub fn create_wallet_modal(&self) -> CreatePasswordModal<G> {
        let created = self.created_sender.clone();
        CreatePasswordModal::new(&self.gctx)
            .title(string(Str::CreateNewWallet))
            .enable_name(true)
            .show_wallet_info_tip(true)
            .parent(WALLETS_PAGE_ID)
            .password_created(move |name, password, modal, g: &mut G| {
                let events = modal.event_sender();
                let wallet = g.clone();
                let (name, password) = (name.to_string(), password.to_string());
                let created = created.clone();
                g.spawn(async move {
                    match wallet.create_wallet(&name, &password) {
                        Ok(w) => {
                            let _ = created.send(w);
                            events.dismiss();
                        }
                        Err(e) => {
                            error!("Creating wallet {} failed: {}", name, e);
                            events.fail(&e);
                        }
                    }
                });
                false
            })
    }
}

impl<G: WalletDepends> Page<G> for WalletsPage<G> {
    fn id(&self) -> &str {
        WALLETS_PAGE_ID
    }

    fn on_navigated_to(&mut self, g: &mut G) {
        self.reload(g);
    }

    fn handle_user_interactions(&mut self, g: &mut G) {
        if let Ok(w) = self.created.try_recv() {
            info!("Created wallet {} with id {}", w.name, w.id);
            self.reload(g);
        }

        self.filter.handle_click_event();
        if self.filter.changed() {
            debug!("Showing {} tab", self.filter.selected_option());
        }

        if self.create_wallet.clicked() {
            self.gctx.nav.show_modal(self.create_wallet_modal());
        }

        if self.settings.clicked() {
            self.gctx.nav.display(SettingsPage::new(&self.gctx));
        }

        let chosen = self.privacy.iter_mut()
            .find_map(|(id, c)| if c.clicked() { Some(*id) } else { None });
        if let Some(wallet) = chosen.and_then(|id| self.wallets.iter().find(|w| w.id == id)) {
            self.gctx.nav.display(SetupMixerAccountsPage::new(&self.gctx, wallet.clone()));
        }
    }

    fn layout(&mut self, ui: &mut Ui, _g: &G) {
        let theme = self.gctx.theme();
        ui.horizontal(|ui| {
            ui.label(RichText::new(string(Str::Wallets)).size(values::TEXT_SIZE_20).color(theme.color.text));
            ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
                self.settings.add(ui, outline_button(&theme, string(Str::Settings)));
            });
        });
        ui.add_space(values::MARGIN_PADDING_12);
        self.filter.layout(ui);
        ui.add_space(values::MARGIN_PADDING_12);

        let watch_only = self.filter.selected_index() == WATCH_ONLY_TAB;
        let mut shown = 0;
        for wallet in self.wallets.iter().filter(|w| w.watch_only == watch_only) {
            shown += 1;
            card(ui, &theme, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    h6(ui, &theme, wallet.name.clone());
                    if !wallet.watch_only {
                        ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
                            if let Some(c) = self.privacy.get_mut(&wallet.id) {
                                c.add(ui, outline_button(&theme, string(Str::Privacy)));
                            }
                        });
                    }
                });
            });
            ui.add_space(values::MARGIN_PADDING_8);
        }
        if shown == 0 {
            body2(ui, &theme, string(Str::NoWallets));
        }

        ui.add_space(values::MARGIN_PADDING_16);
        self.create_wallet.add(ui, primary_button(&theme, string(Str::CreateWallet), true));
    }
}
