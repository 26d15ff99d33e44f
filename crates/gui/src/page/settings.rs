use std::str::FromStr;

use dcrdesk_schema::config_data::{
    CURRENCY_CONVERSION_CONFIG_KEY, DARK_MODE_CONFIG_KEY, DEFAULT_CURRENCY_CONVERSION, DEFAULT_LOG_LEVEL,
    LOG_LEVEL_CONFIG_KEY, SPEND_UNCONFIRMED_CONFIG_KEY, STARTUP_PASSWORD_SET_CONFIG_KEY,
    TRANSACTION_NOTIFICATION_CONFIG_KEY,
};
use dcrdesk_common::log::set_log_level;
use dcrdesk_schema::values::{string, Str};
use eframe::egui;
use eframe::egui::{Layout, RichText, Ui};
use log::{error, info};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::common::{card, small_label};
use crate::components::clickable::Clickable;
use crate::components::sub_page::sub_page_header;
use crate::components::switch::Switch;
use crate::dependencies::gui_depends::WalletDepends;
use crate::modal::create_password::CreatePasswordModal;
use crate::modal::list_preference::ListPreferenceModal;
use crate::page::{GuiContext, Page};
use crate::theme::{values, Theme};

pub const SETTINGS_PAGE_ID: &str = "Settings";

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum CurrencyConversion {
    #[strum(serialize = "none")]
    Disabled,
    Bittrex,
    Binance,
}

impl CurrencyConversion {
    pub fn label(&self) -> &'static str {
        match self {
            CurrencyConversion::Disabled => "None",
            CurrencyConversion::Bittrex => "USD (Bittrex)",
            CurrencyConversion::Binance => "USD (Binance)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

struct BoolPreference {
    key: &'static str,
    label: Str,
    switch: Switch,
}

pub struct SettingsPage<G> {
    gctx: GuiContext<G>,
    back_button: Clickable,
    switches: Vec<BoolPreference>,
    currency_conversion: Clickable,
    log_level: Clickable,
    change_startup_password: Clickable,
}

impl<G: WalletDepends> SettingsPage<G> {
    pub fn new(gctx: &GuiContext<G>) -> Self {
        let style = gctx.theme().switch_style;
        let switches = [
            (SPEND_UNCONFIRMED_CONFIG_KEY, Str::SpendUnconfirmed),
            (TRANSACTION_NOTIFICATION_CONFIG_KEY, Str::TransactionNotification),
            (DARK_MODE_CONFIG_KEY, Str::DarkMode),
        ]
            .into_iter()
            .map(|(key, label)| BoolPreference { key, label, switch: Switch::new(style) })
            .collect();
        Self {
            gctx: gctx.clone(),
            back_button: Clickable::new(),
            switches,
            currency_conversion: Clickable::new(),
            log_level: Clickable::new(),
            change_startup_password: Clickable::new(),
        }
    }

    pub fn switch_mut(&mut self, key: &str) -> Option<&mut Switch> {
        self.switches.iter_mut().find(|p| p.key == key).map(|p| &mut p.switch)
    }

    pub fn click_currency_conversion(&mut self) {
        self.currency_conversion.click();
    }

    pub fn click_log_level(&mut self) {
        self.log_level.click();
    }

    pub fn click_change_startup_password(&mut self) {
        self.change_startup_password.click();
    }

    pub fn click_back(&mut self) {
        self.back_button.click();
    }

    pub fn currency_conversion_modal(&self) -> ListPreferenceModal<G> {
        let items = CurrencyConversion::iter().map(|c| (c.to_string(), c.label().to_string()));
        ListPreferenceModal::new(&self.gctx, CURRENCY_CONVERSION_CONFIG_KEY, DEFAULT_CURRENCY_CONVERSION, items)
            .title(string(Str::CurrencyConversion))
            .update_values(|value, _g| info!("Currency conversion set to {}", value))
    }

    pub fn log_level_modal(&self) -> ListPreferenceModal<G> {
        let items = LogLevel::iter().map(|l| (l.to_string(), l.to_string()));
        ListPreferenceModal::new(&self.gctx, LOG_LEVEL_CONFIG_KEY, DEFAULT_LOG_LEVEL, items)
            .title(string(Str::LogLevel))
            .update_values(|value, _g| match LogLevel::from_str(value) {
                Ok(level) => {
                    if let Err(e) = set_log_level(&level.to_string()) {
                        error!("Changing log level to {} failed: {}", level, e);
                    }
                }
                Err(e) => error!("Unknown log level {}: {}", value, e),
            })
    }

    pub fn startup_password_modal(&self) -> CreatePasswordModal<G> {
        CreatePasswordModal::new(&self.gctx)
            .title(string(Str::ChangeStartupPassword))
            .enable_name(false)
            .password_hint(string(Str::StartupPassword))
            .confirm_password_hint(string(Str::ConfirmStartupPassword))
            .parent(SETTINGS_PAGE_ID)
            .password_created(|_name, password, modal, g: &mut G| {
                let events = modal.event_sender();
                let mut wallet = g.clone();
                let password = password.to_string();
                g.spawn(async move {
                    match wallet.change_startup_password(&password) {
                        Ok(()) => {
                            wallet.set_bool_config_value_for_key(STARTUP_PASSWORD_SET_CONFIG_KEY, true);
                            events.dismiss();
                        }
                        Err(e) => {
                            error!("Changing startup password failed: {}", e);
                            events.fail(&e);
                        }
                    }
                });
                false
            })
    }

    fn preference_row(ui: &mut Ui, theme: &Theme, button: &mut Clickable, label: Str, value: String) {
        ui.horizontal(|ui| {
            let response = ui.add(egui::Label::new(RichText::new(string(label)).color(theme.color.text)).sense(egui::Sense::click()));
            button.record(&response);
            ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
                small_label(ui, theme.color.gray_text2, value);
            });
        });
    }
}

impl<G: WalletDepends> Page<G> for SettingsPage<G> {
    fn id(&self) -> &str {
        SETTINGS_PAGE_ID
    }

    fn on_navigated_to(&mut self, g: &mut G) {
        for pref in self.switches.iter_mut() {
            pref.switch.set_checked(g.read_bool_config_value_for_key(pref.key, false));
        }
    }

    fn handle_user_interactions(&mut self, g: &mut G) {
        if self.back_button.clicked() {
            self.gctx.nav.close_current_page();
        }

        for pref in self.switches.iter_mut() {
            if pref.switch.changed() {
                g.set_bool_config_value_for_key(pref.key, pref.switch.is_checked());
                if pref.key == DARK_MODE_CONFIG_KEY {
                    self.gctx.nav.refresh_theme();
                }
            }
        }

        if self.currency_conversion.clicked() {
            self.gctx.nav.show_modal(self.currency_conversion_modal());
        }
        if self.log_level.clicked() {
            self.gctx.nav.show_modal(self.log_level_modal());
        }
        if self.change_startup_password.clicked() {
            self.gctx.nav.show_modal(self.startup_password_modal());
        }
    }

    fn layout(&mut self, ui: &mut Ui, g: &G) {
        let theme = self.gctx.theme();
        sub_page_header(ui, &theme, &mut self.back_button, string(Str::Settings), None);

        card(ui, &theme, |ui| {
            ui.set_width(ui.available_width());
            for pref in self.switches.iter_mut() {
                pref.switch.set_style(theme.switch_style);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(string(pref.label)).color(theme.color.text));
                    ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
                        pref.switch.layout(ui);
                    });
                });
                ui.add_space(values::MARGIN_PADDING_8);
            }
        });
        ui.add_space(values::MARGIN_PADDING_12);

        let mut currency = g.read_string_config_value_for_key(CURRENCY_CONVERSION_CONFIG_KEY);
        if currency.is_empty() {
            currency = DEFAULT_CURRENCY_CONVERSION.to_string();
        }
        let currency = CurrencyConversion::from_str(&currency).map(|c| c.label().to_string()).unwrap_or(currency);
        let mut level = g.read_string_config_value_for_key(LOG_LEVEL_CONFIG_KEY);
        if level.is_empty() {
            level = DEFAULT_LOG_LEVEL.to_string();
        }

        let (currency_button, log_button, password_button) =
            (&mut self.currency_conversion, &mut self.log_level, &mut self.change_startup_password);
        card(ui, &theme, |ui| {
            ui.set_width(ui.available_width());
            Self::preference_row(ui, &theme, currency_button, Str::CurrencyConversion, currency);
            ui.add_space(values::MARGIN_PADDING_8);
            Self::preference_row(ui, &theme, log_button, Str::LogLevel, level);
        });
        ui.add_space(values::MARGIN_PADDING_12);
        card(ui, &theme, |ui| {
            ui.set_width(ui.available_width());
            Self::preference_row(ui, &theme, password_button, Str::ChangeStartupPassword, String::new());
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependencies::mock_depends::MockWallet;
    use crate::modal::Modal;
    use crate::page::navigator::{NavCommand, Navigator};
    use crate::theme::shared_theme;
    use dcrdesk_schema::conf::config_store::ConfigStore;

    fn page() -> (SettingsPage<MockWallet>, flume::Receiver<NavCommand<MockWallet>>, MockWallet) {
        let (nav, rx) = Navigator::channel();
        let gctx = GuiContext { theme: shared_theme(false), nav };
        (SettingsPage::new(&gctx), rx, MockWallet::with_wallet("w1", "pw"))
    }

    fn sent(rx: &flume::Receiver<NavCommand<MockWallet>>) -> Vec<String> {
        rx.try_iter().map(|c| c.describe()).collect()
    }

    #[test]
    fn switches_load_and_persist() {
        let (mut p, rx, mut g) = page();
        g.set_bool_config_value_for_key(SPEND_UNCONFIRMED_CONFIG_KEY, true);
        p.on_navigated_to(&mut g);
        assert!(p.switch_mut(SPEND_UNCONFIRMED_CONFIG_KEY).map(|s| s.is_checked()).unwrap_or(false));
        // loading a value is not a user change
        p.handle_user_interactions(&mut g);
        assert_eq!(g.state.lock().unwrap().config_writes.len(), 1);

        if let Some(s) = p.switch_mut(TRANSACTION_NOTIFICATION_CONFIG_KEY) {
            s.toggle();
        }
        p.handle_user_interactions(&mut g);
        assert!(g.read_bool_config_value_for_key(TRANSACTION_NOTIFICATION_CONFIG_KEY, false));
        assert!(rx.is_empty());
    }

    #[test]
    fn dark_mode_refreshes_theme() {
        let (mut p, rx, mut g) = page();
        p.on_navigated_to(&mut g);
        if let Some(s) = p.switch_mut(DARK_MODE_CONFIG_KEY) {
            s.toggle();
        }
        p.handle_user_interactions(&mut g);
        assert_eq!(g.read_string_config_value_for_key(DARK_MODE_CONFIG_KEY), "true");
        assert_eq!(sent(&rx), vec!["refresh_theme"]);
    }

    #[test]
    fn preference_rows_open_modals() {
        let (mut p, rx, mut g) = page();
        p.click_currency_conversion();
        p.click_log_level();
        p.click_change_startup_password();
        p.handle_user_interactions(&mut g);
        assert_eq!(sent(&rx), vec![
            "show_modal:list_preference_currency_conversion_option",
            "show_modal:list_preference_log_level",
            "show_modal:create_password_modal",
        ]);
    }

    #[test]
    fn log_level_modal_lists_levels() {
        let (p, _rx, mut g) = page();
        let mut m = p.log_level_modal();
        m.on_resume(&mut g);
        assert_eq!(m.current_value(), "info");
        assert_eq!(m.keys(), vec!["debug", "error", "info", "trace", "warn"]);
    }

    #[test]
    fn log_level_choice_applies_immediately() {
        dcrdesk_common::log::init_logger_main("info".to_string());
        let (p, _rx, mut g) = page();
        let mut m = p.log_level_modal();
        m.on_resume(&mut g);
        m.select("error");
        m.handle(&mut g);
        assert!(!log::log_enabled!(log::Level::Debug));

        let mut m = p.log_level_modal();
        m.on_resume(&mut g);
        m.select("debug");
        m.handle(&mut g);
        assert_eq!(g.read_string_config_value_for_key(LOG_LEVEL_CONFIG_KEY), "debug");
        assert!(log::log_enabled!(log::Level::Debug));
    }

    #[test]
    fn startup_password_change_marks_config() {
        let (p, _rx, mut g) = page();
        let mut m = p.startup_password_modal();
        m.set_password("secret");
        m.set_confirm_password("secret");
        m.click_confirm();
        m.handle(&mut g);
        assert_eq!(g.calls(), vec!["change_startup_password:secret"]);
        assert!(g.read_bool_config_value_for_key(STARTUP_PASSWORD_SET_CONFIG_KEY, false));
        m.handle(&mut g);
        assert!(m.is_dismissed());
    }
}
