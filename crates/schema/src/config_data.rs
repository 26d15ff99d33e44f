use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

pub const SPEND_UNCONFIRMED_CONFIG_KEY: &str = "spend_unconfirmed";
pub const TRANSACTION_NOTIFICATION_CONFIG_KEY: &str = "transaction_notification";
pub const DARK_MODE_CONFIG_KEY: &str = "dark_mode";
pub const CURRENCY_CONVERSION_CONFIG_KEY: &str = "currency_conversion_option";
pub const LOG_LEVEL_CONFIG_KEY: &str = "log_level";
pub const STARTUP_PASSWORD_SET_CONFIG_KEY: &str = "startup_password_set";
pub const AUTO_MOVE_FUNDS_CONFIG_SUFFIX: &str = "auto_move_funds";

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_CURRENCY_CONVERSION: &str = "none";

/// Wallet scoped keys are prefixed with the wallet id.
pub fn wallet_config_key(wallet_id: i32, key: &str) -> String {
    format!("{}_{}", wallet_id, key)
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(default)] // This allows fields to be omitted in TOML
pub struct WindowSettings {
    pub width: Option<f32>,
    pub height: Option<f32>,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(default)] // This allows fields to be omitted in TOML
pub struct ConfigData {
    pub log_level: Option<String>,
    pub window: WindowSettings,
    // Values written by preference widgets, keyed by preference key.
    pub user: BTreeMap<String, String>,
}

impl ConfigData {
    pub fn effective_log_level(&self) -> String {
        self.user.get(LOG_LEVEL_CONFIG_KEY)
            .cloned()
            .or(self.log_level.clone())
            .unwrap_or(DEFAULT_LOG_LEVEL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_parses_with_defaults() {
        let c: ConfigData = toml::from_str("log_level = \"debug\"\n[user]\ndark_mode = \"true\"\n").unwrap();
        assert_eq!(c.log_level.as_deref(), Some("debug"));
        assert_eq!(c.window, WindowSettings::default());
        assert_eq!(c.user.get(DARK_MODE_CONFIG_KEY).map(|s| s.as_str()), Some("true"));
    }

    #[test]
    fn user_log_level_overrides_top_level() {
        let mut c = ConfigData::default();
        assert_eq!(c.effective_log_level(), DEFAULT_LOG_LEVEL);
        c.log_level = Some("warn".to_string());
        assert_eq!(c.effective_log_level(), "warn");
        c.user.insert(LOG_LEVEL_CONFIG_KEY.to_string(), "trace".to_string());
        assert_eq!(c.effective_log_level(), "trace");
        assert_eq!(wallet_config_key(2, AUTO_MOVE_FUNDS_CONFIG_SUFFIX), "2_auto_move_funds");
    }
}
