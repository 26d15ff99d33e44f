use serde::{Deserialize, Serialize};

pub const DEFAULT_ACCOUNT_NAME: &str = "default";
pub const MIXED_ACCOUNT_NAME: &str = "mixed";
pub const UNMIXED_ACCOUNT_NAME: &str = "unmixed";

const ATOMS_PER_COIN: f64 = 100_000_000.0;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct WalletInfo {
    pub id: i32,
    pub name: String,
    pub watch_only: bool,
    pub mixed_account: Option<i32>,
    pub unmixed_account: Option<i32>,
}

impl WalletInfo {
    pub fn mixer_configured(&self) -> bool {
        self.mixed_account.is_some() && self.unmixed_account.is_some()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct AccountInfo {
    pub number: i32,
    pub name: String,
    pub balance_atoms: i64,
}

impl AccountInfo {
    pub fn balance_string(&self) -> String {
        format!("{:.8} DCR", self.balance_atoms as f64 / ATOMS_PER_COIN)
    }
}
