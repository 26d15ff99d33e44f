use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use dcrdesk_schema::conf::config_store::ConfigStore;
use dcrdesk_schema::errors::into_error::ToErrorInfo;
use dcrdesk_schema::wallet::{AccountInfo, WalletInfo, DEFAULT_ACCOUNT_NAME};
use dcrdesk_schema::{DcResult, ErrorCode, OptionContext};

use crate::dependencies::gui_depends::WalletDepends;

#[derive(Default)]
pub struct MockState {
    pub config: BTreeMap<String, String>,
    pub config_writes: Vec<(String, String)>,
    pub wallets: Vec<WalletInfo>,
    pub accounts: BTreeMap<i32, Vec<AccountInfo>>,
    pub password: String,
    pub calls: Vec<String>,
    pub interrupted: usize,
}

/// In memory wallet; spawned futures run to completion on the calling thread.
#[derive(Clone, Default)]
pub struct MockWallet {
    pub state: Arc<Mutex<MockState>>,
}

impl MockWallet {
    pub fn with_wallet(name: &str, password: &str) -> Self {
        let m = MockWallet::default();
        {
            let mut s = m.state.lock().unwrap();
            s.password = password.to_string();
            s.wallets.push(WalletInfo { id: 1, name: name.to_string(), ..Default::default() });
            s.accounts.insert(1, vec![AccountInfo { number: 0, name: DEFAULT_ACCOUNT_NAME.to_string(), balance_atoms: 0 }]);
        }
        m
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    fn check_password(&self, password: &str) -> DcResult<()> {
        if self.state.lock().unwrap().password != password {
            return "wrong password".to_error_code(ErrorCode::InvalidPassphrase);
        }
        Ok(())
    }
}

impl ConfigStore for MockWallet {
    fn read_string_config_value_for_key(&self, key: &str) -> String {
        self.state.lock().unwrap().config.get(key).cloned().unwrap_or_default()
    }

    fn save_user_config_value(&mut self, key: &str, value: &str) {
        let mut s = self.state.lock().unwrap();
        s.config.insert(key.to_string(), value.to_string());
        s.config_writes.push((key.to_string(), value.to_string()));
    }
}

impl WalletDepends for MockWallet {
    fn wallets(&self) -> Vec<WalletInfo> {
        self.state.lock().unwrap().wallets.clone()
    }

    fn wallet(&self, wallet_id: i32) -> DcResult<WalletInfo> {
        self.wallets().into_iter().find(|w| w.id == wallet_id).ok_code(ErrorCode::WalletNotFound, "no wallet")
    }

    fn accounts(&self, wallet_id: i32) -> DcResult<Vec<AccountInfo>> {
        self.state.lock().unwrap().accounts.get(&wallet_id).cloned().ok_code(ErrorCode::WalletNotFound, "no wallet")
    }

    fn create_wallet(&self, name: &str, password: &str) -> DcResult<WalletInfo> {
        let mut s = self.state.lock().unwrap();
        s.calls.push(format!("create_wallet:{}:{}", name, password));
        if s.wallets.iter().any(|w| w.name == name) {
            return "wallet exists".to_error_code(ErrorCode::WalletExists);
        }
        let w = WalletInfo { id: s.wallets.len() as i32 + 1, name: name.to_string(), ..Default::default() };
        s.wallets.push(w.clone());
        Ok(w)
    }

    fn change_startup_password(&self, password: &str) -> DcResult<()> {
        self.state.lock().unwrap().calls.push(format!("change_startup_password:{}", password));
        Ok(())
    }

    fn create_mixer_accounts(&self, wallet_id: i32, mixed_account: &str, unmixed_account: &str, password: &str) -> DcResult<()> {
        self.state.lock().unwrap().calls.push(format!("create_mixer_accounts:{}:{}:{}", wallet_id, mixed_account, unmixed_account));
        self.check_password(password)
    }

    fn set_mixer_accounts(&self, wallet_id: i32, mixed_account: i32, unmixed_account: i32, password: &str) -> DcResult<()> {
        self.state.lock().unwrap().calls.push(format!("set_mixer_accounts:{}:{}:{}", wallet_id, mixed_account, unmixed_account));
        self.check_password(password)
    }

    fn spawn(&self, f: impl std::future::Future<Output = ()> + Send + 'static) {
        futures::executor::block_on(f);
    }

    fn spawn_interrupt(&self, f: impl std::future::Future<Output = ()> + Send + 'static, interrupt: flume::Receiver<()>) {
        if interrupt.is_disconnected() {
            self.state.lock().unwrap().interrupted += 1;
            return;
        }
        futures::executor::block_on(f);
    }
}
