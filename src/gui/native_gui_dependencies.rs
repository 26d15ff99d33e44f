use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use dcrdesk_common::toml_config_store::TomlConfigStore;
use dcrdesk_gui::dependencies::gui_depends::WalletDepends;
use dcrdesk_schema::conf::config_store::ConfigStore;
use dcrdesk_schema::wallet::{AccountInfo, WalletInfo};
use dcrdesk_schema::{error_info, DcResult};
use tokio::runtime::Handle;
use tracing::{debug, error};

use crate::wallet::local_registry::LocalWalletRegistry;

fn locked<'a, T>(m: &'a Mutex<T>, what: &str) -> DcResult<MutexGuard<'a, T>> {
    m.lock().map_err(|_| error_info(format!("{} lock poisoned", what)))
}

/// File backed config and wallet registry, with async work on the tokio runtime.
#[derive(Clone)]
pub struct NativeWalletDepends {
    config: Arc<Mutex<TomlConfigStore>>,
    registry: Arc<Mutex<LocalWalletRegistry>>,
    runtime: Handle,
}

impl NativeWalletDepends {
    pub fn new(config: TomlConfigStore, registry: LocalWalletRegistry, runtime: Handle) -> Self {
        Self {
            config: Arc::new(Mutex::new(config)),
            registry: Arc::new(Mutex::new(registry)),
            runtime,
        }
    }

    fn registry(&self) -> DcResult<MutexGuard<'_, LocalWalletRegistry>> {
        locked(&self.registry, "Wallet registry")
    }
}

impl ConfigStore for NativeWalletDepends {
    fn read_string_config_value_for_key(&self, key: &str) -> String {
        match locked(&self.config, "Config") {
            Ok(c) => c.read_string_config_value_for_key(key),
            Err(e) => {
                error!("Reading {} failed: {}", key, e);
                String::new()
            }
        }
    }

    fn save_user_config_value(&mut self, key: &str, value: &str) {
        match locked(&self.config, "Config") {
            Ok(mut c) => c.save_user_config_value(key, value),
            Err(e) => error!("Saving {} failed: {}", key, e),
        }
    }
}

impl WalletDepends for NativeWalletDepends {
    fn wallets(&self) -> Vec<WalletInfo> {
        match self.registry() {
            Ok(r) => r.wallets(),
            Err(e) => {
                error!("Listing wallets failed: {}", e);
                vec![]
            }
        }
    }

    fn wallet(&self, wallet_id: i32) -> DcResult<WalletInfo> {
        self.registry()?.wallet(wallet_id)
    }

    fn accounts(&self, wallet_id: i32) -> DcResult<Vec<AccountInfo>> {
        self.registry()?.accounts(wallet_id)
    }

    fn create_wallet(&self, name: &str, password: &str) -> DcResult<WalletInfo> {
        self.registry()?.create_wallet(name, password)
    }

    fn change_startup_password(&self, password: &str) -> DcResult<()> {
        self.registry()?.change_startup_password(password)
    }

    fn create_mixer_accounts(&self, wallet_id: i32, mixed_account: &str, unmixed_account: &str, password: &str) -> DcResult<()> {
        self.registry()?.create_mixer_accounts(wallet_id, mixed_account, unmixed_account, password)
    }

    fn set_mixer_accounts(&self, wallet_id: i32, mixed_account: i32, unmixed_account: i32, password: &str) -> DcResult<()> {
        self.registry()?.set_mixer_accounts(wallet_id, mixed_account, unmixed_account, password)
    }

    fn spawn(&self, f: impl Future<Output = ()> + Send + 'static) {
        self.runtime.spawn(f);
    }

    fn spawn_interrupt(&self, f: impl Future<Output = ()> + Send + 'static, interrupt: flume::Receiver<()>) {
        self.runtime.spawn(async move {
            tokio::select! {
                _ = f => {}
                _ = interrupt.recv_async() => {
                    debug!("Background task interrupted");
                }
            }
        });
    }
}
