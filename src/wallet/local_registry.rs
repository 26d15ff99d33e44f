use std::fs;
use std::path::{Path, PathBuf};

use dcrdesk_schema::errors::into_error::ToErrorInfo;
use dcrdesk_schema::wallet::{AccountInfo, WalletInfo, DEFAULT_ACCOUNT_NAME};
use dcrdesk_schema::{DcResult, ErrorCode, ErrorInfoContext, OptionContext};
use serde::{Deserialize, Serialize};
use sha3::{Digest, Sha3_256};
use tracing::{debug, info};

pub const REGISTRY_FILE_NAME: &str = "wallets.toml";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct StoredWallet {
    pub info: WalletInfo,
    pub password_hash: String,
    pub accounts: Vec<AccountInfo>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RegistryData {
    pub startup_password_hash: Option<String>,
    pub wallets: Vec<StoredWallet>,
}

pub fn hash_password(password: &str) -> String {
    hex::encode(Sha3_256::digest(password.as_bytes()))
}

/// Wallet records and account layout kept in a TOML file next to the config.
#[derive(Debug, Clone)]
pub struct LocalWalletRegistry {
    path: PathBuf,
    data: RegistryData,
}

impl LocalWalletRegistry {
    pub fn load(path: impl AsRef<Path>) -> DcResult<Self> {
        let path = path.as_ref().to_path_buf();
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .error_msg(ErrorCode::IoFailure, format!("Reading wallet registry {}", path.display()))?;
            toml::from_str::<RegistryData>(&contents)
                .error_msg(ErrorCode::ParseFailure, format!("Parsing wallet registry {}", path.display()))?
        } else {
            RegistryData::default()
        };
        info!("Loaded {} wallets from {}", data.wallets.len(), path.display());
        Ok(Self { path, data })
    }

    /// Writes `data` and adopts it only once it is on disk.
    fn commit(&mut self, data: RegistryData) -> DcResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .error_msg(ErrorCode::IoFailure, format!("Creating data dir {}", parent.display()))?;
        }
        let contents = toml::to_string(&data).error_msg(ErrorCode::ParseFailure, "Serializing wallet registry")?;
        fs::write(&self.path, contents)
            .error_msg(ErrorCode::IoFailure, format!("Writing wallet registry {}", self.path.display()))?;
        self.data = data;
        Ok(())
    }

    fn stored(&self, wallet_id: i32) -> DcResult<&StoredWallet> {
        self.data.wallets.iter()
            .find(|w| w.info.id == wallet_id)
            .ok_code(ErrorCode::WalletNotFound, format!("No wallet with id {}", wallet_id))
    }

    fn unlock(&self, wallet_id: i32, password: &str) -> DcResult<()> {
        if self.stored(wallet_id)?.password_hash != hash_password(password) {
            return "Invalid spending password".to_error_code(ErrorCode::InvalidPassphrase);
        }
        Ok(())
    }

    pub fn wallets(&self) -> Vec<WalletInfo> {
        self.data.wallets.iter().map(|w| w.info.clone()).collect()
    }

    pub fn wallet(&self, wallet_id: i32) -> DcResult<WalletInfo> {
        self.stored(wallet_id).map(|w| w.info.clone())
    }

    pub fn accounts(&self, wallet_id: i32) -> DcResult<Vec<AccountInfo>> {
        self.stored(wallet_id).map(|w| w.accounts.clone())
    }

    pub fn create_wallet(&mut self, name: &str, password: &str) -> DcResult<WalletInfo> {
        if self.data.wallets.iter().any(|w| w.info.name == name) {
            return format!("Wallet {} already exists", name).to_error_code(ErrorCode::WalletExists);
        }
        let id = self.data.wallets.iter().map(|w| w.info.id).max().unwrap_or(0) + 1;
        let info = WalletInfo { id, name: name.to_string(), ..Default::default() };
        let mut data = self.data.clone();
        data.wallets.push(StoredWallet {
            info: info.clone(),
            password_hash: hash_password(password),
            accounts: vec![AccountInfo { number: 0, name: DEFAULT_ACCOUNT_NAME.to_string(), balance_atoms: 0 }],
        });
        self.commit(data)?;
        info!("Created wallet {} with id {}", name, id);
        Ok(info)
    }

    pub fn change_startup_password(&mut self, password: &str) -> DcResult<()> {
        let mut data = self.data.clone();
        data.startup_password_hash = Some(hash_password(password));
        self.commit(data)
    }

    pub fn startup_password_set(&self) -> bool {
        self.data.startup_password_hash.is_some()
    }

    /// Finds the accounts by name, creating the missing ones, and marks them as the mixer pair.
    pub fn create_mixer_accounts(&mut self, wallet_id: i32, mixed: &str, unmixed: &str, password: &str) -> DcResult<()> {
        self.unlock(wallet_id, password)?;
        let mut data = self.data.clone();
        let wallet = stored_mut(&mut data, wallet_id)?;
        let mut numbers = vec![];
        for name in [mixed, unmixed] {
            let existing = wallet.accounts.iter().find(|a| a.name == name).map(|a| a.number);
            let number = match existing {
                Some(n) => n,
                None => {
                    let number = wallet.accounts.iter().map(|a| a.number).max().unwrap_or(-1) + 1;
                    wallet.accounts.push(AccountInfo { number, name: name.to_string(), balance_atoms: 0 });
                    debug!("Created account {} ({}) in wallet {}", name, number, wallet_id);
                    number
                }
            };
            numbers.push(number);
        }
        wallet.info.mixed_account = numbers.first().cloned();
        wallet.info.unmixed_account = numbers.get(1).cloned();
        self.commit(data)
    }

    pub fn set_mixer_accounts(&mut self, wallet_id: i32, mixed: i32, unmixed: i32, password: &str) -> DcResult<()> {
        self.unlock(wallet_id, password)?;
        if mixed == unmixed {
            return "Mixed and unmixed accounts must differ".to_error_code(ErrorCode::AccountNotFound);
        }
        let mut data = self.data.clone();
        let wallet = stored_mut(&mut data, wallet_id)?;
        for number in [mixed, unmixed] {
            if !wallet.accounts.iter().any(|a| a.number == number) {
                return format!("No account {} in wallet {}", number, wallet_id).to_error_code(ErrorCode::AccountNotFound);
            }
        }
        wallet.info.mixed_account = Some(mixed);
        wallet.info.unmixed_account = Some(unmixed);
        self.commit(data)
    }
}

fn stored_mut(data: &mut RegistryData, wallet_id: i32) -> DcResult<&mut StoredWallet> {
    data.wallets.iter_mut()
        .find(|w| w.info.id == wallet_id)
        .ok_code(ErrorCode::WalletNotFound, format!("No wallet with id {}", wallet_id))
}
