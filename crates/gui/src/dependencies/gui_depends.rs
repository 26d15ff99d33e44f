use dcrdesk_schema::conf::config_store::ConfigStore;
use dcrdesk_schema::wallet::{AccountInfo, WalletInfo};
use dcrdesk_schema::DcResult;

/// Wallet library and runtime services the pages delegate to.
pub trait WalletDepends: ConfigStore + Clone + Send + 'static {

    fn wallets(&self) -> Vec<WalletInfo>;
    fn wallet(&self, wallet_id: i32) -> DcResult<WalletInfo>;
    fn accounts(&self, wallet_id: i32) -> DcResult<Vec<AccountInfo>>;

    fn create_wallet(&self, name: &str, password: &str) -> DcResult<WalletInfo>;
    fn change_startup_password(&self, password: &str) -> DcResult<()>;

    /// Creates the two named accounts and marks them as the mixer pair.
    fn create_mixer_accounts(&self, wallet_id: i32, mixed_account: &str, unmixed_account: &str, password: &str) -> DcResult<()>;
    fn set_mixer_accounts(&self, wallet_id: i32, mixed_account: i32, unmixed_account: i32, password: &str) -> DcResult<()>;

    fn spawn(&self, f: impl std::future::Future<Output = ()> + Send + 'static);
    /// Like `spawn`, but the future is dropped once `interrupt` disconnects or yields.
    fn spawn_interrupt(&self, f: impl std::future::Future<Output = ()> + Send + 'static, interrupt: flume::Receiver<()>);
}
