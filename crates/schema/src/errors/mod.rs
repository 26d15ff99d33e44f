pub mod into_error;

/// Sentinel returned by the wallet collaborator when a wallet name is taken.
pub const ERR_EXIST: &str = "exists";
/// Sentinel returned by the wallet collaborator on a bad spending password.
pub const ERR_INVALID_PASSPHRASE: &str = "invalid_passphrase";

use crate::{ErrorCode, ErrorInfo};

impl ErrorInfo {
    /// The string a password modal receives for this error.
    pub fn modal_message(&self) -> String {
        match self.code {
            ErrorCode::WalletExists => ERR_EXIST.to_string(),
            ErrorCode::InvalidPassphrase => ERR_INVALID_PASSPHRASE.to_string(),
            _ => self.message.clone(),
        }
    }
}
