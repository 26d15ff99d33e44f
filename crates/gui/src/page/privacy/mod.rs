pub mod manual_mixer_setup;
pub mod setup_mixer_accounts;
pub mod setup_mixer_info_modal;

/// Sent back to the setup page once mixer accounts are in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixerSetupDone {
    /// Only known for the automatic setup.
    pub auto_move_funds: Option<bool>,
}
