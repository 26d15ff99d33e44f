use strum_macros::{EnumIter, EnumString};

/// Keys of user facing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString)]
pub enum Str {
    Confirm,
    Cancel,
    WalletName,
    SpendingPassword,
    ConfirmSpendingPassword,
    EnterWalletName,
    EnterSpendingPassword,
    PasswordNotMatch,
    WalletExist,
    SpendingPasswordInfo2,
    InvalidPassphrase,
    CreateWallet,
    CreateNewWallet,
    ChangeStartupPassword,
    StartupPassword,
    ConfirmStartupPassword,
    Wallets,
    WatchOnly,
    Settings,
    Privacy,
    SpendUnconfirmed,
    TransactionNotification,
    DarkMode,
    CurrencyConversion,
    LogLevel,
    SetupNeededAccounts,
    AutoSetup,
    AutoSetupDesc,
    ManualSetup,
    ManualSetupDesc,
    MixerAccountsIntro,
    MixedAccountDesc,
    UnmixedAccountDesc,
    AutoMoveFunds,
    BeginSetup,
    ConfirmCreateNeededAccounts,
    MixedAccount,
    UnmixedAccount,
    SelectAccount,
    SetUp,
    SameAccountSelected,
    NoWallets,
    Back,
}

pub fn string(key: Str) -> &'static str {
    match key {
        Str::Confirm => "Confirm",
        Str::Cancel => "Cancel",
        Str::WalletName => "Wallet name",
        Str::SpendingPassword => "Spending password",
        Str::ConfirmSpendingPassword => "Confirm spending password",
        Str::EnterWalletName => "Enter wallet name",
        Str::EnterSpendingPassword => "Enter spending password",
        Str::PasswordNotMatch => "Passwords do not match",
        Str::WalletExist => "Wallet with name: {} already exists",
        Str::SpendingPasswordInfo2 => "This spending password is for the new wallet only",
        Str::InvalidPassphrase => "Password entered was not recognized",
        Str::CreateWallet => "Create wallet",
        Str::CreateNewWallet => "Create a new wallet",
        Str::ChangeStartupPassword => "Change startup password",
        Str::StartupPassword => "Startup password",
        Str::ConfirmStartupPassword => "Confirm startup password",
        Str::Wallets => "Wallets",
        Str::WatchOnly => "Watch-only",
        Str::Settings => "Settings",
        Str::Privacy => "Privacy",
        Str::SpendUnconfirmed => "Spend unconfirmed funds",
        Str::TransactionNotification => "Transaction notifications",
        Str::DarkMode => "Dark mode",
        Str::CurrencyConversion => "Currency conversion",
        Str::LogLevel => "Log level",
        Str::SetupNeededAccounts => "Set up needed accounts",
        Str::AutoSetup => "Auto setup",
        Str::AutoSetupDesc => "Create and setup the needed accounts for you.",
        Str::ManualSetup => "Manual setup",
        Str::ManualSetupDesc => "For wallets that have enabled privacy before.",
        Str::MixerAccountsIntro => "Two dedicated accounts will be set up to use the mixer:",
        Str::MixedAccountDesc => "Mixed account will be the outbounding spending account.",
        Str::UnmixedAccountDesc => "Unmixed account will be the change handling account.",
        Str::AutoMoveFunds => "Automatically move funds from default to unmixed account",
        Str::BeginSetup => "Begin setup",
        Str::ConfirmCreateNeededAccounts => "Confirm to create needed accounts",
        Str::MixedAccount => "Mixed account",
        Str::UnmixedAccount => "Unmixed account",
        Str::SelectAccount => "Select account",
        Str::SetUp => "Set up",
        Str::SameAccountSelected => "Mixed and unmixed accounts must differ",
        Str::NoWallets => "No wallets to show",
        Str::Back => "Back",
    }
}

/// Fills the `{}` placeholder of a templated string.
pub fn string_f(key: Str, arg: impl AsRef<str>) -> String {
    string(key).replacen("{}", arg.as_ref(), 1)
}
