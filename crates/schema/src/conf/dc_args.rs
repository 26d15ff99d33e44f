use clap::Parser;

/// Desktop wallet front-end. Starts the GUI with the given config file and log level.
#[derive(Parser, Debug, Clone, Default)]
#[clap(author, version, about, long_about = None)]
pub struct DcArgs {
    /// Load configs from a specified path instead of standard path
    #[clap(short, long, env = "DCRDESK_CONFIG")]
    pub config_path: Option<String>,
    /// Log level for the application crates, e.g. debug or info
    #[clap(long, env = "DCRDESK_LOG_LEVEL")]
    pub log_level: Option<String>,
    /// Directory holding the local wallet registry, defaults to the config directory
    #[clap(long)]
    pub data_folder: Option<String>,
    /// Start in dark mode regardless of the stored preference
    #[clap(long)]
    pub dark_mode: bool,
}
