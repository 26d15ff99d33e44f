use std::path::PathBuf;

use dcrdesk_common::toml_config_store::TomlConfigStore;
use dcrdesk_gui::theme::shared_theme;
use dcrdesk_schema::conf::config_store::ConfigStore;
use dcrdesk_schema::conf::dc_args::DcArgs;
use dcrdesk_schema::config_data::DARK_MODE_CONFIG_KEY;
use dcrdesk_schema::{error_info, DcResult};
use eframe::egui;
use tokio::runtime::Handle;
use tracing::info;

use crate::gui::native_gui_dependencies::NativeWalletDepends;
use crate::gui::ClientApp;
use crate::wallet::local_registry::{LocalWalletRegistry, REGISTRY_FILE_NAME};

const DEFAULT_WIDTH: f32 = 800.0;
const DEFAULT_HEIGHT: f32 = 600.0;

/// Registry next to the config file unless a data folder is given.
pub fn registry_path(args: &DcArgs, config: &TomlConfigStore) -> PathBuf {
    match &args.data_folder {
        Some(dir) => PathBuf::from(dir).join(REGISTRY_FILE_NAME),
        None => config.path()
            .parent()
            .map(|p| p.join(REGISTRY_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(REGISTRY_FILE_NAME)),
    }
}

pub fn prepare_app(args: &DcArgs, mut config: TomlConfigStore, runtime: Handle) -> DcResult<ClientApp<NativeWalletDepends>> {
    let registry = LocalWalletRegistry::load(registry_path(args, &config))?;
    if args.dark_mode {
        config.set_bool_config_value_for_key(DARK_MODE_CONFIG_KEY, true);
    }
    let dark = config.read_bool_config_value_for_key(DARK_MODE_CONFIG_KEY, false);
    let depends = NativeWalletDepends::new(config, registry, runtime);
    Ok(ClientApp::new(depends, shared_theme(dark)))
}

pub fn start_native_gui(args: &DcArgs, config: TomlConfigStore, runtime: Handle) -> DcResult<()> {
    let window = config.config().window.clone();
    let app = prepare_app(args, config, runtime)?;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                window.width.unwrap_or(DEFAULT_WIDTH),
                window.height.unwrap_or(DEFAULT_HEIGHT),
            ])
            .with_min_inner_size([480.0, 400.0])
            .with_title("dcrdesk"),
        ..Default::default()
    };
    info!("Starting native GUI");
    eframe::run_native(
        "dcrdesk",
        native_options,
        Box::new(move |_cc| Ok(Box::new(app))),
    ).map_err(|e| error_info(format!("GUI failed to start: {}", e)))
}
