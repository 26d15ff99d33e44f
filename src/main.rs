use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use dcrdesk::gui::initialize::start_native_gui;
use dcrdesk::util::runtimes::build_simple_runtime;
use dcrdesk_common::log::{init_logger_main, init_logger_once, Loggable};
use dcrdesk_common::toml_config_store::{default_config_path, TomlConfigStore};
use dcrdesk_schema::conf::dc_args::DcArgs;
use dcrdesk_schema::DcResult;

fn run() -> DcResult<()> {
    let args = DcArgs::parse();
    let path = match &args.config_path {
        Some(p) => PathBuf::from(p),
        None => default_config_path()?,
    };
    let config = TomlConfigStore::load(&path)?;
    let level = args.log_level.clone().unwrap_or_else(|| config.config().effective_log_level());
    init_logger_main(level.clone());
    info!("Loaded config from {} with log level {}", path.display(), level);

    let runtime = build_simple_runtime(2, "gui")?;
    let ret = start_native_gui(&args, config, runtime.handle().clone());
    runtime.shutdown_background();
    ret
}

fn main() {
    let result = run();
    if result.is_err() {
        // Config failures happen before the level is known.
        init_logger_once();
        let _ = result.log_error();
        std::process::exit(1);
    }
}
