pub mod log;
pub mod trace_setup;
pub mod toml_config_store;
