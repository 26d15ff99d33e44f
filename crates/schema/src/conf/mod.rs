pub mod config_store;
pub mod dc_args;
