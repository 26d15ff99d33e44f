use std::str::FromStr;
use std::sync::Once;
use dcrdesk_schema::errors::into_error::ToErrorInfo;
use dcrdesk_schema::{error_message, json_or, DcResult, ErrorCode, ErrorInfo, ErrorInfoContext};
use log::{error, LevelFilter};
use crate::trace_setup::{init_tracing, reload_filter};

static INIT: Once = Once::new();

/// Setup function that is only run once, even if called multiple times.
pub fn init_logger_once() {
    INIT.call_once(|| {
        init_tracing("debug");
    });
}

pub fn init_logger_main(log_level: String) {
    INIT.call_once(|| {
        init_tracing(&log_level);
    });
}

/// Changes the level of our crates at runtime, for both `log` and `tracing` call sites.
pub fn set_log_level(log_level: &str) -> DcResult<()> {
    let level = LevelFilter::from_str(log_level)
        .map_err(|_| error_message(ErrorCode::ParseFailure, format!("Unknown log level {}", log_level)))?;
    if !reload_filter(log_level).error_info("Reloading log filter")? {
        return "Logger not initialized".to_error();
    }
    // Bridged `log` records are capped separately from the tracing filter.
    log::set_max_level(level.max(LevelFilter::Warn));
    Ok(())
}

pub trait Loggable<T> {
    fn log_error(&self) -> Result<&T, &ErrorInfo>;
}

impl<T> Loggable<T> for Result<T, ErrorInfo> {
    fn log_error(&self) -> Result<&T, &ErrorInfo> {
        self.as_ref().map_err(|e| {
            if !e.skip_logging {
                error!("{}", json_or(e));
            }
            e
        })
    }
}
