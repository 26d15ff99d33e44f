use std::sync::OnceLock;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{reload, EnvFilter, Registry};

static FILTER_HANDLE: OnceLock<reload::Handle<EnvFilter, Registry>> = OnceLock::new();

pub fn filter_directives(log_level: &str) -> String {
    format!(
        "wgpu=ERROR,winit=WARN,eframe=WARN,egui=WARN,dcrdesk={l},dcrdesk_gui={l},dcrdesk_common={l},dcrdesk_schema={l}",
        l = log_level
    )
}

pub fn init_tracing(log_level: &str) {

    let fmt_layer = tracing_subscriber::fmt::Layer::default()
        .compact()
        .with_ansi(false);

    let (filter_layer, handle) = reload::Layer::new(EnvFilter::new(filter_directives(log_level)));

    // Another subscriber may already be installed by a test harness.
    if tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
        .is_ok()
    {
        let _ = FILTER_HANDLE.set(handle);
    }
}

/// Swaps the installed filter for one built from `log_level`.
/// Returns false when no reloadable subscriber was installed by `init_tracing`.
pub fn reload_filter(log_level: &str) -> Result<bool, reload::Error> {
    match FILTER_HANDLE.get() {
        Some(handle) => handle.reload(EnvFilter::new(filter_directives(log_level))).map(|_| true),
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_scope_our_crates() {
        let d = filter_directives("debug");
        assert!(d.contains("dcrdesk_gui=debug"));
        assert!(d.contains("egui=WARN"));
    }
}
