pub mod build_info;

use std::{env, sync::Once};

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "pantry_core=info";

/// Initializes the global tracing subscriber with sensible defaults.
///
/// `RUST_LOG` is honoured; without it only `pantry_core` info events are shown.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let rust_log = env::var(EnvFilter::DEFAULT_ENV).ok();
        let filter = build_filter(rust_log.as_deref());

        // A host application may already own the global subscriber.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

/// Directives from `rust_log` when it parses, else the crate default.
fn build_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|value| !value.trim().is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn rust_log_overrides_default_level() {
        let filter = build_filter(Some("pantry_core=debug"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn missing_or_blank_rust_log_uses_default() {
        assert_eq!(build_filter(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(
            build_filter(Some("  ")).max_level_hint(),
            Some(LevelFilter::INFO)
        );
    }
}
