//! Diagnostics for the CI step binaries.
//!
//! Everything goes to stderr. Stdout is reserved for the progress lines the
//! pipeline reads.

use tracing_subscriber::EnvFilter;

use crate::config::optional_from_env;

pub const LOG_ENV: &str = "CI_STEPS_LOG";
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Installs the global subscriber. Calling it twice is harmless.
pub fn init_logging() {
    let directive = match optional_from_env(LOG_ENV) {
        Ok(directive) => directive,
        Err(e) => {
            eprintln!("warning: {e}, using {DEFAULT_DIRECTIVE}");
            None
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_from_directive(directive.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn filter_from_directive(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}
