//! Logging setup for the driver.
//!
//! Libraries only emit `tracing` events; the binary decides whether anything
//! is printed. Nothing is installed unless a filter is requested through
//! `--log-level`, `GIB_LOG` or `RUST_LOG` (checked in that order).

use std::sync::Once;

use tracing_subscriber::{prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

/// Project-specific filter variable, preferred over `RUST_LOG`.
pub const LOG_ENV: &str = "GIB_LOG";

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times; only the first call does anything.
/// Enable with e.g. `GIB_LOG=gib_lexer=trace` or `--log-level debug`.
pub fn init_tracing(flag: Option<&str>) {
    TRACING_INIT.call_once(|| {
        let directive = filter_directive(
            flag,
            std::env::var(LOG_ENV).ok(),
            std::env::var("RUST_LOG").ok(),
        );
        let Some(directive) = directive else {
            return;
        };
        let filter = match EnvFilter::try_new(&directive) {
            Ok(filter) => filter,
            Err(e) => {
                eprintln!("warning: ignoring invalid log filter '{directive}': {e}");
                return;
            }
        };
        let layer = HierarchicalLayer::new(2)
            .with_writer(std::io::stderr)
            .with_targets(true)
            .with_bracketed_fields(true);
        if let Err(e) = tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init()
        {
            eprintln!("warning: could not install log subscriber: {e}");
        }
    });
}

/// Pick the filter directive: the flag wins, then `GIB_LOG`, then `RUST_LOG`.
///
/// Blank values count as unset.
pub fn filter_directive(
    flag: Option<&str>,
    gib_log: Option<String>,
    rust_log: Option<String>,
) -> Option<String> {
    flag.map(str::to_string)
        .into_iter()
        .chain(gib_log)
        .chain(rust_log)
        .find(|directive| !directive.trim().is_empty())
}
