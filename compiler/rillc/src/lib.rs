//! Rill driver: loads JSON programs and runs them.
//!
//! This is the only crate that turns errors into process exit codes.

pub mod commands;
pub mod loader;
pub mod reporting;

use std::sync::Once;

pub use loader::{load_program, parse_program, LoadError};

/// Exit status for a runtime evaluation error.
pub const EXIT_EVAL_ERROR: i32 = 1;
/// Exit status for an unreadable program or bad command line.
pub const EXIT_USAGE_ERROR: i32 = 2;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set, e.g. `RUST_LOG=rill_eval=trace`.
/// With `tree`, spans render as an indented call tree instead of flat lines.
pub fn init_tracing(tree: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let flat = (!tree).then(|| {
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
            });
            let nested = tree.then(|| {
                tracing_tree::HierarchicalLayer::new(2)
                    .with_writer(std::io::stderr)
                    .with_targets(true)
            });
            tracing_subscriber::registry()
                .with(flat)
                .with(nested)
                .with(filter)
                .init();
        }
    });
}
