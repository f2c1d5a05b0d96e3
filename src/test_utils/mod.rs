//! Test utilities for hydrate
//!
//! Helpers shared by unit tests and the integration suite: an isolated
//! document tree in a temporary directory and one-time tracing setup.
//!
//! # Example
//!
//! ```rust,ignore
//! use hydrate_cli::test_utils::DocTree;
//!
//! let tree = DocTree::new().unwrap();
//! tree.write("part.md", "embedded").unwrap();
//! let root = tree.write("root.md", "{{part.md}}").unwrap();
//! ```

pub mod fixtures;

pub use fixtures::DocTree;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has any effect. With `level` set that level is used;
/// otherwise `RUST_LOG` is honored if present, and nothing is logged if not.
///
/// ```bash
/// RUST_LOG=hydrate_cli=trace cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
