//! Helpers shared by unit and integration tests.

use std::path::PathBuf;
use std::sync::Once;

use tracing::debug;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

static LOGGING: Once = Once::new();

/// Install a test-writer subscriber once per test binary.
///
/// `RUST_LOG` wins; otherwise orgtree logs at trace and everything else at warn.
pub fn init_test_setup() {
    LOGGING.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("warn,orgtree=trace"));
        let layer = fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter);

        // another harness may have installed one already
        if tracing::dispatcher::has_been_set() {
            return;
        }
        if let Err(e) = tracing_subscriber::registry().with(layer).try_init() {
            eprintln!("test logging not installed: {e}");
        }
        debug!("test logging ready");
    });
}

/// Path of a file under `tests/resources`.
pub fn resource_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("resources")
        .join(name)
}
