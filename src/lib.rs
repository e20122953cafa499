#![doc(test(attr(deny(warnings))))]

//! Inflation Core turns raw price-index CSV text into typed category
//! hierarchies and historical rate series ready for presentation layers.

pub mod cli;
pub mod errors;
pub mod hierarchy;
pub mod ingest;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod sort;
pub mod source;

pub use errors::PipelineError;
pub use model::{Category, DetailRecord, Hierarchy, RowKind, SortKey, TimePoint};
pub use pipeline::{PipelineInputs, Snapshot};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        init_tracing();
        tracing::info!("Inflation Core tracing initialized.");
    });
}

/// Installs the global tracing subscriber with sensible defaults.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::from_default_env().add_directive("inflation_core=info".parse().unwrap());

    fmt().with_env_filter(filter).init();
}
