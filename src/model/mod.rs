//! Domain models produced and consumed by the ingestion pipeline.

pub mod category;
pub mod record;

pub use category::{Category, Hierarchy};
pub use record::{DetailRecord, RowKind, SortKey, TimePoint};
