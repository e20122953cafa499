//! CSV ingestion: tokenizer, numeric coercion, and row-to-record mappers.

pub mod coerce;
pub mod mappers;
pub mod tokenizer;

/// One tokenized CSV row: ordered string fields, each trimmed.
pub type Row = Vec<String>;
