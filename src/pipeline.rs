//! Full ingestion run: three text blobs in, one typed snapshot out.

use serde::Serialize;
use tracing::{debug, info};

use crate::errors::PipelineError;
use crate::hierarchy;
use crate::ingest::{mappers, tokenizer};
use crate::model::{Category, DetailRecord, TimePoint};

/// The three CSV text blobs a run consumes.
///
/// The details blob is required; either history blob may be absent and is
/// then treated as an empty series.
#[derive(Debug, Clone, Default)]
pub struct PipelineInputs {
    pub details: Option<String>,
    pub annual_history: Option<String>,
    pub monthly_history: Option<String>,
}

/// Fully materialized output of one pipeline run.
///
/// Rebuilt from scratch on every invocation; nothing is shared across runs.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Snapshot {
    pub categories: Vec<Category>,
    /// Sub-rows that appeared before any main category.
    pub unassigned: Vec<DetailRecord>,
    /// The "all items" aggregate row, zero-valued when the data has none.
    pub all_items: DetailRecord,
    pub annual_history: Vec<TimePoint>,
    pub monthly_history: Vec<TimePoint>,
}

/// Runs the whole pipeline over the given inputs.
///
/// Fails only when the details blob is absent; every malformed row or cell
/// inside the blobs is tolerated per the ingestion layer's policies.
pub fn run(inputs: &PipelineInputs) -> Result<Snapshot, PipelineError> {
    let details_text = inputs
        .details
        .as_deref()
        .ok_or(PipelineError::MissingDetails)?;

    let detail_rows = tokenizer::parse(details_text);
    let records = mappers::map_details(&detail_rows);
    let hierarchy = hierarchy::build(&records);

    let all_items = records
        .iter()
        .find(|record| record.item.to_lowercase().contains("all items"))
        .cloned()
        .unwrap_or_else(DetailRecord::zero);

    let annual_history = historical_series(inputs.annual_history.as_deref());
    let monthly_history = historical_series(inputs.monthly_history.as_deref());

    info!(
        categories = hierarchy.categories.len(),
        annual_points = annual_history.len(),
        monthly_points = monthly_history.len(),
        "pipeline run complete"
    );
    Ok(Snapshot {
        categories: hierarchy.categories,
        unassigned: hierarchy.unassigned,
        all_items,
        annual_history,
        monthly_history,
    })
}

/// Tokenizes one optional history blob and maps it to a series.
///
/// The header row is excluded here — the historical mapper expects its
/// caller to pre-slice it, unlike the detail mapper.
fn historical_series(text: Option<&str>) -> Vec<TimePoint> {
    let Some(text) = text else {
        debug!("history blob absent, yielding empty series");
        return Vec::new();
    };
    let rows = tokenizer::parse(text);
    let body = if rows.is_empty() { &rows[..] } else { &rows[1..] };
    mappers::map_historical(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RowKind;

    const DETAILS: &str = "\
type,item,weight,annual,monthly
aggregate,All Items,100,26.5%,1.3%
main category,Food,32.7,28.1,1.5
sub category,Bakery,0,0,0
sub item,Bread,4.1,31.2,2.0
main category,Housing,27.9,20.4,0.9
";

    const ANNUAL: &str = "\
date,rate
2023,0.338
2024,0.265
";

    #[test]
    fn run_produces_categories_series_and_aggregate() {
        let inputs = PipelineInputs {
            details: Some(DETAILS.into()),
            annual_history: Some(ANNUAL.into()),
            monthly_history: None,
        };
        let snapshot = run(&inputs).unwrap();

        assert_eq!(snapshot.categories.len(), 2);
        assert_eq!(snapshot.categories[0].item, "Food");
        assert_eq!(snapshot.categories[0].sub_items.len(), 2);
        assert_eq!(snapshot.all_items.item, "All Items");
        assert_eq!(snapshot.all_items.annual, 26.5);
        assert_eq!(snapshot.annual_history.len(), 2);
        assert_eq!(snapshot.annual_history[1].rate, 0.265);
        assert!(snapshot.monthly_history.is_empty());
    }

    #[test]
    fn missing_details_is_a_distinguished_failure() {
        let inputs = PipelineInputs::default();
        assert!(matches!(run(&inputs), Err(PipelineError::MissingDetails)));
    }

    #[test]
    fn absent_aggregate_defaults_to_zero_record() {
        let inputs = PipelineInputs {
            details: Some("type,item,w,a,m\nmain category,Food,1,2,3\n".into()),
            ..Default::default()
        };
        let snapshot = run(&inputs).unwrap();
        assert_eq!(snapshot.all_items.kind, RowKind::Unknown);
        assert_eq!(snapshot.all_items.annual, 0.0);
        assert_eq!(snapshot.all_items.monthly, 0.0);
    }

    #[test]
    fn empty_history_blob_yields_empty_series() {
        let inputs = PipelineInputs {
            details: Some(DETAILS.into()),
            annual_history: Some(String::new()),
            monthly_history: Some("date,rate\n".into()),
        };
        let snapshot = run(&inputs).unwrap();
        assert!(snapshot.annual_history.is_empty());
        assert!(snapshot.monthly_history.is_empty());
    }

    #[test]
    fn repeated_runs_are_deterministic() {
        let inputs = PipelineInputs {
            details: Some(DETAILS.into()),
            annual_history: Some(ANNUAL.into()),
            monthly_history: Some(ANNUAL.into()),
        };
        let first = run(&inputs).unwrap();
        let second = run(&inputs).unwrap();
        assert_eq!(first, second);
    }
}
