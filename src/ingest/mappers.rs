//! Mappers from tokenized rows to typed records.
//!
//! Both mappers skip malformed rows silently; a short row is a data-quality
//! signal, not an error. Note the deliberate asymmetry in header handling:
//! [`map_details`] excludes the header row itself, while [`map_historical`]
//! expects the caller to pre-slice it. Both observed behaviors are kept.

use tracing::debug;

use crate::ingest::{coerce, Row};
use crate::model::{DetailRecord, TimePoint};

/// Maps detail rows into typed records.
///
/// Row 0 is skipped unconditionally as the header. Rows with fewer than five
/// fields are dropped; extra fields beyond the fifth are ignored. The three
/// numeric fields coerce with zero fallback.
pub fn map_details(rows: &[Row]) -> Vec<DetailRecord> {
    let mut records = Vec::new();
    for row in rows.iter().skip(1) {
        if row.len() < 5 {
            continue;
        }
        records.push(DetailRecord::new(
            row[0].as_str(),
            row[1].as_str(),
            coerce::to_number_or_zero(&row[2]),
            coerce::to_number_or_zero(&row[3]),
            coerce::to_number_or_zero(&row[4]),
        ));
    }
    debug!(rows = rows.len(), records = records.len(), "mapped detail rows");
    records
}

/// Maps historical rows into time points, preserving input order.
///
/// The caller is responsible for excluding any header row before invoking
/// this mapper. Rows with fewer than two fields are dropped, as are rows
/// whose rate cell does not coerce — an unparsable rate is excluded rather
/// than zero-filled.
pub fn map_historical(rows: &[Row]) -> Vec<TimePoint> {
    let mut points = Vec::new();
    for row in rows {
        if row.len() < 2 {
            continue;
        }
        let rate = coerce::to_number(&row[1]);
        if rate.is_nan() {
            continue;
        }
        points.push(TimePoint {
            date: row[0].clone(),
            rate,
        });
    }
    debug!(rows = rows.len(), points = points.len(), "mapped historical rows");
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RowKind;

    fn row(fields: &[&str]) -> Row {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn details_skip_header_and_short_rows() {
        let rows = vec![
            row(&["type", "item", "weight", "annual", "monthly"]),
            row(&["main category", "Food", "32.7", "26.3%", "1.2"]),
            row(&["sub item", "Bread"]),
            row(&["sub item", "Bread", "10.1", "n/a", "0.8", "extra column"]),
        ];
        let records = map_details(&rows);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].kind, RowKind::MainCategory);
        assert_eq!(records[0].item, "Food");
        assert_eq!(records[0].annual, 26.3);
        // unparsable annual degrades to zero, extra column is ignored
        assert_eq!(records[1].annual, 0.0);
        assert_eq!(records[1].monthly, 0.8);
    }

    #[test]
    fn details_on_empty_or_header_only_input() {
        assert!(map_details(&[]).is_empty());
        assert!(map_details(&[row(&["type", "item", "w", "a", "m"])]).is_empty());
    }

    #[test]
    fn historical_drops_short_and_unparsable_rows() {
        let rows = vec![
            row(&["2024-01", "0.05"]),
            row(&["2024-02", "bad"]),
            row(&["x"]),
        ];
        let points = map_historical(&rows);
        assert_eq!(
            points,
            vec![TimePoint {
                date: "2024-01".into(),
                rate: 0.05
            }]
        );
    }

    #[test]
    fn historical_preserves_input_order() {
        let rows = vec![
            row(&["2024-03", "0.02"]),
            row(&["2024-01", "0.04"]),
            row(&["2024-02", "0.03"]),
        ];
        let dates: Vec<_> = map_historical(&rows).into_iter().map(|p| p.date).collect();
        assert_eq!(dates, vec!["2024-03", "2024-01", "2024-02"]);
    }
}
