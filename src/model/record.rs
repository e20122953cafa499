//! Row-level record types and the type-tag normalization they share.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Hierarchical role of a detail row, resolved once from its raw `type`
/// label when the record is mapped.
///
/// Normalization is a case-insensitive prefix match on the trimmed label,
/// so `"Main Category - Food"` and `"main category"` both classify as
/// [`RowKind::MainCategory`]. Anything unrecognized is [`RowKind::Unknown`]
/// and takes no part in hierarchy construction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RowKind {
    MainCategory,
    SubCategoryMarker,
    SubItem,
    Unknown,
}

impl RowKind {
    /// Classifies a raw `type` cell. This is the single normalization point;
    /// no other code inspects the label text.
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_lowercase();
        if normalized.starts_with("main category") {
            RowKind::MainCategory
        } else if normalized.starts_with("sub category") {
            RowKind::SubCategoryMarker
        } else if normalized.starts_with("sub item") {
            RowKind::SubItem
        } else {
            RowKind::Unknown
        }
    }
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RowKind::MainCategory => "Main category",
            RowKind::SubCategoryMarker => "Sub category",
            RowKind::SubItem => "Sub item",
            RowKind::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// Numeric field a category's sub-items can be re-sorted by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortKey {
    Annual,
    Monthly,
}

impl SortKey {
    pub fn value(&self, record: &DetailRecord) -> f64 {
        match self {
            SortKey::Annual => record.annual,
            SortKey::Monthly => record.monthly,
        }
    }
}

/// One typed row of the details schema.
///
/// `weight`, `annual`, and `monthly` default to zero when the source cell
/// could not be coerced; `type_label` keeps the raw classifier text for
/// display while `kind` carries its resolved role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetailRecord {
    pub kind: RowKind,
    pub type_label: String,
    pub item: String,
    pub weight: f64,
    pub annual: f64,
    pub monthly: f64,
}

impl DetailRecord {
    pub fn new(
        type_label: impl Into<String>,
        item: impl Into<String>,
        weight: f64,
        annual: f64,
        monthly: f64,
    ) -> Self {
        let type_label = type_label.into();
        Self {
            kind: RowKind::from_label(&type_label),
            type_label,
            item: item.into(),
            weight,
            annual,
            monthly,
        }
    }

    /// Zero-valued stand-in used when an expected aggregate row is absent.
    pub fn zero() -> Self {
        Self {
            kind: RowKind::Unknown,
            type_label: String::new(),
            item: String::new(),
            weight: 0.0,
            annual: 0.0,
            monthly: 0.0,
        }
    }

    /// Returns `true` for rows that label a nested grouping rather than
    /// carrying a leaf data point.
    pub fn is_group_marker(&self) -> bool {
        self.kind == RowKind::SubCategoryMarker
    }
}

/// One entry of a historical rate series.
///
/// `date` is an opaque label, never parsed as a calendar date; `rate` is
/// fractional (0.05 means five percent). Series order is whatever the input
/// carried.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimePoint {
    pub date: String,
    pub rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_kind_matches_prefixes_case_insensitively() {
        assert_eq!(RowKind::from_label("main category"), RowKind::MainCategory);
        assert_eq!(RowKind::from_label("  Main Category "), RowKind::MainCategory);
        assert_eq!(RowKind::from_label("sub category: food"), RowKind::SubCategoryMarker);
        assert_eq!(RowKind::from_label("SUB ITEM"), RowKind::SubItem);
        assert_eq!(RowKind::from_label("aggregate"), RowKind::Unknown);
        assert_eq!(RowKind::from_label(""), RowKind::Unknown);
    }

    #[test]
    fn record_resolves_kind_once_and_keeps_raw_label() {
        let record = DetailRecord::new("Sub Item - bread", "Bread", 1.0, 2.0, 3.0);
        assert_eq!(record.kind, RowKind::SubItem);
        assert_eq!(record.type_label, "Sub Item - bread");
    }

    #[test]
    fn sort_key_selects_field() {
        let record = DetailRecord::new("sub item", "Bread", 1.0, 2.5, -0.3);
        assert_eq!(SortKey::Annual.value(&record), 2.5);
        assert_eq!(SortKey::Monthly.value(&record), -0.3);
    }
}
