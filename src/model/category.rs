//! Category hierarchy types built from flat detail records.

use serde::{Deserialize, Serialize};

use crate::model::record::DetailRecord;

/// One main category with its own aggregate figures and the ordered list of
/// rows it owns.
///
/// `sub_items` holds leaf rows and group markers alike; markers are ordinary
/// entries distinguished only by their resolved kind. The list is only ever
/// replaced wholesale (by the grouped sort), never edited element by element.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub item: String,
    pub weight: f64,
    pub annual: f64,
    pub monthly: f64,
    pub sub_items: Vec<DetailRecord>,
}

impl Category {
    /// Seeds a category from its own main-category row.
    pub fn from_record(record: &DetailRecord) -> Self {
        Self {
            item: record.item.clone(),
            weight: record.weight,
            annual: record.annual,
            monthly: record.monthly,
            sub_items: Vec::new(),
        }
    }
}

/// Result of folding detail records into categories.
///
/// Sub-rows encountered before any main category land in `unassigned` rather
/// than being silently discarded; consumers decide whether to surface them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Hierarchy {
    pub categories: Vec<Category>,
    pub unassigned: Vec<DetailRecord>,
}
