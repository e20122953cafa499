//! Grouped/flat re-sort of a category's sub-items.

use std::cmp::Ordering;

use tracing::warn;

use crate::model::{Category, DetailRecord, SortKey};

/// Returns a new ordering of `items`, descending by `key`, stable on ties.
///
/// When no group marker is present the whole list is sorted as one. With
/// markers, each marker's following run of items is sorted within itself and
/// the markers keep their original relative order. Items preceding the first
/// marker have no group to belong to and are absent from the result; the
/// drop is logged but deliberate, matching the partitioning scheme's
/// observed contract.
pub fn sorted_sub_items(items: &[DetailRecord], key: SortKey) -> Vec<DetailRecord> {
    if !items.iter().any(DetailRecord::is_group_marker) {
        let mut out = items.to_vec();
        sort_desc(&mut out, key);
        return out;
    }

    // Buckets are keyed by marker position, so duplicate marker labels can
    // neither merge nor duplicate their items.
    let mut buckets: Vec<(usize, Vec<DetailRecord>)> = Vec::new();
    let mut leading = 0usize;
    for (index, item) in items.iter().enumerate() {
        if item.is_group_marker() {
            buckets.push((index, Vec::new()));
        } else if let Some((_, bucket)) = buckets.last_mut() {
            bucket.push(item.clone());
        } else {
            leading += 1;
        }
    }
    if leading > 0 {
        warn!(
            dropped = leading,
            "sub-items preceding the first group marker were dropped by the grouped sort"
        );
    }

    let mut out = Vec::with_capacity(items.len() - leading);
    for (marker_index, mut bucket) in buckets {
        sort_desc(&mut bucket, key);
        out.push(items[marker_index].clone());
        out.extend(bucket);
    }
    out
}

fn sort_desc(items: &mut [DetailRecord], key: SortKey) {
    items.sort_by(|a, b| {
        key.value(b)
            .partial_cmp(&key.value(a))
            .unwrap_or(Ordering::Equal)
    });
}

impl Category {
    /// Re-sorts `sub_items` by `key`, replacing the list wholesale with the
    /// result of [`sorted_sub_items`].
    pub fn sort_by(&mut self, key: SortKey) {
        self.sub_items = sorted_sub_items(&self.sub_items, key);
    }
}
