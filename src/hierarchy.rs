//! Folds a flat sequence of detail records into a one-level category tree.

use tracing::debug;

use crate::model::{Category, DetailRecord, Hierarchy, RowKind};

/// Builds the category hierarchy from mapped detail records.
///
/// Each main-category row starts a new [`Category`] seeded from its own
/// figures and becomes the current owner; sub-category markers and sub-items
/// append to the current owner in input order. Sub-rows seen before any main
/// category land in the explicit `unassigned` bucket. Unknown kinds take no
/// part at all. Category order is first-seen order.
pub fn build(records: &[DetailRecord]) -> Hierarchy {
    let mut categories: Vec<Category> = Vec::new();
    let mut unassigned: Vec<DetailRecord> = Vec::new();

    for record in records {
        match record.kind {
            RowKind::MainCategory => categories.push(Category::from_record(record)),
            RowKind::SubCategoryMarker | RowKind::SubItem => match categories.last_mut() {
                Some(current) => current.sub_items.push(record.clone()),
                None => unassigned.push(record.clone()),
            },
            RowKind::Unknown => {}
        }
    }

    debug!(
        categories = categories.len(),
        unassigned = unassigned.len(),
        "built category hierarchy"
    );
    Hierarchy {
        categories,
        unassigned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(type_label: &str, item: &str) -> DetailRecord {
        DetailRecord::new(type_label, item, 1.0, 1.0, 1.0)
    }

    #[test]
    fn main_rows_own_following_sub_rows() {
        let records = vec![
            record("main category", "Food"),
            record("sub item", "Bread"),
            record("main category", "Housing"),
        ];
        let hierarchy = build(&records);
        assert_eq!(hierarchy.categories.len(), 2);
        assert_eq!(hierarchy.categories[0].item, "Food");
        assert_eq!(hierarchy.categories[0].sub_items.len(), 1);
        assert_eq!(hierarchy.categories[0].sub_items[0].item, "Bread");
        assert!(hierarchy.categories[1].sub_items.is_empty());
        assert!(hierarchy.unassigned.is_empty());
    }

    #[test]
    fn orphan_sub_rows_go_to_the_unassigned_bucket() {
        let records = vec![
            record("sub item", "Stray"),
            record("sub category", "Stray group"),
            record("main category", "Food"),
            record("sub item", "Bread"),
        ];
        let hierarchy = build(&records);
        assert_eq!(hierarchy.categories.len(), 1);
        assert_eq!(hierarchy.categories[0].sub_items.len(), 1);
        let orphans: Vec<_> = hierarchy.unassigned.iter().map(|r| r.item.as_str()).collect();
        assert_eq!(orphans, vec!["Stray", "Stray group"]);
    }

    #[test]
    fn unknown_kinds_neither_start_nor_join_a_category() {
        let records = vec![
            record("main category", "Food"),
            record("aggregate", "All items"),
            record("sub item", "Bread"),
        ];
        let hierarchy = build(&records);
        assert_eq!(hierarchy.categories.len(), 1);
        let items: Vec<_> = hierarchy.categories[0]
            .sub_items
            .iter()
            .map(|r| r.item.as_str())
            .collect();
        assert_eq!(items, vec!["Bread"]);
    }

    #[test]
    fn markers_append_as_regular_entries() {
        let records = vec![
            record("main category", "Food"),
            record("sub category", "Bakery"),
            record("sub item", "Bread"),
        ];
        let hierarchy = build(&records);
        let sub_items = &hierarchy.categories[0].sub_items;
        assert!(sub_items[0].is_group_marker());
        assert!(!sub_items[1].is_group_marker());
    }
}
