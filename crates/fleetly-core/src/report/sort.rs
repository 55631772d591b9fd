// ── Sort state and attribute-aware ordering ──
//
// Column-header sorting over semi-structured records. The comparator
// resolves values through `SemiStructured::field` (fixed schema first,
// attributes second); direction flips the sign of the result, never the
// comparator internals. Rust's `sort_by` is stable, so records that
// compare equal keep their fetch order.

use std::borrow::Cow;
use std::cmp::Ordering;

use crate::model::SemiStructured;

/// Sort direction for a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Current sort selection. `key = None` means natural (fetch) order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    /// Header-click transition: a new column always starts ascending; the
    /// active column flips between ascending and descending. Once a column
    /// is chosen the table never returns to natural order.
    pub fn toggle(&mut self, key: &str) {
        let direction = if self.key.as_deref() == Some(key)
            && self.direction == SortDirection::Ascending
        {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        self.key = Some(key.to_owned());
        self.direction = direction;
    }
}

/// Compare two records on `key`. A record with no value for the key
/// compares equal to anything, leaving its placement to sort stability.
pub fn compare_by_key<R: SemiStructured>(
    a: &R,
    b: &R,
    key: &str,
    direction: SortDirection,
) -> Ordering {
    let ordering = match (a.field(key), b.field(key)) {
        (Some(a), Some(b)) => a.coercing_cmp(&b),
        _ => Ordering::Equal,
    };
    direction.apply(ordering)
}

/// Drives sort-state transitions and produces ordered views of record
/// lists without ever mutating the source list.
#[derive(Debug, Clone, Default)]
pub struct SortableColumnProjector {
    state: SortState,
}

impl SortableColumnProjector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SortState {
        &self.state
    }

    /// Apply a header click for `key`.
    pub fn toggle(&mut self, key: &str) {
        self.state.toggle(key);
    }

    /// Active direction for a column header, or `None` when the column is
    /// not the current sort key.
    pub fn column_direction(&self, key: &str) -> Option<SortDirection> {
        (self.state.key.as_deref() == Some(key)).then_some(self.state.direction)
    }

    /// Ordered view of `items`. Natural order borrows the input untouched;
    /// an active key yields a freshly sorted copy.
    pub fn project<'a, R>(&self, items: &'a [R]) -> Cow<'a, [R]>
    where
        R: SemiStructured + Clone,
    {
        match self.state.key.as_deref() {
            None => Cow::Borrowed(items),
            Some(key) => {
                let mut sorted = items.to_vec();
                sorted.sort_by(|a, b| compare_by_key(a, b, key, self.state.direction));
                Cow::Owned(sorted)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use fleetly_api::ReportItem;

    use super::*;

    fn item(device_id: i64, extras: serde_json::Value) -> ReportItem {
        let mut value = json!({"deviceId": device_id});
        if let (Some(map), Some(extra)) = (value.as_object_mut(), extras.as_object()) {
            map.extend(extra.clone());
        }
        serde_json::from_value(value).unwrap()
    }

    fn device_ids(items: &[ReportItem]) -> Vec<i64> {
        items.iter().map(|i| i.device_id).collect()
    }

    #[test]
    fn toggle_new_key_starts_ascending() {
        let mut state = SortState::default();
        state.toggle("activeUsers");
        assert_eq!(state.key.as_deref(), Some("activeUsers"));
        assert_eq!(state.direction, SortDirection::Ascending);
    }

    #[test]
    fn toggle_same_key_cycles_asc_desc_asc() {
        let mut state = SortState::default();
        state.toggle("captureTime");
        assert_eq!(state.direction, SortDirection::Ascending);
        state.toggle("captureTime");
        assert_eq!(state.direction, SortDirection::Descending);
        state.toggle("captureTime");
        assert_eq!(state.direction, SortDirection::Ascending);
    }

    #[test]
    fn toggle_other_key_resets_to_ascending() {
        let mut state = SortState::default();
        state.toggle("captureTime");
        state.toggle("captureTime");
        assert_eq!(state.direction, SortDirection::Descending);
        state.toggle("activeUsers");
        assert_eq!(state.key.as_deref(), Some("activeUsers"));
        assert_eq!(state.direction, SortDirection::Ascending);
    }

    #[test]
    fn natural_order_borrows_input_unchanged() {
        let items = vec![item(3, json!({})), item(1, json!({})), item(2, json!({}))];
        let projector = SortableColumnProjector::new();
        let projected = projector.project(&items);
        assert!(matches!(projected, Cow::Borrowed(_)));
        assert_eq!(device_ids(&projected), vec![3, 1, 2]);
    }

    #[test]
    fn projecting_never_mutates_the_source() {
        let items = vec![item(3, json!({})), item(1, json!({}))];
        let mut projector = SortableColumnProjector::new();
        projector.toggle("deviceId");
        let projected = projector.project(&items);
        assert_eq!(device_ids(&projected), vec![1, 3]);
        assert_eq!(device_ids(&items), vec![3, 1]);
    }

    #[test]
    fn descending_reverses_the_comparison() {
        let items = vec![item(1, json!({})), item(3, json!({})), item(2, json!({}))];
        let mut projector = SortableColumnProjector::new();
        projector.toggle("deviceId");
        projector.toggle("deviceId");
        let projected = projector.project(&items);
        assert_eq!(device_ids(&projected), vec![3, 2, 1]);
    }

    #[test]
    fn sorts_on_attribute_fallback_values() {
        let items = vec![
            item(1, json!({"totalDistance": 900.0})),
            item(2, json!({"totalDistance": 250.0})),
            item(3, json!({"totalDistance": 512.0})),
        ];
        let mut projector = SortableColumnProjector::new();
        projector.toggle("totalDistance");
        let projected = projector.project(&items);
        assert_eq!(device_ids(&projected), vec![2, 3, 1]);
    }

    #[test]
    fn records_without_the_key_hold_their_fetch_order() {
        let items = vec![
            item(1, json!({})),
            item(2, json!({"totalDistance": 100.0})),
            item(3, json!({})),
            item(4, json!({"totalDistance": 50.0})),
        ];
        let mut projector = SortableColumnProjector::new();
        projector.toggle("totalDistance");
        let projected = projector.project(&items);
        // Valueless records compare equal to everything; stability keeps
        // them where the comparator saw them.
        assert_eq!(projected.len(), 4);
        let valued: Vec<i64> = projected
            .iter()
            .filter(|i| i.attributes.contains_key("totalDistance"))
            .map(|i| i.device_id)
            .collect();
        assert_eq!(valued, vec![4, 2]);
    }

    #[test]
    fn ascending_result_is_pairwise_ordered() {
        let items = vec![
            item(1, json!({"totalDistance": 512.0})),
            item(2, json!({"totalDistance": 250.0})),
            item(3, json!({"totalDistance": 900.0})),
            item(4, json!({"totalDistance": 250.0})),
        ];
        let mut projector = SortableColumnProjector::new();
        projector.toggle("totalDistance");
        let projected = projector.project(&items);
        for pair in projected.windows(2) {
            let ordering =
                compare_by_key(&pair[0], &pair[1], "totalDistance", SortDirection::Ascending);
            assert_ne!(ordering, std::cmp::Ordering::Greater);
        }
        // Equal keys keep fetch order: device 2 was fetched before device 4.
        assert_eq!(device_ids(&projected), vec![2, 4, 1, 3]);
    }
}
