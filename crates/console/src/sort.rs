//! Client-side table sorting.
//!
//! Sorting applies to the rows already fetched for the current page; it never
//! changes what is requested from the backend.

use std::cmp::Ordering;

/// Direction of an active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

/// Sort state of one table, keyed by a per-table column enum.
///
/// A fresh table is unsorted (backend order). Clicking a column sorts it
/// ascending; clicking it again flips the direction; clicking a different
/// column starts over ascending on that column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<K: Copy + PartialEq> {
    active: Option<(K, SortDirection)>,
}

impl<K: Copy + PartialEq> SortState<K> {
    pub fn unsorted() -> Self {
        Self { active: None }
    }

    /// React to a click on the `key` column header.
    pub fn toggle(&mut self, key: K) {
        self.active = match self.active {
            Some((current, SortDirection::Ascending)) if current == key => {
                Some((key, SortDirection::Descending))
            }
            _ => Some((key, SortDirection::Ascending)),
        };
    }

    /// Direction shown in the header of the `key` column, if it is the
    /// active sort column.
    pub fn direction_of(&self, key: K) -> Option<SortDirection> {
        match self.active {
            Some((current, direction)) if current == key => Some(direction),
            _ => None,
        }
    }

    /// Arrow glyph for the `key` column header.
    pub fn indicator(&self, key: K) -> &'static str {
        match self.direction_of(key) {
            Some(SortDirection::Ascending) => " ▲",
            Some(SortDirection::Descending) => " ▼",
            None => "",
        }
    }

    /// Sort `rows` in place per the active column. The sort is stable, so
    /// rows that compare equal keep their fetched order. Unsorted state
    /// leaves the rows untouched.
    pub fn apply<T>(&self, rows: &mut [T], compare: impl Fn(K, &T, &T) -> Ordering) {
        if let Some((key, direction)) = self.active {
            rows.sort_by(|a, b| direction.apply(compare(key, a, b)));
        }
    }
}

impl<K: Copy + PartialEq> Default for SortState<K> {
    fn default() -> Self {
        Self::unsorted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Column {
        Name,
        Count,
    }

    fn compare(key: Column, a: &(&str, u32), b: &(&str, u32)) -> Ordering {
        match key {
            Column::Name => a.0.cmp(b.0),
            Column::Count => a.1.cmp(&b.1),
        }
    }

    #[test]
    fn toggle_cycles_asc_desc_asc() {
        let mut state = SortState::unsorted();
        assert_eq!(state.direction_of(Column::Name), None);

        state.toggle(Column::Name);
        assert_eq!(state.direction_of(Column::Name), Some(SortDirection::Ascending));

        state.toggle(Column::Name);
        assert_eq!(state.direction_of(Column::Name), Some(SortDirection::Descending));

        state.toggle(Column::Name);
        assert_eq!(state.direction_of(Column::Name), Some(SortDirection::Ascending));
    }

    #[test]
    fn switching_column_starts_ascending() {
        let mut state = SortState::unsorted();
        state.toggle(Column::Name);
        state.toggle(Column::Name);
        assert_eq!(state.direction_of(Column::Name), Some(SortDirection::Descending));

        state.toggle(Column::Count);
        assert_eq!(state.direction_of(Column::Count), Some(SortDirection::Ascending));
        assert_eq!(state.direction_of(Column::Name), None);
    }

    #[test]
    fn unsorted_preserves_backend_order() {
        let mut rows = vec![("c", 1), ("a", 2), ("b", 3)];
        SortState::unsorted().apply(&mut rows, compare);
        assert_eq!(rows, vec![("c", 1), ("a", 2), ("b", 3)]);
    }

    #[test]
    fn descending_reverses_the_comparator() {
        let mut rows = vec![("b", 2), ("a", 1), ("c", 3)];
        let mut state = SortState::unsorted();
        state.toggle(Column::Count);
        state.toggle(Column::Count);
        state.apply(&mut rows, compare);
        assert_eq!(rows, vec![("c", 3), ("b", 2), ("a", 1)]);
    }

    #[test]
    fn equal_keys_keep_their_fetched_order() {
        let mut rows = vec![("z", 1), ("y", 1), ("x", 1)];
        let mut state = SortState::unsorted();
        state.toggle(Column::Count);
        state.apply(&mut rows, compare);
        assert_eq!(rows, vec![("z", 1), ("y", 1), ("x", 1)]);
    }
}
