//! Position planning for ordered containers.
//!
//! Columns are ordered within a board and cards within a column. Every structural change
//! renumbers the whole container to `0..n-1`, so a position is always the entity's index.
//! The functions here only compute plans; `service::ordering::PositionEngine` applies them.

use std::collections::{HashMap, HashSet};

use crate::server::error::board::BoardError;

/// An entity's id and stored position inside its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sibling {
    pub id: i32,
    pub position: i32,
}

impl Sibling {
    pub fn new(id: i32, position: i32) -> Self {
        Self { id, position }
    }
}

/// Final order of a container plus the position writes needed to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renumbering {
    /// Ids first to last; each id's new position is its index.
    pub order: Vec<i32>,
    /// `(id, position)` pairs whose stored position differs from the plan.
    pub changes: Vec<(i32, i32)>,
}

impl Renumbering {
    fn new(siblings: &[Sibling], order: Vec<i32>) -> Self {
        let stored: HashMap<i32, i32> = siblings.iter().map(|s| (s.id, s.position)).collect();

        let changes = order
            .iter()
            .enumerate()
            .filter_map(|(index, id)| {
                let position = index as i32;
                (stored.get(id) != Some(&position)).then_some((*id, position))
            })
            .collect();

        Self { order, changes }
    }
}

/// Position for an entity appended to a container whose highest position is `max`.
///
/// Gaps are never filled.
pub fn append_position(max: Option<i32>) -> i32 {
    max.map_or(0, |max| max + 1)
}

/// Renumbers `siblings` to `0..n-1` keeping their current order.
///
/// `siblings` must already be sorted by stored position.
pub fn plan_compact(siblings: &[Sibling]) -> Renumbering {
    let order = siblings.iter().map(|s| s.id).collect();
    Renumbering::new(siblings, order)
}

/// Places `id` at `index` and renumbers the rest around it.
///
/// `id` is taken out of `siblings` first if present. Negative indexes are treated as 0
/// and indexes past the end append.
pub fn plan_insert(siblings: &[Sibling], id: i32, index: i32) -> Renumbering {
    let mut order: Vec<i32> = siblings
        .iter()
        .map(|s| s.id)
        .filter(|sibling| *sibling != id)
        .collect();

    let index = (index.max(0) as usize).min(order.len());
    order.insert(index, id);

    Renumbering::new(siblings, order)
}

/// Assigns each id in `requested` its index as position.
///
/// `requested` must be a permutation of the container's current ids.
///
/// # Returns
/// - `Ok(Renumbering)` - The plan for the requested order
/// - `Err(BoardError::DuplicateReorderIds)` - An id appears more than once
/// - `Err(BoardError::UnknownReorderIds)` - An id is not in the container
/// - `Err(BoardError::IncompleteReorder)` - An id in the container was left out
pub fn plan_reorder(siblings: &[Sibling], requested: &[i32]) -> Result<Renumbering, BoardError> {
    let mut seen = HashSet::with_capacity(requested.len());
    let mut duplicates: Vec<i32> = requested
        .iter()
        .copied()
        .filter(|id| !seen.insert(*id))
        .collect();
    if !duplicates.is_empty() {
        duplicates.sort_unstable();
        duplicates.dedup();
        return Err(BoardError::DuplicateReorderIds(duplicates));
    }

    let current: HashSet<i32> = siblings.iter().map(|s| s.id).collect();

    let unknown: Vec<i32> = requested
        .iter()
        .copied()
        .filter(|id| !current.contains(id))
        .collect();
    if !unknown.is_empty() {
        return Err(BoardError::UnknownReorderIds(unknown));
    }

    let missing: Vec<i32> = siblings
        .iter()
        .map(|s| s.id)
        .filter(|id| !seen.contains(id))
        .collect();
    if !missing.is_empty() {
        return Err(BoardError::IncompleteReorder(missing));
    }

    Ok(Renumbering::new(siblings, requested.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dense(ids: &[i32]) -> Vec<Sibling> {
        ids.iter()
            .enumerate()
            .map(|(index, id)| Sibling::new(*id, index as i32))
            .collect()
    }

    #[test]
    fn append_starts_at_zero() {
        assert_eq!(append_position(None), 0);
        assert_eq!(append_position(Some(4)), 5);
    }

    #[test]
    fn reorder_assigns_list_index() {
        // A=1, B=2, C=3
        let plan = plan_reorder(&dense(&[1, 2, 3]), &[3, 1, 2]).unwrap();

        assert_eq!(plan.order, vec![3, 1, 2]);
        assert_eq!(plan.changes, vec![(3, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn reorder_rejects_omitted_ids() {
        let err = plan_reorder(&dense(&[1, 2, 3]), &[3, 1]).unwrap_err();

        assert!(matches!(err, BoardError::IncompleteReorder(ids) if ids == vec![2]));
    }

    #[test]
    fn reorder_rejects_foreign_ids() {
        let err = plan_reorder(&dense(&[1, 2]), &[2, 1, 9]).unwrap_err();

        assert!(matches!(err, BoardError::UnknownReorderIds(ids) if ids == vec![9]));
    }

    #[test]
    fn reorder_rejects_repeated_ids() {
        let err = plan_reorder(&dense(&[1, 2]), &[1, 1, 2]).unwrap_err();

        assert!(matches!(err, BoardError::DuplicateReorderIds(ids) if ids == vec![1]));
    }

    #[test]
    fn reorder_of_same_order_is_noop() {
        let plan = plan_reorder(&dense(&[1, 2]), &[1, 2]).unwrap();

        assert!(plan.changes.is_empty());
    }

    #[test]
    fn insert_shifts_later_siblings() {
        let plan = plan_insert(&dense(&[1, 2, 3]), 9, 1);

        assert_eq!(plan.order, vec![1, 9, 2, 3]);
        assert_eq!(plan.changes, vec![(9, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn insert_moves_existing_entity() {
        let plan = plan_insert(&dense(&[1, 2, 3, 4]), 4, 0);

        assert_eq!(plan.order, vec![4, 1, 2, 3]);
    }

    #[test]
    fn insert_clamps_index() {
        assert_eq!(plan_insert(&dense(&[1, 2]), 9, 50).order, vec![1, 2, 9]);
        assert_eq!(plan_insert(&dense(&[1, 2]), 9, -3).order, vec![9, 1, 2]);
    }

    #[test]
    fn insert_renormalizes_sparse_positions() {
        let siblings = vec![Sibling::new(1, 0), Sibling::new(2, 5), Sibling::new(3, 9)];

        let plan = plan_insert(&siblings, 3, 99);

        assert_eq!(plan.order, vec![1, 2, 3]);
        assert_eq!(plan.changes, vec![(2, 1), (3, 2)]);
    }

    #[test]
    fn compact_closes_gaps() {
        let siblings = vec![Sibling::new(7, 1), Sibling::new(8, 4)];

        let plan = plan_compact(&siblings);

        assert_eq!(plan.order, vec![7, 8]);
        assert_eq!(plan.changes, vec![(7, 0), (8, 1)]);
    }
}
