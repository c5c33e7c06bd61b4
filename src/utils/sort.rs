use std::cmp::Ordering;

use super::Axis;
use crate::particle::Position;

/// Direction in which positions are ordered along an axis
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortOrder {
    Ascending,
    Descending,
}
impl SortOrder {
    pub fn is_ascending(&self) -> bool {
        matches!(self, SortOrder::Ascending)
    }
}

/// Compares two positions by one coordinate.
///
/// NaN coordinates sort after every number in ascending order.
pub fn compare_along<P: Position>(a: &P, b: &P, axis: Axis, order: SortOrder) -> Ordering {
    let i = axis.index();
    let ordering = a.coord()[i].total_cmp(&b.coord()[i]);
    match order {
        SortOrder::Ascending => ordering,
        SortOrder::Descending => ordering.reverse(),
    }
}

/// Stable sort of positions along an axis.
///
/// ```rust
/// use dpd_slice::utils::{sort_along, Axis, SortOrder};
///
/// let mut coords = vec![[0.0, 2.0, 0.0], [1.0, 0.0, 0.0], [2.0, 2.0, 1.0]];
/// sort_along(&mut coords, Axis::Y, SortOrder::Descending);
///
/// // equal keys keep their relative order
/// assert_eq!(coords, vec![[0.0, 2.0, 0.0], [2.0, 2.0, 1.0], [1.0, 0.0, 0.0]]);
/// ```
pub fn sort_along<P: Position>(positions: &mut [P], axis: Axis, order: SortOrder) {
    positions.sort_by(|a, b| compare_along(a, b, axis, order));
}

/// Checks whether positions are already ordered along an axis
pub fn is_sorted_along<P: Position>(positions: &[P], axis: Axis, order: SortOrder) -> bool {
    positions
        .windows(2)
        .all(|w| compare_along(&w[0], &w[1], axis, order) != Ordering::Greater)
}
