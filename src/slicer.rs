//! Depth slicing of particle sets for layered rendering.
//!
//! Particles are first sorted along the depth axis of a [`View`], then the sorted array is
//! split into consecutive slices of equal depth width, each referring to a contiguous range
//! of indices.

use log::debug;

use crate::{
    error::{check_count, Result},
    particle::Position,
    projection::View,
    utils::{self, SortOrder},
    Config, SimulationBox,
};

/// One depth interval and the indices of the sorted particles falling into it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slice {
    start_value: f64,
    boundary_value: f64,
    indices: Option<(usize, usize)>,
}
impl Slice {
    /// Depth value at which the slice begins (inclusive)
    pub fn start_value(&self) -> f64 {
        self.start_value
    }
    /// Depth value at which the slice ends (exclusive, except for the last slice)
    pub fn boundary_value(&self) -> f64 {
        self.boundary_value
    }
    /// Inclusive index range into the sorted array, or `None` if no particle falls in it
    pub fn indices(&self) -> Option<(usize, usize)> {
        self.indices
    }
    pub fn is_empty(&self) -> bool {
        self.indices.is_none()
    }
    pub fn len(&self) -> usize {
        match self.indices {
            Some((start, end)) => end - start + 1,
            None => 0,
        }
    }
    /// First index, or -1 for an empty slice
    pub fn start_index_or_sentinel(&self) -> i64 {
        self.indices.map_or(-1, |(start, _)| start as i64)
    }
    /// Last index, or -1 for an empty slice
    pub fn end_index_or_sentinel(&self) -> i64 {
        self.indices.map_or(-1, |(_, end)| end as i64)
    }
    pub fn index_range(&self) -> std::ops::Range<usize> {
        match self.indices {
            Some((start, end)) => start..end + 1,
            None => 0..0,
        }
    }
}

/// Stable sort of positions along the depth axis of a view, in the view's order
pub fn sort_for_view<P: Position>(positions: &mut [P], view: View) {
    utils::sort_along(positions, view.depth_axis(), view.sort_order());
}

#[derive(Clone, Copy, Debug)]
pub struct Slicer {
    number_of_slices: usize,
}
impl Slicer {
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_number_of_slices(config.number_of_slices)
    }
    pub fn with_number_of_slices(number_of_slices: usize) -> Result<Self> {
        check_count("Number of slices", number_of_slices, 1)?;
        Ok(Self { number_of_slices })
    }
    pub fn number_of_slices(&self) -> usize {
        self.number_of_slices
    }

    /// Sort `positions` for `view` (in place) and partition them into slices.
    ///
    /// ```rust
    /// use dpd_slice::{projection::View, slicer::Slicer, SimulationBox};
    ///
    /// let box_ = SimulationBox::new(0.0, 1.0, 0.0, 1.0, 0.0, 1.0).unwrap();
    /// let mut coords = vec![[0.0, 0.75, 0.0], [0.0, 0.25, 0.0], [0.0, 0.5, 0.0]];
    /// let slices = Slicer::with_number_of_slices(2)
    ///     .unwrap()
    ///     .create_slices(&mut coords, View::Front, &box_);
    ///
    /// assert_eq!(coords[0], [0.0, 0.25, 0.0]);
    /// assert_eq!(slices[0].indices(), Some((0, 1)));
    /// assert_eq!(slices[1].indices(), Some((2, 2)));
    /// ```
    pub fn create_slices<P: Position>(
        &self,
        positions: &mut [P],
        view: View,
        box_: &SimulationBox,
    ) -> Vec<Slice> {
        sort_for_view(positions, view);
        self.partition(positions, view, box_)
    }

    /// Partition positions already sorted by [`sort_for_view`].
    ///
    /// `sorted` must be in the view's order; this is only checked in debug builds, and for
    /// unsorted input the slices no longer cover contiguous index ranges. Use
    /// [`Slicer::create_slices`] unless the positions are known to be sorted.
    ///
    /// The depth range is taken from the first and last sorted values; for an empty array
    /// it is the extent of the box's rotation-display frame, so the slices stay well
    /// defined.
    pub fn partition<P: Position>(
        &self,
        sorted: &[P],
        view: View,
        box_: &SimulationBox,
    ) -> Vec<Slice> {
        let axis = view.depth_axis();
        let order = view.sort_order();
        debug_assert!(utils::is_sorted_along(sorted, axis, order));
        let i = axis.index();

        let (start, end) = match (sorted.first(), sorted.last()) {
            (Some(first), Some(last)) => (first.coord()[i], last.coord()[i]),
            _ => {
                let frame = box_.rotation_display_frame();
                let bounds = frame.bounds(axis);
                match order {
                    SortOrder::Ascending => (bounds.lo(), bounds.hi()),
                    SortOrder::Descending => (bounds.hi(), bounds.lo()),
                }
            }
        };
        let n = self.number_of_slices;
        // Non-negative in both directions
        let width = (end - start).abs() / n as f64;
        let step = if order.is_ascending() { width } else { -width };

        let mut slices: Vec<Slice> = (0..n)
            .map(|k| Slice {
                start_value: start + k as f64 * step,
                boundary_value: if k + 1 == n {
                    end
                } else {
                    start + (k + 1) as f64 * step
                },
                indices: None,
            })
            .collect();

        let mut current = 0;
        for (idx, position) in sorted.iter().enumerate() {
            let value = position.coord()[i];
            while current + 1 < n && !is_within(value, slices[current].boundary_value, order) {
                current += 1;
            }
            let slice = &mut slices[current];
            slice.indices = match slice.indices {
                Some((first, _)) => Some((first, idx)),
                None => Some((idx, idx)),
            };
        }

        debug!(
            "{:?} view: {} positions in {} slices of width {}",
            view,
            sorted.len(),
            n,
            width
        );
        slices
    }
}

fn is_within(value: f64, boundary: f64, order: SortOrder) -> bool {
    match order {
        SortOrder::Ascending => value <= boundary,
        SortOrder::Descending => value >= boundary,
    }
}
