use crate::utils::{Axis, SortOrder};

/// The six canonical directions from which the box is drawn
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum View {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}
impl View {
    pub const ALL: [View; 6] = [
        View::Front,
        View::Back,
        View::Left,
        View::Right,
        View::Top,
        View::Bottom,
    ];

    /// Axis along which the view looks, used to order particles into slices
    pub fn depth_axis(&self) -> Axis {
        match self {
            View::Front | View::Back => Axis::Y,
            View::Left | View::Right => Axis::X,
            View::Top | View::Bottom => Axis::Z,
        }
    }
    pub fn sort_order(&self) -> SortOrder {
        match self {
            View::Front | View::Top | View::Left => SortOrder::Ascending,
            View::Back | View::Bottom | View::Right => SortOrder::Descending,
        }
    }
    /// World axis shown along pixel X, and whether it runs against pixel X
    pub fn horizontal(&self) -> (Axis, bool) {
        match self {
            View::Front => (Axis::X, false),
            View::Back => (Axis::X, true),
            View::Left => (Axis::Y, true),
            View::Right => (Axis::Y, false),
            View::Top | View::Bottom => (Axis::X, false),
        }
    }
    /// World axis shown along pixel Y, and whether it runs along pixel Y (downwards)
    pub fn vertical(&self) -> (Axis, bool) {
        match self {
            View::Front | View::Back | View::Left | View::Right => (Axis::Z, false),
            View::Top => (Axis::Y, false),
            View::Bottom => (Axis::Y, true),
        }
    }
}
