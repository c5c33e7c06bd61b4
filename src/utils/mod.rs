/// Group of useful computations
pub mod computations;
mod direction;
/// Sorting along coordinate axes
pub mod sort;

pub use computations::*;
pub use direction::{Axis, Face};
pub use sort::*;
