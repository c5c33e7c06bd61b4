//! Geometry core for viewing DPD simulation boxes: box quantities, rotation about a pivot,
//! projection onto six canonical views, depth slicing, and random placement of points and
//! spheres in compartments.

pub mod box_;
pub mod config;
pub mod error;
pub mod overlap;
pub mod particle;
pub mod prelude;
pub mod projection;
pub mod region;
pub mod sampler;
pub mod slicer;
pub mod transform;
pub mod utils;

pub use box_::SimulationBox;
pub use config::{BoxShape, Config, EndpointCheck};
pub use error::{Error, Result};
pub use particle::{ParticlePosition, Position};
pub use projection::{View, ViewProjector};
pub use region::{Body, Layer, Region, Sphere};
pub use sampler::{PackingFallback, SpatialSampler, SurfaceBand};
pub use slicer::{Slice, Slicer};
pub use transform::Rotation;
