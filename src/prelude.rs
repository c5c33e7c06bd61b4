pub use super::box_::SimulationBox;
pub use super::config::{BoxShape, Config, EndpointCheck};
pub use super::particle::{ParticlePosition, Position};
pub use super::projection::{View, ViewProjector};
pub use super::region::{Body, Layer, Region, Sphere};
pub use super::sampler::{PackingFallback, SpatialSampler, SurfaceBand};
pub use super::slicer::Slicer;
pub use super::transform::Rotation;
pub use super::utils::{Axis, Face};
