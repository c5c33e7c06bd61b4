pub mod layer;
pub mod sphere;
pub use layer::Layer;
pub use sphere::Sphere;

use rand::Rng;

/// Volume into which points and bodies can be seeded
pub trait Region {
    fn center(&self) -> &[f64; 3];
    fn contains(&self, coord: &[f64; 3]) -> bool;
    /// Half of the smallest extent of the region
    fn min_half_extent(&self) -> f64;
    /// The region pulled inward by `margin` on every side, used for placing bodies so that
    /// they stay inside. `margin` is clamped to [`Region::min_half_extent`].
    ///
    /// The result is a sampling volume only: it may have a zero radius or zero half
    /// extents, which [`Sphere::new`] and [`Layer::new`] reject. Sampling such a region
    /// pins the degenerate coordinates to the center.
    fn shrunk(&self, margin: f64) -> Self
    where
        Self: Sized;
    /// A uniformly distributed coordinate inside the region
    fn random_coord<R: Rng + ?Sized>(&self, rng: &mut R, shrink_epsilon: f64) -> [f64; 3];
}

/// Exclusion body: a sphere or an axis-aligned layer
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Body {
    Sphere(Sphere),
    Layer(Layer),
}
impl Body {
    pub fn center(&self) -> &[f64; 3] {
        match self {
            Body::Sphere(s) => s.center(),
            Body::Layer(l) => l.center(),
        }
    }
    pub fn contains(&self, coord: &[f64; 3]) -> bool {
        match self {
            Body::Sphere(s) => s.contains(coord),
            Body::Layer(l) => l.contains(coord),
        }
    }
}
impl From<Sphere> for Body {
    fn from(value: Sphere) -> Self {
        Body::Sphere(value)
    }
}
impl From<Layer> for Body {
    fn from(value: Layer) -> Self {
        Body::Layer(value)
    }
}
