use rand::Rng;

use super::Region;
use crate::{
    error::{check_finite, check_positive, Result},
    utils,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    center: [f64; 3],
    radius: f64,
}
impl Sphere {
    pub fn new(center: [f64; 3], radius: f64) -> Result<Self> {
        for &c in &center {
            check_finite("Sphere center coordinate", c)?;
        }
        check_positive("Sphere radius", radius)?;
        Ok(Self { center, radius })
    }
    /// Zero radius is allowed here; it comes up when a container is shrunk by the full
    /// radius of the body placed in it.
    pub(crate) fn new_unchecked(center: [f64; 3], radius: f64) -> Self {
        Self { center, radius }
    }
    pub fn radius(&self) -> f64 {
        self.radius
    }
    pub fn volume(&self) -> f64 {
        4.0 / 3.0 * std::f64::consts::PI * self.radius.powi(3)
    }
}
impl Region for Sphere {
    fn center(&self) -> &[f64; 3] {
        &self.center
    }
    fn contains(&self, coord: &[f64; 3]) -> bool {
        utils::distance_squared(&self.center, coord) <= self.radius * self.radius
    }
    fn min_half_extent(&self) -> f64 {
        self.radius
    }
    fn shrunk(&self, margin: f64) -> Self {
        Self::new_unchecked(self.center, (self.radius - margin).max(0.0))
    }
    /// Rejection sampling in the bounding cube of the radius reduced by `shrink_epsilon`
    fn random_coord<R: Rng + ?Sized>(&self, rng: &mut R, shrink_epsilon: f64) -> [f64; 3] {
        let r = self.radius * (1.0 - shrink_epsilon);
        let r_sq = r * r;
        loop {
            let dx = (2.0 * rng.gen::<f64>() - 1.0) * r;
            let dy = (2.0 * rng.gen::<f64>() - 1.0) * r;
            let dz = (2.0 * rng.gen::<f64>() - 1.0) * r;
            if dx * dx + dy * dy + dz * dz <= r_sq {
                return [
                    self.center[0] + dx,
                    self.center[1] + dy,
                    self.center[2] + dz,
                ];
            }
        }
    }
}
