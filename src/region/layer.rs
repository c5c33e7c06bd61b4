use rand::Rng;
use rand_distr::{Distribution, Uniform};

use super::Region;
use crate::{
    error::{check_finite, check_positive, Result},
    utils::Axis,
    SimulationBox,
};

/// Axis-aligned cuboid given by its center and half-extents
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layer {
    center: [f64; 3],
    half_extents: [f64; 3],
}
impl Layer {
    pub fn new(center: [f64; 3], half_extents: [f64; 3]) -> Result<Self> {
        for &c in &center {
            check_finite("Layer center coordinate", c)?;
        }
        for &h in &half_extents {
            check_positive("Layer half-extent", h)?;
        }
        Ok(Self {
            center,
            half_extents,
        })
    }
    pub fn from_box(box_: &SimulationBox) -> Self {
        Self {
            center: box_.midpoint(),
            half_extents: box_.half_lengths(),
        }
    }
    pub fn half_extents(&self) -> &[f64; 3] {
        &self.half_extents
    }
    pub fn half_extent(&self, axis: Axis) -> f64 {
        self.half_extents[axis.index()]
    }
    pub fn lx(&self) -> f64 {
        2.0 * self.half_extents[0]
    }
    pub fn ly(&self) -> f64 {
        2.0 * self.half_extents[1]
    }
    pub fn lz(&self) -> f64 {
        2.0 * self.half_extents[2]
    }
    pub fn lo(&self) -> [f64; 3] {
        [
            self.center[0] - self.half_extents[0],
            self.center[1] - self.half_extents[1],
            self.center[2] - self.half_extents[2],
        ]
    }
    pub fn hi(&self) -> [f64; 3] {
        [
            self.center[0] + self.half_extents[0],
            self.center[1] + self.half_extents[1],
            self.center[2] + self.half_extents[2],
        ]
    }
    /// Area of one face perpendicular to `axis`
    pub fn face_area(&self, axis: Axis) -> f64 {
        let [a, b] = axis.others();
        4.0 * self.half_extent(a) * self.half_extent(b)
    }
}
impl Region for Layer {
    fn center(&self) -> &[f64; 3] {
        &self.center
    }
    fn contains(&self, coord: &[f64; 3]) -> bool {
        (0..3).all(|i| (coord[i] - self.center[i]).abs() <= self.half_extents[i])
    }
    fn min_half_extent(&self) -> f64 {
        self.half_extents[0]
            .min(self.half_extents[1])
            .min(self.half_extents[2])
    }
    fn shrunk(&self, margin: f64) -> Self {
        Self {
            center: self.center,
            half_extents: self.half_extents.map(|h| (h - margin).max(0.0)),
        }
    }
    /// Each coordinate is an independent uniform scaled into `[-half, half)`; no rejection
    /// is needed, so `shrink_epsilon` is not used.
    fn random_coord<R: Rng + ?Sized>(&self, rng: &mut R, _shrink_epsilon: f64) -> [f64; 3] {
        let unit = Uniform::new(-1.0, 1.0);
        [
            self.center[0] + self.half_extents[0] * unit.sample(rng),
            self.center[1] + self.half_extents[1] * unit.sample(rng),
            self.center[2] + self.half_extents[2] * unit.sample(rng),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn corners_and_lengths() {
        let layer = Layer::new([1.0, 2.0, 3.0], [0.5, 1.0, 2.0]).unwrap();
        assert_eq!(layer.lo(), [0.5, 1.0, 1.0]);
        assert_eq!(layer.hi(), [1.5, 3.0, 5.0]);
        assert_eq!([layer.lx(), layer.ly(), layer.lz()], [1.0, 2.0, 4.0]);
        assert_eq!(layer.face_area(Axis::Z), 2.0);
        assert_eq!(layer.min_half_extent(), 0.5);
        assert!(Layer::new([0.0; 3], [1.0, 0.0, 1.0]).is_err());
    }

    #[test]
    fn from_box_matches_bounds() {
        let box_ = SimulationBox::new(0.0, 10.0, -2.0, 2.0, 5.0, 6.0).unwrap();
        let layer = Layer::from_box(&box_);
        assert_eq!(layer.lo(), box_.lo());
        assert_eq!(layer.hi(), box_.hi());
    }

    #[test]
    fn random_coords_stay_inside() {
        let mut rng = StdRng::seed_from_u64(3);
        let layer = Layer::new([0.0, 0.0, 10.0], [1.0, 2.0, 3.0]).unwrap();
        for _ in 0..10_000 {
            assert!(layer.contains(&layer.random_coord(&mut rng, 0.0)));
        }
    }

    #[test]
    fn over_shrunk_layer_collapses_onto_center_plane() {
        let mut rng = StdRng::seed_from_u64(4);
        let layer = Layer::new([1.0, 2.0, 3.0], [4.0, 0.5, 2.0]).unwrap().shrunk(1.0);
        assert_eq!(layer.half_extents(), &[3.0, 0.0, 1.0]);
        assert!(Layer::new(*layer.center(), *layer.half_extents()).is_err());
        for _ in 0..100 {
            let p = layer.random_coord(&mut rng, 0.0);
            assert_eq!(p[1], 2.0);
            assert!(layer.contains(&p));
        }
    }
}
