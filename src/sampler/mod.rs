//! Random placement of points and spheres in compartment volumes.
//!
//! All randomness comes from the generator handed to [`SpatialSampler::new`]; seeding it is
//! up to the caller. Batch operations build their outputs through a caller supplied
//! factory, so the same routine fills plain coordinate arrays and particle arrays alike.

mod exclusion;
mod packing;

pub use exclusion::MAX_SEGMENT_SAMPLES;
pub use packing::PackingFallback;

use rand::Rng;

use crate::{
    error::{check_count, Error, Result},
    region::{Layer, Region, Sphere},
    utils::{Axis, Face},
    Config, EndpointCheck,
};

/// Part of a sphere surface accepted by [`SpatialSampler::point_on_sphere_surface`]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SurfaceBand {
    #[default]
    Full,
    /// The polar caps, `|dz| >= r/2`
    Upper,
    /// The equatorial band, `|dz| <= r/2`
    Middle,
}
impl SurfaceBand {
    fn accepts(&self, dz: f64, radius: f64) -> bool {
        match self {
            SurfaceBand::Full => true,
            SurfaceBand::Upper => dz.abs() >= 0.5 * radius,
            SurfaceBand::Middle => dz.abs() <= 0.5 * radius,
        }
    }
}

pub struct SpatialSampler<R> {
    rng: R,
    shrink_epsilon: f64,
    endpoint_check: EndpointCheck,
}
impl<R: Rng> SpatialSampler<R> {
    pub fn new(rng: R, config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            rng,
            shrink_epsilon: config.shrink_epsilon,
            endpoint_check: config.endpoint_check,
        })
    }
    pub fn shrink_epsilon(&self) -> f64 {
        self.shrink_epsilon
    }
    /// Endpoint test used by [`SpatialSampler::fill_point_pairs_excluding`]
    pub fn endpoint_check(&self) -> EndpointCheck {
        self.endpoint_check
    }
    pub fn rng(&mut self) -> &mut R {
        &mut self.rng
    }
    pub fn into_rng(self) -> R {
        self.rng
    }

    // Single points

    /// Uniform in `[0, 1)`
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
    /// Uniform in `[-half, half)`
    fn next_symmetric(&mut self, half: f64) -> f64 {
        (2.0 * self.next_f64() - 1.0) * half
    }

    pub fn point_in<C: Region>(&mut self, region: &C) -> [f64; 3] {
        region.random_coord(&mut self.rng, self.shrink_epsilon)
    }
    /// Rejection sampling inside the sphere, slightly shrunk by the shrink epsilon
    pub fn point_in_sphere(&mut self, sphere: &Sphere) -> [f64; 3] {
        self.point_in(sphere)
    }
    pub fn point_in_layer(&mut self, layer: &Layer) -> [f64; 3] {
        self.point_in(layer)
    }
    /// Area-uniform point on the sphere surface.
    ///
    /// `phi = acos(2u - 1)` makes `cos(phi)`, and so the z offset, uniform in `[-r, r]`.
    pub fn point_on_sphere_surface(&mut self, sphere: &Sphere, band: SurfaceBand) -> [f64; 3] {
        let r = sphere.radius();
        let c = sphere.center();
        loop {
            let phi = (2.0 * self.next_f64() - 1.0).acos();
            let theta = 2.0 * std::f64::consts::PI * self.next_f64();
            let dz = r * phi.cos();
            if band.accepts(dz, r) {
                return [
                    c[0] + r * phi.sin() * theta.cos(),
                    c[1] + r * phi.sin() * theta.sin(),
                    c[2] + dz,
                ];
            }
        }
    }
    /// Uniform point on one face of the layer
    pub fn point_on_layer_face(&mut self, layer: &Layer, face: Face) -> [f64; 3] {
        let axis = face.axis();
        let mut coord = *layer.center();
        coord[axis.index()] += face.sign() * layer.half_extent(axis);
        for other in axis.others() {
            coord[other.index()] += self.next_symmetric(layer.half_extent(other));
        }
        coord
    }
    /// Uniform point on one of the two faces perpendicular to `axis`, each chosen with equal
    /// probability
    pub fn point_on_layer_face_pair(&mut self, layer: &Layer, axis: Axis) -> [f64; 3] {
        let hi = self.next_f64() >= 0.5;
        self.point_on_layer_face(layer, axis.face(hi))
    }

    // Batches

    pub fn points_in_sphere<P, F>(
        &mut self,
        sphere: &Sphere,
        number_of_points: usize,
        factory: F,
    ) -> Result<Vec<P>>
    where
        F: FnMut([f64; 3]) -> P,
    {
        self.points_with(number_of_points, factory, |s| s.point_in_sphere(sphere))
    }
    pub fn points_in_layer<P, F>(
        &mut self,
        layer: &Layer,
        number_of_points: usize,
        factory: F,
    ) -> Result<Vec<P>>
    where
        F: FnMut([f64; 3]) -> P,
    {
        self.points_with(number_of_points, factory, |s| s.point_in_layer(layer))
    }
    pub fn points_on_sphere_surface<P, F>(
        &mut self,
        sphere: &Sphere,
        band: SurfaceBand,
        number_of_points: usize,
        factory: F,
    ) -> Result<Vec<P>>
    where
        F: FnMut([f64; 3]) -> P,
    {
        self.points_with(number_of_points, factory, |s| {
            s.point_on_sphere_surface(sphere, band)
        })
    }
    pub fn points_on_layer_face<P, F>(
        &mut self,
        layer: &Layer,
        face: Face,
        number_of_points: usize,
        factory: F,
    ) -> Result<Vec<P>>
    where
        F: FnMut([f64; 3]) -> P,
    {
        self.points_with(number_of_points, factory, |s| {
            s.point_on_layer_face(layer, face)
        })
    }
    pub fn points_on_layer_face_pair<P, F>(
        &mut self,
        layer: &Layer,
        axis: Axis,
        number_of_points: usize,
        factory: F,
    ) -> Result<Vec<P>>
    where
        F: FnMut([f64; 3]) -> P,
    {
        self.points_with(number_of_points, factory, |s| {
            s.point_on_layer_face_pair(layer, axis)
        })
    }
    /// Points on all six faces.
    ///
    /// The count is split across the three face pairs in proportion to their areas (rounded
    /// down for the X and Y pairs, the remainder going to the Z pair). Points are returned
    /// pair by pair in X, Y, Z order.
    pub fn points_on_layer_surface<P, F>(
        &mut self,
        layer: &Layer,
        number_of_points: usize,
        mut factory: F,
    ) -> Result<Vec<P>>
    where
        F: FnMut([f64; 3]) -> P,
    {
        check_count("Number of points", number_of_points, 1)?;
        let counts = surface_split(layer, number_of_points);
        let mut points = Vec::with_capacity(number_of_points);
        for (axis, count) in Axis::ALL.into_iter().zip(counts) {
            for _ in 0..count {
                points.push(factory(self.point_on_layer_face_pair(layer, axis)));
            }
        }
        Ok(points)
    }

    fn points_with<P, F, G>(
        &mut self,
        number_of_points: usize,
        mut factory: F,
        mut generate: G,
    ) -> Result<Vec<P>>
    where
        F: FnMut([f64; 3]) -> P,
        G: FnMut(&mut Self) -> [f64; 3],
    {
        check_count("Number of points", number_of_points, 1)?;
        let mut points = Vec::with_capacity(number_of_points);
        for _ in 0..number_of_points {
            let coord = generate(self);
            points.push(factory(coord));
        }
        Ok(points)
    }
}

/// Number of points per face pair (X, Y, Z), proportional to the pair areas
fn surface_split(layer: &Layer, number_of_points: usize) -> [usize; 3] {
    let areas = Axis::ALL.map(|axis| layer.face_area(axis));
    let total: f64 = areas.iter().sum();
    let nx = (number_of_points as f64 * areas[0] / total).floor() as usize;
    let ny = (number_of_points as f64 * areas[1] / total).floor() as usize;
    // floor keeps nx + ny <= number_of_points
    [nx, ny, number_of_points - nx - ny]
}

pub(crate) fn check_trials(max_trials: usize) -> Result<usize> {
    check_count("Maximum number of trials", max_trials, 1)
}

pub(crate) fn check_buffers(first: usize, second: usize) -> Result<()> {
    if first == second {
        Ok(())
    } else {
        Err(Error::MismatchedBuffers { first, second })
    }
}
