use log::{debug, warn};
use rand::Rng;

use super::{check_trials, SpatialSampler};
use crate::{
    error::{check_count, check_positive, Result},
    overlap::{is_sphere_sphere_overlap, overlaps_any},
    region::{Body, Layer, Region, Sphere},
    SimulationBox,
};

/// How spheres are placed once the trial budget of [`SpatialSampler::pack_spheres`] is
/// used up
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PackingFallback {
    /// Remaining spheres go to random positions, ignoring overlaps
    #[default]
    RandomPosition,
    /// Remaining spheres reuse the centers of successfully placed spheres in round-robin
    /// order. Falls back to random positions if no sphere could be placed.
    ReuseCenters,
}

impl<R: Rng> SpatialSampler<R> {
    /// Place `count` spheres of `radius` inside `container` without mutual overlap and
    /// without overlapping the exclusion bodies.
    ///
    /// The radius is reduced to half the smallest container extent if necessary. Every
    /// rejected candidate counts against `max_trials`; afterwards the remaining spheres
    /// are placed according to `fallback`, so exactly `count` spheres are returned.
    pub fn pack_spheres<C: Region>(
        &mut self,
        container: &C,
        count: usize,
        radius: f64,
        max_trials: usize,
        exclusions: &[Body],
        fallback: PackingFallback,
    ) -> Result<Vec<Sphere>> {
        check_count("Number of spheres", count, 1)?;
        check_positive("Sphere radius", radius)?;
        check_trials(max_trials)?;

        let max_radius = container.min_half_extent();
        let radius = if radius > max_radius {
            debug!(
                "Sphere radius {} reduced to {} to fit the container",
                radius, max_radius
            );
            max_radius
        } else {
            radius
        };
        // Centers sampled here keep the whole sphere inside the container
        let center_region = container.shrunk(radius);

        let mut spheres: Vec<Sphere> = Vec::with_capacity(count);
        let mut failed_trials = 0;
        while spheres.len() < count && failed_trials < max_trials {
            let candidate = Sphere::new_unchecked(self.point_in(&center_region), radius);
            let overlaps_placed = spheres
                .iter()
                .any(|s| is_sphere_sphere_overlap(s, &candidate));
            if overlaps_placed || overlaps_any(&Body::Sphere(candidate), exclusions) {
                failed_trials += 1;
            } else {
                spheres.push(candidate);
            }
        }

        let placed = spheres.len();
        if placed < count {
            warn!(
                "Placed {} of {} spheres within {} trials, using {:?} for the rest",
                placed, count, max_trials, fallback
            );
            for k in 0..count - placed {
                let center = match fallback {
                    PackingFallback::ReuseCenters if placed > 0 => *spheres[k % placed].center(),
                    _ => self.point_in(&center_region),
                };
                spheres.push(Sphere::new_unchecked(center, radius));
            }
        }
        Ok(spheres)
    }

    /// Sphere packing inside a compartment spanning `box_`, reusing placed centers when
    /// the trial budget runs out
    pub fn pack_spheres_in_box(
        &mut self,
        box_: &SimulationBox,
        count: usize,
        radius: f64,
        max_trials: usize,
        exclusions: &[Body],
    ) -> Result<Vec<Sphere>> {
        self.pack_spheres(
            &Layer::from_box(box_),
            count,
            radius,
            max_trials,
            exclusions,
            PackingFallback::ReuseCenters,
        )
    }
}
