use log::warn;
use rand::Rng;

use super::{check_buffers, check_trials, SpatialSampler};
use crate::{
    config::EndpointCheck,
    error::{check_count, check_positive, Result},
    overlap::is_in_any_sphere,
    region::{Region, Sphere},
    utils,
};

impl<R: Rng> SpatialSampler<R> {
    /// Points inside `region` that avoid the exclusion spheres.
    ///
    /// Each point is resampled while it lies inside an exclusion sphere, at most
    /// `max_trials` times. When the budget runs out the last candidate is kept anyway, so
    /// the requested number of points is always returned.
    pub fn points_in_region_excluding<C, P, F>(
        &mut self,
        region: &C,
        number_of_points: usize,
        exclusions: &[Sphere],
        max_trials: usize,
        mut factory: F,
    ) -> Result<Vec<P>>
    where
        C: Region,
        F: FnMut([f64; 3]) -> P,
    {
        check_count("Number of points", number_of_points, 1)?;
        check_trials(max_trials)?;

        let mut exhausted = 0;
        let mut points = Vec::with_capacity(number_of_points);
        for _ in 0..number_of_points {
            let mut candidate = self.point_in(region);
            let mut trials = 0;
            while trials < max_trials && is_in_any_sphere(&candidate, exclusions) {
                candidate = self.point_in(region);
                trials += 1;
            }
            if is_in_any_sphere(&candidate, exclusions) {
                exhausted += 1;
            }
            points.push(factory(candidate));
        }
        if exhausted > 0 {
            warn!(
                "{} of {} points placed inside exclusion spheres after {} trials each",
                exhausted, number_of_points, max_trials
            );
        }
        Ok(points)
    }

    /// Fill two buffers with endpoint pairs sampled in `region`.
    ///
    /// A pair is resampled while an endpoint lies inside an exclusion sphere (which
    /// endpoint the second loop tests is chosen by [`Config::endpoint_check`]), or while
    /// any point strictly between the endpoints, taken every `step` along the segment,
    /// does. At most [`MAX_SEGMENT_SAMPLES`] points are tested per segment; for smaller
    /// steps the spacing grows to fit. All resampling of one pair shares a budget of
    /// `max_trials`; on exhaustion the last pair is kept.
    ///
    /// [`Config::endpoint_check`]: crate::Config::endpoint_check
    pub fn fill_point_pairs_excluding<C, P, F>(
        &mut self,
        region: &C,
        first: &mut [P],
        second: &mut [P],
        exclusions: &[Sphere],
        step: f64,
        max_trials: usize,
        mut factory: F,
    ) -> Result<()>
    where
        C: Region,
        F: FnMut([f64; 3]) -> P,
    {
        check_buffers(first.len(), second.len())?;
        check_count("Number of point pairs", first.len(), 1)?;
        check_positive("Step distance", step)?;
        check_trials(max_trials)?;

        let check = self.endpoint_check;
        let mut exhausted = 0;
        for (slot1, slot2) in first.iter_mut().zip(second.iter_mut()) {
            let mut trials = 0;
            let (p1, p2) = loop {
                let mut p1 = self.point_in(region);
                while trials < max_trials && is_in_any_sphere(&p1, exclusions) {
                    p1 = self.point_in(region);
                    trials += 1;
                }
                let mut p2 = self.point_in(region);
                loop {
                    let tested = match check {
                        EndpointCheck::FirstPoint => &p1,
                        EndpointCheck::OwnPoint => &p2,
                    };
                    if trials >= max_trials || !is_in_any_sphere(tested, exclusions) {
                        break;
                    }
                    p2 = self.point_in(region);
                    trials += 1;
                }
                if trials < max_trials && is_segment_excluded(&p1, &p2, step, exclusions) {
                    trials += 1;
                    continue;
                }
                break (p1, p2);
            };
            if trials >= max_trials {
                exhausted += 1;
            }
            *slot1 = factory(p1);
            *slot2 = factory(p2);
        }
        if exhausted > 0 {
            warn!(
                "{} of {} point pairs used the full budget of {} trials",
                exhausted,
                first.len(),
                max_trials
            );
        }
        Ok(())
    }
}

/// Upper bound on the points tested along one segment
pub const MAX_SEGMENT_SAMPLES: usize = 10_000;

/// Whether a point strictly between `from` and `to`, sampled every `step`, lies inside an
/// exclusion sphere
fn is_segment_excluded(from: &[f64; 3], to: &[f64; 3], step: f64, exclusions: &[Sphere]) -> bool {
    if exclusions.is_empty() {
        return false;
    }
    let length = utils::distance(from, to);
    let intervals = (length / step).ceil();
    let (count, spacing) = if intervals > MAX_SEGMENT_SAMPLES as f64 {
        (MAX_SEGMENT_SAMPLES, length / MAX_SEGMENT_SAMPLES as f64)
    } else {
        (intervals as usize, step)
    };
    (1..count).any(|k| {
        let t = k as f64 * spacing / length;
        is_in_any_sphere(&utils::lerp(from, to, t), exclusions)
    })
}
