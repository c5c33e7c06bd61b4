//! Rigid rotation of point sets and periodic-boundary wrapping.
//!
//! Functions ending in `_in_place` mutate the positions they are given; their
//! counterparts without the suffix leave the input untouched and return new values.

use crate::{
    error::{check_finite, Result},
    particle::Position,
    utils::{self, Axis},
    SimulationBox,
};

/// Rotation angles in degrees, applied about X (`alpha`), then Y (`gamma`), then Z (`beta`)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub alpha: f64,
    pub gamma: f64,
    pub beta: f64,
}
impl Rotation {
    pub fn new(alpha: f64, gamma: f64, beta: f64) -> Self {
        Self { alpha, gamma, beta }
    }
    pub fn is_identity(&self) -> bool {
        self.alpha == 0.0 && self.gamma == 0.0 && self.beta == 0.0
    }
    /// Rotate a coordinate about the origin
    pub fn apply(&self, coord: &[f64; 3]) -> [f64; 3] {
        let trig = Trig::new(self);
        trig.apply(coord)
    }
}

/// Sines and cosines of a rotation, computed once per batch
struct Trig {
    sin_a: f64,
    cos_a: f64,
    sin_g: f64,
    cos_g: f64,
    sin_b: f64,
    cos_b: f64,
}
impl Trig {
    fn new(rotation: &Rotation) -> Self {
        let (sin_a, cos_a) = rotation.alpha.to_radians().sin_cos();
        let (sin_g, cos_g) = rotation.gamma.to_radians().sin_cos();
        let (sin_b, cos_b) = rotation.beta.to_radians().sin_cos();
        Self {
            sin_a,
            cos_a,
            sin_g,
            cos_g,
            sin_b,
            cos_b,
        }
    }
    fn apply(&self, coord: &[f64; 3]) -> [f64; 3] {
        let [x, y, z] = *coord;
        // about X
        let (y, z) = (y * self.cos_a - z * self.sin_a, y * self.sin_a + z * self.cos_a);
        // about Y
        let (x, z) = (x * self.cos_g + z * self.sin_g, z * self.cos_g - x * self.sin_g);
        // about Z
        let (x, y) = (x * self.cos_b - y * self.sin_b, x * self.sin_b + y * self.cos_b);
        [x, y, z]
    }
}

/// Rotate positions about the origin, then translate them so that `pivot` (if any) is
/// mapped onto itself. To rotate only the first `k` positions of a longer array, pass
/// `&mut positions[..k]`.
///
/// ```rust
/// use dpd_slice::transform::{rotate_in_place, Rotation};
///
/// let mut points = vec![[2.0, 1.0, 0.0]];
/// rotate_in_place(&mut points, &Rotation::new(0.0, 0.0, 90.0), Some(&[1.0, 1.0, 0.0]));
/// assert!((points[0][0] - 1.0).abs() < 1e-12);
/// assert!((points[0][1] - 2.0).abs() < 1e-12);
/// ```
pub fn rotate_in_place<P: Position>(
    positions: &mut [P],
    rotation: &Rotation,
    pivot: Option<&[f64; 3]>,
) {
    let trig = Trig::new(rotation);
    let translation = match pivot {
        Some(p) => utils::sub(p, &trig.apply(p)),
        None => [0.0, 0.0, 0.0],
    };
    for position in positions.iter_mut() {
        let rotated = trig.apply(position.coord());
        *position.coord_mut() = utils::add(&rotated, &translation);
    }
}

/// Rotated copies of `positions`; see [`rotate_in_place`]
pub fn rotated<P: Position + Clone>(
    positions: &[P],
    rotation: &Rotation,
    pivot: Option<&[f64; 3]>,
) -> Vec<P> {
    let mut output = positions.to_vec();
    rotate_in_place(&mut output, rotation, pivot);
    output
}

pub fn rotate_point_in_place<P: Position>(
    position: &mut P,
    rotation: &Rotation,
    pivot: Option<&[f64; 3]>,
) {
    rotate_in_place(std::slice::from_mut(position), rotation, pivot);
}

pub fn rotated_point(coord: &[f64; 3], rotation: &Rotation, pivot: Option<&[f64; 3]>) -> [f64; 3] {
    let mut output = *coord;
    rotate_point_in_place(&mut output, rotation, pivot);
    output
}

pub fn translate_in_place<P: Position>(positions: &mut [P], offset: &[f64; 3]) {
    for position in positions.iter_mut() {
        *position.coord_mut() = utils::add(position.coord(), offset);
    }
}

/// Wraps beyond which a coordinate is reduced with a single remainder instead of the loop
const MAX_PERIODIC_WRAPS: f64 = 1024.0;

/// Add `offset` to a position, then wrap every coordinate back into the box by repeatedly
/// adding or subtracting the box length.
///
/// A coordinate more than [`MAX_PERIODIC_WRAPS`] box lengths away is first reduced with
/// `rem_euclid`; far from the box a single subtraction no longer changes the value.
/// Fails for non-finite offsets or shifted coordinates, leaving the position untouched.
pub fn shift_with_periodic_boundaries_in_place<P: Position>(
    position: &mut P,
    offset: &[f64; 3],
    box_: &SimulationBox,
) -> Result<()> {
    for &o in offset {
        check_finite("Periodic shift offset", o)?;
    }
    let mut shifted = utils::add(position.coord(), offset);
    for axis in Axis::ALL {
        let i = axis.index();
        let bounds = box_.bounds(axis);
        let length = bounds.length();
        let mut value = check_finite("Shifted coordinate", shifted[i])?;
        if ((value - bounds.lo()) / length).abs() > MAX_PERIODIC_WRAPS {
            value = bounds.lo() + (value - bounds.lo()).rem_euclid(length);
        }
        while value < bounds.lo() {
            value += length;
        }
        while value > bounds.hi() {
            value -= length;
        }
        shifted[i] = value;
    }
    *position.coord_mut() = shifted;
    Ok(())
}

pub fn shifted_with_periodic_boundaries(
    coord: &[f64; 3],
    offset: &[f64; 3],
    box_: &SimulationBox,
) -> Result<[f64; 3]> {
    let mut output = *coord;
    shift_with_periodic_boundaries_in_place(&mut output, offset, box_)?;
    Ok(output)
}

pub fn shift_all_with_periodic_boundaries_in_place<P: Position>(
    positions: &mut [P],
    offset: &[f64; 3],
    box_: &SimulationBox,
) -> Result<()> {
    for position in positions.iter_mut() {
        shift_with_periodic_boundaries_in_place(position, offset, box_)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::ParticlePosition;
    use approx::assert_abs_diff_eq;

    fn assert_coord_eq(a: &[f64; 3], b: &[f64; 3]) {
        for i in 0..3 {
            assert_abs_diff_eq!(a[i], b[i], epsilon = 1e-9 * (1.0 + b[i].abs()));
        }
    }

    #[test]
    fn zero_rotation_is_identity() {
        let points = vec![[1.5, -2.0, 3.25], [0.0, 0.0, 0.0], [-1e6, 7.0, 1e-7]];
        let pivot = [10.0, -3.0, 0.5];
        assert_eq!(rotated(&points, &Rotation::default(), Some(&pivot)), points);
        assert_eq!(rotated(&points, &Rotation::default(), None), points);
    }

    #[test]
    fn pivot_maps_onto_itself() {
        let pivot = [3.0, -1.0, 7.5];
        for rotation in [
            Rotation::new(30.0, 0.0, 0.0),
            Rotation::new(12.0, 250.0, -73.0),
            Rotation::new(-180.0, 45.0, 90.0),
        ] {
            assert_coord_eq(&rotated_point(&pivot, &rotation, Some(&pivot)), &pivot);
        }
    }

    #[test]
    fn single_axis_rotations() {
        let p = [1.0, 1.0, 1.0];
        let about =
            |alpha, gamma, beta| rotated_point(&p, &Rotation::new(alpha, gamma, beta), None);
        assert_coord_eq(&about(90.0, 0.0, 0.0), &[1.0, -1.0, 1.0]);
        assert_coord_eq(&about(0.0, 90.0, 0.0), &[1.0, 1.0, -1.0]);
        assert_coord_eq(&about(0.0, 0.0, 90.0), &[-1.0, 1.0, 1.0]);
    }

    #[test]
    fn rotation_order_is_x_then_y_then_z() {
        let p = [0.0, 1.0, 0.0];
        let combined = rotated_point(&p, &Rotation::new(90.0, 90.0, 0.0), None);
        let stepwise = rotated_point(
            &rotated_point(&p, &Rotation::new(90.0, 0.0, 0.0), None),
            &Rotation::new(0.0, 90.0, 0.0),
            None,
        );
        assert_coord_eq(&combined, &stepwise);
        assert_coord_eq(&combined, &[1.0, 0.0, 0.0]);
        // the reverse order gives a different result
        let reversed = rotated_point(
            &rotated_point(&p, &Rotation::new(0.0, 90.0, 0.0), None),
            &Rotation::new(90.0, 0.0, 0.0),
            None,
        );
        assert_coord_eq(&reversed, &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn rotation_preserves_distances() {
        let points = vec![[1.0, 2.0, 3.0], [-4.0, 0.5, 2.0]];
        let out = rotated(&points, &Rotation::new(17.0, -41.0, 133.0), Some(&[5.0, 5.0, 5.0]));
        assert_abs_diff_eq!(
            utils::distance(&out[0], &out[1]),
            utils::distance(&points[0], &points[1]),
            epsilon = 1e-12
        );
    }

    #[test]
    fn rotating_prefix_leaves_rest_untouched() {
        let mut points = vec![[1.0, 0.0, 0.0]; 4];
        rotate_in_place(&mut points[..2], &Rotation::new(0.0, 0.0, 180.0), None);
        assert_coord_eq(&points[1], &[-1.0, 0.0, 0.0]);
        assert_eq!(points[2], [1.0, 0.0, 0.0]);
        assert_eq!(points[3], [1.0, 0.0, 0.0]);
    }

    #[test]
    fn particles_keep_descriptors() {
        let mut particles = vec![ParticlePosition::new([0.0, 2.0, 0.0], 'A')];
        rotate_in_place(&mut particles, &Rotation::new(0.0, 0.0, -90.0), None);
        assert_eq!(*particles[0].descriptor(), 'A');
        assert_coord_eq(particles[0].coord(), &[2.0, 0.0, 0.0]);
    }

    #[test]
    fn periodic_shift_wraps_large_offsets() {
        let box_ = SimulationBox::new(0.0, 10.0, -5.0, 5.0, 0.0, 1.0).unwrap();
        let shifted =
            shifted_with_periodic_boundaries(&[1.0, 0.0, 0.5], &[25.0, -12.0, 3.25], &box_)
                .unwrap();
        assert_coord_eq(&shifted, &[6.0, -2.0, 0.75]);
        for i in 0..3 {
            assert!(box_.bounds(Axis::ALL[i]).contains(shifted[i]));
        }
        // values on the boundary stay where they are
        let edge = shifted_with_periodic_boundaries(&[10.0, 5.0, 0.0], &[0.0; 3], &box_).unwrap();
        assert_eq!(edge, [10.0, 5.0, 0.0]);
    }

    #[test]
    fn periodic_shift_rejects_infinite_offset() {
        let box_ = SimulationBox::new(0.0, 1.0, 0.0, 1.0, 0.0, 1.0).unwrap();
        let mut p = [0.5, 0.5, 0.5];
        let offset = [f64::INFINITY, 0.0, 0.0];
        assert!(shift_with_periodic_boundaries_in_place(&mut p, &offset, &box_).is_err());
        assert_eq!(p, [0.5, 0.5, 0.5]);
    }

    #[test]
    fn periodic_shift_far_outside_the_box() {
        let box_ = SimulationBox::new(0.0, 1.0, 0.0, 1.0, 0.0, 1.0).unwrap();
        let shifted =
            shifted_with_periodic_boundaries(&[0.5; 3], &[1e17, 0.0, 0.0], &box_).unwrap();
        assert!(box_.x().contains(shifted[0]));
        assert_eq!(&shifted[1..], &[0.5, 0.5]);

        let shifted =
            shifted_with_periodic_boundaries(&[0.5; 3], &[-1e6, 0.0, 2e6], &box_).unwrap();
        assert_eq!(shifted, [0.5, 0.5, 0.5]);

        // the sum overflows
        let mut p = [f64::MAX, 0.5, 0.5];
        let offset = [f64::MAX, 0.0, 0.0];
        assert!(shift_with_periodic_boundaries_in_place(&mut p, &offset, &box_).is_err());
        assert_eq!(p, [f64::MAX, 0.5, 0.5]);
    }

    #[test]
    fn shift_all_and_translate() {
        let box_ = SimulationBox::new(0.0, 2.0, 0.0, 2.0, 0.0, 2.0).unwrap();
        let mut points = vec![[0.5, 0.5, 0.5], [1.5, 1.5, 1.5]];
        shift_all_with_periodic_boundaries_in_place(&mut points, &[1.0, 1.0, 1.0], &box_).unwrap();
        assert_eq!(points, vec![[1.5, 1.5, 1.5], [0.5, 0.5, 0.5]]);
        translate_in_place(&mut points, &[-0.5, 0.0, 0.5]);
        assert_eq!(points, vec![[1.0, 1.5, 2.0], [0.0, 0.5, 1.0]]);
    }
}
