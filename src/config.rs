use crate::error::{check_count, check_positive, Error, Result};

/// Volume used when testing whether a point lies in the simulation box
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum BoxShape {
    #[default]
    Cuboid,
    Ellipsoid,
}

/// Which candidate the second endpoint's exclusion loop tests in two-endpoint sampling.
///
/// `FirstPoint` retests the already accepted first endpoint, so the second endpoint is only
/// constrained by the segment check. `OwnPoint` tests the second endpoint itself.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum EndpointCheck {
    #[default]
    FirstPoint,
    OwnPoint,
}

/// Settings shared by projection, slicing and sampling
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Number of depth slices per view
    pub number_of_slices: usize,
    /// Points per box edge in wireframe rendering, corners included
    pub frame_point_count: usize,
    pub pixel_shift_x: i32,
    pub pixel_shift_y: i32,
    pub box_shape: BoxShape,
    /// Relative tolerance for numeric equality
    pub tolerance_factor: f64,
    /// Fraction by which sampling volumes are shrunk to keep points strictly inside
    pub shrink_epsilon: f64,
    pub endpoint_check: EndpointCheck,
}
impl Config {
    pub fn new() -> Self {
        Self {
            number_of_slices: 10,
            frame_point_count: 20,
            pixel_shift_x: 0,
            pixel_shift_y: 0,
            box_shape: BoxShape::Cuboid,
            tolerance_factor: 1e-10,
            shrink_epsilon: 1e-6,
            endpoint_check: EndpointCheck::FirstPoint,
        }
    }
    pub fn validate(&self) -> Result<()> {
        check_count("Number of slices", self.number_of_slices, 1)?;
        check_count("Frame point count", self.frame_point_count, 2)?;
        check_positive("Tolerance factor", self.tolerance_factor)?;
        if !(0.0..1.0).contains(&self.shrink_epsilon) {
            return Err(Error::OutOfRange {
                name: "Shrink epsilon",
                value: self.shrink_epsilon,
                lo: 0.0,
                hi: 1.0,
            });
        }
        Ok(())
    }
}
impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_invalid_values() {
        let mut config = Config::new();
        config.number_of_slices = 0;
        assert!(matches!(
            config.validate(),
            Err(Error::CountTooSmall { value: 0, .. })
        ));

        let mut config = Config::new();
        config.shrink_epsilon = 1.0;
        assert!(matches!(config.validate(), Err(Error::OutOfRange { .. })));

        let mut config = Config::new();
        config.tolerance_factor = 0.0;
        assert!(matches!(config.validate(), Err(Error::NonPositive { .. })));
    }
}
