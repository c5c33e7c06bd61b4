/// Anything with a 3D coordinate that the geometry routines may read or move
pub trait Position {
    fn coord(&self) -> &[f64; 3];
    fn coord_mut(&mut self) -> &mut [f64; 3];
}
impl Position for [f64; 3] {
    fn coord(&self) -> &[f64; 3] {
        self
    }
    fn coord_mut(&mut self) -> &mut [f64; 3] {
        self
    }
}

/// Particle coordinate together with an opaque descriptor.
///
/// The descriptor is never inspected here; it only travels with the coordinate
/// through sorting, rotation and sampling.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticlePosition<D> {
    coord: [f64; 3],
    descriptor: D,
    in_frame: bool,
}
impl<D> ParticlePosition<D> {
    pub fn new(coord: [f64; 3], descriptor: D) -> Self {
        Self {
            coord,
            descriptor,
            in_frame: true,
        }
    }
    pub fn descriptor(&self) -> &D {
        &self.descriptor
    }
    pub fn is_in_frame(&self) -> bool {
        self.in_frame
    }
    pub fn set_in_frame(&mut self, in_frame: bool) {
        self.in_frame = in_frame;
    }
    pub fn into_parts(self) -> ([f64; 3], D) {
        (self.coord, self.descriptor)
    }
}
impl<D> Position for ParticlePosition<D> {
    fn coord(&self) -> &[f64; 3] {
        &self.coord
    }
    fn coord_mut(&mut self) -> &mut [f64; 3] {
        &mut self.coord
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_moves_with_descriptor() {
        let mut p = ParticlePosition::new([1.0, 2.0, 3.0], "H2O");
        p.coord_mut()[2] = -3.0;
        assert!(p.is_in_frame());
        assert_eq!(p.into_parts(), ([1.0, 2.0, -3.0], "H2O"));
    }
}
