/// Coordinate axis
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Axis {
    X,
    Y,
    Z,
}
impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(&self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
    /// The face of an axis-aligned box lying on the lower (`hi == false`) or upper side
    pub fn face(&self, hi: bool) -> Face {
        match (self, hi) {
            (Axis::X, false) => Face::Xlo,
            (Axis::X, true) => Face::Xhi,
            (Axis::Y, false) => Face::Ylo,
            (Axis::Y, true) => Face::Yhi,
            (Axis::Z, false) => Face::Zlo,
            (Axis::Z, true) => Face::Zhi,
        }
    }
    /// The two axes spanning the plane perpendicular to this one, in cyclic order
    pub fn others(&self) -> [Axis; 2] {
        match self {
            Axis::X => [Axis::Y, Axis::Z],
            Axis::Y => [Axis::Z, Axis::X],
            Axis::Z => [Axis::X, Axis::Y],
        }
    }
}

/// One of the six faces of an axis-aligned box
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Face {
    Xlo,
    Xhi,
    Ylo,
    Yhi,
    Zlo,
    Zhi,
}
impl Face {
    pub const ALL: [Face; 6] = [
        Face::Xlo,
        Face::Xhi,
        Face::Ylo,
        Face::Yhi,
        Face::Zlo,
        Face::Zhi,
    ];

    pub fn opposite(&self) -> Self {
        match self {
            Face::Xlo => Face::Xhi,
            Face::Xhi => Face::Xlo,
            Face::Ylo => Face::Yhi,
            Face::Yhi => Face::Ylo,
            Face::Zlo => Face::Zhi,
            Face::Zhi => Face::Zlo,
        }
    }
    pub fn axis(&self) -> Axis {
        match self {
            Face::Xlo | Face::Xhi => Axis::X,
            Face::Ylo | Face::Yhi => Axis::Y,
            Face::Zlo | Face::Zhi => Axis::Z,
        }
    }
    pub fn is_lo(&self) -> bool {
        matches!(self, Face::Xlo | Face::Ylo | Face::Zlo)
    }
    /// -1 for lower faces, +1 for upper faces
    pub fn sign(&self) -> f64 {
        if self.is_lo() {
            -1.0
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faces_and_axes_agree() {
        for face in Face::ALL {
            assert_eq!(face.axis().face(!face.is_lo()), face);
            assert_eq!(face.opposite().axis(), face.axis());
            assert_ne!(face.opposite().is_lo(), face.is_lo());
        }
    }

    #[test]
    fn others_excludes_self() {
        for axis in Axis::ALL {
            assert!(!axis.others().contains(&axis));
        }
    }
}
