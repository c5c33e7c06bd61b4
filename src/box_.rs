use std::{fmt, str::FromStr};

use crate::{
    config::{BoxShape, Config},
    error::{check_count, check_finite, check_positive, Error, Result},
    utils::{self, Axis, Face},
};

/// Corner index pairs of the 12 box edges, matching the order of
/// [`SimulationBox::edge_points`]: bottom square, top square, verticals.
pub const BOX_EDGES: [[usize; 2]; 12] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 0],
    [4, 5],
    [5, 6],
    [6, 7],
    [7, 4],
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];

/// Separator used by the text form of the box bounds
const BOUNDS_SEPARATOR: &str = " ";

/// Upper and lower boundary along one axis
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    lo: f64,
    hi: f64,
}
impl Bounds {
    pub fn new(axis: Axis, lo: f64, hi: f64) -> Result<Self> {
        // NaN fails the comparison as well
        if !(lo.is_finite() && hi.is_finite() && lo < hi) {
            return Err(Error::InvalidBounds {
                axis,
                min: lo,
                max: hi,
            });
        }
        Ok(Self { lo, hi })
    }
    pub fn lo(&self) -> f64 {
        self.lo
    }
    pub fn hi(&self) -> f64 {
        self.hi
    }
    pub fn length(&self) -> f64 {
        self.hi - self.lo
    }
    pub fn mid(&self) -> f64 {
        0.5 * (self.lo + self.hi)
    }
    pub fn contains(&self, value: f64) -> bool {
        self.lo <= value && value <= self.hi
    }
}

/// Simulation box, represented by x, y, and z Bounds.
///
/// Every constructor and setter keeps `lo < hi` on each axis, and all derived
/// quantities are computed from the current bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationBox {
    bounds: [Bounds; 3],
}

impl SimulationBox {
    // Creation

    /// Create a new box from boundary values.
    ///
    /// ```rust
    /// use dpd_slice::SimulationBox;
    ///
    /// let box_ = SimulationBox::new(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0).unwrap();
    /// assert_eq!(box_.volume(), 8.0);
    /// assert!(SimulationBox::new(1.0, 1.0, 0.0, 1.0, 0.0, 1.0).is_err());
    /// ```
    pub fn new(xlo: f64, xhi: f64, ylo: f64, yhi: f64, zlo: f64, zhi: f64) -> Result<Self> {
        Ok(Self {
            bounds: [
                Bounds::new(Axis::X, xlo, xhi)?,
                Bounds::new(Axis::Y, ylo, yhi)?,
                Bounds::new(Axis::Z, zlo, zhi)?,
            ],
        })
    }
    /// Create a box spanned by two arbitrary opposite corners
    pub fn from_corners(a: &[f64; 3], b: &[f64; 3]) -> Result<Self> {
        Self::new(
            a[0].min(b[0]),
            a[0].max(b[0]),
            a[1].min(b[1]),
            a[1].max(b[1]),
            a[2].min(b[2]),
            a[2].max(b[2]),
        )
    }

    // Getters

    pub fn bounds(&self, axis: Axis) -> &Bounds {
        &self.bounds[axis.index()]
    }
    pub fn x(&self) -> &Bounds {
        &self.bounds[0]
    }
    pub fn y(&self) -> &Bounds {
        &self.bounds[1]
    }
    pub fn z(&self) -> &Bounds {
        &self.bounds[2]
    }
    pub fn xlo(&self) -> f64 {
        self.bounds[0].lo
    }
    pub fn xhi(&self) -> f64 {
        self.bounds[0].hi
    }
    pub fn ylo(&self) -> f64 {
        self.bounds[1].lo
    }
    pub fn yhi(&self) -> f64 {
        self.bounds[1].hi
    }
    pub fn zlo(&self) -> f64 {
        self.bounds[2].lo
    }
    pub fn zhi(&self) -> f64 {
        self.bounds[2].hi
    }
    pub fn lo(&self) -> [f64; 3] {
        [self.xlo(), self.ylo(), self.zlo()]
    }
    pub fn hi(&self) -> [f64; 3] {
        [self.xhi(), self.yhi(), self.zhi()]
    }
    pub fn lx(&self) -> f64 {
        self.bounds[0].length()
    }
    pub fn ly(&self) -> f64 {
        self.bounds[1].length()
    }
    pub fn lz(&self) -> f64 {
        self.bounds[2].length()
    }
    pub fn lengths(&self) -> [f64; 3] {
        [self.lx(), self.ly(), self.lz()]
    }
    pub fn half_lengths(&self) -> [f64; 3] {
        [0.5 * self.lx(), 0.5 * self.ly(), 0.5 * self.lz()]
    }
    pub fn volume(&self) -> f64 {
        self.lx() * self.ly() * self.lz()
    }
    /// Length of the diagonal from the lower to the upper corner
    pub fn space_diagonal(&self) -> f64 {
        let [lx, ly, lz] = self.lengths();
        (lx * lx + ly * ly + lz * lz).sqrt()
    }
    pub fn midpoint(&self) -> [f64; 3] {
        [self.x().mid(), self.y().mid(), self.z().mid()]
    }
    /// Cube centred on the box midpoint whose side is the space diagonal.
    ///
    /// The box stays inside this frame under any rotation about its midpoint.
    pub fn rotation_display_frame(&self) -> SimulationBox {
        let half = 0.5 * self.space_diagonal();
        let mid = self.midpoint();
        Self {
            bounds: [
                Bounds {
                    lo: mid[0] - half,
                    hi: mid[0] + half,
                },
                Bounds {
                    lo: mid[1] - half,
                    hi: mid[1] + half,
                },
                Bounds {
                    lo: mid[2] - half,
                    hi: mid[2] + half,
                },
            ],
        }
    }

    // Setters

    pub fn set_bound(&mut self, face: Face, bound: f64) -> Result<()> {
        let current = self.bounds[face.axis().index()];
        let updated = if face.is_lo() {
            Bounds::new(face.axis(), bound, current.hi)?
        } else {
            Bounds::new(face.axis(), current.lo, bound)?
        };
        self.bounds[face.axis().index()] = updated;
        Ok(())
    }
    pub fn set_bounds(&mut self, axis: Axis, lo: f64, hi: f64) -> Result<()> {
        self.bounds[axis.index()] = Bounds::new(axis, lo, hi)?;
        Ok(())
    }

    // Other public functions

    /// Check whether a point lies in the box volume of the given shape.
    ///
    /// Both tests are inclusive of the boundary.
    pub fn is_in_box(&self, point: &[f64; 3], shape: BoxShape) -> bool {
        match shape {
            BoxShape::Cuboid => self
                .bounds
                .iter()
                .zip(point.iter())
                .all(|(b, &v)| b.contains(v)),
            BoxShape::Ellipsoid => {
                let mid = self.midpoint();
                let half = self.half_lengths();
                let sum: f64 = (0..3)
                    .map(|i| {
                        let d = (point[i] - mid[i]) / half[i];
                        d * d
                    })
                    .sum();
                sum <= 1.0
            }
        }
    }
    /// Grow (or shrink, for negative values) every axis by `percentage` percent of its
    /// length, split evenly between both sides.
    pub fn enlarged(&self, percentage: f64) -> Result<SimulationBox> {
        check_finite("Enlargement percentage", percentage)?;
        if percentage <= -99.0 {
            return Err(Error::EnlargementTooSmall(percentage));
        }
        let mut bounds = self.bounds;
        for (axis, b) in Axis::ALL.iter().zip(bounds.iter_mut()) {
            let half_delta = 0.5 * b.length() * percentage / 100.0;
            *b = Bounds::new(*axis, b.lo - half_delta, b.hi + half_delta)?;
        }
        Ok(Self { bounds })
    }
    /// Multiply all six bounds by `factor`
    pub fn scaled(&self, factor: f64) -> Result<SimulationBox> {
        check_positive("Scale factor", factor)?;
        Self::new(
            self.xlo() * factor,
            self.xhi() * factor,
            self.ylo() * factor,
            self.yhi() * factor,
            self.zlo() * factor,
            self.zhi() * factor,
        )
    }
    /// The 8 corners: the four at `zlo` counter-clockwise from the lower corner, then the
    /// same four at `zhi`. See [`BOX_EDGES`] for the connectivity.
    pub fn edge_points(&self) -> [[f64; 3]; 8] {
        let [xlo, ylo, zlo] = self.lo();
        let [xhi, yhi, zhi] = self.hi();
        [
            [xlo, ylo, zlo],
            [xhi, ylo, zlo],
            [xhi, yhi, zlo],
            [xlo, yhi, zlo],
            [xlo, ylo, zhi],
            [xhi, ylo, zhi],
            [xhi, yhi, zhi],
            [xlo, yhi, zhi],
        ]
    }
    /// Wireframe points, `frame_point_count` evenly spaced along each edge including both
    /// corners, edge by edge in [`BOX_EDGES`] order.
    pub fn frame_points(&self, frame_point_count: usize) -> Result<Vec<[f64; 3]>> {
        check_count("Frame point count", frame_point_count, 2)?;
        let corners = self.edge_points();
        let last = (frame_point_count - 1) as f64;
        let mut points = Vec::with_capacity(BOX_EDGES.len() * frame_point_count);
        for [from, to] in BOX_EDGES {
            points.extend(
                (0..frame_point_count)
                    .map(|i| utils::lerp(&corners[from], &corners[to], i as f64 / last)),
            );
        }
        Ok(points)
    }
    /// Bound-wise comparison with a relative tolerance
    pub fn approx_eq(&self, other: &SimulationBox, tolerance_factor: f64) -> bool {
        self.bounds.iter().zip(other.bounds.iter()).all(|(a, b)| {
            utils::is_approx_equal(a.lo, b.lo, tolerance_factor)
                && utils::is_approx_equal(a.hi, b.hi, tolerance_factor)
        })
    }

    // Configured variants

    /// [`SimulationBox::is_in_box`] using the configured box shape
    pub fn contains(&self, point: &[f64; 3], config: &Config) -> bool {
        self.is_in_box(point, config.box_shape)
    }
    /// [`SimulationBox::frame_points`] using the configured frame point count
    pub fn frame_points_for(&self, config: &Config) -> Result<Vec<[f64; 3]>> {
        self.frame_points(config.frame_point_count)
    }
    /// [`SimulationBox::approx_eq`] using the configured tolerance factor
    pub fn approx_eq_for(&self, other: &SimulationBox, config: &Config) -> bool {
        self.approx_eq(other, config.tolerance_factor)
    }
}

impl fmt::Display for SimulationBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = [
            self.xlo(),
            self.xhi(),
            self.ylo(),
            self.yhi(),
            self.zlo(),
            self.zhi(),
        ];
        let text: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        f.write_str(&text.join(BOUNDS_SEPARATOR))
    }
}

impl FromStr for SimulationBox {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let values = s
            .split(BOUNDS_SEPARATOR)
            .filter(|token| !token.is_empty())
            .map(|token| token.trim().parse::<f64>())
            .collect::<std::result::Result<Vec<f64>, _>>()
            .map_err(|_| Error::Parse(s.to_owned()))?;
        match values[..] {
            [xlo, xhi, ylo, yhi, zlo, zhi] => Self::new(xlo, xhi, ylo, yhi, zlo, zhi),
            _ => Err(Error::Parse(s.to_owned())),
        }
    }
}
