pub fn distance_squared(coord1: &[f64; 3], coord2: &[f64; 3]) -> f64 {
    let x = coord1[0] - coord2[0];
    let y = coord1[1] - coord2[1];
    let z = coord1[2] - coord2[2];
    x * x + y * y + z * z
}

pub fn distance(coord1: &[f64; 3], coord2: &[f64; 3]) -> f64 {
    distance_squared(coord1, coord2).sqrt()
}

pub fn add(coord: &[f64; 3], offset: &[f64; 3]) -> [f64; 3] {
    [
        coord[0] + offset[0],
        coord[1] + offset[1],
        coord[2] + offset[2],
    ]
}

pub fn sub(coord1: &[f64; 3], coord2: &[f64; 3]) -> [f64; 3] {
    [
        coord1[0] - coord2[0],
        coord1[1] - coord2[1],
        coord1[2] - coord2[2],
    ]
}

/// Linear interpolation between two coordinates, `t = 0` giving `from`
pub fn lerp(from: &[f64; 3], to: &[f64; 3], t: f64) -> [f64; 3] {
    [
        from[0] + (to[0] - from[0]) * t,
        from[1] + (to[1] - from[1]) * t,
        from[2] + (to[2] - from[2]) * t,
    ]
}

/// Compares two values relative to the larger magnitude of the pair.
///
/// ```rust
/// use dpd_slice::utils::is_approx_equal;
///
/// assert!(is_approx_equal(1.0, 1.0 + 1e-12, 1e-10));
/// assert!(!is_approx_equal(1.0, 1.001, 1e-10));
/// assert!(is_approx_equal(0.0, 0.0, 1e-10));
/// ```
pub fn is_approx_equal(a: f64, b: f64, tolerance_factor: f64) -> bool {
    if a == b {
        return true;
    }
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= tolerance_factor * scale
}
