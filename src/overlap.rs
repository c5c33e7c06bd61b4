//! Pairwise overlap predicates. Touching bodies count as overlapping.

use num_traits::clamp;

use crate::{
    region::{Body, Layer, Region, Sphere},
    utils,
};

/// `distance(c1, c2) <= r1 + r2`
///
/// ```rust
/// use dpd_slice::{overlap::is_sphere_sphere_overlap, region::Sphere};
///
/// let a = Sphere::new([0.0, 0.0, 0.0], 1.0).unwrap();
/// let b = Sphere::new([3.0, 0.0, 0.0], 2.0).unwrap();
/// assert!(is_sphere_sphere_overlap(&a, &b));
/// ```
pub fn is_sphere_sphere_overlap(a: &Sphere, b: &Sphere) -> bool {
    let r = a.radius() + b.radius();
    utils::distance_squared(a.center(), b.center()) <= r * r
}

/// The sphere center clamped into the layer is the closest layer point to it
pub fn is_sphere_layer_overlap(sphere: &Sphere, layer: &Layer) -> bool {
    let lo = layer.lo();
    let hi = layer.hi();
    let c = sphere.center();
    let closest = [
        clamp(c[0], lo[0], hi[0]),
        clamp(c[1], lo[1], hi[1]),
        clamp(c[2], lo[2], hi[2]),
    ];
    utils::distance_squared(&closest, c) <= sphere.radius() * sphere.radius()
}

pub fn is_layer_layer_overlap(a: &Layer, b: &Layer) -> bool {
    (0..3).all(|i| {
        (a.center()[i] - b.center()[i]).abs() <= a.half_extents()[i] + b.half_extents()[i]
    })
}

pub fn is_body_body_overlap(a: &Body, b: &Body) -> bool {
    match (a, b) {
        (Body::Sphere(s1), Body::Sphere(s2)) => is_sphere_sphere_overlap(s1, s2),
        (Body::Sphere(s), Body::Layer(l)) | (Body::Layer(l), Body::Sphere(s)) => {
            is_sphere_layer_overlap(s, l)
        }
        (Body::Layer(l1), Body::Layer(l2)) => is_layer_layer_overlap(l1, l2),
    }
}

pub fn overlaps_any(body: &Body, others: &[Body]) -> bool {
    others.iter().any(|other| is_body_body_overlap(body, other))
}

/// Whether a coordinate lies inside any of the spheres (boundary inclusive)
pub fn is_in_any_sphere(coord: &[f64; 3], spheres: &[Sphere]) -> bool {
    spheres.iter().any(|s| s.contains(coord))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere(center: [f64; 3], radius: f64) -> Sphere {
        Sphere::new(center, radius).unwrap()
    }
    fn layer(center: [f64; 3], half_extents: [f64; 3]) -> Layer {
        Layer::new(center, half_extents).unwrap()
    }

    #[test]
    fn sphere_sphere_boundary_counts_as_overlap() {
        let a = sphere([0.0, 0.0, 0.0], 1.0);
        assert!(is_sphere_sphere_overlap(&a, &sphere([2.0, 0.0, 0.0], 1.0)));
        assert!(is_sphere_sphere_overlap(&a, &sphere([0.0, 0.0, 1.5], 1.0)));
        assert!(!is_sphere_sphere_overlap(&a, &sphere([0.0, 2.0 + 1e-9, 0.0], 1.0)));
        // 3-4-5 triangle, exact in floating point
        assert!(is_sphere_sphere_overlap(&a, &sphere([3.0, 4.0, 0.0], 4.0)));
        assert!(!is_sphere_sphere_overlap(&a, &sphere([3.0, 4.0, 0.0], 3.9)));
    }

    #[test]
    fn sphere_layer() {
        let l = layer([0.0, 0.0, 0.0], [1.0, 2.0, 3.0]);
        // center inside
        assert!(is_sphere_layer_overlap(&sphere([0.5, 0.5, 0.5], 0.1), &l));
        // touching a face
        assert!(is_sphere_layer_overlap(&sphere([2.0, 0.0, 0.0], 1.0), &l));
        assert!(!is_sphere_layer_overlap(&sphere([2.1, 0.0, 0.0], 1.0), &l));
        // near a corner: closest point is the corner, not the face
        let corner_distance = 3f64.sqrt() * 0.5;
        let s = sphere([1.5, 2.5, 3.5], corner_distance - 1e-6);
        assert!(!is_sphere_layer_overlap(&s, &l));
        let s = sphere([1.5, 2.5, 3.5], corner_distance + 1e-6);
        assert!(is_sphere_layer_overlap(&s, &l));
    }

    #[test]
    fn layer_layer() {
        let a = layer([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        assert!(is_layer_layer_overlap(&a, &layer([2.0, 0.0, 0.0], [1.0, 1.0, 1.0])));
        assert!(!is_layer_layer_overlap(&a, &layer([2.0, 0.0, 0.0], [0.9, 1.0, 1.0])));
        // overlapping on two axes only
        assert!(!is_layer_layer_overlap(&a, &layer([0.0, 0.5, 5.0], [1.0, 1.0, 1.0])));
    }

    #[test]
    fn body_dispatch_is_symmetric() {
        let s: Body = sphere([2.0, 0.0, 0.0], 1.0).into();
        let l: Body = layer([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]).into();
        assert!(is_body_body_overlap(&s, &l));
        assert!(is_body_body_overlap(&l, &s));
        assert!(overlaps_any(&s, &[l]));
        assert!(!overlaps_any(&s, &[]));
    }

    #[test]
    fn point_in_spheres() {
        let spheres = [sphere([0.0; 3], 1.0), sphere([5.0, 0.0, 0.0], 1.0)];
        assert!(is_in_any_sphere(&[5.0, 1.0, 0.0], &spheres));
        assert!(!is_in_any_sphere(&[2.5, 0.0, 0.0], &spheres));
        assert!(!is_in_any_sphere(&[0.0; 3], &[]));
    }
}
