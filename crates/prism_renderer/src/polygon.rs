//! Ray intersection shared by flat convex polygons (triangles and quads).

use prism_math::{Ray, Vec3};

/// Rays closer than this to parallel with the surface are misses.
const PARALLEL_EPSILON: f32 = 1e-4;

/// Hits closer than this to the ray origin are misses.
const NEAR_EPSILON: f32 = 1e-4;

/// Distance along `ray` to the infinite plane through `anchor` with unit
/// `normal`, if it lies in front of the origin.
pub(crate) fn intersect_plane(ray: &Ray, anchor: Vec3, normal: Vec3) -> Option<f32> {
    let denom = ray.direction().dot(normal);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }

    let t = (anchor - ray.origin()).dot(normal) / denom;
    (t > NEAR_EPSILON).then_some(t)
}

/// Point-in-polygon test for ordered convex `vertices`.
///
/// The point must lie strictly on the inner side of every edge, judged
/// against the polygon's own `normal`. Points on an edge or vertex are
/// rejected.
pub(crate) fn contains(vertices: &[Vec3], normal: Vec3, point: Vec3) -> bool {
    let n = vertices.len();
    (0..n).all(|i| {
        let start = vertices[i];
        let end = vertices[(i + 1) % n];
        (end - start).cross(point - start).dot(normal) > 0.0
    })
}

/// Intersect `ray` with the convex polygon, returning the hit distance.
pub(crate) fn intersect_polygon(ray: &Ray, vertices: &[Vec3], normal: Vec3) -> Option<f32> {
    let t = intersect_plane(ray, vertices[0], normal)?;
    contains(vertices, normal, ray.at(t)).then_some(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersect_plane_parallel_is_miss() {
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X);
        assert!(intersect_plane(&ray, Vec3::ZERO, Vec3::Y).is_none());
    }

    #[test]
    fn test_intersect_plane_behind_is_miss() {
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::Y);
        assert!(intersect_plane(&ray, Vec3::ZERO, Vec3::Y).is_none());
    }

    #[test]
    fn test_intersect_plane_either_side() {
        let down = Ray::new(Vec3::new(0.0, 2.0, 0.0), -Vec3::Y);
        assert_eq!(intersect_plane(&down, Vec3::ZERO, Vec3::Y), Some(2.0));

        let up = Ray::new(Vec3::new(0.0, -3.0, 0.0), Vec3::Y);
        assert_eq!(intersect_plane(&up, Vec3::ZERO, Vec3::Y), Some(3.0));
    }

    #[test]
    fn test_contains_square() {
        let square = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        assert!(contains(&square, Vec3::Z, Vec3::new(0.5, 0.5, 0.0)));
        assert!(!contains(&square, Vec3::Z, Vec3::new(1.5, 0.5, 0.0)));
        assert!(!contains(&square, Vec3::Z, Vec3::new(0.5, -0.5, 0.0)));
        // Judged against the opposite normal everything is outside.
        assert!(!contains(&square, -Vec3::Z, Vec3::new(0.5, 0.5, 0.0)));
    }
}
