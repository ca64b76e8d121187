//! Hittable trait and Hit record for ray-object intersection.

use crate::error::{SceneError, SceneResult};
use crate::Color;
use prism_math::{Ray, Vec3};

/// Minimum accepted hit distance.
///
/// Secondary and shadow rays start on a surface; anything closer than this
/// is the surface they left.
pub const HIT_EPSILON: f32 = 1e-3;

/// Closest intersection of a ray with a scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Position of the primitive in scene order
    pub index: usize,
    /// Distance along the ray
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
}

/// Capabilities every primitive shape provides to the tracer.
pub trait Hittable {
    /// Distance along `ray` to the first forward intersection.
    ///
    /// Returns `None` (the sentinel miss) for misses, tangent rays, rays
    /// parallel to a flat surface and degenerate rays.
    fn intersect(&self, ray: &Ray) -> Option<f32>;

    /// Outward unit normal at `point`, assumed to lie on the surface.
    fn normal(&self, point: Vec3) -> Vec3;

    /// Surface color at `point`.
    fn color_at(&self, point: Vec3) -> Color;
}

/// Reject NaN and infinite coordinates in constructor input.
pub(crate) fn ensure_finite(shape: &'static str, points: &[Vec3]) -> SceneResult<()> {
    if points.iter().all(|p| p.is_finite()) {
        Ok(())
    } else {
        Err(SceneError::NonFinite(shape))
    }
}
