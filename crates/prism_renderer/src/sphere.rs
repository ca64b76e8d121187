//! Sphere primitive for ray tracing.

use crate::error::{SceneError, SceneResult};
use crate::hittable::{ensure_finite, Hittable, HIT_EPSILON};
use crate::Color;
use prism_math::{Ray, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    color: Color,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, color: Color) -> SceneResult<Self> {
        ensure_finite("sphere", &[center, color])?;
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SceneError::InvalidRadius {
                shape: "sphere",
                radius,
            });
        }

        Ok(Self {
            center,
            radius,
            color,
        })
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Hittable for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        if ray.is_degenerate() {
            return None;
        }

        // Direction is unit length, so the quadratic's `a` term is 1.
        let oc = self.center - ray.origin();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - c;
        // Tangent rays graze the silhouette and count as misses.
        if discriminant <= f32::EPSILON * self.radius * self.radius {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Entry point first, exit point when the origin is inside.
        let near = h - sqrtd;
        if near > HIT_EPSILON {
            return Some(near);
        }
        let far = h + sqrtd;
        (far > HIT_EPSILON).then_some(far)
    }

    fn normal(&self, point: Vec3) -> Vec3 {
        (point - self.center).try_normalize().unwrap_or(Vec3::Y)
    }

    fn color_at(&self, _point: Vec3) -> Color {
        self.color
    }
}
