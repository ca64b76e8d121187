//! Finite cone standing on the XZ plane with its apex up.

use crate::cylinder::{classify_roots, DISCRIMINANT_EPSILON};
use crate::error::{SceneError, SceneResult};
use crate::hittable::{ensure_finite, Hittable};
use crate::Color;
use prism_math::{Ray, Vec3};

/// A finite cone with an open apex end.
#[derive(Debug, Clone, PartialEq)]
pub struct Cone {
    /// Center of the base disc
    center: Vec3,
    radius: f32,
    height: f32,
    color: Color,
}

impl Cone {
    /// Create a new cone from the center of its base.
    pub fn new(center: Vec3, radius: f32, height: f32, color: Color) -> SceneResult<Self> {
        ensure_finite("cone", &[center, color])?;
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SceneError::InvalidRadius {
                shape: "cone",
                radius,
            });
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(SceneError::InvalidHeight {
                shape: "cone",
                height,
            });
        }

        Ok(Self {
            center,
            radius,
            height,
            color,
        })
    }

    pub fn apex(&self) -> Vec3 {
        self.center + Vec3::Y * self.height
    }
}

impl Hittable for Cone {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let o = ray.origin();
        let d = ray.direction();

        // (x^2 + z^2) = m * y^2 relative to the apex, m = (r / h)^2
        let m = (self.radius * self.radius) / (self.height * self.height);
        let w = o - self.apex();

        let a = d.dot(d) - m * d.y * d.y - d.y * d.y;
        let b = 2.0 * (d.dot(w) - m * d.y * w.y - d.y * w.y);
        let c = w.dot(w) - m * w.y * w.y - w.y * w.y;

        // Rays parallel to the slant degrade to a linear equation; treat as misses.
        if a.abs() < f32::EPSILON {
            return None;
        }

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < DISCRIMINANT_EPSILON {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let t_far = (-b + sqrtd) / (2.0 * a);
        let t_near = (-b - sqrtd) / (2.0 * a);

        // No top surface: nothing can enter from above the apex.
        classify_roots(
            (t_far, o.y + t_far * d.y),
            (t_near, o.y + t_near * d.y),
            self.center.y,
            self.center.y + self.height,
            false,
        )
    }

    /// Radial normal of the lateral surface; it ignores the slant.
    fn normal(&self, point: Vec3) -> Vec3 {
        let axis_point = Vec3::new(self.center.x, point.y, self.center.z);
        (point - axis_point).try_normalize().unwrap_or(Vec3::Y)
    }

    fn color_at(&self, _point: Vec3) -> Color {
        self.color
    }
}
