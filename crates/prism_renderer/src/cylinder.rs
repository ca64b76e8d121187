//! Finite cylinder standing on the XZ plane, axis along +Y.

use crate::error::{SceneError, SceneResult};
use crate::hittable::{ensure_finite, Hittable, HIT_EPSILON};
use crate::Color;
use prism_math::{Ray, Vec3};

/// Discriminants below this are tangent or missing rays.
pub(crate) const DISCRIMINANT_EPSILON: f32 = 1e-3;

/// Which roots of a capped quadric survive the height test.
///
/// `t_far` is the `+sqrt` root and `t_near` the `-sqrt` root; `y_far` and
/// `y_near` are their heights. Returns the accepted distance.
///
/// A ray whose far root lies below the base "enters through the base". No
/// cap plane is intersected: the near lateral root stands in for the cap
/// crossing. The same approximation applies at the top when `top_cap` is
/// set; without one, a far root above the top is a miss.
pub(crate) fn classify_roots(
    (t_far, y_far): (f32, f32),
    (t_near, y_near): (f32, f32),
    base_y: f32,
    top_y: f32,
    top_cap: bool,
) -> Option<f32> {
    let t = if y_far < base_y {
        if y_near < base_y {
            return None;
        }
        t_near
    } else if y_far > top_y {
        if !top_cap || y_near > top_y {
            return None;
        }
        t_near
    } else {
        // First positive root, so rays starting inside see the far wall.
        let (first, second) = if t_near < t_far {
            (t_near, t_far)
        } else {
            (t_far, t_near)
        };
        if first > HIT_EPSILON {
            first
        } else {
            second
        }
    };

    (t > HIT_EPSILON).then_some(t)
}

/// A finite cylinder.
#[derive(Debug, Clone, PartialEq)]
pub struct Cylinder {
    /// Center of the base disc
    center: Vec3,
    radius: f32,
    height: f32,
    color: Color,
}

impl Cylinder {
    /// Create a new cylinder from the center of its base.
    pub fn new(center: Vec3, radius: f32, height: f32, color: Color) -> SceneResult<Self> {
        ensure_finite("cylinder", &[center, color])?;
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SceneError::InvalidRadius {
                shape: "cylinder",
                radius,
            });
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(SceneError::InvalidHeight {
                shape: "cylinder",
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

    fn top_y(&self) -> f32 {
        self.center.y + self.height
    }
}

impl Hittable for Cylinder {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let o = ray.origin();
        let d = ray.direction();

        // Quadratic in x and z only; the axis coordinate drops out.
        let dx = o.x - self.center.x;
        let dz = o.z - self.center.z;
        let a = d.x * d.x + d.z * d.z;
        let b = 2.0 * (d.x * dx + d.z * dz);
        let c = dx * dx + dz * dz - self.radius * self.radius;

        // Rays parallel to the axis never cross the lateral surface.
        if a < f32::EPSILON {
            return None;
        }

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < DISCRIMINANT_EPSILON {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let t_far = (-b + sqrtd) / (2.0 * a);
        let t_near = (-b - sqrtd) / (2.0 * a);

        classify_roots(
            (t_far, o.y + t_far * d.y),
            (t_near, o.y + t_near * d.y),
            self.center.y,
            self.top_y(),
            true,
        )
    }

    fn normal(&self, point: Vec3) -> Vec3 {
        if point.y >= self.top_y() {
            return Vec3::Y;
        }
        if point.y <= self.center.y {
            return -Vec3::Y;
        }

        let axis_point = Vec3::new(self.center.x, point.y, self.center.z);
        (point - axis_point).try_normalize().unwrap_or(Vec3::Y)
    }

    fn color_at(&self, _point: Vec3) -> Color {
        self.color
    }
}
