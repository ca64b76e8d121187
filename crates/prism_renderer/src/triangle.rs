//! Triangle primitive for ray tracing.
//!
//! Intersects the supporting plane, then checks the hit point against the
//! three edges.

use crate::error::{SceneError, SceneResult};
use crate::hittable::{ensure_finite, Hittable};
use crate::polygon;
use crate::Color;
use prism_math::{Ray, Vec3};

/// A triangle primitive.
///
/// The front face is the side from which `a`, `b`, `c` appear
/// counter-clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    /// Vertices
    vertices: [Vec3; 3],
    /// Pre-computed face normal (unit length)
    normal: Vec3,
    color: Color,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(a: Vec3, b: Vec3, c: Vec3, color: Color) -> SceneResult<Self> {
        ensure_finite("triangle", &[a, b, c, color])?;

        // Calculate normal using cross product
        let normal = (b - a)
            .cross(c - a)
            .try_normalize()
            .ok_or(SceneError::DegenerateTriangle)?;

        Ok(Self {
            vertices: [a, b, c],
            normal,
            color,
        })
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        self.vertices
    }

    /// True when `point` lies strictly inside the triangle's edges.
    ///
    /// Vertices and edge points are always rejected.
    pub fn contains(&self, point: Vec3) -> bool {
        polygon::contains(&self.vertices, self.normal, point)
    }
}

impl Hittable for Triangle {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        polygon::intersect_polygon(ray, &self.vertices, self.normal)
    }

    fn normal(&self, _point: Vec3) -> Vec3 {
        self.normal
    }

    fn color_at(&self, _point: Vec3) -> Color {
        self.color
    }
}
