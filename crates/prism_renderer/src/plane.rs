//! Bounded planar quadrilateral with an optional checker pattern.

use crate::error::{SceneError, SceneResult};
use crate::hittable::{ensure_finite, Hittable};
use crate::polygon;
use crate::Color;
use prism_math::{Ray, Vec3};

/// Largest off-plane distance of the fourth vertex, relative to the quad's
/// size, still accepted as coplanar.
const COPLANAR_TOLERANCE: f32 = 1e-3;

/// Procedural two-color tiling in the plane's own coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Checker {
    /// Color of the odd cells
    pub alternate: Color,
    /// Edge length of one square cell
    pub cell_size: f32,
}

impl Checker {
    pub fn new(alternate: Color, cell_size: f32) -> Self {
        Self {
            alternate,
            cell_size,
        }
    }
}

/// A flat quad bounded by four ordered, coplanar vertices.
///
/// The front face is the side from which `a`, `b`, `c`, `d` appear
/// counter-clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    vertices: [Vec3; 4],
    normal: Vec3,
    /// In-plane axes used by the checker pattern
    u_axis: Vec3,
    v_axis: Vec3,
    color: Color,
    checker: Option<Checker>,
}

impl Plane {
    /// Create a new quad with a uniform color.
    pub fn new(a: Vec3, b: Vec3, c: Vec3, d: Vec3, color: Color) -> SceneResult<Self> {
        ensure_finite("plane", &[a, b, c, d, color])?;

        let normal = (b - a)
            .cross(d - a)
            .try_normalize()
            .ok_or(SceneError::DegenerateQuad)?;

        let size = (c - a).length().max((d - b).length());
        let off_plane = (c - a).dot(normal).abs();
        if off_plane > COPLANAR_TOLERANCE * size {
            return Err(SceneError::NonPlanarQuad(off_plane));
        }

        let u_axis = (b - a).normalize();
        let v_axis = normal.cross(u_axis);

        Ok(Self {
            vertices: [a, b, c, d],
            normal,
            u_axis,
            v_axis,
            color,
            checker: None,
        })
    }

    /// Tile the quad with `checker`, starting from vertex `a`.
    pub fn with_checker(mut self, checker: Checker) -> SceneResult<Self> {
        ensure_finite("checker", &[checker.alternate])?;
        if !(checker.cell_size.is_finite() && checker.cell_size > 0.0) {
            return Err(SceneError::InvalidCellSize(checker.cell_size));
        }
        self.checker = Some(checker);
        Ok(self)
    }

    pub fn vertices(&self) -> [Vec3; 4] {
        self.vertices
    }

    pub fn is_checkered(&self) -> bool {
        self.checker.is_some()
    }

    /// True when `point` lies strictly inside the quad's four edges.
    pub fn contains(&self, point: Vec3) -> bool {
        polygon::contains(&self.vertices, self.normal, point)
    }

    /// Integer checker cell of `point` along the two in-plane axes.
    fn cell(&self, point: Vec3, cell_size: f32) -> (i64, i64) {
        let local = point - self.vertices[0];
        let u = (local.dot(self.u_axis) / cell_size).floor() as i64;
        let v = (local.dot(self.v_axis) / cell_size).floor() as i64;
        (u, v)
    }
}

impl Hittable for Plane {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        polygon::intersect_polygon(ray, &self.vertices, self.normal)
    }

    fn normal(&self, _point: Vec3) -> Vec3 {
        self.normal
    }

    fn color_at(&self, point: Vec3) -> Color {
        match self.checker {
            Some(checker) => {
                let (u, v) = self.cell(point, checker.cell_size);
                if (u + v).rem_euclid(2) == 0 {
                    self.color
                } else {
                    checker.alternate
                }
            }
            None => self.color,
        }
    }
}
