//! Closed set of primitive shapes and the scene primitive that pairs a shape
//! with its material.

use crate::error::SceneResult;
use crate::{Color, Cone, Cylinder, Hittable, Material, Plane, Sphere, Triangle};
use prism_math::{Ray, Vec3};

/// Every shape the tracer knows how to intersect.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
    Triangle(Triangle),
    Cylinder(Cylinder),
    Cone(Cone),
}

impl Shape {
    /// Short human-readable kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Sphere(_) => "sphere",
            Shape::Plane(_) => "plane",
            Shape::Triangle(_) => "triangle",
            Shape::Cylinder(_) => "cylinder",
            Shape::Cone(_) => "cone",
        }
    }

    fn as_hittable(&self) -> &dyn Hittable {
        match self {
            Shape::Sphere(s) => s,
            Shape::Plane(p) => p,
            Shape::Triangle(t) => t,
            Shape::Cylinder(c) => c,
            Shape::Cone(c) => c,
        }
    }
}

impl Hittable for Shape {
    #[inline]
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        self.as_hittable().intersect(ray)
    }

    #[inline]
    fn normal(&self, point: Vec3) -> Vec3 {
        self.as_hittable().normal(point)
    }

    #[inline]
    fn color_at(&self, point: Vec3) -> Color {
        self.as_hittable().color_at(point)
    }
}

impl From<Sphere> for Shape {
    fn from(s: Sphere) -> Self {
        Shape::Sphere(s)
    }
}

impl From<Plane> for Shape {
    fn from(p: Plane) -> Self {
        Shape::Plane(p)
    }
}

impl From<Triangle> for Shape {
    fn from(t: Triangle) -> Self {
        Shape::Triangle(t)
    }
}

impl From<Cylinder> for Shape {
    fn from(c: Cylinder) -> Self {
        Shape::Cylinder(c)
    }
}

impl From<Cone> for Shape {
    fn from(c: Cone) -> Self {
        Shape::Cone(c)
    }
}

/// A shape placed in a scene, together with its material.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub shape: Shape,
    pub material: Material,
}

impl Primitive {
    /// Create a primitive, rejecting invalid materials.
    pub fn new(shape: impl Into<Shape>, material: Material) -> SceneResult<Self> {
        material.validate()?;
        Ok(Self {
            shape: shape.into(),
            material,
        })
    }

    /// A primitive with only local shading.
    pub fn diffuse(shape: impl Into<Shape>) -> Self {
        Self {
            shape: shape.into(),
            material: Material::Diffuse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Checker, SceneError};

    fn one_of_each() -> Vec<(Shape, Vec3)> {
        let z = -10.0;
        vec![
            (
                Sphere::new(Vec3::new(0.0, 0.0, z), 2.0, Color::ONE).unwrap().into(),
                Vec3::new(0.0, 2.0, z),
            ),
            (
                Plane::new(
                    Vec3::new(-1.0, -1.0, z),
                    Vec3::new(1.0, -1.0, z),
                    Vec3::new(1.0, 1.0, z),
                    Vec3::new(-1.0, 1.0, z),
                    Color::ONE,
                )
                .unwrap()
                .with_checker(Checker::new(Color::ZERO, 0.5))
                .unwrap()
                .into(),
                Vec3::new(0.25, 0.25, z),
            ),
            (
                Triangle::new(
                    Vec3::new(-1.0, -1.0, z),
                    Vec3::new(1.0, -1.0, z),
                    Vec3::new(0.0, 1.0, z),
                    Color::ONE,
                )
                .unwrap()
                .into(),
                Vec3::new(0.0, 0.0, z),
            ),
            (
                Cylinder::new(Vec3::new(0.0, 0.0, z), 1.0, 2.0, Color::ONE).unwrap().into(),
                Vec3::new(0.0, 1.0, z + 1.0),
            ),
            (
                Cone::new(Vec3::new(0.0, 0.0, z), 1.0, 2.0, Color::ONE).unwrap().into(),
                Vec3::new(0.0, 1.0, z + 0.5),
            ),
        ]
    }

    #[test]
    fn test_every_shape_has_unit_normals() {
        for (shape, point) in one_of_each() {
            let n = shape.normal(point);
            assert!(
                (n.length() - 1.0).abs() < 1e-5,
                "{} normal {n} is not unit length",
                shape.kind()
            );
        }
    }

    #[test]
    fn test_every_shape_misses_rays_pointing_away() {
        let away = Ray::new(Vec3::ZERO, Vec3::Z);
        for (shape, _) in one_of_each() {
            assert!(shape.intersect(&away).is_none(), "{} was hit", shape.kind());
        }
    }

    #[test]
    fn test_every_shape_misses_degenerate_rays() {
        let degenerate = Ray::new(Vec3::ZERO, Vec3::ZERO);
        for (shape, _) in one_of_each() {
            assert!(shape.intersect(&degenerate).is_none(), "{} was hit", shape.kind());
        }
    }

    #[test]
    fn test_every_shape_is_hit_head_on() {
        for (shape, _) in one_of_each() {
            let ray = Ray::new(Vec3::new(0.0, 0.5, 0.0), -Vec3::Z);
            assert!(shape.intersect(&ray).is_some(), "{} was missed", shape.kind());
        }
    }

    #[test]
    fn test_dispatch_matches_inner_shape() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, Color::X).unwrap();
        let shape = Shape::from(sphere.clone());
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);

        assert_eq!(shape.kind(), "sphere");
        assert_eq!(shape.intersect(&ray), sphere.intersect(&ray));
        assert_eq!(shape.color_at(Vec3::ZERO), Color::X);
    }

    #[test]
    fn test_primitive_validates_material() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, Color::ONE).unwrap();
        assert_eq!(
            Primitive::new(sphere.clone(), Material::refractive(-1.0)),
            Err(SceneError::InvalidRefractiveIndex(-1.0))
        );

        let primitive = Primitive::new(sphere, Material::reflective(0.8)).unwrap();
        assert_eq!(primitive.material, Material::reflective(0.8));
    }
}
