//! The demonstration scene: a checkered floor with spheres, a box, a
//! cylinder, a cone, a pyramid and a triangular prism.

use prism_renderer::{
    Checker, Color, Cone, Cylinder, Light, Material, Plane, Primitive, Scene, SceneResult, Sphere,
    Triangle, Vec3,
};

const RED: Color = Color::new(1.0, 0.0, 0.0);
const GREEN: Color = Color::new(0.0, 1.0, 0.0);
const BLUE: Color = Color::new(0.0, 0.0, 1.0);
const CYAN: Color = Color::new(0.0, 1.0, 1.0);
const MAGENTA: Color = Color::new(1.0, 0.0, 1.0);
const YELLOW: Color = Color::new(1.0, 1.0, 0.0);
const WHITE: Color = Color::ONE;
const DARK_YELLOW: Color = Color::new(0.5, 0.5, 0.0);

pub fn demo_scene() -> SceneResult<Scene> {
    let mut primitives = vec![floor()?];
    primitives.extend(spheres()?);
    primitives.extend(red_box()?);
    primitives.push(Primitive::diffuse(Cylinder::new(
        Vec3::new(10.0, -20.0, -85.0),
        5.0,
        5.0,
        YELLOW,
    )?));
    primitives.push(Primitive::diffuse(Cone::new(
        Vec3::new(0.0, -20.0, -90.0),
        5.0,
        10.0,
        GREEN,
    )?));
    primitives.extend(pyramid()?);
    primitives.extend(prism()?);

    Scene::builder()
        .extend(primitives)
        .light(Light::new(Vec3::new(10.0, 40.0, -3.0)))
        .build()
}

fn floor() -> SceneResult<Primitive> {
    let plane = Plane::new(
        Vec3::new(-30.0, -20.0, -40.0),
        Vec3::new(30.0, -20.0, -40.0),
        Vec3::new(30.0, -20.0, -200.0),
        Vec3::new(-30.0, -20.0, -200.0),
        DARK_YELLOW,
    )?
    .with_checker(Checker::new(Color::ZERO, 5.0))?;
    Ok(Primitive::diffuse(plane))
}

fn spheres() -> SceneResult<Vec<Primitive>> {
    Ok(vec![
        Primitive::new(
            Sphere::new(Vec3::new(0.0, 5.0, -150.0), 15.0, BLUE)?,
            Material::reflective(0.8),
        )?,
        Primitive::new(
            Sphere::new(Vec3::new(-5.0, 10.0, -50.0), 4.0, MAGENTA)?,
            Material::reflective(0.8),
        )?,
        Primitive::new(
            Sphere::new(Vec3::new(-5.0, -10.0, -100.0), 5.0, CYAN)?,
            Material::refractive(1.01),
        )?,
    ])
}

/// Axis-aligned box spanning x 5..15, y -5..5, z -95..-85.
fn red_box() -> SceneResult<Vec<Primitive>> {
    let (x0, x1) = (5.0, 15.0);
    let (y0, y1) = (-5.0, 5.0);
    let (z_front, z_back) = (-85.0, -95.0);

    let p = |x, y, z| Vec3::new(x, y, z);
    // Each face is wound counter-clockwise seen from outside.
    let faces = [
        [p(x0, y1, z_front), p(x0, y0, z_front), p(x1, y0, z_front), p(x1, y1, z_front)],
        [p(x1, y1, z_front), p(x1, y0, z_front), p(x1, y0, z_back), p(x1, y1, z_back)],
        [p(x0, y1, z_back), p(x1, y1, z_back), p(x1, y0, z_back), p(x0, y0, z_back)],
        [p(x0, y0, z_front), p(x0, y1, z_front), p(x0, y1, z_back), p(x0, y0, z_back)],
        [p(x0, y1, z_front), p(x1, y1, z_front), p(x1, y1, z_back), p(x0, y1, z_back)],
        [p(x0, y0, z_front), p(x0, y0, z_back), p(x1, y0, z_back), p(x1, y0, z_front)],
    ];

    faces
        .into_iter()
        .map(|[a, b, c, d]| Ok(Primitive::diffuse(Plane::new(a, b, c, d, RED)?)))
        .collect()
}

/// Four-sided pyramid without a floor, apex at (-10, -10, -90).
fn pyramid() -> SceneResult<Vec<Primitive>> {
    let apex = Vec3::new(-10.0, -10.0, -90.0);
    let a = apex + Vec3::new(-5.0, -10.0, -5.0);
    let b = apex + Vec3::new(5.0, -10.0, -5.0);
    let c = apex + Vec3::new(5.0, -10.0, 5.0);
    let d = apex + Vec3::new(-5.0, -10.0, 5.0);

    [(b, a), (c, b), (d, c), (a, d)]
        .into_iter()
        .map(|(from, to)| Ok(Primitive::diffuse(Triangle::new(from, to, apex, WHITE)?)))
        .collect()
}

/// Right triangular prism standing between y = 5 and y = 10.
fn prism() -> SceneResult<Vec<Primitive>> {
    let (base, top) = (5.0, 10.0);
    let a = Vec3::new(10.0, base, -70.0);
    let b = Vec3::new(15.0, base, -70.0);
    let c = Vec3::new(10.0, base, -55.0);
    let d = Vec3::new(10.0, top, -70.0);
    let e = Vec3::new(15.0, top, -70.0);
    let f = Vec3::new(10.0, top, -55.0);

    Ok(vec![
        Primitive::diffuse(Triangle::new(a, b, c, WHITE)?),
        Primitive::diffuse(Plane::new(a, c, f, d, WHITE)?),
        Primitive::diffuse(Plane::new(c, b, e, f, WHITE)?),
        Primitive::diffuse(Plane::new(a, d, e, b, WHITE)?),
        Primitive::diffuse(Triangle::new(d, f, e, WHITE)?),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_renderer::{Hittable, Ray, Shape};

    #[test]
    fn test_demo_scene_builds() {
        let scene = demo_scene().unwrap();
        assert_eq!(scene.len(), 21);
        assert_eq!(scene.light().position, Vec3::new(10.0, 40.0, -3.0));
    }

    #[test]
    fn test_materials() {
        let scene = demo_scene().unwrap();
        let reflective = scene
            .primitives()
            .iter()
            .filter(|p| matches!(p.material, Material::Reflective { .. }))
            .count();
        let refractive = scene
            .primitives()
            .iter()
            .filter(|p| matches!(p.material, Material::Refractive { .. }))
            .count();
        assert_eq!(reflective, 2);
        assert_eq!(refractive, 1);
    }

    #[test]
    fn test_solid_faces_point_outward() {
        let scene = demo_scene().unwrap();
        let box_center = Vec3::new(10.0, 0.0, -90.0);
        let pyramid_center = Vec3::new(-10.0, -17.0, -90.0);
        let prism_center = Vec3::new(35.0 / 3.0, 7.5, -65.0);

        for (index, primitive) in scene.primitives().iter().enumerate().skip(4) {
            let center = match index {
                4..=9 => box_center,
                12..=15 => pyramid_center,
                _ => prism_center,
            };
            let vertices: Vec<Vec3> = match &primitive.shape {
                Shape::Plane(plane) => plane.vertices().to_vec(),
                Shape::Triangle(triangle) => triangle.vertices().to_vec(),
                _ => continue,
            };

            let face_center = vertices.iter().copied().sum::<Vec3>() / vertices.len() as f32;
            let normal = primitive.shape.normal(face_center);
            assert!(
                normal.dot(face_center - center) > 0.0,
                "face {index} points inward"
            );
        }
    }

    #[test]
    fn test_view_center_sees_the_scene() {
        let scene = demo_scene().unwrap();
        let hit = scene.closest_hit(&Ray::new(Vec3::ZERO, Vec3::new(0.0, -0.3, -1.0)));
        assert!(hit.is_some());
    }
}
