//! Recursive Whitted-style shading.
//!
//! Each hit is shaded with ambient, diffuse and Phong specular terms from the
//! scene's point light. Lit hits on mirrors and transparent volumes then
//! spawn one secondary ray whose color is added on top, up to a per-kind
//! depth budget.

use crate::hittable::{Hit, HIT_EPSILON};
use crate::{Color, Hittable, Material, Primitive, RenderConfig, Scene};
use prism_math::{reflect, refract, Interval, Ray, Vec3};

/// Traces rays against one scene with one configuration.
#[derive(Debug, Clone, Copy)]
pub struct Tracer<'a> {
    scene: &'a Scene,
    config: &'a RenderConfig,
}

impl<'a> Tracer<'a> {
    pub fn new(scene: &'a Scene, config: &'a RenderConfig) -> Self {
        Self { scene, config }
    }

    /// Color seen along `ray`; primary rays start at depth 1.
    pub fn trace(&self, ray: &Ray, depth: u32) -> Color {
        let Some(hit) = self.scene.closest_hit(ray) else {
            return self.config.background;
        };
        let Some(primitive) = self.scene.get(hit.index) else {
            return self.config.background;
        };
        self.shade(ray, &hit, primitive, depth)
    }

    fn shade(&self, ray: &Ray, hit: &Hit, primitive: &Primitive, depth: u32) -> Color {
        let shape = &primitive.shape;
        let light = self.scene.light();

        let normal = shape.normal(hit.point);
        let material_color = shape.color_at(hit.point);
        let ambient = light.ambient * material_color;

        let to_light = light.position - hit.point;
        let light_distance = to_light.length();
        let Some(light_dir) = to_light.try_normalize() else {
            return ambient;
        };

        let l_dot_n = normal.dot(light_dir);
        if l_dot_n <= 0.0 || self.in_shadow(hit.point, light_dir, light_distance) {
            return ambient;
        }

        let specular = self.specular_term(light_dir, normal, ray.direction());
        let mut color = ambient + l_dot_n * material_color + light.specular * specular;

        match primitive.material {
            Material::Diffuse => {}
            Material::Reflective { weight } => {
                if depth < self.config.max_depth {
                    let reflected = Ray::new(hit.point, reflect(ray.direction(), normal));
                    color += weight * self.trace(&reflected, depth + 1);
                }
            }
            Material::Refractive { index } => {
                if depth < self.config.max_refraction_depth {
                    if let Some(through) = self.transmitted_ray(ray, hit, primitive, index) {
                        color += self.trace(&through, depth + 1);
                    }
                }
            }
        }

        color
    }

    /// Phong highlight: (R · V)^shininess, zero when R faces away from the viewer.
    fn specular_term(&self, light_dir: Vec3, normal: Vec3, view_dir: Vec3) -> f32 {
        let r_dot_v = reflect(-light_dir, normal).dot(-view_dir);
        if r_dot_v < 0.0 {
            0.0
        } else {
            r_dot_v.powf(self.config.shininess)
        }
    }

    /// True when any primitive sits between `point` and the light.
    fn in_shadow(&self, point: Vec3, light_dir: Vec3, light_distance: f32) -> bool {
        let shadow = Ray::new(point, light_dir);
        self.scene
            .closest_hit_within(&shadow, Interval::new(HIT_EPSILON, light_distance))
            .is_some()
    }

    /// The ray leaving a transparent primitive after Snell refraction.
    ///
    /// A ray arriving from outside bends into the volume, crosses to the exit
    /// point on the same primitive and bends back out. Open surfaces have no
    /// exit point, so the bent ray continues from the entry point. A ray
    /// already inside is bent once on the way out. `None` on total internal
    /// reflection.
    fn transmitted_ray(&self, ray: &Ray, hit: &Hit, primitive: &Primitive, index: f32) -> Option<Ray> {
        let shape = &primitive.shape;
        let normal = shape.normal(hit.point);
        let dir = ray.direction();

        if dir.dot(normal) > 0.0 {
            let out = refract(dir, -normal, index)?;
            return Some(Ray::new(hit.point, out));
        }

        let inner = Ray::new(hit.point, refract(dir, normal, 1.0 / index)?);
        let Some(exit_t) = shape.intersect(&inner) else {
            return Some(inner);
        };

        let exit = inner.at(exit_t);
        let exit_normal = shape.normal(exit);
        let out = refract(inner.direction(), -exit_normal, index)?;
        Some(Ray::new(exit, out))
    }
}
