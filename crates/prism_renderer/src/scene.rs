//! The ordered primitive list a frame is traced against.

use crate::error::SceneResult;
use crate::hittable::{ensure_finite, Hit, Hittable, HIT_EPSILON};
use crate::{Color, Primitive};
use prism_math::{Interval, Ray, Vec3};

/// A point light with a constant ambient term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    /// Ambient light color, multiplied with the surface color everywhere
    pub ambient: Color,
    /// Color of specular highlights
    pub specular: Color,
}

impl Light {
    /// White point light at `position` with the default ambient level.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: Vec3::new(10.0, 40.0, -3.0),
            ambient: Color::splat(0.2),
            specular: Color::ONE,
        }
    }
}

/// An immutable scene: primitives in insertion order plus one light.
///
/// Insertion order matters: among equidistant hits the earliest primitive
/// wins.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    primitives: Vec<Primitive>,
    light: Light,
}

impl Scene {
    /// Start building a scene.
    pub fn builder() -> SceneBuilder {
        SceneBuilder::default()
    }

    /// A scene with no primitives under the default light.
    pub fn empty() -> Self {
        Self {
            primitives: Vec::new(),
            light: Light::default(),
        }
    }

    pub fn light(&self) -> &Light {
        &self.light
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Primitive at `index`, as reported by a [`Hit`].
    pub fn get(&self, index: usize) -> Option<&Primitive> {
        self.primitives.get(index)
    }

    /// Get the number of primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Closest primitive in front of the ray origin.
    pub fn closest_hit(&self, ray: &Ray) -> Option<Hit> {
        self.closest_hit_within(ray, Interval::beyond(HIT_EPSILON))
    }

    /// Closest primitive whose hit distance lies strictly inside `ray_t`.
    pub fn closest_hit_within(&self, ray: &Ray, ray_t: Interval) -> Option<Hit> {
        let mut closest: Option<(usize, f32)> = None;
        let mut closest_so_far = ray_t.max;

        for (index, primitive) in self.primitives.iter().enumerate() {
            if let Some(t) = primitive.shape.intersect(ray) {
                if Interval::new(ray_t.min, closest_so_far).surrounds(t) {
                    closest_so_far = t;
                    closest = Some((index, t));
                }
            }
        }

        closest.map(|(index, t)| Hit {
            index,
            t,
            point: ray.at(t),
        })
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::empty()
    }
}

/// Collects primitives and validates them into a [`Scene`].
#[derive(Debug, Default)]
pub struct SceneBuilder {
    primitives: Vec<Primitive>,
    light: Light,
}

impl SceneBuilder {
    /// Add a primitive. Order is preserved.
    pub fn add(mut self, primitive: Primitive) -> Self {
        self.primitives.push(primitive);
        self
    }

    /// Add every primitive from `primitives`, in order.
    pub fn extend(mut self, primitives: impl IntoIterator<Item = Primitive>) -> Self {
        self.primitives.extend(primitives);
        self
    }

    /// Set the light.
    pub fn light(mut self, light: Light) -> Self {
        self.light = light;
        self
    }

    /// Validate the collected data and freeze it.
    pub fn build(self) -> SceneResult<Scene> {
        ensure_finite("light", &[self.light.position, self.light.ambient, self.light.specular])?;
        for primitive in &self.primitives {
            primitive.material.validate()?;
        }

        log::debug!("Built scene with {} primitives", self.primitives.len());

        Ok(Scene {
            primitives: self.primitives,
            light: self.light,
        })
    }
}
