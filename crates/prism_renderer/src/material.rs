//! Surface roles that decide which secondary rays a hit spawns.

use crate::error::{SceneError, SceneResult};
use prism_math::Vec3;

/// Color type alias (RGB values typically 0-1, unclamped while tracing)
pub type Color = Vec3;

/// How a surface interacts with light beyond local Phong shading.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Material {
    /// Local shading only.
    #[default]
    Diffuse,
    /// Adds a mirror bounce scaled by `weight`.
    Reflective { weight: f32 },
    /// Adds the light seen through the volume, bent by Snell's law.
    ///
    /// `index` is the refractive index of the volume relative to the
    /// surrounding medium.
    Refractive { index: f32 },
}

impl Material {
    /// A mirror with the given reflection weight.
    pub fn reflective(weight: f32) -> Self {
        Material::Reflective { weight }
    }

    /// A transparent volume with the given relative refractive index.
    pub fn refractive(index: f32) -> Self {
        Material::Refractive { index }
    }

    /// Reject weights outside [0, 1] and non-physical indices.
    pub fn validate(&self) -> SceneResult<()> {
        match *self {
            Material::Diffuse => Ok(()),
            Material::Reflective { weight } => {
                if (0.0..=1.0).contains(&weight) {
                    Ok(())
                } else {
                    Err(SceneError::InvalidReflectionWeight(weight))
                }
            }
            Material::Refractive { index } => {
                if index.is_finite() && index > 0.0 {
                    Ok(())
                } else {
                    Err(SceneError::InvalidRefractiveIndex(index))
                }
            }
        }
    }
}
