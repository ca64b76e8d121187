//! Scene validation errors.

use thiserror::Error;

/// Errors raised while building a scene.
///
/// Tracing itself never fails: degenerate rays are misses. Only malformed
/// scene data is rejected, and it is rejected up front.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("{shape} radius must be positive and finite, got {radius}")]
    InvalidRadius { shape: &'static str, radius: f32 },

    #[error("{shape} height must be positive and finite, got {height}")]
    InvalidHeight { shape: &'static str, height: f32 },

    #[error("{0} has a non-finite coordinate")]
    NonFinite(&'static str),

    #[error("triangle vertices are collinear")]
    DegenerateTriangle,

    #[error("quad vertices do not span an area")]
    DegenerateQuad,

    #[error("quad vertices are not coplanar (off-plane distance {0})")]
    NonPlanarQuad(f32),

    #[error("checker cell size must be positive and finite, got {0}")]
    InvalidCellSize(f32),

    #[error("reflection weight must lie in [0, 1], got {0}")]
    InvalidReflectionWeight(f32),

    #[error("refractive index must be positive and finite, got {0}")]
    InvalidRefractiveIndex(f32),
}

pub type SceneResult<T> = Result<T, SceneError>;
