//! Prism renderer - recursive Whitted-style ray tracing
//!
//! Intersects primary rays with a small set of analytic primitives and shades
//! each hit with ambient, diffuse and Phong specular light plus a shadow test.
//! Mirrors and transparent primitives spawn secondary rays up to a bounded
//! depth.

mod error;
mod material;
mod hittable;
mod polygon;
mod sphere;
mod plane;
mod triangle;
mod cylinder;
mod cone;
mod shape;
mod scene;
mod tracer;
mod camera;
mod renderer;

pub use error::{SceneError, SceneResult};
pub use material::{Color, Material};
pub use hittable::{Hit, Hittable, HIT_EPSILON};
pub use sphere::Sphere;
pub use plane::{Checker, Plane};
pub use triangle::Triangle;
pub use cylinder::Cylinder;
pub use cone::Cone;
pub use shape::{Primitive, Shape};
pub use scene::{Light, Scene, SceneBuilder};
pub use tracer::Tracer;
pub use camera::Camera;
pub use renderer::{clamp_01, color_to_rgba, render, ImageBuffer, RenderConfig};

/// Re-export Vec3 and common math types from prism_math
pub use prism_math::{Interval, Ray, Vec3};
