//! Frame driver.
//!
//! Walks every cell of the camera's view grid, traces one primary ray per
//! cell and collects the linear colors into an [`ImageBuffer`]. Colors stay
//! unclamped until they are converted to bytes.

use std::path::Path;
use std::time::Instant;

use crate::{Camera, Color, Scene, Tracer};
use prism_math::Interval;

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Maximum depth for mirror bounces
    pub max_depth: u32,
    /// Maximum depth for rays passing through transparent primitives
    pub max_refraction_depth: u32,
    /// Phong exponent of the specular highlight
    pub shininess: f32,
    /// Color returned when a ray hits nothing
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 8,
            max_refraction_depth: 16,
            shininess: 50.0,
            background: Color::ZERO,
        }
    }
}

/// Clamp a value to [0, 1] range.
#[inline]
pub fn clamp_01(x: f32) -> f32 {
    Interval::UNIT.clamp(x)
}

/// Convert a linear color to 8-bit RGBA.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let r = (255.0 * clamp_01(color.x)) as u8;
    let g = (255.0 * clamp_01(color.y)) as u8;
    let b = (255.0 * clamp_01(color.z)) as u8;
    [r, g, b, 255]
}

/// Simple image buffer for storing render output.
///
/// Row-major, row 0 at the top.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Offset of pixel (x, y) in `pixels`, computed in `usize` so large
    /// grids do not overflow.
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Convert to RGBA bytes (for display or saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }

    /// Write the buffer as a PNG file.
    pub fn save(&self, path: impl AsRef<Path>) -> image::ImageResult<()> {
        let path = path.as_ref();
        image::save_buffer(
            path,
            &self.to_rgba(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
        )?;
        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}

/// Render the whole view grid to an image buffer.
///
/// Cell (i, j) counts up from the bottom-left of the view, so j is flipped
/// when stored.
pub fn render(scene: &Scene, camera: &Camera, config: &RenderConfig) -> ImageBuffer {
    let n = camera.divisions;
    let mut image = ImageBuffer::new(n, n);
    let tracer = Tracer::new(scene, config);

    log::info!(
        "Rendering {}x{} cells, {} primitives, max depth {} (refraction {})",
        n,
        n,
        scene.len(),
        config.max_depth,
        config.max_refraction_depth
    );
    let start = Instant::now();

    for j in 0..n {
        for i in 0..n {
            let ray = camera.ray_for_cell(i, j);
            image.set(i, n - 1 - j, tracer.trace(&ray, 1));
        }
    }

    log::info!("Render finished in {:.2}s", start.elapsed().as_secs_f32());
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Light, Primitive, Sphere, Vec3};

    #[test]
    fn test_color_to_rgba_clamps() {
        assert_eq!(color_to_rgba(Color::new(0.0, 1.0, 2.5)), [0, 255, 255, 255]);
        assert_eq!(color_to_rgba(Color::new(-1.0, 0.5, 1.0)), [0, 127, 255, 255]);
    }

    #[test]
    fn test_image_buffer_set_get() {
        let mut image = ImageBuffer::new(3, 2);
        image.set(2, 1, Color::ONE);

        assert_eq!(image.get(2, 1), Color::ONE);
        assert_eq!(image.get(0, 0), Color::ZERO);
        assert_eq!(image.pixels[5], Color::ONE);

        let bytes = image.to_rgba();
        assert_eq!(bytes.len(), 3 * 2 * 4);
        assert_eq!(&bytes[20..24], &[255, 255, 255, 255]);
        assert_eq!(&bytes[0..4], &[0, 0, 0, 255]);
    }

    #[test]
    fn test_index_does_not_overflow_u32() {
        // Only the dimensions matter for the offset; no pixels are needed.
        let image = ImageBuffer {
            width: 70_000,
            height: 70_000,
            pixels: Vec::new(),
        };
        assert_eq!(image.index(69_999, 69_999), 70_000 * 70_000 - 1);
        assert_eq!(image.index(5, 1), 70_005);
    }

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.max_depth, 8);
        assert_eq!(config.max_refraction_depth, 2 * config.max_depth);
        assert_eq!(config.shininess, 50.0);
        assert_eq!(config.background, Color::ZERO);
    }

    #[test]
    fn test_render_upper_half_is_flipped_to_top_rows() {
        // A sphere above the view center only shows up in the top rows.
        let sphere = Sphere::new(Vec3::new(0.0, 6.0, -40.0), 3.0, Color::ONE).unwrap();
        let scene = Scene::builder()
            .add(Primitive::diffuse(sphere))
            .light(Light::new(Vec3::new(0.0, 0.0, 10.0)))
            .build()
            .unwrap();
        let camera = Camera::new().with_divisions(20);
        let image = render(&scene, &camera, &RenderConfig::default());

        assert_eq!((image.width, image.height), (20, 20));
        // View spans y in [-10, 10]; the sphere covers y in [3, 9] at the image plane.
        assert_ne!(image.get(10, 3), Color::ZERO);
        assert_eq!(image.get(10, 16), Color::ZERO);
    }

    #[test]
    fn test_empty_scene_renders_background() {
        let config = RenderConfig {
            background: Color::new(0.25, 0.5, 0.75),
            ..Default::default()
        };
        let camera = Camera::new().with_divisions(8);
        let image = render(&Scene::empty(), &camera, &config);

        assert!(image.pixels.iter().all(|&c| c == config.background));
    }

    #[test]
    fn test_side_lit_sphere_has_dark_side() {
        // Light to the right: the left half of the sphere is ambient only.
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -40.0), 5.0, Color::ONE).unwrap();
        let scene = Scene::builder()
            .add(Primitive::diffuse(sphere))
            .light(Light::new(Vec3::new(40.0, 0.0, 0.0)))
            .build()
            .unwrap();
        let camera = Camera::new().with_divisions(21);
        let image = render(&scene, &camera, &RenderConfig::default());

        let center = image.get(10, 10);
        let left = image.get(5, 10);
        assert!((left - Color::splat(0.2)).length() < 1e-5, "left={left}");
        assert!(center.x > left.x + 0.05, "center={center}");
    }
}
