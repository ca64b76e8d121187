//! Pinhole camera for primary ray generation.

use prism_math::{Ray, Vec3};

/// A pinhole camera looking down -Z through a rectangular view window.
///
/// The window sits `image_distance` in front of the eye and is split into
/// `divisions x divisions` cells, one primary ray per cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Cells per side of the view grid
    pub divisions: u32,
    pub eye: Vec3,
    /// View window width on the image plane
    pub width: f32,
    /// View window height on the image plane
    pub height: f32,
    /// Distance from the eye to the image plane
    pub image_distance: f32,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self {
            divisions: 500,
            eye: Vec3::ZERO,
            width: 20.0,
            height: 20.0,
            image_distance: 40.0,
        }
    }

    /// Set the grid resolution.
    pub fn with_divisions(mut self, divisions: u32) -> Self {
        self.divisions = divisions;
        self
    }

    /// Set the eye position.
    pub fn with_eye(mut self, eye: Vec3) -> Self {
        self.eye = eye;
        self
    }

    /// Set the view window and its distance from the eye.
    pub fn with_view(mut self, width: f32, height: f32, image_distance: f32) -> Self {
        self.width = width;
        self.height = height;
        self.image_distance = image_distance;
        self
    }

    /// Primary ray through the center of cell (i, j).
    ///
    /// `i` runs along +X from the left edge, `j` along +Y from the bottom edge.
    pub fn ray_for_cell(&self, i: u32, j: u32) -> Ray {
        let n = self.divisions.max(1) as f32;
        let cell_x = self.width / n;
        let cell_y = self.height / n;
        let x_min = -0.5 * self.width;
        let y_min = -0.5 * self.height;

        let direction = Vec3::new(
            x_min + (i as f32 + 0.5) * cell_x,
            y_min + (j as f32 + 0.5) * cell_y,
            -self.image_distance,
        );
        Ray::new(self.eye, direction)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let camera = Camera::default();
        assert_eq!(camera.divisions, 500);
        assert_eq!(camera.eye, Vec3::ZERO);
        assert_eq!((camera.width, camera.height), (20.0, 20.0));
        assert_eq!(camera.image_distance, 40.0);
    }

    #[test]
    fn test_corner_cells() {
        let camera = Camera::new().with_divisions(10);

        // Cell size 2, so cell (0, 0) is centered at (-9, -9).
        let ray = camera.ray_for_cell(0, 0);
        let expected = Vec3::new(-9.0, -9.0, -40.0).normalize();
        assert!((ray.direction() - expected).length() < 1e-6);

        let ray = camera.ray_for_cell(9, 9);
        let expected = Vec3::new(9.0, 9.0, -40.0).normalize();
        assert!((ray.direction() - expected).length() < 1e-6);
    }

    #[test]
    fn test_rays_are_normalized_and_start_at_eye() {
        let eye = Vec3::new(1.0, 2.0, 3.0);
        let camera = Camera::new().with_divisions(4).with_eye(eye);

        for j in 0..4 {
            for i in 0..4 {
                let ray = camera.ray_for_cell(i, j);
                assert_eq!(ray.origin(), eye);
                assert!((ray.direction().length() - 1.0).abs() < 1e-6);
                assert!(ray.direction().z < 0.0);
            }
        }
    }

    #[test]
    fn test_with_view() {
        let camera = Camera::new().with_divisions(2).with_view(4.0, 2.0, 1.0);

        let ray = camera.ray_for_cell(1, 0);
        let expected = Vec3::new(1.0, -0.5, -1.0).normalize();
        assert!((ray.direction() - expected).length() < 1e-6);
    }
}
