//! Camera for primary ray generation.
//!
//! A pinhole camera fixed at `origin`, looking down +Z with +Y up. There is
//! no orientation: pixel coordinates map straight to directions through
//! normalized device coordinates.

use crate::{Ray, RenderError, RenderResult};
use raycast_math::Vec3;
use std::f32::consts::PI;

/// Camera for generating one ray per pixel.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    // Camera positioning
    origin: Vec3,

    // Lens settings
    fov: f32, // Field of view in radians
}

impl Camera {
    /// Create a new camera with default settings (800x600, 60 degree fov, at the origin).
    pub fn new() -> Self {
        Self {
            image_width: 800,
            image_height: 600,
            origin: Vec3::ZERO,
            fov: PI / 3.0,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set the camera position.
    pub fn with_origin(mut self, origin: Vec3) -> Self {
        self.origin = origin;
        self
    }

    /// Set the field of view in radians.
    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self
    }

    /// Set the field of view in degrees.
    pub fn with_fov_degrees(self, degrees: f32) -> Self {
        self.with_fov(degrees.to_radians())
    }

    /// Validate resolution and field of view.
    ///
    /// Call before rendering; ray generation itself does not check.
    pub fn initialize(&mut self) -> RenderResult<()> {
        if self.image_width == 0 || self.image_height == 0 {
            return Err(RenderError::InvalidResolution {
                width: self.image_width,
                height: self.image_height,
            });
        }
        if !(self.fov > 0.0 && self.fov < PI) {
            return Err(RenderError::InvalidFov(self.fov));
        }
        Ok(())
    }

    /// Camera position in world space.
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Field of view in radians.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Unit direction through the center of pixel (x, y).
    ///
    /// The projection is evaluated in f64 from the current settings and
    /// rounded to f32 once; only the final normalization runs in f32.
    /// Raster y grows downwards, world y grows upwards, hence the sign flip.
    pub fn ray_direction(&self, x: u32, y: u32) -> Vec3 {
        let width = self.image_width as f64;
        let height = self.image_height as f64;
        let fov_scale = (self.fov as f64 / 2.0).tan();

        let ndc_x = 2.0 * (x as f64 + 0.5) / width - 1.0;
        let ndc_y = 2.0 * (y as f64 + 0.5) / height - 1.0;

        let px = ndc_x * fov_scale * width / height;
        let py = -ndc_y * fov_scale;

        Vec3::new(px as f32, py as f32, 1.0).normalize()
    }

    /// Generate the primary ray for pixel (x, y).
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        Ray::new(self.origin, self.ray_direction(x, y))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
