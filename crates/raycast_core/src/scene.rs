//! Scene types for the ray caster.
//!
//! A scene is an ordered list of opaque spheres lit by a single point light.
//! It is validated once when built and treated as read-only while rendering.

use raycast_math::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while building or loading a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Sphere {index} has invalid radius {radius} (must be positive)")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("Sphere {index} has negative color {color:?} (channels must be >= 0)")]
    NegativeColor { index: usize, color: Vec3 },

    #[error("Non-finite value in {0}")]
    NonFinite(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene file error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// An opaque sphere with a flat diffuse color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    /// RGB, 0-255 per channel
    color: Vec3,
}

impl Sphere {
    /// Create a new sphere. Validation happens when it is added to a [`Scene`].
    pub fn new(center: Vec3, radius: f32, color: Vec3) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn color(&self) -> Vec3 {
        self.color
    }

    fn validate(&self, index: usize) -> SceneResult<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(SceneError::InvalidRadius {
                index,
                radius: self.radius,
            });
        }
        if !self.center.is_finite() {
            return Err(SceneError::NonFinite(format!("center of sphere {}", index)));
        }
        if !self.color.is_finite() {
            return Err(SceneError::NonFinite(format!("color of sphere {}", index)));
        }
        if self.color.min_element() < 0.0 {
            return Err(SceneError::NegativeColor {
                index,
                color: self.color,
            });
        }
        Ok(())
    }
}

/// Camera placement stored alongside a scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Camera position in world space
    pub origin: Vec3,
    /// Field of view in degrees
    pub fov_degrees: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            fov_degrees: 60.0,
        }
    }
}

/// A complete scene: spheres in scan order plus one point light.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    spheres: Vec<Sphere>,
    light: Vec3,
}

impl Scene {
    /// Create an empty scene lit from `light`.
    pub fn new(light: Vec3) -> SceneResult<Self> {
        if !light.is_finite() {
            return Err(SceneError::NonFinite("light position".to_string()));
        }
        Ok(Self {
            spheres: Vec::new(),
            light,
        })
    }

    /// Create a scene from a list of spheres, validating each one.
    pub fn with_spheres(light: Vec3, spheres: impl IntoIterator<Item = Sphere>) -> SceneResult<Self> {
        let mut scene = Self::new(light)?;
        for sphere in spheres {
            scene.add_sphere(sphere)?;
        }
        Ok(scene)
    }

    /// Append a sphere and return its index in scan order.
    pub fn add_sphere(&mut self, sphere: Sphere) -> SceneResult<usize> {
        let index = self.spheres.len();
        sphere.validate(index)?;
        self.spheres.push(sphere);
        Ok(index)
    }

    /// Spheres in insertion order.
    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    /// Point light position.
    pub fn light(&self) -> Vec3 {
        self.light
    }

    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    /// The built-in scene: red, blue and green unit spheres lit from above.
    pub fn default_scene() -> Self {
        Self {
            spheres: vec![
                Sphere::new(Vec3::new(0.0, -1.0, 3.0), 1.0, Vec3::new(255.0, 0.0, 0.0)),
                Sphere::new(Vec3::new(2.0, 0.0, 4.0), 1.0, Vec3::new(0.0, 0.0, 255.0)),
                Sphere::new(Vec3::new(-2.0, 0.0, 4.0), 1.0, Vec3::new(0.0, 255.0, 0.0)),
            ],
            light: Vec3::new(0.0, 5.0, 1.0),
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::default_scene()
    }
}
