//! Raycast Core - scene description for the sphere ray caster.
//!
//! This crate provides:
//!
//! - **Scene types**: `Sphere`, `Scene`, `CameraSettings`
//! - **Scene files**: JSON loading with validation
//! - **Built-in scene**: the three-sphere default used when no file is given
//!
//! # Example
//!
//! ```ignore
//! use raycast_core::load_scene;
//!
//! let file = load_scene("scene.json")?;
//! println!("Loaded {} spheres", file.scene.sphere_count());
//! ```

pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, SceneFile};
pub use scene::{CameraSettings, Scene, SceneError, SceneResult, Sphere};
