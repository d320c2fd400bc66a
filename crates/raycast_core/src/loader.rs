//! JSON scene files.
//!
//! A scene file lists the light, the spheres in scan order and, optionally,
//! the camera placement:
//!
//! ```json
//! {
//!   "light": [0.0, 5.0, 1.0],
//!   "spheres": [
//!     { "center": [0.0, -1.0, 3.0], "radius": 1.0, "color": [255.0, 0.0, 0.0] }
//!   ],
//!   "camera": { "origin": [0.0, 0.0, 0.0], "fov_degrees": 60.0 }
//! }
//! ```

use std::fs;
use std::path::Path;

use raycast_math::Vec3;
use serde::Deserialize;

use crate::scene::{CameraSettings, Scene, SceneResult, Sphere};

/// On-disk layout, before validation.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSceneFile {
    light: Vec3,
    #[serde(default)]
    spheres: Vec<Sphere>,
    #[serde(default)]
    camera: CameraSettings,
}

/// A validated scene plus the camera settings found in its file.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneFile {
    pub scene: Scene,
    pub camera: CameraSettings,
}

impl Default for SceneFile {
    fn default() -> Self {
        Self {
            scene: Scene::default_scene(),
            camera: CameraSettings::default(),
        }
    }
}

/// Load and validate a scene from a JSON file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<SceneFile> {
    let path = path.as_ref();
    log::info!("Loading scene: {}", path.display());

    let contents = fs::read_to_string(path)?;
    load_scene_from_str(&contents)
}

/// Parse and validate a scene from a JSON string.
pub fn load_scene_from_str(contents: &str) -> SceneResult<SceneFile> {
    let raw: RawSceneFile = serde_json::from_str(contents)?;
    let scene = Scene::with_spheres(raw.light, raw.spheres)?;

    if scene.is_empty() {
        log::warn!("Scene has no spheres; every pixel will be background");
    }
    log::debug!(
        "Parsed scene: {} spheres, light at {:?}, camera at {:?} (fov {} deg)",
        scene.sphere_count(),
        scene.light(),
        raw.camera.origin,
        raw.camera.fov_degrees
    );

    Ok(SceneFile {
        scene,
        camera: raw.camera,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SceneError;

    const TWO_SPHERES: &str = r#"{
        "light": [0.0, 5.0, 1.0],
        "spheres": [
            { "center": [0.0, -1.0, 3.0], "radius": 1.0, "color": [255.0, 0.0, 0.0] },
            { "center": [2.0, 0.0, 4.0], "radius": 0.5, "color": [0.0, 0.0, 255.0] }
        ],
        "camera": { "origin": [0.0, 1.0, -2.0], "fov_degrees": 45.0 }
    }"#;

    #[test]
    fn test_load_scene_from_str() {
        let file = load_scene_from_str(TWO_SPHERES).unwrap();

        assert_eq!(file.scene.sphere_count(), 2);
        assert_eq!(file.scene.light(), Vec3::new(0.0, 5.0, 1.0));
        assert_eq!(file.scene.spheres()[1].radius(), 0.5);
        assert_eq!(file.camera.origin, Vec3::new(0.0, 1.0, -2.0));
        assert_eq!(file.camera.fov_degrees, 45.0);
    }

    #[test]
    fn test_camera_is_optional() {
        let file = load_scene_from_str(r#"{ "light": [1.0, 2.0, 3.0], "spheres": [] }"#).unwrap();
        assert!(file.scene.is_empty());
        assert_eq!(file.camera, CameraSettings::default());

        // Partial camera blocks fall back field by field
        let file = load_scene_from_str(r#"{ "light": [0, 0, 0], "camera": { "fov_degrees": 90 } }"#)
            .unwrap();
        assert_eq!(file.camera.origin, Vec3::ZERO);
        assert_eq!(file.camera.fov_degrees, 90.0);
    }

    #[test]
    fn test_invalid_radius_rejected() {
        let json = r#"{
            "light": [0, 0, 0],
            "spheres": [{ "center": [0, 0, 3], "radius": -1.0, "color": [1, 1, 1] }]
        }"#;
        let err = load_scene_from_str(json).unwrap_err();
        assert!(matches!(err, SceneError::InvalidRadius { index: 0, .. }));
    }

    #[test]
    fn test_negative_color_rejected() {
        let json = r#"{
            "light": [0, 0, 0],
            "spheres": [
                { "center": [0, 0, 3], "radius": 1.0, "color": [1, 1, 1] },
                { "center": [0, 0, 5], "radius": 1.0, "color": [0, -20, 0] }
            ]
        }"#;
        let err = load_scene_from_str(json).unwrap_err();
        assert!(matches!(err, SceneError::NegativeColor { index: 1, .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = load_scene_from_str(r#"{ "light": [0, 0] }"#).unwrap_err();
        assert!(matches!(err, SceneError::Json(_)));

        let err = load_scene_from_str(r#"{ "light": [0, 0, 0], "lights": [] }"#).unwrap_err();
        assert!(matches!(err, SceneError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = load_scene("does/not/exist.json").unwrap_err();
        assert!(matches!(err, SceneError::Io(_)));
    }

    #[test]
    fn test_bundled_scene_matches_builtin() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../scenes/three_spheres.json");
        let file = load_scene(path).unwrap();
        assert_eq!(file, SceneFile::default());
    }

    #[test]
    fn test_scene_file_default() {
        let file = SceneFile::default();
        assert_eq!(file.scene, Scene::default_scene());
        assert_eq!(file.camera.fov_degrees, 60.0);
    }
}
