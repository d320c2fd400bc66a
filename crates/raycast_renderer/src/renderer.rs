//! Core ray casting renderer.
//!
//! Implements single-bounce direct lighting:
//! - One primary ray per pixel
//! - Nearest-hit selection over every sphere in scene order
//! - Lambertian shading from a single point light, no shadows

use crate::bucket::render_parallel;
use crate::{closest_hit, Camera, Ray, Scene};
use raycast_math::{Interval, Vec3};
use std::time::Instant;

/// RGB color, 0-255 per channel but unclamped until output.
pub type Color = Vec3;

/// Color returned for rays that hit nothing (dark gray).
pub const BACKGROUND: Color = Color::new(30.0, 30.0, 30.0);

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Background color when ray doesn't hit anything
    pub background: Color,
    /// Render buckets on the rayon thread pool instead of a single raster loop
    pub parallel: bool,
    /// Bucket edge length in pixels for parallel rendering
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: BACKGROUND,
            parallel: false,
            bucket_size: crate::DEFAULT_BUCKET_SIZE,
        }
    }
}

/// Compute the color seen by a ray.
///
/// Returns the background if nothing is hit, otherwise the hit sphere's
/// color scaled by `max(0, normal . light_dir)`. No distance falloff,
/// ambient term or shadow test, and no clamping.
pub fn trace(ray: &Ray, scene: &Scene, config: &RenderConfig) -> Color {
    let Some(rec) = closest_hit(ray, scene.spheres()) else {
        return config.background;
    };

    let light_dir = (scene.light() - rec.p).normalize();
    let diffuse = rec.normal.dot(light_dir).max(0.0);

    rec.sphere.color() * diffuse
}

/// Clamp a channel to [0, 255] and truncate towards zero.
#[inline]
pub fn clamp_channel(c: f32) -> u8 {
    Interval::CHANNEL.clamp(c) as u8
}

/// Convert a color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    [
        clamp_channel(color.x),
        clamp_channel(color.y),
        clamp_channel(color.z),
    ]
}

/// Render a single pixel.
pub fn render_pixel(camera: &Camera, scene: &Scene, x: u32, y: u32, config: &RenderConfig) -> Color {
    let ray = camera.get_ray(x, y);
    trace(&ray, scene, config)
}

/// Simple image buffer for storing render output.
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

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Convert to clamped RGB bytes in raster order.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }
}

/// Render the scene one pixel at a time in raster order.
pub fn render_sequential(camera: &Camera, scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);

    for y in 0..camera.image_height {
        for x in 0..camera.image_width {
            let color = render_pixel(camera, scene, x, y, config);
            image.set(x, y, color);
        }
    }

    image
}

/// Render the entire scene to an image buffer.
///
/// Uses the bucketed parallel path when `config.parallel` is set; both
/// paths produce identical pixels.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    log::info!(
        "Rendering {}x{} ({} spheres, {})",
        camera.image_width,
        camera.image_height,
        scene.sphere_count(),
        if config.parallel { "parallel" } else { "sequential" }
    );

    let start = Instant::now();
    let image = if config.parallel {
        render_parallel(camera, scene, config)
    } else {
        render_sequential(camera, scene, config)
    };
    log::info!("Rendered in {:?}", start.elapsed());

    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sphere;
    use std::f32::consts::PI;

    fn default_camera() -> Camera {
        let mut camera = Camera::new().with_resolution(800, 600).with_fov(PI / 3.0);
        camera.initialize().unwrap();
        camera
    }

    #[test]
    fn test_center_pixel_hits_red_sphere() {
        let scene = Scene::default_scene();
        let config = RenderConfig::default();

        let color = render_pixel(&default_camera(), &scene, 400, 300, &config);

        assert!(color.x > 0.0, "red channel should be lit, got {:?}", color);
        assert_eq!(color.y, 0.0);
        assert_eq!(color.z, 0.0);

        let rgb = color_to_rgb(color);
        assert!(rgb[0] > 0);
        assert_eq!((rgb[1], rgb[2]), (0, 0));
    }

    #[test]
    fn test_miss_returns_background() {
        let scene = Scene::default_scene();
        let config = RenderConfig::default();

        // Straight up: nothing there
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert_eq!(trace(&ray, &scene, &config), Color::new(30.0, 30.0, 30.0));

        // Empty scene: every ray is background
        let empty = Scene::new(Vec3::new(0.0, 5.0, 1.0)).unwrap();
        assert_eq!(trace(&Ray::new(Vec3::ZERO, Vec3::Z), &empty, &config), BACKGROUND);
    }

    #[test]
    fn test_lambert_shading() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 3.0), 1.0, Vec3::new(200.0, 100.0, 50.0));
        let config = RenderConfig::default();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        // Light straight back along the ray: normal . light_dir = 1
        let facing = Scene::with_spheres(Vec3::new(0.0, 0.0, -10.0), [sphere]).unwrap();
        let color = trace(&ray, &facing, &config);
        assert!((color - Vec3::new(200.0, 100.0, 50.0)).length() < 1e-3);

        // Light behind the sphere: no shadow rays, but the lit side faces away
        let behind = Scene::with_spheres(Vec3::new(0.0, 0.0, 10.0), [sphere]).unwrap();
        assert_eq!(trace(&ray, &behind, &config), Color::ZERO);

        // Light at 60 degrees off the normal: cos = 0.5
        let hit = Vec3::new(0.0, 0.0, 2.0);
        let light = hit + Vec3::new(0.0, (PI / 3.0).sin(), -(PI / 3.0).cos()) * 4.0;
        let angled = Scene::with_spheres(light, [sphere]).unwrap();
        let color = trace(&ray, &angled, &config);
        assert!((color - Vec3::new(100.0, 50.0, 25.0)).length() < 1e-2, "{:?}", color);
    }

    #[test]
    fn test_no_shadow_occlusion() {
        // A second sphere sits between the hit point and the light, but
        // shading ignores it.
        let lit = Sphere::new(Vec3::new(0.0, 0.0, 3.0), 1.0, Vec3::new(255.0, 255.0, 255.0));
        let blocker = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 0.5, Vec3::ONE);
        let config = RenderConfig::default();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let open = Scene::with_spheres(Vec3::new(0.0, 0.0, -10.0), [lit]).unwrap();
        let blocked = Scene::with_spheres(Vec3::new(0.0, 0.0, -10.0), [lit, blocker]).unwrap();

        assert_eq!(trace(&ray, &open, &config), trace(&ray, &blocked, &config));
    }

    #[test]
    fn test_trace_is_deterministic() {
        let scene = Scene::default_scene();
        let config = RenderConfig::default();
        let camera = default_camera();

        for (x, y) in [(400, 300), (200, 310), (600, 310), (10, 10)] {
            let ray = camera.get_ray(x, y);
            let a = trace(&ray, &scene, &config);
            let b = trace(&ray, &scene, &config);
            assert_eq!(a.to_array().map(f32::to_bits), b.to_array().map(f32::to_bits));
        }
    }

    #[test]
    fn test_clamp_channel() {
        assert_eq!(clamp_channel(-10.0), 0);
        assert_eq!(clamp_channel(0.0), 0);
        assert_eq!(clamp_channel(0.99), 0);
        assert_eq!(clamp_channel(127.9), 127);
        assert_eq!(clamp_channel(255.0), 255);
        assert_eq!(clamp_channel(300.0), 255);
        assert_eq!(clamp_channel(f32::INFINITY), 255);
        assert_eq!(clamp_channel(f32::NEG_INFINITY), 0);

        assert_eq!(color_to_rgb(Color::new(-1.0, 30.5, 1e6)), [0, 30, 255]);
    }

    #[test]
    fn test_image_buffer() {
        let mut image = ImageBuffer::new(3, 2);
        assert_eq!(image.pixels.len(), 6);

        image.set(2, 1, Color::new(300.0, 12.7, -4.0));
        assert_eq!(image.get(2, 1), Color::new(300.0, 12.7, -4.0));

        let bytes = image.to_rgb8();
        assert_eq!(bytes.len(), 18);
        assert_eq!(&bytes[15..], &[255, 12, 0]);
    }

    #[test]
    fn test_render_small_image() {
        let mut camera = Camera::new().with_resolution(16, 12);
        camera.initialize().unwrap();
        let scene = Scene::default_scene();
        let config = RenderConfig::default();

        let image = render(&camera, &scene, &config);

        assert_eq!(image.width, 16);
        assert_eq!(image.height, 12);
        // Corners see the background, the middle sees the red sphere
        assert_eq!(image.get(0, 0), BACKGROUND);
        assert_eq!(image.get(15, 0), BACKGROUND);
        assert!(image.get(8, 6).x > 0.0);
    }
}
