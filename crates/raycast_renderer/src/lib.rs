//! Raycast Renderer - CPU ray casting for sphere scenes.
//!
//! One primary ray per pixel, nearest-hit selection over a linear scan of
//! the scene, and Lambertian shading from a single point light. No
//! recursion, shadows or anti-aliasing.

mod bucket;
mod camera;
mod error;
mod hittable;
mod output;
mod renderer;
mod sphere;

pub use bucket::{generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use error::{RenderError, RenderResult};
pub use hittable::{closest_hit, HitRecord, Hittable};
pub use output::{save_image, write_ppm};
pub use renderer::{
    clamp_channel, color_to_rgb, render, render_pixel, render_sequential, trace, Color, ImageBuffer,
    RenderConfig, BACKGROUND,
};

/// Re-export scene types from raycast_core
pub use raycast_core::{Scene, Sphere};

/// Re-export Vec3 and common math types from raycast_math
pub use raycast_math::{Interval, Ray, Vec3};
