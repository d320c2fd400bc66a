//! Hittable trait and nearest-hit selection.

use crate::{Ray, Sphere};
use raycast_math::Vec3;

/// Trait for shapes that can be hit by rays.
///
/// Spheres are the only implementor. New shape kinds should become variants
/// of a closed enum implementing this trait rather than boxed trait objects.
pub trait Hittable: Send + Sync {
    /// Distance along `ray` to the visible hit, if any.
    ///
    /// Only distances strictly greater than zero count as hits.
    fn hit(&self, ray: &Ray) -> Option<f32>;
}

/// Record of the nearest ray-sphere intersection.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub p: Vec3,
    /// Outward surface normal (unit length)
    pub normal: Vec3,
    /// The sphere that was hit
    pub sphere: &'a Sphere,
}

/// Find the nearest sphere hit by `ray`, scanning in slice order.
///
/// The comparison is strict, so of two spheres at exactly the same distance
/// the earlier one wins.
pub fn closest_hit<'a>(ray: &Ray, spheres: &'a [Sphere]) -> Option<HitRecord<'a>> {
    let mut closest: Option<(f32, &'a Sphere)> = None;

    for sphere in spheres {
        if let Some(t) = sphere.hit(ray) {
            match closest {
                Some((closest_t, _)) if t >= closest_t => {}
                _ => closest = Some((t, sphere)),
            }
        }
    }

    closest.map(|(t, sphere)| {
        let p = ray.at(t);
        HitRecord {
            t,
            p,
            normal: (p - sphere.center()).normalize(),
            sphere,
        }
    })
}
