//! Ray-sphere intersection.

use crate::{hittable::Hittable, Ray, Sphere};
use raycast_math::Interval;

impl Hittable for Sphere {
    /// Solve |origin + t*dir - center|^2 = r^2 and report the smaller root.
    ///
    /// Only the smaller root is considered. A ray starting inside the sphere
    /// has a non-positive smaller root and therefore reports no hit, even
    /// though the larger root lies in front of it.
    fn hit(&self, ray: &Ray) -> Option<f32> {
        let oc = ray.origin() - self.center();
        let a = ray.direction().dot(ray.direction());
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.dot(oc) - self.radius() * self.radius();

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let t0 = (-b - sqrtd) / (2.0 * a);
        let t1 = (-b + sqrtd) / (2.0 * a);
        let t = t0.min(t1);

        Interval::POSITIVE.surrounds(t).then_some(t)
    }
}
