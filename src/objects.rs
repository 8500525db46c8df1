use crate::material::Material;
use crate::ray::Ray;
use crate::vec3::Vec3;

/// Transient record for the closest surface a ray touched.
#[derive(Clone, Copy)]
pub struct HitInfo {
    pub t: f32,
    pub position: Vec3,
    pub normal: Vec3,
    pub material: Material,
}

pub struct PointLight {
    pub position: Vec3,
    pub intensity: Vec3,
}

pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    /// Smallest strictly positive root of the ray/sphere quadratic.
    ///
    /// Only the near root is considered: a ray starting on or inside the
    /// sphere misses it. Degenerate input (zero-length direction,
    /// non-positive radius) produces no intersection.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        if self.radius <= 0.0 {
            return None;
        }
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        if a == 0.0 {
            return None;
        }
        let b = 2.0 * oc.dot(ray.direction);
        let c = oc.dot(oc) - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }
        let t = (-b - discriminant.sqrt()) / (2.0 * a);
        if t <= 0.0 {
            return None;
        }
        Some(t)
    }
}
