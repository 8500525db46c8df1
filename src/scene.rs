use crate::environment::Environment;
use crate::objects::{HitInfo, PointLight, Sphere};
use crate::ray::Ray;

/// Immutable world the tracer reads: spheres, point lights and a backdrop.
/// No mutation API is exposed, so a scene can be shared freely across the
/// parallel pixel loop.
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub lights: Vec<PointLight>,
    pub environment: Box<dyn Environment>,
}

impl Scene {
    pub fn new(
        spheres: Vec<Sphere>,
        lights: Vec<PointLight>,
        environment: Box<dyn Environment>,
    ) -> Self {
        Scene {
            spheres,
            lights,
            environment,
        }
    }

    /// Closest hit over every sphere. The strict `<` keeps the
    /// earliest-indexed sphere on an exact tie.
    pub fn intersect(&self, ray: &Ray) -> Option<HitInfo> {
        let mut closest_t = f32::MAX;
        let mut closest_hit: Option<HitInfo> = None;
        for sphere in &self.spheres {
            if let Some(t) = sphere.intersect(ray) {
                if t < closest_t {
                    closest_t = t;
                    let position = ray.at(t);
                    closest_hit = Some(HitInfo {
                        t,
                        position,
                        normal: (position - sphere.center).normalize(),
                        material: sphere.material,
                    });
                }
            }
        }
        closest_hit
    }
}
