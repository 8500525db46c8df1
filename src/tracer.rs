use crate::constants::{MAX_BOUNCES, RAY_BIAS};
use crate::material::Material;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::vec3::Vec3;

/// Blinn shading at a surface point, summed over every unoccluded light.
/// Output is non-negative and unclamped; tone mapping happens downstream.
pub fn shade(material: &Material, position: Vec3, normal: Vec3, view: Vec3, scene: &Scene) -> Vec3 {
    let mut color = Vec3::new(0.0, 0.0, 0.0);
    for light in &scene.lights {
        let to_light = light.position - position;
        let light_dist = to_light.len();
        let light_dir = to_light * (1.0 / light_dist);

        // Shadow ray starts off the surface so it cannot hit its own sphere.
        let shadow_ray = Ray::new(position + normal * RAY_BIAS, light_dir);
        if let Some(occluder) = scene.intersect(&shadow_ray) {
            if occluder.t < light_dist {
                continue;
            }
        }

        let n_dot_l = normal.dot(light_dir).max(0.0);
        let half = (light_dir + view).normalize();
        let n_dot_h = normal.dot(half).max(0.0);

        let diffuse = material.diffuse * n_dot_l;
        let specular = material.specular * n_dot_h.powf(material.shininess);
        color = color + (diffuse + specular).mul_vec(light.intensity);
    }
    color
}

/// Traces `ray` through `scene`, following up to `bounce_limit` specular
/// reflections. Returns the accumulated color and whether the primary ray
/// hit any sphere.
pub fn trace_ray(ray: &Ray, scene: &Scene, bounce_limit: i32) -> (Vec3, bool) {
    let Some(mut hit) = scene.intersect(ray) else {
        return (scene.environment.sample(ray.direction), false);
    };

    let mut current_ray = *ray;
    let view = (-current_ray.direction).normalize();
    let mut color = shade(&hit.material, hit.position, hit.normal, view, scene);

    // Negative limits mean no reflections; MAX_BOUNCES caps misconfigured
    // ones.
    let limit = (bounce_limit.max(0) as u32).min(MAX_BOUNCES);
    let mut bounce = 0;
    while bounce < limit {
        if !hit.material.is_reflective() {
            break;
        }

        let d = current_ray.direction;
        let reflect_dir = (d - 2.0 * d.dot(hit.normal) * hit.normal).normalize();
        let reflected = Ray::new(hit.position + reflect_dir * RAY_BIAS, reflect_dir);

        match scene.intersect(&reflected) {
            Some(next) => {
                color = color + shade(&next.material, next.position, next.normal, -reflect_dir, scene);
                hit = next;
                current_ray = reflected;
                bounce += 1;
            }
            None => {
                // The chain escaped: the backdrop arrives tinted by the
                // surface the reflection left from.
                color = color + hit.material.specular.mul_vec(scene.environment.sample(reflect_dir));
                break;
            }
        }
    }

    (color, true)
}
