// Library surface so the demo binary and the tests share the tracing core.

pub mod camera;
pub mod constants;
pub mod environment;
pub mod material;
pub mod objects;
pub mod ray;
pub mod scene;
pub mod tracer;
pub mod vec3;

pub use environment::Environment;
pub use objects::HitInfo;
pub use ray::Ray;
pub use scene::Scene;
pub use tracer::trace_ray;
pub use vec3::Vec3;
