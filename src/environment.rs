use crate::vec3::Vec3;

/// Backdrop consulted when a ray escapes every sphere in the scene.
/// Implementations must be deterministic in `direction` and never fail.
pub trait Environment: Send + Sync {
    fn sample(&self, direction: Vec3) -> Vec3;
}

/// Uniform backdrop, mostly useful as a test double.
pub struct SolidColor(pub Vec3);

impl Environment for SolidColor {
    fn sample(&self, _direction: Vec3) -> Vec3 {
        self.0
    }
}

/// Vertical gradient blending from `horizon` at the equator to `zenith`
/// straight up.
pub struct GradientSky {
    pub horizon: Vec3,
    pub zenith: Vec3,
}

impl Environment for GradientSky {
    fn sample(&self, direction: Vec3) -> Vec3 {
        let t = 0.5 * (direction.normalize().y + 1.0);
        self.horizon * (1.0 - t) + self.zenith * t
    }
}
