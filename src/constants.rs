pub const WINDOW_WIDTH: usize = 960;
pub const WINDOW_HEIGHT: usize = 540;
pub const BUFFER_WIDTH: usize = 480;
pub const BUFFER_HEIGHT: usize = 270;

pub const GAMMA: f32 = 2.2;

/// Hard ceiling on reflection bounces, enforced even when the configured
/// limit asks for more.
pub const MAX_BOUNCES: u32 = 8;

/// Reflection bounces requested by the demo renderer.
pub const BOUNCE_LIMIT: i32 = 3;

/// Offset applied to spawned ray origins so shadow and reflection rays do
/// not re-intersect the surface they start on.
pub const RAY_BIAS: f32 = 1e-3;

pub const MOUSE_SENSITIVITY: f32 = 0.2;
pub const MOVE_SPEED: f32 = 0.15;
