use crate::constants::{MOUSE_SENSITIVITY, MOVE_SPEED};
use crate::vec3::Vec3;
use minifb::{Key, MouseButton, MouseMode, Window};

/// Free-look camera for the interactive demo. Mouse drag orbits, WASD plus
/// Space/Shift flies.
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    last_mouse: (f32, f32),
}

impl Camera {
    pub fn new(position: Vec3, start_mouse: (f32, f32)) -> Self {
        Self {
            position,
            yaw: -90.0,
            pitch: 0.0,
            last_mouse: start_mouse,
        }
    }

    pub fn update(&mut self, window: &Window) {
        let mouse = window
            .get_mouse_pos(MouseMode::Pass)
            .unwrap_or(self.last_mouse);
        if window.get_mouse_down(MouseButton::Left) {
            let dx = mouse.0 - self.last_mouse.0;
            let dy = mouse.1 - self.last_mouse.1;
            self.yaw += dx * MOUSE_SENSITIVITY;
            self.pitch = (self.pitch - dy * MOUSE_SENSITIVITY).clamp(-89.0, 89.0);
        }
        self.last_mouse = mouse;

        let (forward, right, _) = self.basis();
        let up = Vec3::new(0.0, 1.0, 0.0);
        if window.is_key_down(Key::W) {
            self.position = self.position + forward * MOVE_SPEED;
        }
        if window.is_key_down(Key::S) {
            self.position = self.position - forward * MOVE_SPEED;
        }
        if window.is_key_down(Key::A) {
            self.position = self.position - right * MOVE_SPEED;
        }
        if window.is_key_down(Key::D) {
            self.position = self.position + right * MOVE_SPEED;
        }
        if window.is_key_down(Key::Space) {
            self.position = self.position + up * MOVE_SPEED;
        }
        if window.is_key_down(Key::LeftShift) {
            self.position = self.position - up * MOVE_SPEED;
        }
    }

    /// Orthonormal (forward, right, up) frame for primary ray generation.
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let (rad_yaw, rad_pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        let forward = Vec3::new(
            rad_yaw.cos() * rad_pitch.cos(),
            rad_pitch.sin(),
            rad_yaw.sin() * rad_pitch.cos(),
        )
        .normalize();
        let right = forward.cross(Vec3::new(0.0, 1.0, 0.0)).normalize();
        let up = right.cross(forward).normalize();
        (forward, right, up)
    }
}
