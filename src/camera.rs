use glam::{Mat4, Vec3};
use winit::event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta};
use winit::keyboard::{KeyCode, PhysicalKey};

pub const ORBIT_DRAG_SPEED: f32 = 0.008;
pub const ORBIT_KEY_SPEED: f32 = 1.6;
pub const ZOOM_SPEED: f32 = 0.4;
pub const MIN_DISTANCE: f32 = 2.5;
pub const MAX_DISTANCE: f32 = 25.0;

const FOV_Y: f32 = std::f32::consts::FRAC_PI_3;
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 100.0;
const MAX_PITCH: f32 = 1.5;

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub eye: [f32; 3],
    pub _pad: f32,
}

#[derive(Default, Clone, Copy)]
pub struct OrbitState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub dragging: bool,
}

impl OrbitState {
    const fn to_direction(&self, positive: bool, negative: bool) -> f32 {
        match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    const fn velocity(&self) -> (f32, f32) {
        (
            self.to_direction(self.right, self.left),
            self.to_direction(self.up, self.down),
        )
    }
}

/// Orbiting camera around the scene origin, driven by arrow keys,
/// mouse drag, and scroll wheel.
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub orbit: OrbitState,
    last_cursor: Option<(f64, f64)>,
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self {
            yaw: 0.7,
            pitch: 0.45,
            distance: 6.0,
            orbit: OrbitState::default(),
            last_cursor: None,
        }
    }

    pub fn eye(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        ) * self.distance
    }

    /// Apply held-key orbiting for this frame.
    pub fn update(&mut self, delta: f32) {
        let (yaw_dir, pitch_dir) = self.orbit.velocity();
        self.yaw += yaw_dir * ORBIT_KEY_SPEED * delta;
        self.pitch = (self.pitch + pitch_dir * ORBIT_KEY_SPEED * delta).clamp(-MAX_PITCH, MAX_PITCH);
    }

    pub fn process_keyboard(&mut self, event: &KeyEvent) {
        let is_pressed = event.state.is_pressed();
        if let PhysicalKey::Code(keycode) = event.physical_key {
            match keycode {
                KeyCode::ArrowLeft => self.orbit.left = is_pressed,
                KeyCode::ArrowRight => self.orbit.right = is_pressed,
                KeyCode::ArrowUp => self.orbit.up = is_pressed,
                KeyCode::ArrowDown => self.orbit.down = is_pressed,
                _ => {}
            }
        }
    }

    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.orbit.dragging = state.is_pressed();
            if !self.orbit.dragging {
                self.last_cursor = None;
            }
        }
    }

    pub fn process_cursor(&mut self, x: f64, y: f64) {
        if self.orbit.dragging {
            if let Some((last_x, last_y)) = self.last_cursor {
                self.yaw += (x - last_x) as f32 * ORBIT_DRAG_SPEED;
                self.pitch = (self.pitch + (y - last_y) as f32 * ORBIT_DRAG_SPEED)
                    .clamp(-MAX_PITCH, MAX_PITCH);
            }
        }
        self.last_cursor = Some((x, y));
    }

    pub fn process_scroll(&mut self, delta: MouseScrollDelta) {
        let amount = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.05,
        };
        self.distance = (self.distance - amount * ZOOM_SPEED).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn to_uniform(&self, aspect: f32) -> CameraUniform {
        let eye = self.eye();
        let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
        let proj = Mat4::perspective_rh(FOV_Y, aspect, Z_NEAR, Z_FAR);

        CameraUniform {
            view_proj: (proj * view).to_cols_array_2d(),
            eye: eye.to_array(),
            _pad: 0.0,
        }
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eye_distance_matches_orbit_radius() {
        let camera = OrbitCamera::new();
        assert!((camera.eye().length() - camera.distance).abs() < 1e-4);
    }

    #[test]
    fn test_update_clamps_pitch() {
        let mut camera = OrbitCamera::new();
        camera.orbit.up = true;
        for _ in 0..100 {
            camera.update(0.1);
        }
        assert!(camera.pitch <= MAX_PITCH);
    }

    #[test]
    fn test_scroll_clamps_distance() {
        let mut camera = OrbitCamera::new();
        camera.process_scroll(MouseScrollDelta::LineDelta(0.0, 1000.0));
        assert_eq!(camera.distance, MIN_DISTANCE);
        camera.process_scroll(MouseScrollDelta::LineDelta(0.0, -1000.0));
        assert_eq!(camera.distance, MAX_DISTANCE);
    }

    #[test]
    fn test_drag_requires_button_held() {
        let mut camera = OrbitCamera::new();
        let yaw = camera.yaw;

        camera.process_cursor(10.0, 10.0);
        camera.process_cursor(50.0, 10.0);
        assert_eq!(camera.yaw, yaw);

        camera.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        camera.process_cursor(90.0, 10.0);
        assert!(camera.yaw > yaw);
    }
}
