use crate::mesh::{generate_torus, Mesh};

pub const TORUS_RING_RADIUS: f32 = 1.5;
pub const TORUS_PIPE_RADIUS: f32 = 0.5;
pub const TORUS_RING_SEGMENTS: u32 = 96;
pub const TORUS_PIPE_SEGMENTS: u32 = 48;

/// Torus diffuse color (calibrated blue)
pub const TORUS_DIFFUSE: [f32; 3] = [0.0, 0.5, 0.9];
/// White specular highlight
pub const TORUS_SPECULAR: [f32; 3] = [1.0, 1.0, 1.0];
/// Gray window background
pub const BACKGROUND: wgpu::Color = wgpu::Color {
    r: 0.5,
    g: 0.5,
    b: 0.5,
    a: 1.0,
};

/// Deformation strength at the start of each forward sweep
pub const INITIAL_TWIST_FACTOR: f32 = 5.0;
/// Seconds for one forward sweep; the autoreversed cycle is twice this
pub const TWIST_SWEEP_SECONDS: f32 = 2.0;

/// Demo scene: a single torus and its material
pub struct TorusScene {
    pub mesh: Mesh,
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
}

pub fn create_torus_scene(ring_radius: f32, pipe_radius: f32) -> TorusScene {
    let mesh = generate_torus(
        ring_radius,
        pipe_radius,
        TORUS_RING_SEGMENTS,
        TORUS_PIPE_SEGMENTS,
    );

    println!(
        "Torus scene created: {} vertices, {} triangles",
        mesh.vertices.len(),
        mesh.triangle_count()
    );

    TorusScene {
        mesh,
        diffuse: TORUS_DIFFUSE,
        specular: TORUS_SPECULAR,
    }
}
