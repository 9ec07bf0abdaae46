use std::f32::consts::TAU;

use glam::Vec3;

/// Vertex data for the twist pipeline
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub const fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }

    pub const fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Indexed triangle mesh with smooth per-vertex normals
#[derive(Debug, Clone)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Build a parametric torus centered at the origin with its axis along Y.
///
/// `ring_radius` is the distance from the center to the middle of the tube,
/// `pipe_radius` the tube's own radius. The ring sweeps through the XZ
/// plane, so vertex X spans the full diameter and the X-keyed twist wrings
/// the ring visibly.
pub fn generate_torus(
    ring_radius: f32,
    pipe_radius: f32,
    ring_segments: u32,
    pipe_segments: u32,
) -> Mesh {
    assert!(ring_segments >= 3 && pipe_segments >= 3);

    let mut vertices = Vec::with_capacity((ring_segments * pipe_segments) as usize);
    for ring in 0..ring_segments {
        let theta = ring as f32 / ring_segments as f32 * TAU;
        let (sin_theta, cos_theta) = theta.sin_cos();
        let tube_center = Vec3::new(cos_theta * ring_radius, 0.0, sin_theta * ring_radius);

        for pipe in 0..pipe_segments {
            let phi = pipe as f32 / pipe_segments as f32 * TAU;
            let (sin_phi, cos_phi) = phi.sin_cos();

            // Unit direction from the tube center out through the vertex,
            // which is exactly the smooth surface normal.
            let normal = Vec3::new(cos_theta * cos_phi, sin_phi, sin_theta * cos_phi);
            let position = tube_center + normal * pipe_radius;

            vertices.push(Vertex::new(position.to_array(), normal.to_array()));
        }
    }

    // Two triangles per quad, wrapping in both directions to close the torus.
    let mut indices = Vec::with_capacity((ring_segments * pipe_segments * 6) as usize);
    for ring in 0..ring_segments {
        let next_ring = (ring + 1) % ring_segments;
        for pipe in 0..pipe_segments {
            let next_pipe = (pipe + 1) % pipe_segments;

            let a = ring * pipe_segments + pipe;
            let b = next_ring * pipe_segments + pipe;
            let c = next_ring * pipe_segments + next_pipe;
            let d = ring * pipe_segments + next_pipe;

            indices.extend_from_slice(&[a, b, c, a, c, d]);
        }
    }

    Mesh { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-4;

    #[test]
    fn test_torus_vertex_and_index_counts() {
        let mesh = generate_torus(1.5, 0.5, 24, 12);
        assert_eq!(mesh.vertices.len(), 24 * 12);
        assert_eq!(mesh.indices.len(), 24 * 12 * 6);
        assert_eq!(mesh.triangle_count(), 24 * 12 * 2);
    }

    #[test]
    fn test_torus_vertices_lie_on_surface() {
        let ring_radius = 1.5;
        let pipe_radius = 0.5;
        let mesh = generate_torus(ring_radius, pipe_radius, 16, 8);

        for vertex in &mesh.vertices {
            let p = Vec3::from_array(vertex.position);
            // Distance from the ring circle must equal the pipe radius.
            let ring_distance = (p.x * p.x + p.z * p.z).sqrt() - ring_radius;
            let surface_distance = (ring_distance * ring_distance + p.y * p.y).sqrt();
            assert!((surface_distance - pipe_radius).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_torus_normals_are_unit_length() {
        let mesh = generate_torus(1.5, 0.5, 16, 8);
        for vertex in &mesh.vertices {
            let n = Vec3::from_array(vertex.normal);
            assert!((n.length() - 1.0).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_torus_indices_in_range() {
        let mesh = generate_torus(1.5, 0.5, 16, 8);
        let count = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < count));
    }
}
