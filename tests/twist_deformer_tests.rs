use glam::{Mat4, Vec3};
use twister::math::{deform, rotation_around_x};
use twister::mesh::generate_torus;

#[cfg(test)]
mod twist_deformer_tests {
    use super::*;
    use std::f32::consts::PI;

    const TOLERANCE: f32 = 1e-4;

    #[test]
    fn test_zero_twist_is_identity_for_whole_mesh() {
        let mesh = generate_torus(1.5, 0.5, 24, 12);

        for vertex in &mesh.vertices {
            let position = Vec3::from_array(vertex.position);
            let normal = Vec3::from_array(vertex.normal);

            let (p, n) = deform(position, normal, 0.0);

            assert!(p.distance(position) < TOLERANCE);
            assert!(n.distance(normal) < TOLERANCE);
        }
    }

    #[test]
    fn test_opposite_twist_recovers_original_mesh() {
        let mesh = generate_torus(1.5, 0.5, 16, 8);

        for factor in [0.5, 2.0, 5.0] {
            for vertex in &mesh.vertices {
                let position = Vec3::from_array(vertex.position);
                let normal = Vec3::from_array(vertex.normal);

                let (p1, n1) = deform(position, normal, factor);
                let (p2, n2) = deform(p1, n1, -factor);

                assert!(
                    p2.distance(position) < TOLERANCE,
                    "position did not round-trip for factor {}",
                    factor
                );
                assert!(n2.distance(normal) < TOLERANCE);
            }
        }
    }

    #[test]
    fn test_rotation_angle_scales_with_x() {
        // Quarter turn: factor 5.0 at x = pi/10 gives an angle of pi/2,
        // sending +Y to +Z.
        let (p, n) = deform(Vec3::new(PI / 10.0, 1.0, 0.0), Vec3::Y, 5.0);

        assert!((p.x - PI / 10.0).abs() < TOLERANCE);
        assert!(p.y.abs() < TOLERANCE);
        assert!((p.z - 1.0).abs() < TOLERANCE);
        assert!(n.distance(Vec3::Z) < TOLERANCE);
    }

    #[test]
    fn test_vertices_at_x_zero_never_move() {
        let position = Vec3::new(0.0, 0.7, -1.3);
        for factor in [-5.0, -1.0, 1.0, 5.0, 100.0] {
            let (p, _) = deform(position, Vec3::Y, factor);
            assert!(p.distance(position) < TOLERANCE);
        }
    }

    #[test]
    fn test_rotation_matrices_are_orthogonal() {
        for i in -12..=12 {
            let angle = i as f32 * PI / 6.0;
            let rotation = rotation_around_x(angle);
            let product = rotation * rotation.transpose();

            let identity = Mat4::IDENTITY.to_cols_array();
            for (a, b) in product.to_cols_array().iter().zip(identity.iter()) {
                assert!((a - b).abs() < TOLERANCE);
            }
        }
    }

    #[test]
    fn test_deformed_normals_stay_unit_length() {
        let mesh = generate_torus(1.5, 0.5, 16, 8);

        for vertex in &mesh.vertices {
            let (_, n) = deform(
                Vec3::from_array(vertex.position),
                Vec3::from_array(vertex.normal),
                5.0,
            );
            assert!((n.length() - 1.0).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_deformation_is_independent_per_vertex() {
        // The same input always maps to the same output, regardless of
        // what was deformed before it.
        let a = Vec3::new(0.9, 0.1, 0.4);
        let b = Vec3::new(-1.2, 0.5, 0.0);

        let first = deform(a, Vec3::Y, 3.0);
        let _ = deform(b, Vec3::Y, 3.0);
        let second = deform(a, Vec3::Y, 3.0);

        assert_eq!(first, second);
    }
}
