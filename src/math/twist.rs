use glam::{Mat4, Vec3};

/// Homogeneous rotation about the model X axis.
pub fn rotation_around_x(angle: f32) -> Mat4 {
    Mat4::from_rotation_x(angle)
}

/// Twist a single vertex around the model X axis.
///
/// The rotation angle is proportional to the vertex's own X coordinate, so
/// vertices further out along X turn further and the mesh wrings around its
/// axis. The normal is carried through the same rotation and re-normalized
/// as a direction. Stateless per-vertex transform; a zero twist factor is
/// the identity.
pub fn deform(position: Vec3, normal: Vec3, twist_factor: f32) -> (Vec3, Vec3) {
    let angle = position.x * twist_factor;
    let rotation = rotation_around_x(angle);

    let twisted_position = rotation.transform_point3(position);
    let twisted_normal = rotation.transform_vector3(normal).normalize();

    (twisted_position, twisted_normal)
}
