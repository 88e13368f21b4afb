mod mat4;
mod vec;

pub use mat4::{Mat4, col_major_index, row_major_index};
pub use vec::{Vec3, Vec4};

pub const PI: f32 = std::f32::consts::PI;

/// Degrees to radians, in single precision.
pub fn rad(degrees: f32) -> f32 {
    degrees / 180.0 * PI
}

/// OpenGL-style perspective projection derived from the near-plane frustum.
///
/// `fov` is the vertical field of view in radians. Degenerate planes
/// (`far == near`) yield infinities rather than an error.
pub fn perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let half_height = near * (fov / 2.0).tan();
    let half_width = half_height * aspect;

    let mut result = Mat4::zero();
    result.set(0, 0, near / half_width);
    result.set(1, 1, near / half_height);
    result.set(2, 2, -(far + near) / (far - near));
    result.set(3, 2, -1.0);
    result.set(2, 3, -2.0 * far * near / (far - near));

    log::trace!(
        "perspective: fov={}, aspect={}, near={}, far={}",
        fov,
        aspect,
        near,
        far
    );

    result
}

/// Same projection as [`perspective`], written directly from the cotangent of
/// half the vertical field of view.
#[rustfmt::skip]
pub fn perspect(fovy: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let nmf = near - far;
    let f = 1.0 / (fovy / 2.0).tan();

    Mat4::new([
        f / aspect, 0.0, 0.0,                     0.0,
        0.0,        f,   0.0,                     0.0,
        0.0,        0.0, (near + far) / nmf,      -1.0,
        0.0,        0.0, 2.0 * far * near / nmf,  0.0,
    ])
}
