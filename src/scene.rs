//! CPU-side data for the sandbox's single textured quad: vertex data, the
//! model/view/projection transforms and the uniform uploads that feed them to a
//! linked program.

use crate::config::{CameraConfig, TextureBinding};
use crate::math::{Mat4, Vec3, Vec4, perspective, rad};
use crate::shader::{ShaderBackend, ShaderError, ShaderProgram};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl Vertex {
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
    pub const COLOR_OFFSET: usize = std::mem::size_of::<[f32; 3]>();
    pub const TEX_COORDS_OFFSET: usize = 2 * std::mem::size_of::<[f32; 3]>();
}

pub const QUAD_VERTICES: [Vertex; 4] = [
    Vertex {
        position: [0.5, 0.5, 0.0],
        color: [0.0, 1.0, 0.0],
        tex_coords: [1.0, 0.0],
    },
    Vertex {
        position: [0.5, -0.5, 0.0],
        color: [0.0, 1.0, 1.0],
        tex_coords: [1.0, 1.0],
    },
    Vertex {
        position: [-0.5, -0.5, 0.0],
        color: [0.0, 0.0, 1.0],
        tex_coords: [0.0, 1.0],
    },
    Vertex {
        position: [-0.5, 0.5, 0.0],
        color: [1.0, 0.0, 0.0],
        tex_coords: [0.0, 0.0],
    },
];

pub const QUAD_INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transforms {
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
}

impl Transforms {
    pub fn from_camera(camera: &CameraConfig, aspect: f32) -> Self {
        Self {
            model: Mat4::rotation_x(rad(camera.model_pitch_deg)),
            view: Mat4::identity().translate(Vec3::from(camera.view_offset)),
            projection: perspective(rad(camera.fov_deg), aspect, camera.near, camera.far),
        }
    }

    /// `projection · view · model`.
    pub fn mvp(&self) -> Mat4 {
        self.projection.times(self.view).times(self.model)
    }

    /// Clip-space positions of the quad's corners, in vertex order.
    pub fn project_quad(&self) -> [Vec4; 4] {
        let mvp = self.mvp();
        QUAD_VERTICES.map(|vertex| mvp.mulv(Vec4::point(Vec3::from(vertex.position))))
    }

    /// Sets the `model`, `view` and `projection` uniforms. `program` must be
    /// current.
    pub fn upload<B: ShaderBackend>(
        &self,
        program: &ShaderProgram<B>,
        backend: &mut B,
    ) -> Result<(), ShaderError> {
        program.set_mat4(backend, "model", &self.model)?;
        program.set_mat4(backend, "view", &self.view)?;
        program.set_mat4(backend, "projection", &self.projection)
    }
}

/// The spinning-quad transform: translate by `offset`, then rotate about Z by
/// `seconds` radians.
pub fn spin(offset: Vec3, seconds: f32) -> Mat4 {
    Mat4::identity().translate(offset).times(Mat4::rotation_z(seconds))
}

/// Points each sampler uniform at its texture unit. `program` must be current.
pub fn bind_samplers<B: ShaderBackend>(
    program: &ShaderProgram<B>,
    backend: &mut B,
    textures: &[TextureBinding],
) -> Result<(), ShaderError> {
    for texture in textures {
        program.set_i32(backend, &texture.uniform, texture.unit)?;
    }
    Ok(())
}
