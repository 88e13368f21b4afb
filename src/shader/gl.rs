use glow::HasContext;

use crate::math::Mat4;

use super::{ShaderBackend, ShaderStage};

/// [`ShaderBackend`] over an OpenGL context.
///
/// Every call forwards to `glow`. The wrapped context must be current on the
/// calling thread for as long as the backend is used.
pub struct GlBackend {
    gl: glow::Context,
}

impl GlBackend {
    pub fn new(gl: glow::Context) -> Self {
        Self { gl }
    }

    pub fn context(&self) -> &glow::Context {
        &self.gl
    }

    pub fn into_inner(self) -> glow::Context {
        self.gl
    }
}

fn stage_enum(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    }
}

// SAFETY (all blocks below): `GlBackend::new` requires a current context, and
// every handle passed in was created by this same context.
impl ShaderBackend for GlBackend {
    type Shader = glow::NativeShader;
    type Program = glow::NativeProgram;
    type UniformLocation = glow::NativeUniformLocation;

    fn create_shader(&mut self, stage: ShaderStage) -> Result<Self::Shader, String> {
        unsafe { self.gl.create_shader(stage_enum(stage)) }
    }

    fn compile_shader(&mut self, shader: &Self::Shader, source: &str) {
        unsafe {
            self.gl.shader_source(*shader, source);
            self.gl.compile_shader(*shader);
        }
    }

    fn shader_compile_status(&self, shader: &Self::Shader) -> bool {
        unsafe { self.gl.get_shader_compile_status(*shader) }
    }

    fn shader_info_log(&self, shader: &Self::Shader) -> String {
        unsafe { self.gl.get_shader_info_log(*shader) }
    }

    fn delete_shader(&mut self, shader: Self::Shader) {
        unsafe { self.gl.delete_shader(shader) }
    }

    fn create_program(&mut self) -> Result<Self::Program, String> {
        unsafe { self.gl.create_program() }
    }

    fn attach_shader(&mut self, program: &Self::Program, shader: &Self::Shader) {
        unsafe { self.gl.attach_shader(*program, *shader) }
    }

    fn detach_shader(&mut self, program: &Self::Program, shader: &Self::Shader) {
        unsafe { self.gl.detach_shader(*program, *shader) }
    }

    fn link_program(&mut self, program: &Self::Program) {
        unsafe { self.gl.link_program(*program) }
    }

    fn program_link_status(&self, program: &Self::Program) -> bool {
        unsafe { self.gl.get_program_link_status(*program) }
    }

    fn program_info_log(&self, program: &Self::Program) -> String {
        unsafe { self.gl.get_program_info_log(*program) }
    }

    fn delete_program(&mut self, program: Self::Program) {
        unsafe { self.gl.delete_program(program) }
    }

    fn uniform_location(
        &self,
        program: &Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation> {
        unsafe { self.gl.get_uniform_location(*program, name) }
    }

    fn use_program(&mut self, program: Option<&Self::Program>) {
        unsafe { self.gl.use_program(program.copied()) }
    }

    fn uniform_matrix4(&mut self, location: &Self::UniformLocation, matrix: &Mat4) {
        unsafe { self.gl.uniform_matrix_4_f32_slice(Some(location), false, matrix.as_slice()) }
    }

    fn uniform_i32(&mut self, location: &Self::UniformLocation, value: i32) {
        unsafe { self.gl.uniform_1_i32(Some(location), value) }
    }
}
