use crate::math::Mat4;

use super::ShaderStage;

/// The slice of a graphics API that shader programs need.
///
/// Calls map one to one onto the OpenGL shader object model. Mutating calls
/// take `&mut self` so that the backend's current-program state only changes
/// through a value the caller holds.
pub trait ShaderBackend {
    type Shader;
    type Program;
    type UniformLocation;

    fn create_shader(&mut self, stage: ShaderStage) -> Result<Self::Shader, String>;

    /// Submits `source` and compiles it. Check the result with
    /// [`shader_compile_status`](Self::shader_compile_status).
    fn compile_shader(&mut self, shader: &Self::Shader, source: &str);

    fn shader_compile_status(&self, shader: &Self::Shader) -> bool;

    fn shader_info_log(&self, shader: &Self::Shader) -> String;

    fn delete_shader(&mut self, shader: Self::Shader);

    fn create_program(&mut self) -> Result<Self::Program, String>;

    fn attach_shader(&mut self, program: &Self::Program, shader: &Self::Shader);

    fn detach_shader(&mut self, program: &Self::Program, shader: &Self::Shader);

    fn link_program(&mut self, program: &Self::Program);

    fn program_link_status(&self, program: &Self::Program) -> bool;

    fn program_info_log(&self, program: &Self::Program) -> String;

    fn delete_program(&mut self, program: Self::Program);

    /// Exact, case-sensitive lookup. `None` when the linked program has no
    /// active uniform of that name.
    fn uniform_location(
        &self,
        program: &Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation>;

    fn use_program(&mut self, program: Option<&Self::Program>);

    /// Uploads `matrix` column-major, untransposed, to the current program.
    fn uniform_matrix4(&mut self, location: &Self::UniformLocation, matrix: &Mat4);

    fn uniform_i32(&mut self, location: &Self::UniformLocation, value: i32);
}
