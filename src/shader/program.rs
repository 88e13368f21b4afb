use std::path::{Path, PathBuf};

use crate::math::Mat4;

use super::{ProgramStatus, ShaderBackend, ShaderError, ShaderStage};

enum State<P> {
    Unloaded,
    Linked(P),
    Failed,
}

/// A vertex/fragment pair of shader files and, once compiled, the linked
/// program built from them.
///
/// The program handle belongs to this value alone. Release it with
/// [`delete`](Self::delete) while the backend is still alive.
pub struct ShaderProgram<B: ShaderBackend> {
    vertex_path: PathBuf,
    fragment_path: PathBuf,
    state: State<B::Program>,
}

impl<B: ShaderBackend> ShaderProgram<B> {
    pub fn new(vertex_path: impl Into<PathBuf>, fragment_path: impl Into<PathBuf>) -> Self {
        Self {
            vertex_path: vertex_path.into(),
            fragment_path: fragment_path.into(),
            state: State::Unloaded,
        }
    }

    pub fn vertex_path(&self) -> &Path {
        &self.vertex_path
    }

    pub fn fragment_path(&self) -> &Path {
        &self.fragment_path
    }

    pub fn status(&self) -> ProgramStatus {
        match self.state {
            State::Unloaded => ProgramStatus::Unloaded,
            State::Linked(_) => ProgramStatus::Linked,
            State::Failed => ProgramStatus::Failed,
        }
    }

    pub fn program(&self) -> Option<&B::Program> {
        match &self.state {
            State::Linked(program) => Some(program),
            _ => None,
        }
    }

    /// Reads both sources, compiles each stage and links them.
    ///
    /// Any failure leaves the program `Failed` for good; build a new
    /// `ShaderProgram` to try again. No shader or program object outlives a
    /// failed call, and the individual shader objects are released once the
    /// program links.
    pub fn compile(&mut self, backend: &mut B) -> Result<&B::Program, ShaderError> {
        let status = self.status();
        if status != ProgramStatus::Unloaded {
            return Err(ShaderError::InvalidState(status));
        }

        let program = match self.build(backend) {
            Ok(program) => program,
            Err(err) => {
                self.state = State::Failed;
                return Err(err);
            }
        };

        log::debug!(
            "linked program from {} and {}",
            self.vertex_path.display(),
            self.fragment_path.display()
        );
        self.state = State::Linked(program);
        self.program().ok_or(ShaderError::NotLinked)
    }

    /// Reads the vertex then the fragment source without touching any backend.
    pub fn read_sources(&self) -> Result<(String, String), ShaderError> {
        Ok((
            read_source(ShaderStage::Vertex, &self.vertex_path)?,
            read_source(ShaderStage::Fragment, &self.fragment_path)?,
        ))
    }

    fn build(&self, backend: &mut B) -> Result<B::Program, ShaderError> {
        let (vertex_source, fragment_source) = self.read_sources()?;

        let vertex = compile_stage(backend, ShaderStage::Vertex, vertex_source)?;
        let fragment = match compile_stage(backend, ShaderStage::Fragment, fragment_source) {
            Ok(shader) => shader,
            Err(err) => {
                backend.delete_shader(vertex);
                return Err(err);
            }
        };

        let result = link(backend, &vertex, &fragment);
        backend.delete_shader(vertex);
        backend.delete_shader(fragment);
        result
    }

    /// Looks up `name` in the linked program.
    pub fn uniform(&self, backend: &B, name: &str) -> Result<B::UniformLocation, ShaderError> {
        let program = self.program().ok_or(ShaderError::NotLinked)?;
        backend
            .uniform_location(program, name)
            .ok_or_else(|| ShaderError::UniformNotFound {
                name: name.to_string(),
            })
    }

    /// Makes this program the backend's current program.
    pub fn use_program(&self, backend: &mut B) -> Result<(), ShaderError> {
        let program = self.program().ok_or(ShaderError::NotLinked)?;
        backend.use_program(Some(program));
        Ok(())
    }

    /// Uploads a matrix uniform. The program must be current.
    pub fn set_mat4(&self, backend: &mut B, name: &str, value: &Mat4) -> Result<(), ShaderError> {
        let location = self.uniform(backend, name)?;
        backend.uniform_matrix4(&location, value);
        Ok(())
    }

    /// Uploads an integer uniform, e.g. a sampler's texture unit. The program
    /// must be current.
    pub fn set_i32(&self, backend: &mut B, name: &str, value: i32) -> Result<(), ShaderError> {
        let location = self.uniform(backend, name)?;
        backend.uniform_i32(&location, value);
        Ok(())
    }

    /// Releases the program handle, if any.
    pub fn delete(self, backend: &mut B) {
        if let State::Linked(program) = self.state {
            backend.delete_program(program);
            log::debug!("deleted program for {}", self.vertex_path.display());
        }
    }
}

fn read_source(stage: ShaderStage, path: &Path) -> Result<String, ShaderError> {
    std::fs::read_to_string(path).map_err(|source| ShaderError::SourceRead {
        stage,
        path: path.to_path_buf(),
        source,
    })
}

fn compile_stage<B: ShaderBackend>(
    backend: &mut B,
    stage: ShaderStage,
    source: String,
) -> Result<B::Shader, ShaderError> {
    let shader = backend.create_shader(stage).map_err(ShaderError::Backend)?;
    backend.compile_shader(&shader, &source);

    if !backend.shader_compile_status(&shader) {
        let log = backend.shader_info_log(&shader);
        backend.delete_shader(shader);
        return Err(ShaderError::Compile {
            stage,
            code: source,
            log,
        });
    }

    log::debug!("compiled {} shader", stage);
    Ok(shader)
}

fn link<B: ShaderBackend>(
    backend: &mut B,
    vertex: &B::Shader,
    fragment: &B::Shader,
) -> Result<B::Program, ShaderError> {
    let program = backend.create_program().map_err(ShaderError::Backend)?;
    backend.attach_shader(&program, vertex);
    backend.attach_shader(&program, fragment);
    backend.link_program(&program);

    if !backend.program_link_status(&program) {
        let log = backend.program_info_log(&program);
        backend.delete_program(program);
        return Err(ShaderError::Link { log });
    }

    backend.detach_shader(&program, vertex);
    backend.detach_shader(&program, fragment);
    Ok(program)
}
