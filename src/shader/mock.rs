//! In-memory [`ShaderBackend`] for tests.
//!
//! Compiles anything that starts with a `#version` directive and has no
//! `#error` line. Linking checks that every fragment `in` is written by a
//! vertex `out` of the same type. Uniforms declared in either stage become
//! active. Object lifetimes are tracked so tests can assert nothing leaks.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::math::Mat4;

use super::{ShaderBackend, ShaderStage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MockLocation {
    program: u32,
    name: String,
}

struct MockShader {
    stage: ShaderStage,
    source: String,
    compiled: bool,
    log: String,
}

#[derive(Default)]
struct MockProgram {
    attached: Vec<u32>,
    linked: bool,
    log: String,
    uniforms: HashSet<String>,
}

#[derive(Default)]
pub(crate) struct MockBackend {
    pub(crate) next_id: u32,
    pub(crate) calls: usize,
    pub(crate) shaders: HashMap<u32, MockShader>,
    pub(crate) programs: HashMap<u32, MockProgram>,
    pub(crate) programs_created: usize,
    pub(crate) current: Option<u32>,
    pub(crate) matrices: HashMap<String, [f32; 16]>,
    pub(crate) ints: HashMap<String, i32>,
    /// Makes `create_shader` refuse this stage.
    pub(crate) fail_create_shader: Option<ShaderStage>,
    /// Makes `create_program` refuse every request.
    pub(crate) fail_create_program: bool,
}

impl MockBackend {
    pub(crate) fn live_shaders(&self) -> usize {
        self.shaders.len()
    }

    pub(crate) fn live_programs(&self) -> usize {
        self.programs.len()
    }

    pub(crate) fn programs_created(&self) -> usize {
        self.programs_created
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls
    }

    pub(crate) fn current_program(&self) -> Option<u32> {
        self.current
    }

    pub(crate) fn matrix_upload(&self, name: &str) -> Option<[f32; 16]> {
        self.matrices.get(name).copied()
    }

    pub(crate) fn int_upload(&self, name: &str) -> Option<i32> {
        self.ints.get(name).copied()
    }

    fn allocate(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    fn check_current(&self, location: &MockLocation) {
        assert_eq!(
            self.current,
            Some(location.program),
            "uniform `{}` uploaded while its program is not current",
            location.name
        );
    }
}

/// `(qualifier, type, name)` for each `in`/`out`/`uniform` declaration.
fn declarations(source: &str) -> Vec<(&str, &str, &str)> {
    source
        .lines()
        .filter_map(|line| {
            let line = match line.find(')') {
                Some(end) if line.trim_start().starts_with("layout") => &line[end + 1..],
                _ => line,
            };
            let mut words = line.trim().trim_end_matches(';').split_whitespace();
            let qualifier = words.next()?;
            if !matches!(qualifier, "in" | "out" | "uniform") {
                return None;
            }
            let ty = words.next()?;
            let name = words.next()?;
            Some((qualifier, ty, name))
        })
        .collect()
}

fn compile_log(source: &str) -> Option<String> {
    if !source.trim_start().starts_with("#version") {
        return Some("0:1(1): error: missing #version directive".to_string());
    }
    source
        .lines()
        .enumerate()
        .find(|(_, line)| line.trim_start().starts_with("#error"))
        .map(|(i, line)| format!("0:{}(1): error: {}", i + 1, line.trim()))
}

impl ShaderBackend for MockBackend {
    type Shader = u32;
    type Program = u32;
    type UniformLocation = MockLocation;

    fn create_shader(&mut self, stage: ShaderStage) -> Result<u32, String> {
        self.calls += 1;
        if self.fail_create_shader == Some(stage) {
            return Err(format!("no {stage} shader handles left"));
        }
        let id = self.allocate();
        self.shaders.insert(
            id,
            MockShader {
                stage,
                source: String::new(),
                compiled: false,
                log: String::new(),
            },
        );
        Ok(id)
    }

    fn compile_shader(&mut self, shader: &u32, source: &str) {
        self.calls += 1;
        let entry = self.shaders.get_mut(shader).expect("unknown shader");
        entry.source = source.to_string();
        match compile_log(source) {
            Some(log) => {
                entry.compiled = false;
                entry.log = log;
            }
            None => {
                entry.compiled = true;
                entry.log.clear();
            }
        }
    }

    fn shader_compile_status(&self, shader: &u32) -> bool {
        self.shaders[shader].compiled
    }

    fn shader_info_log(&self, shader: &u32) -> String {
        self.shaders[shader].log.clone()
    }

    fn delete_shader(&mut self, shader: u32) {
        self.calls += 1;
        self.shaders.remove(&shader).expect("shader deleted twice");
    }

    fn create_program(&mut self) -> Result<u32, String> {
        self.calls += 1;
        if self.fail_create_program {
            return Err("out of program handles".to_string());
        }
        let id = self.allocate();
        self.programs.insert(id, MockProgram::default());
        self.programs_created += 1;
        Ok(id)
    }

    fn attach_shader(&mut self, program: &u32, shader: &u32) {
        self.calls += 1;
        assert!(self.shaders.contains_key(shader), "attaching unknown shader");
        let entry = self.programs.get_mut(program).expect("unknown program");
        entry.attached.push(*shader);
    }

    fn detach_shader(&mut self, program: &u32, shader: &u32) {
        self.calls += 1;
        let entry = self.programs.get_mut(program).expect("unknown program");
        entry.attached.retain(|id| id != shader);
    }

    fn link_program(&mut self, program: &u32) {
        self.calls += 1;
        let attached = self.programs[program].attached.clone();
        let stage_source = |stage: ShaderStage| {
            attached
                .iter()
                .map(|id| &self.shaders[id])
                .find(|shader| shader.stage == stage && shader.compiled)
                .map(|shader| shader.source.clone())
        };

        let (vertex, fragment) = match (
            stage_source(ShaderStage::Vertex),
            stage_source(ShaderStage::Fragment),
        ) {
            (Some(vertex), Some(fragment)) => (vertex, fragment),
            _ => {
                let entry = self.programs.get_mut(program).expect("unknown program");
                entry.linked = false;
                entry.log = "error: program needs a compiled vertex and fragment shader".into();
                return;
            }
        };

        let vertex_decls = declarations(&vertex);
        let fragment_decls = declarations(&fragment);

        let outputs: HashSet<(&str, &str)> = vertex_decls
            .iter()
            .filter(|(q, _, _)| *q == "out")
            .map(|(_, ty, name)| (*ty, *name))
            .collect();
        let missing: Vec<&str> = fragment_decls
            .iter()
            .filter(|(q, ty, name)| *q == "in" && !outputs.contains(&(*ty, *name)))
            .map(|(_, _, name)| *name)
            .collect();

        let uniforms: HashSet<String> = vertex_decls
            .iter()
            .chain(fragment_decls.iter())
            .filter(|(q, _, _)| *q == "uniform")
            .map(|(_, _, name)| name.to_string())
            .collect();

        let entry = self.programs.get_mut(program).expect("unknown program");
        if missing.is_empty() {
            entry.linked = true;
            entry.log.clear();
            entry.uniforms = uniforms;
        } else {
            entry.linked = false;
            entry.log = missing
                .iter()
                .map(|name| {
                    format!("error: fragment shader input `{name}` has no matching vertex output")
                })
                .collect::<Vec<_>>()
                .join("\n");
        }
    }

    fn program_link_status(&self, program: &u32) -> bool {
        self.programs[program].linked
    }

    fn program_info_log(&self, program: &u32) -> String {
        self.programs[program].log.clone()
    }

    fn delete_program(&mut self, program: u32) {
        self.calls += 1;
        self.programs.remove(&program).expect("program deleted twice");
        if self.current == Some(program) {
            self.current = None;
        }
    }

    fn uniform_location(&self, program: &u32, name: &str) -> Option<MockLocation> {
        let entry = self.programs.get(program)?;
        (entry.linked && entry.uniforms.contains(name)).then(|| MockLocation {
            program: *program,
            name: name.to_string(),
        })
    }

    fn use_program(&mut self, program: Option<&u32>) {
        self.calls += 1;
        self.current = program.copied();
    }

    fn uniform_matrix4(&mut self, location: &MockLocation, matrix: &Mat4) {
        self.calls += 1;
        self.check_current(location);
        self.matrices.insert(location.name.clone(), matrix.data);
    }

    fn uniform_i32(&mut self, location: &MockLocation, value: i32) {
        self.calls += 1;
        self.check_current(location);
        self.ints.insert(location.name.clone(), value);
    }
}

/// A vertex/fragment file pair in a private temporary directory, removed on
/// drop.
pub(crate) struct TempShaders {
    dir: PathBuf,
}

impl TempShaders {
    pub(crate) fn new(tag: &str, vertex: &str, fragment: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("rende-{}-{}", tag, std::process::id()));
        std::fs::create_dir_all(&dir).expect("create temp shader dir");
        std::fs::write(dir.join("vertex.glsl"), vertex).expect("write vertex shader");
        std::fs::write(dir.join("fragment.glsl"), fragment).expect("write fragment shader");
        Self { dir }
    }

    pub(crate) fn dir(&self) -> &Path {
        &self.dir
    }

    pub(crate) fn vertex(&self) -> PathBuf {
        self.dir.join("vertex.glsl")
    }

    pub(crate) fn fragment(&self) -> PathBuf {
        self.dir.join("fragment.glsl")
    }
}

impl Drop for TempShaders {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}

mod tests {
    use super::*;

    #[test]
    fn test_declarations_skip_layout_qualifier() {
        let decls = declarations(
            "layout (location = 0) in vec3 aPos;\nout vec2 TexCoord;\nuniform mat4 model;\nvoid main() {}",
        );
        assert_eq!(
            decls,
            vec![
                ("in", "vec3", "aPos"),
                ("out", "vec2", "TexCoord"),
                ("uniform", "mat4", "model"),
            ]
        );
    }

    #[test]
    fn test_compile_log() {
        assert!(compile_log("#version 330 core\nvoid main() {}").is_none());
        assert!(compile_log("void main() {}").is_some());
        let log = compile_log("#version 330 core\n#error nope\n").unwrap();
        assert!(log.starts_with("0:2(1)"));
    }
}
