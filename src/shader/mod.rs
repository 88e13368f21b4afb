//! Shader program compilation and linking.
//!
//! A [`ShaderProgram`] reads a vertex and a fragment source file, compiles both
//! through a [`ShaderBackend`], links them and keeps the linked program handle.
//! The backend is passed explicitly to every call, so the caller decides the
//! ordering of program activation, uniform uploads and draws.

mod backend;
mod error;
mod gl;
mod program;

#[cfg(test)]
pub(crate) mod mock;

use std::fmt;

pub use backend::ShaderBackend;
pub use error::ShaderError;
pub use gl::GlBackend;
pub use program::ShaderProgram;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => f.write_str("vertex"),
            Self::Fragment => f.write_str("fragment"),
        }
    }
}

/// Observable lifecycle of a [`ShaderProgram`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramStatus {
    /// Paths are set; nothing has been read or compiled yet.
    Unloaded,
    /// The program handle is valid and can be activated.
    Linked,
    /// Reading, compiling or linking failed. Terminal.
    Failed,
}
