use std::path::PathBuf;

use thiserror::Error;

use super::{ProgramStatus, ShaderStage};

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("failed to read {stage} shader source {}", path.display())]
    SourceRead {
        stage: ShaderStage,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to compile {stage} shader: {log}")]
    Compile {
        stage: ShaderStage,
        code: String,
        log: String,
    },
    #[error("failed to link program: {log}")]
    Link { log: String },
    #[error("graphics backend error: {0}")]
    Backend(String),
    #[error("program is not linked")]
    NotLinked,
    #[error("uniform `{name}` not found in program")]
    UniformNotFound { name: String },
    #[error("program is {0:?}; compile needs an unloaded program")]
    InvalidState(ProgramStatus),
}

impl ShaderError {
    /// Diagnostic log reported by the backend, if this error carries one.
    pub fn log(&self) -> Option<&str> {
        match self {
            Self::Compile { log, .. } | Self::Link { log } => Some(log),
            _ => None,
        }
    }
}
