//! A minimal 3D rendering sandbox core: column-major 4x4 linear algebra and an
//! OpenGL-style shader compile/link pipeline.

pub mod config;
pub mod logging;
pub mod math;
pub mod scene;
pub mod shader;

pub use config::SandboxConfig;
pub use math::{Mat4, Vec3, Vec4};
pub use shader::{GlBackend, ShaderBackend, ShaderError, ShaderProgram};
