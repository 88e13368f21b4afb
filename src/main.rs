use anyhow::Context;

use rende::config::SandboxConfig;
use rende::logging;
use rende::scene::{QUAD_VERTICES, Transforms};
use rende::{GlBackend, ShaderProgram};

fn main() -> anyhow::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            SandboxConfig::load(&path).with_context(|| format!("loading sandbox config {path}"))?
        }
        None => SandboxConfig::default(),
    };

    logging::init(config.log_filter.as_deref());

    let program: ShaderProgram<GlBackend> =
        ShaderProgram::new(&config.shaders.vertex, &config.shaders.fragment);
    match program.read_sources() {
        Ok((vertex, fragment)) => log::info!(
            "shader sources readable: {} ({} bytes), {} ({} bytes)",
            program.vertex_path().display(),
            vertex.len(),
            program.fragment_path().display(),
            fragment.len()
        ),
        Err(err) => log::warn!("{err}"),
    }

    log::info!(
        "window {}x{} \"{}\"",
        config.window.width,
        config.window.height,
        config.window.title
    );
    log::info!("clear color {:?}", config.clear_color);
    for texture in &config.textures {
        log::info!(
            "texture {} -> {} (unit {})",
            texture.path.display(),
            texture.uniform,
            texture.unit
        );
    }

    let transforms = Transforms::from_camera(&config.camera, config.aspect());
    println!("model\n{}", transforms.model);
    println!("view\n{}", transforms.view);
    println!("projection\n{}", transforms.projection);

    for (vertex, clip) in QUAD_VERTICES.iter().zip(transforms.project_quad()) {
        println!("{:>5} {:>5} = {}", vertex.position[0], vertex.position[1], clip);
    }

    Ok(())
}
