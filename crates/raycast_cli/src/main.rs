use anyhow::{Context, Result};
use clap::Parser;
use raycast_core::{load_scene, CameraSettings, SceneFile};
use raycast_renderer::{render, save_image, Camera, RenderConfig};

mod cli;

use cli::Args;

/// Build the camera from scene-file settings, letting `--fov` win.
fn build_camera(args: &Args, settings: &CameraSettings) -> Result<Camera> {
    let fov_degrees = args.fov.unwrap_or(settings.fov_degrees);

    let mut camera = Camera::new()
        .with_resolution(args.width, args.height)
        .with_origin(settings.origin)
        .with_fov_degrees(fov_degrees);
    camera
        .initialize()
        .with_context(|| format!("invalid camera ({}x{}, fov {} deg)", args.width, args.height, fov_degrees))?;

    Ok(camera)
}

fn run(args: &Args) -> Result<()> {
    let scene_file = match &args.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("failed to load scene {}", path.display()))?,
        None => {
            log::info!("No scene file given, using built-in scene");
            SceneFile::default()
        }
    };
    log::info!(
        "Scene: {} spheres, light at {:?}",
        scene_file.scene.sphere_count(),
        scene_file.scene.light()
    );

    let camera = build_camera(args, &scene_file.camera)?;
    let config = RenderConfig {
        parallel: args.parallel,
        bucket_size: args.bucket_size,
        ..Default::default()
    };

    let image = render(&camera, &scene_file.scene, &config);

    save_image(&image, &args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    log::info!("Starting raycast");
    run(&args)?;
    log::info!("Image rendered to {}", args.output.display());

    Ok(())
}
