// src/main.rs
use clap::Parser;
use nannou::prelude::*;
use std::error::Error;
use std::path::{Path, PathBuf};

use tilewall::{
    config::Config,
    models::{CoverManifest, Viewport},
    render::NannouTileRenderer,
    services::ImageLoader,
    views::TileWall,
};

/// endlessly scrolling wall of album covers
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// config file, defaults to config.toml beside the executable
    #[clap(short, long)]
    config: Option<PathBuf>,
}

struct Model {
    wall: TileWall<wgpu::Texture>,
}

fn main() {
    env_logger::init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    match build_model(app) {
        Ok(model) => model,
        Err(e) => {
            log::error!("Failed to start: {}", e);
            std::process::exit(1);
        }
    }
}

fn build_model(app: &App) -> Result<Model, Box<dyn Error>> {
    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;

    // Create window
    let window_id = app
        .new_window()
        .title(&config.window.title)
        .size(config.window.width, config.window.height)
        .view(view)
        .resized(resized)
        .build()
        .map_err(|e| format!("failed to build window: {:?}", e))?;
    let viewport = {
        let window = app.window(window_id).ok_or("window closed during setup")?;
        let rect = window.rect();
        Viewport::new(rect.w(), rect.h())
    };

    // Load covers; the manifest's directory anchors relative cover paths
    let manifest_path = config.resolve_manifest_path();
    let manifest = CoverManifest::load(&manifest_path)?;
    let base_dir = manifest_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    let mut loader = ImageLoader::new(base_dir, config.resolve_cover_dir());
    let sources = loader.load_all_with(&manifest.cover_urls(), |path: &Path| {
        wgpu::Texture::from_path(app, path)
    });

    let wall = TileWall::new(
        config.engine_config(),
        sources,
        viewport,
        &mut rand::thread_rng(),
    )?;

    Ok(Model { wall })
}

fn update(_app: &App, model: &mut Model, update: Update) {
    let now_ms = update.since_start.as_secs_f64() * 1000.0;
    model.wall.tick(now_ms);
}

fn resized(_app: &App, model: &mut Model, size: Vec2) {
    if let Err(e) = model.wall.resize(Viewport::new(size.x, size.y)) {
        log::error!("Resize failed: {}", e);
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let mut renderer = NannouTileRenderer::new(&draw, app.window_rect());
    model.wall.render(&mut renderer);

    draw.to_frame(app, &frame).unwrap();
}
