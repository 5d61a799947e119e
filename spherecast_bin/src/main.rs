use crate::cli::Args;
use crate::targets::*;
use anyhow::Context;
use clap::Parser;
use spherecast_engine::output::write_image;
use spherecast_engine::render::renderer::Renderer;
use spherecast_engine::scene::load::load_scene;
use tracing::info;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::prelude::*;

mod cli;
mod report;
mod targets;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args)?;
    run(&args)
}

/// Installs the global subscriber. `--log-level` takes priority, then `RUST_LOG`, then `info`
fn init_logging(args: &Args) -> anyhow::Result<()> {
    let filter = match args.log_level {
        Some(level) => EnvFilter::default().add_directive(LevelFilter::from(level).into()),
        None => EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env()
            .context("invalid RUST_LOG filter")?,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .context("could not install log subscriber")
}

/// Loads the scene, renders it and saves the image
fn run(args: &Args) -> anyhow::Result<()> {
    let loaded = load_scene(&args.scene).with_context(|| format!("failed to load scene {:?}", args.scene))?;
    let opts = args.apply(loaded.render_opts);
    report::log_scene(&loaded.scene, &opts);

    let renderer = Renderer::new(args.threads).context("failed to create renderer")?;
    let render = renderer.render(&loaded.scene, &opts);
    info!(target: MAIN, stats = ?render.stats, "rendered");

    write_image(&render.img, &args.output).with_context(|| format!("failed to write image {:?}", args.output))?;
    info!(target: MAIN, output = ?args.output, "saved");

    Ok(())
}
