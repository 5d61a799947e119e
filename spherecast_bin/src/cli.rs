use clap::{Parser, ValueEnum};
use spherecast_engine::core::types::Number;
use spherecast_engine::render::render_opts::RenderOpts;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Log levels that can be picked on the command line
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Renders a scene of spheres from a JSON scene file
#[derive(Parser, Debug)]
#[command(name = "spherecast", version)]
pub struct Args {
    /// Scene document to render
    #[arg(short, long)]
    pub scene: PathBuf,

    /// Output file path (`.png` for PNG, anything else is written as binary PPM)
    #[arg(short, long, default_value = "output.ppm")]
    pub output: PathBuf,

    /// Number of worker threads, `0` uses one per logical CPU
    #[arg(short, long, default_value_t = 0)]
    pub threads: usize,

    /// Objects at or beyond this distance along a camera ray are not drawn
    #[arg(long, default_value_t = RenderOpts::DEFAULT_FAR_CLIP)]
    pub far_clip: Number,

    /// Also draw intersections behind the camera
    #[arg(long)]
    pub keep_behind: bool,

    /// Set the logging level. If not given, `RUST_LOG` is used, falling back to `info`
    #[arg(long)]
    pub log_level: Option<LogLevel>,
}

impl Args {
    /// Applies the command line overrides on top of the options from the scene file
    pub fn apply(&self, opts: RenderOpts) -> RenderOpts {
        RenderOpts {
            far_clip: self.far_clip,
            cull_behind: !self.keep_behind,
            ..opts
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_valid() { Args::command().debug_assert(); }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["spherecast", "--scene", "scene.json"]).expect("should parse");
        assert_eq!(args.scene, PathBuf::from("scene.json"));
        assert_eq!(args.output, PathBuf::from("output.ppm"));
        assert_eq!(args.threads, 0);
        assert_eq!(args.log_level, None);
        assert_eq!(args.apply(RenderOpts::default()), RenderOpts::default());
    }

    #[test]
    fn overrides() {
        let args = Args::try_parse_from([
            "spherecast",
            "-s",
            "scene.json",
            "-o",
            "out.png",
            "--threads",
            "3",
            "--far-clip",
            "50",
            "--keep-behind",
            "--log-level",
            "debug",
        ])
        .expect("should parse");
        assert_eq!(args.threads, 3);
        assert_eq!(args.log_level, Some(LogLevel::Debug));

        let opts = args.apply(RenderOpts::default());
        assert_eq!(opts.far_clip, 50.);
        assert!(!opts.cull_behind);
        assert_eq!(opts.width, RenderOpts::DEFAULT_DIM);
    }

    #[test]
    fn scene_is_required() { assert!(Args::try_parse_from(["spherecast"]).is_err()); }
}
