use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use sponza_flythrough::{
    path::waypoints, ControlFlow, FlyThroughConfig, LogRenderer, Parametrization, PathAnimator,
    Viewer, ViewerEvent,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Waypoint file, one "x y z" per line (defaults to the built-in sponza tour)
    #[arg(long)]
    waypoints: Option<PathBuf>,

    /// Seconds for one trip around the path
    #[arg(long, default_value_t = 10.0)]
    loop_period: f32,

    /// Look-ahead distance as a fraction of the loop
    #[arg(long, default_value_t = 0.05)]
    lead: f32,

    /// Spread time by segment length instead of evenly per segment
    #[arg(long)]
    constant_speed: bool,

    /// Number of frames to run
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Simulated frame rate
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Sleep between frames to match the frame rate
    #[arg(long)]
    realtime: bool,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Log the camera pose every N frames
    #[arg(long, default_value_t = 30)]
    log_every: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = FlyThroughConfig {
        width: args.width,
        height: args.height,
        loop_period: args.loop_period,
        lead_fraction: args.lead,
        parametrization: if args.constant_speed {
            Parametrization::ArcLength
        } else {
            Parametrization::Uniform
        },
        ..Default::default()
    };

    let points = match &args.waypoints {
        Some(file) => waypoints::load_waypoints(file)?,
        None => waypoints::sponza_tour(),
    };
    let path = PathAnimator::new(points).context("Invalid camera path")?;

    let renderer = LogRenderer::new(config.width, config.height, args.log_every);
    let mut viewer = Viewer::new(path, renderer, &config)?;

    let frame_time = Duration::from_secs_f64(1.0 / args.fps.max(1) as f64);
    let start = Instant::now();

    for frame in 0..args.frames {
        let elapsed = frame_time.mul_f64(frame as f64);
        if viewer.handle_event(ViewerEvent::Frame { elapsed })? == ControlFlow::Exit {
            break;
        }

        if args.realtime {
            if let Some(wait) = elapsed.checked_sub(start.elapsed()) {
                std::thread::sleep(wait);
            }
        }
    }

    viewer.handle_event(ViewerEvent::CloseRequested)?;
    log::info!(
        "Rendered {} frames in {:.2}s",
        viewer.renderer().frames_rendered(),
        start.elapsed().as_secs_f32()
    );

    Ok(())
}
