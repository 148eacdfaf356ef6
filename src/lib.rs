use std::time::Duration;

use anyhow::Result;

pub mod config;
pub mod path;
pub mod renderer;
pub mod scene;
pub mod timing;

pub use config::FlyThroughConfig;
pub use path::{Parametrization, PathAnimator, PathError, Waypoint};
pub use renderer::{CameraUniform, LogRenderer, Renderer};
pub use scene::{Camera, CameraPose, Scene};
pub use timing::{FrameStats, LoopClock, TimingStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

/// Window-system input, translated by the host into plain values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerEvent {
    Resized { width: u32, height: u32 },
    /// Time to draw; `elapsed` is measured from the start of the session.
    Frame { elapsed: Duration },
    KeyReleased(Key),
    CloseRequested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Exit,
}

/// Everything a fly-through session owns: the scene, the renderer drawing
/// it, and frame timing.
pub struct Viewer<R: Renderer> {
    pub scene: Scene,
    renderer: R,
    frame_stats: FrameStats,
    last_frame: Option<Duration>,
    loops_completed: u64,
}

impl<R: Renderer> Viewer<R> {
    pub fn new(path: PathAnimator, mut renderer: R, config: &FlyThroughConfig) -> Result<Self> {
        config.validate()?;

        log::info!(
            "Fly-through: {} waypoints, {:.1}s loop, lead {:.2}, {:?} timing",
            path.len(),
            config.loop_period,
            config.lead_fraction,
            config.parametrization
        );

        let scene = Scene::from_config(path, config)?;
        renderer.resize(config.width, config.height);

        Ok(Self {
            scene,
            renderer,
            frame_stats: FrameStats::new(60),
            last_frame: None,
            loops_completed: 0,
        })
    }

    pub fn handle_event(&mut self, event: ViewerEvent) -> Result<ControlFlow> {
        match event {
            ViewerEvent::Resized { width, height } => {
                self.resize(width, height);
                Ok(ControlFlow::Continue)
            }
            ViewerEvent::Frame { elapsed } => {
                self.update(elapsed);
                self.render()?;
                Ok(ControlFlow::Continue)
            }
            ViewerEvent::KeyReleased(Key::Escape) | ViewerEvent::CloseRequested => {
                log::info!("Exit requested after {} frames", self.frame_stats.frame_count());
                Ok(ControlFlow::Exit)
            }
            ViewerEvent::KeyReleased(Key::Other) => Ok(ControlFlow::Continue),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.renderer.resize(width, height);
            self.scene.resize(width, height);
        }
    }

    pub fn update(&mut self, elapsed: Duration) {
        if let Some(last) = self.last_frame {
            self.frame_stats.record(elapsed.saturating_sub(last));
        }
        self.last_frame = Some(elapsed);

        let loops = self.scene.clock().loops_completed(elapsed);
        if loops > self.loops_completed {
            self.loops_completed = loops;
            match self.frame_stats.stats() {
                Some(stats) => log::info!(
                    "Loop {} complete: {:.1} fps, frame time {:.2}ms (min {:.2}, max {:.2})",
                    loops,
                    stats.fps,
                    stats.average_frame_time_ms,
                    stats.min_frame_time_ms,
                    stats.max_frame_time_ms
                ),
                None => log::info!("Loop {} complete", loops),
            }
        }

        self.scene.update(elapsed);
    }

    pub fn render(&mut self) -> Result<()> {
        self.renderer.render(&self.scene).map_err(|e| {
            log::error!("Render error: {}", e);
            e
        })
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn frame_stats(&self) -> &FrameStats {
        &self.frame_stats
    }
}
