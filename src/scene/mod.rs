pub mod camera;

pub use camera::Camera;

use std::time::Duration;

use anyhow::Result;
use glam::Vec3;

use crate::config::FlyThroughConfig;
use crate::path::PathAnimator;
use crate::scene::camera::MIN_LOOK_DISTANCE;
use crate::timing::LoopClock;

/// Camera pose sampled from the path for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

pub struct Scene {
    pub camera: Camera,
    path: PathAnimator,
    clock: LoopClock,
    lead_fraction: f32,
    phase: f32,
}

impl Scene {
    pub fn new(camera: Camera, path: PathAnimator, clock: LoopClock, lead_fraction: f32) -> Self {
        let mut scene = Self {
            camera,
            path,
            clock,
            lead_fraction,
            phase: 0.0,
        };
        scene.apply_pose(0.0);
        scene
    }

    pub fn from_config(path: PathAnimator, config: &FlyThroughConfig) -> Result<Self> {
        let clock = LoopClock::from_secs(config.loop_period)?;
        let path = path.with_parametrization(config.parametrization);
        let mut camera = Camera::new(Vec3::ZERO, Vec3::NEG_Z, config.aspect());
        camera.fov = config.fov;
        camera.near = config.near;
        camera.far = config.far;
        Ok(Self::new(camera, path, clock, config.lead_fraction))
    }

    /// Moves the camera to where the path puts it `elapsed` into the session.
    pub fn update(&mut self, elapsed: Duration) {
        let phase = self.clock.phase(elapsed);
        self.apply_pose(phase);
    }

    pub fn pose_at(&self, t: f32) -> CameraPose {
        let position = self.path.position_at(t);
        let mut target = self.path.look_ahead_position_at(t, self.lead_fraction);

        // Look-ahead lands on the camera when waypoints bunch up; fall back
        // to the direction of travel
        if position.distance_squared(target) <= MIN_LOOK_DISTANCE * MIN_LOOK_DISTANCE {
            target = position + self.path.tangent_at(t);
        }

        CameraPose { position, target }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
    }

    pub fn path(&self) -> &PathAnimator {
        &self.path
    }

    pub fn clock(&self) -> &LoopClock {
        &self.clock
    }

    /// Phase of the loop applied by the last update, in `[0, 1)`.
    pub fn phase(&self) -> f32 {
        self.phase
    }

    fn apply_pose(&mut self, phase: f32) {
        let pose = self.pose_at(phase);
        self.camera.look_at(pose.position, pose.target);
        self.phase = phase;
    }
}
