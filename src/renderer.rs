use anyhow::Result;

use crate::scene::{camera::Camera, Scene};

/// Camera data laid out the way a uniform buffer expects it.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub camera_pos: [f32; 4],
}

impl CameraUniform {
    pub fn new() -> Self {
        Self {
            view_proj: glam::Mat4::IDENTITY.to_cols_array_2d(),
            camera_pos: [0.0; 4],
        }
    }

    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.build_view_projection_matrix().to_cols_array_2d();
        let pos = camera.position;
        self.camera_pos = [pos.x, pos.y, pos.z, 1.0];
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

/// Something that can draw the scene from its current camera.
pub trait Renderer {
    fn resize(&mut self, width: u32, height: u32);
    fn render(&mut self, scene: &Scene) -> Result<()>;
}

/// Headless renderer: packs the camera uniform every frame and logs the pose
/// instead of drawing.
pub struct LogRenderer {
    camera_uniform: CameraUniform,
    width: u32,
    height: u32,
    frames_rendered: u64,
    log_interval: u64,
}

impl LogRenderer {
    pub fn new(width: u32, height: u32, log_interval: u64) -> Self {
        Self {
            camera_uniform: CameraUniform::new(),
            width,
            height,
            frames_rendered: 0,
            log_interval: log_interval.max(1),
        }
    }

    pub fn camera_uniform(&self) -> &CameraUniform {
        &self.camera_uniform
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl Renderer for LogRenderer {
    fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            log::debug!("Resizing output to {}x{}", width, height);
            self.width = width;
            self.height = height;
        }
    }

    fn render(&mut self, scene: &Scene) -> Result<()> {
        self.camera_uniform.update_view_proj(&scene.camera);
        let view_proj = glam::Mat4::from_cols_array_2d(&self.camera_uniform.view_proj);
        anyhow::ensure!(
            view_proj.is_finite(),
            "Camera matrix is not finite at phase {}",
            scene.phase()
        );

        let camera = &scene.camera;
        if self.frames_rendered % self.log_interval == 0 {
            log::info!(
                "frame {} phase {:.3}: eye ({:.2}, {:.2}, {:.2}) looking at ({:.2}, {:.2}, {:.2})",
                self.frames_rendered,
                scene.phase(),
                camera.position.x,
                camera.position.y,
                camera.position.z,
                camera.target.x,
                camera.target.y,
                camera.target.z,
            );
        } else {
            log::debug!(
                "frame {} eye {:?}, {} byte camera uniform",
                self.frames_rendered,
                camera.position,
                self.camera_uniform.as_bytes().len()
            );
        }

        self.frames_rendered += 1;
        Ok(())
    }
}
