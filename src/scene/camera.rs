use glam::{Mat4, Vec3};

// Below this separation a look-at request has no usable direction
pub const MIN_LOOK_DISTANCE: f32 = 1e-5;

pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov: f32, // Vertical field of view in degrees
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(position: Vec3, target: Vec3, aspect: f32) -> Self {
        Self {
            position,
            target,
            up: Vec3::Y,
            fov: 35.0,
            aspect,
            near: 1.0,
            far: 500.0,
        }
    }

    /// Moves the camera to `position` facing `target`.
    ///
    /// If the two points coincide the camera keeps its previous viewing
    /// direction, translated to the new position.
    pub fn look_at(&mut self, position: Vec3, target: Vec3) {
        if position.distance_squared(target) > MIN_LOOK_DISTANCE * MIN_LOOK_DISTANCE {
            self.position = position;
            self.target = target;
        } else {
            let direction = self.get_view_direction();
            self.position = position;
            self.target = position + direction;
        }
    }

    pub fn build_view_matrix(&self) -> Mat4 {
        let direction = self.get_view_direction();
        // look_at_rh is undefined when looking straight along the up axis
        let up = if direction.cross(self.up).length_squared() < 1e-6 {
            Vec3::Z
        } else {
            self.up
        };
        Mat4::look_at_rh(self.position, self.position + direction, up)
    }

    pub fn build_projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.fov.to_radians(),
            self.aspect,
            self.near,
            self.far,
        )
    }

    pub fn build_view_projection_matrix(&self) -> Mat4 {
        self.build_projection_matrix() * self.build_view_matrix()
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn get_forward(&self) -> Vec3 {
        self.get_view_direction()
    }

    fn get_view_direction(&self) -> Vec3 {
        let direction = self.target - self.position;
        if direction.length_squared() > MIN_LOOK_DISTANCE * MIN_LOOK_DISTANCE {
            direction.normalize()
        } else {
            Vec3::NEG_Z
        }
    }
}
