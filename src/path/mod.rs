//! Closed-loop camera paths.
//!
//! A [`PathAnimator`] owns an ordered loop of waypoints and turns a normalized
//! time value into a point on a Catmull-Rom spline through them. The last
//! waypoint connects back to the first, so any `t` is valid: only its
//! fractional part matters.

mod arc_length;
mod spline;
pub mod waypoints;


pub use spline::{catmull_rom, catmull_rom_tangent};

use glam::Vec3;

/// A fixed 3D control point the camera passes through.
pub type Waypoint = Vec3;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PathError {
    #[error("a closed path needs at least 2 waypoints, got {count}")]
    InvalidConfiguration { count: usize },

    #[error("waypoint {index} has a non-finite coordinate")]
    NonFiniteWaypoint { index: usize },
}

/// How normalized time is distributed over the segments of the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Parametrization {
    /// Every segment gets `1 / N` of the loop regardless of its length.
    #[default]
    Uniform,
    /// Time is spread in proportion to segment chord length, giving
    /// roughly constant travel speed.
    ArcLength,
}

#[derive(Debug, Clone)]
pub struct PathAnimator {
    waypoints: Vec<Waypoint>,
    segment_lengths: Vec<f32>,
    // cumulative_lengths[i] is the distance from waypoint 0 to waypoint i
    cumulative_lengths: Vec<f32>,
    total_length: f32,
    parametrization: Parametrization,
}

impl PathAnimator {
    pub fn new(waypoints: Vec<Waypoint>) -> Result<Self, PathError> {
        if waypoints.len() < 2 {
            return Err(PathError::InvalidConfiguration { count: waypoints.len() });
        }
        if let Some(index) = waypoints.iter().position(|w| !w.is_finite()) {
            return Err(PathError::NonFiniteWaypoint { index });
        }

        let n = waypoints.len();
        let mut segment_lengths = Vec::with_capacity(n);
        let mut cumulative_lengths = Vec::with_capacity(n);
        let mut total_length = 0.0;

        for (i, waypoint) in waypoints.iter().enumerate() {
            let next = waypoints[(i + 1) % n];
            let length = waypoint.distance(next);
            cumulative_lengths.push(total_length);
            segment_lengths.push(length);
            total_length += length;
        }

        if total_length == 0.0 {
            log::warn!("All {} waypoints coincide, camera path has zero length", n);
        } else {
            log::info!("Camera path: {} waypoints, loop length {:.2}", n, total_length);
        }

        Ok(Self {
            waypoints,
            segment_lengths,
            cumulative_lengths,
            total_length,
            parametrization: Parametrization::Uniform,
        })
    }

    pub fn with_parametrization(mut self, parametrization: Parametrization) -> Self {
        self.parametrization = parametrization;
        self
    }

    pub fn parametrization(&self) -> Parametrization {
        self.parametrization
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Chord length from waypoint `i` to waypoint `(i + 1) % N`, per `i`.
    pub fn segment_lengths(&self) -> &[f32] {
        &self.segment_lengths
    }

    pub fn total_length(&self) -> f32 {
        self.total_length
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    // Always false; construction rejects short paths
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Position on the loop at normalized time `t`.
    ///
    /// `t` wraps modulo 1.0, so callers can pass ever-growing time values and
    /// the camera keeps looping. With [`Parametrization::Uniform`],
    /// `position_at(i / N)` is waypoint `i`.
    pub fn position_at(&self, t: f32) -> Vec3 {
        let (segment, local_t) = self.locate(t);
        let [p0, p1, p2, p3] = self.control_points(segment);
        catmull_rom(p0, p1, p2, p3, local_t)
    }

    /// The point `lead_fraction` of a loop ahead of `t`, used as a look-at
    /// target so the camera faces its direction of travel.
    pub fn look_ahead_position_at(&self, t: f32, lead_fraction: f32) -> Vec3 {
        self.position_at(t + lead_fraction)
    }

    /// Direction of travel at `t`, in path units per segment. Zero where the
    /// neighbouring waypoints coincide.
    pub fn tangent_at(&self, t: f32) -> Vec3 {
        let (segment, local_t) = self.locate(t);
        let [p0, p1, p2, p3] = self.control_points(segment);
        catmull_rom_tangent(p0, p1, p2, p3, local_t)
    }

    /// Segment index and local blend parameter for `t`.
    fn locate(&self, t: f32) -> (usize, f32) {
        let t = wrap_unit(t);
        let t = match self.parametrization {
            Parametrization::Uniform => t,
            Parametrization::ArcLength => self.arc_length_parameter(t),
        };

        let n = self.waypoints.len();
        let scaled = t * n as f32;
        let segment = (scaled.floor() as usize).min(n - 1);
        let local_t = (scaled - segment as f32).clamp(0.0, 1.0);
        (segment, local_t)
    }

    fn control_points(&self, segment: usize) -> [Vec3; 4] {
        let n = self.waypoints.len();
        let i = segment as isize;
        [
            self.waypoints[wrap_index(i - 1, n)],
            self.waypoints[wrap_index(i, n)],
            self.waypoints[wrap_index(i + 1, n)],
            self.waypoints[wrap_index(i + 2, n)],
        ]
    }
}

/// Resolves a possibly out-of-range index onto a loop of `n` entries.
///
/// Negative indices wrap to the high end, overflowing ones to the low end.
pub fn wrap_index(index: isize, n: usize) -> usize {
    debug_assert!(n > 0);
    index.rem_euclid(n as isize) as usize
}

/// Fractional part of `t` in `[0, 1)`. Non-finite input maps to 0.
pub fn wrap_unit(t: f32) -> f32 {
    if !t.is_finite() {
        return 0.0;
    }
    let wrapped = t - t.floor();
    // tiny negative inputs round up to exactly 1.0
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}
