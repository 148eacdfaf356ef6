use super::{wrap_unit, PathAnimator};

impl PathAnimator {
    /// Maps a fraction of the loop's chord length onto the uniform spline
    /// parameter that reaches the same waypoint-relative position.
    ///
    /// Segment `i` covers `[cumulative[i], cumulative[i] + length[i])` of the
    /// total length and is mapped linearly onto `[i / N, (i + 1) / N)`.
    /// Zero-length segments are skipped. A path of total length zero has
    /// nothing to reparametrize, so `t` comes back unchanged.
    pub fn arc_length_parameter(&self, t: f32) -> f32 {
        let t = wrap_unit(t);
        if self.total_length <= 0.0 {
            return t;
        }

        let n = self.waypoints.len();
        let distance = t * self.total_length;

        // Last segment whose start lies at or before `distance`
        let segment = self
            .cumulative_lengths
            .partition_point(|&start| start <= distance)
            .saturating_sub(1)
            .min(n - 1);

        let length = self.segment_lengths[segment];
        let local = if length > 0.0 {
            ((distance - self.cumulative_lengths[segment]) / length).clamp(0.0, 1.0)
        } else {
            0.0
        };

        wrap_unit((segment as f32 + local) / n as f32)
    }
}
