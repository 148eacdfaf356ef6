use glam::Vec3;

/// Uniform Catmull-Rom blend of four control points.
///
/// Returns `p1` at `t == 0` and `p2` at `t == 1`; `p0` and `p3` only shape
/// the tangents at either end of the segment.
pub fn catmull_rom(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;
    let t3 = t2 * t;

    let c0 = -0.5 * t3 + t2 - 0.5 * t;
    let c1 = 1.5 * t3 - 2.5 * t2 + 1.0;
    let c2 = -1.5 * t3 + 2.0 * t2 + 0.5 * t;
    let c3 = 0.5 * t3 - 0.5 * t2;

    p0 * c0 + p1 * c1 + p2 * c2 + p3 * c3
}

/// Derivative of [`catmull_rom`] with respect to `t`.
pub fn catmull_rom_tangent(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;

    let d0 = -1.5 * t2 + 2.0 * t - 0.5;
    let d1 = 4.5 * t2 - 5.0 * t;
    let d2 = -4.5 * t2 + 4.0 * t + 0.5;
    let d3 = 1.5 * t2 - t;

    p0 * d0 + p1 * d1 + p2 * d2 + p3 * d3
}
