//! Control-point sampler
//!
//! Each animated item gets one randomly perturbed control point near its
//! origin, drawn exactly once when the item's driver is created and fixed
//! for the item's lifetime. Repeated items draw independently, so no two
//! arcs of a staggered launch are correlated.

use rand::Rng;
use swoop_core::Point;

/// Sample a control point uniformly from the square of side
/// `2 * control_range` centred on `origin`.
///
/// A zero range degenerates to the origin itself; negative ranges are not
/// validated and simply mirror the square.
pub fn sample_control_point<R: Rng + ?Sized>(
    origin: Point,
    control_range: f32,
    rng: &mut R,
) -> Point {
    Point {
        x: origin.x + rng.random::<f32>() * 2.0 * control_range - control_range,
        y: origin.y + rng.random::<f32>() * 2.0 * control_range - control_range,
    }
}

/// Sample using the process-wide generator.
pub fn sample_control_point_default(origin: Point, control_range: f32) -> Point {
    sample_control_point(origin, control_range, &mut rand::rng())
}
