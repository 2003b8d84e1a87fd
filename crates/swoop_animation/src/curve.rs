//! Curve engine
//!
//! Pure trajectory math for a single flight: quadratic Bézier evaluation,
//! the three-phase spread/delay/move variant, and the end-of-flight scale
//! ramp. No I/O and no timers; everything here is a function of a linear
//! progress value the driver derives from elapsed time.

use crate::easing::Easing;
use swoop_core::Point;

/// Share of the non-delay time spent spreading from the origin toward the
/// control point in phased mode. Presentation tuning, not an invariant.
pub const SPREAD_SHARE: f32 = 0.2;

/// Share of the non-delay time spent moving from the control point to the
/// destination in phased mode.
pub const MOVE_SHARE: f32 = 0.8;

/// Raw linear progress below which the content keeps its full size. Past
/// this the scale ramps linearly down to zero at progress 1.0.
pub const SCALE_HOLD_LIMIT: f32 = 0.985;

/// Quadratic Bézier interpolation:
/// `P(t) = (1-t)^2 * origin + 2(1-t)t * control + t^2 * destination`.
pub fn bezier_point(t: f32, origin: Point, control: Point, destination: Point) -> Point {
    let u = 1.0 - t;
    Point {
        x: u * u * origin.x + 2.0 * u * t * control.x + t * t * destination.x,
        y: u * u * origin.y + 2.0 * u * t * control.y + t * t * destination.y,
    }
}

/// The fixed geometry and timing of one flight trajectory.
///
/// `delay_before_move_ms: None` selects the simple curved mode (eased
/// quadratic Bézier through the control point). `Some(delay)` selects the
/// phased mode: spread to the control point, hold there for the delay, then
/// move to the destination.
#[derive(Clone, Copy, Debug)]
pub struct FlightPath {
    pub origin: Point,
    pub control: Point,
    pub destination: Point,
    pub duration_ms: u32,
    pub delay_before_move_ms: Option<u32>,
}

impl FlightPath {
    /// Position at linear progress `t` in [0, 1].
    ///
    /// Endpoints are exact: `t <= 0` yields the origin and `t >= 1` yields
    /// the destination regardless of mode or degenerate timing.
    pub fn position_at(&self, t: f32) -> Point {
        if t <= 0.0 {
            return self.origin;
        }
        if t >= 1.0 {
            return self.destination;
        }

        match self.delay_before_move_ms {
            None => bezier_point(
                Easing::EaseOut.apply(t),
                self.origin,
                self.control,
                self.destination,
            ),
            Some(delay_ms) => self.phased_position_at(t, delay_ms),
        }
    }

    /// Phased evaluation: spread (ease-out) -> hold -> move (ease-in).
    ///
    /// When the delay swallows the whole duration the phases vanish and the
    /// flight degrades to a straight line, so it still arrives at `t = 1`.
    fn phased_position_at(&self, t: f32, delay_ms: u32) -> Point {
        let total = self.duration_ms as f32;
        let delay = delay_ms as f32;

        if total <= delay {
            return self.origin.lerp(self.destination, t);
        }

        let active = total - delay;
        let spread = SPREAD_SHARE * active;
        let move_span = MOVE_SHARE * active;
        let elapsed = t * total;

        if elapsed < spread {
            let local = Easing::EaseOut.apply(elapsed / spread);
            self.origin.lerp(self.control, local)
        } else if elapsed < spread + delay {
            self.control
        } else {
            let local = ((elapsed - spread - delay) / move_span).clamp(0.0, 1.0);
            self.control.lerp(self.destination, Easing::EaseIn.apply(local))
        }
    }
}

/// Size-scale factor at raw linear progress.
///
/// Holds at 1.0 until [`SCALE_HOLD_LIMIT`], then ramps linearly to 0.0 at
/// progress 1.0. `keep_size_on_end` pins the scale to 1.0 throughout.
pub fn scale_at(progress: f32, keep_size_on_end: bool) -> f32 {
    if keep_size_on_end {
        return 1.0;
    }
    let p = progress.clamp(0.0, 1.0);
    if p <= SCALE_HOLD_LIMIT {
        1.0
    } else {
        ((1.0 - p) / (1.0 - SCALE_HOLD_LIMIT)).clamp(0.0, 1.0)
    }
}
