//! Flight driver
//!
//! One driver per animated item. The driver owns the item's trajectory
//! (including its one-shot control point) and turns host-provided elapsed
//! time into a rendered frame. Position is a pure function of elapsed time,
//! not of tick count, so a dropped frame is simply caught up on the next
//! tick.

use crate::curve::{self, FlightPath};
use crate::sampler;
use std::time::Duration;
use swoop_core::Point;
use tracing::trace;

/// Configuration for one animated item's flight.
#[derive(Clone, Copy, Debug)]
pub struct FlightSpec {
    pub origin: Point,
    pub destination: Point,
    /// Total flight duration in milliseconds
    pub duration_ms: u32,
    /// Perturbation radius for the control point
    pub control_range: f32,
    /// Keep full size at the end instead of shrinking away
    pub keep_size_on_end: bool,
    /// Selects phased (spread -> hold -> move) mode when set
    pub delay_before_move_ms: Option<u32>,
}

/// Position and scale reported to the render callback each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlightFrame {
    pub position: Point,
    /// Size-scale factor in [0, 1]
    pub scale: f32,
}

/// Per-frame render callback for one item's content.
pub type RenderFn = Box<dyn FnMut(FlightFrame) + Send>;

/// Driver lifecycle states. `Completed` and `Cancelled` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Created,
    Running,
    Completed,
    Cancelled,
}

/// State machine driving one item from origin to destination.
pub struct FlightDriver {
    path: FlightPath,
    keep_size_on_end: bool,
    state: DriverState,
    render: RenderFn,
}

impl FlightDriver {
    /// Create a driver, sampling its control point from the process-wide
    /// generator. The control point is fixed for the driver's lifetime.
    pub fn new(spec: FlightSpec, render: RenderFn) -> Self {
        let control = sampler::sample_control_point_default(spec.origin, spec.control_range);
        Self::with_control_point(spec, control, render)
    }

    /// Create a driver with an explicit control point (deterministic tests).
    pub fn with_control_point(spec: FlightSpec, control: Point, render: RenderFn) -> Self {
        Self {
            path: FlightPath {
                origin: spec.origin,
                control,
                destination: spec.destination,
                duration_ms: spec.duration_ms,
                delay_before_move_ms: spec.delay_before_move_ms,
            },
            keep_size_on_end: spec.keep_size_on_end,
            state: DriverState::Created,
            render,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// The control point sampled at creation
    pub fn control_point(&self) -> Point {
        self.path.control
    }

    /// Begin the progress clock. Only meaningful from `Created`.
    pub fn start(&mut self) {
        if self.state == DriverState::Created {
            self.state = DriverState::Running;
        }
    }

    /// Host frame tick. Recomputes linear progress from elapsed time,
    /// derives (position, scale), and invokes the render callback. Returns
    /// the state after the tick; the first tick that reaches full progress
    /// transitions to `Completed`, and later ticks do nothing.
    pub fn tick(&mut self, elapsed: Duration) -> DriverState {
        if self.state != DriverState::Running {
            return self.state;
        }

        let progress = if self.path.duration_ms == 0 {
            1.0
        } else {
            (elapsed.as_secs_f32() * 1000.0 / self.path.duration_ms as f32).clamp(0.0, 1.0)
        };

        let frame = FlightFrame {
            position: self.path.position_at(progress),
            scale: curve::scale_at(progress, self.keep_size_on_end),
        };
        (self.render)(frame);

        if progress >= 1.0 {
            self.state = DriverState::Completed;
            trace!("flight driver completed");
        }
        self.state
    }

    /// Cancel outright (hosting context torn down). No further callbacks
    /// are performed and the state is terminal.
    pub fn cancel(&mut self) {
        if matches!(self.state, DriverState::Created | DriverState::Running) {
            self.state = DriverState::Cancelled;
            trace!("flight driver cancelled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn spec(duration_ms: u32) -> FlightSpec {
        FlightSpec {
            origin: Point::new(0.0, 0.0),
            destination: Point::new(100.0, 100.0),
            duration_ms,
            control_range: 0.0,
            keep_size_on_end: false,
            delay_before_move_ms: None,
        }
    }

    fn capture() -> (Arc<Mutex<Vec<FlightFrame>>>, RenderFn) {
        let frames = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&frames);
        let render: RenderFn = Box::new(move |frame| sink.lock().unwrap().push(frame));
        (frames, render)
    }

    #[test]
    fn lifecycle_created_running_completed() {
        let (frames, render) = capture();
        let mut driver = FlightDriver::with_control_point(spec(500), Point::ZERO, render);
        assert_eq!(driver.state(), DriverState::Created);

        // Ticks before start are ignored
        driver.tick(Duration::from_millis(100));
        assert!(frames.lock().unwrap().is_empty());

        driver.start();
        assert_eq!(driver.state(), DriverState::Running);

        driver.tick(Duration::from_millis(250));
        assert_eq!(driver.state(), DriverState::Running);

        driver.tick(Duration::from_millis(500));
        assert_eq!(driver.state(), DriverState::Completed);

        let frames = frames.lock().unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1].position, Point::new(100.0, 100.0));
        assert_eq!(frames[1].scale, 0.0);
    }

    #[test]
    fn completed_driver_performs_no_further_callbacks() {
        let (frames, render) = capture();
        let mut driver = FlightDriver::with_control_point(spec(100), Point::ZERO, render);
        driver.start();
        driver.tick(Duration::from_millis(200));
        assert_eq!(driver.state(), DriverState::Completed);

        driver.tick(Duration::from_millis(300));
        assert_eq!(frames.lock().unwrap().len(), 1);
    }

    #[test]
    fn cancel_is_terminal_and_silent() {
        let (frames, render) = capture();
        let mut driver = FlightDriver::with_control_point(spec(500), Point::ZERO, render);
        driver.start();
        driver.cancel();
        assert_eq!(driver.state(), DriverState::Cancelled);

        driver.tick(Duration::from_millis(250));
        assert!(frames.lock().unwrap().is_empty());

        // Cancelling again does not resurrect or re-transition
        driver.cancel();
        assert_eq!(driver.state(), DriverState::Cancelled);
    }

    #[test]
    fn progress_clamps_past_duration() {
        let (frames, render) = capture();
        let mut driver = FlightDriver::with_control_point(spec(100), Point::ZERO, render);
        driver.start();
        driver.tick(Duration::from_millis(10_000));

        let frames = frames.lock().unwrap();
        assert_eq!(frames[0].position, Point::new(100.0, 100.0));
    }

    #[test]
    fn zero_duration_completes_on_first_tick() {
        let (frames, render) = capture();
        let mut driver = FlightDriver::with_control_point(spec(0), Point::ZERO, render);
        driver.start();
        assert_eq!(driver.tick(Duration::ZERO), DriverState::Completed);
        assert_eq!(
            frames.lock().unwrap()[0].position,
            Point::new(100.0, 100.0)
        );
    }

    #[test]
    fn keep_size_reports_full_scale_at_end() {
        let (frames, render) = capture();
        let mut driver = FlightDriver::with_control_point(
            FlightSpec {
                keep_size_on_end: true,
                ..spec(100)
            },
            Point::ZERO,
            render,
        );
        driver.start();
        driver.tick(Duration::from_millis(100));
        assert_eq!(frames.lock().unwrap()[0].scale, 1.0);
    }
}
