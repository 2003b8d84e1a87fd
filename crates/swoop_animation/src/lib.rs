//! Swoop Animation Engine
//!
//! Curved "fly to target" effects rendered in a transient overlay above the
//! normal UI, optionally repeated with staggered timing.
//!
//! # Features
//!
//! - **Curve Engine**: quadratic Bézier trajectories and a three-phase
//!   spread/hold/move variant, pure math over linear progress
//! - **Control-Point Sampling**: one random perturbation point per item,
//!   injectable RNG for deterministic tests
//! - **Flight Drivers**: per-item state machines turning host frame ticks
//!   into (position, scale) render callbacks
//! - **Launch Orchestration**: staggered repeats, bounded overlay lifetimes,
//!   and target-reference resolution with synchronous failures
//! - **Headless Host**: an in-process overlay host for tests and demos
//!
//! Each launch is an independent, fire-and-forget timed effect; there is no
//! timeline graph and no cross-launch coordination.

pub mod curve;
pub mod driver;
pub mod easing;
pub mod error;
pub mod headless;
pub mod launch;
pub mod sampler;

pub use curve::{bezier_point, scale_at, FlightPath};
pub use driver::{DriverState, FlightDriver, FlightFrame, FlightSpec, RenderFn};
pub use easing::Easing;
pub use error::{LaunchError, Result};
pub use headless::HeadlessHost;
pub use launch::{LaunchConfig, Launcher, RepeatItem, RepeatPlan};
