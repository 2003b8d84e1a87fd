//! Launch orchestrator
//!
//! Public entry points for firing flights. A launch resolves coordinates
//! (directly or through the target lookup), derives the per-item stagger
//! schedule, mounts one overlay-hosted driver per repeated item, and
//! returns once a conservative upper bound on the schedule has elapsed.

use crate::driver::{DriverState, FlightDriver, FlightSpec, RenderFn};
use crate::error::{LaunchError, Result};
use smallvec::SmallVec;
use std::sync::Arc;
use std::time::Duration;
use swoop_core::{FrameStatus, OverlayEntry, OverlayHost, Point, PositionLookup, TargetId};
use tracing::debug;

/// Floor for the overlay safety-disposal window, in milliseconds
pub const MIN_OVERLAY_LIFETIME_MS: u32 = 10;

/// Ceiling for the overlay safety-disposal window, in milliseconds
pub const MAX_OVERLAY_LIFETIME_MS: u32 = 5_000;

/// Trimmed off an item's duration when deriving its disposal window
pub const OVERLAY_LIFETIME_TRIM_MS: u32 = 600;

/// Configuration for one launch call.
#[derive(Clone, Copy, Debug)]
pub struct LaunchConfig {
    /// Base flight duration in milliseconds
    pub duration_ms: u32,
    /// Control-point perturbation radius
    pub control_range: f32,
    /// How many items fly, each on its own staggered schedule
    pub repeat_count: u32,
    /// Stagger between repeated items, in milliseconds
    pub items_delay_ms: u32,
    /// Keep full size at the end instead of shrinking away
    pub keep_size_on_end: bool,
    /// Selects the phased (spread -> hold -> move) trajectory when set
    pub delay_before_move_ms: Option<u32>,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            duration_ms: 500,
            control_range: 100.0,
            repeat_count: 1,
            items_delay_ms: 50,
            keep_size_on_end: false,
            delay_before_move_ms: None,
        }
    }
}

impl LaunchConfig {
    pub fn duration_ms(mut self, ms: u32) -> Self {
        self.duration_ms = ms;
        self
    }

    pub fn control_range(mut self, range: f32) -> Self {
        self.control_range = range;
        self
    }

    pub fn repeat(mut self, count: u32) -> Self {
        self.repeat_count = count;
        self
    }

    pub fn items_delay_ms(mut self, ms: u32) -> Self {
        self.items_delay_ms = ms;
        self
    }

    pub fn keep_size_on_end(mut self, keep: bool) -> Self {
        self.keep_size_on_end = keep;
        self
    }

    pub fn delay_before_move_ms(mut self, ms: u32) -> Self {
        self.delay_before_move_ms = Some(ms);
        self
    }
}

/// One scheduled item of a launch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RepeatItem {
    /// 0-based index, visible to the caller's content factory
    pub index: usize,
    /// This item's flight duration in milliseconds
    pub duration_ms: u32,
    /// Forced-disposal window for this item's overlay, in milliseconds
    pub overlay_lifetime_ms: u32,
}

/// The per-item schedule derived once per launch call.
#[derive(Clone, Debug)]
pub struct RepeatPlan {
    items: SmallVec<[RepeatItem; 4]>,
    resolve_after_ms: u32,
}

impl RepeatPlan {
    /// Derive the schedule: item `i` flies for
    /// `duration + (i + 1) * items_delay`, and its overlay lives for that
    /// duration minus [`OVERLAY_LIFETIME_TRIM_MS`], clamped to
    /// [`MIN_OVERLAY_LIFETIME_MS`]..=[`MAX_OVERLAY_LIFETIME_MS`].
    pub fn new(config: &LaunchConfig) -> Self {
        let items = (0..config.repeat_count as usize)
            .map(|index| {
                let duration_ms = config.duration_ms + (index as u32 + 1) * config.items_delay_ms;
                let overlay_lifetime_ms = duration_ms
                    .saturating_sub(OVERLAY_LIFETIME_TRIM_MS)
                    .clamp(MIN_OVERLAY_LIFETIME_MS, MAX_OVERLAY_LIFETIME_MS);
                RepeatItem {
                    index,
                    duration_ms,
                    overlay_lifetime_ms,
                }
            })
            .collect();

        Self {
            items,
            resolve_after_ms: config.duration_ms
                + (config.repeat_count + 1) * config.items_delay_ms,
        }
    }

    pub fn items(&self) -> &[RepeatItem] {
        &self.items
    }

    /// How long the orchestrator waits before resolving its future
    pub fn resolve_after(&self) -> Duration {
        Duration::from_millis(self.resolve_after_ms as u64)
    }
}

/// Produces a per-frame render callback for each repeated item.
///
/// The index identifies the item within a launch, so callers can vary the
/// flown content per repeat.
pub trait ContentFactory: FnMut(usize) -> RenderFn {}
impl<F: FnMut(usize) -> RenderFn> ContentFactory for F {}

/// Fires flights against an overlay host and a target lookup.
#[derive(Clone)]
pub struct Launcher {
    host: Arc<dyn OverlayHost>,
    lookup: Arc<dyn PositionLookup>,
}

impl Launcher {
    pub fn new(host: Arc<dyn OverlayHost>, lookup: Arc<dyn PositionLookup>) -> Self {
        Self { host, lookup }
    }

    /// Launch from literal coordinates.
    ///
    /// Mounts one overlay-hosted driver per repeated item, then waits for
    /// `duration + (repeat_count + 1) * items_delay`. The wait is a
    /// conservative scheduling bound, not a join: individual drivers (and
    /// their overlays' forced disposal) run on their own timers, and some
    /// may still be animating when this future resolves.
    pub async fn launch<F>(&self, origin: Point, destination: Point, config: LaunchConfig, mut content: F)
    where
        F: ContentFactory,
    {
        let plan = RepeatPlan::new(&config);
        debug!(
            items = plan.items().len(),
            resolve_after_ms = plan.resolve_after_ms,
            "scheduling flight launch"
        );

        for item in plan.items() {
            let spec = FlightSpec {
                origin,
                destination,
                duration_ms: item.duration_ms,
                control_range: config.control_range,
                keep_size_on_end: config.keep_size_on_end,
                delay_before_move_ms: config.delay_before_move_ms,
            };
            let mut driver = FlightDriver::new(spec, content(item.index));
            driver.start();

            let entry = OverlayEntry::new(
                Box::new(move |elapsed| match driver.tick(elapsed) {
                    DriverState::Completed | DriverState::Cancelled => FrameStatus::Done,
                    _ => FrameStatus::Active,
                }),
                Duration::from_millis(item.overlay_lifetime_ms as u64),
            );
            self.host.mount(entry);
        }

        tokio::time::sleep(plan.resolve_after()).await;
    }

    /// Launch between two live targets.
    ///
    /// Both references are resolved up front, origin first; an unmounted
    /// reference fails the call before any overlay is mounted. On success
    /// this delegates to [`Launcher::launch`].
    pub async fn launch_from_targets<F>(
        &self,
        origin: TargetId,
        destination: TargetId,
        config: LaunchConfig,
        content: F,
    ) -> Result<()>
    where
        F: ContentFactory,
    {
        let origin = self
            .lookup
            .resolve(origin)
            .ok_or(LaunchError::OriginNotFound)?;
        let destination = self
            .lookup
            .resolve(destination)
            .ok_or(LaunchError::DestinationNotFound)?;

        self.launch(origin, destination, config, content).await;
        Ok(())
    }
}
