//! Headless overlay host
//!
//! An in-process [`OverlayHost`] with no rendering tree behind it, for tests
//! and console demos. Frames can be driven three ways:
//!
//! - [`HeadlessHost::tick`] — one frame pass, caller controls cadence
//! - [`HeadlessHost::run_for`] — blocking fixed-fps loop for a bounded window
//! - [`HeadlessHost::start_background`] — fixed-fps loop on its own thread,
//!   like a platform frame clock that keeps ticking while the caller awaits
//!
//! Each mounted entry is ticked with the time elapsed since its own mount.
//! Forced lifetime disposal is checked before the frame callback runs, so a
//! misbehaving entry can never outlive its window.

use slotmap::SlotMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use swoop_core::{FrameCallback, FrameStatus, OverlayEntry, OverlayHost, OverlayId};
use tracing::trace;

struct Mounted {
    on_frame: FrameCallback,
    lifetime: Duration,
    mounted_at: Instant,
}

/// Overlay host that ticks entries without a windowing system.
pub struct HeadlessHost {
    inner: Arc<Mutex<SlotMap<OverlayId, Mounted>>>,
    stop_flag: Arc<AtomicBool>,
    thread_handle: Mutex<Option<JoinHandle<()>>>,
    total_mounted: AtomicUsize,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SlotMap::with_key())),
            stop_flag: Arc::new(AtomicBool::new(false)),
            thread_handle: Mutex::new(None),
            total_mounted: AtomicUsize::new(0),
        }
    }

    /// Run one frame pass over all mounted entries.
    pub fn tick(&self) {
        Self::tick_map(&self.inner);
    }

    fn tick_map(inner: &Mutex<SlotMap<OverlayId, Mounted>>) {
        let mut map = inner.lock().unwrap();
        map.retain(|id, mounted| {
            let elapsed = mounted.mounted_at.elapsed();
            if elapsed >= mounted.lifetime {
                trace!(?id, "overlay lifetime elapsed, disposing");
                return false;
            }
            match (mounted.on_frame)(elapsed) {
                FrameStatus::Active => true,
                FrameStatus::Done => {
                    trace!(?id, "overlay entry finished");
                    false
                }
            }
        });
    }

    /// Number of entries currently mounted
    pub fn active_count(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    /// Total entries ever mounted on this host
    pub fn total_mounted(&self) -> usize {
        self.total_mounted.load(Ordering::Relaxed)
    }

    /// Tick at a fixed cadence for a bounded window, blocking the caller.
    pub fn run_for(&self, window: Duration, fps: u32) {
        let frame = Duration::from_micros(1_000_000 / fps.max(1) as u64);
        let start = Instant::now();
        while start.elapsed() < window {
            self.tick();
            thread::sleep(frame);
        }
    }

    /// Start a fixed-fps frame loop on a background thread.
    ///
    /// Calling this while a loop is already running is a no-op.
    pub fn start_background(&self, fps: u32) {
        let mut handle = self.thread_handle.lock().unwrap();
        if handle.is_some() {
            return;
        }

        let inner = Arc::clone(&self.inner);
        let stop_flag = Arc::clone(&self.stop_flag);
        stop_flag.store(false, Ordering::Relaxed);
        let frame = Duration::from_micros(1_000_000 / fps.max(1) as u64);

        *handle = Some(thread::spawn(move || {
            while !stop_flag.load(Ordering::Relaxed) {
                let start = Instant::now();
                Self::tick_map(&inner);
                let elapsed = start.elapsed();
                if elapsed < frame {
                    thread::sleep(frame - elapsed);
                }
            }
        }));
    }

    /// Stop the background frame loop, joining its thread.
    pub fn stop_background(&self) {
        self.stop_flag.store(true, Ordering::Relaxed);
        if let Some(handle) = self.thread_handle.lock().unwrap().take() {
            let _ = handle.join();
        }
    }
}

impl OverlayHost for HeadlessHost {
    fn mount(&self, entry: OverlayEntry) -> OverlayId {
        self.total_mounted.fetch_add(1, Ordering::Relaxed);
        let id = self.inner.lock().unwrap().insert(Mounted {
            on_frame: entry.on_frame,
            lifetime: entry.lifetime,
            mounted_at: Instant::now(),
        });
        trace!(?id, lifetime_ms = entry.lifetime.as_millis() as u64, "overlay mounted");
        id
    }

    fn unmount(&self, id: OverlayId) {
        self.inner.lock().unwrap().remove(id);
    }
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for HeadlessHost {
    fn drop(&mut self) {
        self.stop_background();
    }
}
