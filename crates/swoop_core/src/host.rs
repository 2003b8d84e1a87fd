//! Overlay host contract
//!
//! An overlay is a transient visual layer rendered above normal application
//! content, independent of layout. The host owns the frame loop: once an
//! entry is mounted, its frame callback is invoked once per host tick with
//! the time elapsed since the mount, until one of three things happens:
//!
//! - the callback reports [`FrameStatus::Done`],
//! - the entry's `lifetime` elapses (forced disposal; this wins over a
//!   still-animating callback so no overlay outlives a bounded window),
//! - [`OverlayHost::unmount`] is called explicitly.
//!
//! Hosts must tolerate overlapping concurrent mounts; entries are
//! independent of each other.

use slotmap::new_key_type;
use std::time::Duration;

new_key_type! {
    /// Handle to a mounted overlay entry
    pub struct OverlayId;
}

/// Result of a single overlay frame callback
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    /// Keep ticking this entry
    Active,
    /// The entry finished; the host should unmount it
    Done,
}

/// Per-frame callback, invoked with time elapsed since the entry was mounted
pub type FrameCallback = Box<dyn FnMut(Duration) -> FrameStatus + Send>;

/// A mounted overlay: a frame callback plus a forced-disposal bound.
pub struct OverlayEntry {
    /// Invoked once per host tick until the entry is disposed
    pub on_frame: FrameCallback,
    /// Upper bound on how long the entry may stay mounted, independent of
    /// what `on_frame` reports
    pub lifetime: Duration,
}

impl OverlayEntry {
    pub fn new(on_frame: FrameCallback, lifetime: Duration) -> Self {
        Self { on_frame, lifetime }
    }
}

/// Hosts a transient layer of overlay entries above the normal UI.
pub trait OverlayHost: Send + Sync {
    /// Mount an entry; it starts receiving frame callbacks on the next tick
    fn mount(&self, entry: OverlayEntry) -> OverlayId;

    /// Dispose an entry early. Unmounting an already-disposed entry is a
    /// no-op; the entry's callback is never invoked again.
    fn unmount(&self, id: OverlayId);
}
