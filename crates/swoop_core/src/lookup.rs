//! Target position lookup
//!
//! Flights can start and end at live UI elements instead of literal
//! coordinates. A `TargetId` is a stable handle to such an element; the
//! `PositionLookup` contract resolves it to current screen bounds, returning
//! `None` for anything that is not currently mounted.
//!
//! `TargetRegistry` is the provided implementation: the application layer
//! updates it whenever layout changes, so lookups never touch a rendering
//! tree directly.

use crate::geometry::{Point, Rect, Size};
use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex};

new_key_type! {
    /// Stable handle to a registered flight target
    pub struct TargetId;
}

/// Resolves target handles to current on-screen geometry.
///
/// Implementations return `None` for any handle that does not refer to a
/// mounted, rendered element at the time of the call.
pub trait PositionLookup: Send + Sync {
    /// Current top-left position of the target, if mounted
    fn resolve(&self, target: TargetId) -> Option<Point>;

    /// Current size of the target, if mounted
    fn size(&self, target: TargetId) -> Option<Size>;
}

/// Shared slotmap-backed registry of target bounds.
///
/// Cloning is cheap; all clones observe the same registrations.
#[derive(Clone, Default)]
pub struct TargetRegistry {
    inner: Arc<Mutex<SlotMap<TargetId, Rect>>>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a target with its current bounds
    pub fn register(&self, bounds: Rect) -> TargetId {
        self.inner.lock().unwrap().insert(bounds)
    }

    /// Update a target's bounds after a layout pass.
    ///
    /// Updates against removed targets are ignored.
    pub fn update(&self, target: TargetId, bounds: Rect) {
        if let Some(slot) = self.inner.lock().unwrap().get_mut(target) {
            *slot = bounds;
        }
    }

    /// Remove a target; subsequent lookups resolve to `None`
    pub fn remove(&self, target: TargetId) {
        self.inner.lock().unwrap().remove(target);
    }

    /// Number of currently registered targets
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().is_empty()
    }
}

impl PositionLookup for TargetRegistry {
    fn resolve(&self, target: TargetId) -> Option<Point> {
        self.inner.lock().unwrap().get(target).map(|r| r.origin)
    }

    fn size(&self, target: TargetId) -> Option<Size> {
        self.inner.lock().unwrap().get(target).map(|r| r.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_registered_target() {
        let registry = TargetRegistry::new();
        let id = registry.register(Rect::new(Point::new(5.0, 6.0), Size::new(20.0, 10.0)));

        assert_eq!(registry.resolve(id), Some(Point::new(5.0, 6.0)));
        assert_eq!(registry.size(id), Some(Size::new(20.0, 10.0)));
    }

    #[test]
    fn removed_target_resolves_to_none() {
        let registry = TargetRegistry::new();
        let id = registry.register(Rect::ZERO);
        registry.remove(id);

        assert_eq!(registry.resolve(id), None);
        assert_eq!(registry.size(id), None);
    }

    #[test]
    fn update_moves_bounds() {
        let registry = TargetRegistry::new();
        let id = registry.register(Rect::ZERO);
        registry.update(id, Rect::new(Point::new(1.0, 2.0), Size::new(3.0, 4.0)));

        assert_eq!(registry.resolve(id), Some(Point::new(1.0, 2.0)));
    }

    #[test]
    fn clones_share_state() {
        let registry = TargetRegistry::new();
        let clone = registry.clone();
        let id = registry.register(Rect::ZERO);

        assert_eq!(clone.resolve(id), Some(Point::ZERO));
    }
}
