//! Swoop Core Primitives
//!
//! Foundational types for the Swoop flight-effect system:
//!
//! - **Geometry**: `Point`, `Size`, `Rect` value types
//! - **Target Lookup**: stable handles to live UI elements and the
//!   `PositionLookup` contract for resolving them to screen bounds
//! - **Overlay Host**: the contract for mounting transient visual layers
//!   that tick frame callbacks above the normal UI
//!
//! The animation engine itself lives in `swoop_animation`; this crate never
//! touches a rendering tree or a timer.

pub mod geometry;
pub mod host;
pub mod lookup;

pub use geometry::{Point, Rect, Size};
pub use host::{FrameCallback, FrameStatus, OverlayEntry, OverlayHost, OverlayId};
pub use lookup::{PositionLookup, TargetId, TargetRegistry};
