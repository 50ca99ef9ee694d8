//! Plane slicing.
//!
//! - [`triangle`]: clip one triangle against a plane, recording the points it creates
//!   on the plane.
//! - [`reduce`]: merge those points and drop the ones lying along an edge of the
//!   cross-section.
//! - [`slice`]: run both over a whole mesh, order the remaining corners around the
//!   plane normal and cap the opening.

pub mod reduce;
pub mod slice;
pub mod triangle;

pub use reduce::reduce_points;
pub use slice::{slice, sort_around_normal, Slice, SliceStats};
pub use triangle::{clip_triangle, ClipBuffer, ClipCounts, CLIP_EPSILON};
