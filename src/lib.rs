//! Plane slicing for triangle meshes.
//!
//! Cuts a closed mesh with a plane, throws away the part behind it and closes the
//! opening with a cap. Includes the vector and quaternion math that steers planes and
//! folds triangles, plus a headless software renderer for looking at the result.
//!
//! # Quick Start
//!
//! ```
//! use trislice::prelude::*;
//!
//! let cube = cube_at(Vec3::ZERO);
//! let plane = ClipPlane::new(Vec3::ZERO, Vec3::FORWARD);
//! let cut = slice(&cube, &plane).unwrap();
//! assert_eq!(cut.outline().len(), 4);
//! assert_eq!(cut.cap().len(), 2);
//! ```

pub mod clipper;
pub mod colors;
pub mod config;
pub mod engine;
pub mod error;
pub mod light;
pub mod math;
pub mod mesh;
pub mod plane;
pub mod rotation;
pub mod triangle;
pub mod vertex;

pub(crate) mod render;

pub use clipper::{clip_triangle, reduce_points, slice, ClipBuffer, Slice};
pub use engine::Engine;
pub use error::{DemoError, LoadError, SliceError};
pub use mesh::Mesh;

/// Prelude module for convenient imports.
pub mod prelude {
    // Slicing
    pub use crate::clipper::{
        clip_triangle, reduce_points, slice, ClipBuffer, ClipCounts, Slice, SliceStats,
    };
    pub use crate::error::SliceError;
    pub use crate::plane::{ClipPlane, Direction, PlaneBasis};

    // Geometry
    pub use crate::mesh::{cube_at, make_cube, Mesh};
    pub use crate::rotation::{rotate_plane, rotate_vertex, Winding, PLANE_SWEEP_STEP};
    pub use crate::triangle::{IdentityTriangle, Triangle};

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::quat::Quat;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::vec4::Vec4;
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{EdgeFunctionRasterizer, FlatShader, FrameBuffer, Rasterizer, ScreenTriangle};
}
