//! Error types for slicing, mesh loading and the demo binary.

use std::path::PathBuf;

use thiserror::Error;

/// Which half of a [`ClipBuffer`](crate::clipper::ClipBuffer) ran out of room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipBufferKind {
    Triangles,
    Points,
}

impl std::fmt::Display for ClipBufferKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipBufferKind::Triangles => f.write_str("triangle"),
            ClipBufferKind::Points => f.write_str("point"),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SliceError {
    /// The cross-section reduced to a point count that cannot be capped with one or two
    /// triangles. The clipped triangles are still valid.
    #[error("cannot cap a cross-section of {points} points")]
    DegenerateCap { points: usize },

    #[error("{buffer} buffer full (capacity {capacity})")]
    BufferOverflow {
        buffer: ClipBufferKind,
        capacity: usize,
    },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to load {path}: {source}")]
    Obj {
        path: PathBuf,
        #[source]
        source: tobj::LoadError,
    },

    #[error("{path} has no triangles")]
    Empty { path: PathBuf },
}

#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Slice(#[from] SliceError),

    #[error("failed to write frame: {0}")]
    Image(#[from] image::ImageError),

    #[error("cannot create output directory: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Args(#[from] clap::Error),

    #[error("invalid argument: {0}")]
    Config(String),
}
