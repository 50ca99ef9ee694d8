//! Clipping a single triangle against a plane.
//!
//! A triangle with one vertex on the kept side becomes one smaller triangle. A triangle
//! with two vertices on the kept side becomes a quad, emitted as two triangles. The
//! vertex order of the output is fixed so that it keeps the input winding, and every
//! point created on the plane is also recorded for rebuilding the cross-section.

use crate::error::{ClipBufferKind, SliceError};
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::plane::ClipPlane;
use crate::triangle::Triangle;

/// A vertex is on the kept side only if it is further than this from the plane.
pub const CLIP_EPSILON: f32 = 0.0001;

/// Output storage for one slicing pass.
///
/// Capacity is fixed when the buffer is created and never grows.
#[derive(Debug, Clone)]
pub struct ClipBuffer {
    triangles: Vec<Triangle>,
    points: Vec<Vec3>,
    triangle_capacity: usize,
    point_capacity: usize,
}

impl ClipBuffer {
    pub fn with_capacity(triangles: usize, points: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(triangles),
            points: Vec::with_capacity(points),
            triangle_capacity: triangles,
            point_capacity: points,
        }
    }

    /// Sized for the worst case of clipping `count` triangles: two output triangles and
    /// three plane points each.
    pub fn for_triangles(count: usize) -> Self {
        Self::with_capacity(count * 2, count * 3)
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Points created on the plane, in the order they were produced. May contain
    /// duplicates.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn clear(&mut self) {
        self.triangles.clear();
        self.points.clear();
    }

    pub fn into_parts(self) -> (Vec<Triangle>, Vec<Vec3>) {
        (self.triangles, self.points)
    }

    fn ensure_room(&self, triangles: usize, points: usize) -> Result<(), SliceError> {
        if self.triangles.len() + triangles > self.triangle_capacity {
            return Err(overflow(ClipBufferKind::Triangles, self.triangle_capacity));
        }
        if self.points.len() + points > self.point_capacity {
            return Err(overflow(ClipBufferKind::Points, self.point_capacity));
        }
        Ok(())
    }
}

fn overflow(buffer: ClipBufferKind, capacity: usize) -> SliceError {
    log::error!("clip {buffer} buffer overflow at capacity {capacity}");
    SliceError::BufferOverflow { buffer, capacity }
}

/// What a single call to [`clip_triangle`] produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClipCounts {
    /// Vertices on the kept side, 0 to 3.
    pub inside: usize,
    pub triangles: usize,
    pub points: usize,
}

/// Clips `triangle` against `plane`, appending the kept part to `out`.
///
/// | vertices kept | triangles out | points out |
/// |---------------|---------------|------------|
/// | 0             | 0             | 0          |
/// | 1             | 1             | 2          |
/// | 2             | 2             | 3          |
/// | 3             | 1 (unchanged) | 0          |
///
/// With two vertices kept, the shared crossing point is recorded twice.
///
/// # Errors
/// Returns [`SliceError::BufferOverflow`] without writing anything if `out` cannot hold
/// the result.
pub fn clip_triangle(
    triangle: &Triangle,
    plane: &ClipPlane,
    out: &mut ClipBuffer,
) -> Result<ClipCounts, SliceError> {
    let inside = triangle
        .points
        .map(|p| plane.signed_distance(p) > CLIP_EPSILON);
    let count = inside.iter().filter(|&&kept| kept).count();
    log::trace!("clip {:?}: {count} vertices kept", triangle.points);

    let p = &triangle.points;
    let uv = &triangle.uvs;

    match count {
        0 => Ok(ClipCounts::default()),
        3 => {
            out.ensure_room(1, 0)?;
            out.triangles.push(*triangle);
            Ok(ClipCounts {
                inside: 3,
                triangles: 1,
                points: 0,
            })
        }
        1 => {
            let r = inside.iter().position(|&kept| kept).unwrap_or(0);
            let prev = (r + 2) % 3;
            let next = (r + 1) % 3;
            let (p0, uv0) = crossing(triangle, plane, prev, r, prev);
            let (p2, uv2) = crossing(triangle, plane, r, next, next);

            out.ensure_room(1, 2)?;
            out.triangles
                .push(Triangle::with_uvs([p0, p[r], p2], [uv0, uv[r], uv2]));
            out.points.extend([p0, p2]);
            Ok(ClipCounts {
                inside: 1,
                triangles: 1,
                points: 2,
            })
        }
        _ => {
            let c = inside.iter().position(|&kept| !kept).unwrap_or(0);
            let a = (c + 1) % 3;
            let b = (a + 1) % 3;
            let (ca, uv_ca) = crossing(triangle, plane, c, a, c);
            let (cb, uv_cb) = crossing(triangle, plane, c, b, c);

            out.ensure_room(2, 3)?;
            out.triangles
                .push(Triangle::with_uvs([ca, p[a], p[b]], [uv_ca, uv[a], uv[b]]));
            out.triangles
                .push(Triangle::with_uvs([p[b], cb, ca], [uv[b], uv_cb, uv_ca]));
            out.points.extend([ca, cb, ca]);
            Ok(ClipCounts {
                inside: 2,
                triangles: 2,
                points: 3,
            })
        }
    }
}

/// Where the edge `from -> to` meets the plane, with its interpolated texture coordinate.
///
/// An edge parallel to the plane, or one whose ends sit on the same side of it, has no
/// crossing; the vertex at index `outside` lies within tolerance of the plane in that
/// case and is used instead.
fn crossing(
    triangle: &Triangle,
    plane: &ClipPlane,
    from: usize,
    to: usize,
    outside: usize,
) -> (Vec3, Vec2) {
    let (v1, v2) = (triangle.points[from], triangle.points[to]);
    match plane.edge_parameter(v1, v2) {
        Some(t) => (v1.lerp(v2, t), triangle.uvs[from].lerp(triangle.uvs[to], t)),
        None => {
            log::trace!("edge {v1:?} -> {v2:?} does not cross plane, using endpoint");
            (triangle.points[outside], triangle.uvs[outside])
        }
    }
}
