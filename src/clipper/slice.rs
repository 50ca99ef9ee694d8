//! Slicing a closed mesh with a plane and capping the opening.

use std::f32::consts::PI;

use super::reduce::reduce_points;
use super::triangle::{clip_triangle, ClipBuffer};
use crate::error::SliceError;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::plane::{ClipPlane, PlaneBasis};
use crate::triangle::Triangle;

/// Texture coordinates given to the cap outline, in outline order.
const CAP_UVS: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 1.0),
];

/// How the input triangles fared against the plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SliceStats {
    /// Entirely on the cut side.
    pub discarded: usize,
    /// Entirely on the kept side.
    pub retained: usize,
    /// Crossing the plane.
    pub partial: usize,
    /// Crossing points before reduction.
    pub raw_points: usize,
}

/// The kept part of a mesh after slicing, with the cross-section capped when possible.
#[derive(Debug, Clone)]
pub struct Slice {
    triangles: Vec<Triangle>,
    clipped: usize,
    outline: Vec<Vec3>,
    cap_error: Option<SliceError>,
    stats: SliceStats,
}

impl Slice {
    /// Clipped triangles followed by the cap.
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn clipped(&self) -> &[Triangle] {
        &self.triangles[..self.clipped]
    }

    pub fn cap(&self) -> &[Triangle] {
        &self.triangles[self.clipped..]
    }

    /// Corners of the cross-section, ordered around the plane normal.
    pub fn outline(&self) -> &[Vec3] {
        &self.outline
    }

    /// Why no cap was built, if the cross-section was not empty but could not be capped.
    pub fn cap_error(&self) -> Option<&SliceError> {
        self.cap_error.as_ref()
    }

    pub fn stats(&self) -> SliceStats {
        self.stats
    }

    pub fn into_triangles(self) -> Vec<Triangle> {
        self.triangles
    }
}

/// Cuts `triangles` with `plane`, keeping the side the normal points to, and closes the
/// cut with one or two triangles facing away from the kept side.
///
/// A cross-section that reduces to anything other than 0, 3 or 4 corners is recorded as
/// [`SliceError::DegenerateCap`] on the returned [`Slice`]; its clipped triangles are
/// still usable.
///
/// # Errors
/// Only [`SliceError::BufferOverflow`], which means the clip buffer was sized wrong.
pub fn slice(triangles: &[Triangle], plane: &ClipPlane) -> Result<Slice, SliceError> {
    let mut buffer = ClipBuffer::for_triangles(triangles.len());
    let mut stats = SliceStats::default();

    for triangle in triangles {
        let counts = clip_triangle(triangle, plane, &mut buffer)?;
        match counts.inside {
            0 => stats.discarded += 1,
            3 => stats.retained += 1,
            _ => stats.partial += 1,
        }
    }

    let (mut output, raw_points) = buffer.into_parts();
    stats.raw_points = raw_points.len();

    let mut outline = reduce_points(&raw_points);
    sort_around_normal(&mut outline, plane.normal);

    let clipped = output.len();
    let cap_error = match cap_triangles(&outline) {
        Ok(cap) => {
            output.extend(cap);
            None
        }
        Err(err) => {
            log::warn!("{err}; keeping {clipped} clipped triangles without a cap");
            Some(err)
        }
    };

    log::debug!(
        "slice: {} in, {} discarded, {} retained, {} partial, {} points -> {} corners, {} out",
        triangles.len(),
        stats.discarded,
        stats.retained,
        stats.partial,
        stats.raw_points,
        outline.len(),
        output.len()
    );

    Ok(Slice {
        triangles: output,
        clipped,
        outline,
        cap_error,
        stats,
    })
}

/// Orders `points` by angle around their centroid, turning counter-clockwise about
/// `normal`: for neighbours `a` then `b`, `cross(a - c, b - c)` points along `normal`.
///
/// Seen from the side the normal points away from, the order is clockwise.
pub fn sort_around_normal(points: &mut [Vec3], normal: Vec3) {
    if points.len() < 2 {
        return;
    }
    let centroid = points.iter().fold(Vec3::ZERO, |acc, p| acc + *p) / points.len() as f32;
    let n = normal.normalize();
    let u = PlaneBasis::from_normal(n).vectors[0];
    let v = n.cross(u);

    let angle = |p: &Vec3| {
        let d = *p - centroid;
        let a = d.dot(v).atan2(d.dot(u));
        if a < 0.0 {
            a + 2.0 * PI
        } else {
            a
        }
    };
    points.sort_by(|a, b| angle(a).total_cmp(&angle(b)));
}

/// Triangulates a sorted outline. An empty outline has no cap.
fn cap_triangles(outline: &[Vec3]) -> Result<Vec<Triangle>, SliceError> {
    match *outline {
        [] => Ok(Vec::new()),
        [a, b, c] => Ok(vec![Triangle::with_uvs(
            [a, b, c],
            [CAP_UVS[0], CAP_UVS[1], CAP_UVS[2]],
        )]),
        [a, b, c, d] => Ok(vec![
            Triangle::with_uvs([a, b, c], [CAP_UVS[0], CAP_UVS[1], CAP_UVS[2]]),
            Triangle::with_uvs([c, d, a], [CAP_UVS[2], CAP_UVS[3], CAP_UVS[0]]),
        ]),
        _ => Err(SliceError::DegenerateCap {
            points: outline.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::cube_at;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn assert_square_outline(outline: &[Vec3], expected: &[Vec3; 4]) {
        assert_eq!(outline.len(), 4);
        for e in expected {
            assert!(
                outline.iter().any(|p| p.distance(*e) < 1e-5),
                "missing corner {e:?} in {outline:?}"
            );
        }
    }

    #[test]
    fn unit_cube_cut_at_z_zero() {
        let cube = cube_at(Vec3::ZERO);
        let plane = ClipPlane::new(Vec3::ZERO, Vec3::FORWARD);
        let slice = slice(&cube, &plane).unwrap();

        assert_eq!(
            slice.stats(),
            SliceStats {
                discarded: 2,
                retained: 2,
                partial: 8,
                raw_points: 20,
            }
        );
        assert_eq!(slice.clipped().len(), 14);
        assert_eq!(slice.cap().len(), 2);
        assert_eq!(slice.triangles().len(), 16);
        assert!(slice.cap_error().is_none());

        assert_square_outline(
            slice.outline(),
            &[
                Vec3::new(-0.5, -0.5, 0.0),
                Vec3::new(0.5, -0.5, 0.0),
                Vec3::new(0.5, 0.5, 0.0),
                Vec3::new(-0.5, 0.5, 0.0),
            ],
        );
        for p in slice.triangles().iter().flat_map(|t| t.points) {
            assert!(p.z >= -1e-6);
        }
    }

    #[test]
    fn cap_faces_away_from_kept_side() {
        let cube = cube_at(Vec3::ZERO);
        let plane = ClipPlane::new(Vec3::ZERO, Vec3::FORWARD);
        let slice = slice(&cube, &plane).unwrap();
        for t in slice.cap() {
            assert_relative_eq!(t.normal(), Vec3::BACK, epsilon = 1e-5);
        }
    }

    #[test]
    fn axis_aligned_cuts_give_square_caps() {
        let cube = cube_at(Vec3::ZERO);
        for axis in [Vec3::RIGHT, Vec3::UP, Vec3::FORWARD, Vec3::LEFT, Vec3::DOWN, Vec3::BACK] {
            let plane = ClipPlane::new(Vec3::ZERO, axis);
            let slice = slice(&cube, &plane).unwrap();
            assert_eq!(slice.outline().len(), 4, "axis {axis:?}");
            assert_eq!(slice.cap().len(), 2);
            for p in slice.outline() {
                assert_abs_diff_eq!(p.dot(axis), 0.0, epsilon = 1e-5);
                assert_relative_eq!(p.magnitude(), 0.5f32.sqrt(), epsilon = 1e-5);
            }
            for t in slice.cap() {
                assert_relative_eq!(t.normal(), -axis, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn cap_uvs_follow_outline() {
        let cube = cube_at(Vec3::ZERO);
        let slice = slice(&cube, &ClipPlane::new(Vec3::ZERO, Vec3::UP)).unwrap();
        let outline = slice.outline();
        let cap = slice.cap();
        assert_eq!(cap[0].points, [outline[0], outline[1], outline[2]]);
        assert_eq!(cap[0].uvs, [CAP_UVS[0], CAP_UVS[1], CAP_UVS[2]]);
        assert_eq!(cap[1].points, [outline[2], outline[3], outline[0]]);
        assert_eq!(cap[1].uvs, [CAP_UVS[2], CAP_UVS[3], CAP_UVS[0]]);
    }

    #[test]
    fn corner_cut_gives_triangle_cap() {
        let cube = cube_at(Vec3::ZERO);
        let plane = ClipPlane::new(Vec3::new(0.3, 0.3, 0.3), Vec3::ONE);
        let slice = slice(&cube, &plane).unwrap();
        assert_eq!(slice.outline().len(), 3);
        assert_eq!(slice.cap().len(), 1);
        assert_relative_eq!(slice.cap()[0].normal(), -plane.normal, epsilon = 1e-5);
    }

    #[test]
    fn hexagonal_section_is_reported_but_clipped_kept() {
        let cube = cube_at(Vec3::ZERO);
        let plane = ClipPlane::new(Vec3::ZERO, Vec3::ONE);
        let slice = slice(&cube, &plane).unwrap();
        assert_eq!(slice.cap_error(), Some(&SliceError::DegenerateCap { points: 6 }));
        assert!(slice.cap().is_empty());
        assert!(!slice.clipped().is_empty());
        assert_eq!(slice.triangles().len(), slice.clipped().len());
    }

    #[test]
    fn cloned_slice_keeps_cap_error() {
        let cube = cube_at(Vec3::ZERO);
        let cut = slice(&cube, &ClipPlane::new(Vec3::ZERO, Vec3::ONE)).unwrap();
        let copy = cut.clone();
        assert_eq!(copy.cap_error(), cut.cap_error());
        assert_eq!(copy.triangles(), cut.triangles());
        assert_eq!(copy.outline(), cut.outline());
    }

    #[test]
    fn plane_missing_mesh() {
        let cube = cube_at(Vec3::ZERO);

        let above = slice(&cube, &ClipPlane::new(Vec3::new(0.0, 0.0, 2.0), Vec3::FORWARD)).unwrap();
        assert!(above.triangles().is_empty());
        assert!(above.cap_error().is_none());
        assert_eq!(above.stats().discarded, 12);

        let below = slice(&cube, &ClipPlane::new(Vec3::new(0.0, 0.0, -2.0), Vec3::FORWARD)).unwrap();
        assert_eq!(below.triangles(), &cube[..]);
        assert!(below.outline().is_empty());
        assert!(below.cap_error().is_none());
    }

    #[test]
    fn two_kept_vertices_reduce_to_two_points() {
        let t = Triangle::new([
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 1.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
        ]);
        let plane = ClipPlane::new(Vec3::ZERO, Vec3::FORWARD);
        let slice = slice(&[t], &plane).unwrap();
        assert_eq!(slice.clipped().len(), 2);
        assert_eq!(slice.stats().raw_points, 3);
        assert_eq!(slice.outline().len(), 2);
        for p in slice.outline() {
            assert_abs_diff_eq!(plane.signed_distance(*p), 0.0, epsilon = 1e-6);
        }
        assert_eq!(slice.cap_error(), Some(&SliceError::DegenerateCap { points: 2 }));
    }

    #[test]
    fn sort_orders_counter_clockwise_about_normal() {
        let mut pts = [
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(-1.0, 1.0, 0.0),
        ];
        let normal = Vec3::FORWARD;
        sort_around_normal(&mut pts, normal);
        for i in 0..4 {
            let (a, b) = (pts[i], pts[(i + 1) % 4]);
            assert!(a.cross(b).dot(normal) > 0.0, "{a:?} before {b:?}");
        }
    }

    #[test]
    fn sort_handles_tiny_inputs() {
        let mut none: [Vec3; 0] = [];
        sort_around_normal(&mut none, Vec3::UP);
        let mut one = [Vec3::ONE];
        sort_around_normal(&mut one, Vec3::UP);
        assert_eq!(one, [Vec3::ONE]);
    }
}
