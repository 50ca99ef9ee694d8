//! Clip plane and the in-plane basis used to draw and steer it.

use crate::math::quat::Quat;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::triangle::Triangle;

/// Edges whose direction has a smaller component along the plane normal are treated as
/// lying in the plane.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// A plane defined by a point on the plane and its normal vector.
/// The normal points toward the kept half-space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipPlane {
    pub point: Vec3,
    pub normal: Vec3,
}

impl ClipPlane {
    /// Creates a plane, normalizing `normal`.
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self {
            point,
            normal: normal.normalize(),
        }
    }

    /// Returns the signed distance from a point to this plane.
    /// Positive = kept side, negative = cut side.
    pub fn signed_distance(&self, position: Vec3) -> f32 {
        (position - self.point).dot(self.normal)
    }

    /// Parameter `t` along the segment `v1 -> v2` where it meets the plane, such that
    /// the crossing is at `v1 + (v2 - v1) * t`.
    ///
    /// Returns `None` when the segment is parallel to the plane, or when the line
    /// through it meets the plane outside `[0, 1]`.
    pub fn edge_parameter(&self, v1: Vec3, v2: Vec3) -> Option<f32> {
        let denom = (v2 - v1).dot(self.normal);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }
        let t = (self.point.dot(self.normal) - v1.dot(self.normal)) / denom;
        (0.0..=1.0).contains(&t).then_some(t)
    }

    /// Two triangles covering the plane's basis square, scaled by `scale` and centred
    /// on the plane point. Useful for drawing the plane itself.
    pub fn quad(&self, basis: &PlaneBasis, scale: f32) -> [Triangle; 2] {
        let [a, b, c, d] = basis.vectors.map(|v| v * scale + self.point);
        [
            Triangle::with_uvs([a, b, c], [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)]),
            Triangle::with_uvs([c, d, a], [Vec2::new(1.0, 1.0), Vec2::new(0.0, 1.0), Vec2::new(0.0, 0.0)]),
        ]
    }
}

/// Directions relative to a plane and its basis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
    Forward,
    Back,
}

/// Four in-plane vectors in clockwise order (up, right, down, left) seen from the side
/// the normal points to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneBasis {
    pub vectors: [Vec3; 4],
}

impl PlaneBasis {
    /// Builds a unit basis perpendicular to `normal`, with "up" as close to world +Y as
    /// the normal allows.
    pub fn from_normal(normal: Vec3) -> Self {
        let n = normal.normalize();
        let reference = if n.dot(Vec3::UP).abs() < 0.9 {
            Vec3::UP
        } else {
            Vec3::FORWARD
        };
        let up = (reference - n * reference.dot(n)).normalize();
        let right = up.cross(n).normalize();
        Self {
            vectors: [up, right, -up, -right],
        }
    }

    /// Unit vector pointing in `direction`. Forward and back follow the plane normal.
    pub fn axis(&self, plane: &ClipPlane, direction: Direction) -> Vec3 {
        match direction {
            Direction::Up => self.vectors[0].normalize(),
            Direction::Right => self.vectors[1].normalize(),
            Direction::Down => self.vectors[2].normalize(),
            Direction::Left => self.vectors[3].normalize(),
            Direction::Forward => plane.normal.normalize(),
            Direction::Back => (-plane.normal).normalize(),
        }
    }

    /// Rotates every basis vector `radians` about `axis`.
    pub fn rotate(&mut self, axis: Vec3, radians: f32) {
        self.rotate_by(Quat::from_axis_angle(radians, axis.normalize()));
    }

    pub(crate) fn rotate_by(&mut self, rotation: Quat) {
        for v in &mut self.vectors {
            *v = rotation.rotate_vector(*v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn signed_distance_sign_follows_normal() {
        let plane = ClipPlane::new(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, 2.0));
        assert_relative_eq!(plane.signed_distance(Vec3::new(5.0, 5.0, 3.0)), 2.0);
        assert_relative_eq!(plane.signed_distance(Vec3::ZERO), -1.0);
    }

    #[test]
    fn edge_parameter_finds_crossing() {
        let plane = ClipPlane::new(Vec3::ZERO, Vec3::UP);
        let a = Vec3::new(0.0, -1.0, 0.0);
        let b = Vec3::new(2.0, 3.0, 0.0);
        let t = plane.edge_parameter(a, b).unwrap();
        assert_relative_eq!(t, 0.25);
        assert_abs_diff_eq!(a.lerp(b, t), Vec3::new(0.5, 0.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn edge_parameter_rejects_parallel_edge() {
        let plane = ClipPlane::new(Vec3::ZERO, Vec3::UP);
        assert_eq!(plane.edge_parameter(Vec3::RIGHT, Vec3::FORWARD), None);
    }

    #[test]
    fn edge_parameter_rejects_segment_short_of_plane() {
        let plane = ClipPlane::new(Vec3::ZERO, Vec3::FORWARD);
        // Both ends above the plane, the line meets it far beyond the first end.
        let a = Vec3::new(0.0, 0.0, 1.015e-4);
        let b = Vec3::new(1.0, 0.0, 0.99e-4);
        assert_eq!(plane.edge_parameter(a, b), None);
        assert_eq!(plane.edge_parameter(b, a), None);
        assert_eq!(
            plane.edge_parameter(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, 3.0)),
            None
        );
    }

    #[test]
    fn basis_is_orthonormal_and_in_plane() {
        for n in [Vec3::FORWARD, Vec3::UP, Vec3::new(1.0, 2.0, -3.0)] {
            let basis = PlaneBasis::from_normal(n);
            let n = n.normalize();
            for v in basis.vectors {
                assert_relative_eq!(v.magnitude(), 1.0, epsilon = 1e-6);
                assert_abs_diff_eq!(v.dot(n), 0.0, epsilon = 1e-6);
            }
            assert_abs_diff_eq!(basis.vectors[0].dot(basis.vectors[1]), 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn quad_faces_along_normal() {
        let plane = ClipPlane::new(Vec3::new(1.0, 1.0, 1.0), Vec3::new(0.3, -0.5, 0.8));
        let basis = PlaneBasis::from_normal(plane.normal);
        for tri in plane.quad(&basis, 2.0) {
            assert_relative_eq!(tri.normal(), plane.normal, epsilon = 1e-5);
            for p in tri.points {
                assert_abs_diff_eq!(plane.signed_distance(p), 0.0, epsilon = 1e-5);
                assert_relative_eq!(p.distance(plane.point), 2.0, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn axis_directions() {
        let plane = ClipPlane::new(Vec3::ZERO, Vec3::FORWARD);
        let basis = PlaneBasis::from_normal(plane.normal);
        assert_relative_eq!(basis.axis(&plane, Direction::Up), Vec3::UP);
        assert_relative_eq!(basis.axis(&plane, Direction::Right), Vec3::RIGHT);
        assert_relative_eq!(basis.axis(&plane, Direction::Down), Vec3::DOWN);
        assert_relative_eq!(basis.axis(&plane, Direction::Left), Vec3::LEFT);
        assert_relative_eq!(basis.axis(&plane, Direction::Forward), Vec3::FORWARD);
        assert_relative_eq!(basis.axis(&plane, Direction::Back), Vec3::BACK);
    }
}
