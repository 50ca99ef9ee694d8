//! Rotations driven by quaternions: folding a triangle about one of its edges, and
//! turning a clip plane together with its basis.

use crate::math::quat::Quat;
use crate::math::vec3::Vec3;
use crate::plane::{ClipPlane, PlaneBasis};
use crate::triangle::Triangle;

/// Default per-frame angle when sweeping a plane, in radians.
pub const PLANE_SWEEP_STEP: f32 = 0.02;

/// Which way to walk the vertices of a triangle when picking a rotation axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

impl Winding {
    /// The vertex index after `index` in this direction.
    pub fn step(self, index: usize) -> usize {
        match self {
            Winding::Clockwise => (index + 1) % 3,
            Winding::CounterClockwise => (index + 2) % 3,
        }
    }
}

/// Rotates vertex `index` of `triangle` by `radians` around the edge formed by the other
/// two vertices.
///
/// The axis runs from the second vertex after `index` to the first, walking in the
/// `winding` direction, so the two windings turn the vertex opposite ways.
///
/// # Panics
/// Panics if `index` is not 0, 1 or 2.
pub fn rotate_vertex(triangle: &mut Triangle, index: usize, winding: Winding, radians: f32) {
    assert!(index < 3, "triangle vertex index {index} out of range");
    let a = winding.step(index);
    let b = winding.step(a);
    let pivot = triangle.points[a];
    let axis = (pivot - triangle.points[b]).normalize();

    let rotation = Quat::from_axis_angle(radians, axis);
    triangle.points[index] = rotation.rotate_vector(triangle.points[index] - pivot) + pivot;
}

/// Turns the plane normal and every basis vector by `radians` about `axis`.
///
/// The plane point stays where it is.
pub fn rotate_plane(plane: &mut ClipPlane, basis: &mut PlaneBasis, axis: Vec3, radians: f32) {
    let rotation = Quat::from_axis_angle(radians, axis.normalize());
    plane.normal = rotation.rotate_vector(plane.normal).normalize();
    basis.rotate_by(rotation);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plane::Direction;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f32::consts::{FRAC_PI_2, PI};

    fn sample() -> Triangle {
        Triangle::new([
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(-1.0, 0.0, 0.0),
        ])
    }

    #[test]
    fn step_wraps() {
        assert_eq!(Winding::Clockwise.step(2), 0);
        assert_eq!(Winding::CounterClockwise.step(0), 2);
        assert_eq!(Winding::CounterClockwise.step(2), 1);
    }

    #[test]
    fn other_vertices_stay_put() {
        let original = sample();
        let mut t = original;
        t.rotate_vertex(0, Winding::Clockwise, 1.0);
        assert_eq!(t.points[1], original.points[1]);
        assert_eq!(t.points[2], original.points[2]);
        assert_ne!(t.points[0], original.points[0]);
    }

    #[test]
    fn quarter_fold_lifts_vertex_out_of_plane() {
        let mut t = sample();
        // Axis runs from vertex 2 to vertex 1, which is +X.
        t.rotate_vertex(0, Winding::Clockwise, FRAC_PI_2);
        assert_abs_diff_eq!(t.points[0], Vec3::new(0.0, 0.0, 1.0), epsilon = 1e-5);
    }

    #[test]
    fn windings_fold_opposite_ways() {
        let mut cw = sample();
        let mut ccw = sample();
        cw.rotate_vertex(0, Winding::Clockwise, FRAC_PI_2);
        ccw.rotate_vertex(0, Winding::CounterClockwise, FRAC_PI_2);
        assert_abs_diff_eq!(cw.points[0], -ccw.points[0], epsilon = 1e-5);
    }

    #[test]
    fn rotate_then_unrotate() {
        let original = Triangle::new([
            Vec3::new(0.3, 1.7, -0.2),
            Vec3::new(1.1, 0.4, 0.9),
            Vec3::new(-0.8, -0.3, 0.5),
        ]);
        for index in 0..3 {
            for winding in [Winding::Clockwise, Winding::CounterClockwise] {
                let mut t = original;
                t.rotate_vertex(index, winding, 0.7);
                t.rotate_vertex(index, winding, -0.7);
                assert_abs_diff_eq!(t.points[index], original.points[index], epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn distance_to_axis_preserved() {
        let original = sample();
        let mut t = original;
        for _ in 0..50 {
            t.rotate_vertex(0, Winding::Clockwise, 0.3);
        }
        let before = original.points[0].line_distance(original.points[1], original.points[2]);
        let after = t.points[0].line_distance(t.points[1], t.points[2]);
        assert_relative_eq!(before, after, epsilon = 1e-4);
    }

    #[test]
    #[should_panic]
    fn vertex_index_out_of_range() {
        let mut t = sample();
        t.rotate_vertex(3, Winding::Clockwise, 0.1);
    }

    #[test]
    fn plane_and_basis_turn_together() {
        let mut plane = ClipPlane::new(Vec3::ZERO, Vec3::FORWARD);
        let mut basis = PlaneBasis::from_normal(plane.normal);
        rotate_plane(&mut plane, &mut basis, Vec3::UP, FRAC_PI_2);

        assert_abs_diff_eq!(plane.normal, Vec3::RIGHT, epsilon = 1e-5);
        assert_abs_diff_eq!(basis.axis(&plane, Direction::Up), Vec3::UP, epsilon = 1e-5);
        for v in basis.vectors {
            assert_abs_diff_eq!(v.dot(plane.normal), 0.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn sweep_returns_to_start() {
        let start = ClipPlane::new(Vec3::ZERO, Vec3::new(0.0, 0.6, 0.8));
        let mut plane = start;
        let mut basis = PlaneBasis::from_normal(plane.normal);
        let steps = (2.0 * PI / PLANE_SWEEP_STEP).round() as usize;
        let step = 2.0 * PI / steps as f32;
        for _ in 0..steps {
            rotate_plane(&mut plane, &mut basis, Vec3::RIGHT, step);
        }
        assert_abs_diff_eq!(plane.normal, start.normal, epsilon = 1e-3);
        assert_relative_eq!(plane.normal.magnitude(), 1.0, epsilon = 1e-5);
    }
}
