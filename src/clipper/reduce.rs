//! Reducing the raw crossing points of a slice to the corners of the cross-section.

use crate::math::vec3::Vec3;

/// Points closer than this are the same point.
pub const MERGE_DISTANCE: f32 = 0.01;

/// A point closer than this to the line through two others, and lying between them,
/// is not a corner.
pub const COLLINEAR_DISTANCE: f32 = 0.01;

/// Removes near-duplicates, then every point that lies on a segment between two other
/// points.
///
/// Order of the survivors follows the input. Running the result through again changes
/// nothing.
pub fn reduce_points(points: &[Vec3]) -> Vec<Vec3> {
    let unique = dedup(points);
    let corners: Vec<Vec3> = unique
        .iter()
        .enumerate()
        .filter(|&(i, _)| !is_between(&unique, i))
        .map(|(_, p)| *p)
        .collect();
    log::trace!(
        "reduced {} points to {} unique, {} corners",
        points.len(),
        unique.len(),
        corners.len()
    );
    corners
}

fn dedup(points: &[Vec3]) -> Vec<Vec3> {
    let mut kept: Vec<Vec3> = Vec::with_capacity(points.len());
    for p in points {
        if kept.iter().all(|k| k.distance(*p) >= MERGE_DISTANCE) {
            kept.push(*p);
        }
    }
    kept
}

/// True if `points[i]` sits on the line through some other pair and is closer to each
/// of them than they are to each other.
fn is_between(points: &[Vec3], i: usize) -> bool {
    let p = points[i];
    for (j, &a) in points.iter().enumerate() {
        if j == i {
            continue;
        }
        for (k, &b) in points.iter().enumerate() {
            if k == i || k == j {
                continue;
            }
            let span = a.distance(b);
            if p.line_distance(a, b) < COLLINEAR_DISTANCE && p.distance(a) < span && p.distance(b) < span {
                return true;
            }
        }
    }
    false
}
