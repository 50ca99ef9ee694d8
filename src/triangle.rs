//! Triangle primitive and the identity templates used to stamp new triangles.

use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::rotation::{self, Winding};

/// A triangle with a texture coordinate per vertex.
///
/// Vertices wind clockwise when viewed from the front.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Triangle {
    pub points: [Vec3; 3],
    pub uvs: [Vec2; 3],
}

impl Triangle {
    /// Creates a triangle with all texture coordinates at the origin.
    pub const fn new(points: [Vec3; 3]) -> Self {
        Self {
            points,
            uvs: [Vec2::ZERO; 3],
        }
    }

    pub const fn with_uvs(points: [Vec3; 3], uvs: [Vec2; 3]) -> Self {
        Self { points, uvs }
    }

    /// Unit normal of the front face: `cross(p0 - p1, p2 - p1)`.
    ///
    /// Degenerate triangles yield a zero vector.
    pub fn normal(&self) -> Vec3 {
        let [p0, p1, p2] = self.points;
        (p0 - p1).cross(p2 - p1).normalize()
    }

    pub fn centroid(&self) -> Vec3 {
        let [a, b, c] = self.points;
        (a + b + c) / 3.0
    }

    /// Returns the same triangle wound the other way.
    pub fn flipped(&self) -> Self {
        let mut t = *self;
        t.flip_winding();
        t
    }

    /// Reverses the winding order in place by swapping the first and last vertex.
    pub fn flip_winding(&mut self) {
        self.points.swap(0, 2);
        self.uvs.swap(0, 2);
    }

    /// Sets texture coordinates from an identity template, mapped into the sprite
    /// rectangle starting at (`sx`, `sy`) with size (`sw`, `sh`), all in [0, 1].
    pub fn set_sprite_uv(&mut self, template: IdentityTriangle, sx: f32, sy: f32, sw: f32, sh: f32) {
        let id = template.triangle();
        for (uv, id_uv) in self.uvs.iter_mut().zip(id.uvs) {
            *uv = Vec2::new(id_uv.x * sw + sx, id_uv.y * sh + sy);
        }
    }

    /// Sets positions from an identity template with its bottom-left corner at
    /// (`sx`, `sy`), flat at depth `z`.
    pub fn set_position(&mut self, template: IdentityTriangle, sx: f32, sy: f32, z: f32) {
        let id = template.triangle();
        for (p, id_p) in self.points.iter_mut().zip(id.points) {
            *p = Vec3::new(sx + id_p.x, sy + id_p.y, z);
        }
    }

    /// Integer grid version of [`set_position`](Self::set_position) for tile layouts.
    pub fn set_at(&mut self, template: IdentityTriangle, x: i32, y: i32) {
        self.set_position(template, x as f32, y as f32, 0.0);
    }

    /// Rotates vertex `index` around the axis through the other two vertices.
    ///
    /// # Panics
    /// Panics if `index` is not 0, 1 or 2.
    pub fn rotate_vertex(&mut self, index: usize, winding: Winding, radians: f32) {
        rotation::rotate_vertex(self, index, winding, radians);
    }
}

/// The four ways a unit square splits into a clockwise triangle, named by the square
/// corner the triangle keeps.
///
/// ```text
///   LowerLeft | UpperRight | LowerRight | UpperLeft
///  2          |  0--1      |      0     |  1--2
///  |\         |   \ |      |     /|     |  | /
///  | \        |    \|      |    / |     |  |/
///  1--0       |     2      |   2--1     |  0
/// ```
///
/// Vertex 1 is always the square corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdentityTriangle {
    LowerLeft = 0,
    UpperRight = 1,
    LowerRight = 2,
    UpperLeft = 3,
}

impl IdentityTriangle {
    pub const ALL: [IdentityTriangle; 4] = [
        IdentityTriangle::LowerLeft,
        IdentityTriangle::UpperRight,
        IdentityTriangle::LowerRight,
        IdentityTriangle::UpperLeft,
    ];

    /// The template's unit-square positions and texture coordinates.
    pub fn triangle(self) -> &'static Triangle {
        &IDENTITY_TRIANGLES[self as usize]
    }
}

// Texture V runs top-down, so the UV layout is the position layout flipped vertically.
const IDENTITY_TRIANGLES: [Triangle; 4] = [
    Triangle::with_uvs(
        [Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)],
        [Vec2::new(1.0, 1.0), Vec2::new(0.0, 1.0), Vec2::new(0.0, 0.0)],
    ),
    Triangle::with_uvs(
        [Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, 1.0, 0.0), Vec3::new(1.0, 0.0, 0.0)],
        [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)],
    ),
    Triangle::with_uvs(
        [Vec3::new(1.0, 1.0, 0.0), Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.0)],
        [Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0), Vec2::new(0.0, 1.0)],
    ),
    Triangle::with_uvs(
        [Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, 1.0, 0.0)],
        [Vec2::new(0.0, 1.0), Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)],
    ),
];
