//! Compact vertex records for handing triangles to a GPU.
//!
//! Layout of one [`PackedVertex`], 24 bytes:
//!
//! | offset | field    | format                                 |
//! |--------|----------|----------------------------------------|
//! | 0      | position | 3 x f32                                |
//! | 12     | color    | 4 x u8, normalized RGBA                |
//! | 16     | normal   | signed 2_10_10_10, x in the low bits   |
//! | 20     | uv       | 2 x u16, normalized                    |

use crate::colors;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::triangle::Triangle;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PackedVertex {
    pub position: [f32; 3],
    pub color: [u8; 4],
    pub normal: u32,
    pub uv: [u16; 2],
}

impl PackedVertex {
    pub fn new(position: Vec3, color: [u8; 4], normal: u32, uv: Vec2) -> Self {
        Self {
            position: [position.x, position.y, position.z],
            color,
            normal,
            uv: [unit_to_u16(uv.x), unit_to_u16(uv.y)],
        }
    }

    pub fn position(&self) -> Vec3 {
        let [x, y, z] = self.position;
        Vec3::new(x, y, z)
    }
}

/// Three vertices sharing the face normal and color of one triangle.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PackedTriangle {
    pub vertices: [PackedVertex; 3],
}

impl PackedTriangle {
    /// Packs `triangle` with a flat `color` given as `0xAARRGGBB`.
    pub fn new(triangle: &Triangle, color: u32) -> Self {
        let normal = pack_normal(triangle.normal());
        let color = colors::to_rgba(color);
        let mut vertices = [PackedVertex::default(); 3];
        for (i, vertex) in vertices.iter_mut().enumerate() {
            *vertex = PackedVertex::new(triangle.points[i], color, normal, triangle.uvs[i]);
        }
        Self { vertices }
    }
}

/// Packs a whole triangle list with one color.
pub fn pack_triangles(triangles: &[Triangle], color: u32) -> Vec<PackedTriangle> {
    triangles.iter().map(|t| PackedTriangle::new(t, color)).collect()
}

/// Packs a unit normal into signed 10-bit fields: `z << 20 | y << 10 | x`.
///
/// The top two bits are left zero.
pub fn pack_normal(normal: Vec3) -> u32 {
    (to_snorm10(normal.z) << 20) | (to_snorm10(normal.y) << 10) | to_snorm10(normal.x)
}

/// Inverse of [`pack_normal`], up to quantization.
pub fn unpack_normal(packed: u32) -> Vec3 {
    let field = |shift: u32| {
        // Sign-extend the 10-bit field.
        let bits = ((packed >> shift) & 0x3FF) as i32;
        let value = (bits << 22) >> 22;
        value as f32 / 511.0
    };
    Vec3::new(field(0), field(10), field(20))
}

fn to_snorm10(value: f32) -> u32 {
    ((value * 511.0) as i32 & 0x3FF) as u32
}

fn unit_to_u16(value: f32) -> u16 {
    (value.clamp(0.0, 1.0) * 65535.0) as u16
}
