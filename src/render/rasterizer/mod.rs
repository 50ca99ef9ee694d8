//! Triangle rasterization.

mod edgefunction;
mod shader;

pub use edgefunction::EdgeFunctionRasterizer;
pub use shader::{CheckerShader, FlatShader, PixelShader};

use super::framebuffer::FrameBuffer;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// A triangle in screen space: x and y in pixels, z holding 1/w for depth testing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenTriangle {
    pub points: [Vec3; 3],
    pub uvs: [Vec2; 3],
}

impl ScreenTriangle {
    pub fn new(points: [Vec3; 3], uvs: [Vec2; 3]) -> Self {
        Self { points, uvs }
    }
}

/// Fills triangles into a frame buffer, asking a [`PixelShader`] for each covered pixel.
pub trait Rasterizer {
    fn fill_triangle<S: PixelShader>(
        &self,
        triangle: &ScreenTriangle,
        buffer: &mut FrameBuffer,
        shader: &S,
    );
}
