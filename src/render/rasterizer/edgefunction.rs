//! Edge function triangle rasterization.
//!
//! Every pixel centre in the triangle's bounding box is tested against the three edge
//! equations. For an edge from A to B, at point P:
//!
//! ```text
//! E(P) = (P.x - A.x) * (B.y - A.y) - (P.y - A.y) * (B.x - A.x)
//! ```
//!
//! A pixel is covered when all three edge values share the sign of the triangle's
//! signed area, so both windings fill. Each edge value divided by the area is the
//! barycentric weight of the opposite vertex.
//!
//! # References
//!
//! - Juan Pineda, "A Parallel Algorithm for Polygon Rasterization" (1988)

use super::shader::PixelShader;
use super::{Rasterizer, ScreenTriangle};
use crate::math::vec3::Vec3;
use crate::render::framebuffer::FrameBuffer;

#[derive(Debug, Default, Clone, Copy)]
pub struct EdgeFunctionRasterizer;

impl EdgeFunctionRasterizer {
    pub fn new() -> Self {
        EdgeFunctionRasterizer
    }

    #[inline]
    fn edge_function(a: Vec3, b: Vec3, p: Vec3) -> f32 {
        (p.x - a.x) * (b.y - a.y) - (p.y - a.y) * (b.x - a.x)
    }
}

impl Rasterizer for EdgeFunctionRasterizer {
    fn fill_triangle<S: PixelShader>(
        &self,
        triangle: &ScreenTriangle,
        buffer: &mut FrameBuffer,
        shader: &S,
    ) {
        let [v0, v1, v2] = triangle.points;

        let area = Self::edge_function(v0, v1, v2);
        if area.abs() < f32::EPSILON {
            return;
        }
        let inv_area = 1.0 / area;

        let min_x = (v0.x.min(v1.x).min(v2.x).floor() as i32).max(0);
        let max_x = (v0.x.max(v1.x).max(v2.x).ceil() as i32).min(buffer.width() as i32 - 1);
        let min_y = (v0.y.min(v1.y).min(v2.y).floor() as i32).max(0);
        let max_y = (v0.y.max(v1.y).max(v2.y).ceil() as i32).min(buffer.height() as i32 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = Vec3::new(x as f32 + 0.5, y as f32 + 0.5, 0.0);

                let w0 = Self::edge_function(v1, v2, p);
                let w1 = Self::edge_function(v2, v0, p);
                let w2 = Self::edge_function(v0, v1, p);

                let inside = if area > 0.0 {
                    w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0
                } else {
                    w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0
                };

                if inside {
                    let lambda = [w0 * inv_area, w1 * inv_area, w2 * inv_area];
                    let depth = lambda[0] * v0.z + lambda[1] * v1.z + lambda[2] * v2.z;
                    buffer.set_pixel_with_depth(x, y, depth, shader.shade(lambda));
                }
            }
        }
    }
}
