//! Pixel shaders for triangle rasterization.
//!
//! The rasterizer works out coverage and barycentric weights; a shader turns the
//! weights into a color.

use crate::colors::modulate;
use crate::math::vec2::Vec2;

/// Per-pixel color computation.
///
/// `lambda` holds barycentric weights [λ₀, λ₁, λ₂] summing to 1.0 inside the triangle.
/// Any per-vertex attribute interpolates as `λ₀*a₀ + λ₁*a₁ + λ₂*a₂`.
pub trait PixelShader {
    fn shade(&self, lambda: [f32; 3]) -> u32;
}

/// One color for the whole triangle.
pub struct FlatShader {
    color: u32,
}

impl FlatShader {
    pub fn new(color: u32) -> Self {
        Self { color }
    }
}

impl PixelShader for FlatShader {
    #[inline]
    fn shade(&self, _lambda: [f32; 3]) -> u32 {
        self.color
    }
}

/// Checkerboard over texture space, lit with a flat intensity.
///
/// Makes texture coordinates visible without needing an image.
pub struct CheckerShader {
    uvs: [Vec2; 3],
    light: u32,
    dark: u32,
    squares: f32,
}

impl CheckerShader {
    /// `color` is lit by `intensity`; alternate squares are a darker shade of it.
    pub fn new(uvs: [Vec2; 3], color: u32, intensity: f32, squares: u32) -> Self {
        Self {
            uvs,
            light: modulate(color, intensity),
            dark: modulate(color, intensity * 0.7),
            squares: squares.max(1) as f32,
        }
    }

    #[inline]
    fn interpolate_uv(&self, lambda: [f32; 3]) -> Vec2 {
        self.uvs[0] * lambda[0] + self.uvs[1] * lambda[1] + self.uvs[2] * lambda[2]
    }
}

impl PixelShader for CheckerShader {
    #[inline]
    fn shade(&self, lambda: [f32; 3]) -> u32 {
        let uv = self.interpolate_uv(lambda);
        let cell = (uv.x * self.squares).floor() as i32 + (uv.y * self.squares).floor() as i32;
        if cell.rem_euclid(2) == 0 {
            self.light
        } else {
            self.dark
        }
    }
}
