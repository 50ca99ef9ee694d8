//! Headless renderer: projects world-space triangles, shades and rasterizes them into
//! owned color and depth buffers, and writes the result as an image.

use std::path::Path;

use image::RgbaImage;

use super::framebuffer::FrameBuffer;
use super::rasterizer::{
    CheckerShader, EdgeFunctionRasterizer, FlatShader, PixelShader, Rasterizer, ScreenTriangle,
};
use crate::colors;
use crate::light::PointLight;
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;
use crate::triangle::Triangle;

const FOV_DEGREES: f32 = 45.0;
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 100.0;

pub struct Renderer {
    color_buffer: Vec<u32>,
    depth_buffer: Vec<f32>,
    width: u32,
    height: u32,
    view: Mat4,
    projection: Mat4,
    /// Position in view space.
    light: PointLight,
    rasterizer: EdgeFunctionRasterizer,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        let aspect_ratio = width as f32 / height.max(1) as f32;
        Self {
            color_buffer: vec![colors::BACKGROUND; size],
            depth_buffer: vec![0.0; size],
            width,
            height,
            view: Mat4::look_at_lh(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO, Vec3::UP),
            projection: Mat4::perspective_lh(FOV_DEGREES.to_radians(), aspect_ratio, Z_NEAR, Z_FAR),
            light: PointLight::default(),
            rasterizer: EdgeFunctionRasterizer::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn look_at(&mut self, eye: Vec3, target: Vec3) {
        self.view = Mat4::look_at_lh(eye, target, Vec3::UP);
    }

    /// Sets the light, positioned in view space so it moves with the camera.
    pub fn set_light(&mut self, light: PointLight) {
        self.light = light;
    }

    /// Fills the color buffer with `color` and resets depth to infinitely far.
    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
        self.depth_buffer.fill(0.0);
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        (x < self.width && y < self.height)
            .then(|| self.color_buffer[self.offset(x, y)])
    }

    /// Draws triangles in one lit color.
    pub fn draw_flat(&mut self, triangles: &[Triangle], color: u32) {
        self.draw_with(triangles, |_, intensity| {
            FlatShader::new(colors::modulate(color, intensity))
        });
    }

    /// Draws triangles with a lit checkerboard laid out by their texture coordinates.
    pub fn draw_checker(&mut self, triangles: &[Triangle], color: u32, squares: u32) {
        self.draw_with(triangles, |triangle, intensity| {
            CheckerShader::new(triangle.uvs, color, intensity, squares)
        });
    }

    fn draw_with<S, F>(&mut self, triangles: &[Triangle], make_shader: F)
    where
        S: PixelShader,
        F: Fn(&Triangle, f32) -> S,
    {
        let mut skipped = 0usize;
        for triangle in triangles {
            let Some(screen) = self.project_triangle(triangle) else {
                skipped += 1;
                continue;
            };

            let centroid = self.view * triangle.centroid();
            let normal = (self.view * direction(triangle.normal())).to_vec3();
            let intensity = self.light.intensity(centroid, normal);
            let shader = make_shader(triangle, intensity);

            let mut buffer = FrameBuffer::new(
                &mut self.color_buffer,
                &mut self.depth_buffer,
                self.width,
                self.height,
            );
            self.rasterizer.fill_triangle(&screen, &mut buffer, &shader);
        }
        if skipped > 0 {
            log::trace!("skipped {skipped} triangles behind the near plane");
        }
    }

    /// Screen position of every vertex, or `None` if any is behind the near plane.
    fn project_triangle(&self, triangle: &Triangle) -> Option<ScreenTriangle> {
        let [a, b, c] = triangle.points;
        Some(ScreenTriangle::new(
            [self.project(a)?, self.project(b)?, self.project(c)?],
            triangle.uvs,
        ))
    }

    fn project(&self, point: Vec3) -> Option<Vec3> {
        let clip = self.projection * (self.view * Vec4::point(point));
        if clip.w < Z_NEAR {
            return None;
        }
        let ndc = clip.to_ndc()?;
        Some(Vec3::new(
            (ndc.x + 1.0) * 0.5 * self.width as f32,
            (1.0 - ndc.y) * 0.5 * self.height as f32,
            1.0 / clip.w,
        ))
    }

    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            image::Rgba(colors::to_rgba(self.color_buffer[self.offset(x, y)]))
        })
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), image::ImageError> {
        self.to_image().save(path)
    }
}

fn direction(v: Vec3) -> Vec4 {
    Vec4::new(v.x, v.y, v.z, 0.0)
}
