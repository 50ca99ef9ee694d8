//! Demo engine.
//!
//! The [`Engine`] owns a mesh, a clip plane sweeping through it and a renderer. Each
//! [`step`](Engine::step) slices the mesh with the current plane, draws the kept part
//! with its cap, and turns the plane for the next frame.

use std::path::Path;

use crate::clipper::{slice, Slice, SliceStats};
use crate::colors;
use crate::config::DemoConfig;
use crate::error::{LoadError, SliceError};
use crate::math::vec3::Vec3;
use crate::mesh::Mesh;
use crate::plane::{ClipPlane, Direction, PlaneBasis};
use crate::render::Renderer;
use crate::rotation::rotate_plane;

const CHECKER_SQUARES: u32 = 4;
/// Direction from the mesh centre to the camera, before scaling by distance.
const CAMERA_DIRECTION: Vec3 = Vec3::new(0.6, 0.5, -1.0);
/// Keeps the drawn plane just behind the cap so the two don't fight for depth.
const PLANE_DEPTH_OFFSET: f32 = 0.002;

/// What one frame produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    pub frame: usize,
    pub stats: SliceStats,
    pub triangles: usize,
    pub corners: usize,
    pub capped: bool,
}

pub struct Engine {
    renderer: Renderer,
    mesh: Mesh,
    plane: ClipPlane,
    basis: PlaneBasis,
    sweep_axis: Vec3,
    step: f32,
    plane_scale: f32,
    frame: usize,
    pub draw_plane: bool,
}

impl Engine {
    /// Sets up the scene around `mesh`: the plane starts through the mesh centre facing
    /// +Z and sweeps about its own right-hand axis.
    pub fn new(config: &DemoConfig, mesh: Mesh) -> Self {
        let (min, max) = mesh.bounds().unwrap_or((Vec3::ZERO, Vec3::ZERO));
        let center = (min + max) * 0.5;
        let radius = ((max - min).magnitude() * 0.5).max(0.5);

        let plane = ClipPlane::new(center, Vec3::FORWARD);
        let basis = PlaneBasis::from_normal(plane.normal);
        let sweep_axis = basis.axis(&plane, Direction::Right);

        let mut renderer = Renderer::new(config.width, config.height);
        let eye = center + CAMERA_DIRECTION.normalize() * (config.camera_distance * radius);
        renderer.look_at(eye, center);

        Self {
            renderer,
            mesh,
            plane,
            basis,
            sweep_axis,
            step: config.step,
            plane_scale: radius * 1.5,
            frame: 0,
            draw_plane: true,
        }
    }

    /// Loads the configured OBJ file, or falls back to a unit cube.
    pub fn from_config(config: &DemoConfig) -> Result<Self, LoadError> {
        let mesh = match &config.obj {
            Some(path) => Mesh::from_obj(path)?,
            None => Mesh::cube(Vec3::ZERO),
        };
        Ok(Self::new(config, mesh))
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn plane(&self) -> &ClipPlane {
        &self.plane
    }

    pub fn basis(&self) -> &PlaneBasis {
        &self.basis
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Slices the mesh with the current plane.
    pub fn slice(&self) -> Result<Slice, SliceError> {
        slice(self.mesh.triangles(), &self.plane)
    }

    /// Draws `slice` and, if enabled, the plane itself.
    pub fn render(&mut self, slice: &Slice) {
        self.renderer.clear(colors::BACKGROUND);
        self.renderer
            .draw_checker(slice.clipped(), colors::MESH, CHECKER_SQUARES);
        self.renderer
            .draw_checker(slice.cap(), colors::CAP, CHECKER_SQUARES);

        if self.draw_plane {
            let offset = ClipPlane {
                point: self.plane.point + self.plane.normal * (PLANE_DEPTH_OFFSET * self.plane_scale),
                ..self.plane
            };
            self.renderer
                .draw_flat(&offset.quad(&self.basis, self.plane_scale), colors::PLANE);
        }
    }

    /// Turns the plane by `radians` about the sweep axis.
    pub fn rotate_plane(&mut self, radians: f32) {
        rotate_plane(&mut self.plane, &mut self.basis, self.sweep_axis, radians);
    }

    /// Slices, renders, and advances the plane by one step.
    pub fn step(&mut self) -> Result<FrameReport, SliceError> {
        let slice = self.slice()?;
        self.render(&slice);

        let report = FrameReport {
            frame: self.frame,
            stats: slice.stats(),
            triangles: slice.triangles().len(),
            corners: slice.outline().len(),
            capped: !slice.cap().is_empty(),
        };
        log::debug!("frame {}: normal {:?}, {report:?}", self.frame, self.plane.normal);

        self.rotate_plane(self.step);
        self.frame += 1;
        Ok(report)
    }

    pub fn save_frame(&self, path: impl AsRef<Path>) -> Result<(), image::ImageError> {
        self.renderer.save_png(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn small() -> DemoConfig {
        DemoConfig::default().with_size(64, 48)
    }

    #[test]
    fn first_frame_caps_cube_in_half() {
        let mut engine = Engine::from_config(&small()).unwrap();
        let report = engine.step().unwrap();
        assert_eq!(report.frame, 0);
        assert_eq!(report.corners, 4);
        assert!(report.capped);
        assert_eq!(report.triangles, 16);
        assert_eq!(engine.frame(), 1);
    }

    #[test]
    fn plane_sweeps_by_step() {
        let config = small().with_step(0.25);
        let mut engine = Engine::from_config(&config).unwrap();
        let before = engine.plane().normal;
        engine.step().unwrap();
        let after = engine.plane().normal;
        assert_relative_eq!(before.dot(after), 0.25f32.cos(), epsilon = 1e-5);
        assert_relative_eq!(after.magnitude(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn frame_shows_something() {
        let mut engine = Engine::from_config(&small()).unwrap();
        engine.step().unwrap();
        let image = engine.renderer().to_image();
        let background = colors::to_rgba(colors::BACKGROUND);
        assert!(image.pixels().any(|p| p.0 != background));
    }

    #[test]
    fn missing_obj_fails_to_load() {
        let config = small().with_obj("/nonexistent/mesh.obj");
        assert!(Engine::from_config(&config).is_err());
    }
}
