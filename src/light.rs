//! Lighting for the demo renderer.

use crate::math::vec3::Vec3;

/// Default light position in view space, a unit in front of the eye.
pub const DEFAULT_LIGHT_POSITION: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// A point light that shades faces by the angle to the light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    /// Floor for faces turned away from the light, in [0, 1].
    pub ambient_intensity: f32,
}

impl Default for PointLight {
    fn default() -> Self {
        Self::new(DEFAULT_LIGHT_POSITION)
    }
}

impl PointLight {
    pub fn new(position: Vec3) -> Self {
        PointLight {
            position,
            ambient_intensity: 0.15,
        }
    }

    pub fn with_ambient(mut self, ambient_intensity: f32) -> Self {
        self.ambient_intensity = ambient_intensity.clamp(0.0, 1.0);
        self
    }

    /// Calculate light intensity for flat shading a face at `point` with `normal`.
    ///
    /// Returns intensity in [ambient, 1.0].
    pub fn intensity(&self, point: Vec3, normal: Vec3) -> f32 {
        let to_light = (self.position - point).normalize();
        let diffuse = to_light.dot(normal.normalize()).max(0.0);
        self.ambient_intensity + (1.0 - self.ambient_intensity) * diffuse
    }
}
