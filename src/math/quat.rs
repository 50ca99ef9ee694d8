//! Unit quaternions (versors) for rotations around arbitrary axes.
//!
//! Every operation that can push the magnitude away from 1 renormalizes before
//! returning, so repeated composition does not drift.

use std::ops::{Div, Mul};

use approx::{AbsDiffEq, RelativeEq};

use super::mat4::Mat4;
use super::vec3::Vec3;

/// Squared-magnitude tolerance inside which a quaternion counts as unit length.
pub const NORMALIZE_TOLERANCE: f32 = 1e-4;

/// Below this `sin(half_angle)` slerp falls back to linear interpolation.
const SLERP_LINEAR_THRESHOLD: f32 = 0.001;

/// A quaternion `w + xi + yj + zk`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quat {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// A pure quaternion (w = 0) carrying a vector.
    pub const fn pure(v: Vec3) -> Self {
        Self::new(0.0, v.x, v.y, v.z)
    }

    /// Rotation by `radians` around `axis`.
    ///
    /// The result is only a rotation when `axis` has unit length; callers normalize.
    pub fn from_axis_angle(radians: f32, axis: Vec3) -> Self {
        let half = radians / 2.0;
        let s = half.sin();
        Self::new(half.cos(), s * axis.x, s * axis.y, s * axis.z)
    }

    pub fn from_axis_degrees(degrees: f32, axis: Vec3) -> Self {
        Self::from_axis_angle(degrees.to_radians(), axis)
    }

    /// The vector part (x, y, z).
    pub fn vector(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn magnitude_squared(&self) -> f32 {
        self.dot(*self)
    }

    pub fn dot(&self, other: Self) -> f32 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Scales to unit magnitude.
    ///
    /// Quaternions already within [`NORMALIZE_TOLERANCE`] are returned untouched. A zero
    /// quaternion carries no rotation and becomes the identity.
    pub fn normalize(&self) -> Self {
        let sum = self.magnitude_squared();
        if (1.0 - sum).abs() < NORMALIZE_TOLERANCE {
            return *self;
        }
        if sum <= f32::EPSILON {
            return Self::IDENTITY;
        }
        *self / sum.sqrt()
    }

    /// Component-wise sum, renormalized.
    pub fn add(&self, rhs: Self) -> Self {
        Self::new(self.w + rhs.w, self.x + rhs.x, self.y + rhs.y, self.z + rhs.z).normalize()
    }

    /// Spherical interpolation from `self` (t = 0) to `other` (t = 1) along the shorter arc.
    ///
    /// When the dot product is negative `self` is negated first, so at `t = 0` the result
    /// may be `-self`, which is the same rotation.
    pub fn slerp(&self, other: Self, t: f32) -> Self {
        let mut q = *self;
        let mut cos_half_theta = q.dot(other);
        if cos_half_theta < 0.0 {
            q = q * -1.0;
            cos_half_theta = -cos_half_theta;
        }
        if cos_half_theta.abs() >= 1.0 {
            return q;
        }

        let sin_half_theta = (1.0 - cos_half_theta * cos_half_theta).sqrt();
        if sin_half_theta.abs() < SLERP_LINEAR_THRESHOLD {
            return Self::new(
                (1.0 - t) * q.w + t * other.w,
                (1.0 - t) * q.x + t * other.x,
                (1.0 - t) * q.y + t * other.y,
                (1.0 - t) * q.z + t * other.z,
            )
            .normalize();
        }

        let half_theta = cos_half_theta.acos();
        let a = ((1.0 - t) * half_theta).sin() / sin_half_theta;
        let b = (t * half_theta).sin() / sin_half_theta;
        Self::new(
            q.w * a + other.w * b,
            q.x * a + other.x * b,
            q.y * a + other.y * b,
            q.z * a + other.z * b,
        )
    }

    /// Rotates `v` by this quaternion as `q * v * q'`.
    ///
    /// The vector is carried as a unit pure quaternion and scaled back to its original
    /// length afterwards. Zero vectors are returned unchanged.
    pub fn rotate_vector(&self, v: Vec3) -> Vec3 {
        let length = v.magnitude();
        if length <= f32::EPSILON {
            return v;
        }
        let rotated = *self * Self::pure(v / length) * self.conjugate();
        rotated.vector() * length
    }

    /// The equivalent rotation matrix (column-vector convention).
    pub fn to_mat4(&self) -> Mat4 {
        let Self { w, x, y, z } = *self;
        Mat4::new([
            [
                1.0 - 2.0 * y * y - 2.0 * z * z,
                2.0 * x * y - 2.0 * w * z,
                2.0 * x * z + 2.0 * w * y,
                0.0,
            ],
            [
                2.0 * x * y + 2.0 * w * z,
                1.0 - 2.0 * x * x - 2.0 * z * z,
                2.0 * y * z - 2.0 * w * x,
                0.0,
            ],
            [
                2.0 * x * z - 2.0 * w * y,
                2.0 * y * z + 2.0 * w * x,
                1.0 - 2.0 * x * x - 2.0 * y * y,
                0.0,
            ],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }
}

/// Hamilton product, renormalized to counter floating-point drift.
impl Mul<Quat> for Quat {
    type Output = Quat;

    fn mul(self, rhs: Quat) -> Self::Output {
        Quat::new(
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        )
        .normalize()
    }
}

/// Component scaling. Not renormalized.
impl Mul<f32> for Quat {
    type Output = Quat;

    fn mul(self, rhs: f32) -> Self::Output {
        Quat::new(self.w * rhs, self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f32> for Quat {
    type Output = Quat;

    fn div(self, rhs: f32) -> Self::Output {
        Quat::new(self.w / rhs, self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl AbsDiffEq for Quat {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.w.abs_diff_eq(&other.w, epsilon)
            && self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Quat {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.w.relative_eq(&other.w, epsilon, max_relative)
            && self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}
