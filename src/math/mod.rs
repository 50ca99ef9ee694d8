//! Vector, matrix and quaternion math.

pub mod mat4;
pub mod quat;
pub mod vec2;
pub mod vec3;
pub mod vec4;
