//! Colors packed as `0xAARRGGBB` and helpers for working with them.

pub const BACKGROUND: u32 = 0xFF1E1E24;
/// Surface of the sliced mesh.
pub const MESH: u32 = 0xFFD08C4A;
/// Cross-section cap.
pub const CAP: u32 = 0xFF5AB0D8;
/// The clip plane drawn as a translucent-looking quad.
pub const PLANE: u32 = 0xFF3C4A5A;

/// Packs RGBA components in [0, 1] into `0xAARRGGBB`. Out-of-range values are clamped.
pub fn pack_color(r: f32, g: f32, b: f32, a: f32) -> u32 {
    let [r, g, b, a] = [r, g, b, a].map(unit_to_byte);
    (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Unpacks the RGB part of a color into [0, 1] components.
pub fn unpack_color(color: u32) -> (f32, f32, f32) {
    let [_, r, g, b] = color.to_be_bytes();
    (r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

pub fn lerp_color(a: (f32, f32, f32), b: (f32, f32, f32), t: f32) -> (f32, f32, f32) {
    (
        a.0 + (b.0 - a.0) * t,
        a.1 + (b.1 - a.1) * t,
        a.2 + (b.2 - a.2) * t,
    )
}

/// Scales the RGB part of `color` by `intensity`, keeping it opaque.
pub fn modulate(color: u32, intensity: f32) -> u32 {
    let (r, g, b) = unpack_color(color);
    pack_color(r * intensity, g * intensity, b * intensity, 1.0)
}

/// Byte order used by image buffers and vertex records.
pub fn to_rgba(color: u32) -> [u8; 4] {
    let [a, r, g, b] = color.to_be_bytes();
    [r, g, b, a]
}

/// Converts a component in [0, 1] to a byte, clamping out-of-range values.
pub fn unit_to_byte(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0) as u8
}
