//! Software rendering for the demo: projection, rasterization and PNG output.

pub(crate) mod framebuffer;
pub(crate) mod rasterizer;
mod renderer;

pub use framebuffer::FrameBuffer;
pub use rasterizer::{EdgeFunctionRasterizer, FlatShader, Rasterizer, ScreenTriangle};
pub use renderer::Renderer;
