//! GPU rendering subsystem.
//!
//! Consumes finalized draw lists and issues wgpu commands. The renderer owns
//! its GPU resources (pipeline, buffers, the default texture) and grows them
//! lazily; the engine core never touches the GPU.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - The vertex shader converts to NDC using a viewport uniform.

mod ctx;
mod list_renderer;

pub use ctx::{RenderCtx, RenderTarget};
pub use list_renderer::DrawListRenderer;
