//! Geometry batching (draw streams).
//!
//! Responsibilities:
//! - accumulate shape calls into packed vertex/index buffers
//! - keep index values biased correctly as shapes stack up within a frame
//! - close each frame into a draw-command stream the renderer consumes
//! - keep shape-specific emitters isolated per shape file under
//!   `draw::shapes`

mod cmd;
mod list;
mod vertex;

pub mod shapes;

pub use cmd::{DrawCmd, TextureId};
pub use list::DrawList;
pub use vertex::{DrawIdx, Vertex};
