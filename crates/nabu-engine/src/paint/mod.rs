//! Color model shared between the drawing API and the renderer.
//!
//! Scope:
//! - the packed 32-bit color word stored per vertex
//! - conversion helpers from float channels
//!
//! Geometry types remain in `coords`.

mod color;

pub use color::Color;
