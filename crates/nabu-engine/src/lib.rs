//! Nabu engine crate.
//!
//! An immediate-mode geometry pipeline: drawing calls issued during a frame
//! accumulate into packed vertex/index buffers plus a draw-command stream,
//! which a GPU renderer consumes once per frame.

pub mod storage;

pub mod coords;
pub mod paint;

pub mod context;
pub mod draw;
pub mod text;

pub mod logging;
pub mod render;
