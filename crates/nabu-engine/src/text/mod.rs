//! Text handling.
//!
//! Placeholder: the context tracks an active font so the drawing API can grow
//! text emission later. No loading, shaping, or rasterization exists yet.

/// Placeholder for a loaded font.
// TODO: replace with a real handle once glyph rasterization lands.
#[derive(Debug, Default, Copy, Clone)]
pub struct Font;
