/// Texture bound while drawing a command's index range.
///
/// [`TextureId::SOLID`] selects the renderer's built-in 1×1 white texture, so
/// untextured and textured draws share one shader path.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureId(pub u32);

impl TextureId {
    /// Untextured / solid-color.
    pub const SOLID: TextureId = TextureId(0);
}

impl Default for TextureId {
    #[inline]
    fn default() -> Self {
        Self::SOLID
    }
}

/// Batch descriptor: one contiguous run of indices drawn with one texture.
///
/// Within a list, commands tile the index buffer in order without gaps or
/// overlaps: `index_offset + index_count` never exceeds the index count at
/// the time the command is appended.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DrawCmd {
    /// Number of indices this command covers.
    pub index_count: u32,
    /// Starting offset into the list's index buffer.
    pub index_offset: u32,
    pub texture: TextureId,
}
