use crate::storage::GrowBuffer;

use super::{DrawCmd, DrawIdx, TextureId, Vertex};

/// Batched geometry for one logical surface in one frame.
///
/// Shape emitters (see [`draw::shapes`](crate::draw::shapes)) append into the
/// vertex and index buffers; [`finalize`](Self::finalize) closes the frame
/// into the command buffer. The renderer then reads all three via
/// [`vertices`](Self::vertices), [`indices`](Self::indices) and
/// [`commands`](Self::commands).
///
/// Performance characteristics:
/// - shape emission is O(1) amortized (GrowBuffer appends)
/// - [`reset`](Self::reset) keeps allocations, so a warmed list draws whole
///   frames without touching the allocator
///
/// Index values are always valid references into the vertex buffer as it
/// stood when the shape was appended: `vtx_offset` advances only by the
/// count of vertices just pushed, never by re-reading buffer lengths.
#[derive(Debug, Default)]
pub struct DrawList {
    pub(crate) vertices: GrowBuffer<Vertex>,
    pub(crate) indices: GrowBuffer<DrawIdx>,
    commands: GrowBuffer<DrawCmd>,
    /// Bias added to freshly emitted index values; equals the number of
    /// vertices appended since the last reset.
    pub(crate) vtx_offset: u32,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Truncates all three buffers to zero length (allocations are kept) and
    /// rewinds the vertex offset. Call once per frame, before any shape
    /// calls.
    pub fn reset(&mut self) {
        self.vertices.truncate(0);
        self.indices.truncate(0);
        self.commands.truncate(0);
        self.vtx_offset = 0;
    }

    /// Closes the frame: appends one untextured command spanning every index
    /// pushed since [`reset`](Self::reset). After this, the buffers are
    /// stable for the renderer until the next reset.
    ///
    /// Extension point: texture- or clip-aware batching would instead close
    /// a command each time the active texture or clip rect changes, each
    /// spanning exactly the indices pushed since the previous command
    /// closed. Not implemented; one command per frame is the whole policy.
    pub fn finalize(&mut self) {
        self.commands.push(DrawCmd {
            index_count: self.indices.len() as u32,
            index_offset: 0,
            texture: TextureId::SOLID,
        });
    }

    /// Packed vertices, in emission order.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        self.vertices.as_slice()
    }

    /// 16-bit indices into [`vertices`](Self::vertices).
    #[inline]
    pub fn indices(&self) -> &[DrawIdx] {
        self.indices.as_slice()
    }

    /// Draw commands, in the order the renderer must issue them.
    #[inline]
    pub fn commands(&self) -> &[DrawCmd] {
        self.commands.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use crate::coords::Vec2;
    use crate::paint::Color;

    use super::*;

    // ── reset ─────────────────────────────────────────────────────────────

    #[test]
    fn reset_empties_all_streams() {
        let mut list = DrawList::new();
        list.push_rect(Vec2::zero(), Vec2::splat(10.0), Color::WHITE);
        list.finalize();

        list.reset();
        assert!(list.vertices().is_empty());
        assert!(list.indices().is_empty());
        assert!(list.commands().is_empty());
    }

    #[test]
    fn reset_keeps_allocations() {
        let mut list = DrawList::new();
        list.push_rect(Vec2::zero(), Vec2::splat(10.0), Color::WHITE);
        let vtx_cap = list.vertices.capacity();
        let idx_cap = list.indices.capacity();

        list.reset();
        assert_eq!(list.vertices.capacity(), vtx_cap);
        assert_eq!(list.indices.capacity(), idx_cap);
    }

    #[test]
    fn reset_rewinds_index_bias() {
        let mut list = DrawList::new();
        list.push_rect(Vec2::zero(), Vec2::splat(10.0), Color::WHITE);
        list.reset();
        list.push_rect(Vec2::zero(), Vec2::splat(10.0), Color::WHITE);

        // First shape after a reset references vertices 0..4 again.
        assert!(list.indices().iter().all(|&i| i < 4));
    }

    // ── finalize ──────────────────────────────────────────────────────────

    #[test]
    fn finalize_emits_one_command_spanning_all_indices() {
        let mut list = DrawList::new();
        list.push_rect(Vec2::zero(), Vec2::splat(10.0), Color::WHITE);
        list.push_rect(Vec2::splat(20.0), Vec2::splat(30.0), Color::WHITE);
        list.finalize();

        assert_eq!(
            list.commands(),
            &[DrawCmd { index_count: 12, index_offset: 0, texture: TextureId::SOLID }]
        );
    }

    #[test]
    fn finalize_on_empty_list_emits_zero_count_command() {
        let mut list = DrawList::new();
        list.finalize();

        assert_eq!(list.commands().len(), 1);
        assert_eq!(list.commands()[0].index_count, 0);
        assert_eq!(list.commands()[0].index_offset, 0);
    }
}
