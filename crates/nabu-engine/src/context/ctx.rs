use crate::coords::Rect;
use crate::draw::DrawList;
use crate::paint::Color;
use crate::storage::GrowBuffer;
use crate::text::Font;

/// Owns the ordered draw-list collection and the per-frame lifecycle.
///
/// Construction is creation and drop is teardown, so the ownership system
/// enforces the create-before-use and single-destroy ordering.
///
/// Frame cycle: [`begin_frame`](Self::begin_frame) → shape calls →
/// [`render_frame`](Self::render_frame) → renderer reads the lists → repeat.
/// Shape calls issued after `render_frame` but before the next `begin_frame`
/// are a caller error: the already-closed command claims "all indices so
/// far", so late geometry lands outside any command boundary. Not detected.
#[derive(Debug)]
pub struct Context {
    draw_lists: GrowBuffer<DrawList>,
    active_font: Font,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// The list reserved for shapes drawn outside any window surface.
    /// Additional surfaces get their own list further along the collection.
    pub const GENERAL_LIST: usize = 0;

    /// Creates a context with the one general-purpose draw list.
    pub fn new() -> Self {
        let mut draw_lists = GrowBuffer::new();
        draw_lists.push(DrawList::new());
        log::debug!("context created");
        Self { draw_lists, active_font: Font }
    }

    /// Resets every draw list, in collection order. Call once per frame
    /// before any shape calls.
    pub fn begin_frame(&mut self) {
        for list in &mut self.draw_lists {
            list.reset();
        }
    }

    /// Finalizes every draw list, in collection order. Afterwards the lists
    /// are stable for the renderer until the next [`begin_frame`](Self::begin_frame).
    pub fn render_frame(&mut self) {
        for list in &mut self.draw_lists {
            list.finalize();
        }
    }

    /// Draws a solid rectangle at `(x, y)` with extent `(w, h)` into the
    /// general list.
    ///
    /// A non-positive extent is a valid "draw nothing" request, absorbed
    /// silently rather than reported.
    pub fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        let r = Rect::new(x, y, w, h);
        if r.is_empty() {
            return;
        }
        self.draw_lists[Self::GENERAL_LIST].push_rect(r.min(), r.max(), color);
    }

    /// Draw lists in collection order, for the renderer.
    #[inline]
    pub fn draw_lists(&self) -> &[DrawList] {
        self.draw_lists.as_slice()
    }

    /// Mutable access for callers that emit into a specific list directly.
    #[inline]
    pub fn draw_lists_mut(&mut self) -> &mut [DrawList] {
        self.draw_lists.as_mut_slice()
    }

    #[inline]
    pub fn active_font(&self) -> &Font {
        &self.active_font
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn new_context_has_one_general_list() {
        let ctx = Context::new();
        assert_eq!(ctx.draw_lists().len(), 1);
        assert!(ctx.draw_lists()[Context::GENERAL_LIST].vertices().is_empty());
    }

    #[test]
    fn contexts_are_independent() {
        let mut a = Context::new();
        let b = Context::new();
        a.rect(0.0, 0.0, 10.0, 10.0, Color::WHITE);
        assert_eq!(a.draw_lists()[0].vertices().len(), 4);
        assert!(b.draw_lists()[0].vertices().is_empty());
    }

    // ── rect ──────────────────────────────────────────────────────────────

    #[test]
    fn rect_forwards_min_max_corners() {
        let mut ctx = Context::new();
        ctx.rect(5.0, 6.0, 10.0, 20.0, Color::WHITE);

        let list = &ctx.draw_lists()[0];
        assert_eq!(list.vertices()[0].pos, [5.0, 6.0, 0.0]);
        assert_eq!(list.vertices()[2].pos, [15.0, 26.0, 0.0]);
    }

    #[test]
    fn rect_with_zero_extent_is_a_noop() {
        let mut ctx = Context::new();
        ctx.rect(0.0, 0.0, 0.0, 10.0, Color::WHITE);
        ctx.rect(0.0, 0.0, 10.0, 0.0, Color::WHITE);

        let list = &ctx.draw_lists()[0];
        assert!(list.vertices().is_empty());
        assert!(list.indices().is_empty());
    }

    #[test]
    fn rect_with_negative_extent_is_a_noop() {
        let mut ctx = Context::new();
        ctx.rect(0.0, 0.0, -5.0, 10.0, Color::WHITE);
        assert!(ctx.draw_lists()[0].vertices().is_empty());
    }

    // ── frame cycle ───────────────────────────────────────────────────────

    #[test]
    fn empty_frame_yields_one_zero_count_command_per_list() {
        let mut ctx = Context::new();
        ctx.begin_frame();
        ctx.render_frame();

        for list in ctx.draw_lists() {
            assert_eq!(list.commands().len(), 1);
            assert_eq!(list.commands()[0].index_count, 0);
        }
    }

    #[test]
    fn frame_cycle_batches_shapes_into_one_command() {
        let mut ctx = Context::new();
        ctx.begin_frame();
        ctx.rect(0.0, 0.0, 10.0, 10.0, Color::WHITE);
        ctx.rect(20.0, 20.0, 10.0, 10.0, Color::from_rgb(1.0, 0.0, 0.0));
        ctx.render_frame();

        let list = &ctx.draw_lists()[0];
        assert_eq!(list.vertices().len(), 8);
        assert_eq!(list.indices().len(), 12);
        assert_eq!(list.commands().len(), 1);
        assert_eq!(list.commands()[0].index_count, 12);
    }

    #[test]
    fn next_frame_starts_clean() {
        let mut ctx = Context::new();
        ctx.begin_frame();
        ctx.rect(0.0, 0.0, 10.0, 10.0, Color::WHITE);
        ctx.render_frame();

        ctx.begin_frame();
        let list = &ctx.draw_lists()[0];
        assert!(list.vertices().is_empty());
        assert!(list.commands().is_empty());
    }
}
