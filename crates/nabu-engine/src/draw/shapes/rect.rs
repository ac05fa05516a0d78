use crate::coords::Vec2;
use crate::draw::{DrawIdx, DrawList, Vertex};
use crate::paint::Color;

/// Two counter-clockwise triangles covering a quad, before index biasing.
const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

impl DrawList {
    /// Appends a solid rectangle spanning `min..max`.
    ///
    /// Emits exactly 4 vertices, in the order (min.x,min.y), (max.x,min.y),
    /// (max.x,max.y), (min.x,max.y), each with the unit-square UV for its
    /// corner, and 6 indices forming two triangles, biased by the vertices
    /// already in the list.
    ///
    /// Callers must reject degenerate extents before this point (the public
    /// `rect` API does); `min < max` per axis is a precondition, not a
    /// checked error.
    pub fn push_rect(&mut self, min: Vec2, max: Vec2, color: Color) {
        debug_assert!(min.x < max.x && min.y < max.y, "degenerate rect reached push_rect");

        let base = self.vtx_offset;
        debug_assert!(
            base + 4 <= DrawIdx::MAX as u32 + 1,
            "draw list exceeds the u16 index range"
        );

        self.vertices.push(Vertex::new([min.x, min.y, 0.0], [0.0, 0.0], color));
        self.vertices.push(Vertex::new([max.x, min.y, 0.0], [1.0, 0.0], color));
        self.vertices.push(Vertex::new([max.x, max.y, 0.0], [1.0, 1.0], color));
        self.vertices.push(Vertex::new([min.x, max.y, 0.0], [0.0, 1.0], color));

        for i in QUAD_INDICES {
            self.indices.push((base + i) as DrawIdx);
        }

        self.vtx_offset += 4;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corner_positions(list: &DrawList, tri: &[DrawIdx]) -> Vec<[f32; 2]> {
        tri.iter()
            .map(|&i| {
                let p = list.vertices()[i as usize].pos;
                [p[0], p[1]]
            })
            .collect()
    }

    // ── single rect ───────────────────────────────────────────────────────

    #[test]
    fn one_rect_emits_four_vertices_six_indices() {
        let mut list = DrawList::new();
        list.push_rect(Vec2::zero(), Vec2::splat(10.0), Color::WHITE);

        assert_eq!(list.vertices().len(), 4);
        assert_eq!(list.indices().len(), 6);
        assert_eq!(list.indices(), &[0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn rect_corners_wind_consistently() {
        let mut list = DrawList::new();
        list.push_rect(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), Color::WHITE);

        let pos: Vec<[f32; 2]> = list.vertices().iter().map(|v| [v.pos[0], v.pos[1]]).collect();
        assert_eq!(pos, vec![[1.0, 2.0], [3.0, 2.0], [3.0, 4.0], [1.0, 4.0]]);

        let uv: Vec<[f32; 2]> = list.vertices().iter().map(|v| v.uv).collect();
        assert_eq!(uv, vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
    }

    #[test]
    fn rect_triangles_cover_the_quad() {
        let mut list = DrawList::new();
        list.push_rect(Vec2::zero(), Vec2::splat(10.0), Color::WHITE);

        // Triangle 1 spans three distinct corners, triangle 2 the other
        // diagonal half; together they touch all four corners.
        let t1 = corner_positions(&list, &list.indices()[..3]);
        let t2 = corner_positions(&list, &list.indices()[3..]);
        assert_eq!(t1, vec![[0.0, 0.0], [10.0, 0.0], [10.0, 10.0]]);
        assert_eq!(t2, vec![[0.0, 0.0], [10.0, 10.0], [0.0, 10.0]]);
    }

    #[test]
    fn rect_z_is_flat() {
        let mut list = DrawList::new();
        list.push_rect(Vec2::zero(), Vec2::splat(1.0), Color::WHITE);
        assert!(list.vertices().iter().all(|v| v.pos[2] == 0.0));
    }

    #[test]
    fn rect_carries_its_color() {
        let mut list = DrawList::new();
        let c = Color::from_rgba(1.0, 1.0, 0.0, 1.0);
        list.push_rect(Vec2::zero(), Vec2::splat(1.0), c);
        assert!(list.vertices().iter().all(|v| v.color == c.packed()));
    }

    // ── offset biasing ────────────────────────────────────────────────────

    #[test]
    fn second_rect_indices_are_biased_past_the_first() {
        let mut list = DrawList::new();
        list.push_rect(Vec2::zero(), Vec2::splat(10.0), Color::WHITE);
        list.push_rect(Vec2::splat(20.0), Vec2::splat(30.0), Color::WHITE);

        assert_eq!(list.vertices().len(), 8);
        assert_eq!(list.indices().len(), 12);

        let second = &list.indices()[6..];
        assert!(second.iter().all(|&i| (4..8).contains(&i)));
        assert_eq!(second, &[4, 5, 6, 4, 6, 7]);
    }

    #[test]
    fn every_index_references_a_live_vertex() {
        let mut list = DrawList::new();
        for i in 0..5 {
            let off = i as f32 * 10.0;
            list.push_rect(Vec2::splat(off), Vec2::splat(off + 5.0), Color::WHITE);
        }
        let vtx_count = list.vertices().len() as DrawIdx;
        assert!(list.indices().iter().all(|&i| i < vtx_count));
    }
}
