use bytemuck::{Pod, Zeroable};

use crate::paint::Color;

/// Index into the owning draw list's vertex buffer.
///
/// 16 bits keeps the index stream half the size of a `u32` stream and is far
/// beyond what a UI frame needs; a single list is limited to 65 536 vertices
/// between resets.
pub type DrawIdx = u16;

/// Packed GPU vertex: 24 bytes, no padding.
///
/// Layout (matches the renderer's vertex buffer layout and the wire contract
/// renderers outside this crate rely on):
///
///  offset  0  pos    [f32; 3]
///  offset 12  uv     [f32; 2]
///  offset 20  color  u32 (0xAABBGGRR)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 3],
    pub uv: [f32; 2],
    pub color: u32,
}

impl Vertex {
    #[inline]
    pub fn new(pos: [f32; 3], uv: [f32; 2], color: Color) -> Self {
        Self { pos, uv, color: color.packed() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_24_bytes_packed() {
        assert_eq!(core::mem::size_of::<Vertex>(), 24);
    }

    #[test]
    fn vertex_stores_packed_color() {
        let v = Vertex::new([0.0; 3], [0.0; 2], Color::from_rgba(1.0, 0.0, 0.0, 1.0));
        assert_eq!(v.color, 0xff00_00ff);
    }
}
