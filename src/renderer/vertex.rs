//! Vertex type for sprite quads

use bytemuck::{Pod, Zeroable};

/// Canvas-space corner of a sprite quad, flat-coloured
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    /// Matches `VertexInput` in shader.wgsl
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Sprite colors, standing in for the sprite images
pub mod colors {
    pub const DUDE: [f32; 4] = [0.25, 0.85, 0.45, 1.0];
    pub const DUDE_VISOR: [f32; 4] = [0.9, 0.95, 1.0, 1.0];
    pub const ENEMY: [f32; 4] = [0.9, 0.25, 0.3, 1.0];
    pub const ENEMY_CORE: [f32; 4] = [1.0, 0.7, 0.2, 1.0];
    pub const LASER: [f32; 4] = [1.0, 0.95, 0.3, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_struct() {
        let layout = Vertex::desc();
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.attributes.len(), 2);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[0].format, wgpu::VertexFormat::Float32x2);
        assert_eq!(layout.attributes[1].offset, 8);
        assert_eq!(layout.attributes[1].shader_location, 1);
        assert_eq!(layout.attributes[1].format, wgpu::VertexFormat::Float32x4);
    }

    #[test]
    fn test_casts_to_bytes() {
        let v = [Vertex::new(1.0, 2.0, colors::LASER)];
        let bytes: &[u8] = bytemuck::cast_slice(&v);
        assert_eq!(bytes.len(), 24);
    }
}
