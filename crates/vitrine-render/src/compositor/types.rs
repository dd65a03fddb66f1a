/// Per-view placement consumed by the composite shader.
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub(crate) struct ViewUniforms {
    /// Viewport in window pixels: [x, y, width, height].
    pub rect: [f32; 4],
    /// Window size in pixels.
    pub resolution: [f32; 2],
    /// Rotation about the viewport center, radians.
    pub angle: f32,
    pub _pad: f32,
}

/// Unit quad vertices (2D position).
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub(crate) struct Vertex {
    pub position: [f32; 2],
}

pub(crate) const QUAD_VERTICES: &[Vertex] = &[
    Vertex {
        position: [0.0, 0.0],
    }, // top-left
    Vertex {
        position: [1.0, 0.0],
    }, // top-right
    Vertex {
        position: [1.0, 1.0],
    }, // bottom-right
    Vertex {
        position: [0.0, 1.0],
    }, // bottom-left
];

pub(crate) const QUAD_INDICES: &[u16] = &[0, 1, 2, 0, 2, 3];
