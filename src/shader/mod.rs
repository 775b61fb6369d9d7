use std::mem::{offset_of, size_of};

pub mod vertex;

/// Vertex layout of the basic pipeline: a homogeneous position and an RGBA colour.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct ColouredVertex {
    pub position: [f32; 4],
    pub colour: [f32; 4],
}

impl ColouredVertex {
    pub const STRIDE: usize = size_of::<Self>();
    pub const POSITION_OFFSET: usize = offset_of!(Self, position);
    pub const COLOUR_OFFSET: usize = offset_of!(Self, colour);

    pub const ATTRIBUTES: [VertexAttribute; 2] = [
        VertexAttribute {
            shader_location: 0,
            format: VertexFormat::Float32x4,
            offset: Self::POSITION_OFFSET,
        },
        VertexAttribute {
            shader_location: 1,
            format: VertexFormat::Float32x4,
            offset: Self::COLOUR_OFFSET,
        },
    ];

    pub fn new(position: [f32; 3], colour: [f32; 3]) -> Self {
        let [x, y, z] = position;
        let [r, g, b] = colour;
        Self {
            position: [x, y, z, 1.0],
            colour: [r, g, b, 1.0],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexFormat {
    Float32x4,
}

impl VertexFormat {
    pub fn size(self) -> usize {
        match self {
            VertexFormat::Float32x4 => 16,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    pub shader_location: u32,
    pub format: VertexFormat,
    pub offset: usize,
}

pub const VERTEX_ENTRY_POINT: &str = "vertex_main";
pub const FRAGMENT_ENTRY_POINT: &str = "fragment_main";

/// WGSL for the basic pipeline. Binding 0 of group 0 is the MVP matrix, uploaded as
/// [`Mat4::to_uniform_bytes`](crate::util::linalg::Mat4::to_uniform_bytes).
pub const BASIC_WGSL: &str = r"
struct Uniforms {
    mvp: mat4x4<f32>,
};
@group(0) @binding(0) var<uniform> uniforms: Uniforms;

struct VertexOut {
    @builtin(position) position: vec4<f32>,
    @location(0) colour: vec4<f32>,
};

@vertex
fn vertex_main(@location(0) position: vec4<f32>,
               @location(1) colour: vec4<f32>) -> VertexOut {
    var out: VertexOut;
    out.position = uniforms.mvp * position;
    out.colour = colour;
    return out;
}

@fragment
fn fragment_main(in: VertexOut) -> @location(0) vec4<f32> {
    return in.colour;
}
";
