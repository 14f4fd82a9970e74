use bytemuck::{Pod, Zeroable};

/// Vertex for solid-color shapes (no texture).
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl ColorVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ColorVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Number of arc segments used for circle and dome fans. Plenty for the
/// sizes this UI draws at.
const ARC_SEGMENTS: u32 = 64;

/// Convert a screen-space x coordinate to NDC (-1 to 1).
fn ndc_x(x: f32, window_width: f32) -> f32 {
    (x / window_width) * 2.0 - 1.0
}

/// Convert a screen-space y coordinate to NDC (-1 to 1, flipped).
fn ndc_y(y: f32, window_height: f32) -> f32 {
    1.0 - (y / window_height) * 2.0
}

/// Pipeline for rendering solid-color triangle lists.
pub struct ColorPipeline {
    pub render_pipeline: wgpu::RenderPipeline,
}

impl ColorPipeline {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let shader_source = r#"
struct VertexInput {
    @location(0) position: vec2<f32>,
    @location(1) color: vec4<f32>,
}

struct VertexOutput {
    @builtin(position) position: vec4<f32>,
    @location(0) color: vec4<f32>,
}

@vertex
fn vs_main(input: VertexInput) -> VertexOutput {
    var output: VertexOutput;
    output.position = vec4<f32>(input.position, 0.0, 1.0);
    output.color = input.color;
    return output;
}

@fragment
fn fs_main(input: VertexOutput) -> @location(0) vec4<f32> {
    return input.color;
}
"#;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Color Shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Color Pipeline Layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Color Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[ColorVertex::desc()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None, // No culling for 2D
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview_mask: None,
            cache: None,
        });

        Self { render_pipeline }
    }

    /// Create vertex and index buffers for a filled rectangle.
    pub fn create_rect_vertices(
        device: &wgpu::Device,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: [f32; 4],
        window_width: f32,
        window_height: f32,
    ) -> (wgpu::Buffer, wgpu::Buffer, u32) {
        let x1 = ndc_x(x, window_width);
        let y1 = ndc_y(y, window_height);
        let x2 = ndc_x(x + width, window_width);
        let y2 = ndc_y(y + height, window_height);

        let vertices = [
            ColorVertex { position: [x1, y1], color }, // Top-left
            ColorVertex { position: [x2, y1], color }, // Top-right
            ColorVertex { position: [x2, y2], color }, // Bottom-right
            ColorVertex { position: [x1, y2], color }, // Bottom-left
        ];

        let indices: [u16; 6] = [0, 1, 2, 0, 2, 3];

        Self::upload(device, &vertices, &indices)
    }

    /// Create vertex and index buffers for a rectangle outline.
    pub fn create_stroke_rect_vertices(
        device: &wgpu::Device,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: [f32; 4],
        thickness: f32,
        window_width: f32,
        window_height: f32,
    ) -> (wgpu::Buffer, wgpu::Buffer, u32) {
        let x1 = ndc_x(x, window_width);
        let y1 = ndc_y(y, window_height);
        let x2 = ndc_x(x + width, window_width);
        let y2 = ndc_y(y + height, window_height);

        let t_x = (thickness / window_width) * 2.0;
        let t_y = (thickness / window_height) * 2.0;

        // Four thin rectangles: top, right, bottom, left.
        let vertices = vec![
            ColorVertex { position: [x1, y1], color },
            ColorVertex { position: [x2, y1], color },
            ColorVertex { position: [x2, y1 - t_y], color },
            ColorVertex { position: [x1, y1 - t_y], color },
            ColorVertex { position: [x2 - t_x, y1], color },
            ColorVertex { position: [x2, y1], color },
            ColorVertex { position: [x2, y2], color },
            ColorVertex { position: [x2 - t_x, y2], color },
            ColorVertex { position: [x1, y2 + t_y], color },
            ColorVertex { position: [x2, y2 + t_y], color },
            ColorVertex { position: [x2, y2], color },
            ColorVertex { position: [x1, y2], color },
            ColorVertex { position: [x1, y1], color },
            ColorVertex { position: [x1 + t_x, y1], color },
            ColorVertex { position: [x1 + t_x, y2], color },
            ColorVertex { position: [x1, y2], color },
        ];

        let indices: Vec<u16> = vec![
            0, 1, 2, 0, 2, 3, // Top
            4, 5, 6, 4, 6, 7, // Right
            8, 9, 10, 8, 10, 11, // Bottom
            12, 13, 14, 12, 14, 15, // Left
        ];

        Self::upload(device, &vertices, &indices)
    }

    /// Create vertex and index buffers for a filled circle, as a triangle
    /// fan around the center.
    pub fn create_circle_vertices(
        device: &wgpu::Device,
        cx: f32,
        cy: f32,
        radius: f32,
        color: [f32; 4],
        window_width: f32,
        window_height: f32,
    ) -> (wgpu::Buffer, wgpu::Buffer, u32) {
        let (vertices, indices) = Self::fan_geometry(
            cx,
            cy,
            radius,
            0.0,
            std::f32::consts::TAU,
            color,
            window_width,
            window_height,
        );
        Self::upload(device, &vertices, &indices)
    }

    /// Create vertex and index buffers for a filled dome: the upper half of
    /// a circle whose flat edge sits at `cy`.
    pub fn create_dome_vertices(
        device: &wgpu::Device,
        cx: f32,
        cy: f32,
        radius: f32,
        color: [f32; 4],
        window_width: f32,
        window_height: f32,
    ) -> (wgpu::Buffer, wgpu::Buffer, u32) {
        // Screen y grows downward, so the arc from PI to TAU sweeps the
        // upper half.
        let (vertices, indices) = Self::fan_geometry(
            cx,
            cy,
            radius,
            std::f32::consts::PI,
            std::f32::consts::TAU,
            color,
            window_width,
            window_height,
        );
        Self::upload(device, &vertices, &indices)
    }

    /// Build a triangle fan over `[start_angle, end_angle]` centered on
    /// `(cx, cy)` in screen coordinates, converted to NDC.
    fn fan_geometry(
        cx: f32,
        cy: f32,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        color: [f32; 4],
        window_width: f32,
        window_height: f32,
    ) -> (Vec<ColorVertex>, Vec<u16>) {
        let mut vertices = Vec::with_capacity(ARC_SEGMENTS as usize + 2);
        vertices.push(ColorVertex {
            position: [ndc_x(cx, window_width), ndc_y(cy, window_height)],
            color,
        });

        for i in 0..=ARC_SEGMENTS {
            let t = i as f32 / ARC_SEGMENTS as f32;
            let angle = start_angle + (end_angle - start_angle) * t;
            let px = cx + radius * angle.cos();
            let py = cy + radius * angle.sin();
            vertices.push(ColorVertex {
                position: [ndc_x(px, window_width), ndc_y(py, window_height)],
                color,
            });
        }

        let mut indices = Vec::with_capacity(ARC_SEGMENTS as usize * 3);
        for i in 1..=ARC_SEGMENTS as u16 {
            indices.extend_from_slice(&[0, i, i + 1]);
        }

        (vertices, indices)
    }

    fn upload(
        device: &wgpu::Device,
        vertices: &[ColorVertex],
        indices: &[u16],
    ) -> (wgpu::Buffer, wgpu::Buffer, u32) {
        use wgpu::util::DeviceExt;

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Color Vertex Buffer"),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Color Index Buffer"),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        (vertex_buffer, index_buffer, indices.len() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fan_geometry_full_circle() {
        let (vertices, indices) =
            ColorPipeline::fan_geometry(100.0, 100.0, 50.0, 0.0, std::f32::consts::TAU, [1.0; 4], 200.0, 200.0);

        // Center plus the closed arc.
        assert_eq!(vertices.len(), ARC_SEGMENTS as usize + 2);
        assert_eq!(indices.len(), ARC_SEGMENTS as usize * 3);

        // Window center maps to the NDC origin.
        assert!(vertices[0].position[0].abs() < 1e-6);
        assert!(vertices[0].position[1].abs() < 1e-6);

        // All rim points sit on the radius (0.5 in NDC for a 200px window).
        for v in &vertices[1..] {
            let d = (v.position[0].powi(2) + v.position[1].powi(2)).sqrt();
            assert!((d - 0.5).abs() < 1e-4);
        }
    }

    #[test]
    fn test_fan_geometry_dome_stays_above_base() {
        let (vertices, _) = ColorPipeline::fan_geometry(
            100.0,
            150.0,
            50.0,
            std::f32::consts::PI,
            std::f32::consts::TAU,
            [1.0; 4],
            200.0,
            200.0,
        );

        // Screen y <= cy for every rim point means NDC y >= the base line.
        let base_y = 1.0 - (150.0 / 200.0) * 2.0;
        for v in &vertices[1..] {
            assert!(v.position[1] >= base_y - 1e-4);
        }
    }
}
