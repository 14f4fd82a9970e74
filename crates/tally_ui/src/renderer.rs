use std::sync::Arc;

use glyphon::{
    Attrs, Buffer as TextBuffer, Cache, Family, FontSystem, Metrics, Resolution, Shaping,
    SwashCache, TextArea, TextAtlas, TextBounds, TextRenderer, Viewport,
};
use winit::window::Window;

use tally_gpu::{ColorPipeline, GpuConfig, GpuContext, GpuError};

use crate::constants::LINE_HEIGHT_FACTOR;
use crate::layout::{Bounds, Point, Size};
use crate::Element;

/// A draw command queued by widgets during the draw pass.
#[derive(Debug, Clone)]
enum DrawCommand {
    FillRect {
        bounds: Bounds,
        color: Color,
    },
    StrokeRect {
        bounds: Bounds,
        color: Color,
        width: f32,
    },
    FillCircle {
        center: Point,
        radius: f32,
        color: Color,
    },
    /// Upper half of a circle; `base` is the midpoint of the flat edge.
    FillDome {
        base: Point,
        radius: f32,
        color: Color,
    },
    DrawText {
        text: String,
        position: Point,
        color: Color,
        size: f32,
    },
}

/// The renderer abstracts GPU details away from widgets.
///
/// Widgets queue high-level draw commands; the renderer flushes them once
/// per frame through the color pipeline plus a glyphon text pass.
pub struct Renderer {
    gpu_ctx: GpuContext,
    color_pipeline: ColorPipeline,
    font_system: FontSystem,
    swash_cache: SwashCache,
    viewport: Viewport,
    atlas: TextAtlas,
    text_renderer: TextRenderer,
    width: u32,
    height: u32,
    clear_color: Color,
    draw_commands: Vec<DrawCommand>,
}

impl Renderer {
    /// Create a new renderer for the given window.
    ///
    /// A UI that redraws only on interaction does not need a discrete GPU.
    pub async fn new(window: Arc<Window>) -> Result<Self, GpuError> {
        let gpu_ctx = GpuContext::with_config(window, GpuConfig::power_saving()).await?;

        let format = gpu_ctx.surface_config.format;
        let color_pipeline = ColorPipeline::new(&gpu_ctx.device, format);

        let font_system = FontSystem::new();
        let swash_cache = SwashCache::new();
        let cache = Cache::new(&gpu_ctx.device);
        let viewport = Viewport::new(&gpu_ctx.device, &cache);
        let mut atlas = TextAtlas::new(&gpu_ctx.device, &gpu_ctx.queue, &cache, format);
        let text_renderer = TextRenderer::new(
            &mut atlas,
            &gpu_ctx.device,
            wgpu::MultisampleState::default(),
            None,
        );

        let width = gpu_ctx.width();
        let height = gpu_ctx.height();

        Ok(Self {
            gpu_ctx,
            color_pipeline,
            font_system,
            swash_cache,
            viewport,
            atlas,
            text_renderer,
            width,
            height,
            clear_color: Color::BLACK,
            draw_commands: Vec::new(),
        })
    }

    /// Resize the renderer.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.gpu_ctx.resize(width, height);
    }

    /// Current surface size.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Set the color the frame is cleared with before widgets draw.
    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
    }

    /// Lay out and render an element tree.
    pub fn render<M>(&mut self, mut root: Element<M>) {
        self.draw_commands.clear();

        let size = Size::new(self.width as f32, self.height as f32);
        root.layout(size);
        root.draw(self, Bounds::new(0.0, 0.0, size.width, size.height));

        let commands = std::mem::take(&mut self.draw_commands);

        let frame = match self.gpu_ctx.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(e) => {
                log::error!("Failed to get frame: {e:?}");
                return;
            }
        };

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // Shape text before the render pass starts.
        let text_buffers: Vec<(TextBuffer, Point, Color)> = commands
            .iter()
            .filter_map(|cmd| {
                if let DrawCommand::DrawText {
                    text,
                    position,
                    color,
                    size,
                } = cmd
                {
                    let mut buffer = TextBuffer::new(
                        &mut self.font_system,
                        Metrics::new(*size, *size * LINE_HEIGHT_FACTOR),
                    );
                    buffer.set_size(
                        &mut self.font_system,
                        Some(self.width as f32 - position.x),
                        Some(self.height as f32 - position.y),
                    );
                    buffer.set_text(
                        &mut self.font_system,
                        text,
                        &Attrs::new().family(Family::SansSerif),
                        Shaping::Advanced,
                        None,
                    );
                    buffer.shape_until_scroll(&mut self.font_system, false);
                    Some((buffer, *position, *color))
                } else {
                    None
                }
            })
            .collect();

        self.viewport.update(
            &self.gpu_ctx.queue,
            Resolution {
                width: self.width,
                height: self.height,
            },
        );

        let text_areas: Vec<TextArea<'_>> = text_buffers
            .iter()
            .map(|(buffer, position, color)| TextArea {
                buffer,
                left: position.x,
                top: position.y,
                scale: 1.0,
                bounds: TextBounds {
                    left: 0,
                    top: 0,
                    right: self.width as i32,
                    bottom: self.height as i32,
                },
                default_color: color.to_glyphon(),
                custom_glyphs: &[],
            })
            .collect();

        if let Err(e) = self.text_renderer.prepare(
            &self.gpu_ctx.device,
            &self.gpu_ctx.queue,
            &mut self.font_system,
            &mut self.atlas,
            &self.viewport,
            text_areas,
            &mut self.swash_cache,
        ) {
            log::error!("Failed to prepare text: {e:?}");
        }

        let mut encoder = self
            .gpu_ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("UI Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: self.clear_color.r as f64,
                            g: self.clear_color.g as f64,
                            b: self.clear_color.b as f64,
                            a: self.clear_color.a as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            render_pass.set_pipeline(&self.color_pipeline.render_pipeline);

            let (win_w, win_h) = (self.width as f32, self.height as f32);
            for command in &commands {
                let buffers = match command {
                    DrawCommand::FillRect { bounds, color } => Some(ColorPipeline::create_rect_vertices(
                        &self.gpu_ctx.device,
                        bounds.x,
                        bounds.y,
                        bounds.width,
                        bounds.height,
                        color.to_array(),
                        win_w,
                        win_h,
                    )),
                    DrawCommand::StrokeRect {
                        bounds,
                        color,
                        width,
                    } => Some(ColorPipeline::create_stroke_rect_vertices(
                        &self.gpu_ctx.device,
                        bounds.x,
                        bounds.y,
                        bounds.width,
                        bounds.height,
                        color.to_array(),
                        *width,
                        win_w,
                        win_h,
                    )),
                    DrawCommand::FillCircle {
                        center,
                        radius,
                        color,
                    } => Some(ColorPipeline::create_circle_vertices(
                        &self.gpu_ctx.device,
                        center.x,
                        center.y,
                        *radius,
                        color.to_array(),
                        win_w,
                        win_h,
                    )),
                    DrawCommand::FillDome {
                        base,
                        radius,
                        color,
                    } => Some(ColorPipeline::create_dome_vertices(
                        &self.gpu_ctx.device,
                        base.x,
                        base.y,
                        *radius,
                        color.to_array(),
                        win_w,
                        win_h,
                    )),
                    DrawCommand::DrawText { .. } => None,
                };

                if let Some((vertex_buffer, index_buffer, num_indices)) = buffers {
                    render_pass.set_vertex_buffer(0, vertex_buffer.slice(..));
                    render_pass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint16);
                    render_pass.draw_indexed(0..num_indices, 0, 0..1);
                }
            }

            // Text goes on top of every shape.
            if let Err(e) = self
                .text_renderer
                .render(&self.atlas, &self.viewport, &mut render_pass)
            {
                log::error!("Failed to render text: {e:?}");
            }
        }

        self.gpu_ctx.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
    }

    // Drawing primitives widgets can use.

    /// Draw a filled rectangle.
    pub fn fill_rect(&mut self, bounds: Bounds, color: Color) {
        self.draw_commands.push(DrawCommand::FillRect { bounds, color });
    }

    /// Draw a rectangle outline.
    pub fn stroke_rect(&mut self, bounds: Bounds, color: Color, width: f32) {
        self.draw_commands.push(DrawCommand::StrokeRect {
            bounds,
            color,
            width,
        });
    }

    /// Draw a filled circle.
    pub fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.draw_commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    /// Draw a filled dome (upper half-circle); `base` is the midpoint of
    /// the flat bottom edge.
    pub fn fill_dome(&mut self, base: Point, radius: f32, color: Color) {
        self.draw_commands.push(DrawCommand::FillDome {
            base,
            radius,
            color,
        });
    }

    /// Draw text at the given position.
    pub fn text(&mut self, content: &str, position: Point, size: f32, color: Color) {
        if content.is_empty() {
            return;
        }
        self.draw_commands.push(DrawCommand::DrawText {
            text: content.to_string(),
            position,
            color,
            size,
        });
    }
}

/// RGBA color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// The same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Move each channel toward white by `amount`.
    pub fn lighten(self, amount: f32) -> Self {
        Self {
            r: (self.r + amount).min(1.0),
            g: (self.g + amount).min(1.0),
            b: (self.b + amount).min(1.0),
            a: self.a,
        }
    }

    /// Move each channel toward black by `amount`.
    pub fn darken(self, amount: f32) -> Self {
        Self {
            r: (self.r - amount).max(0.0),
            g: (self.g - amount).max(0.0),
            b: (self.b - amount).max(0.0),
            a: self.a,
        }
    }

    /// Linear interpolation between two colors; `t` is clamped to [0, 1].
    pub fn lerp(self, other: Color, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Black or white, whichever reads better on this color.
    pub fn contrasting_text(self) -> Color {
        let luminance = 0.299 * self.r + 0.587 * self.g + 0.114 * self.b;
        if luminance > 0.5 {
            Color::BLACK
        } else {
            Color::WHITE
        }
    }

    fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    fn to_glyphon(self) -> glyphon::Color {
        glyphon::Color::rgba(
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.a.clamp(0.0, 1.0) * 255.0).round() as u8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        let from = Color::TRANSPARENT;
        let to = Color::rgba(1.0, 1.0, 0.0, 0.7);
        assert_eq!(from.lerp(to, 0.0), from);
        assert_eq!(from.lerp(to, 1.0), to);
    }

    #[test]
    fn test_lerp_clamps_t() {
        let from = Color::BLACK;
        let to = Color::WHITE;
        assert_eq!(from.lerp(to, -1.0), from);
        assert_eq!(from.lerp(to, 2.0), to);
    }

    #[test]
    fn test_lighten_darken_clamp() {
        let c = Color::rgb(0.9, 0.5, 0.1);
        let lightened = c.lighten(0.5);
        assert_eq!(lightened.r, 1.0);
        let darkened = c.darken(0.5);
        assert_eq!(darkened.b, 0.0);
        // Alpha is untouched either way.
        assert_eq!(lightened.a, 1.0);
        assert_eq!(darkened.a, 1.0);
    }

    #[test]
    fn test_contrasting_text() {
        assert_eq!(Color::WHITE.contrasting_text(), Color::BLACK);
        assert_eq!(Color::BLACK.contrasting_text(), Color::WHITE);
        // A saturated red is dark enough for white text.
        assert_eq!(Color::rgb(0.86, 0.1, 0.1).contrasting_text(), Color::WHITE);
    }
}
