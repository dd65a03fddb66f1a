//! Multi-view compositing: each registered view's frame texture is drawn
//! into its fractional viewport of the window surface, in registration
//! order, optionally spinning about its center.

mod layout;
mod pipeline;
mod texture;
mod types;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use vitrine_common::types::{Color, FracRect, Rect, ViewId};
use vitrine_engine::frame::SharedFrame;

use crate::gpu::{GpuContext, RendererError};
use pipeline::CompositePipeline;
use texture::ViewTexture;

pub use layout::{ViewLayout, ViewSlot};

/// Rotation speed for views composited with `spin`.
const SPIN_DEGREES_PER_SEC: f32 = 45.0;

/// Owns the GPU context and everything needed to draw registered views
/// into their viewports.
pub struct Compositor {
    pub gpu: GpuContext,
    pipeline: CompositePipeline,
    layout: ViewLayout,
    textures: HashMap<ViewId, ViewTexture>,
    pub clear_color: wgpu::Color,
    started: Instant,
}

impl Compositor {
    /// Create a fully initialized compositor from a window.
    pub async fn new(window: Arc<Window>) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window).await?;
        let pipeline = CompositePipeline::new(&gpu.device, gpu.format());

        Ok(Self {
            gpu,
            pipeline,
            layout: ViewLayout::default(),
            textures: HashMap::new(),
            clear_color: wgpu::Color {
                r: 0.0,
                g: 0.0,
                b: 0.0,
                a: 1.0,
            },
            started: Instant::now(),
        })
    }

    /// Handle a window resize by reconfiguring the surface.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }

    /// Set the background color drawn where no view is composited.
    ///
    /// The surface format is sRGB, so the clear color has to be handed to
    /// the GPU in linear space or the background comes out washed out.
    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = wgpu::Color {
            r: srgb_to_linear(color.r as f64 / 255.0),
            g: srgb_to_linear(color.g as f64 / 255.0),
            b: srgb_to_linear(color.b as f64 / 255.0),
            a: color.a as f64 / 255.0,
        };
    }

    /// Register a view for compositing. The viewport must be valid and
    /// must not overlap any other registered view.
    pub fn add_view(
        &mut self,
        id: ViewId,
        viewport: FracRect,
        spin: bool,
    ) -> Result<(), RendererError> {
        self.layout.add(id, viewport, spin)?;
        self.textures.insert(
            id,
            ViewTexture::new(
                &self.gpu.device,
                &self.pipeline.bind_group_layout,
                &self.pipeline.sampler,
                1,
                1,
            ),
        );
        tracing::debug!(%id, ?viewport, spin, "view registered with compositor");
        Ok(())
    }

    /// Move or resize a registered view. The previous viewport is kept
    /// when the new one fails validation.
    pub fn set_viewport(&mut self, id: ViewId, viewport: FracRect) -> Result<(), RendererError> {
        self.layout.set_viewport(id, viewport)
    }

    /// Drop a view and its texture. Returns whether it was registered.
    pub fn remove_view(&mut self, id: ViewId) -> bool {
        self.textures.remove(&id);
        self.layout.remove(id)
    }

    pub fn viewport(&self, id: ViewId) -> Option<FracRect> {
        self.layout.viewport(id)
    }

    pub fn view_count(&self) -> usize {
        self.layout.len()
    }

    /// Hit-test a window position; returns the view under it along with
    /// the view's pixel rectangle for translating to view-local
    /// coordinates.
    pub fn view_at(&self, x: f64, y: f64) -> Option<(ViewId, Rect)> {
        self.layout
            .hit_test(x, y, self.gpu.size.width, self.gpu.size.height)
    }

    /// Pixel rectangle currently occupied by a view.
    pub fn pixel_rect(&self, id: ViewId) -> Option<Rect> {
        self.layout
            .viewport(id)
            .map(|v| v.to_pixels(self.gpu.size.width, self.gpu.size.height))
    }

    /// Copy a view's current frame into its texture. Returns whether new
    /// pixels were actually uploaded.
    pub fn upload_frame(&mut self, id: ViewId, frame: &SharedFrame) -> bool {
        match self.textures.get_mut(&id) {
            Some(texture) => texture.upload(
                &self.gpu.device,
                &self.gpu.queue,
                &self.pipeline.bind_group_layout,
                &self.pipeline.sampler,
                frame,
            ),
            None => false,
        }
    }

    /// Render a complete frame: clear, then draw every view into its
    /// viewport in registration order.
    pub fn render_frame(&mut self) -> Result<(), RendererError> {
        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(e) => {
                tracing::error!("Failed to get surface texture: {e}");
                return Err(RendererError::SurfaceError(e.to_string()));
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("vitrine frame encoder"),
            });

        let width = self.gpu.size.width;
        let height = self.gpu.size.height;
        let resolution = [width as f32, height as f32];
        let spin_angle =
            self.started.elapsed().as_secs_f32() * SPIN_DEGREES_PER_SEC.to_radians();

        for slot in self.layout.slots() {
            if let Some(texture) = self.textures.get(&slot.id) {
                let rect = slot.viewport.to_pixels(width, height);
                let angle = if slot.spin { spin_angle } else { 0.0 };
                texture.write_placement(
                    &self.gpu.queue,
                    [
                        rect.x as f32,
                        rect.y as f32,
                        rect.width as f32,
                        rect.height as f32,
                    ],
                    resolution,
                    angle,
                );
            }
        }

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("vitrine composite pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            pass.set_pipeline(&self.pipeline.pipeline);
            pass.set_vertex_buffer(0, self.pipeline.vertex_buffer.slice(..));
            pass.set_index_buffer(
                self.pipeline.index_buffer.slice(..),
                wgpu::IndexFormat::Uint16,
            );

            for slot in self.layout.slots() {
                if let Some(texture) = self.textures.get(&slot.id) {
                    pass.set_bind_group(0, texture.bind_group(), &[]);
                    pass.draw_indexed(0..6, 0, 0..1);
                }
            }
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log_first_frame(width, height, self.gpu.format());

        Ok(())
    }
}

/// Convert an sRGB channel value to linear space.
fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Log the first frame presentation (once only).
fn log_first_frame(width: u32, height: u32, format: wgpu::TextureFormat) {
    static PRESENTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
    if !PRESENTED.swap(true, std::sync::atomic::Ordering::Relaxed) {
        tracing::info!(
            "First frame presented ({}x{}, format={:?})",
            width,
            height,
            format,
        );
    }
}
