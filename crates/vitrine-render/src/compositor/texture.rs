//! GPU destination for engine paint buffers.
//!
//! Each composited view owns one BGRA texture shadowing its
//! [`SharedFrame`]. Uploads are generation-checked so a frame the engine
//! has not repainted costs nothing, and the texture is recreated only when
//! the frame dimensions actually change.

use wgpu::util::DeviceExt;

use vitrine_engine::frame::SharedFrame;

use super::types::ViewUniforms;

pub(crate) struct ViewTexture {
    texture: wgpu::Texture,
    uniforms: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    width: u32,
    height: u32,
    generation: u64,
    staging: Vec<u8>,
}

impl ViewTexture {
    pub fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        width: u32,
        height: u32,
    ) -> Self {
        let width = width.max(1);
        let height = height.max(1);

        let uniforms = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("view uniforms"),
            contents: bytemuck::cast_slice(&[ViewUniforms {
                rect: [0.0; 4],
                resolution: [1.0, 1.0],
                angle: 0.0,
                _pad: 0.0,
            }]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let (texture, bind_group) = create_texture(device, layout, sampler, &uniforms, width, height);

        Self {
            texture,
            uniforms,
            bind_group,
            width,
            height,
            generation: 0,
            staging: Vec::new(),
        }
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }

    /// Update the placement uniforms read by the vertex shader.
    pub fn write_placement(
        &self,
        queue: &wgpu::Queue,
        rect: [f32; 4],
        resolution: [f32; 2],
        angle: f32,
    ) {
        queue.write_buffer(
            &self.uniforms,
            0,
            bytemuck::cast_slice(&[ViewUniforms {
                rect,
                resolution,
                angle,
                _pad: 0.0,
            }]),
        );
    }

    /// Copy the view's current frame into the texture. Returns whether new
    /// pixels were uploaded; a frame whose generation matches the last
    /// upload is skipped without locking the queue.
    ///
    /// The frame guard is held for the duration of the copy, so the engine
    /// cannot repaint the buffer mid-upload.
    pub fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        frame: &SharedFrame,
    ) -> bool {
        let pixels = frame.lock();
        if pixels.generation() == self.generation {
            return false;
        }

        let (width, height) = pixels.dimensions();
        if width != self.width || height != self.height {
            tracing::debug!(
                old_width = self.width,
                old_height = self.height,
                width,
                height,
                "recreating view texture"
            );
            let (texture, bind_group) =
                create_texture(device, layout, sampler, &self.uniforms, width, height);
            self.texture = texture;
            self.bind_group = bind_group;
            self.width = width;
            self.height = height;
        }

        // bytes_per_row must be a multiple of COPY_BYTES_PER_ROW_ALIGNMENT;
        // repack through the staging buffer only when the tight rows miss it.
        let unpadded_bpr = width * 4;
        let (bytes, bytes_per_row) = if unpadded_bpr % wgpu::COPY_BYTES_PER_ROW_ALIGNMENT == 0 {
            (pixels.data(), unpadded_bpr)
        } else {
            let padded_bpr = padded_bytes_per_row(unpadded_bpr);
            pack_rows_padded(pixels.data(), width, height, padded_bpr, &mut self.staging);
            (self.staging.as_slice(), padded_bpr)
        };

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            bytes,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(bytes_per_row),
                rows_per_image: Some(height),
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );

        self.generation = pixels.generation();
        true
    }
}

fn create_texture(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    uniforms: &wgpu::Buffer,
    width: u32,
    height: u32,
) -> (wgpu::Texture, wgpu::BindGroup) {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("view frame texture"),
        size: wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Bgra8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("view bind group"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: uniforms.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    });

    (texture, bind_group)
}

fn padded_bytes_per_row(unpadded_bytes_per_row: u32) -> u32 {
    let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
    unpadded_bytes_per_row.div_ceil(align) * align
}

fn pack_rows_padded(src: &[u8], width: u32, height: u32, padded_bpr: u32, out: &mut Vec<u8>) {
    let unpadded_bpr = width as usize * 4;
    debug_assert!(padded_bpr as usize >= unpadded_bpr);
    debug_assert!(src.len() >= unpadded_bpr * height as usize);

    out.resize(padded_bpr as usize * height as usize, 0);

    for y in 0..height as usize {
        let src_row = &src[y * unpadded_bpr..(y + 1) * unpadded_bpr];
        let dst_off = y * padded_bpr as usize;
        out[dst_off..dst_off + unpadded_bpr].copy_from_slice(src_row);
    }
}
