//! wgpu-backed presentation for vitrine: a GPU context bound to the host
//! window, per-view frame textures fed from [`vitrine_engine::frame`], and
//! a compositor that draws every view into its fractional viewport.

pub mod compositor;
pub mod gpu;

pub use compositor::{Compositor, ViewLayout, ViewSlot};
pub use gpu::{GpuContext, PhysicalSize, RendererError};
