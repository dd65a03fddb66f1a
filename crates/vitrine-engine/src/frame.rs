//! Shared frame storage between engine paint callbacks and the renderer.
//!
//! The engine may deliver paints from its own thread while the main loop
//! reads pixels for upload; [`SharedFrame`]'s mutex is the only
//! synchronization between the two. The storage also answers the engine's
//! view-rect query, so the reported size and the allocated buffer can never
//! disagree.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::warn;

const BYTES_PER_PIXEL: usize = 4;

/// BGRA pixel storage for one view.
///
/// The buffer length is always `width * height * 4`. Paints that do not
/// cover the full surface are rejected and the previous frame is kept.
#[derive(Debug)]
pub struct FramePixels {
    width: u32,
    height: u32,
    data: Vec<u8>,
    generation: u64,
}

impl FramePixels {
    /// Allocate zeroed storage. Zero dimensions are clamped to one pixel.
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            data: vec![0; byte_len(width, height)],
            generation: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The full BGRA buffer, row-major, no padding.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Bumped on every accepted write or reallocation. Lets the uploader
    /// skip frames that have not changed.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Reallocate for new dimensions. Returns whether storage actually
    /// changed; resizing to the current size is a no-op. Zero dimensions
    /// are clamped to one pixel.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        let width = width.max(1);
        let height = height.max(1);
        if width == self.width && height == self.height {
            return false;
        }
        self.width = width;
        self.height = height;
        self.data = vec![0; byte_len(width, height)];
        self.generation += 1;
        true
    }

    /// Replace the frame with a full BGRA paint.
    ///
    /// The reported dimensions win: storage is resized first when they
    /// differ. A buffer shorter than `width * height * 4` is rejected
    /// without touching the current frame; extra trailing bytes are
    /// ignored.
    pub fn write(&mut self, buffer: &[u8], width: u32, height: u32) -> bool {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if width == 0 || height == 0 || buffer.len() < expected {
            warn!(
                buffer_len = buffer.len(),
                expected, width, height, "rejecting malformed paint buffer"
            );
            return false;
        }
        self.resize(width, height);
        self.data.copy_from_slice(&buffer[..expected]);
        self.generation += 1;
        true
    }
}

fn byte_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

/// Clonable handle to one view's frame; the clone held by the engine is the
/// paint sink, the clone held by the renderer is the upload source.
#[derive(Debug, Clone)]
pub struct SharedFrame {
    inner: Arc<Mutex<FramePixels>>,
}

impl SharedFrame {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            inner: Arc::new(Mutex::new(FramePixels::new(width, height))),
        }
    }

    /// Lock for reading. The uploader holds this guard for the duration of
    /// the texture copy, which is what keeps paints from tearing it.
    pub fn lock(&self) -> MutexGuard<'_, FramePixels> {
        self.inner.lock().unwrap()
    }

    /// Current dimensions, as reported to the engine's view-rect query.
    pub fn view_rect(&self) -> (u32, u32) {
        self.lock().dimensions()
    }

    pub fn resize(&self, width: u32, height: u32) -> bool {
        self.lock().resize(width, height)
    }

    pub fn write(&self, buffer: &[u8], width: u32, height: u32) -> bool {
        self.lock().write(buffer, width, height)
    }

    pub fn generation(&self) -> u64 {
        self.lock().generation()
    }
}
