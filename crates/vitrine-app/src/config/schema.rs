//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults below.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use vitrine_common::FracRect;

/// Window appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Static window title.
    pub title: String,
    /// Initial window width in logical pixels.
    pub width: u32,
    /// Initial window height in logical pixels.
    pub height: u32,
    /// Background color drawn where no view is composited, as `#rrggbb`.
    pub background: String,
    /// Update the title bar with the focused view's document title.
    pub dynamic_title: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Vitrine".into(),
            width: 1280,
            height: 800,
            background: "#101010".into(),
            dynamic_title: true,
        }
    }
}

/// Engine settings applied at initialization and to every view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum rate at which the engine delivers paints (valid range: 1-240).
    pub frame_rate: u32,
    /// Port for the engine's remote debugging protocol.
    pub remote_debugging_port: Option<u16>,
    /// On-disk cache directory. Unset runs the engine in incognito mode.
    pub cache_path: Option<PathBuf>,
    /// Render view backgrounds as transparent.
    pub transparent: bool,
    /// Mute all audio output.
    pub audio_muted: bool,
    /// Allow pages to use WebGL.
    pub enable_webgl: bool,
    /// Allow media to start playing without a user gesture.
    pub autoplay: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            remote_debugging_port: None,
            cache_path: None,
            transparent: false,
            audio_muted: false,
            enable_webgl: true,
            autoplay: true,
        }
    }
}

/// Input translation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Pixels one wheel line scrolls, for hosts that report line deltas.
    pub scroll_pixels_per_line: f64,
    /// Flip wheel direction (natural scrolling).
    pub natural_scrolling: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            // The engine's own per-line scroll step.
            scroll_pixels_per_line: 40.0,
            natural_scrolling: false,
        }
    }
}

/// One view to open at startup: a URL inside a fractional viewport.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewDecl {
    pub url: String,
    /// Fraction of the window this view covers.
    pub viewport: FracRect,
    /// Spin the view about its viewport center while compositing.
    pub spin: bool,
}

impl Default for ViewDecl {
    fn default() -> Self {
        Self {
            url: "https://example.com".into(),
            viewport: FracRect::FULL,
            spin: false,
        }
    }
}

impl ViewDecl {
    /// Tile one view per URL into equal-width columns, left to right.
    pub fn columns(urls: &[String], spin: bool) -> Vec<ViewDecl> {
        let n = urls.len() as f32;
        urls.iter()
            .enumerate()
            .map(|(i, url)| {
                // Adjacent edges are computed from the same expression, so
                // columns share edges exactly instead of overlapping.
                let left = i as f32 / n;
                let right = (i as f32 + 1.0) / n;
                ViewDecl {
                    url: url.clone(),
                    viewport: FracRect::new(left, 0.0, right - left, 1.0),
                    spin,
                }
            })
            .collect()
    }
}

/// Root configuration for Vitrine.
///
/// All options have sensible defaults. Only override what you want to
/// change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct VitrineConfig {
    pub window: WindowConfig,
    pub engine: EngineConfig,
    pub input: InputConfig,
    /// Views opened at startup. Empty means a single full-window view.
    pub views: Vec<ViewDecl>,
}

// =============================================================================
// Tests
// =============================================================================
