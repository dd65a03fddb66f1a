//! Engine and per-view configuration.
//!
//! Everything the engine used to read from process-global state is passed
//! explicitly: [`EngineSettings`] once at initialization, [`ViewConfig`] per
//! view.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use vitrine_common::Color;

/// Process-wide engine configuration, passed once to
/// [`EngineDriver::initialize`](crate::driver::EngineDriver::initialize).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Color views show before their first paint arrives.
    pub background_color: Color,
    /// Port for the engine's remote debugging protocol, if enabled.
    pub remote_debugging_port: Option<u16>,
    /// On-disk cache location. `None` runs the engine in incognito mode.
    pub cache_path: Option<PathBuf>,
    /// Separate renderer subprocess executable, for engines that use one.
    pub subprocess_path: Option<PathBuf>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            background_color: Color::from_rgba(255, 255, 255, 255),
            remote_debugging_port: None,
            cache_path: None,
            subprocess_path: None,
        }
    }
}

/// Configuration for creating a single off-screen view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Initial URL to load.
    pub url: String,
    /// Initial view width in pixels. Must be non-zero.
    pub width: u32,
    /// Initial view height in pixels. Must be non-zero.
    pub height: u32,
    /// Maximum rate at which the engine delivers paints for this view.
    pub frame_rate: u32,
    /// Whether the view background is transparent.
    pub transparent: bool,
    /// Mute all audio output of the view.
    pub audio_muted: bool,
    /// Allow the page to use WebGL.
    pub enable_webgl: bool,
    /// Allow media to start playing without a user gesture.
    pub autoplay: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            url: "about:blank".to_string(),
            width: 800,
            height: 600,
            // The engine's own default is 30; every embedding here wants 60.
            frame_rate: 60,
            transparent: false,
            audio_muted: false,
            enable_webgl: true,
            autoplay: true,
        }
    }
}

impl ViewConfig {
    /// Create a config that loads a URL at the default size.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}
