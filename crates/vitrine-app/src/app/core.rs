//! VitrineApp struct definition and constructor.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::window::Window;

use vitrine_common::ViewId;
use vitrine_engine::ViewManager;
use vitrine_render::Compositor;

use crate::config::VitrineConfig;

/// Top-level application state.
pub struct VitrineApp {
    pub(super) config: VitrineConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) compositor: Option<Compositor>,

    // Engine views
    pub(super) manager: Option<ViewManager>,

    // Input routing (winit reports modifiers separately, and lock keys
    // not at all)
    pub(super) modifiers: winit::keyboard::ModifiersState,
    pub(super) caps_lock: bool,
    pub(super) num_lock: bool,
    pub(super) cursor_pos: (f64, f64),
    pub(super) pressed_buttons: u32,
    pub(super) hovered_view: Option<ViewId>,
    pub(super) focused_view: Option<ViewId>,

    // Per-view zoom levels, driven by the Ctrl+=/Ctrl+-/Ctrl+0 shortcuts
    pub(super) zoom_levels: HashMap<ViewId, f64>,

    // Whether the app should exit
    pub(super) should_exit: bool,

    // Engine pump pacing
    pub(super) pump_interval: Duration,
    pub(super) last_pump: Instant,
}

impl VitrineApp {
    pub fn new(config: VitrineConfig) -> Self {
        let pump_interval = Duration::from_secs(1) / config.engine.frame_rate.clamp(1, 240);
        Self {
            config,
            window: None,
            compositor: None,
            manager: None,
            modifiers: winit::keyboard::ModifiersState::empty(),
            caps_lock: false,
            num_lock: false,
            cursor_pos: (0.0, 0.0),
            pressed_buttons: 0,
            hovered_view: None,
            focused_view: None,
            zoom_levels: HashMap::new(),
            should_exit: false,
            pump_interval,
            last_pump: Instant::now(),
        }
    }
}
