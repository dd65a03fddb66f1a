//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, engine views, the compositor, and
//! input translation.

mod core;
mod event_handler;
mod init;
mod polling;
mod shutdown;

pub use core::VitrineApp;
