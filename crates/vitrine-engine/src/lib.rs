//! Off-screen browser engine boundary.
//!
//! The engine itself is an opaque dependency reached through the
//! [`EngineDriver`] and [`ViewDriver`] traits:
//! - Each view paints BGRA buffers into a [`SharedFrame`], the mutex-guarded
//!   storage the renderer reads from.
//! - Navigation and input commands flow down through [`ViewDriver`].
//! - Load progress, titles and teardown flow back up as [`EngineEvent`]s,
//!   drained once per main-loop turn.
//!
//! [`ViewManager`] owns the live views; dropping a handle is the only
//! teardown path. [`HeadlessEngine`] is a driverless stand-in that paints a
//! test pattern, used by the binary when no real engine is wired up and by
//! the tests.

pub mod driver;
pub mod events;
pub mod frame;
pub mod headless;
pub mod manager;
pub mod settings;

pub use driver::{EngineDriver, ViewDriver};
pub use events::{EngineEvent, EventSink};
pub use frame::{FramePixels, SharedFrame};
pub use headless::HeadlessEngine;
pub use manager::{ViewHandle, ViewManager};
pub use settings::{EngineSettings, ViewConfig};
