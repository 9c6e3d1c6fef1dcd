//=========================================================================
// Core Systems
//
// Platform-independent half of the engine. Everything here runs on the
// thread that drives frames and never touches winit directly.
//
// Module map:
// - `time`            delta-time tracking between frames
// - `input`           key events, pressed-key set and pause toggle
// - `surface`         drawing contract, colors, recording surface, window size
// - `scene`           scenes, behaviours and the z-ordered scene manager
// - `overlay`         pause overlay and frame-rate readout drawing
// - `scheduler`       per-frame state machine
// - `platform_bridge` event inbox between the window layer and the scheduler
// - `globals`         run flags and the systems handed to setup code
// - `error`           error types
//
//=========================================================================

pub mod error;
pub mod globals;
pub mod input;
pub mod overlay;
pub mod platform_bridge;
pub mod scene;
pub mod scheduler;
pub mod surface;
pub mod time;

#[cfg(test)]
pub(crate) mod test_support;

//=== Re-exports ==========================================================

pub use error::{EngineError, SceneError};
pub use globals::{EngineSystems, GameState};
pub use scheduler::{FrameControl, FrameScheduler, FrameState, SchedulerConfig, TitleSink};
