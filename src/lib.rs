//=========================================================================
// Aetheric Frames Library Root
//
// This crate defines the public API surface of Aetheric Frames: a
// single-threaded frame loop driving z-ordered scenes, with a pause
// state machine and per-frame delta time.
//
// Responsibilities:
// - Expose the engine facade (`EngineBuilder`, `Engine`)
// - Expose the platform-independent systems under `core`
// - Keep the winit integration (`platform`) hidden from end users
//
// Typical usage:
// ```no_run
// use aetheric_frames::EngineBuilder;
//
// fn main() -> Result<(), aetheric_frames::core::EngineError> {
//     EngineBuilder::new().build().run()
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the frame scheduler and everything it drives. It can
// be used headless (see `FrameScheduler::frame`) without a window.
//
pub mod core;
pub mod logging;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the OS window and the winit event loop.
// `engine` wires the scheduler to the platform.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
pub use logging::{init_logging, LoggingConfig};
