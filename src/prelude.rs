//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_frames::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine facade
pub use crate::engine::{Engine, EngineBuilder};
pub use crate::logging::{init_logging, LoggingConfig};

// Errors
pub use crate::core::error::{EngineError, SceneError};

// Systems handed to setup code
pub use crate::core::globals::{EngineSystems, GameState};

// Input
pub use crate::core::input::{InputEvent, InputState};

// Scenes
pub use crate::core::scene::{
    BackgroundScene, FpsOverlay, Scene, SceneBehavior, SceneCanvas, SceneConfig, SceneManager,
};

// Drawing
pub use crate::core::surface::{
    update_layer, Color, DrawContext, SurfaceProvider, TextAlign, TextBaseline,
};

// Frame loop
pub use crate::core::scheduler::{FrameControl, FrameScheduler, FrameState};
pub use crate::core::time::DeltaTimeTracker;
