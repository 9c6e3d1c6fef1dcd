//=========================================================================
// Global Engine State
//=========================================================================
//
// Separates systems (scene manager, surfaces, window) from the
// process-level run flags.
//
// Architecture:
//   GameState: initialized / running / title (owned by the scheduler)
//   EngineSystems: SceneManager + SurfaceProvider + WindowMetrics
//
// Both are plain values owned by a `FrameScheduler`; nothing here is
// ambient, so several independent loops can coexist.
//
//=========================================================================

//=== Module Declarations =================================================

mod engine_systems;
mod game_state;

//=== Public API ==========================================================

pub use engine_systems::EngineSystems;
pub use game_state::{GameState, DEFAULT_TITLE};
