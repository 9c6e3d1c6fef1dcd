//=========================================================================
// Input System
//
// Keyboard state and the pause toggle.
//
// Architecture:
//   PlatformEvent::Input(InputEvent) → InputState::process_event()
//     ├─ pressed key set (case-insensitive)
//     └─ paused flag (flipped by the pause key)
//
// Notes:
// Events are delivered on the frame thread through the platform inbox
// and applied at the top of each frame, so a frame never observes a
// half-applied event.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event;
mod input_state;

//=== Public API ==========================================================

pub use event::InputEvent;
pub use input_state::{InputState, DEFAULT_PAUSE_KEY};
