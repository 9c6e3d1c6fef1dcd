//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the platform layer (winit) with the frame loop.
//
// The platform pushes events into a bounded inbox as they arrive; the
// scheduler drains the inbox once at the top of every frame. Both ends
// live on the same thread, so the channel is an ordering buffer rather
// than a synchronisation point.
//
// Components:
// - `interface`: event and error types (the contract)
// - `inbox`: bounded event queue and its sending half
//
//=========================================================================

//=== Module Declarations =================================================

mod inbox;
mod interface;

//=== Public API ==========================================================

pub use inbox::{inbox, EventInbox, EventSender, MAX_EVENTS_PER_FRAME};
pub use interface::{PlatformError, PlatformEvent};
