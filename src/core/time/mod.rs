//=========================================================================
// Time Subsystem
//=========================================================================
//
// Frame timing utilities.
//
// Architecture:
//   frame timestamp (ms) → DeltaTimeTracker::update() → delta (seconds)
//
//=========================================================================

//=== Module Declarations =================================================

mod delta_time;

//=== Public API ==========================================================

pub use delta_time::DeltaTimeTracker;
