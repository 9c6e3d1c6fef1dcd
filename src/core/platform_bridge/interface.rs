//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Platform-to-core interface types (events and errors).
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== PlatformEvent =======================================================

/// Events delivered from the platform to the frame loop.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformEvent {
    /// Keyboard input.
    Input(InputEvent),

    /// The window's inner size changed (physical pixels).
    Resized { width: u32, height: u32 },

    /// The user or OS asked the window to close.
    CloseRequested,
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Event loop creation failed (OS-level issue).
    #[error("event loop creation failed: {0}")]
    EventLoopCreation(String),

    /// Event loop execution error.
    #[error("event loop error: {0}")]
    EventLoopExecution(String),

    /// The OS refused to create the window.
    #[error("window creation failed: {0}")]
    WindowCreation(String),
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_event_is_cloneable_and_comparable() {
        let event = PlatformEvent::Resized { width: 1, height: 2 };
        assert_eq!(event.clone(), event);
    }

    #[test]
    fn platform_error_display_format() {
        let err = PlatformError::EventLoopCreation("no display".into());
        assert_eq!(err.to_string(), "event loop creation failed: no display");
    }
}
