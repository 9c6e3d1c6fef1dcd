//=========================================================================
// Game State
//=========================================================================
//
// Run flags for one frame loop.
//
// - `initialized` flips to true exactly once, when setup succeeds
// - `running` flips to false to end the loop (window close, `stop()`)
// - `title` is written to the window title during setup
//
//=========================================================================

/// Window title used when none is configured.
pub const DEFAULT_TITLE: &str = "Aetheric Frames";

//=== GameState ===========================================================

/// Context object holding the loop's run flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    initialized: bool,
    running: bool,
    title: String,
}

impl GameState {
    /// Creates an uninitialized, running state.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            initialized: false,
            running: true,
            title: title.into(),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Requests loop termination. The scheduler stops at the next frame.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Restores `initialized = false, running = true`. The title is kept.
    pub fn reset(&mut self) {
        self.initialized = false;
        self.running = true;
    }

    pub(crate) fn mark_initialized(&mut self) {
        self.initialized = true;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_uninitialized_and_running() {
        let state = GameState::default();
        assert!(!state.is_initialized());
        assert!(state.is_running());
        assert_eq!(state.title(), DEFAULT_TITLE);
    }

    #[test]
    fn stop_and_reset() {
        let mut state = GameState::new("Demo");
        state.mark_initialized();
        state.stop();
        assert!(state.is_initialized());
        assert!(!state.is_running());

        state.reset();
        assert!(!state.is_initialized());
        assert!(state.is_running());
        assert_eq!(state.title(), "Demo");
    }
}
