//=========================================================================
// Input State
//
// Tracks currently-held keys and the paused flag.
//
// Responsibilities:
// - Record key presses (lower-cased) and releases
// - Flip `paused` whenever the pause key goes down
// - Answer case-insensitive "is this key held?" queries
//
// Notes:
// `key_down` is a raw reducer: every call with the pause key flips the
// flag, including two presses with no release in between.
// `process_event` is the entry point used by the frame loop and drops
// auto-repeat key-downs, so holding the pause key toggles exactly once.
//
//=========================================================================

//=== Standard Library Imports ============================================
use std::collections::HashSet;
use std::fmt;

//=== External Crates =====================================================
use log::{info, trace};

//=== Internal Modules ====================================================
use super::event::InputEvent;

/// Key that toggles the paused flag unless configured otherwise.
pub const DEFAULT_PAUSE_KEY: &str = "Escape";

//=== InputState ==========================================================

/// Keyboard snapshot plus the pause controller.
///
/// # Examples
///
/// ```rust
/// use aetheric_frames::core::input::InputState;
///
/// let mut input = InputState::default();
/// input.key_down("W");
/// assert!(input.is_key_pressed("w"));
///
/// input.key_down("Escape");
/// assert!(input.is_paused());
/// ```
pub struct InputState {
    pressed_keys: HashSet<String>,
    paused: bool,
    pause_key: String,
}

impl InputState {
    //--- Construction -----------------------------------------------------

    /// Creates an empty, unpaused state toggled by `pause_key`.
    pub fn new(pause_key: impl Into<String>) -> Self {
        const PRESSED_BASE: usize = 16;
        Self {
            pressed_keys: HashSet::with_capacity(PRESSED_BASE),
            paused: false,
            pause_key: pause_key.into(),
        }
    }

    //--- Event Processing -------------------------------------------------

    /// Applies a platform key event.
    ///
    /// Auto-repeat key-downs are ignored: the key is already recorded and
    /// the pause toggle only reacts to the physical press.
    pub fn process_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown { repeat: true, key } => {
                trace!("Ignoring auto-repeat for {:?}", key);
            }
            InputEvent::KeyDown { key, repeat: false } => self.key_down(key),
            InputEvent::KeyUp { key } => self.key_up(key),
        }
    }

    /// Records a raw key-down, toggling pause if it is the pause key.
    pub fn key_down(&mut self, key: &str) {
        if self.is_pause_key(key) {
            self.toggle_pause();
        }
        self.pressed_keys.insert(key.to_lowercase());
    }

    /// Records a key release.
    pub fn key_up(&mut self, key: &str) {
        self.pressed_keys.remove(&key.to_lowercase());
    }

    //--- Queries ----------------------------------------------------------

    /// Returns `true` while `key` is held (case-insensitive).
    pub fn is_key_pressed(&self, key: &str) -> bool {
        self.pressed_keys.contains(&key.to_lowercase())
    }

    /// Returns `true` if the simulation is paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Returns the key identifier that toggles pause.
    pub fn pause_key(&self) -> &str {
        &self.pause_key
    }

    //--- Internal Helpers -------------------------------------------------

    fn is_pause_key(&self, key: &str) -> bool {
        key.to_lowercase() == self.pause_key.to_lowercase()
    }

    fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        info!("Game {}", if self.paused { "paused" } else { "resumed" });
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(DEFAULT_PAUSE_KEY)
    }
}

//=== Debug Trait =========================================================

impl fmt::Debug for InputState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pressed: Vec<_> = self.pressed_keys.iter().collect();
        pressed.sort();

        f.debug_struct("InputState")
            .field("paused", &self.paused)
            .field("pause_key", &self.pause_key)
            .field("pressed", &pressed)
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //=====================================================================
    // Key Tracking
    //=====================================================================

    #[test]
    fn key_down_is_case_insensitive() {
        let mut input = InputState::default();
        input.key_down("W");
        assert!(input.is_key_pressed("w"));
        assert!(input.is_key_pressed("W"));
        assert!(!input.is_key_pressed("a"));
    }

    #[test]
    fn key_up_matches_case_insensitively() {
        let mut input = InputState::default();
        input.key_down("a");
        input.key_up("A");
        assert!(!input.is_key_pressed("a"), "Release with other casing must clear the key");
    }

    #[test]
    fn key_up_for_unpressed_key_is_noop() {
        let mut input = InputState::default();
        input.key_up("q");
        assert!(!input.is_key_pressed("q"));
    }

    //=====================================================================
    // Pause Toggle
    //=====================================================================

    #[test]
    fn starts_unpaused() {
        assert!(!InputState::default().is_paused());
    }

    #[test]
    fn pause_key_toggles_and_is_recorded() {
        let mut input = InputState::default();
        input.key_down("Escape");
        assert!(input.is_paused());
        assert!(input.is_key_pressed("escape"));

        input.key_up("Escape");
        assert!(input.is_paused(), "Release must not flip the flag");

        input.key_down("Escape");
        assert!(!input.is_paused());
    }

    #[test]
    fn two_raw_key_downs_toggle_twice() {
        let mut input = InputState::default();
        input.key_down("Escape");
        input.key_down("Escape");
        assert!(!input.is_paused(), "Two raw presses without release cancel out");
    }

    #[test]
    fn other_keys_do_not_toggle() {
        let mut input = InputState::default();
        input.key_down("p");
        input.key_down("Enter");
        assert!(!input.is_paused());
    }

    #[test]
    fn custom_pause_key() {
        let mut input = InputState::new("p");
        input.key_down("Escape");
        assert!(!input.is_paused());
        input.key_down("P");
        assert!(input.is_paused());
        assert_eq!(input.pause_key(), "p");
    }

    //=====================================================================
    // Event Processing
    //=====================================================================

    #[test]
    fn process_event_ignores_auto_repeat() {
        let mut input = InputState::default();
        input.process_event(&InputEvent::key_down("Escape"));
        input.process_event(&InputEvent::key_repeat("Escape"));
        input.process_event(&InputEvent::key_repeat("Escape"));
        assert!(input.is_paused(), "Holding the pause key must toggle exactly once");

        input.process_event(&InputEvent::key_up("Escape"));
        assert!(!input.is_key_pressed("Escape"));
        assert!(input.is_paused());
    }

    #[test]
    fn process_event_tracks_keys() {
        let mut input = InputState::default();
        input.process_event(&InputEvent::key_down("ArrowUp"));
        assert!(input.is_key_pressed("arrowup"));
        input.process_event(&InputEvent::key_up("ArrowUp"));
        assert!(!input.is_key_pressed("arrowup"));
    }

    #[test]
    fn debug_lists_pressed_keys_sorted() {
        let mut input = InputState::default();
        input.key_down("b");
        input.key_down("a");
        let debug = format!("{:?}", input);
        assert!(debug.contains("[\"a\", \"b\"]"), "Got {}", debug);
    }
}
