//=========================================================================
// Input Event Types
//
// Engine-side representation of keyboard events.
//
// Keys are identified by the string the platform reports for the logical
// key ("Escape", "a", "ArrowUp", ...). Matching is case-insensitive
// throughout the input subsystem.
//
//=========================================================================

//=== InputEvent ==========================================================

/// A keyboard event as delivered by the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key went down.
    ///
    /// `repeat` is set for auto-repeat events generated while the key is
    /// held. Only the physical press has `repeat == false`.
    KeyDown { key: String, repeat: bool },

    /// A key was released.
    KeyUp { key: String },
}

impl InputEvent {
    /// Creates a physical (non-repeat) key-down event.
    pub fn key_down(key: impl Into<String>) -> Self {
        Self::KeyDown {
            key: key.into(),
            repeat: false,
        }
    }

    /// Creates an auto-repeat key-down event.
    pub fn key_repeat(key: impl Into<String>) -> Self {
        Self::KeyDown {
            key: key.into(),
            repeat: true,
        }
    }

    /// Creates a key-up event.
    pub fn key_up(key: impl Into<String>) -> Self {
        Self::KeyUp { key: key.into() }
    }

    /// Returns the key identifier carried by the event.
    pub fn key(&self) -> &str {
        match self {
            Self::KeyDown { key, .. } | Self::KeyUp { key } => key,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
