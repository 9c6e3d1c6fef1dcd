//=========================================================================
// Platform Event Mapper
//
// Converts winit window events into engine `PlatformEvent`s.
//
// Keys are identified by their logical meaning, not their physical
// position: named keys use the W3C key name ("Escape", "ArrowUp",
// "Space"), printable keys use the produced text ("a", "A", "1").
//
// Responsibilities:
// - Translate keyboard input, keeping winit's auto-repeat flag
// - Translate resize and close requests
// - Ignore everything else (`None`)
//
//=========================================================================

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::Key;

use crate::core::input::InputEvent;
use crate::core::platform_bridge::PlatformEvent;

//=== Key Conversion ======================================================

/// Engine key identifier for a winit logical key.
///
/// Returns `None` for dead keys and keys winit could not identify.
pub(crate) fn key_name(key: &Key) -> Option<String> {
    match key {
        Key::Named(named) => Some(format!("{:?}", named)),
        Key::Character(text) => Some(text.to_string()),
        Key::Unidentified(_) | Key::Dead(_) => None,
    }
}

/// Builds an `InputEvent` from the parts of a winit `KeyEvent`.
pub(crate) fn map_key(key: &Key, state: ElementState, repeat: bool) -> Option<InputEvent> {
    let key = key_name(key)?;

    Some(match state {
        ElementState::Pressed => InputEvent::KeyDown { key, repeat },
        ElementState::Released => InputEvent::KeyUp { key },
    })
}

//=== Full Event Conversion ===============================================

/// Maps a window event to the event the scheduler should see, if any.
///
/// `RedrawRequested` is not mapped: it is the frame boundary itself and
/// is handled by the platform directly.
pub(crate) fn map_window_event(event: &WindowEvent) -> Option<PlatformEvent> {
    match event {
        WindowEvent::KeyboardInput { event, .. } => {
            map_key(&event.logical_key, event.state, event.repeat).map(PlatformEvent::Input)
        }

        WindowEvent::Resized(size) => Some(PlatformEvent::Resized {
            width: size.width,
            height: size.height,
        }),

        WindowEvent::CloseRequested => Some(PlatformEvent::CloseRequested),

        _ => None,
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalSize;
    use winit::keyboard::{NamedKey, NativeKey, SmolStr};

    //=====================================================================
    // Key Names
    //=====================================================================

    #[test]
    fn named_keys_use_key_names() {
        assert_eq!(key_name(&Key::Named(NamedKey::Escape)).as_deref(), Some("Escape"));
        assert_eq!(key_name(&Key::Named(NamedKey::ArrowUp)).as_deref(), Some("ArrowUp"));
        assert_eq!(key_name(&Key::Named(NamedKey::Space)).as_deref(), Some("Space"));
    }

    #[test]
    fn character_keys_use_their_text() {
        assert_eq!(key_name(&Key::Character(SmolStr::new("a"))).as_deref(), Some("a"));
        assert_eq!(key_name(&Key::Character(SmolStr::new("P"))).as_deref(), Some("P"));
    }

    #[test]
    fn unidentified_and_dead_keys_are_dropped() {
        assert_eq!(key_name(&Key::Unidentified(NativeKey::Unidentified)), None);
        assert_eq!(key_name(&Key::Dead(Some('`'))), None);
        assert_eq!(
            map_key(&Key::Dead(None), ElementState::Pressed, false),
            None
        );
    }

    //=====================================================================
    // Key Events
    //=====================================================================

    #[test]
    fn pressed_and_released_map_to_down_and_up() {
        let escape = Key::Named(NamedKey::Escape);

        assert_eq!(
            map_key(&escape, ElementState::Pressed, false),
            Some(InputEvent::key_down("Escape"))
        );
        assert_eq!(
            map_key(&escape, ElementState::Released, false),
            Some(InputEvent::key_up("Escape"))
        );
    }

    #[test]
    fn repeat_flag_is_preserved() {
        let escape = Key::Named(NamedKey::Escape);
        assert_eq!(
            map_key(&escape, ElementState::Pressed, true),
            Some(InputEvent::key_repeat("Escape"))
        );
    }

    //=====================================================================
    // Window Events
    //=====================================================================

    #[test]
    fn resize_maps_to_physical_size() {
        let event = WindowEvent::Resized(PhysicalSize::new(1024, 768));
        assert_eq!(
            map_window_event(&event),
            Some(PlatformEvent::Resized { width: 1024, height: 768 })
        );
    }

    #[test]
    fn close_request_is_forwarded() {
        assert_eq!(
            map_window_event(&WindowEvent::CloseRequested),
            Some(PlatformEvent::CloseRequested)
        );
    }

    #[test]
    fn unrelated_events_are_ignored() {
        assert_eq!(map_window_event(&WindowEvent::Focused(true)), None);
        assert_eq!(map_window_event(&WindowEvent::RedrawRequested), None);
    }
}
