//=========================================================================
// Event Inbox
//=========================================================================
//
// Bounded platform event queue drained once per frame.
//
// Architecture:
//   EventSender::send() → crossbeam bounded channel → EventInbox::drain()
//
// Draining is bounded per frame so a flood of events cannot stall a
// frame; the remainder is picked up on the next one.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender, TryRecvError, TrySendError};
use log::{trace, warn};

//=== Internal Dependencies ===============================================

use super::PlatformEvent;

/// Upper bound on events applied in a single frame.
pub const MAX_EVENTS_PER_FRAME: usize = 256;

//=== Construction ========================================================

/// Creates a connected sender/inbox pair holding at most `capacity` events.
///
/// # Panics
///
/// Panics if `capacity == 0`.
pub fn inbox(capacity: usize) -> (EventSender, EventInbox) {
    assert!(capacity > 0, "Channel capacity must be positive");
    let (sender, receiver) = bounded(capacity);
    (
        EventSender { sender },
        EventInbox {
            receiver,
            disconnected: false,
        },
    )
}

//=== EventSender =========================================================

/// Sending half used by the platform layer.
#[derive(Debug, Clone)]
pub struct EventSender {
    sender: Sender<PlatformEvent>,
}

impl EventSender {
    /// Queues an event without blocking.
    ///
    /// Returns `false` if the event was dropped because the inbox is full
    /// or gone.
    pub fn send(&self, event: PlatformEvent) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(event)) => {
                warn!(target: "platform", "Event inbox full, dropping {:?}", event);
                false
            }
            Err(TrySendError::Disconnected(event)) => {
                warn!(target: "platform", "Event inbox disconnected, dropping {:?}", event);
                false
            }
        }
    }
}

//=== EventInbox ==========================================================

/// Receiving half drained by the frame scheduler.
#[derive(Debug)]
pub struct EventInbox {
    receiver: Receiver<PlatformEvent>,
    disconnected: bool,
}

impl EventInbox {
    /// Takes the pending events, at most [`MAX_EVENTS_PER_FRAME`].
    pub fn drain(&mut self) -> Vec<PlatformEvent> {
        let mut events = Vec::new();

        while events.len() < MAX_EVENTS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if !self.disconnected {
                        trace!("Event inbox sender dropped");
                        self.disconnected = true;
                    }
                    break;
                }
            }
        }

        if events.len() >= MAX_EVENTS_PER_FRAME {
            warn!("Event queue backlog: drained {} events this frame", events.len());
        }

        events
    }

    /// Number of events waiting.
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }

    /// Returns `true` once every sender has been dropped.
    pub fn is_disconnected(&self) -> bool {
        self.disconnected
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::InputEvent;

    #[test]
    fn drain_preserves_order() {
        let (tx, mut rx) = inbox(8);
        tx.send(PlatformEvent::Input(InputEvent::key_down("a")));
        tx.send(PlatformEvent::Resized { width: 10, height: 20 });
        tx.send(PlatformEvent::Input(InputEvent::key_up("a")));

        assert_eq!(
            rx.drain(),
            vec![
                PlatformEvent::Input(InputEvent::key_down("a")),
                PlatformEvent::Resized { width: 10, height: 20 },
                PlatformEvent::Input(InputEvent::key_up("a")),
            ]
        );
        assert!(rx.is_empty());
    }

    #[test]
    fn drain_on_empty_inbox_is_empty() {
        let (_tx, mut rx) = inbox(4);
        assert!(rx.drain().is_empty());
        assert!(!rx.is_disconnected());
    }

    #[test]
    fn full_inbox_drops_new_events() {
        let (tx, mut rx) = inbox(1);
        assert!(tx.send(PlatformEvent::CloseRequested));
        assert!(!tx.send(PlatformEvent::Resized { width: 1, height: 1 }));
        assert_eq!(rx.drain(), vec![PlatformEvent::CloseRequested]);
    }

    #[test]
    fn send_after_inbox_dropped_reports_failure() {
        let (tx, rx) = inbox(4);
        drop(rx);
        assert!(!tx.send(PlatformEvent::CloseRequested), "Must not panic, just report");
    }

    #[test]
    fn drain_is_bounded_per_frame() {
        let (tx, mut rx) = inbox(MAX_EVENTS_PER_FRAME + 10);
        for i in 0..MAX_EVENTS_PER_FRAME + 10 {
            tx.send(PlatformEvent::Resized { width: i as u32, height: 1 });
        }

        assert_eq!(rx.drain().len(), MAX_EVENTS_PER_FRAME);
        assert_eq!(rx.drain().len(), 10, "Remainder arrives next frame");
    }

    #[test]
    fn dropped_sender_marks_disconnected() {
        let (tx, mut rx) = inbox(4);
        tx.send(PlatformEvent::CloseRequested);
        drop(tx);

        assert_eq!(rx.drain().len(), 1, "Queued events are still delivered");
        rx.drain();
        assert!(rx.is_disconnected());
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn zero_capacity_panics() {
        let _ = inbox(0);
    }
}
