//=========================================================================
// Delta Time Tracker
//=========================================================================
//
// Converts a stream of absolute frame timestamps into per-frame elapsed
// time.
//
// Timestamps are milliseconds since an arbitrary monotonic epoch, the
// same unit the platform frame clock hands to the scheduler. Deltas are
// reported in seconds.
//
// The first update after construction or `reset()` yields a zero delta:
// there is no previous timestamp to measure against. Large deltas (e.g.
// after the process was suspended) are passed through unclamped.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{info, trace};

//=== DeltaTimeTracker ====================================================

/// Tracks the elapsed time between consecutive frame timestamps.
///
/// # Examples
///
/// ```rust
/// use aetheric_frames::core::time::DeltaTimeTracker;
///
/// let mut tracker = DeltaTimeTracker::new();
/// tracker.update(1000.0);
/// assert_eq!(tracker.delta(), 0.0);
///
/// tracker.update(1016.0);
/// assert!((tracker.delta() - 0.016).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DeltaTimeTracker {
    last_timestamp: Option<f64>,
    delta_seconds: f64,
}

impl DeltaTimeTracker {
    /// Creates a tracker with no baseline timestamp.
    pub fn new() -> Self {
        Self {
            last_timestamp: None,
            delta_seconds: 0.0,
        }
    }

    /// Advances the tracker with the current frame timestamp (milliseconds).
    ///
    /// The first call only records the baseline and yields a zero delta.
    pub fn update(&mut self, timestamp_ms: f64) {
        self.delta_seconds = match self.last_timestamp {
            Some(last) => (timestamp_ms - last) / 1000.0,
            None => 0.0,
        };
        self.last_timestamp = Some(timestamp_ms);

        trace!("Delta time: {:.3} seconds", self.delta_seconds);
    }

    /// Returns the most recently computed delta in seconds.
    pub fn delta(&self) -> f64 {
        self.delta_seconds
    }

    /// Returns the baseline timestamp, if one has been recorded.
    pub fn last_timestamp(&self) -> Option<f64> {
        self.last_timestamp
    }

    /// Clears the baseline so the next `update` again yields a zero delta.
    pub fn reset(&mut self) {
        self.last_timestamp = None;
        self.delta_seconds = 0.0;
    }

    /// Logs the current delta at info level.
    pub fn log_delta(&self) {
        info!("Delta time: {:.3} seconds", self.delta_seconds);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
