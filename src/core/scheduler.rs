//=========================================================================
// Frame Scheduler
//=========================================================================
//
// Top-level per-frame driver.
//
// State machine:
// ```text
//   Uninitialized ──setup ok──> Running <──paused flag──> Paused
//                                  │                        │
//                                  └──── running == false ──┴──> Stopped
// ```
//
// Per frame:
//   1. Stopped → nothing, do not reschedule
//   2. Drain the event inbox (input, resize, close)
//   3. One-time setup if not initialized
//   4. Sync every managed surface to the window size (even while paused)
//   5. running == false → Stopped
//   6. Paused → pause overlay only, no delta advance
//      (the primary surface is cleared on entry to every paused frame
//      and once more on resume)
//   7. Advance delta time; dt <= 0 → skip update/render this tick
//   8. SceneManager::update(dt) then SceneManager::render()
//
// The scheduler never re-arms itself: `frame()` returns a
// `FrameControl` and the platform decides whether to request another
// frame.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, error, info};

//=== Internal Dependencies ===============================================

use crate::core::error::EngineError;
use crate::core::globals::{EngineSystems, GameState};
use crate::core::input::InputState;
use crate::core::overlay::{draw_fps, draw_pause_overlay};
use crate::core::platform_bridge::{EventInbox, PlatformEvent};
use crate::core::surface::{DrawContext, SurfaceProvider, WindowMetrics};
use crate::core::time::DeltaTimeTracker;

//=== FrameState ==========================================================

/// Scheduler lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameState {
    Uninitialized,
    Running,
    Paused,
    Stopped,
}

//=== FrameControl ========================================================

/// Whether the caller should schedule another frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    Stop,
}

//=== TitleSink ===========================================================

/// Write-only slot for the application title.
pub trait TitleSink {
    fn set_title(&mut self, title: &str);
}

//=== SchedulerConfig =====================================================

/// Construction parameters for a [`FrameScheduler`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerConfig {
    pub title: String,
    pub window_size: (u32, u32),
    pub pause_key: String,
    pub show_fps: bool,
}

//=== FrameScheduler ======================================================

/// Drives initialization, pause handling, delta time and scene delegation.
pub struct FrameScheduler {
    game: GameState,
    state: FrameState,
    delta: DeltaTimeTracker,
    input: InputState,
    systems: EngineSystems,
    primary: Option<Box<dyn DrawContext>>,
    inbox: EventInbox,
    show_fps: bool,
}

impl FrameScheduler {
    //--- Construction -----------------------------------------------------

    /// Creates an uninitialized scheduler. No surface is acquired yet.
    pub fn new(config: SchedulerConfig, surfaces: Box<dyn SurfaceProvider>, inbox: EventInbox) -> Self {
        let (width, height) = config.window_size;

        Self {
            game: GameState::new(config.title),
            state: FrameState::Uninitialized,
            delta: DeltaTimeTracker::new(),
            input: InputState::new(config.pause_key),
            systems: EngineSystems::new(surfaces, WindowMetrics::new(width, height)),
            primary: None,
            inbox,
            show_fps: config.show_fps,
        }
    }

    /// Resets the run flags and timing ahead of a (re)start.
    ///
    /// Registered scenes and input state are kept; the primary surface is
    /// reacquired by the next frame's setup.
    pub fn reset(&mut self) {
        self.game.reset();
        self.delta.reset();
        self.primary = None;
        self.state = FrameState::Uninitialized;
        debug!("Frame scheduler reset");
    }

    //--- Frame ------------------------------------------------------------

    /// Runs one frame at `timestamp_ms` (monotonic milliseconds).
    ///
    /// # Errors
    ///
    /// [`EngineError::PrimarySurfaceUnavailable`] if one-time setup cannot
    /// acquire the primary surface. The scheduler stays uninitialized.
    pub fn frame(
        &mut self,
        timestamp_ms: f64,
        title: &mut dyn TitleSink,
    ) -> Result<FrameControl, EngineError> {
        if self.state == FrameState::Stopped {
            return Ok(FrameControl::Stop);
        }

        self.apply_events();

        if !self.game.is_initialized() {
            self.setup(title)?;
        }

        self.sync_surfaces();

        if !self.game.is_running() {
            self.transition(FrameState::Stopped);
            return Ok(FrameControl::Stop);
        }

        if self.input.is_paused() {
            self.transition(FrameState::Paused);
            if let Some(primary) = self.primary.as_deref_mut() {
                primary.clear();
                draw_pause_overlay(primary);
            }
            return Ok(FrameControl::Continue);
        }

        if self.state == FrameState::Paused {
            // Time spent paused is not simulated.
            self.delta.reset();
            if let Some(primary) = self.primary.as_deref_mut() {
                primary.clear();
            }
        }
        self.transition(FrameState::Running);

        self.delta.update(timestamp_ms);
        let dt = self.delta.delta();
        if dt <= 0.0 {
            return Ok(FrameControl::Continue);
        }

        let window = *self.systems.window();
        self.systems.scene_manager.update(dt, &window);
        self.systems.scene_manager.render(&window);

        if self.show_fps {
            if let Some(primary) = self.primary.as_deref_mut() {
                primary.clear();
                draw_fps(primary, dt);
            }
        }

        Ok(FrameControl::Continue)
    }

    /// Runs frames for each timestamp until the scheduler asks to stop.
    ///
    /// Returns the number of frames executed.
    pub fn run_frames<I>(&mut self, timestamps: I, title: &mut dyn TitleSink) -> Result<usize, EngineError>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut frames = 0;
        for timestamp in timestamps {
            frames += 1;
            if self.frame(timestamp, title)? == FrameControl::Stop {
                break;
            }
        }
        Ok(frames)
    }

    //--- Accessors --------------------------------------------------------

    pub fn state(&self) -> FrameState {
        self.state
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut GameState {
        &mut self.game
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn delta(&self) -> &DeltaTimeTracker {
        &self.delta
    }

    pub fn systems(&self) -> &EngineSystems {
        &self.systems
    }

    pub fn systems_mut(&mut self) -> &mut EngineSystems {
        &mut self.systems
    }

    pub fn primary_surface(&self) -> Option<&dyn DrawContext> {
        self.primary.as_deref()
    }

    //--- Internal Helpers -------------------------------------------------

    fn apply_events(&mut self) {
        for event in self.inbox.drain() {
            match event {
                PlatformEvent::Input(input) => self.input.process_event(&input),
                PlatformEvent::Resized { width, height } => {
                    self.systems.window_mut().resize(width, height);
                }
                PlatformEvent::CloseRequested => {
                    info!("Close requested, stopping frame loop");
                    self.game.stop();
                }
            }
        }
    }

    fn setup(&mut self, title: &mut dyn TitleSink) -> Result<(), EngineError> {
        info!("Initializing game...");

        let (width, height) = self.systems.window().size();
        let Some(primary) = self.systems.surfaces_mut().create_surface(width, height) else {
            error!("Game initialization failed");
            return Err(EngineError::PrimarySurfaceUnavailable { width, height });
        };

        self.primary = Some(primary);
        self.game.mark_initialized();
        title.set_title(self.game.title());
        self.transition(FrameState::Running);
        Ok(())
    }

    fn sync_surfaces(&mut self) {
        let window = *self.systems.window();
        if let Some(primary) = self.primary.as_deref_mut() {
            window.sync_surface(primary);
        }
        self.systems.scene_manager.sync_surfaces(&window);
    }

    fn transition(&mut self, next: FrameState) {
        if self.state == next {
            return;
        }

        if next == FrameState::Paused {
            info!(
                "Frame state: {:?} -> {:?} (last delta {:.3} seconds)",
                self.state,
                next,
                self.delta.delta()
            );
        } else {
            info!("Frame state: {:?} -> {:?}", self.state, next);
        }
        self.state = next;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
