//=========================================================================
// Aetheric Frames Engine
//
// Main entry point and coordinator for the engine.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──init()──>  Engine  ──run()──>  [Event Loop]
//         │                                  │                              │
//         ├─ with_title()                    └─ scenes registered           └─ one frame per
//         ├─ with_window_size()                 and activated                  redraw until
//         ├─ with_pause_key()                                                  Stop or error
//         ├─ with_channel_capacity()
//         ├─ with_fps_display()
//         └─ with_surface_provider()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use crate::core::error::{EngineError, SceneError};
use crate::core::globals::{EngineSystems, DEFAULT_TITLE};
use crate::core::input::DEFAULT_PAUSE_KEY;
use crate::core::platform_bridge::{inbox, EventSender};
use crate::core::scheduler::{FrameScheduler, SchedulerConfig};
use crate::core::surface::{RecordingSurfaceProvider, SurfaceProvider};
use crate::platform::Platform;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Title**: "Aetheric Frames"
/// - **Window size**: 800x600
/// - **Pause key**: "Escape"
/// - **Channel capacity**: 128 events
/// - **FPS readout**: off
/// - **Surfaces**: [`RecordingSurfaceProvider`]
///
/// # Examples
///
/// ```no_run
/// use aetheric_frames::EngineBuilder;
/// use aetheric_frames::core::scene::BackgroundScene;
/// use aetheric_frames::core::surface::Color;
///
/// EngineBuilder::new()
///     .with_title("Demo")
///     .with_window_size(1280, 720)
///     .build()
///     .init(|systems| {
///         let config = systems.scene_config("bg").with_background(Color::WHITE);
///         systems.create_scene(config, BackgroundScene)?;
///         systems.scene_manager.activate_scene("bg")
///     })?
///     .run()?;
/// # Ok::<(), aetheric_frames::core::EngineError>(())
/// ```
pub struct EngineBuilder {
    title: String,
    window_size: (u32, u32),
    pause_key: String,
    channel_capacity: usize,
    show_fps: bool,
    surfaces: Option<Box<dyn SurfaceProvider>>,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            window_size: (800, 600),
            pause_key: DEFAULT_PAUSE_KEY.to_string(),
            channel_capacity: 128,
            show_fps: false,
            surfaces: None,
        }
    }

    /// Sets the window title applied during first-frame setup.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the requested inner window size.
    ///
    /// The platform reports the real size once the window exists; surfaces
    /// follow that.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    /// Sets the key that toggles pause. Matched case-insensitively.
    pub fn with_pause_key(mut self, key: impl Into<String>) -> Self {
        self.pause_key = key.into();
        self
    }

    /// Sets the capacity of the platform → scheduler event inbox.
    ///
    /// Events arriving while the inbox is full are dropped with a warning.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Draws the frame-rate readout on the primary surface every frame.
    pub fn with_fps_display(mut self, enabled: bool) -> Self {
        self.show_fps = enabled;
        self
    }

    /// Replaces the default recording surface provider.
    pub fn with_surface_provider(mut self, provider: Box<dyn SurfaceProvider>) -> Self {
        self.surfaces = Some(provider);
        self
    }

    /// Builds the engine instance.
    pub fn build(self) -> Engine {
        info!(
            "Building engine ({:?}, {}x{}, channel: {})",
            self.title, self.window_size.0, self.window_size.1, self.channel_capacity
        );

        let (sender, receiver) = inbox(self.channel_capacity);
        let surfaces = self
            .surfaces
            .unwrap_or_else(|| Box::new(RecordingSurfaceProvider::new()));

        let config = SchedulerConfig {
            title: self.title,
            window_size: self.window_size,
            pause_key: self.pause_key,
            show_fps: self.show_fps,
        };

        Engine {
            scheduler: FrameScheduler::new(config, surfaces, receiver),
            sender,
            window_size: self.window_size,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Aetheric Frames runtime.
///
/// Create via [`EngineBuilder`], register scenes with [`Engine::init`],
/// then hand control to the window event loop with [`Engine::run`].
pub struct Engine {
    scheduler: FrameScheduler,
    sender: EventSender,
    window_size: (u32, u32),
}

impl Engine {
    //--- Initialization ---------------------------------------------------

    /// Runs application setup against the engine systems.
    ///
    /// # Errors
    ///
    /// Returns whatever scene error the setup closure reports, e.g. a
    /// scene whose surface could not be created, or activation of an
    /// unknown id.
    pub fn init<F>(mut self, init_fn: F) -> Result<Self, EngineError>
    where
        F: FnOnce(&mut EngineSystems) -> Result<(), SceneError>,
    {
        info!("Initializing engine systems");

        init_fn(self.scheduler.systems_mut())?;

        info!(
            "Engine initialization complete ({} scenes, {} active)",
            self.scheduler.systems().scene_manager.len(),
            self.scheduler.systems().scene_manager.active_count()
        );
        Ok(self)
    }

    //--- Accessors --------------------------------------------------------

    pub fn systems(&self) -> &EngineSystems {
        self.scheduler.systems()
    }

    pub fn systems_mut(&mut self) -> &mut EngineSystems {
        self.scheduler.systems_mut()
    }

    /// A sender for injecting platform events (input, resize, close).
    pub fn event_sender(&self) -> EventSender {
        self.sender.clone()
    }

    //--- Execution --------------------------------------------------------

    /// Opens the window and runs frames until the loop stops.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the winit event loop (must be the main thread)
    /// 2. Creates the window on resume and requests the first frame
    /// 3. Runs one scheduler frame per redraw
    /// 4. Exits when the scheduler stops or a frame fails
    ///
    /// # Errors
    ///
    /// Platform failures, and [`EngineError::PrimarySurfaceUnavailable`]
    /// if first-frame setup fails.
    pub fn run(self) -> Result<(), EngineError> {
        info!("Starting engine runtime");

        let platform = Platform::new(self.scheduler, self.sender, self.window_size);
        let result = platform.run();

        match &result {
            Ok(()) => info!("Engine shutdown complete"),
            Err(err) => log::error!("Engine stopped with error: {}", err),
        }
        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
