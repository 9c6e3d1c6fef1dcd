//=========================================================================
// Platform Subsystem
//
// Bridges winit (OS window and events) with the frame scheduler.
//
// Architecture:
// ```text
//  Main Thread
//  ┌──────────────────────────────────────────────────────┐
//  │  winit Event Loop                                    │
//  │   ├─ KeyboardInput / Resized / CloseRequested        │
//  │   │    ↓ event_mapper                                │
//  │   │  EventSender ──► bounded inbox ──┐               │
//  │   │                                  ↓               │
//  │   └─ RedrawRequested ──────► FrameScheduler::frame() │
//  │                                      │               │
//  │        Continue → request_redraw()   │               │
//  │        Stop / Err → exit()  ◄────────┘               │
//  └──────────────────────────────────────────────────────┘
// ```
//
// Frame Boundary: RedrawRequested
//   → queued events are applied at the top of the frame
//   → the next frame is only requested if the scheduler asks for it
//
// winit mandates the main thread on macOS/iOS, so this runs on the
// thread that called `Engine::run()`.
//
//=========================================================================

//=== Submodules ==========================================================

mod event_mapper;

//=== Standard Library ====================================================

use std::time::Instant;

//=== External Crates =====================================================

use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::error::EngineError;
use crate::core::platform_bridge::{EventSender, PlatformError, PlatformEvent};
use crate::core::scheduler::{FrameControl, FrameScheduler, TitleSink};
use event_mapper::map_window_event;

//=== WindowTitle =========================================================

/// `TitleSink` backed by the OS window.
struct WindowTitle<'a>(&'a Window);

impl TitleSink for WindowTitle<'_> {
    fn set_title(&mut self, title: &str) {
        debug!(target: "platform", "Window title set to {:?}", title);
        self.0.set_title(title);
    }
}

//=== Platform ============================================================

/// Window owner and frame driver.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(..)`, no window yet
/// 2. **Execution**: `platform.run()` blocks in the winit event loop
/// 3. **Resume**: the window is created and the first frame requested
/// 4. **Shutdown**: the scheduler reports `Stop` (or fails) → loop exits
///
/// Not `Send`; must stay on the main thread.
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    scheduler: FrameScheduler,
    event_sender: EventSender,
    initial_size: (u32, u32),

    /// Time origin for frame timestamps.
    started: Instant,

    /// First fatal error, returned from `run()`.
    failure: Option<EngineError>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(
        scheduler: FrameScheduler,
        event_sender: EventSender,
        initial_size: (u32, u32),
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            scheduler,
            event_sender,
            initial_size,
            started: Instant::now(),
            failure: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the winit event loop until the scheduler stops.
    ///
    /// # Errors
    ///
    /// Event loop failures, window creation failure, or the first error a
    /// frame returned (e.g. the primary surface could not be created).
    pub(crate) fn run(mut self) -> Result<(), EngineError> {
        debug!(target: "platform", "Starting winit event loop");

        let event_loop =
            EventLoop::new().map_err(|e| PlatformError::EventLoopCreation(e.to_string()))?;

        event_loop
            .run_app(&mut self)
            .map_err(|e| PlatformError::EventLoopExecution(e.to_string()))?;

        info!(target: "platform", "Event loop exited");

        match self.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    //--- Internal Helpers -------------------------------------------------

    /// Milliseconds since the platform was created.
    fn timestamp_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: EngineError) {
        error!(target: "platform", "Fatal: {}", err);
        if self.failure.is_none() {
            self.failure = Some(err);
        }
        event_loop.exit();
    }

    fn run_frame(&mut self, event_loop: &ActiveEventLoop) {
        let timestamp = self.timestamp_ms();
        let Some(window) = self.window.as_ref() else {
            return;
        };

        let result = self.scheduler.frame(timestamp, &mut WindowTitle(window));
        match result {
            Ok(FrameControl::Continue) => window.request_redraw(),
            Ok(FrameControl::Stop) => {
                info!(target: "platform", "Frame loop stopped");
                event_loop.exit();
            }
            Err(err) => self.fail(event_loop, err),
        }
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window on first resume and schedules the first frame.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let (width, height) = self.initial_size;
        let attrs = WindowAttributes::default().with_inner_size(LogicalSize::new(width, height));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                let size = window.inner_size();
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    size.width,
                    size.height,
                    window.scale_factor()
                );

                // Surfaces follow the real (physical) size, not the request.
                self.event_sender.send(PlatformEvent::Resized {
                    width: size.width,
                    height: size.height,
                });

                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                let err = PlatformError::WindowCreation(e.to_string());
                self.fail(event_loop, err.into());
            }
        }
    }

    /// Forwards input, resize and close events; drives a frame on redraw.
    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if let WindowEvent::RedrawRequested = event {
            self.run_frame(event_loop);
            return;
        }

        if let Some(mapped) = map_window_event(&event) {
            trace!(target: "platform::input", "Forwarding {:?}", mapped);
            let closing = mapped == PlatformEvent::CloseRequested;

            if !self.event_sender.send(mapped) && closing {
                // The close request must not be lost to a full inbox.
                warn!(target: "platform", "Close request dropped, stopping directly");
                self.scheduler.game_mut().stop();
            }

            if closing {
                info!(target: "platform", "Window close requested");
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
