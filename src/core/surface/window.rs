//=========================================================================
// Window Metrics
//=========================================================================
//
// The window-size source surfaces are synchronised against.
//
// The platform reports resizes through the event inbox; the scheduler
// applies them here at the top of a frame, and every managed surface is
// then brought to the current size before it is drawn.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use super::DrawContext;

//=== WindowMetrics =======================================================

/// Current window dimensions in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowMetrics {
    width: u32,
    height: u32,
}

impl WindowMetrics {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Records a new window size. Returns `true` if it changed.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if (self.width, self.height) == (width, height) {
            return false;
        }

        self.width = width;
        self.height = height;
        info!("Window resized to: {}x{}", width, height);
        true
    }

    /// Resizes `surface` to the window size if it differs.
    ///
    /// Returns `true` if the surface was resized.
    pub fn sync_surface(&self, surface: &mut dyn DrawContext) -> bool {
        if (surface.width(), surface.height()) == self.size() {
            return false;
        }

        surface.resize(self.width, self.height);
        info!("Surface resized to: {}x{}", self.width, self.height);
        true
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
