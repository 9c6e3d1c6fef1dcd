//=========================================================================
// Surface System
//=========================================================================
//
// Drawing surfaces, their contexts, and the window size they follow.
//
// Architecture:
//   SurfaceProvider ──create_surface()──> Box<dyn DrawContext>
//   WindowMetrics ──sync_surface()──> DrawContext::resize()
//
//=========================================================================

//=== Module Declarations =================================================

mod color;
mod context;
mod recording;
mod window;

//=== Public API ==========================================================

pub use color::{Color, ColorParseError};
pub use context::{update_layer, DrawContext, DrawState, SurfaceProvider, TextAlign, TextBaseline};
pub use recording::{DrawCommand, RecordingSurface, RecordingSurfaceProvider, MAX_SURFACE_DIMENSION};
pub use window::WindowMetrics;
