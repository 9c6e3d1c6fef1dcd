//=========================================================================
// Drawing Context Contract
//=========================================================================
//
// The narrow 2D drawing interface scenes and overlays draw through.
//
// A context is bound 1:1 to its surface: creating one yields both, and
// resizing the surface goes through the context. Implementations range
// from command recorders (tests, headless runs) to real rasterizers.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::Color;

//=== Text Layout =========================================================

/// Horizontal anchoring of text relative to the draw position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical anchoring of text relative to the draw position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextBaseline {
    Top,
    Middle,
    #[default]
    Alphabetic,
    Bottom,
}

//=== DrawState ===========================================================

/// Mutable drawing state captured by `save()` and restored by `restore()`.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawState {
    pub fill_color: Color,
    pub stroke_color: Color,
    pub line_width: f32,
    pub font: String,
    pub text_align: TextAlign,
    pub text_baseline: TextBaseline,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            fill_color: Color::BLACK,
            stroke_color: Color::BLACK,
            line_width: 1.0,
            font: "10px sans-serif".to_string(),
            text_align: TextAlign::default(),
            text_baseline: TextBaseline::default(),
        }
    }
}

//=== DrawContext =========================================================

/// A drawing surface together with its 2D context.
pub trait DrawContext {
    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Surface height in pixels.
    fn height(&self) -> u32;

    /// Resizes the surface. Content and drawing state are reset.
    fn resize(&mut self, width: u32, height: u32);

    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f32);
    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_text_baseline(&mut self, baseline: TextBaseline);

    /// Fills a rectangle with the current fill color.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Draws text with the current font, alignment and fill color.
    fn fill_text(&mut self, text: &str, x: f32, y: f32);

    /// Strokes a straight line with the current stroke color and width.
    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32));

    /// Pushes the current drawing state.
    fn save(&mut self);

    /// Pops the last saved drawing state. No-op on an empty stack.
    fn restore(&mut self);

    /// Erases all content back to transparent. Drawing state is kept.
    fn clear(&mut self);
}

//=== SurfaceProvider =====================================================

/// Creates surfaces with their drawing contexts.
///
/// Returns `None` when no context can be obtained for the requested size.
pub trait SurfaceProvider {
    fn create_surface(&mut self, width: u32, height: u32) -> Option<Box<dyn DrawContext>>;
}

//=== Helpers =============================================================

/// Runs `draw` between `save()` and `restore()` so state changes stay local.
pub fn update_layer<F>(ctx: &mut dyn DrawContext, draw: F)
where
    F: FnOnce(&mut dyn DrawContext),
{
    ctx.save();
    draw(ctx);
    ctx.restore();
}
