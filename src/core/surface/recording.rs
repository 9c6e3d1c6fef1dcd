//=========================================================================
// Recording Surface
//=========================================================================
//
// Default `DrawContext` that records resolved draw commands instead of
// rasterizing them.
//
// Architecture:
//   fill_rect/fill_text/stroke_line → DrawCommand (state resolved) → Vec
//
// Each command carries the colors, font and alignment that were current
// when it was issued, so the list can be replayed by any backend.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::context::{DrawContext, DrawState, SurfaceProvider, TextAlign, TextBaseline};
use super::Color;

/// Largest width or height a provider will allocate by default.
pub const MAX_SURFACE_DIMENSION: u32 = 16_384;

//=== DrawCommand =========================================================

/// A single recorded draw operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    FillText {
        text: String,
        x: f32,
        y: f32,
        font: String,
        align: TextAlign,
        baseline: TextBaseline,
        color: Color,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        color: Color,
        width: f32,
    },
}

//=== RecordingSurface ====================================================

/// Display-list surface.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    state: DrawState,
    saved: Vec<DrawState>,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            state: DrawState::default(),
            saved: Vec::new(),
            commands: Vec::new(),
        }
    }

    /// Commands recorded since the last clear or resize.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// The current drawing state.
    pub fn state(&self) -> &DrawState {
        &self.state
    }

    /// Depth of the save stack.
    pub fn saved_depth(&self) -> usize {
        self.saved.len()
    }
}

impl DrawContext for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.state = DrawState::default();
        self.saved.clear();
        self.commands.clear();
    }

    fn set_fill_color(&mut self, color: Color) {
        self.state.fill_color = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.state.stroke_color = color;
    }

    fn set_line_width(&mut self, width: f32) {
        // Non-positive and non-finite widths are ignored, as on a 2D canvas.
        if width.is_finite() && width > 0.0 {
            self.state.line_width = width;
        }
    }

    fn set_font(&mut self, font: &str) {
        self.state.font = font.to_string();
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.state.text_align = align;
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.state.text_baseline = baseline;
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color: self.state.fill_color,
        });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
            font: self.state.font.clone(),
            align: self.state.text_align,
            baseline: self.state.text_baseline,
            color: self.state.fill_color,
        });
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32)) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color: self.state.stroke_color,
            width: self.state.line_width,
        });
    }

    fn save(&mut self) {
        self.saved.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.state = state;
        }
    }

    fn clear(&mut self) {
        self.commands.clear();
    }
}

//=== RecordingSurfaceProvider ============================================

/// Hands out `RecordingSurface`s within a dimension limit.
///
/// Zero-sized or over-limit requests yield no context.
#[derive(Debug, Clone)]
pub struct RecordingSurfaceProvider {
    max_dimension: u32,
}

impl RecordingSurfaceProvider {
    pub fn new() -> Self {
        Self::with_max_dimension(MAX_SURFACE_DIMENSION)
    }

    pub fn with_max_dimension(max_dimension: u32) -> Self {
        Self { max_dimension }
    }
}

impl Default for RecordingSurfaceProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceProvider for RecordingSurfaceProvider {
    fn create_surface(&mut self, width: u32, height: u32) -> Option<Box<dyn DrawContext>> {
        let fits = |d: u32| d > 0 && d <= self.max_dimension;
        if !fits(width) || !fits(height) {
            return None;
        }
        Some(Box::new(RecordingSurface::new(width, height)))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
