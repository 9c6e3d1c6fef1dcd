//=========================================================================
// Test Support
//=========================================================================
//
// Shared doubles for unit tests:
// - `CallLog` / `LoggingBehavior`: record scene hook calls in order
// - `SharedProvider`: hands out surfaces the test can inspect afterwards
// - `FailingProvider`: never yields a context
// - `TitleLog`: captures window title writes
//
//=========================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::scene::{SceneBehavior, SceneCanvas};
use crate::core::scheduler::TitleSink;
use crate::core::surface::{
    Color, DrawContext, RecordingSurface, SurfaceProvider, TextAlign, TextBaseline,
};

//=== CallLog =============================================================

#[derive(Debug, Clone, Default)]
pub(crate) struct CallLog(Rc<RefCell<Vec<String>>>);

impl CallLog {
    pub(crate) fn push(&self, entry: String) {
        self.0.borrow_mut().push(entry);
    }

    pub(crate) fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

//=== LoggingBehavior =====================================================

pub(crate) struct LoggingBehavior {
    name: String,
    log: CallLog,
}

impl LoggingBehavior {
    pub(crate) fn new(name: &str, log: &CallLog) -> Self {
        Self {
            name: name.to_string(),
            log: log.clone(),
        }
    }
}

impl SceneBehavior for LoggingBehavior {
    fn update(&mut self, dt: f64) {
        self.log.push(format!("update:{}:{}", self.name, dt));
    }

    fn render(&mut self, canvas: &mut SceneCanvas<'_>) {
        canvas.fill_background();
        self.log.push(format!("render:{}", self.name));
    }
}

//=== SharedSurface =======================================================

/// `DrawContext` that forwards to a recording surface the test also holds.
///
/// Resizes are also noted in the provider's log as `resize:<index>`.
pub(crate) struct SharedSurface {
    inner: Rc<RefCell<RecordingSurface>>,
    index: usize,
    resizes: CallLog,
}

impl DrawContext for SharedSurface {
    fn width(&self) -> u32 {
        self.inner.borrow().width()
    }

    fn height(&self) -> u32 {
        self.inner.borrow().height()
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.resizes.push(format!("resize:{}", self.index));
        self.inner.borrow_mut().resize(width, height);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.inner.borrow_mut().set_fill_color(color);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.inner.borrow_mut().set_stroke_color(color);
    }

    fn set_line_width(&mut self, width: f32) {
        self.inner.borrow_mut().set_line_width(width);
    }

    fn set_font(&mut self, font: &str) {
        self.inner.borrow_mut().set_font(font);
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.inner.borrow_mut().set_text_align(align);
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.inner.borrow_mut().set_text_baseline(baseline);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.inner.borrow_mut().fill_rect(x, y, width, height);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.inner.borrow_mut().fill_text(text, x, y);
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32)) {
        self.inner.borrow_mut().stroke_line(from, to);
    }

    fn save(&mut self) {
        self.inner.borrow_mut().save();
    }

    fn restore(&mut self) {
        self.inner.borrow_mut().restore();
    }

    fn clear(&mut self) {
        self.inner.borrow_mut().clear();
    }
}

//=== Providers ===========================================================

#[derive(Default)]
pub(crate) struct SharedProvider {
    created: Vec<Rc<RefCell<RecordingSurface>>>,
    resizes: CallLog,
}

impl SharedProvider {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// The `index`-th surface handed out.
    pub(crate) fn surface(&self, index: usize) -> Rc<RefCell<RecordingSurface>> {
        Rc::clone(&self.created[index])
    }

    pub(crate) fn created(&self) -> usize {
        self.created.len()
    }

    /// Resize calls on handed-out surfaces, in call order.
    pub(crate) fn resizes(&self) -> Vec<String> {
        self.resizes.entries()
    }
}

impl SurfaceProvider for SharedProvider {
    fn create_surface(&mut self, width: u32, height: u32) -> Option<Box<dyn DrawContext>> {
        let surface = Rc::new(RefCell::new(RecordingSurface::new(width, height)));
        self.created.push(Rc::clone(&surface));
        Some(Box::new(SharedSurface {
            inner: surface,
            index: self.created.len() - 1,
            resizes: self.resizes.clone(),
        }))
    }
}

/// `SurfaceProvider` with a shared handle, for handing to a scheduler
/// while the test keeps inspecting what was created.
#[derive(Clone, Default)]
pub(crate) struct SharedProviderHandle(pub(crate) Rc<RefCell<SharedProvider>>);

impl SurfaceProvider for SharedProviderHandle {
    fn create_surface(&mut self, width: u32, height: u32) -> Option<Box<dyn DrawContext>> {
        self.0.borrow_mut().create_surface(width, height)
    }
}

pub(crate) struct FailingProvider;

impl SurfaceProvider for FailingProvider {
    fn create_surface(&mut self, _width: u32, _height: u32) -> Option<Box<dyn DrawContext>> {
        None
    }
}

//=== TitleLog ============================================================

#[derive(Debug, Default)]
pub(crate) struct TitleLog {
    pub(crate) titles: Vec<String>,
}

impl TitleSink for TitleLog {
    fn set_title(&mut self, title: &str) {
        self.titles.push(title.to_string());
    }
}
