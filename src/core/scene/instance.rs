//=========================================================================
// Scene
//=========================================================================
//
// A named drawing surface with a background fill and a stacking order.
//
// Construction acquires the surface and its context in one step and
// fails if no context is available, so a `Scene` value always owns a
// usable context.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

use log::{debug, error};

//=== Internal Dependencies ===============================================

use super::{BackgroundScene, SceneBehavior};
use crate::core::error::SceneError;
use crate::core::surface::{update_layer, Color, DrawContext, SurfaceProvider};

/// Stacking order given to scenes that do not set one.
pub const DEFAULT_Z_INDEX: i32 = 0;

//=== SceneConfig =========================================================

/// Parameters for constructing a [`Scene`].
///
/// Defaults: opaque black background, z-index [`DEFAULT_Z_INDEX`].
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub id: String,
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub z_index: i32,
}

impl SceneConfig {
    pub fn new(id: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            background: Color::BLACK,
            z_index: DEFAULT_Z_INDEX,
        }
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }
}

//=== Scene ===============================================================

/// An addressable drawing surface plus the behavior that draws on it.
pub struct Scene {
    id: String,
    surface: Box<dyn DrawContext>,
    background: Color,
    z_index: i32,
    behavior: Box<dyn SceneBehavior>,
}

impl Scene {
    //--- Construction -----------------------------------------------------

    /// Creates a scene with the default behavior (background fill only).
    pub fn new(config: SceneConfig, provider: &mut dyn SurfaceProvider) -> Result<Self, SceneError> {
        Self::with_behavior(config, provider, BackgroundScene)
    }

    /// Creates a scene driven by `behavior`.
    ///
    /// # Errors
    ///
    /// [`SceneError::SurfaceUnavailable`] if the provider yields no context.
    pub fn with_behavior<B>(
        config: SceneConfig,
        provider: &mut dyn SurfaceProvider,
        behavior: B,
    ) -> Result<Self, SceneError>
    where
        B: SceneBehavior + 'static,
    {
        Self::with_boxed_behavior(config, provider, Box::new(behavior))
    }

    /// Like [`with_behavior`](Self::with_behavior) for an already boxed behavior.
    pub fn with_boxed_behavior(
        config: SceneConfig,
        provider: &mut dyn SurfaceProvider,
        behavior: Box<dyn SceneBehavior>,
    ) -> Result<Self, SceneError> {
        let SceneConfig { id, width, height, background, z_index } = config;

        let Some(surface) = provider.create_surface(width, height) else {
            error!("Could not create drawing context for scene {}", id);
            return Err(SceneError::SurfaceUnavailable { id, width, height });
        };

        debug!("Created scene {} ({}x{}, z-index {})", id, width, height, z_index);

        Ok(Self {
            id,
            surface,
            background,
            z_index,
            behavior,
        })
    }

    //--- Accessors --------------------------------------------------------

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn z_index(&self) -> i32 {
        self.z_index
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    pub fn surface(&self) -> &dyn DrawContext {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> &mut dyn DrawContext {
        self.surface.as_mut()
    }

    //--- Frame Hooks ------------------------------------------------------

    /// Runs the behavior's update hook.
    pub fn update(&mut self, dt: f64) {
        self.behavior.update(dt);
    }

    /// Runs the behavior's render hook against this scene's surface.
    pub fn render(&mut self) {
        let mut canvas = SceneCanvas {
            id: &self.id,
            background: self.background,
            ctx: self.surface.as_mut(),
        };
        self.behavior.render(&mut canvas);
    }

    /// Erases all drawn content. The background color is untouched.
    pub fn clear(&mut self) {
        self.surface.clear();
    }
}

impl fmt::Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scene")
            .field("id", &self.id)
            .field("width", &self.surface.width())
            .field("height", &self.surface.height())
            .field("background", &self.background)
            .field("z_index", &self.z_index)
            .finish()
    }
}

//=== SceneCanvas =========================================================

/// The view of a scene handed to [`SceneBehavior::render`].
pub struct SceneCanvas<'a> {
    id: &'a str,
    background: Color,
    ctx: &'a mut dyn DrawContext,
}

impl<'a> SceneCanvas<'a> {
    pub fn id(&self) -> &str {
        self.id
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn width(&self) -> u32 {
        self.ctx.width()
    }

    pub fn height(&self) -> u32 {
        self.ctx.height()
    }

    /// The scene's drawing context.
    pub fn context(&mut self) -> &mut dyn DrawContext {
        &mut *self.ctx
    }

    /// Replaces everything on the surface with a flood of the background
    /// color.
    pub fn fill_background(&mut self) {
        let background = self.background;
        let (w, h) = (self.ctx.width() as f32, self.ctx.height() as f32);
        self.ctx.clear();
        update_layer(&mut *self.ctx, |ctx| {
            ctx.set_fill_color(background);
            ctx.fill_rect(0.0, 0.0, w, h);
        });
    }

    /// Erases all drawn content back to transparent.
    pub fn clear(&mut self) {
        self.ctx.clear();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::surface::{DrawCommand, RecordingSurfaceProvider};
    use crate::core::test_support::{FailingProvider, SharedProvider};

    #[test]
    fn config_defaults() {
        let config = SceneConfig::new("bg", 800, 600);
        assert_eq!(config.background, Color::BLACK);
        assert_eq!(config.z_index, DEFAULT_Z_INDEX);
    }

    #[test]
    fn construction_takes_config_values() {
        let mut provider = RecordingSurfaceProvider::new();
        let scene = Scene::new(
            SceneConfig::new("ui", 320, 240)
                .with_background(Color::WHITE)
                .with_z_index(5),
            &mut provider,
        )
        .expect("scene");

        assert_eq!(scene.id(), "ui");
        assert_eq!((scene.width(), scene.height()), (320, 240));
        assert_eq!(scene.background(), Color::WHITE);
        assert_eq!(scene.z_index(), 5);
    }

    #[test]
    fn construction_fails_without_context() {
        let mut provider = FailingProvider;
        let err = Scene::new(SceneConfig::new("bg", 800, 600), &mut provider).unwrap_err();
        assert_eq!(
            err,
            SceneError::SurfaceUnavailable { id: "bg".into(), width: 800, height: 600 }
        );
    }

    #[test]
    fn default_render_floods_background() {
        let mut provider = SharedProvider::new();
        let background = Color::rgb(10, 20, 30);
        let mut scene = Scene::new(
            SceneConfig::new("bg", 64, 32).with_background(background),
            &mut provider,
        )
        .expect("scene");

        scene.update(0.016);
        scene.render();

        let surface = provider.surface(0);
        assert_eq!(
            surface.borrow().commands(),
            &[DrawCommand::FillRect { x: 0.0, y: 0.0, width: 64.0, height: 32.0, color: background }]
        );
        assert_eq!(surface.borrow().saved_depth(), 0, "Fill must restore drawing state");
        assert_eq!(surface.borrow().state().fill_color, Color::BLACK);
    }

    #[test]
    fn repeated_background_renders_keep_a_single_flood() {
        let mut provider = SharedProvider::new();
        let mut scene = Scene::with_behavior(
            SceneConfig::new("bg", 16, 16).with_background(Color::WHITE),
            &mut provider,
            BackgroundScene,
        )
        .expect("scene");

        scene.update(0.016);
        scene.render();
        scene.update(0.016);
        scene.render();

        let surface = provider.surface(0);
        assert_eq!(
            surface.borrow().commands(),
            &[DrawCommand::FillRect { x: 0.0, y: 0.0, width: 16.0, height: 16.0, color: Color::WHITE }],
            "Each flood replaces the previous frame"
        );
    }

    #[test]
    fn clear_erases_content_but_keeps_background() {
        let mut provider = SharedProvider::new();
        let mut scene = Scene::new(
            SceneConfig::new("hud", 10, 10).with_background(Color::WHITE),
            &mut provider,
        )
        .expect("scene");

        scene.render();
        scene.clear();

        assert!(provider.surface(0).borrow().commands().is_empty());
        assert_eq!(scene.background(), Color::WHITE);
    }

    #[test]
    fn debug_shows_identity_and_stacking() {
        let mut provider = RecordingSurfaceProvider::new();
        let scene = Scene::new(SceneConfig::new("bg", 8, 8).with_z_index(-1), &mut provider)
            .expect("scene");
        let debug = format!("{:?}", scene);
        assert!(debug.contains("\"bg\""));
        assert!(debug.contains("z_index: -1"));
    }
}
