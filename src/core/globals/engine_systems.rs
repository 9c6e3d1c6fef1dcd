//=========================================================================
// Engine Systems
//=========================================================================
//
// Container for the systems application setup code works with.
//
// Handed to `Engine::init` so scenes can be created, registered and
// activated before the first frame, and owned by the scheduler after.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::error::SceneError;
use crate::core::scene::{Scene, SceneBehavior, SceneConfig, SceneManager};
use crate::core::surface::{SurfaceProvider, WindowMetrics};

//=== EngineSystems =======================================================

/// Scene manager plus the collaborators scenes are built from.
///
/// # Examples
///
/// ```rust
/// use aetheric_frames::core::globals::EngineSystems;
/// use aetheric_frames::core::scene::{BackgroundScene, FpsOverlay};
/// use aetheric_frames::core::surface::{Color, RecordingSurfaceProvider, WindowMetrics};
///
/// let mut systems = EngineSystems::new(
///     Box::new(RecordingSurfaceProvider::new()),
///     WindowMetrics::new(800, 600),
/// );
///
/// let bg = systems.scene_config("bg").with_background(Color::WHITE);
/// systems.create_scene(bg, BackgroundScene).unwrap();
///
/// let hud = systems.scene_config("fps").with_background(Color::TRANSPARENT).with_z_index(10);
/// systems.create_scene(hud, FpsOverlay::new()).unwrap();
///
/// systems.scene_manager.activate_scene("bg").unwrap();
/// systems.scene_manager.activate_scene("fps").unwrap();
/// assert_eq!(systems.scene_manager.render_order(), vec!["bg", "fps"]);
/// ```
pub struct EngineSystems {
    /// Registered and active scenes.
    pub scene_manager: SceneManager,

    surfaces: Box<dyn SurfaceProvider>,
    window: WindowMetrics,
}

impl EngineSystems {
    pub fn new(surfaces: Box<dyn SurfaceProvider>, window: WindowMetrics) -> Self {
        Self {
            scene_manager: SceneManager::new(),
            surfaces,
            window,
        }
    }

    //--- Scene Creation ---------------------------------------------------

    /// A scene config sized to the current window.
    pub fn scene_config(&self, id: impl Into<String>) -> SceneConfig {
        SceneConfig::new(id, self.window.width(), self.window.height())
    }

    /// Constructs a scene and registers it.
    ///
    /// Nothing is registered if construction fails.
    pub fn create_scene<B>(&mut self, config: SceneConfig, behavior: B) -> Result<(), SceneError>
    where
        B: SceneBehavior + 'static,
    {
        let scene = Scene::with_behavior(config, self.surfaces.as_mut(), behavior)?;
        self.scene_manager.add_scene(scene);
        Ok(())
    }

    //--- Accessors --------------------------------------------------------

    pub fn window(&self) -> &WindowMetrics {
        &self.window
    }

    pub fn surfaces_mut(&mut self) -> &mut dyn SurfaceProvider {
        self.surfaces.as_mut()
    }

    pub(crate) fn window_mut(&mut self) -> &mut WindowMetrics {
        &mut self.window
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
