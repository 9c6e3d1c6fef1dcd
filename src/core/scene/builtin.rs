//=========================================================================
// Built-in Scenes
//=========================================================================
//
// Ready-made behaviors:
// - `BackgroundScene`: flat background fill (the default behavior)
// - `FpsOverlay`: always-on-top diagnostics layer showing frame rate
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{SceneBehavior, SceneCanvas};
use crate::core::overlay::draw_fps;

//=== BackgroundScene =====================================================

/// Fills its surface with the scene background every frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct BackgroundScene;

impl SceneBehavior for BackgroundScene {}

//=== FpsOverlay ==========================================================

/// Diagnostics layer that redraws the frame-rate readout each frame.
///
/// The surface is cleared before every redraw, so give the scene a
/// transparent background and a high z-index.
#[derive(Debug, Clone, Copy, Default)]
pub struct FpsOverlay {
    last_dt: f64,
}

impl FpsOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta seen by the most recent update, in seconds.
    pub fn last_dt(&self) -> f64 {
        self.last_dt
    }
}

impl SceneBehavior for FpsOverlay {
    fn update(&mut self, dt: f64) {
        self.last_dt = dt;
    }

    fn render(&mut self, canvas: &mut SceneCanvas<'_>) {
        canvas.clear();
        draw_fps(canvas.context(), self.last_dt);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scene::{Scene, SceneConfig};
    use crate::core::surface::{Color, DrawCommand};
    use crate::core::test_support::SharedProvider;

    #[test]
    fn fps_overlay_redraws_from_scratch() {
        let mut provider = SharedProvider::new();
        let mut scene = Scene::with_behavior(
            SceneConfig::new("fps", 200, 100)
                .with_background(Color::TRANSPARENT)
                .with_z_index(100),
            &mut provider,
            FpsOverlay::new(),
        )
        .expect("scene");

        scene.update(0.02);
        scene.render();
        scene.update(0.01);
        scene.render();

        let surface = provider.surface(0);
        let surface = surface.borrow();
        let texts: Vec<_> = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["FPS: 100"], "Only the latest readout survives");
    }

    #[test]
    fn fps_overlay_without_update_draws_nothing() {
        let mut provider = SharedProvider::new();
        let mut scene =
            Scene::with_behavior(SceneConfig::new("fps", 10, 10), &mut provider, FpsOverlay::new())
                .expect("scene");

        scene.render();
        assert!(provider.surface(0).borrow().commands().is_empty());
    }
}
