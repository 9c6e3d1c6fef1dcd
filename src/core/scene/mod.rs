//=========================================================================
// Scene System
//=========================================================================
//
// Independently addressable drawing surfaces composed by stacking order.
//
// Architecture:
//   SceneManager
//     ├─ scenes: HashMap<String, (Scene, registration order)>
//     └─ active: HashSet<String>
//
// Flow:
//   update()/render() → render_order() → sync size → SceneBehavior hook
//
// Per-purpose behavior (background, overlay, game layer) is supplied as
// a `SceneBehavior` trait object; the `Scene` owns the surface and the
// stacking metadata.
//
//=========================================================================

//=== Module Declarations =================================================

mod builtin;
mod instance;
mod scene_manager;

//=== Public API ==========================================================

pub use builtin::{BackgroundScene, FpsOverlay};
pub use instance::{Scene, SceneCanvas, SceneConfig, DEFAULT_Z_INDEX};
pub use scene_manager::SceneManager;

//=== SceneBehavior Trait =================================================

/// Per-frame hooks of a concrete scene.
///
/// Both hooks have defaults: `update` does nothing and `render` floods the
/// surface with the scene's background color.
///
/// ```rust
/// use aetheric_frames::core::scene::{SceneBehavior, SceneCanvas};
///
/// struct Spinner { angle: f64 }
///
/// impl SceneBehavior for Spinner {
///     fn update(&mut self, dt: f64) {
///         self.angle += dt * std::f64::consts::TAU;
///     }
///
///     fn render(&mut self, canvas: &mut SceneCanvas<'_>) {
///         canvas.fill_background();
///         let (w, h) = (canvas.width() as f32, canvas.height() as f32);
///         let (s, c) = (self.angle as f32).sin_cos();
///         canvas.context().stroke_line((w / 2.0, h / 2.0), (w / 2.0 + 40.0 * c, h / 2.0 + 40.0 * s));
///     }
/// }
/// ```
pub trait SceneBehavior {
    /// Advances the scene by `dt` seconds. The frame loop only calls this
    /// with `dt > 0`.
    fn update(&mut self, _dt: f64) {}

    /// Draws the scene onto its surface.
    fn render(&mut self, canvas: &mut SceneCanvas<'_>) {
        canvas.fill_background();
    }
}
