//=========================================================================
// Basic Demo
//
// Opens a window and runs three scene layers:
// - a white background
// - a box sliding across the screen
// - the frame-rate readout
//
// The default surfaces record draw commands and nothing is presented,
// so the window itself stays blank. Pass a rasterizing provider through
// `EngineBuilder::with_surface_provider` to see the layers.
//
// Press Escape to pause and resume. Run with `RUST_LOG=debug` to see
// frame state transitions.
//
//=========================================================================

use aetheric_frames::prelude::*;

//=== SlidingBox ==========================================================

/// A square that moves right at a constant speed and wraps around.
struct SlidingBox {
    x: f32,
    speed: f32,
}

impl SceneBehavior for SlidingBox {
    fn update(&mut self, dt: f64) {
        self.x += self.speed * dt as f32;
    }

    fn render(&mut self, canvas: &mut SceneCanvas<'_>) {
        canvas.clear();

        let width = canvas.width() as f32;
        let y = canvas.height() as f32 / 2.0 - 25.0;
        if self.x > width {
            self.x = -50.0;
        }
        let x = self.x;

        update_layer(canvas.context(), |ctx| {
            ctx.set_fill_color(Color::rgb(40, 120, 220));
            ctx.fill_rect(x, y, 50.0, 50.0);

            ctx.set_stroke_color(Color::BLACK);
            ctx.set_line_width(2.0);
            ctx.stroke_line((0.0, y + 52.0), (width, y + 52.0));
        });
    }
}

//=== Main ================================================================

fn main() -> Result<(), EngineError> {
    init_logging(LoggingConfig::default());

    EngineBuilder::new()
        .with_title("Aetheric Frames Demo")
        .with_window_size(800, 600)
        .build()
        .init(|systems| {
            let background = systems.scene_config("background").with_background(Color::WHITE);
            systems.create_scene(background, BackgroundScene)?;

            let actors = systems
                .scene_config("actors")
                .with_background(Color::TRANSPARENT)
                .with_z_index(1);
            systems.create_scene(actors, SlidingBox { x: 0.0, speed: 120.0 })?;

            let fps = systems
                .scene_config("fps")
                .with_background(Color::TRANSPARENT)
                .with_z_index(10);
            systems.create_scene(fps, FpsOverlay::new())?;

            for id in ["background", "actors", "fps"] {
                systems.scene_manager.activate_scene(id)?;
            }
            Ok(())
        })?
        .run()
}
