//=========================================================================
// Overlays
//=========================================================================
//
// Fixed visuals drawn directly onto a context:
// - the pause overlay shown instead of the simulation while paused
// - the frame-rate readout
//
// Both draw inside `update_layer`, leaving the context's drawing state
// as they found it, so repeating them every frame is safe.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::surface::{update_layer, Color, DrawContext, TextAlign, TextBaseline};

//=== Pause Overlay =======================================================

pub const PAUSE_TITLE: &str = "Game Paused";
pub const PAUSE_HINT: &str = "Press 'Esc' to continue";

const PAUSE_SHADE: Color = Color::rgba(0, 0, 0, 0.7);

/// Dims the whole surface and draws the pause caption centred on it.
pub fn draw_pause_overlay(ctx: &mut dyn DrawContext) {
    let (w, h) = (ctx.width() as f32, ctx.height() as f32);

    update_layer(ctx, |ctx| {
        ctx.set_fill_color(PAUSE_SHADE);
        ctx.fill_rect(0.0, 0.0, w, h);

        ctx.set_fill_color(Color::WHITE);
        ctx.set_text_align(TextAlign::Center);
        ctx.set_text_baseline(TextBaseline::Middle);

        ctx.set_font("bold 48px Arial");
        ctx.fill_text(PAUSE_TITLE, w / 2.0, h / 2.0 - 20.0);

        ctx.set_font("italic 24px Arial");
        ctx.fill_text(PAUSE_HINT, w / 2.0, h / 2.0 + 40.0);
    });
}

//=== FPS Readout =========================================================

/// Formats the instantaneous frame rate for `dt` seconds.
///
/// Returns `None` for `dt <= 0`, where no rate can be computed.
pub fn fps_label(dt: f64) -> Option<String> {
    if dt <= 0.0 || !dt.is_finite() {
        return None;
    }
    Some(format!("FPS: {}", (1.0 / dt).round()))
}

/// Draws the frame-rate readout in the top-right corner.
pub fn draw_fps(ctx: &mut dyn DrawContext, dt: f64) {
    let Some(label) = fps_label(dt) else {
        return;
    };
    let x = ctx.width() as f32 - 10.0;

    update_layer(ctx, |ctx| {
        ctx.set_font("20px Arial");
        ctx.set_fill_color(Color::BLACK);
        ctx.set_text_align(TextAlign::Right);
        ctx.set_text_baseline(TextBaseline::Top);
        ctx.fill_text(&label, x, 10.0);
    });
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::surface::{DrawCommand, RecordingSurface};

    #[test]
    fn pause_overlay_layout() {
        let mut surface = RecordingSurface::new(800, 600);
        draw_pause_overlay(&mut surface);

        let commands = surface.commands();
        assert_eq!(commands.len(), 3);
        assert_eq!(
            commands[0],
            DrawCommand::FillRect { x: 0.0, y: 0.0, width: 800.0, height: 600.0, color: PAUSE_SHADE }
        );
        assert_eq!(
            commands[1],
            DrawCommand::FillText {
                text: PAUSE_TITLE.into(),
                x: 400.0,
                y: 280.0,
                font: "bold 48px Arial".into(),
                align: TextAlign::Center,
                baseline: TextBaseline::Middle,
                color: Color::WHITE,
            }
        );
        match &commands[2] {
            DrawCommand::FillText { text, y, font, .. } => {
                assert_eq!(text, PAUSE_HINT);
                assert_eq!(*y, 340.0);
                assert_eq!(font, "italic 24px Arial");
            }
            other => panic!("Expected hint text, got {:?}", other),
        }
    }

    #[test]
    fn pause_overlay_restores_state() {
        let mut surface = RecordingSurface::new(100, 100);
        draw_pause_overlay(&mut surface);
        draw_pause_overlay(&mut surface);
        assert_eq!(surface.saved_depth(), 0);
        assert_eq!(surface.state().fill_color, Color::BLACK);
        assert_eq!(surface.commands().len(), 6);
    }

    #[test]
    fn fps_label_rounds() {
        assert_eq!(fps_label(0.025).as_deref(), Some("FPS: 40"));
        assert_eq!(fps_label(1.0 / 60.0).as_deref(), Some("FPS: 60"));
    }

    #[test]
    fn fps_label_rejects_degenerate_delta() {
        assert!(fps_label(0.0).is_none());
        assert!(fps_label(-0.5).is_none());
        assert!(fps_label(f64::NAN).is_none());
    }

    #[test]
    fn draw_fps_anchors_top_right() {
        let mut surface = RecordingSurface::new(300, 200);
        draw_fps(&mut surface, 0.02);

        assert_eq!(
            surface.commands(),
            &[DrawCommand::FillText {
                text: "FPS: 50".into(),
                x: 290.0,
                y: 10.0,
                font: "20px Arial".into(),
                align: TextAlign::Right,
                baseline: TextBaseline::Top,
                color: Color::BLACK,
            }]
        );
    }

    #[test]
    fn draw_fps_skips_zero_delta() {
        let mut surface = RecordingSurface::new(300, 200);
        draw_fps(&mut surface, 0.0);
        assert!(surface.commands().is_empty());
    }
}
