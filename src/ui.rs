//! Scene composition
//!
//! Pure mapping from a [`GameState`] to draw calls on the platform traits.
//! Layout mirrors the arena: four wall slabs framing the window, the timer
//! gauge top-left, the directive swatch top-right, score centered up top.

use crate::consts::*;
use crate::platform::{Canvas, Rect, TextPainter};
use crate::sim::color::{self, Color};
use crate::sim::round::Wall;
use crate::sim::state::{GamePhase, GameState};

/// Timer gauge, top-left
pub const GAUGE_RECT: Rect = Rect::new(20, 20, GAUGE_WIDTH, GAUGE_HEIGHT);

/// Directive color swatch, top-right
pub const DIRECTIVE_RECT: Rect = Rect::new(WINDOW_WIDTH - 100, 20, 80, 80);

/// Score anchor (centered), top middle
pub const SCORE_POS: (i32, i32) = (WINDOW_WIDTH / 2, 30);

/// Slab covering one arena wall.
pub fn wall_rect(wall: Wall) -> Rect {
    match wall {
        Wall::Top => Rect::new(0, 0, WINDOW_WIDTH, WALL_THICKNESS),
        Wall::Bottom => Rect::new(0, WINDOW_HEIGHT - WALL_THICKNESS, WINDOW_WIDTH, WALL_THICKNESS),
        Wall::Left => Rect::new(0, 0, WALL_THICKNESS, WINDOW_HEIGHT),
        Wall::Right => Rect::new(WINDOW_WIDTH - WALL_THICKNESS, 0, WALL_THICKNESS, WINDOW_HEIGHT),
    }
}

/// Current gauge fill width in pixels.
pub fn gauge_fill_width(fraction: f32) -> i32 {
    (GAUGE_WIDTH as f32 * fraction) as i32
}

/// Gauge fill color: steady green above half width, blinking red/green below.
fn gauge_color(state: &GameState) -> Color {
    if state.gauge_low() && state.blink.on {
        color::RED
    } else {
        color::GREEN
    }
}

/// Draw a string centered on `(cx, cy)`. Skipped entirely when the painter
/// cannot measure it (e.g. no font); state is never affected.
fn draw_text_centered(
    text: &mut impl TextPainter,
    s: &str,
    color: Color,
    cx: i32,
    cy: i32,
) {
    match text.measure(s) {
        Some((w, h)) => text.draw(s, color, cx - w / 2, cy - h / 2),
        None => log::trace!("text unavailable, skipping {s:?}"),
    }
}

/// Compose one frame for the current state and present it.
pub fn draw_frame(state: &GameState, canvas: &mut impl Canvas, text: &mut impl TextPainter) {
    let (cx, cy) = (WINDOW_WIDTH / 2, WINDOW_HEIGHT / 2);

    // The countdown ritual is its own screen: just the step label on black
    if state.phase == GamePhase::Countdown {
        canvas.clear(color::BLACK);
        let label_color = if state.countdown_step == 0 {
            color::GREEN
        } else {
            color::WHITE
        };
        draw_text_centered(text, state.countdown_label(), label_color, cx, cy);
        canvas.present();
        return;
    }

    canvas.clear(color::BLACK);

    for wall in Wall::ALL {
        canvas.fill_rect(wall_rect(wall), state.round.wall_color(wall));
    }

    // Gauge: black backing, proportional fill, white frame
    canvas.fill_rect(GAUGE_RECT, color::BLACK);
    let fill = Rect::new(
        GAUGE_RECT.x,
        GAUGE_RECT.y,
        gauge_fill_width(state.gauge_fraction()),
        GAUGE_RECT.h,
    );
    canvas.fill_rect(fill, gauge_color(state));
    canvas.outline_rect(GAUGE_RECT, color::WHITE);

    canvas.fill_rect(DIRECTIVE_RECT, state.round.directive);
    canvas.outline_rect(DIRECTIVE_RECT, color::WHITE);

    draw_text_centered(
        text,
        &format!("Score: {}", state.score),
        color::WHITE,
        SCORE_POS.0,
        SCORE_POS.1,
    );

    canvas.fill_circle(
        state.player.pos.x as i32,
        state.player.pos.y as i32,
        PLAYER_RADIUS,
        color::WHITE,
    );

    if state.phase == GamePhase::GameOver {
        draw_text_centered(text, "GAME OVER", color::RED, cx, cy);
        draw_text_centered(
            text,
            &format!("Final Score: {}", state.score),
            color::WHITE,
            cx,
            cy + 50,
        );
    }

    canvas.present();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::headless::{DrawOp, NullText, RecordingCanvas, RecordingText};
    use crate::sim::color::{BLACK, BLUE, GREEN, RED, WHITE, YELLOW};
    use crate::sim::round::Round;

    fn playing_state() -> GameState {
        let mut state = GameState::new(5, 0);
        state.phase = GamePhase::Playing;
        state.round = Round {
            directive: BLUE,
            walls: [BLUE, RED, YELLOW, GREEN],
        };
        state
    }

    #[test]
    fn test_walls_drawn_with_round_colors() {
        let state = playing_state();
        let mut canvas = RecordingCanvas::new();
        let mut text = RecordingText::new();
        draw_frame(&state, &mut canvas, &mut text);

        let rects = canvas.fill_rects();
        for wall in Wall::ALL {
            assert!(
                rects.contains(&(wall_rect(wall), state.round.wall_color(wall))),
                "missing slab for {wall:?}"
            );
        }
        assert!(rects.contains(&(DIRECTIVE_RECT, BLUE)));
        assert_eq!(canvas.ops.last(), Some(&DrawOp::Present));
    }

    #[test]
    fn test_gauge_fill_scales_with_time_left() {
        let mut state = playing_state();
        state.time_left = state.schedule.max_time();
        let mut canvas = RecordingCanvas::new();
        draw_frame(&state, &mut canvas, &mut RecordingText::new());
        let full = Rect::new(GAUGE_RECT.x, GAUGE_RECT.y, GAUGE_WIDTH, GAUGE_RECT.h);
        assert!(canvas.fill_rects().contains(&(full, GREEN)));

        state.time_left = state.schedule.max_time() / 2.0;
        let mut canvas = RecordingCanvas::new();
        draw_frame(&state, &mut canvas, &mut RecordingText::new());
        let half = Rect::new(GAUGE_RECT.x, GAUGE_RECT.y, GAUGE_WIDTH / 2, GAUGE_RECT.h);
        let rects = canvas.fill_rects();
        assert!(rects.contains(&(half, GREEN)) || rects.contains(&(half, RED)));
    }

    #[test]
    fn test_gauge_blinks_red_when_low() {
        let mut state = playing_state();
        state.time_left = state.schedule.max_time() / 4.0;
        state.blink.on = true;
        let mut canvas = RecordingCanvas::new();
        draw_frame(&state, &mut canvas, &mut RecordingText::new());

        let fill_w = gauge_fill_width(state.gauge_fraction());
        let fill = Rect::new(GAUGE_RECT.x, GAUGE_RECT.y, fill_w, GAUGE_RECT.h);
        assert!(canvas.fill_rects().contains(&(fill, RED)));
    }

    #[test]
    fn test_countdown_screen_is_label_only() {
        let state = GameState::new(5, 0);
        let mut canvas = RecordingCanvas::new();
        let mut text = RecordingText::new();
        draw_frame(&state, &mut canvas, &mut text);

        assert_eq!(canvas.ops.first(), Some(&DrawOp::Clear(BLACK)));
        assert_eq!(canvas.ops.last(), Some(&DrawOp::Present));
        assert!(canvas.fill_rects().is_empty());
        assert_eq!(text.drawn.len(), 1);
        assert_eq!(text.drawn[0].0, "3");
        assert_eq!(text.drawn[0].1, WHITE);
    }

    #[test]
    fn test_game_over_overlay() {
        let mut state = playing_state();
        state.enter_game_over(1000);
        state.score = 7;
        let mut canvas = RecordingCanvas::new();
        let mut text = RecordingText::new();
        draw_frame(&state, &mut canvas, &mut text);

        let labels: Vec<&str> = text.drawn.iter().map(|d| d.0.as_str()).collect();
        assert!(labels.contains(&"GAME OVER"));
        assert!(labels.contains(&"Final Score: 7"));
    }

    #[test]
    fn test_missing_font_skips_text_only() {
        let state = playing_state();
        let mut canvas = RecordingCanvas::new();
        draw_frame(&state, &mut canvas, &mut NullText);

        // Scene still complete apart from text: walls, gauge, swatch, player
        assert!(canvas.fill_rects().len() >= 7);
        assert_eq!(canvas.ops.last(), Some(&DrawOp::Present));
    }

    #[test]
    fn test_score_text_is_centered() {
        let mut state = playing_state();
        state.score = 3;
        let mut canvas = RecordingCanvas::new();
        let mut text = RecordingText::new();
        draw_frame(&state, &mut canvas, &mut text);

        let (s, _, x, y) = text.drawn[0].clone();
        assert_eq!(s, "Score: 3");
        let w = s.len() as i32 * RecordingText::GLYPH_W;
        assert_eq!(x, SCORE_POS.0 - w / 2);
        assert_eq!(y, SCORE_POS.1 - RecordingText::GLYPH_H / 2);
    }
}
