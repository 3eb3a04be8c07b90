//! Frame composition. Turns a [`GameState`] into drawing primitives on any
//! [`Canvas`]; the backend decides how rectangles and text become pixels
//! or terminal cells.

use super::constants::*;
use super::game_state::{GamePhase, GameState};
use super::obstacle::{Obstacle, ObstacleKind};
use super::player::Player;
use super::ports::{Canvas, Rgba, TextAlign, TextStyle};

pub const BACKGROUND: Rgba = Rgba::rgb(247, 247, 247);
pub const INK: Rgba = Rgba::rgb(51, 51, 51);
pub const PLAYER_COLOR: Rgba = Rgba::rgb(85, 85, 85);
pub const CACTUS_COLOR: Rgba = Rgba::rgb(42, 157, 143);
pub const FLYER_COLOR: Rgba = Rgba::rgb(231, 111, 81);
pub const DIM_OVERLAY: Rgba = Rgba::rgba(0, 0, 0, 153);
pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

fn style(color: Rgba, size: f64, bold: bool) -> TextStyle {
    TextStyle {
        color,
        size,
        bold,
        align: TextAlign::Center,
    }
}

/// Draw the frame appropriate for the current phase.
pub fn draw<C: Canvas + ?Sized>(state: &GameState, canvas: &mut C) {
    match state.phase {
        GamePhase::NotStarted => draw_instructions(state, canvas),
        GamePhase::Running => draw_playfield(state, canvas),
        GamePhase::GameOver => {
            // Last frame of the run, dimmed, with the result on top
            draw_playfield(state, canvas);
            draw_game_over(state, canvas);
        }
    }
}

/// Ground, player, obstacles and the running score.
pub fn draw_playfield<C: Canvas + ?Sized>(state: &GameState, canvas: &mut C) {
    canvas.clear();
    draw_ground(canvas);
    draw_player(&state.player, state.ticks, canvas);
    for obstacle in &state.obstacles {
        draw_obstacle(obstacle, state.ticks, canvas);
    }
    canvas.text(
        PLAYFIELD_WIDTH - 20.0,
        30.0,
        &format!("Score: {}", state.score),
        TextStyle {
            align: TextAlign::Right,
            ..style(INK, 20.0, false)
        },
    );
}

fn draw_ground<C: Canvas + ?Sized>(canvas: &mut C) {
    canvas.line(0.0, GROUND_Y, PLAYFIELD_WIDTH, GROUND_Y, INK);
}

/// Pixel-art runner. Standing and ducking have their own silhouettes; legs
/// alternate while running and tuck in while airborne.
pub fn draw_player<C: Canvas + ?Sized>(player: &Player, tick: u64, canvas: &mut C) {
    let (x, y) = (player.x, player.y);
    let legs = Player::leg_frame(tick);
    let mut rect = |dx: f64, dy: f64, w: f64, h: f64| {
        canvas.fill_rect(x + dx, y + dy, w, h, PLAYER_COLOR);
    };

    if player.is_ducking {
        rect(0.0, 15.0, 15.0, 5.0);
        rect(15.0, 10.0, 5.0, 10.0);
        rect(20.0, 5.0, 25.0, 5.0);
        rect(45.0, 0.0, 10.0, 10.0);
        if legs == 0 {
            rect(20.0, 20.0, 10.0, 5.0);
            rect(35.0, 20.0, 10.0, 5.0);
        } else {
            rect(15.0, 20.0, 10.0, 5.0);
            rect(30.0, 20.0, 10.0, 5.0);
        }
        return;
    }

    rect(0.0, 30.0, 15.0, 5.0);
    rect(5.0, 35.0, 10.0, 10.0);
    rect(15.0, 20.0, 5.0, 15.0);
    rect(20.0, 10.0, 15.0, 20.0);
    rect(35.0, 0.0, 10.0, 15.0);
    if player.is_jumping {
        rect(20.0, 30.0, 5.0, 10.0);
        rect(30.0, 30.0, 5.0, 10.0);
    } else if legs == 0 {
        rect(20.0, 30.0, 5.0, 15.0);
        rect(30.0, 30.0, 5.0, 5.0);
    } else {
        rect(20.0, 30.0, 5.0, 5.0);
        rect(30.0, 30.0, 5.0, 15.0);
    }
}

pub fn draw_obstacle<C: Canvas + ?Sized>(obstacle: &Obstacle, tick: u64, canvas: &mut C) {
    let Obstacle {
        x,
        y,
        width,
        height,
        ..
    } = *obstacle;
    match obstacle.kind {
        ObstacleKind::Ground => {
            canvas.fill_rect(x, y, width, height, CACTUS_COLOR);
            // Arms
            canvas.fill_rect(x - 5.0, y + 10.0, 5.0, height / 2.0, CACTUS_COLOR);
            canvas.fill_rect(x + width, y + 15.0, 5.0, height / 2.0, CACTUS_COLOR);
        }
        ObstacleKind::Flying => {
            canvas.fill_rect(x + 10.0, y + 10.0, width - 20.0, height - 10.0, FLYER_COLOR);
            let wing_y = if Obstacle::wing_frame(tick) == 0 {
                y
            } else {
                y + 5.0
            };
            canvas.fill_rect(x, wing_y, width, 10.0, FLYER_COLOR);
        }
    }
}

/// Title screen: the idle runner plus controls.
pub fn draw_instructions<C: Canvas + ?Sized>(state: &GameState, canvas: &mut C) {
    canvas.clear();
    draw_ground(canvas);
    draw_player(&state.player, 0, canvas);

    let cx = PLAYFIELD_WIDTH / 2.0;
    let cy = PLAYFIELD_HEIGHT / 2.0;
    canvas.text(cx, cy - 60.0, "How to Play", style(INK, 24.0, true));
    canvas.text(cx, cy - 20.0, "Space / Up  ->  Jump", style(INK, 18.0, false));
    canvas.text(cx, cy + 10.0, "Down  ->  Duck", style(INK, 18.0, false));
    canvas.text(
        cx,
        cy + 60.0,
        "Press Space to Start",
        style(FLYER_COLOR, 20.0, true),
    );
}

/// Dim the playfield and show the final score.
pub fn draw_game_over<C: Canvas + ?Sized>(state: &GameState, canvas: &mut C) {
    canvas.fill_rect(0.0, 0.0, PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT, DIM_OVERLAY);

    let cx = PLAYFIELD_WIDTH / 2.0;
    let cy = PLAYFIELD_HEIGHT / 2.0;
    canvas.text(cx, cy - 20.0, "Game Over", style(WHITE, 50.0, true));
    canvas.text(
        cx,
        cy + 20.0,
        &format!("Final Score: {}   Best: {}", state.score, state.best_score),
        style(WHITE, 20.0, false),
    );
    canvas.text(
        cx,
        cy + 60.0,
        "Press Space to Restart",
        style(WHITE, 16.0, false),
    );
}
