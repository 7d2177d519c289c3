//! Pong simulation, independent of timers and drawing.
//!
//! The screen owns a [`PongGame`] and calls [`PongGame::step`] once per
//! consumed game tick. All positions are integer pixels; the ball moves by
//! its integer velocity each step.
//!
//! # Step Order
//!
//! 1. Move the ball.
//! 2. Bounce off the top and bottom walls (velocity inverted, position clamped).
//! 3. Player paddle hit: ball goes right, vertical speed from the hit position.
//! 4. AI paddle hit: ball goes left, vertical speed from the hit position.
//! 5. Scoring: past the left edge the AI scores, past the right edge the
//!    player scores; the ball is served again from the center.
//! 6. The AI paddle follows the ball center outside a dead zone.

#[cfg(not(test))]
use micromath::F32Ext;
use rand::Rng;

use crate::config::game::{
    AI_DEAD_ZONE,
    AI_SPEED,
    BALL_SIZE,
    PADDLE_HEIGHT,
    PADDLE_SPEED,
    PADDLE_WIDTH,
    SERVE_VX,
    SERVE_VY,
};
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Court width in pixels.
pub const COURT_WIDTH: i32 = SCREEN_WIDTH as i32;

/// Court height in pixels.
pub const COURT_HEIGHT: i32 = SCREEN_HEIGHT as i32;

/// Lowest valid paddle top edge.
const PADDLE_MAX_Y: i32 = COURT_HEIGHT - PADDLE_HEIGHT;

/// Lowest valid ball top edge.
const BALL_MAX_Y: i32 = COURT_HEIGHT - BALL_SIZE;

/// Who scored in a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scored {
    Player,
    Ai,
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PongGame {
    player_y: i32,
    ai_y: i32,
    ball_x: i32,
    ball_y: i32,
    ball_vx: i32,
    ball_vy: i32,
    player_score: u32,
    ai_score: u32,
    paused: bool,
}

impl PongGame {
    /// New game with the ball served in a random direction.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut game = Self {
            player_y: 0,
            ai_y: 0,
            ball_x: 0,
            ball_y: 0,
            ball_vx: 0,
            ball_vy: 0,
            player_score: 0,
            ai_score: 0,
            paused: false,
        };
        game.reset(rng);
        game
    }

    /// Center both paddles, zero the scores, unpause and serve.
    pub fn reset<R: Rng>(
        &mut self,
        rng: &mut R,
    ) {
        self.player_y = PADDLE_MAX_Y / 2;
        self.ai_y = PADDLE_MAX_Y / 2;
        self.player_score = 0;
        self.ai_score = 0;
        self.paused = false;
        self.serve(rng);
    }

    /// Put the ball in the center with a random velocity.
    pub fn serve<R: Rng>(
        &mut self,
        rng: &mut R,
    ) {
        self.ball_x = COURT_WIDTH / 2;
        self.ball_y = COURT_HEIGHT / 2;
        self.ball_vx = SERVE_VX[rng.gen_range(0..SERVE_VX.len())];
        self.ball_vy = SERVE_VY[rng.gen_range(0..SERVE_VY.len())];
    }

    /// Advance the simulation by one tick.
    pub fn step<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> Option<Scored> {
        self.ball_x += self.ball_vx;
        self.ball_y += self.ball_vy;

        if self.ball_y <= 0 || self.ball_y >= BALL_MAX_Y {
            self.ball_vy = -self.ball_vy;
            self.ball_y = self.ball_y.clamp(0, BALL_MAX_Y);
        }

        if self.ball_x <= PADDLE_WIDTH && self.overlaps(self.player_y) {
            self.ball_vx = self.ball_vx.abs();
            self.ball_vy = english(self.ball_y, self.player_y);
        }

        if self.ball_x >= COURT_WIDTH - PADDLE_WIDTH - BALL_SIZE && self.overlaps(self.ai_y) {
            self.ball_vx = -self.ball_vx.abs();
            self.ball_vy = english(self.ball_y, self.ai_y);
        }

        let scored = if self.ball_x < 0 {
            self.ai_score += 1;
            Some(Scored::Ai)
        } else if self.ball_x > COURT_WIDTH {
            self.player_score += 1;
            Some(Scored::Player)
        } else {
            None
        };
        if scored.is_some() {
            self.serve(rng);
        }

        self.move_ai();
        scored
    }

    /// Move the player paddle up. Ignored while paused.
    pub fn player_up(&mut self) {
        if !self.paused {
            self.player_y = (self.player_y - PADDLE_SPEED).max(0);
        }
    }

    /// Move the player paddle down. Ignored while paused.
    pub fn player_down(&mut self) {
        if !self.paused {
            self.player_y = (self.player_y + PADDLE_SPEED).min(PADDLE_MAX_Y);
        }
    }

    /// Flip the pause state and return the new one.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    #[inline]
    pub const fn is_paused(&self) -> bool { self.paused }

    #[inline]
    pub const fn player_y(&self) -> i32 { self.player_y }

    #[inline]
    pub const fn ai_y(&self) -> i32 { self.ai_y }

    /// Ball top-left corner.
    #[inline]
    pub const fn ball(&self) -> (i32, i32) { (self.ball_x, self.ball_y) }

    /// Ball velocity in pixels per step.
    #[inline]
    pub const fn velocity(&self) -> (i32, i32) { (self.ball_vx, self.ball_vy) }

    /// `(player, ai)` scores.
    #[inline]
    pub const fn scores(&self) -> (u32, u32) { (self.player_score, self.ai_score) }

    /// Whether the ball's vertical extent touches a paddle starting at `paddle_y`.
    fn overlaps(
        &self,
        paddle_y: i32,
    ) -> bool {
        paddle_y <= self.ball_y + BALL_SIZE && self.ball_y <= paddle_y + PADDLE_HEIGHT
    }

    fn move_ai(&mut self) {
        let ball_center = self.ball_y + BALL_SIZE / 2;
        let ai_center = self.ai_y + PADDLE_HEIGHT / 2;
        if ball_center < ai_center - AI_DEAD_ZONE {
            self.ai_y = (self.ai_y - AI_SPEED).max(0);
        } else if ball_center > ai_center + AI_DEAD_ZONE {
            self.ai_y = (self.ai_y + AI_SPEED).min(PADDLE_MAX_Y);
        }
    }
}

/// Vertical speed after a paddle hit: -2 at the paddle's top edge, +2 at its
/// bottom edge. A ball overlapping past either end counts as an edge hit.
pub fn english(
    ball_y: i32,
    paddle_y: i32,
) -> i32 {
    let hit_fraction = ((ball_y - paddle_y) as f32 / PADDLE_HEIGHT as f32).clamp(0.0, 1.0);
    ((hit_fraction - 0.5) * 4.0).round() as i32
}
