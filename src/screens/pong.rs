//! Pong screen: drives [`PongGame`] from the game tick and draws it.
//!
//! The 16 ms timer only raises the tick flag. `update` consumes it, steps the
//! simulation once and redraws. While paused the flag is left untouched and
//! nothing advances.

use core::fmt::Write;

use heapless::String;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::GAME_TICK_MS;
use crate::config::game::{BALL_SIZE, PADDLE_HEIGHT, PADDLE_WIDTH};
use crate::input::Button;
use crate::pong::{COURT_HEIGHT, COURT_WIDTH, PongGame, Scored};
use crate::screen::{self, Action, Context, Screen};
use crate::timers::{TickFlag, TimerHandle};
use crate::{ui_info, ui_warn};

use super::{HOME, PONG};

const SCORE_SCALE: u8 = 2;
const PAUSED: &str = "PAUSED";

pub struct PongScreen {
    game: PongGame,
    rng: SmallRng,
    seed: u64,
    tick: &'static TickFlag,
    timer: Option<TimerHandle>,
}

impl PongScreen {
    /// `tick` is raised by the game timer. `seed` is mixed with the uptime
    /// at every `init`, so each game serves differently.
    pub fn new(
        tick: &'static TickFlag,
        seed: u64,
    ) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        Self {
            game: PongGame::new(&mut rng),
            rng,
            seed,
            tick,
            timer: None,
        }
    }

    pub const fn game(&self) -> &PongGame { &self.game }

    fn draw_score(
        ctx: &mut Context<'_>,
        score: u32,
        x: i32,
    ) {
        let mut text: String<10> = String::new();
        write!(text, "{score}").ok();
        ctx.surface.text(&text, x, 10, SCORE_SCALE);
    }
}

impl Screen for PongScreen {
    fn name(&self) -> &'static str { PONG }

    fn init(
        &mut self,
        ctx: &mut Context<'_>,
    ) {
        self.rng = SmallRng::seed_from_u64(self.seed ^ u64::from(ctx.clock.uptime_ms()));
        self.game.reset(&mut self.rng);
        self.tick.clear();
        self.render(ctx);
        match ctx.timers.schedule(GAME_TICK_MS, self.tick) {
            Ok(handle) => self.timer = Some(handle),
            Err(err) => ui_warn!(ctx, "{}: game timer: {}", PONG, err),
        }
    }

    fn deinit(
        &mut self,
        ctx: &mut Context<'_>,
    ) {
        if let Some(handle) = self.timer.take() {
            ctx.timers.cancel(handle);
        }
    }

    fn update(
        &mut self,
        ctx: &mut Context<'_>,
    ) {
        if self.game.is_paused() || !self.tick.take() {
            return;
        }
        if let Some(scored) = self.game.step(&mut self.rng) {
            let (player, ai) = self.game.scores();
            let who = match scored {
                Scored::Player => "player",
                Scored::Ai => "ai",
            };
            ui_info!(ctx, "{}: {} scores, {}-{}", PONG, who, player, ai);
        }
        self.render(ctx);
    }

    fn render(
        &mut self,
        ctx: &mut Context<'_>,
    ) {
        screen::clear(ctx);
        ctx.surface.set_pen(ctx.palette.primary());

        // Center line
        let center = COURT_WIDTH / 2;
        for y in (0..COURT_HEIGHT).step_by(10) {
            ctx.surface.rectangle(center - 1, y, 2, 5);
        }

        // Paddles and ball
        let paddle = (PADDLE_WIDTH as u32, PADDLE_HEIGHT as u32);
        ctx.surface.rectangle(0, self.game.player_y(), paddle.0, paddle.1);
        ctx.surface.rectangle(COURT_WIDTH - PADDLE_WIDTH, self.game.ai_y(), paddle.0, paddle.1);
        let (ball_x, ball_y) = self.game.ball();
        ctx.surface.rectangle(ball_x, ball_y, BALL_SIZE as u32, BALL_SIZE as u32);

        let (player, ai) = self.game.scores();
        Self::draw_score(ctx, player, center - 30);
        Self::draw_score(ctx, ai, center + 20);

        if self.game.is_paused() {
            let width = ctx.surface.measure_text(PAUSED, SCORE_SCALE) as i32;
            ctx.surface.text(PAUSED, (COURT_WIDTH - width) / 2, COURT_HEIGHT / 2 - 10, SCORE_SCALE);
        }

        ctx.surface.update();
    }

    fn on_button(
        &mut self,
        button: Button,
        ctx: &mut Context<'_>,
    ) -> Action {
        match button {
            Button::A => self.game.player_up(),
            Button::B => self.game.player_down(),
            Button::X => return Action::goto(HOME),
            Button::Y => {
                let paused = self.game.toggle_pause();
                ui_info!(ctx, "{}: {}", PONG, if paused { "paused" } else { "resumed" });
                self.render(ctx);
            }
        }
        Action::None
    }
}
