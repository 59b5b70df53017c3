//! The state-owning match session
//!
//! One `MatchSession` holds the world and every resource the step reads or
//! writes. Input handlers, the assistant channel, and the renderer all go
//! through it; there are no ambient globals.

use assist_proto::{AssistantCommand, StateSnapshot};
use glam::Vec2;
use hecs::World;
use match_core::{
    create_ball, create_paddle, step, Ball, Config, Events, GameRng, HeldInputs, Paddle, Phase,
    Score, Side,
};
use tracing::{debug, info};

use crate::input::{binding_for, KeyBinding};
use crate::render::{MatchView, Rect};

pub struct MatchSession {
    world: World,
    config: Config,
    phase: Phase,
    score: Score,
    events: Events,
    held: HeldInputs,
    rng: GameRng,
    help_open: bool,
    // Phase to restore when the help overlay closes. A single remembered
    // value, not a stack: nested opens do not re-record it.
    resume_phase: Phase,
}

impl MatchSession {
    pub fn new(config: Config, seed: u64) -> Self {
        let mut world = World::new();
        let paddle_y = (config.board_height - config.paddle_height) / 2.0;
        create_paddle(&mut world, Side::Left, paddle_y);
        create_paddle(&mut world, Side::Right, paddle_y);
        create_ball(
            &mut world,
            Vec2::new(config.board_width / 2.0, config.board_height / 2.0),
            Vec2::ZERO,
        );

        Self {
            world,
            config,
            phase: Phase::NotStarted,
            score: Score::new(),
            events: Events::new(),
            held: HeldInputs::new(),
            rng: GameRng::new(seed),
            help_open: false,
            resume_phase: Phase::NotStarted,
        }
    }

    /// Run one physics tick.
    pub fn tick(&mut self) {
        step(
            &mut self.world,
            &self.config,
            &mut self.phase,
            &self.held,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
    }

    /// Start the rally: fresh serve from the center. No-op while already
    /// running. Dismisses the help overlay if it is showing.
    pub fn start(&mut self) {
        if self.phase == Phase::Running {
            return;
        }
        self.help_open = false;
        let config = &self.config;
        let rng = &mut self.rng;
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset(config, rng);
        }
        self.phase = Phase::Running;
        info!("rally started");
    }

    pub fn pause(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.phase == Phase::Paused {
            self.phase = Phase::Running;
        }
    }

    /// Open the help overlay, remembering the phase it interrupts and
    /// pausing a running rally.
    pub fn show_help(&mut self) {
        if self.help_open {
            return;
        }
        self.help_open = true;
        self.resume_phase = self.phase;
        if self.phase == Phase::Running {
            self.phase = Phase::Paused;
        }
    }

    /// Close the help overlay and restore the phase it interrupted.
    pub fn close_help(&mut self) {
        if !self.help_open {
            return;
        }
        self.help_open = false;
        self.phase = self.resume_phase;
    }

    /// Close the help overlay without resuming.
    pub fn dismiss_help(&mut self) {
        self.help_open = false;
    }

    /// Apply a typed assistant command.
    pub fn handle_command(&mut self, command: AssistantCommand) {
        match command {
            AssistantCommand::Up => self.nudge_assist_paddle(-1.0),
            AssistantCommand::Down => self.nudge_assist_paddle(1.0),
            AssistantCommand::Start => self.start(),
            AssistantCommand::Help => self.show_help(),
            AssistantCommand::Stop => self.dismiss_help(),
        }
    }

    /// Parse and apply a raw vendor action token. Unknown tokens are
    /// logged and dropped, never surfaced as failures.
    pub fn handle_raw_command(&mut self, raw: &str) {
        match AssistantCommand::parse(raw) {
            Some(command) => self.handle_command(command),
            None => debug!(token = raw, "unknown assistant action"),
        }
    }

    // Assistant commands are discrete, so a nudge covers more ground than
    // one held-key tick. Applies in any phase, clamped like any paddle move.
    fn nudge_assist_paddle(&mut self, dir: f32) {
        let config = &self.config;
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            if paddle.side == Side::Right {
                paddle.y = config.clamp_paddle_y(paddle.y + dir * config.assist_step);
            }
        }
    }

    /// Key-down from the host. Directions latch until key-up; control keys
    /// fire immediately.
    pub fn key_down(&mut self, key: &str) {
        match binding_for(key) {
            Some(KeyBinding::LeftUp) => self.held.left_up = true,
            Some(KeyBinding::LeftDown) => self.held.left_down = true,
            Some(KeyBinding::RightUp) => self.held.right_up = true,
            Some(KeyBinding::RightDown) => self.held.right_down = true,
            Some(KeyBinding::Start) => self.start(),
            Some(KeyBinding::Help) => self.show_help(),
            Some(KeyBinding::CloseHelp) => self.close_help(),
            None => {}
        }
    }

    /// Key-up from the host. Only held directions react.
    pub fn key_up(&mut self, key: &str) {
        match binding_for(key) {
            Some(KeyBinding::LeftUp) => self.held.left_up = false,
            Some(KeyBinding::LeftDown) => self.held.left_down = false,
            Some(KeyBinding::RightUp) => self.held.right_up = false,
            Some(KeyBinding::RightDown) => self.held.right_down = false,
            _ => {}
        }
    }

    /// Read-only state for the assistant collaborator.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            score_left: self.score.left,
            score_right: self.score.right,
            started: self.phase == Phase::Running,
        }
    }

    /// Renderer-facing projection of the current state.
    pub fn view(&self) -> MatchView {
        let config = &self.config;

        let mut ball_rect = Rect::new(
            Vec2::new(config.board_width / 2.0, config.board_height / 2.0),
            Vec2::splat(config.ball_size),
        );
        for (_entity, ball) in self.world.query::<&Ball>().iter() {
            ball_rect.pos = ball.pos;
        }

        let paddle_size = Vec2::new(config.paddle_width, config.paddle_height);
        let mut left = Rect::new(Vec2::new(config.paddle_x(Side::Left), 0.0), paddle_size);
        let mut right = Rect::new(Vec2::new(config.paddle_x(Side::Right), 0.0), paddle_size);
        for (_entity, paddle) in self.world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Left => left.pos.y = paddle.y,
                Side::Right => right.pos.y = paddle.y,
            }
        }

        MatchView {
            board: Vec2::new(config.board_width, config.board_height),
            ball: ball_rect,
            left_paddle: left,
            right_paddle: right,
            center_line_x: config.board_width / 2.0,
            score: (self.score.left, self.score.right),
            phase: self.phase,
            help_open: self.help_open,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Events raised by the most recent tick.
    pub fn events(&self) -> Events {
        self.events
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
