use std::time::Duration;

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{DEATH_STEP, GAME_OVER_TEXT, GRID, GridSize, RestartPolicy};
use crate::food::spawn_apple;
use crate::grid::Position;
use crate::input::{Direction, InputEvent, Key, TurnDebounce};
use crate::snake::Snake;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Notable things that happened during one frame.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameEvent {
    AppleEaten { score: u32 },
    Died { score: u32 },
    Restarted,
    Quit,
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snapshot {
    pub score: u32,
    pub best_score: u32,
    pub game_over: bool,
    pub death_animating: bool,
    pub head: Position,
    pub direction: Direction,
    /// Body cells from neck to tail.
    pub body: Vec<Position>,
    pub apple: Option<Position>,
    pub overlay: Option<&'static str>,
    pub events: Vec<GameEvent>,
    pub quit: bool,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub apple: Option<Position>,
    pub score: u32,
    pub best_score: u32,
    pub status: GameStatus,
    restart_policy: RestartPolicy,
    clock: Duration,
    death_timer: Duration,
    debounce: TurnDebounce,
    events: Vec<GameEvent>,
    quit_requested: bool,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a new round seeded from OS entropy.
    #[must_use]
    pub fn new(restart_policy: RestartPolicy) -> Self {
        Self::with_rng(restart_policy, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(restart_policy: RestartPolicy, seed: u64) -> Self {
        Self::with_rng(restart_policy, StdRng::seed_from_u64(seed))
    }

    fn with_rng(restart_policy: RestartPolicy, mut rng: StdRng) -> Self {
        let snake = Snake::spawn(&mut rng);
        let apple = spawn_apple(&mut rng, GRID, &snake);

        Self {
            snake,
            apple,
            score: 0,
            best_score: 0,
            status: GameStatus::Playing,
            restart_policy,
            clock: Duration::ZERO,
            death_timer: Duration::ZERO,
            debounce: TurnDebounce::starting_at(Duration::ZERO),
            events: Vec::new(),
            quit_requested: false,
            bounds: GRID,
            rng,
        }
    }

    /// Runs one frame: input, movement, apple, collisions, death animation.
    pub fn frame(&mut self, inputs: &[InputEvent], elapsed: Duration) -> Snapshot {
        self.events.clear();
        self.clock += elapsed;

        for input in inputs {
            self.apply_input(*input);
        }

        match self.status {
            GameStatus::Playing => {
                self.snake.advance(self.bounds);
                // An apple reached on the losing move still counts.
                self.resolve_apple();

                if self.snake.head_overlaps_body() {
                    self.end_round();
                }
            }
            GameStatus::GameOver => {
                self.apple = None;
                self.run_death_animation(elapsed);
            }
        }

        self.snapshot()
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: InputEvent) {
        let key = match input {
            InputEvent::Quit => {
                self.request_quit();
                return;
            }
            InputEvent::KeyPress(key) => key,
        };

        match key {
            Key::Quit => self.request_quit(),
            Key::Space => {
                if self.status == GameStatus::GameOver {
                    self.restart();
                }
            }
            Key::Up | Key::Down | Key::Left | Key::Right => {
                if let Some(direction) = key.direction() {
                    self.request_turn(direction);
                }
            }
        }
    }

    /// Returns true while body segments are still being removed after a loss.
    #[must_use]
    pub fn is_death_animating(&self) -> bool {
        self.status == GameStatus::GameOver && self.snake.body_len() > 0
    }

    #[must_use]
    pub fn restart_policy(&self) -> RestartPolicy {
        self.restart_policy
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Builds the per-frame output from the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let game_over = self.status == GameStatus::GameOver;

        Snapshot {
            score: self.score,
            best_score: self.best_score,
            game_over,
            death_animating: self.is_death_animating(),
            head: self.snake.position,
            direction: self.snake.direction,
            body: self
                .snake
                .body()
                .iter()
                .map(|segment| segment.position)
                .collect(),
            apple: self.apple,
            overlay: game_over.then_some(GAME_OVER_TEXT),
            events: self.events.clone(),
            quit: self.quit_requested,
        }
    }

    fn request_turn(&mut self, direction: Direction) {
        if self.status != GameStatus::Playing || !self.debounce.is_ready(self.clock) {
            return;
        }

        self.debounce.record(self.clock);
        if self.snake.turn(direction) {
            debug!(
                "turned {direction:?} at ({}, {})",
                self.snake.position.x, self.snake.position.y
            );
        }
    }

    fn request_quit(&mut self) {
        if !self.quit_requested {
            self.quit_requested = true;
            self.events.push(GameEvent::Quit);
        }
    }

    fn resolve_apple(&mut self) {
        if self.apple.is_none() {
            self.apple = spawn_apple(&mut self.rng, self.bounds, &self.snake);
        }

        if self.apple == Some(self.snake.position) {
            self.score += 1;
            self.best_score = self.best_score.max(self.score);
            self.apple = None;
            self.snake.grow(self.bounds);
            self.events.push(GameEvent::AppleEaten { score: self.score });
            debug!(
                "apple eaten, score {} length {}",
                self.score,
                self.snake.body_len()
            );
        }
    }

    fn end_round(&mut self) {
        self.status = GameStatus::GameOver;
        self.apple = None;
        self.death_timer = Duration::ZERO;
        self.events.push(GameEvent::Died { score: self.score });
        info!(
            "round lost with score {} and {} body segments",
            self.score,
            self.snake.body_len()
        );
    }

    fn run_death_animation(&mut self, elapsed: Duration) {
        self.death_timer += elapsed;

        while self.death_timer >= DEATH_STEP {
            self.death_timer -= DEATH_STEP;
            self.snake.shed_tail();
        }
    }

    fn restart(&mut self) {
        self.status = GameStatus::Playing;
        self.score = 0;
        self.death_timer = Duration::ZERO;

        if self.restart_policy == RestartPolicy::Respawn {
            self.snake = Snake::spawn(&mut self.rng);
        }

        self.events.push(GameEvent::Restarted);
        info!("round restarted ({:?})", self.restart_policy);
    }
}
