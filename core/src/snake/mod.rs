//! Snake on a bounded grid, advanced one tick at a time by the host.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;
pub use food::*;

mod food;

/// Points awarded for every piece of food eaten.
pub const SCORE_PER_FOOD: u32 = 10;

/// Length of the snake at the start of every game.
pub const INITIAL_LENGTH: usize = 3;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    pub width: Coord,
    pub height: Coord,
    /// Tick interval at the start of a game, in milliseconds.
    pub initial_speed_ms: u32,
    /// How much the tick interval shrinks per food eaten.
    pub speed_step_ms: u32,
    /// Floor for the tick interval.
    pub min_speed_ms: u32,
}

impl SnakeConfig {
    /// Smallest side that still fits the initial snake with room to turn.
    pub const MIN_SIDE: Coord = 4;

    pub fn new(
        (width, height): Coord2,
        initial_speed_ms: u32,
        speed_step_ms: u32,
        min_speed_ms: u32,
    ) -> Self {
        let initial_speed_ms = initial_speed_ms.max(1);
        Self {
            width: width.max(Self::MIN_SIDE),
            height: height.max(Self::MIN_SIDE),
            initial_speed_ms,
            speed_step_ms,
            min_speed_ms: min_speed_ms.clamp(1, initial_speed_ms),
        }
    }

    /// Re-applies the bounds of [`SnakeConfig::new`], for configs built field by field.
    pub fn sanitized(self) -> Self {
        Self::new(
            (self.width, self.height),
            self.initial_speed_ms,
            self.speed_step_ms,
            self.min_speed_ms,
        )
    }

    pub const fn size(&self) -> Coord2 {
        (self.width, self.height)
    }

    pub const fn total_cells(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self::new_unchecked((20, 20), 150, 5, 50)
    }
}

impl SnakeConfig {
    const fn new_unchecked(
        (width, height): Coord2,
        initial_speed_ms: u32,
        speed_step_ms: u32,
        min_speed_ms: u32,
    ) -> Self {
        Self {
            width,
            height,
            initial_speed_ms,
            speed_step_ms,
            min_speed_ms,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const fn opposite(self) -> Self {
        use Direction::*;
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub const fn delta(self) -> (isize, isize) {
        use Direction::*;
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }
}

/// Valid transitions:
/// - Idle -> Playing
/// - Playing -> Paused
/// - Paused -> Playing
/// - Playing -> GameOver
/// - GameOver -> Playing (restart)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnakeStatus {
    Idle,
    Playing,
    Paused,
    GameOver,
}

impl SnakeStatus {
    /// Whether the host loop should be ticking.
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Playing)
    }
}

impl Default for SnakeStatus {
    fn default() -> Self {
        Self::Idle
    }
}

/// Outcome of a steering request
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SteerOutcome {
    Buffered,
    Reversal,
}

impl SteerOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Buffered)
    }
}

/// Outcome of one simulation step
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing, nothing moved.
    Skipped,
    Moved,
    Ate,
    GameOver { new_high_score: bool },
}

impl TickOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Skipped)
    }
}

#[derive(Clone, Debug)]
pub struct Snake {
    config: SnakeConfig,
    /// Head first.
    body: VecDeque<Coord2>,
    direction: Direction,
    next_direction: Direction,
    /// `None` once the body covers the whole grid.
    food: Option<Coord2>,
    score: u32,
    high_score: u32,
    status: SnakeStatus,
    speed_ms: u32,
    rng: SmallRng,
}

impl Snake {
    /// New game waiting in [`SnakeStatus::Idle`], food placement is driven by `seed`.
    pub fn new(config: SnakeConfig, high_score: u32, seed: u64) -> Self {
        Self::fresh(config, high_score, SmallRng::seed_from_u64(seed))
    }

    fn fresh(config: SnakeConfig, high_score: u32, mut rng: SmallRng) -> Self {
        let config = config.sanitized();
        let body = initial_body(&config);
        let food = spawn_food(&body, &config, &mut rng);
        Self {
            config,
            body,
            direction: Direction::Right,
            next_direction: Direction::Right,
            food,
            score: 0,
            high_score,
            status: Default::default(),
            speed_ms: config.initial_speed_ms,
            rng,
        }
    }

    pub fn config(&self) -> &SnakeConfig {
        &self.config
    }

    pub fn body(&self) -> impl ExactSizeIterator<Item = Coord2> + '_ {
        self.body.iter().copied()
    }

    pub fn head(&self) -> Coord2 {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn next_direction(&self) -> Direction {
        self.next_direction
    }

    pub fn food(&self) -> Option<Coord2> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn status(&self) -> SnakeStatus {
        self.status
    }

    /// Current tick interval in milliseconds.
    pub fn speed_ms(&self) -> u32 {
        self.speed_ms
    }

    pub fn occupies(&self, coords: Coord2) -> bool {
        self.body.contains(&coords)
    }

    /// Buffers the direction for the next tick, unless it would reverse into the neck.
    pub fn set_direction(&mut self, direction: Direction) -> SteerOutcome {
        if direction == self.direction.opposite() {
            log::trace!("Ignoring reversal to {:?}", direction);
            return SteerOutcome::Reversal;
        }
        self.next_direction = direction;
        SteerOutcome::Buffered
    }

    pub fn start(&mut self) -> Result<()> {
        self.transition(SnakeStatus::Idle, SnakeStatus::Playing, "start")
    }

    pub fn pause(&mut self) -> Result<()> {
        self.transition(SnakeStatus::Playing, SnakeStatus::Paused, "pause")
    }

    pub fn resume(&mut self) -> Result<()> {
        self.transition(SnakeStatus::Paused, SnakeStatus::Playing, "resume")
    }

    /// Space bar behaviour: start when idle, otherwise flip between playing and paused.
    pub fn toggle_pause(&mut self) -> Result<()> {
        match self.status {
            SnakeStatus::Idle => self.start(),
            SnakeStatus::Playing => self.pause(),
            SnakeStatus::Paused => self.resume(),
            SnakeStatus::GameOver => Err(GameError::InvalidTransition("toggle pause")),
        }
    }

    /// Fresh snake, score and speed, straight into [`SnakeStatus::Playing`].
    pub fn restart(&mut self) {
        self.restart_with_high_score(self.high_score);
    }

    pub fn restart_with_high_score(&mut self, high_score: u32) {
        let rng = self.rng.clone();
        *self = Self::fresh(self.config, high_score, rng);
        self.status = SnakeStatus::Playing;
    }

    /// Advances the simulation by one step, only while playing.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.status.is_running() {
            return TickOutcome::Skipped;
        }

        self.direction = self.next_direction;

        let Some(new_head) = apply_delta(self.head(), self.direction.delta(), self.config.size())
        else {
            log::debug!("Hit the wall heading {:?}", self.direction);
            return self.game_over();
        };

        if self.occupies(new_head) {
            log::debug!("Ran into own body at {:?}", new_head);
            return self.game_over();
        }

        self.body.push_front(new_head);

        if self.food == Some(new_head) {
            self.score += SCORE_PER_FOOD;
            self.speed_ms = self
                .speed_ms
                .saturating_sub(self.config.speed_step_ms)
                .max(self.config.min_speed_ms);
            self.food = spawn_food(&self.body, &self.config, &mut self.rng);
            log::debug!(
                "Ate at {:?}, score {}, interval {}ms",
                new_head,
                self.score,
                self.speed_ms
            );
            TickOutcome::Ate
        } else {
            self.body.pop_back();
            TickOutcome::Moved
        }
    }

    pub fn snapshot(&self) -> SnakeSnapshot {
        SnakeSnapshot {
            width: self.config.width,
            height: self.config.height,
            body: self.body().map(Position::from).collect(),
            direction: self.direction,
            next_direction: self.next_direction,
            food: self.food.map(Position::from),
            score: self.score,
            high_score: self.high_score,
            status: self.status,
            speed_ms: self.speed_ms,
        }
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, food: Option<Coord2>) {
        self.food = food;
    }

    fn game_over(&mut self) -> TickOutcome {
        self.status = SnakeStatus::GameOver;
        let new_high_score = self.score > self.high_score;
        if new_high_score {
            self.high_score = self.score;
        }
        log::debug!("Game over with score {}", self.score);
        TickOutcome::GameOver { new_high_score }
    }

    fn transition(
        &mut self,
        from: SnakeStatus,
        to: SnakeStatus,
        action: &'static str,
    ) -> Result<()> {
        if self.status != from {
            return Err(GameError::InvalidTransition(action));
        }
        self.status = to;
        Ok(())
    }
}

/// Three segments centered on the grid, facing right.
fn initial_body(config: &SnakeConfig) -> VecDeque<Coord2> {
    let (center_x, center_y) = (config.width / 2, config.height / 2);
    (0..INITIAL_LENGTH as Coord)
        .map(|i| (center_x - i, center_y))
        .collect()
}

/// Plain view of a [`Snake`] game for presenters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnakeSnapshot {
    pub width: Coord,
    pub height: Coord,
    pub body: Vec<Position>,
    pub direction: Direction,
    pub next_direction: Direction,
    pub food: Option<Position>,
    pub score: u32,
    pub high_score: u32,
    pub status: SnakeStatus,
    pub speed_ms: u32,
}
