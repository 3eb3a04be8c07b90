use super::obstacle::Obstacle;
use super::player::Player;
use super::scoring::Difficulty;
use super::spawner::SpawnScheduler;
use super::tuning::Tuning;

/// Lifecycle of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Instructions are shown; nothing moves until the first primary input.
    NotStarted,
    Running,
    /// Run ended in a collision. Simulation is frozen until restarted.
    GameOver,
}

/// Complete simulation state. Everything a tick reads or writes lives here.
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub player: Player,
    /// Active obstacles, oldest first.
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub difficulty: Difficulty,
    pub spawner: SpawnScheduler,
    /// Ticks since the current run started. Drives animations.
    pub ticks: u64,
    /// Best score across runs in this session.
    pub best_score: u32,
    /// Runs started in this session.
    pub runs: u32,
    pub tuning: Tuning,
}

impl GameState {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            phase: GamePhase::NotStarted,
            player: Player::new(),
            obstacles: Vec::new(),
            score: 0,
            difficulty: Difficulty::new(&tuning),
            spawner: SpawnScheduler::new(&tuning),
            ticks: 0,
            best_score: 0,
            runs: 0,
            tuning,
        }
    }

    pub fn speed(&self) -> f64 {
        self.difficulty.speed
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Whether at least one run has been started (as opposed to the
    /// instruction screen still being up).
    pub fn has_started(&self) -> bool {
        self.phase != GamePhase::NotStarted
    }

    /// Start a fresh run: clear score, speed, obstacles and the spawn
    /// countdown, and put the player back on the ground.
    pub fn start_run(&mut self) {
        self.score = 0;
        self.difficulty = Difficulty::new(&self.tuning);
        self.spawner = SpawnScheduler::new(&self.tuning);
        self.obstacles.clear();
        self.player.reset();
        self.ticks = 0;
        self.runs += 1;
        self.phase = GamePhase::Running;
        log::info!("run {} started", self.runs);
    }

    /// Enter the terminal phase. Returns false if already over.
    pub fn end_run(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        self.phase = GamePhase::GameOver;
        self.best_score = self.best_score.max(self.score);
        log::info!(
            "run {} over: score {} at speed {:.1} after {} ticks",
            self.runs,
            self.score,
            self.speed(),
            self.ticks
        );
        true
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}
