//! Playfield geometry and the default gameplay constants.

// Playfield (logical units, independent of the drawing backend)
pub const PLAYFIELD_WIDTH: f64 = 800.0;
pub const PLAYFIELD_HEIGHT: f64 = 250.0;
pub const GROUND_Y: f64 = PLAYFIELD_HEIGHT - 50.0;

// Player geometry
pub const PLAYER_X: f64 = 50.0;
pub const PLAYER_WIDTH: f64 = 44.0;
pub const PLAYER_HEIGHT: f64 = 47.0;
pub const PLAYER_DUCK_WIDTH: f64 = 59.0;
pub const PLAYER_DUCK_HEIGHT: f64 = 25.0;

// Player physics (defaults, overridable through Tuning)
pub const JUMP_STRENGTH: f64 = 17.0;
pub const GRAVITY: f64 = 0.8;

// Ground obstacle size ranges: base + random * spread
pub const GROUND_OBSTACLE_MIN_WIDTH: f64 = 20.0;
pub const GROUND_OBSTACLE_WIDTH_SPREAD: f64 = 20.0;
pub const GROUND_OBSTACLE_MIN_HEIGHT: f64 = 40.0;
pub const GROUND_OBSTACLE_HEIGHT_SPREAD: f64 = 20.0;

// Flying obstacle geometry
pub const FLYING_OBSTACLE_WIDTH: f64 = 50.0;
pub const FLYING_OBSTACLE_HEIGHT: f64 = 30.0;
/// Lowest flying top edge sits this far above the ground line.
pub const FLYING_MIN_ALTITUDE: f64 = 80.0;
pub const FLYING_ALTITUDE_SPREAD: f64 = 40.0;

// Speed and difficulty
pub const INITIAL_SPEED: f64 = 5.0;
pub const MAX_SPEED: f64 = 18.0;
pub const SPEED_INCREMENT: f64 = 0.5;
pub const SPEED_MILESTONE: u32 = 200;
pub const POINTS_PER_OBSTACLE: u32 = 25;

// Spawn scheduling (in ticks)
pub const INITIAL_SPAWN_INTERVAL: u32 = 100;
pub const SPAWN_INTERVAL_JITTER: u32 = 50;
pub const SPAWN_INTERVAL_BASE: u32 = 70;
pub const SPAWN_INTERVAL_SPEED_FACTOR: f64 = 3.0;
pub const MIN_SPAWN_INTERVAL: u32 = 50;

// Flying obstacle selection
pub const FLYING_CHANCE: f64 = 0.3;
pub const FLYING_SCORE_THRESHOLD: u32 = 300;

// Animation cadence (ticks per frame)
pub const LEG_FRAME_TICKS: u64 = 5;
pub const WING_FRAME_TICKS: u64 = 8;

// Real-time frame rate for the terminal driver
pub const TICK_MS: u64 = 16; // ~60 FPS
/// Catch-up cap per frame so a stall cannot explode into hundreds of ticks.
pub const MAX_FRAME_MS: u64 = 100;
