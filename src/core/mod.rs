//! Core simulation: state, rules and frame composition. Nothing in here
//! touches the terminal, the clock or a sound device.

pub mod autopilot;
pub mod collision;
pub mod constants;
pub mod game_loop;
pub mod game_state;
pub mod obstacle;
pub mod player;
pub mod ports;
pub mod scene;
pub mod scoring;
pub mod spawner;
pub mod tick;
pub mod tuning;

pub use game_loop::{run_frame, FixedStep};
pub use game_state::{GamePhase, GameState};
pub use obstacle::{Obstacle, ObstacleKind};
pub use player::Player;
pub use ports::{AudioSink, Canvas, SoundEffect};
pub use tick::{apply_input, GameInput, TickEvent, TickResult};
pub use tuning::Tuning;
