//! Terminal front end: ratatui widgets over the core scene.

pub mod cell_canvas;
pub mod game_common;
pub mod game_scene;

pub use game_scene::{render_game_scene, Hud};
