//! The per-tick simulation step and input handling.
//!
//! `tick()` advances one discrete step: player physics, spawning, obstacle
//! movement and removal, collision, scoring and difficulty. It returns a
//! [`TickResult`] describing what happened so drivers (the terminal app, the
//! headless simulator) can react without the core depending on them.

use super::collision::first_collision;
use super::game_state::{GamePhase, GameState};
use super::ports::{AudioSink, SoundEffect};
use super::scoring::award_passed_obstacles;
use rand::Rng;

/// Logical inputs. Primary is edge-triggered; duck is level-triggered and
/// arrives as a press/release pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Jump while running; start or restart otherwise.
    Primary,
    DuckPressed,
    DuckReleased,
}

/// Apply one input to the state. Takes effect before the next tick.
pub fn apply_input<A: AudioSink + ?Sized>(state: &mut GameState, input: GameInput, audio: &mut A) {
    match (state.phase, input) {
        (GamePhase::NotStarted | GamePhase::GameOver, GameInput::Primary) => {
            state.start_run();
        }
        (GamePhase::Running, GameInput::Primary) => {
            let strength = state.tuning.jump_strength;
            state.player.jump(strength, audio);
        }
        (GamePhase::Running, GameInput::DuckPressed) => state.player.set_ducking(true),
        (GamePhase::Running, GameInput::DuckReleased) => state.player.set_ducking(false),
        // Duck on the title or end screen does nothing
        _ => {}
    }
}

/// A single event produced by a tick.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    ObstacleSpawned { flying: bool },
    Scored { points: u32, total: u32 },
    SpeedUp { speed: f64 },
    GameOver { score: u32 },
}

/// Everything that happened during one tick.
#[derive(Debug, Clone, Default)]
pub struct TickResult {
    /// False when the tick was skipped because no run is active.
    pub advanced: bool,
    pub events: Vec<TickEvent>,
}

impl TickResult {
    pub fn game_over(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, TickEvent::GameOver { .. }))
    }
}

/// Advance the simulation by one step. Outside `Running` this is a no-op.
pub fn tick<R: Rng, A: AudioSink + ?Sized>(
    state: &mut GameState,
    rng: &mut R,
    audio: &mut A,
) -> TickResult {
    let mut result = TickResult::default();
    if !state.is_running() {
        return result;
    }
    result.advanced = true;
    state.ticks += 1;

    // 1. Player physics
    state.player.update(state.tuning.gravity);

    // 2. Spawn
    if let Some(obstacle) = state
        .spawner
        .tick(rng, state.score, state.speed(), &state.tuning)
    {
        result.events.push(TickEvent::ObstacleSpawned {
            flying: obstacle.kind.is_flying(),
        });
        state.obstacles.push(obstacle);
    }

    // 3. Move obstacles
    let speed = state.speed();
    for obstacle in &mut state.obstacles {
        obstacle.advance(speed);
    }

    // 4. Collision ends the run; the score is frozen at that moment
    if first_collision(&state.player.hitbox(), &state.obstacles).is_some() && state.end_run() {
        state.obstacles.retain(|o| !o.is_off_screen());
        audio.play(SoundEffect::GameOver);
        result.events.push(TickEvent::GameOver { score: state.score });
        return result;
    }

    // 5. Score, including obstacles leaving the playfield this tick
    let points = award_passed_obstacles(
        &mut state.obstacles,
        state.player.x,
        state.tuning.points_per_obstacle,
    );
    state.obstacles.retain(|o| !o.is_off_screen());
    if points > 0 {
        state.score = state.score.saturating_add(points);
        result.events.push(TickEvent::Scored {
            points,
            total: state.score,
        });
    }

    // 6. Difficulty
    if state.difficulty.update(state.score, &state.tuning) {
        result.events.push(TickEvent::SpeedUp {
            speed: state.speed(),
        });
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::*;
    use crate::core::obstacle::{Obstacle, ObstacleKind};
    use crate::core::ports::RecordingAudio;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    /// A running game whose spawner will not fire for a long time.
    fn running_state() -> GameState {
        let mut state = GameState::default();
        state.start_run();
        state.spawner.interval = u32::MAX;
        state
    }

    fn ground_obstacle(x: f64, width: f64) -> Obstacle {
        Obstacle::new(ObstacleKind::Ground, x, GROUND_Y - 40.0, width, 40.0)
    }

    // ── Lifecycle ──

    #[test]
    fn test_tick_is_noop_before_start() {
        let mut state = GameState::default();
        let mut audio = RecordingAudio::default();
        let result = tick(&mut state, &mut test_rng(), &mut audio);
        assert!(!result.advanced);
        assert_eq!(state.ticks, 0);
        assert_eq!(state.spawner.frame_count, 0);
    }

    #[test]
    fn test_primary_starts_game() {
        let mut state = GameState::default();
        let mut audio = RecordingAudio::default();
        apply_input(&mut state, GameInput::Primary, &mut audio);
        assert_eq!(state.phase, GamePhase::Running);
        // Starting is not a jump
        assert!(!state.player.is_jumping);
        assert!(audio.played.is_empty());
    }

    #[test]
    fn test_duck_ignored_outside_running() {
        let mut state = GameState::default();
        let mut audio = RecordingAudio::default();
        apply_input(&mut state, GameInput::DuckPressed, &mut audio);
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert!(!state.player.is_ducking);
    }

    #[test]
    fn test_primary_jumps_while_running() {
        let mut state = running_state();
        let mut audio = RecordingAudio::default();
        apply_input(&mut state, GameInput::Primary, &mut audio);
        assert!(state.player.is_jumping);
        assert_eq!(audio.played, vec![SoundEffect::Jump]);
    }

    #[test]
    fn test_duck_press_and_release() {
        let mut state = running_state();
        let mut audio = RecordingAudio::default();
        apply_input(&mut state, GameInput::DuckPressed, &mut audio);
        assert!(state.player.is_ducking);
        apply_input(&mut state, GameInput::DuckReleased, &mut audio);
        assert!(!state.player.is_ducking);
    }

    #[test]
    fn test_game_over_freezes_simulation() {
        let mut state = running_state();
        let mut audio = RecordingAudio::default();
        state.obstacles.push(ground_obstacle(300.0, 20.0));
        state.end_run();

        let snapshot_x = state.obstacles[0].x;
        for _ in 0..10 {
            assert!(!tick(&mut state, &mut test_rng(), &mut audio).advanced);
        }
        assert!((state.obstacles[0].x - snapshot_x).abs() < f64::EPSILON);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut state = running_state();
        let mut audio = RecordingAudio::default();
        state.score = 275;
        state.difficulty.update(275, &state.tuning);
        state.obstacles.push(ground_obstacle(PLAYER_X, 20.0));
        let result = tick(&mut state, &mut test_rng(), &mut audio);
        assert!(result.game_over());
        assert!(state.is_game_over());

        apply_input(&mut state, GameInput::Primary, &mut audio);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert!((state.speed() - INITIAL_SPEED).abs() < f64::EPSILON);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.best_score, 275);

        let result = tick(&mut state, &mut test_rng(), &mut audio);
        assert!(result.advanced, "ticking resumes after restart");
        assert_eq!(state.ticks, 1);
    }

    // ── Movement & removal ──

    #[test]
    fn test_obstacle_scrolls_and_is_removed_at_left_edge() {
        let mut state = running_state();
        let mut audio = RecordingAudio::default();
        let mut rng = test_rng();
        // Flyer well above a grounded player so nothing collides
        state
            .obstacles
            .push(Obstacle::new(ObstacleKind::Flying, 800.0, 20.0, 20.0, 30.0));

        for _ in 0..156 {
            tick(&mut state, &mut rng, &mut audio);
        }
        assert_eq!(state.obstacles.len(), 1);
        assert!((state.obstacles[0].x - 20.0).abs() < 1e-9);

        for _ in 156..159 {
            tick(&mut state, &mut rng, &mut audio);
        }
        assert_eq!(state.obstacles.len(), 1, "still on screen at tick 159");

        tick(&mut state, &mut rng, &mut audio);
        assert!(state.obstacles.is_empty(), "removed at tick 160");
    }

    #[test]
    fn test_removal_keeps_remaining_order() {
        let mut state = running_state();
        let mut audio = RecordingAudio::default();
        state.obstacles = vec![
            Obstacle::new(ObstacleKind::Flying, 3.0, 0.0, 10.0, 10.0),
            Obstacle::new(ObstacleKind::Flying, 400.0, 0.0, 10.0, 10.0),
            Obstacle::new(ObstacleKind::Flying, 4.0, 0.0, 10.0, 10.0),
            Obstacle::new(ObstacleKind::Flying, 600.0, 0.0, 10.0, 10.0),
        ];
        tick(&mut state, &mut test_rng(), &mut audio);
        let xs: Vec<f64> = state.obstacles.iter().map(|o| o.x).collect();
        assert_eq!(xs, vec![395.0, 595.0]);
    }

    #[test]
    fn test_wide_obstacles_score_before_leaving() {
        // Too wide for the trailing edge to get past x 50 before x reaches 0
        let cases = [
            (ObstacleKind::Flying, 50.0, 5.0),
            (ObstacleKind::Flying, 50.0, 7.5),
            (ObstacleKind::Ground, 39.0, 16.0),
            (ObstacleKind::Ground, 20.0, 5.0),
        ];
        for (kind, width, speed) in cases {
            let mut state = running_state();
            let mut audio = RecordingAudio::default();
            let mut rng = test_rng();
            state.difficulty.speed = speed;
            // High above a grounded player
            state
                .obstacles
                .push(Obstacle::new(kind, PLAYFIELD_WIDTH, 20.0, width, 30.0));

            for _ in 0..400 {
                tick(&mut state, &mut rng, &mut audio);
            }
            assert!(state.is_running());
            assert!(state.obstacles.is_empty());
            assert_eq!(
                state.score, POINTS_PER_OBSTACLE,
                "{:?} {} wide at speed {}",
                kind, width, speed
            );
        }
    }

    #[test]
    fn test_huge_points_saturate_score() {
        let mut state = running_state();
        let mut audio = RecordingAudio::default();
        state.tuning.points_per_obstacle = u32::MAX;
        state.score = 10;
        state.obstacles.push(ground_obstacle(30.0, 20.0));

        let result = tick(&mut state, &mut test_rng(), &mut audio);
        assert!(result.advanced);
        assert_eq!(state.score, u32::MAX);
    }

    // ── Collision ──

    #[test]
    fn test_game_over_on_first_overlapping_tick() {
        let mut state = running_state();
        let mut audio = RecordingAudio::default();
        let mut rng = test_rng();
        // Player spans x 50..94. The obstacle starts at 104: 99 after one
        // tick, 94 after two (touching, not overlapping), 89 after three.
        state.obstacles.push(ground_obstacle(104.0, 20.0));

        assert!(!tick(&mut state, &mut rng, &mut audio).game_over());
        assert!(!tick(&mut state, &mut rng, &mut audio).game_over());
        assert!(state.is_running());

        let result = tick(&mut state, &mut rng, &mut audio);
        assert!(result.game_over());
        assert!(state.is_game_over());
        assert_eq!(audio.count(SoundEffect::GameOver), 1);
    }

    #[test]
    fn test_multiple_overlaps_trigger_game_over_once() {
        let mut state = running_state();
        let mut audio = RecordingAudio::default();
        state.obstacles.push(ground_obstacle(60.0, 20.0));
        state.obstacles.push(ground_obstacle(70.0, 20.0));

        let result = tick(&mut state, &mut test_rng(), &mut audio);
        assert_eq!(
            result
                .events
                .iter()
                .filter(|e| matches!(e, TickEvent::GameOver { .. }))
                .count(),
            1
        );
        tick(&mut state, &mut test_rng(), &mut audio);
        assert_eq!(audio.count(SoundEffect::GameOver), 1);
    }

    #[test]
    fn test_jump_clears_ground_obstacle() {
        let mut state = running_state();
        let mut audio = RecordingAudio::default();
        let mut rng = test_rng();
        // 40 tall cactus 60 units ahead of the player's leading edge
        state.obstacles.push(ground_obstacle(154.0, 20.0));

        for _ in 0..6 {
            tick(&mut state, &mut rng, &mut audio);
        }
        apply_input(&mut state, GameInput::Primary, &mut audio);
        for _ in 0..60 {
            tick(&mut state, &mut rng, &mut audio);
        }
        assert!(state.is_running(), "jump should clear the cactus");
        assert_eq!(state.score, POINTS_PER_OBSTACLE);
    }

    // ── Scoring & difficulty ──

    #[test]
    fn test_score_awarded_once_per_obstacle() {
        let mut state = running_state();
        let mut audio = RecordingAudio::default();
        let mut rng = test_rng();
        // Already behind the player but still on screen for a few ticks
        state.obstacles.push(ground_obstacle(30.0, 20.0));

        let result = tick(&mut state, &mut rng, &mut audio);
        assert_eq!(
            result.events,
            vec![TickEvent::Scored {
                points: 25,
                total: 25
            }]
        );
        for _ in 0..3 {
            tick(&mut state, &mut rng, &mut audio);
        }
        assert_eq!(state.score, 25);
    }

    #[test]
    fn test_speed_steps_up_at_milestone() {
        let mut state = running_state();
        let mut audio = RecordingAudio::default();
        state.score = 175;
        state.obstacles.push(ground_obstacle(30.0, 20.0));

        let result = tick(&mut state, &mut test_rng(), &mut audio);
        assert!(result
            .events
            .contains(&TickEvent::SpeedUp { speed: 5.5 }));
        assert!((state.speed() - 5.5).abs() < f64::EPSILON);

        // Resting on 200 does not keep accelerating
        for _ in 0..20 {
            tick(&mut state, &mut test_rng(), &mut audio);
        }
        assert!((state.speed() - 5.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_spawned_obstacles_enter_from_right() {
        let mut state = GameState::default();
        state.start_run();
        let mut audio = RecordingAudio::default();
        let mut rng = test_rng();

        let mut spawned = None;
        for _ in 0..101 {
            let result = tick(&mut state, &mut rng, &mut audio);
            if result
                .events
                .iter()
                .any(|e| matches!(e, TickEvent::ObstacleSpawned { .. }))
            {
                spawned = Some(state.ticks);
            }
        }
        assert_eq!(spawned, Some(101));
        assert_eq!(state.obstacles.len(), 1);
        // Spawned at 800 then moved once in the same tick
        assert!((state.obstacles[0].x - (PLAYFIELD_WIDTH - INITIAL_SPEED)).abs() < 1e-9);
    }
}
