//! Axis-aligned bounding boxes and the per-tick collision check.

use super::obstacle::Obstacle;

/// An axis-aligned box. `y` grows downward, matching the playfield.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Hitbox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Strict overlap: boxes that only touch along an edge do not collide.
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// Index of the first obstacle (front to back) overlapping `player`.
pub fn first_collision(player: &Hitbox, obstacles: &[Obstacle]) -> Option<usize> {
    obstacles
        .iter()
        .position(|obstacle| player.overlaps(&obstacle.hitbox()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::obstacle::ObstacleKind;

    fn player_box() -> Hitbox {
        Hitbox::new(50.0, 200.0, 44.0, 47.0)
    }

    #[test]
    fn test_overlap_on_both_axes() {
        let obstacle = Hitbox::new(80.0, 220.0, 20.0, 40.0);
        assert!(player_box().overlaps(&obstacle));
        assert!(obstacle.overlaps(&player_box()));
    }

    #[test]
    fn test_horizontal_overlap_only() {
        let above = Hitbox::new(60.0, 100.0, 20.0, 40.0);
        assert!(!player_box().overlaps(&above));
    }

    #[test]
    fn test_vertical_overlap_only() {
        let ahead = Hitbox::new(200.0, 210.0, 20.0, 40.0);
        assert!(!player_box().overlaps(&ahead));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        // Obstacle's left edge exactly at the player's right edge
        let touching = Hitbox::new(94.0, 200.0, 20.0, 47.0);
        assert!(!player_box().overlaps(&touching));

        // Obstacle sitting exactly on top of the player
        let stacked = Hitbox::new(50.0, 160.0, 44.0, 40.0);
        assert!(!player_box().overlaps(&stacked));
    }

    #[test]
    fn test_first_collision_reports_front_most() {
        let obstacles = vec![
            Obstacle::new(ObstacleKind::Ground, 400.0, 160.0, 20.0, 40.0),
            Obstacle::new(ObstacleKind::Ground, 60.0, 210.0, 20.0, 40.0),
            Obstacle::new(ObstacleKind::Ground, 70.0, 210.0, 20.0, 40.0),
        ];
        assert_eq!(first_collision(&player_box(), &obstacles), Some(1));
    }

    #[test]
    fn test_no_obstacles_no_collision() {
        assert_eq!(first_collision(&player_box(), &[]), None);
    }
}
