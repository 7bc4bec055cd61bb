use glam::Vec2;

use crate::config::GameConfig;
use crate::physics::Body;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub score: u32,
    pub lives: u32,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(config.canvas_width * 0.1, config.canvas_height / 2.0),
            vel: Vec2::ZERO,
            size: config.player_size,
            score: 0,
            lives: config.initial_lives,
        }
    }

    pub fn grounded(&self, config: &GameConfig) -> bool {
        self.pos.y >= config.ground_level
    }

    /// One physics tick: gravity, ground clamp, jump, integrate.
    pub fn update(&mut self, config: &GameConfig, jump: bool) {
        self.vel.y += config.gravity;

        if self.grounded(config) {
            self.pos.y = config.ground_level;
            self.vel.y = 0.0;
        }

        if jump && self.grounded(config) {
            self.vel.y = config.jump_force;
        }

        self.pos += self.vel;
    }
}

impl Body for Player {
    fn pos(&self) -> Vec2 {
        self.pos
    }
    fn size(&self) -> f32 {
        self.size
    }
}
