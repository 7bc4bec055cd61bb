use glam::Vec2;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::config::{AnimationSettings, GameConfig};
use crate::language::{Category, Language};
use crate::physics::Body;

/// Looping frame counter over a horizontal sprite sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinAnimation {
    frames: u32,
    frame_delay: u32,
    frame: u32,
    elapsed: u32,
}

impl SpinAnimation {
    pub fn new(settings: &AnimationSettings) -> Self {
        Self {
            frames: settings.frames.max(1),
            frame_delay: settings.frame_delay.max(1),
            frame: 0,
            elapsed: 0,
        }
    }

    pub fn tick(&mut self) {
        self.elapsed += 1;
        if self.elapsed >= self.frame_delay {
            self.elapsed = 0;
            self.frame = (self.frame + 1) % self.frames;
        }
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Current frame as `(x, y, w, h)` in normalized sheet coordinates.
    pub fn source_rect(&self) -> [f32; 4] {
        let w = 1.0 / self.frames as f32;
        [self.frame as f32 * w, 0.0, w, 1.0]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LanguageSprite {
    pub pos: Vec2,
    pub speed: f32,
    pub size: f32,
    pub category: Category,
    pub language: Language,
    pub animation: SpinAnimation,
}

impl LanguageSprite {
    pub fn new(config: &GameConfig, language: Language, pos: Vec2, speed: f32) -> Self {
        Self {
            pos,
            speed,
            size: config.language_size,
            category: language.category(),
            language,
            animation: SpinAnimation::new(&config.animation),
        }
    }

    /// Coin-flip the category, then pick a label from it and place the icon
    /// just past the right edge.
    pub fn spawn(config: &GameConfig, rng: &mut impl Rng) -> Self {
        let category = if rng.random_bool(0.5) {
            Category::Good
        } else {
            Category::Bad
        };
        Self::spawn_in(config, category, rng)
    }

    pub fn spawn_in(config: &GameConfig, category: Category, rng: &mut impl Rng) -> Self {
        let languages = category.languages();
        let language = *languages.choose(rng).unwrap_or(&languages[0]);
        let pos = Vec2::new(config.spawn_x(), rng.random_range(config.spawn_band()));
        let speed = rng.random_range(config.speed_band());
        Self::new(config, language, pos, speed)
    }

    pub fn is_good(&self) -> bool {
        self.category == Category::Good
    }

    pub fn update(&mut self) {
        self.pos.x += self.speed;
        self.animation.tick();
    }

    pub fn escaped(&self, config: &GameConfig) -> bool {
        self.pos.x < config.despawn_x
    }

    /// Back to the right edge with a fresh height and speed, keeping the label.
    pub fn respawn(&mut self, config: &GameConfig, rng: &mut impl Rng) {
        self.pos = Vec2::new(config.spawn_x(), rng.random_range(config.spawn_band()));
        self.speed = rng.random_range(config.speed_band());
    }
}

impl Body for LanguageSprite {
    fn pos(&self) -> Vec2 {
        self.pos
    }
    fn size(&self) -> f32 {
        self.size
    }
}
