use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::GameConfig;
use crate::language::Language;
use crate::physics::Body;
use crate::player::Player;
use crate::sprite::LanguageSprite;

/// Input sampled by the host for a single tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub jump: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Spawned(Language),
    Escaped(Language),
    Collected { language: Language, score: u32 },
    Hit { language: Language, lives: u32 },
    GameOver { score: u32 },
}

pub struct Game {
    config: GameConfig,
    player: Player,
    languages: Vec<LanguageSprite>,
    spawn_timer: u32,
    powerup_count: u32,
    game_over: bool,
    ticks: u64,
    rng: StdRng,
}

impl Game {
    /// Fails when the config does not pass [`GameConfig::validate`].
    pub fn new(config: GameConfig) -> anyhow::Result<Self> {
        Self::with_rng(config, StdRng::from_rng(&mut rand::rng()))
    }

    /// Reproducible session, same seed gives the same spawns.
    pub fn with_seed(config: GameConfig, seed: u64) -> anyhow::Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> anyhow::Result<Self> {
        config.validate()?;
        let mut game = Self {
            player: Player::new(&config),
            languages: Vec::new(),
            spawn_timer: 0,
            powerup_count: 0,
            game_over: false,
            ticks: 0,
            rng,
            config,
        };
        for _ in 0..game.config.initial_spawns {
            game.spawn_language();
        }
        Ok(game)
    }

    pub fn spawn_language(&mut self) -> Language {
        let sprite = LanguageSprite::spawn(&self.config, &mut self.rng);
        let language = sprite.language;
        debug!("spawned {} at y={:.1}", language, sprite.pos.y);
        self.languages.push(sprite);
        language
    }

    /// Places a pre-built icon into the field, bypassing the spawn timer.
    pub fn insert_language(&mut self, sprite: LanguageSprite) {
        self.languages.push(sprite);
    }

    pub fn update(&mut self, input: FrameInput) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.game_over {
            return events;
        }
        self.ticks += 1;

        self.player.update(&self.config, input.jump);

        self.spawn_timer += 1;
        if self.spawn_timer > self.config.spawn_interval {
            let language = self.spawn_language();
            events.push(GameEvent::Spawned(language));
            self.spawn_timer = 0;
        }

        let mut i = 0;
        while i < self.languages.len() {
            let sprite = &mut self.languages[i];
            sprite.update();

            if sprite.escaped(&self.config) {
                events.push(GameEvent::Escaped(sprite.language));
                if self.config.recycle_escaped {
                    sprite.respawn(&self.config, &mut self.rng);
                    i += 1;
                } else {
                    self.languages.swap_remove(i);
                }
                continue;
            }

            if self.game_over || !sprite.collides(&self.player) {
                i += 1;
                continue;
            }

            let sprite = self.languages.swap_remove(i);
            events.push(self.resolve_collision(&sprite));
        }

        if self.game_over {
            events.push(GameEvent::GameOver {
                score: self.player.score,
            });
        }
        events
    }

    fn resolve_collision(&mut self, sprite: &LanguageSprite) -> GameEvent {
        if sprite.is_good() {
            self.player.score = self.player.score.saturating_add(self.config.score_increment);
            self.powerup_count = self.powerup_count.saturating_add(1);
            debug!("collected {}, score {}", sprite.language, self.player.score);
            GameEvent::Collected {
                language: sprite.language,
                score: self.player.score,
            }
        } else {
            self.player.lives = self.player.lives.saturating_sub(1);
            if self.player.lives == 0 {
                self.game_over = true;
                info!(
                    "game over after {} ticks with score {}",
                    self.ticks, self.player.score
                );
            }
            debug!("hit by {}, {} lives left", sprite.language, self.player.lives);
            GameEvent::Hit {
                language: sprite.language,
                lives: self.player.lives,
            }
        }
    }

    pub fn hud_lines(&self) -> [String; 3] {
        [
            format!("Score: {}", self.player.score),
            format!("Lives: {}", self.player.lives),
            format!("Powerups: {}", self.powerup_count),
        ]
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn languages(&self) -> &[LanguageSprite] {
        &self.languages
    }

    pub fn powerup_count(&self) -> u32 {
        self.powerup_count
    }

    pub fn spawn_timer(&self) -> u32 {
        self.spawn_timer
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    fn quiet_config() -> GameConfig {
        GameConfig {
            initial_spawns: 0,
            ..GameConfig::default()
        }
    }

    /// An icon sitting right on top of the player, not moving.
    fn on_player(game: &Game, language: Language) -> LanguageSprite {
        LanguageSprite::new(game.config(), language, game.player().pos, 0.0)
    }

    #[test]
    fn initial_spawns() {
        let game = Game::with_seed(GameConfig::default(), 1).unwrap();
        assert_eq!(game.languages().len(), 3);
        assert_eq!(game.spawn_timer(), 0);
        assert!(!game.is_game_over());
    }

    #[test]
    fn spawns_once_timer_exceeds_interval() {
        let mut game = Game::with_seed(quiet_config(), 1).unwrap();
        for _ in 0..120 {
            let events = game.update(FrameInput::default());
            assert!(!events.iter().any(|e| matches!(e, GameEvent::Spawned(_))));
        }
        let events = game.update(FrameInput::default());
        assert!(matches!(events[0], GameEvent::Spawned(_)));
        assert_eq!(game.spawn_timer(), 0);
        assert_eq!(game.languages().len(), 1);
    }

    #[test]
    fn good_collision_scores_and_counts_powerup() {
        let mut game = Game::with_seed(quiet_config(), 1).unwrap();
        let sprite = on_player(&game, Language::Rust);
        game.insert_language(sprite);
        let events = game.update(FrameInput::default());
        assert_eq!(
            events,
            vec![GameEvent::Collected {
                language: Language::Rust,
                score: 100
            }]
        );
        assert_eq!(game.player().score, 100);
        assert_eq!(game.powerup_count(), 1);
        assert!(game.languages().is_empty());
    }

    #[test]
    fn bad_collision_costs_a_life() {
        let mut game = Game::with_seed(quiet_config(), 1).unwrap();
        let sprite = on_player(&game, Language::Java);
        game.insert_language(sprite);
        let events = game.update(FrameInput::default());
        assert_eq!(
            events,
            vec![GameEvent::Hit {
                language: Language::Java,
                lives: 2
            }]
        );
        assert_eq!(game.player().score, 0);
        assert!(game.languages().is_empty());
    }

    #[test]
    fn last_life_ends_the_game() {
        let config = GameConfig {
            initial_lives: 1,
            ..quiet_config()
        };
        let mut game = Game::with_seed(config, 1).unwrap();
        let first = on_player(&game, Language::Lua);
        let second = on_player(&game, Language::Python);
        game.insert_language(first);
        game.insert_language(second);

        let events = game.update(FrameInput::default());
        assert!(game.is_game_over());
        assert_eq!(game.player().lives, 0);
        assert_eq!(events.last(), Some(&GameEvent::GameOver { score: 0 }));
        let hits = events
            .iter()
            .filter(|e| matches!(e, GameEvent::Hit { .. }))
            .count();
        assert_eq!(hits, 1, "no collisions resolve after the game ended");

        let frozen = game.player().clone();
        assert!(game.update(FrameInput { jump: true }).is_empty());
        assert_eq!(game.player(), &frozen);
        assert!(game.is_game_over());
    }

    #[test]
    fn escaped_icons_are_removed() {
        let mut game = Game::with_seed(quiet_config(), 1).unwrap();
        let sprite = LanguageSprite::new(game.config(), Language::Cpp, Vec2::new(-49.0, 100.0), -2.0);
        game.insert_language(sprite);
        let events = game.update(FrameInput::default());
        assert_eq!(events, vec![GameEvent::Escaped(Language::Cpp)]);
        assert!(game.languages().is_empty());
    }

    #[test]
    fn escaped_icons_recycle_when_enabled() {
        let config = GameConfig {
            recycle_escaped: true,
            ..quiet_config()
        };
        let mut game = Game::with_seed(config, 1).unwrap();
        let sprite = LanguageSprite::new(game.config(), Language::Cpp, Vec2::new(-49.0, 100.0), -2.0);
        game.insert_language(sprite);
        game.update(FrameInput::default());
        assert_eq!(game.languages().len(), 1);
        assert_eq!(game.languages()[0].pos.x, game.config().spawn_x());
    }

    #[test]
    fn far_icons_do_not_collide() {
        let mut game = Game::with_seed(quiet_config(), 1).unwrap();
        let pos = game.player().pos + Vec2::new(200.0, 0.0);
        let sprite = LanguageSprite::new(game.config(), Language::Java, pos, -1.0);
        game.insert_language(sprite);
        assert!(game.update(FrameInput::default()).is_empty());
        assert_eq!(game.player().lives, 3);
        assert_eq!(game.languages().len(), 1);
    }

    #[test]
    fn hud_lines() {
        let game = Game::with_seed(quiet_config(), 1).unwrap();
        assert_eq!(game.hud_lines(), ["Score: 0", "Lives: 3", "Powerups: 0"]);
    }

    #[test]
    fn rejects_config_without_lives() {
        let config = GameConfig {
            initial_lives: 0,
            ..GameConfig::default()
        };
        let err = Game::with_seed(config, 1).err().unwrap();
        assert!(err.to_string().contains("initial_lives"));
    }

    #[test]
    fn rejects_zero_width_canvas() {
        let config = GameConfig {
            canvas_width: 0.0,
            ..GameConfig::default()
        };
        assert!(Game::with_seed(config, 1).is_err());
        let config = GameConfig {
            canvas_width: 0.0,
            initial_spawns: 0,
            ..GameConfig::default()
        };
        assert!(Game::new(config).is_err());
    }

    #[test]
    fn powerup_count_saturates() {
        let mut game = Game::with_seed(quiet_config(), 1).unwrap();
        game.powerup_count = u32::MAX;
        let sprite = on_player(&game, Language::Kotlin);
        game.insert_language(sprite);
        game.update(FrameInput::default());
        assert_eq!(game.powerup_count(), u32::MAX);
        assert_eq!(game.player().score, 100);
    }

    #[test]
    fn same_seed_same_spawns() {
        let a = Game::with_seed(GameConfig::default(), 42).unwrap();
        let b = Game::with_seed(GameConfig::default(), 42).unwrap();
        assert_eq!(a.languages(), b.languages());
    }
}
