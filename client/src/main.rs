use std::path::{Path, PathBuf};

use ggez::event::{self, EventHandler};
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::winit::keyboard::PhysicalKey;
use ggez::{Context, ContextBuilder, GameError, GameResult};
use polyglot_jump_shared::{Game, GameConfig, GameEvent};

mod input;
mod rendering;

use input::InputState;
use rendering::Renderer;

const DEFAULT_CONFIG_PATH: &str = "game_config.json";

struct MainState {
    game: Game,
    input: InputState,
    renderer: Renderer,
    show_debug: bool,
}

impl MainState {
    fn new(ctx: &mut Context, config: GameConfig) -> GameResult<Self> {
        Ok(Self {
            game: Game::new(config).map_err(|e| GameError::CustomError(format!("{e:#}")))?,
            input: InputState::default(),
            renderer: Renderer::new(ctx)?,
            show_debug: cfg!(debug_assertions),
        })
    }
}

impl EventHandler for MainState {
    fn update(&mut self, _ctx: &mut Context) -> GameResult {
        let input = self.input.consume();
        for event in self.game.update(input) {
            match event {
                GameEvent::GameOver { score } => log::info!("game over, final score {score}"),
                GameEvent::Hit { language, lives } => {
                    log::info!("hit by {language}, {lives} lives left")
                }
                GameEvent::Collected { language, score } => {
                    log::info!("collected {language}, score {score}")
                }
                GameEvent::Spawned(language) => log::trace!("spawned {language}"),
                GameEvent::Escaped(language) => log::trace!("{language} escaped"),
            }
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        self.renderer.draw(ctx, &self.game, self.show_debug)
    }

    fn key_down_event(
        &mut self,
        _ctx: &mut Context,
        input: KeyInput,
        repeat: bool,
    ) -> Result<(), GameError> {
        if let PhysicalKey::Code(keycode) = input.event.physical_key {
            if keycode == KeyCode::F3 && !repeat {
                self.show_debug = !self.show_debug;
            }
            self.input.process_key_down(keycode, repeat);
        }
        Ok(())
    }
}

/// Explicit path from the command line, else `default_path` if present,
/// else the built-in defaults.
fn load_config(arg: Option<String>, default_path: &Path) -> anyhow::Result<GameConfig> {
    match arg {
        Some(path) => GameConfig::load(path),
        None if default_path.exists() => GameConfig::load(default_path),
        None => Ok(GameConfig::default()),
    }
}

pub fn main() -> GameResult {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config(std::env::args().nth(1), Path::new(DEFAULT_CONFIG_PATH))
        .map_err(|e| GameError::CustomError(format!("{e:#}")))?;
    log::info!(
        "starting {}x{} with {} lives",
        config.canvas_width,
        config.canvas_height,
        config.initial_lives
    );

    let assets = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets");

    let (mut ctx, event_loop) = ContextBuilder::new("polyglot_jump", "polyglot-jump")
        .window_setup(ggez::conf::WindowSetup::default().title("Polyglot Jump"))
        .window_mode(
            ggez::conf::WindowMode::default().dimensions(config.canvas_width, config.canvas_height),
        )
        .add_resource_path(assets)
        .build()?;

    let state = MainState::new(&mut ctx, config)?;
    event::run(ctx, event_loop, state)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("polyglot-client-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn explicit_path_wins_over_default_file() {
        let dir = scratch_dir("explicit");
        let explicit = dir.join("custom.json");
        let default = dir.join("game_config.json");
        fs::write(&explicit, r#"{ "initial_lives": 7 }"#).unwrap();
        fs::write(&default, r#"{ "initial_lives": 5 }"#).unwrap();

        let config = load_config(Some(explicit.display().to_string()), &default).unwrap();
        assert_eq!(config.initial_lives, 7);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn default_file_used_when_present() {
        let dir = scratch_dir("default");
        let default = dir.join("game_config.json");
        fs::write(&default, r#"{ "initial_lives": 5 }"#).unwrap();

        let config = load_config(None, &default).unwrap();
        assert_eq!(config.initial_lives, 5);
        assert_eq!(config.canvas_width, GameConfig::default().canvas_width);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn builtin_defaults_without_any_file() {
        let dir = scratch_dir("none");
        let config = load_config(None, &dir.join("game_config.json")).unwrap();
        assert_eq!(config, GameConfig::default());
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let dir = scratch_dir("missing");
        let missing = dir.join("nope.json");
        let err = load_config(Some(missing.display().to_string()), &dir.join("game_config.json"))
            .unwrap_err();
        assert!(format!("{err:#}").contains("nope.json"));
        fs::remove_dir_all(dir).unwrap();
    }
}
