//! Simulation core of polyglot-jump: a player hops over scrolling language
//! icons, collecting the good ones and losing lives to the bad ones.
//!
//! Everything here is deterministic given a seed and free of any windowing
//! or rendering concerns, the client crate drives it once per frame.

pub mod config;
pub mod game;
pub mod language;
pub mod physics;
pub mod player;
pub mod sprite;

pub use config::{AnimationSettings, GameConfig};
pub use game::{FrameInput, Game, GameEvent};
pub use language::{Category, Language, BAD_LANGUAGES, GOOD_LANGUAGES};
pub use physics::{Body, Hitbox};
pub use player::Player;
pub use sprite::{LanguageSprite, SpinAnimation};
