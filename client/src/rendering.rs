use std::collections::HashMap;

use ggez::{
    Context, GameResult,
    glam::Vec2,
    graphics::{self, Color, DrawParam, Image, Text, TextFragment},
};
use polyglot_jump_shared::{Body, Game, Language};

const PLAYER_IMAGE: &str = "/player/player.png";
const BACKGROUND: Color = Color {
    r: 51.0 / 255.0,
    g: 51.0 / 255.0,
    b: 51.0 / 255.0,
    a: 1.0,
};

pub struct Renderer {
    player: Image,
    sheets: HashMap<Language, Image>,
}

impl Renderer {
    /// Loads every image up front; a missing asset fails here rather than mid-game.
    pub fn new(ctx: &mut Context) -> GameResult<Self> {
        let player = Image::from_path(ctx, PLAYER_IMAGE)?;
        let mut sheets = HashMap::new();
        for lang in Language::ALL {
            sheets.insert(lang, Image::from_path(ctx, lang.sheet_path())?);
        }
        log::debug!("loaded player image and {} sprite sheets", sheets.len());
        Ok(Self { player, sheets })
    }

    pub fn draw(&self, ctx: &mut Context, game: &Game, show_debug: bool) -> GameResult {
        let mut canvas = graphics::Canvas::from_frame(ctx, BACKGROUND);

        for sprite in game.languages() {
            let Some(sheet) = self.sheets.get(&sprite.language) else {
                continue;
            };
            let [sx, sy, sw, sh] = sprite.animation.source_rect();
            let frame_w = sheet.width() as f32 / sprite.animation.frames() as f32;
            let scale = sprite.size() / frame_w;
            let half = sprite.size() * 0.5;
            canvas.draw(
                sheet,
                DrawParam::default()
                    .src(graphics::Rect::new(sx, sy, sw, sh))
                    .dest(Vec2::new(sprite.pos().x - half, sprite.pos().y - half))
                    .scale(Vec2::new(scale, sprite.size() / sheet.height() as f32)),
            );
        }

        let player = game.player();
        let half = player.size() * 0.5;
        canvas.draw(
            &self.player,
            DrawParam::default()
                .dest(Vec2::new(player.pos.x - half, player.pos.y - half))
                .scale(Vec2::new(
                    player.size() / self.player.width() as f32,
                    player.size() / self.player.height() as f32,
                )),
        );

        self.draw_hud(ctx, &mut canvas, game)?;
        if show_debug {
            draw_debug(ctx, &mut canvas, game);
        }

        canvas.finish(ctx)
    }

    fn draw_hud(&self, ctx: &mut Context, canvas: &mut graphics::Canvas, game: &Game) -> GameResult {
        let mut y = 30.0;
        for line in game.hud_lines() {
            let text = Text::new(TextFragment::new(line).color(Color::WHITE).scale(20.0));
            // ggez positions text by its top left corner, shift up to the baseline
            canvas.draw(&text, DrawParam::default().dest(Vec2::new(20.0, y - 20.0)));
            y += 30.0;
        }

        if game.is_game_over() {
            let config = game.config();
            let text = Text::new(TextFragment::new("Game Over!").color(Color::WHITE).scale(40.0));
            let dims = text.measure(ctx)?;
            let pos = Vec2::new(
                config.canvas_width / 2.0 - dims.x / 2.0,
                config.canvas_height / 2.0 - dims.y,
            );
            canvas.draw(&text, DrawParam::default().dest(pos).z(100));
        }
        Ok(())
    }
}

fn draw_debug(ctx: &Context, canvas: &mut graphics::Canvas, game: &Game) {
    let player = game.player();
    let lines = [
        format!("FPS: {:.2}", ctx.time.fps()),
        format!("Game over: {}", game.is_game_over()),
        format!(
            "Player Position: ({:.2}, {:.2})",
            player.pos.x, player.pos.y
        ),
        format!(
            "Player Velocity: ({:.2}, {:.2})",
            player.vel.x, player.vel.y
        ),
    ];

    let mut y = game.config().canvas_height - 4.0 - 14.0 * lines.len() as f32;
    for line in lines {
        let text = Text::new(
            TextFragment::new(line)
                .color(Color::from_rgb(180, 180, 220))
                .scale(14.0),
        );
        canvas.draw(&text, DrawParam::default().dest(Vec2::new(4.0, y)).z(100));
        y += 14.0;
    }
}
