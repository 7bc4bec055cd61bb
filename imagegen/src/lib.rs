//! Pre-renders the spinning sprite sheets used by the game: every language
//! icon is rotated through a full turn and the frames are laid out in a
//! single row.

use std::path::Path;

use anyhow::Context;
use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage};

use polyglot_jump_shared::AnimationSettings;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetSettings {
    pub frames: u32,
    pub frame_size: u32,
}

/// The sheets must match what the game animates, so the layout comes from
/// the game's animation settings.
impl From<&AnimationSettings> for SheetSettings {
    fn from(animation: &AnimationSettings) -> Self {
        Self {
            frames: animation.frames,
            frame_size: animation.frame_size,
        }
    }
}

impl Default for SheetSettings {
    fn default() -> Self {
        Self::from(&AnimationSettings::default())
    }
}

/// Rotates clockwise by `degrees` onto a transparent canvas grown to fit the
/// whole rotated image.
pub fn rotate_expanded(src: &RgbaImage, degrees: f32) -> RgbaImage {
    let (w, h) = (src.width() as f32, src.height() as f32);
    let (sin, cos) = degrees.to_radians().sin_cos();
    let out_w = (w * cos.abs() + h * sin.abs()).round().max(1.0) as u32;
    let out_h = (w * sin.abs() + h * cos.abs()).round().max(1.0) as u32;

    let (src_cx, src_cy) = (w / 2.0, h / 2.0);
    let (dst_cx, dst_cy) = (out_w as f32 / 2.0, out_h as f32 / 2.0);

    RgbaImage::from_fn(out_w, out_h, |x, y| {
        let dx = x as f32 + 0.5 - dst_cx;
        let dy = y as f32 + 0.5 - dst_cy;
        // inverse rotation back into source space
        let sx = dx * cos + dy * sin + src_cx - 0.5;
        let sy = -dx * sin + dy * cos + src_cy - 0.5;
        sample_bilinear(src, sx, sy)
    })
}

fn sample_bilinear(src: &RgbaImage, x: f32, y: f32) -> Rgba<u8> {
    let x0 = x.floor();
    let y0 = y.floor();
    let (fx, fy) = (x - x0, y - y0);
    let (x0, y0) = (x0 as i64, y0 as i64);

    let texel = |ix: i64, iy: i64| -> [f32; 4] {
        if ix < 0 || iy < 0 || ix >= src.width() as i64 || iy >= src.height() as i64 {
            return [0.0; 4];
        }
        let p = src.get_pixel(ix as u32, iy as u32).0;
        [p[0] as f32, p[1] as f32, p[2] as f32, p[3] as f32]
    };

    let (a, b) = (texel(x0, y0), texel(x0 + 1, y0));
    let (c, d) = (texel(x0, y0 + 1), texel(x0 + 1, y0 + 1));
    let mut out = [0u8; 4];
    for i in 0..4 {
        let top = a[i] + (b[i] - a[i]) * fx;
        let bottom = c[i] + (d[i] - c[i]) * fx;
        out[i] = (top + (bottom - top) * fy).round().clamp(0.0, 255.0) as u8;
    }
    if out[3] == 0 {
        return TRANSPARENT;
    }
    Rgba(out)
}

/// Builds the `frame_size * frames` by `frame_size` sheet for one icon.
pub fn build_sprite_sheet(icon: &DynamicImage, settings: SheetSettings) -> RgbaImage {
    let size = settings.frame_size;
    let frames = settings.frames.max(1);
    let icon = icon.to_rgba8();
    let mut sheet = RgbaImage::from_pixel(size * frames, size, TRANSPARENT);

    for i in 0..frames {
        let rotation = (i * 360) as f32 / frames as f32;
        let rotated = DynamicImage::ImageRgba8(rotate_expanded(&icon, rotation));
        let frame = rotated.resize_to_fill(size, size, FilterType::Lanczos3);
        imageops::overlay(&mut sheet, &frame.to_rgba8(), (i * size) as i64, 0);
    }
    sheet
}

/// Reads `input`, renders its sheet and writes it to `output`, creating the
/// parent directory when needed.
pub fn generate_sprite_sheet(
    input: &Path,
    output: &Path,
    settings: SheetSettings,
) -> anyhow::Result<()> {
    if let Some(dir) = output.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }

    let icon = image::open(input).with_context(|| format!("failed to open {}", input.display()))?;
    let sheet = build_sprite_sheet(&icon, settings);
    sheet
        .save(output)
        .with_context(|| format!("failed to write {}", output.display()))?;

    log::info!("Generated sprite sheet: {}", output.display());
    Ok(())
}
