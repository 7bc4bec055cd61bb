use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context};
use polyglot_jump_imagegen::{generate_sprite_sheet, SheetSettings};
use polyglot_jump_shared::Language;

const DEFAULT_SOURCE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/source");
/// The client's resource root is `client/assets`, sheets go under `languages/` there.
const DEFAULT_OUTPUT_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../client/assets/languages");

const USAGE: &str = "Usage: imagegen [<source_dir> <output_dir> [frames]]";

/// `args` includes the program name, as returned by `env::args`.
fn parse_args(args: &[String]) -> anyhow::Result<(PathBuf, PathBuf, SheetSettings)> {
    match args.len() {
        0 | 1 => Ok((
            PathBuf::from(DEFAULT_SOURCE_DIR),
            PathBuf::from(DEFAULT_OUTPUT_DIR),
            SheetSettings::default(),
        )),
        3 | 4 => {
            let frames = match args.get(3) {
                Some(n) => n
                    .parse()
                    .with_context(|| format!("frame count must be a number, got {n:?}"))?,
                None => SheetSettings::default().frames,
            };
            if frames == 0 {
                bail!("frame count must be at least 1");
            }
            Ok((
                PathBuf::from(&args[1]),
                PathBuf::from(&args[2]),
                SheetSettings {
                    frames,
                    ..SheetSettings::default()
                },
            ))
        }
        _ => bail!(USAGE),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let (source_dir, out_dir, settings) = parse_args(&args)?;

    let mut failed = 0;
    for lang in Language::ALL {
        let input = source_dir.join(format!("{}.png", lang.name()));
        let output = out_dir.join(format!("{}-sheet.png", lang.name()));
        if let Err(e) = generate_sprite_sheet(&input, &output, settings) {
            log::error!("{lang}: {e:#}");
            failed += 1;
        }
    }

    if failed > 0 {
        bail!("{failed} of {} sprite sheets failed", Language::ALL.len());
    }
    Ok(())
}
