use std::env;
use std::path::PathBuf;

use anyhow::Context as _;
use log::info;

// The game's asset directory, next door in the workspace
const DEFAULT_OUT_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../space_catcher/assets");

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let out_dir = env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_OUT_DIR), PathBuf::from);

    let written = sfx_synth::generate_assets(&out_dir)
        .with_context(|| format!("generating sound assets into {}", out_dir.display()))?;

    info!(
        "{} sound assets generated in {}",
        written.len(),
        out_dir.display()
    );
    Ok(())
}
