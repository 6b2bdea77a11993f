//! Procedural sound effects for Space Catcher.
//!
//! Every effect is synthesized in full from a closed-form waveform and then
//! written as a mono 16-bit PCM WAV file at 44.1kHz.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use strum::{EnumIter, IntoEnumIterator};

mod error;
pub mod wav;
pub mod waveform;

pub use error::SynthError;
pub use wav::{WavHeader, parse_header, write_wav};
pub use waveform::{SAMPLE_RATE, noise, sweep, tone};

/// The effects the game expects to find in its asset directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum SoundAsset {
    /// Rising chime played when a supply is collected.
    Coin,
    /// Noise burst played when the ship hits a planet.
    Explosion,
    /// Short beep played on menu selection.
    Select,
}

impl SoundAsset {
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Coin => "coin.wav",
            Self::Explosion => "explosion.wav",
            Self::Select => "select.wav",
        }
    }

    pub fn render(self) -> Vec<i16> {
        match self {
            Self::Coin => sweep(),
            Self::Explosion => noise(0.5, 0.5),
            Self::Select => tone(660.0, 0.1, 0.5),
        }
    }
}

/// Writes every [`SoundAsset`] into `dir`, creating the directory first if needed.
///
/// Returns the written paths in generation order.
pub fn generate_assets(dir: &Path) -> Result<Vec<PathBuf>, SynthError> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| SynthError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    SoundAsset::iter()
        .map(|asset| {
            let path = dir.join(asset.file_name());
            let samples = asset.render();
            write_wav(&path, &samples)?;
            info!("Wrote {} ({} samples)", path.display(), samples.len());
            Ok(path)
        })
        .collect()
}
