use std::collections::HashMap;
use std::path::{Path, PathBuf};

use bevy::asset::LoadState;
use bevy::prelude::*;
use bevy_kira_audio::prelude::{Audio, AudioControl, AudioPlugin, AudioSource};
use strum::IntoEnumIterator;
use thiserror::Error;
use tracing::warn;

use crate::core::SoundCue;

#[derive(Error, Debug)]
pub enum SoundLoadError {
    #[error("{} not found, run `generate_sounds` to create it", .0.display())]
    Missing(PathBuf),
    #[error("{path} could not be decoded: {reason}")]
    Undecodable { path: String, reason: String },
}

/// Handles for the sounds that were found. A cue without an entry stays silent.
#[derive(Resource, Default)]
pub struct SoundBank {
    handles: HashMap<SoundCue, Handle<AudioSource>>,
}

impl SoundBank {
    pub fn handle(&self, cue: SoundCue) -> Option<&Handle<AudioSource>> {
        self.handles.get(&cue)
    }

    /// Removes every sound that `failure` reports a decode error for and
    /// returns those errors. Dropped cues play nothing from then on.
    pub fn drop_failed(
        &mut self,
        failure: impl Fn(&Handle<AudioSource>) -> Option<String>,
    ) -> Vec<SoundLoadError> {
        let mut errors = Vec::new();
        self.handles.retain(|cue, handle| {
            let Some(reason) = failure(handle) else {
                return true;
            };
            errors.push(SoundLoadError::Undecodable {
                path: cue.asset().file_name().to_string(),
                reason,
            });
            false
        });
        errors
    }
}

pub struct SfxPlugin;

impl Plugin for SfxPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(AudioPlugin)
            .init_resource::<SoundBank>()
            .add_systems(Startup, load_sounds)
            .add_systems(Update, (drop_failed_sounds, play_sound_cues).chain());
    }
}

/// Checks that the file for `cue` exists under `root` and returns its path
/// relative to the asset directory.
pub fn locate_sound(root: &Path, cue: SoundCue) -> Result<&'static str, SoundLoadError> {
    let file_name = cue.asset().file_name();
    let path = root.join(file_name);
    if path.is_file() {
        Ok(file_name)
    } else {
        Err(SoundLoadError::Missing(path))
    }
}

fn load_sounds(asset_server: Res<AssetServer>, mut bank: ResMut<SoundBank>) {
    let root = game_helpers::asset_root();
    for cue in SoundCue::iter() {
        match locate_sound(&root, cue) {
            Ok(file_name) => {
                bank.handles.insert(cue, asset_server.load(file_name));
            }
            Err(err) => warn!("{cue} sound disabled: {err}"),
        }
    }
}

// Decode errors only surface once the asset server has tried the file
fn drop_failed_sounds(asset_server: Res<AssetServer>, mut bank: ResMut<SoundBank>) {
    let errors = bank.drop_failed(|handle| match asset_server.get_load_state(handle.id()) {
        Some(LoadState::Failed(error)) => Some(error.to_string()),
        _ => None,
    });
    for err in errors {
        warn!("sound disabled: {err}");
    }
}

fn play_sound_cues(
    mut cues: EventReader<SoundCue>,
    bank: Res<SoundBank>,
    audio: Res<Audio>,
) {
    for cue in cues.read() {
        if let Some(handle) = bank.handle(*cue) {
            audio.play(handle.clone());
        }
    }
}
