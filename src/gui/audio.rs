use crate::config::SoundConfig;
use crate::selection::AudioCue;
use gtk::prelude::*;
use gtk4 as gtk;
use std::collections::HashMap;
use strum::IntoEnumIterator;

/// Navigation sounds, one media stream per cue.
#[derive(Default)]
pub struct CuePlayer {
    streams: HashMap<AudioCue, gtk::MediaFile>,
}

impl CuePlayer {
    pub fn from_config(sounds: &SoundConfig) -> Self {
        let streams = AudioCue::iter()
            .filter_map(|cue| {
                let path = sounds.path(cue)?;
                if !path.exists() {
                    log::warn!("Sound for {} not found at {}", cue, path.display());
                    return None;
                }
                Some((cue, gtk::MediaFile::for_filename(path)))
            })
            .collect();
        Self { streams }
    }

    /// Plays `cue` from the start, cutting off a previous run of the same cue.
    pub fn play(&self, cue: AudioCue) {
        if let Some(stream) = self.streams.get(&cue) {
            if stream.is_playing() {
                stream.pause();
            }
            stream.seek(0);
            stream.play();
        }
    }
}
