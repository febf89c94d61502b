use std::marker::PhantomData;
use std::path::Path;

use log::{debug, info};
use sdl2::mixer::{self, InitFlag, Music, Sdl2MixerContext};
use sdl2::AudioSubsystem;

use crate::error::{BackendError, Result};

const CHANNELS: i32 = 2;
const CHUNK_SIZE: i32 = 640;

/// Decoders requested from the mixer. Opus is left out: `Mix_Init` fails as a
/// whole when the linked SDL_mixer was built without it, and the shot is OGG.
pub fn decoders() -> InitFlag {
    InitFlag::OGG | InitFlag::MP3
}

/// The opened mixing device. Closing the device happens before the mixer
/// and the audio subsystem are released.
pub struct Audio {
    _mixer: Sdl2MixerContext,
    _subsystem: AudioSubsystem,
}

impl Audio {
    pub(crate) fn open(sdl: &sdl2::Sdl) -> Result<Audio> {
        let subsystem = sdl.audio().map_err(|e| BackendError::init("audio", e))?;

        let mixer = mixer::init(decoders())
            .map_err(|e| BackendError::init("mixer", e))?;
        mixer::open_audio(mixer::DEFAULT_FREQUENCY, mixer::AUDIO_S16SYS, CHANNELS, CHUNK_SIZE)
            .map_err(|e| BackendError::init("mixer device", e))?;
        info!(
            "audio device open: {} Hz, {CHANNELS} channels",
            mixer::DEFAULT_FREQUENCY
        );

        Ok(Audio {
            _mixer: mixer,
            _subsystem: subsystem,
        })
    }

    pub fn load_sound(&self, path: &Path) -> Result<Sound<'_>> {
        let music = Music::from_file(path).map_err(|e| BackendError::asset(path, e))?;
        debug!("loaded sound {path:?}");
        Ok(Sound {
            music,
            _audio: PhantomData,
        })
    }
}

impl Drop for Audio {
    fn drop(&mut self) {
        mixer::close_audio();
    }
}

/// A sound effect bound to the device it was loaded for.
pub struct Sound<'a> {
    music: Music<'static>,
    _audio: PhantomData<&'a Audio>,
}

impl Sound<'_> {
    /// Starts playback once and returns immediately. A play request while the
    /// effect is still sounding restarts it.
    pub fn play(&self) -> Result<()> {
        self.music.play(1).map_err(BackendError::Audio)
    }
}
