use log::warn;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source, source::Buffered};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

const FIRE_SOUND: &str = "assets/sounds/missile_fire.wav";
const EXPLOSION_SOUND: &str = "assets/sounds/explosion.wav";
const GAME_OVER_SOUND: &str = "assets/sounds/game_over.wav";
const MUSIC: &str = "assets/sounds/background_music.ogg";
const MUSIC_VOLUME: f32 = 0.5;

type Cue = Buffered<Decoder<BufReader<File>>>;

/// Fire-and-forget audio cues. Every failure mode (missing file, no output
/// device) degrades to a logged no-op; playback never affects gameplay.
pub struct AudioManager {
    output: Option<(OutputStream, OutputStreamHandle)>,
    fire_sound: Option<Cue>,
    explosion_sound: Option<Cue>,
    game_over_sound: Option<Cue>,
    /// Keeps the looping background music alive for the process lifetime.
    _music_sink: Option<Sink>,
}

impl AudioManager {
    /// Opens the default output device and pre-buffers the cue files.
    pub fn new() -> Self {
        let output = match OutputStream::try_default() {
            Ok(pair) => Some(pair),
            Err(err) => {
                warn!("audio device unavailable, continuing silent: {err}");
                None
            }
        };

        let fire_sound = load_cue(FIRE_SOUND);
        let explosion_sound = load_cue(EXPLOSION_SOUND);
        let game_over_sound = load_cue(GAME_OVER_SOUND);

        let music_sink = output
            .as_ref()
            .and_then(|(_, handle)| start_music(handle, MUSIC));

        Self {
            output,
            fire_sound,
            explosion_sound,
            game_over_sound,
            _music_sink: music_sink,
        }
    }

    pub fn play_fire(&self) {
        self.play(&self.fire_sound);
    }

    pub fn play_explosion(&self) {
        self.play(&self.explosion_sound);
    }

    pub fn play_game_over(&self) {
        self.play(&self.game_over_sound);
    }

    fn play(&self, cue: &Option<Cue>) {
        let (Some((_, handle)), Some(cue)) = (self.output.as_ref(), cue) else {
            return;
        };
        // Playback errors are swallowed; a dropped cue must not stop the game.
        if let Ok(sink) = Sink::try_new(handle) {
            sink.append(cue.clone());
            sink.detach();
        }
    }
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

fn load_cue(path: &str) -> Option<Cue> {
    let result = File::open(path)
        .map_err(|e| e.to_string())
        .and_then(|file| Decoder::new(BufReader::new(file)).map_err(|e| e.to_string()));
    match result {
        Ok(source) => Some(source.buffered()),
        Err(err) => {
            warn!("failed to load sound {path}: {err}");
            None
        }
    }
}

fn start_music(handle: &OutputStreamHandle, path: &str) -> Option<Sink> {
    if !Path::new(path).exists() {
        warn!("background music {path} not found, continuing without music");
        return None;
    }
    let file = match File::open(path) {
        Ok(f) => f,
        Err(err) => {
            warn!("failed to open music {path}: {err}");
            return None;
        }
    };
    let source = match Decoder::new(BufReader::new(file)) {
        Ok(s) => s,
        Err(err) => {
            warn!("failed to decode music {path}: {err}");
            return None;
        }
    };
    let sink = Sink::try_new(handle).ok()?;
    sink.set_volume(MUSIC_VOLUME);
    sink.append(source.repeat_infinite());
    Some(sink)
}
