//! Sound cue routing
//!
//! The core never touches audio devices or buffers. It emits `GameEvent`s;
//! this module maps them onto cue calls against whatever backend the host
//! provides.

use crate::sim::GameEvent;

/// Sound effect and track identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Player took damage
    Collision,
    /// Power-up collected
    Pickup,
    /// Shield absorbed a hit
    ShieldBreak,
    LevelUp,
    GameOver,
    /// Looping background track
    Ambient,
}

/// Host-provided audio sink. Implementations own devices, buffers, and
/// mixing; the core only issues cue calls.
pub trait AudioBackend {
    fn play(&mut self, cue: SoundCue);
    fn stop(&mut self, cue: SoundCue);
    fn set_volume(&mut self, cue: SoundCue, level: f32);
    /// Start (or restart) the looping ambient track
    fn loop_ambient(&mut self);
}

/// Backend that discards every cue. Useful for tests and headless runs;
/// also the living proof that audio failure cannot affect the simulation.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioBackend for NullAudio {
    fn play(&mut self, _cue: SoundCue) {}
    fn stop(&mut self, _cue: SoundCue) {}
    fn set_volume(&mut self, _cue: SoundCue, _level: f32) {}
    fn loop_ambient(&mut self) {}
}

/// Map one frame's drained events onto backend cue calls
pub fn route_events(events: &[GameEvent], audio: &mut dyn AudioBackend) {
    for event in events {
        match event {
            GameEvent::Started => audio.loop_ambient(),
            GameEvent::Paused => audio.stop(SoundCue::Ambient),
            GameEvent::Resumed => audio.loop_ambient(),
            GameEvent::Collision => audio.play(SoundCue::Collision),
            GameEvent::ShieldBroken => audio.play(SoundCue::ShieldBreak),
            GameEvent::PickupCollected(_) => audio.play(SoundCue::Pickup),
            GameEvent::LevelUp(_) => audio.play(SoundCue::LevelUp),
            GameEvent::GameOver => {
                audio.stop(SoundCue::Ambient);
                audio.play(SoundCue::GameOver);
            }
        }
    }
}
