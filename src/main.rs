//! Dodgefall headless demo host
//!
//! Runs the simulation at the fixed timestep with a small dodge autopilot
//! and logs what happens. Windowing, real rendering, and audio devices are
//! host concerns; this binary stands in for them with log output.

use log::LevelFilter;

use dodgefall::audio::{self, AudioBackend, NullAudio, SoundCue};
use dodgefall::consts::*;
use dodgefall::render;
use dodgefall::sim::{GamePhase, GameState, TickInput, tick};
use dodgefall::Settings;

/// Audio backend that logs cues instead of playing them
#[derive(Default)]
struct LogAudio {
    settings: Settings,
}

impl AudioBackend for LogAudio {
    fn play(&mut self, cue: SoundCue) {
        log::info!("audio: play {cue:?} (vol {:.2})", self.settings.effective_sfx_volume());
    }
    fn stop(&mut self, cue: SoundCue) {
        log::info!("audio: stop {cue:?}");
    }
    fn set_volume(&mut self, cue: SoundCue, level: f32) {
        log::info!("audio: volume {cue:?} -> {level:.2}");
    }
    fn loop_ambient(&mut self) {
        log::info!(
            "audio: ambient loop (vol {:.2})",
            self.settings.effective_music_volume()
        );
    }
}

/// Steer away from the nearest obstacle approaching the collision band,
/// drifting toward a power-up when nothing threatens
fn autopilot(state: &GameState) -> TickInput {
    let mut input = TickInput::default();

    let threat = state
        .obstacles
        .iter()
        .filter(|ob| ob.pos.y < 0.0 && ob.pos.y > COLLISION_BAND_BOTTOM)
        .min_by(|a, b| {
            let da = (a.pos.x - state.player.x).abs() + (a.pos.y - PLAYER_Y).abs();
            let db = (b.pos.x - state.player.x).abs() + (b.pos.y - PLAYER_Y).abs();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        });

    if let Some(ob) = threat {
        if (ob.pos.x - state.player.x).abs() < 0.25 {
            // Dodge toward the side with more room
            if ob.pos.x >= state.player.x {
                input.left = true;
            } else {
                input.right = true;
            }
            return input;
        }
    }

    if let Some(pu) = state.powerups.first() {
        if pu.pos.x < state.player.x - 0.02 {
            input.left = true;
        } else if pu.pos.x > state.player.x + 0.02 {
            input.right = true;
        }
    }
    input
}

fn main() {
    simple_logging::log_to_stderr(LevelFilter::Info);

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("dodgefall demo starting (seed {seed})");

    let settings = Settings::default();
    let mut state = GameState::new(seed);
    let mut audio = if std::env::var_os("DODGEFALL_SILENT").is_some() {
        Box::new(NullAudio) as Box<dyn AudioBackend>
    } else {
        Box::new(LogAudio {
            settings: settings.clone(),
        }) as Box<dyn AudioBackend>
    };

    // One start press, then let the autopilot fly for a minute of sim time
    let mut input = TickInput {
        start: true,
        ..TickInput::default()
    };
    let total_ticks = 60 * 60;

    for _ in 0..total_ticks {
        tick(&mut state, &input, SIM_DT);
        let events = state.drain_events();
        audio::route_events(&events, audio.as_mut());

        input = autopilot(&state);
        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    let frame = render::snapshot(&state, &settings);
    log::info!(
        "demo finished: phase {:?}, score {}, level {}, health {}, {} draw commands",
        frame.hud.phase,
        frame.hud.score,
        frame.hud.level,
        frame.hud.health,
        frame.entities.len()
    );
}
