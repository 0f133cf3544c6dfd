//! Game settings and preferences
//!
//! Host-side knobs (volumes, particle budget). JSON round-tripping is the
//! only fallible surface of the crate; where the host stores the string is
//! its own business.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_PARTICLES;

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effect volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Ambient track volume (0.0 - 1.0)
    pub music_volume: f32,
    pub muted: bool,
    /// Particle budget for lower-end hosts; clamped to the engine cap
    pub max_particles: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.3,
            muted: false,
            max_particles: MAX_PARTICLES,
        }
    }
}

impl Settings {
    /// Effective volume for a sound effect
    pub fn effective_sfx_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }

    /// Effective volume for the ambient track
    pub fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.music_volume).clamp(0.0, 1.0)
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parse settings, clamping out-of-range values instead of rejecting them
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.master_volume = settings.master_volume.clamp(0.0, 1.0);
        settings.sfx_volume = settings.sfx_volume.clamp(0.0, 1.0);
        settings.music_volume = settings.music_volume.clamp(0.0, 1.0);
        settings.max_particles = settings.max_particles.min(MAX_PARTICLES);
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip() {
        let settings = Settings {
            master_volume: 0.5,
            muted: true,
            ..Settings::default()
        };
        let json = settings.to_json().unwrap();
        let back = Settings::from_json(&json).unwrap();
        assert_eq!(back.master_volume, 0.5);
        assert!(back.muted);
    }

    #[test]
    fn from_json_clamps_out_of_range_values() {
        let json = r#"{"master_volume":7.0,"sfx_volume":-1.0,"music_volume":0.2,"muted":false,"max_particles":99999}"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.master_volume, 1.0);
        assert_eq!(settings.sfx_volume, 0.0);
        assert_eq!(settings.max_particles, MAX_PARTICLES);
    }

    #[test]
    fn muted_silences_everything() {
        let settings = Settings {
            muted: true,
            ..Settings::default()
        };
        assert_eq!(settings.effective_sfx_volume(), 0.0);
        assert_eq!(settings.effective_music_volume(), 0.0);
    }
}
