//! Game Events
//!
//! Events generated during simulation, drained once per frame. The
//! host uses them for sound cues, score popups, and persistence; tests
//! use them to assert replay equality.

use serde::{Deserialize, Serialize};

use crate::game::powerup::PowerUpKind;
use crate::game::state::SessionPhase;

/// Audio cue descriptor. Playback is the host's concern; the core only
/// names which sample an event maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    /// Flap impulse applied.
    Flap,
    /// Score gained (pass or pickup).
    Score,
    /// Terminal collision.
    Hit,
}

/// Game event data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEventData {
    /// A run was (re)started from the idle screen.
    SessionStarted,

    /// Flap impulse applied to the avatar.
    Flapped,

    /// Avatar cleared an obstacle column.
    ObstaclePassed {
        /// Score after the pass.
        score: u32,
    },

    /// A milestone power-up entered the field.
    PowerUpSpawned {
        /// Which pickup.
        kind: PowerUpKind,
        /// Spawn x.
        x: f32,
        /// Spawn y.
        y: f32,
    },

    /// Avatar collected a power-up.
    PowerUpCollected {
        /// Which pickup.
        kind: PowerUpKind,
        /// Score after the bonus.
        score: u32,
    },

    /// Session ended on a terminal collision.
    SessionOver {
        /// Final score.
        score: u32,
        /// Best score for this location after the run.
        best: u32,
        /// Whether this run improved the best.
        new_best: bool,
    },

    /// Session phase changed.
    PhaseChanged {
        /// Phase before.
        from: SessionPhase,
        /// Phase after.
        to: SessionPhase,
    },
}

impl GameEventData {
    /// Which sound cue this event maps to, if any.
    pub fn sound_cue(&self) -> Option<SoundCue> {
        match self {
            GameEventData::Flapped => Some(SoundCue::Flap),
            GameEventData::ObstaclePassed { .. } => Some(SoundCue::Score),
            GameEventData::PowerUpCollected { .. } => Some(SoundCue::Score),
            GameEventData::SessionOver { .. } => Some(SoundCue::Hit),
            _ => None,
        }
    }
}

/// A game event stamped with the frame it occurred on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Frame counter at the time of the event.
    pub frame: u64,

    /// Event data.
    pub data: GameEventData,
}

impl GameEvent {
    /// Create a new event.
    pub fn new(frame: u64, data: GameEventData) -> Self {
        Self { frame, data }
    }

    /// Create a session-started event.
    pub fn session_started(frame: u64) -> Self {
        Self::new(frame, GameEventData::SessionStarted)
    }

    /// Create a flapped event.
    pub fn flapped(frame: u64) -> Self {
        Self::new(frame, GameEventData::Flapped)
    }

    /// Create an obstacle-passed event.
    pub fn obstacle_passed(frame: u64, score: u32) -> Self {
        Self::new(frame, GameEventData::ObstaclePassed { score })
    }

    /// Create a power-up-spawned event.
    pub fn powerup_spawned(frame: u64, kind: PowerUpKind, x: f32, y: f32) -> Self {
        Self::new(frame, GameEventData::PowerUpSpawned { kind, x, y })
    }

    /// Create a power-up-collected event.
    pub fn powerup_collected(frame: u64, kind: PowerUpKind, score: u32) -> Self {
        Self::new(frame, GameEventData::PowerUpCollected { kind, score })
    }

    /// Create a session-over event.
    pub fn session_over(frame: u64, score: u32, best: u32, new_best: bool) -> Self {
        Self::new(frame, GameEventData::SessionOver { score, best, new_best })
    }

    /// Create a phase-changed event.
    pub fn phase_changed(frame: u64, from: SessionPhase, to: SessionPhase) -> Self {
        Self::new(frame, GameEventData::PhaseChanged { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sound_cues() {
        assert_eq!(GameEvent::flapped(1).data.sound_cue(), Some(SoundCue::Flap));
        assert_eq!(
            GameEvent::obstacle_passed(1, 1).data.sound_cue(),
            Some(SoundCue::Score)
        );
        assert_eq!(
            GameEvent::powerup_collected(1, PowerUpKind::Umbrella, 15)
                .data
                .sound_cue(),
            Some(SoundCue::Score)
        );
        assert_eq!(
            GameEvent::session_over(1, 3, 7, false).data.sound_cue(),
            Some(SoundCue::Hit)
        );
        assert_eq!(GameEvent::session_started(1).data.sound_cue(), None);
    }

    #[test]
    fn test_event_roundtrip() {
        let event = GameEvent::powerup_spawned(42, PowerUpKind::Sunglasses, 480.0, 200.0);
        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
