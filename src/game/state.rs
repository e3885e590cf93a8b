//! Game State Definitions
//!
//! The avatar, the session phase machine, and the authoritative
//! per-session state. `GameSession` is an explicit value the host
//! passes to the frame loop; nothing lives at process scope, so the
//! whole state machine unit-tests without a rendering surface.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::rng::SessionRng;
use crate::core::units::{FIELD_HEIGHT, FLAP_VELOCITY, GRAVITY};
use crate::game::background::BackgroundAnimator;
use crate::game::events::GameEvent;
use crate::game::input::{transition, InputEffect, InputEvent};
use crate::game::obstacle::ObstacleTrack;
use crate::game::powerup::PowerUpTrack;
use crate::weather::difficulty::Difficulty;
use crate::weather::observation::WeatherObservation;
use crate::weather::theme::Theme;

/// Salt separating the decorative RNG stream from the gameplay stream.
const BACKDROP_STREAM_SALT: u64 = 0xB0DE_CAFE_0BAD_F00D;

/// The player avatar. Horizontal position and radius are fixed
/// constants; only the vertical state changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    /// Vertical center position.
    pub y: f32,
    /// Vertical velocity, positive downward.
    pub vertical_velocity: f32,
}

impl Avatar {
    /// Avatar at vertical mid-field with zero velocity.
    pub fn centered() -> Self {
        Self {
            y: FIELD_HEIGHT / 2.0,
            vertical_velocity: 0.0,
        }
    }
}

/// Session lifecycle phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Pre-start, showing instructions and the location's best score.
    #[default]
    Idle,
    /// Frame loop active.
    Running,
    /// Frame loop halted entirely; only a paused overlay is shown.
    Paused,
    /// Terminal collision happened; state is frozen for the overlay.
    Over,
}

/// Tunables for a session.
pub struct SessionConfig {
    /// Downward acceleration per frame.
    pub gravity: f32,
    /// Velocity set by a flap (negative = upward).
    pub flap_velocity: f32,
    /// Points per obstacle passed.
    pub points_per_pass: u32,
    /// Bonus points per power-up collected.
    pub powerup_bonus: u32,
    /// Score milestone interval for power-up spawns.
    pub powerup_interval: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            flap_velocity: FLAP_VELOCITY,
            points_per_pass: 1,
            powerup_bonus: 5,
            powerup_interval: 10,
        }
    }
}

/// Everything a completed weather setup hands to a new session.
pub struct SessionSetup {
    /// Theme classified from the observation.
    pub theme: Theme,
    /// The observation itself (for the on-screen summary).
    pub observation: WeatherObservation,
    /// Location label; doubles as the leaderboard key.
    pub location_label: String,
    /// Best score previously recorded for this location.
    pub best_score: u32,
    /// Session RNG seed.
    pub seed: u64,
}

/// Authoritative per-session state.
pub struct GameSession {
    /// Session tunables.
    pub config: SessionConfig,

    /// Current lifecycle phase.
    pub phase: SessionPhase,

    /// The avatar.
    pub avatar: Avatar,

    /// Current score. Monotonically non-decreasing while running.
    pub score: u32,

    /// Frames elapsed in the current run.
    pub frame: u64,

    /// Theme for this session; immutable until the weather is re-fetched.
    pub theme: Theme,

    /// Difficulty derived from the theme.
    pub difficulty: Difficulty,

    /// Location label shown on overlays and used as the leaderboard key.
    pub location_label: String,

    /// One-line weather summary shown alongside the score.
    pub weather_summary: String,

    /// Best score for this location, updated in place on game over.
    pub best_score: u32,

    /// Gameplay RNG stream.
    pub rng: SessionRng,

    /// Scrolling obstacle columns.
    pub obstacles: ObstacleTrack,

    /// Active power-ups.
    pub powerups: PowerUpTrack,

    /// Decorative layer.
    pub backdrop: BackgroundAnimator,

    /// Events generated since the last drain.
    pub pending_events: Vec<GameEvent>,
}

impl GameSession {
    /// Create a session in the idle phase from a completed weather
    /// setup, with default tunables.
    pub fn new(setup: SessionSetup) -> Self {
        Self::with_config(setup, SessionConfig::default())
    }

    /// Create a session with explicit tunables.
    pub fn with_config(setup: SessionSetup, config: SessionConfig) -> Self {
        let difficulty = Difficulty::for_theme(setup.theme);
        let backdrop = BackgroundAnimator::for_theme(
            setup.theme,
            SessionRng::new(setup.seed ^ BACKDROP_STREAM_SALT),
        );

        Self {
            config,
            phase: SessionPhase::Idle,
            avatar: Avatar::centered(),
            score: 0,
            frame: 0,
            theme: setup.theme,
            difficulty,
            location_label: setup.location_label,
            weather_summary: setup.observation.summary(),
            best_score: setup.best_score,
            rng: SessionRng::new(setup.seed),
            obstacles: ObstacleTrack::new(difficulty.gap_height),
            powerups: PowerUpTrack::new(),
            backdrop,
            pending_events: Vec::new(),
        }
    }

    /// Apply one input event: run the pure transition, then the effect.
    pub fn handle_input(&mut self, event: InputEvent) {
        let (next, effect) = transition(self.phase, event);

        if next != self.phase {
            debug!(from = ?self.phase, to = ?next, "phase transition");
            self.push_event(GameEvent::phase_changed(self.frame, self.phase, next));
        }
        self.phase = next;

        match effect {
            Some(InputEffect::ResetAndLaunch) => {
                self.reset_run();
                self.obstacles.spawn(&mut self.rng);
                self.push_event(GameEvent::session_started(self.frame));
            }
            Some(InputEffect::FlapImpulse) => {
                // Impulse overrides the current velocity, it never accumulates
                self.avatar.vertical_velocity = self.config.flap_velocity;
                self.push_event(GameEvent::flapped(self.frame));
            }
            Some(InputEffect::ReturnToIdle) => {
                self.reset_run();
            }
            None => {}
        }
    }

    /// Reset the run state: centered avatar, zero score, empty tracks.
    /// Pending events survive the reset; the next drain delivers them.
    fn reset_run(&mut self) {
        self.avatar = Avatar::centered();
        self.score = 0;
        self.frame = 0;
        self.obstacles.clear();
        self.powerups.clear();
    }

    /// Take pending events (consumes them).
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Push a game event.
    pub fn push_event(&mut self, event: GameEvent) {
        self.pending_events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(theme: Theme) -> SessionSetup {
        SessionSetup {
            theme,
            observation: WeatherObservation {
                condition: "Clear".to_string(),
                temperature_c: 18.0,
                humidity_pct: 50.0,
                local_hour: 12,
            },
            location_label: "London".to_string(),
            best_score: 12,
            seed: 2024,
        }
    }

    #[test]
    fn test_new_session_is_idle_and_centered() {
        let session = GameSession::new(setup(Theme::Clear));

        assert_eq!(session.phase, SessionPhase::Idle);
        assert_eq!(session.avatar, Avatar::centered());
        assert_eq!(session.score, 0);
        assert_eq!(session.best_score, 12);
        assert!(session.obstacles.is_empty());
        assert!(session.powerups.is_empty());
        assert_eq!(session.difficulty, Difficulty::for_theme(Theme::Clear));
    }

    #[test]
    fn test_start_resets_and_spawns_first_obstacle() {
        let mut session = GameSession::new(setup(Theme::Rain));
        session.handle_input(InputEvent::Start);

        assert_eq!(session.phase, SessionPhase::Running);
        assert_eq!(session.obstacles.len(), 1);
        assert_eq!(session.avatar, Avatar::centered());
        assert_eq!(session.score, 0);

        let events = session.take_events();
        assert!(events
            .iter()
            .any(|e| matches!(e.data, crate::game::events::GameEventData::SessionStarted)));
    }

    #[test]
    fn test_flap_overrides_velocity() {
        let mut session = GameSession::new(setup(Theme::Clear));
        session.handle_input(InputEvent::Start);

        session.avatar.vertical_velocity = 5.5;
        session.handle_input(InputEvent::Flap);
        assert_eq!(session.avatar.vertical_velocity, FLAP_VELOCITY);

        // Flapping again sets, not accumulates
        session.handle_input(InputEvent::Flap);
        assert_eq!(session.avatar.vertical_velocity, FLAP_VELOCITY);
    }

    #[test]
    fn test_pause_roundtrip() {
        let mut session = GameSession::new(setup(Theme::Clear));
        session.handle_input(InputEvent::Start);

        session.handle_input(InputEvent::PauseToggle);
        assert_eq!(session.phase, SessionPhase::Paused);
        session.handle_input(InputEvent::PauseToggle);
        assert_eq!(session.phase, SessionPhase::Running);
    }

    #[test]
    fn test_restart_only_from_over() {
        let mut session = GameSession::new(setup(Theme::Clear));
        session.handle_input(InputEvent::Restart);
        assert_eq!(session.phase, SessionPhase::Idle);

        session.phase = SessionPhase::Over;
        session.score = 9;
        session.handle_input(InputEvent::Restart);
        assert_eq!(session.phase, SessionPhase::Idle);
        assert_eq!(session.score, 0);
        assert!(session.obstacles.is_empty());
    }

    #[test]
    fn test_backdrop_matches_theme() {
        let session = GameSession::new(setup(Theme::Night));
        assert_eq!(session.backdrop.theme, Theme::Night);
        assert_eq!(session.backdrop.stars.len(), crate::game::background::STAR_COUNT);
    }

    #[test]
    fn test_same_setup_same_session() {
        let a = GameSession::new(setup(Theme::Rain));
        let b = GameSession::new(setup(Theme::Rain));
        assert_eq!(a.rng.state(), b.rng.state());
        assert_eq!(a.backdrop.raindrops, b.backdrop.raindrops);
    }
}
