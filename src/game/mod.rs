//! Game Logic Module
//!
//! The per-frame state machine. Deterministic given the session seed
//! and the input script; the weather layer feeds it validated data and
//! the host renders whatever it emits.
//!
//! ## Module Structure
//!
//! - `input`: input events and the pure phase-transition function
//! - `state`: avatar, phase machine, session state
//! - `tick`: the per-frame update loop
//! - `collision`: pure collision predicates
//! - `obstacle`: obstacle column track
//! - `powerup`: milestone power-up track
//! - `background`: decorative particle animation
//! - `events`: game events and sound cues

pub mod background;
pub mod collision;
pub mod events;
pub mod input;
pub mod obstacle;
pub mod powerup;
pub mod state;
pub mod tick;

// Re-export key types
pub use background::BackgroundAnimator;
pub use events::{GameEvent, GameEventData, SoundCue};
pub use input::{pointer_event, transition, InputEffect, InputEvent};
pub use obstacle::{Obstacle, ObstacleTrack};
pub use powerup::{PowerUp, PowerUpKind, PowerUpTrack};
pub use state::{Avatar, GameSession, SessionConfig, SessionPhase, SessionSetup};
pub use tick::{frame, FrameResult};
