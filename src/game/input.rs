//! Input Events and Phase Transitions
//!
//! Discrete input events and the pure transition function over session
//! phases. Input handling is decoupled from rendering: the transition
//! returns the next phase plus a side-effect descriptor, and the
//! session applies the effect.

use serde::{Deserialize, Serialize};

use crate::game::state::SessionPhase;

/// A discrete input event from the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Begin a run from the idle screen.
    Start,
    /// Flap impulse.
    Flap,
    /// Toggle pause.
    PauseToggle,
    /// Return to the idle screen after game over.
    Restart,
}

/// Side effect the session must apply alongside a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEffect {
    /// Reset the run state and spawn the first obstacle.
    ResetAndLaunch,
    /// Set the avatar's vertical velocity to the flap impulse.
    FlapImpulse,
    /// Re-initialize back to the start screen.
    ReturnToIdle,
}

/// Pure phase transition.
///
/// Any (phase, event) pair not listed is a no-op: flapping while
/// paused, restarting mid-run, and so on change nothing.
pub fn transition(phase: SessionPhase, event: InputEvent) -> (SessionPhase, Option<InputEffect>) {
    match (phase, event) {
        (SessionPhase::Idle, InputEvent::Start) => {
            (SessionPhase::Running, Some(InputEffect::ResetAndLaunch))
        }
        (SessionPhase::Running, InputEvent::Flap) => {
            (SessionPhase::Running, Some(InputEffect::FlapImpulse))
        }
        (SessionPhase::Running, InputEvent::PauseToggle) => (SessionPhase::Paused, None),
        (SessionPhase::Paused, InputEvent::PauseToggle) => (SessionPhase::Running, None),
        (SessionPhase::Over, InputEvent::Restart) => {
            (SessionPhase::Idle, Some(InputEffect::ReturnToIdle))
        }
        (phase, _) => (phase, None),
    }
}

/// Map a pointer press to the event it means in the current phase.
///
/// Clicks start from idle and flap mid-run; they do nothing while
/// paused or on the game-over screen (restart is an explicit event).
pub fn pointer_event(phase: SessionPhase) -> Option<InputEvent> {
    match phase {
        SessionPhase::Idle => Some(InputEvent::Start),
        SessionPhase::Running => Some(InputEvent::Flap),
        SessionPhase::Paused | SessionPhase::Over => None,
    }
}
