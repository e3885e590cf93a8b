//! Per-Frame Update Loop
//!
//! One logical tick of the session: physics, scroll, scoring,
//! collisions, terminal conditions. Deterministic given the session
//! seed and the input script; no time, no I/O.

use tracing::debug;

use crate::core::units::AVATAR_X;
use crate::game::collision;
use crate::game::events::GameEvent;
use crate::game::state::{GameSession, SessionPhase};

/// Result of one frame.
#[derive(Debug, Default)]
pub struct FrameResult {
    /// Events generated this frame.
    pub events: Vec<GameEvent>,
    /// Whether the session entered `Over` this frame.
    pub session_over: bool,
}

/// Run one frame.
///
/// Only `Running` sessions advance; while `Paused` nothing moves,
/// spawns, or scores. Pending events are drained in every phase so
/// input-generated events still reach the host.
///
/// # Order
///
/// Velocity integrates before position (gravity then displacement),
/// the world scrolls, passes score and trigger milestone spawns,
/// pickups grant their bonus, and terminal conditions are evaluated
/// last.
pub fn frame(session: &mut GameSession) -> FrameResult {
    let mut result = FrameResult::default();

    if session.phase != SessionPhase::Running {
        result.events = session.take_events();
        return result;
    }

    session.frame += 1;

    // 1. Physics: velocity first, then position
    session.avatar.vertical_velocity += session.config.gravity;
    session.avatar.y += session.avatar.vertical_velocity;

    // 2. Scroll the world
    let speed = session.difficulty.scroll_speed;
    session.obstacles.advance(speed);
    session.powerups.advance(speed);

    // 3. Decorative layer; no gameplay effect
    session.backdrop.advance();

    // 4. Passes score and may spawn a milestone power-up
    let passes = session.obstacles.check_passes(AVATAR_X);
    for _ in 0..passes {
        session.score += session.config.points_per_pass;
        let score = session.score;
        session.push_event(GameEvent::obstacle_passed(session.frame, score));

        if let Some(spawned) = session.powerups.maybe_spawn(
            &mut session.rng,
            session.theme,
            score,
            session.config.powerup_interval,
        ) {
            session.push_event(GameEvent::powerup_spawned(
                session.frame,
                spawned.kind,
                spawned.x,
                spawned.y,
            ));
        }
    }

    // 5. Pickups grant their bonus exactly once
    for kind in session.powerups.collect(session.avatar.y) {
        session.score += session.config.powerup_bonus;
        let score = session.score;
        session.push_event(GameEvent::powerup_collected(session.frame, kind, score));
    }

    // 6. Housekeeping: retire the lead column, drop spent pickups
    session.obstacles.recycle(&mut session.rng);
    session.powerups.retain_active();

    // 7. Terminal conditions
    let hit_obstacle = session
        .obstacles
        .iter()
        .any(|obstacle| collision::hits_obstacle(&session.avatar, obstacle));
    if hit_obstacle || collision::out_of_bounds(&session.avatar) {
        enter_over(session);
        result.session_over = true;
    }

    result.events = session.take_events();
    result
}

/// Freeze the session: update the location best and emit the terminal
/// events. Persistence of the best score is the host's job, keyed off
/// the `SessionOver` event.
fn enter_over(session: &mut GameSession) {
    let new_best = session.score > session.best_score;
    if new_best {
        session.best_score = session.score;
    }

    debug!(
        score = session.score,
        best = session.best_score,
        frame = session.frame,
        "session over"
    );

    session.push_event(GameEvent::phase_changed(
        session.frame,
        session.phase,
        SessionPhase::Over,
    ));
    session.phase = SessionPhase::Over;
    session.push_event(GameEvent::session_over(
        session.frame,
        session.score,
        session.best_score,
        new_best,
    ));
}
