//! Collision Detection
//!
//! Pure predicates over the fixed collision geometry: the avatar is a
//! disc of radius 20 centered at x = 80, obstacle columns are 60 wide.
//! Identical inputs always yield identical verdicts.

use crate::core::units::{AVATAR_RADIUS, AVATAR_X, FIELD_HEIGHT, OBSTACLE_WIDTH, PICKUP_RANGE};
use crate::game::obstacle::Obstacle;
use crate::game::powerup::PowerUp;
use crate::game::state::Avatar;

/// Horizontal overlap between the avatar disc and an obstacle column.
#[inline]
pub fn overlaps_column(obstacle: &Obstacle) -> bool {
    AVATAR_X + AVATAR_RADIUS > obstacle.x && AVATAR_X - AVATAR_RADIUS < obstacle.x + OBSTACLE_WIDTH
}

/// Vertical failure: the avatar's extent crosses either gap boundary.
#[inline]
pub fn breaches_gap(avatar: &Avatar, obstacle: &Obstacle) -> bool {
    avatar.y - AVATAR_RADIUS < obstacle.top_height || avatar.y + AVATAR_RADIUS > obstacle.bottom_y
}

/// Terminal obstacle collision: horizontal overlap AND gap breach.
#[inline]
pub fn hits_obstacle(avatar: &Avatar, obstacle: &Obstacle) -> bool {
    overlaps_column(obstacle) && breaches_gap(avatar, obstacle)
}

/// Terminal bounds collision: avatar extent past the floor or ceiling.
#[inline]
pub fn out_of_bounds(avatar: &Avatar) -> bool {
    avatar.y - AVATAR_RADIUS < 0.0 || avatar.y + AVATAR_RADIUS > FIELD_HEIGHT
}

/// Pickup check: axis-aligned box, both axes independently within
/// range. Deliberately not a circular test.
#[inline]
pub fn within_pickup(avatar_y: f32, powerup: &PowerUp) -> bool {
    (AVATAR_X - powerup.x).abs() < PICKUP_RANGE && (avatar_y - powerup.y).abs() < PICKUP_RANGE
}
