//! Logical Play-Field Units
//!
//! All gameplay math runs in a fixed logical coordinate space; the host
//! scales it to whatever surface it renders on. Origin is top-left,
//! +y points down (screen convention).
//!
//! ```text
//! (0,0) ┌──────────────────────────┐
//!       │          sky             │
//!       │   ◯ avatar (x = 80)      │
//!       │          ▐▌ obstacle     │
//!       │          ▐▌ (width 60)   │
//!       └──────────────────────────┘ (480, 640)
//! ```

/// Logical field width.
pub const FIELD_WIDTH: f32 = 480.0;

/// Logical field height.
pub const FIELD_HEIGHT: f32 = 640.0;

/// Avatar horizontal position (never moves on x).
pub const AVATAR_X: f32 = 80.0;

/// Avatar collision radius.
pub const AVATAR_RADIUS: f32 = 20.0;

/// Obstacle column width.
pub const OBSTACLE_WIDTH: f32 = 60.0;

/// Downward acceleration per frame.
pub const GRAVITY: f32 = 0.4;

/// Vertical velocity set by a flap (upward, so negative).
pub const FLAP_VELOCITY: f32 = -7.0;

/// Margin kept clear above and below the randomized obstacle band.
pub const OBSTACLE_MARGIN: f32 = 50.0;

/// Half-extent of the axis-aligned power-up pickup box.
pub const PICKUP_RANGE: f32 = 25.0;

/// Power-ups scrolled past this x are discarded.
pub const POWERUP_DESPAWN_X: f32 = -30.0;

/// Vertical margin kept clear above and below power-up spawns.
pub const POWERUP_MARGIN: f32 = 40.0;
