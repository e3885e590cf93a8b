//! Core deterministic primitives.
//!
//! The logical unit space and the seeded RNG every session draws from.
//! Everything here is a pure function of its inputs.

pub mod rng;
pub mod units;

// Re-export core types
pub use rng::{derive_session_seed, SessionRng};
pub use units::{AVATAR_RADIUS, AVATAR_X, FIELD_HEIGHT, FIELD_WIDTH, OBSTACLE_WIDTH};
