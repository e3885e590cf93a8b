//! # Skydrift
//!
//! Weather-driven arcade flyer. Live weather for a chosen city (or
//! geolocation) picks one of five environmental presets, and the
//! preset drives obstacle difficulty, the backdrop, and which power-up
//! can drop. The gameplay core is a deterministic frame-indexed state
//! machine; rendering, audio, and the network transport are external
//! collaborators.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         SKYDRIFT                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── units.rs    - Logical field and physics constants       │
//! │  └── rng.rs      - Seeded Xorshift128+ PRNG                  │
//! │                                                              │
//! │  weather/        - Outside world (non-deterministic edges)   │
//! │  ├── provider.rs - Provider seams, errors, fixtures          │
//! │  ├── service.rs  - Fetch dispatch with generation guard      │
//! │  ├── theme.rs    - Observation -> theme classification       │
//! │  └── difficulty.rs - Theme -> gap/speed table                │
//! │                                                              │
//! │  game/           - Gameplay core (deterministic)             │
//! │  ├── input.rs    - Events + pure phase transitions           │
//! │  ├── state.rs    - Avatar, phases, session state             │
//! │  ├── tick.rs     - Per-frame update loop                     │
//! │  ├── collision.rs- Pure collision predicates                 │
//! │  ├── obstacle.rs - Obstacle column track                     │
//! │  ├── powerup.rs  - Milestone power-up track                  │
//! │  └── background.rs - Decorative particle layer               │
//! │                                                              │
//! │  render.rs       - Immediate-mode draw command list          │
//! │  leaderboard.rs  - Best-score-per-location store             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism
//!
//! Given the same session seed and input script, `game/` replays to
//! identical scores and events. All randomness comes from the seeded
//! [`core::rng::SessionRng`]; weather timing only decides which seed a
//! session gets.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod game;
pub mod leaderboard;
pub mod render;
pub mod weather;

// Re-export commonly used types
pub use core::rng::{derive_session_seed, SessionRng};
pub use game::input::InputEvent;
pub use game::state::{Avatar, GameSession, SessionConfig, SessionPhase, SessionSetup};
pub use game::tick::{frame, FrameResult};
pub use leaderboard::Leaderboard;
pub use render::{compose, RenderCommand};
pub use weather::difficulty::Difficulty;
pub use weather::observation::WeatherObservation;
pub use weather::theme::Theme;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Logical frame rate (frames per second the host is expected to tick)
pub const FRAME_RATE: u32 = 60;
