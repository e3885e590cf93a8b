//! Render Command Composition
//!
//! The core never draws; it emits an ordered list of immediate-mode
//! draw commands, back to front, and the host rasterizes them however
//! it likes. Styling is the host's concern. The information content
//! (score, theme, weather text, best score) is part of the contract.

use serde::{Deserialize, Serialize};

use crate::core::units::AVATAR_X;
use crate::game::background::CelestialBody;
use crate::game::powerup::PowerUpKind;
use crate::game::state::{GameSession, SessionPhase};
use crate::weather::theme::Theme;

/// Full-screen text overlay for the non-running phases.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Overlay {
    /// Idle screen: instructions plus location, weather, and best score.
    StartScreen {
        /// Location label.
        location_label: String,
        /// Weather summary line.
        summary: String,
        /// Best score recorded for this location.
        best_score: u32,
    },
    /// Paused banner.
    Paused,
    /// Game-over banner.
    GameOver {
        /// Final score.
        score: u32,
        /// Best score after this run.
        best_score: u32,
    },
}

/// One immediate-mode draw command.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Fill the field with the theme's sky.
    Backdrop(Theme),
    /// Sun disc.
    Sun {
        /// Center x.
        x: f32,
        /// Center y.
        y: f32,
    },
    /// Moon disc.
    Moon {
        /// Center x.
        x: f32,
        /// Center y.
        y: f32,
    },
    /// One star with this frame's flicker opacity.
    Star {
        /// Center x.
        x: f32,
        /// Center y.
        y: f32,
        /// Draw radius.
        radius: f32,
        /// Opacity `[0, 1)`.
        alpha: f32,
    },
    /// One cloud puff.
    CloudPuff {
        /// Center x.
        x: f32,
        /// Center y.
        y: f32,
    },
    /// One raindrop.
    Raindrop {
        /// Position x.
        x: f32,
        /// Position y.
        y: f32,
    },
    /// One snowflake.
    Snowflake {
        /// Position x.
        x: f32,
        /// Position y.
        y: f32,
    },
    /// One obstacle column pair.
    ObstacleColumn {
        /// Left edge.
        x: f32,
        /// Bottom of the top half.
        top_height: f32,
        /// Top of the bottom half.
        bottom_y: f32,
    },
    /// The avatar disc.
    Avatar {
        /// Center x.
        x: f32,
        /// Center y.
        y: f32,
    },
    /// One power-up pickup.
    PowerUp {
        /// Which pickup.
        kind: PowerUpKind,
        /// Center x.
        x: f32,
        /// Center y.
        y: f32,
    },
    /// Score readout.
    Score(u32),
    /// Weather summary line.
    WeatherSummary(String),
    /// Phase overlay.
    Banner(Overlay),
}

/// Compose the draw list for the current frame, back to front:
/// backdrop, celestial body, particles, obstacles, avatar, power-ups,
/// then text and the phase overlay.
pub fn compose(session: &GameSession) -> Vec<RenderCommand> {
    let mut out = Vec::with_capacity(
        8 + session.backdrop.stars.len()
            + session.backdrop.clouds.len()
            + session.backdrop.raindrops.len()
            + session.backdrop.snowflakes.len()
            + session.obstacles.len()
            + session.powerups.len(),
    );

    out.push(RenderCommand::Backdrop(session.theme));

    match session.backdrop.celestial {
        Some(CelestialBody::Sun { x, y }) => out.push(RenderCommand::Sun { x, y }),
        Some(CelestialBody::Moon { x, y }) => out.push(RenderCommand::Moon { x, y }),
        None => {}
    }

    for star in &session.backdrop.stars {
        out.push(RenderCommand::Star {
            x: star.x,
            y: star.y,
            radius: star.radius,
            alpha: star.alpha,
        });
    }
    for cloud in &session.backdrop.clouds {
        out.push(RenderCommand::CloudPuff {
            x: cloud.x,
            y: cloud.y,
        });
    }
    for drop in &session.backdrop.raindrops {
        out.push(RenderCommand::Raindrop { x: drop.x, y: drop.y });
    }
    for flake in &session.backdrop.snowflakes {
        out.push(RenderCommand::Snowflake {
            x: flake.x,
            y: flake.y,
        });
    }

    for obstacle in session.obstacles.iter() {
        out.push(RenderCommand::ObstacleColumn {
            x: obstacle.x,
            top_height: obstacle.top_height,
            bottom_y: obstacle.bottom_y,
        });
    }

    out.push(RenderCommand::Avatar {
        x: AVATAR_X,
        y: session.avatar.y,
    });

    for powerup in session.powerups.iter() {
        if !powerup.collected {
            out.push(RenderCommand::PowerUp {
                kind: powerup.kind,
                x: powerup.x,
                y: powerup.y,
            });
        }
    }

    match session.phase {
        SessionPhase::Idle => {
            out.push(RenderCommand::Banner(Overlay::StartScreen {
                location_label: session.location_label.clone(),
                summary: session.weather_summary.clone(),
                best_score: session.best_score,
            }));
        }
        SessionPhase::Running => {
            out.push(RenderCommand::Score(session.score));
            out.push(RenderCommand::WeatherSummary(session.weather_summary.clone()));
        }
        SessionPhase::Paused => {
            out.push(RenderCommand::Score(session.score));
            out.push(RenderCommand::WeatherSummary(session.weather_summary.clone()));
            out.push(RenderCommand::Banner(Overlay::Paused));
        }
        SessionPhase::Over => {
            out.push(RenderCommand::Score(session.score));
            out.push(RenderCommand::Banner(Overlay::GameOver {
                score: session.score,
                best_score: session.best_score,
            }));
        }
    }

    out
}
