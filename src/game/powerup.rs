//! Power-Up Track
//!
//! Bonus pickups spawned on score milestones, gated by theme: rain
//! sessions drop umbrellas, clear sessions drop sunglasses, every
//! other theme drops nothing. Pickup is an axis-aligned box check and
//! grants a score bonus exactly once.

use serde::{Deserialize, Serialize};

use crate::core::rng::SessionRng;
use crate::core::units::{FIELD_HEIGHT, FIELD_WIDTH, POWERUP_DESPAWN_X, POWERUP_MARGIN};
use crate::game::collision;
use crate::weather::theme::Theme;

/// Which pickup a theme can drop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Shield pickup, rain sessions.
    Umbrella,
    /// Vision pickup, clear sessions.
    Sunglasses,
}

impl PowerUpKind {
    /// The pickup a theme is allowed to drop, if any.
    pub fn for_theme(theme: Theme) -> Option<PowerUpKind> {
        match theme {
            Theme::Rain => Some(PowerUpKind::Umbrella),
            Theme::Clear => Some(PowerUpKind::Sunglasses),
            Theme::Clouds | Theme::Snow | Theme::Night => None,
        }
    }
}

/// An active pickup on the field.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    /// Which pickup.
    pub kind: PowerUpKind,
    /// Center x; scrolls left each frame.
    pub x: f32,
    /// Center y, fixed at spawn.
    pub y: f32,
    /// Set exactly once on pickup; the grant never re-triggers.
    pub collected: bool,
}

/// The set of active pickups.
#[derive(Clone, Debug, Default)]
pub struct PowerUpTrack {
    pub(crate) active: Vec<PowerUp>,
}

impl PowerUpTrack {
    /// Empty track.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every pickup.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// Milestone spawn check, called when the score increments on an
    /// obstacle pass.
    ///
    /// Spawns if and only if the score is a positive multiple of
    /// `interval` AND the theme carries a pickup. Spawn position is
    /// the right field edge, `y` uniform in `[40, H - 40)`.
    pub fn maybe_spawn(
        &mut self,
        rng: &mut SessionRng,
        theme: Theme,
        score: u32,
        interval: u32,
    ) -> Option<PowerUp> {
        if score == 0 || interval == 0 || score % interval != 0 {
            return None;
        }
        let kind = PowerUpKind::for_theme(theme)?;

        let band = FIELD_HEIGHT - 2.0 * POWERUP_MARGIN;
        let y = rng.next_f32() * band + POWERUP_MARGIN;

        let powerup = PowerUp {
            kind,
            x: FIELD_WIDTH,
            y,
            collected: false,
        };
        self.active.push(powerup);
        Some(powerup)
    }

    /// Scroll uncollected pickups left.
    pub fn advance(&mut self, speed: f32) {
        for powerup in &mut self.active {
            if !powerup.collected {
                powerup.x -= speed;
            }
        }
    }

    /// Mark pickups within range of the avatar collected (exactly once
    /// each) and return their kinds; the caller grants the bonus.
    pub fn collect(&mut self, avatar_y: f32) -> Vec<PowerUpKind> {
        let mut collected = Vec::new();
        for powerup in &mut self.active {
            if !powerup.collected && collision::within_pickup(avatar_y, powerup) {
                powerup.collected = true;
                collected.push(powerup.kind);
            }
        }
        collected
    }

    /// Drop collected pickups (grants are final by now) and anything
    /// scrolled past the despawn line. Filter-then-replace, never
    /// mutation during iteration.
    pub fn retain_active(&mut self) {
        self.active
            .retain(|powerup| !powerup.collected && powerup.x > POWERUP_DESPAWN_X);
    }

    /// Iterate active pickups.
    pub fn iter(&self) -> impl Iterator<Item = &PowerUp> {
        self.active.iter()
    }

    /// Number of active pickups.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether the track is empty.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::units::AVATAR_X;

    #[test]
    fn test_theme_gating() {
        assert_eq!(PowerUpKind::for_theme(Theme::Rain), Some(PowerUpKind::Umbrella));
        assert_eq!(PowerUpKind::for_theme(Theme::Clear), Some(PowerUpKind::Sunglasses));
        assert_eq!(PowerUpKind::for_theme(Theme::Clouds), None);
        assert_eq!(PowerUpKind::for_theme(Theme::Snow), None);
        assert_eq!(PowerUpKind::for_theme(Theme::Night), None);
    }

    #[test]
    fn test_spawn_only_on_positive_multiples() {
        let mut rng = SessionRng::new(3);
        let mut track = PowerUpTrack::new();

        assert!(track.maybe_spawn(&mut rng, Theme::Rain, 0, 10).is_none());
        assert!(track.maybe_spawn(&mut rng, Theme::Rain, 7, 10).is_none());
        assert!(track.maybe_spawn(&mut rng, Theme::Rain, 15, 10).is_none());

        let spawned = track.maybe_spawn(&mut rng, Theme::Rain, 10, 10).unwrap();
        assert_eq!(spawned.kind, PowerUpKind::Umbrella);
        assert_eq!(spawned.x, FIELD_WIDTH);
        assert!(spawned.y >= POWERUP_MARGIN);
        assert!(spawned.y < FIELD_HEIGHT - POWERUP_MARGIN);
        assert_eq!(track.len(), 1);
    }

    #[test]
    fn test_no_spawn_for_gated_themes_at_milestone() {
        let mut rng = SessionRng::new(3);
        let mut track = PowerUpTrack::new();

        for theme in [Theme::Clouds, Theme::Snow, Theme::Night] {
            assert!(track.maybe_spawn(&mut rng, theme, 10, 10).is_none());
            assert!(track.maybe_spawn(&mut rng, theme, 100, 10).is_none());
        }
        assert!(track.is_empty());
    }

    #[test]
    fn test_milestone_under_clear_spawns_sunglasses() {
        let mut rng = SessionRng::new(3);
        let mut track = PowerUpTrack::new();

        let spawned = track.maybe_spawn(&mut rng, Theme::Clear, 10, 10).unwrap();
        assert_eq!(spawned.kind, PowerUpKind::Sunglasses);
        assert_eq!(spawned.x, FIELD_WIDTH);
    }

    #[test]
    fn test_collect_exactly_once() {
        let mut track = PowerUpTrack::new();
        track.active.push(PowerUp {
            kind: PowerUpKind::Umbrella,
            x: AVATAR_X + 10.0,
            y: 300.0,
            collected: false,
        });

        assert_eq!(track.collect(300.0), vec![PowerUpKind::Umbrella]);
        // Second check must not re-trigger the grant
        assert!(track.collect(300.0).is_empty());
    }

    #[test]
    fn test_collect_requires_both_axes() {
        let mut track = PowerUpTrack::new();
        track.active.push(PowerUp {
            kind: PowerUpKind::Sunglasses,
            x: AVATAR_X + 10.0,
            y: 300.0,
            collected: false,
        });

        // Close on x, far on y
        assert!(track.collect(300.0 + 25.0).is_empty());
        // Within both
        assert_eq!(track.collect(300.0 + 24.9).len(), 1);
    }

    #[test]
    fn test_retain_drops_collected_and_offscreen() {
        let mut track = PowerUpTrack::new();
        track.active.push(PowerUp {
            kind: PowerUpKind::Umbrella,
            x: 100.0,
            y: 300.0,
            collected: true,
        });
        track.active.push(PowerUp {
            kind: PowerUpKind::Umbrella,
            x: POWERUP_DESPAWN_X - 1.0,
            y: 300.0,
            collected: false,
        });
        track.active.push(PowerUp {
            kind: PowerUpKind::Umbrella,
            x: 200.0,
            y: 300.0,
            collected: false,
        });

        track.retain_active();
        assert_eq!(track.len(), 1);
        assert_eq!(track.iter().next().unwrap().x, 200.0);
    }
}
