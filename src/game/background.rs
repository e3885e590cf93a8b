//! Background Animation
//!
//! Decorative particle sets and the celestial body, regenerated
//! whenever the theme changes and advanced once per frame. Nothing in
//! here affects gameplay; the animator even owns a separate RNG stream
//! so flicker never perturbs obstacle spawns.

use crate::core::rng::SessionRng;
use crate::core::units::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::weather::theme::Theme;

/// Cloud puffs on cloudy, rainy, and snowy skies.
pub const CLOUD_COUNT: usize = 4;

/// Raindrops on rain sessions.
pub const RAINDROP_COUNT: usize = 30;

/// Snowflakes on snow sessions.
pub const SNOWFLAKE_COUNT: usize = 20;

/// Stars on night sessions.
pub const STAR_COUNT: usize = 50;

/// Sun disc radius; also the wrap margin.
pub const SUN_RADIUS: f32 = 32.0;

/// Moon disc radius; also the wrap margin.
pub const MOON_RADIUS: f32 = 28.0;

/// Sun drift per frame.
const SUN_DRIFT: f32 = 0.5;

/// Moon drift per frame.
const MOON_DRIFT: f32 = 0.2;

/// Cloud wrap margin beyond the field edges.
const CLOUD_WRAP: f32 = 60.0;

/// A drifting cloud puff.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CloudPuff {
    /// Center x.
    pub x: f32,
    /// Center y, fixed per puff.
    pub y: f32,
    /// Leftward drift per frame.
    pub speed: f32,
}

/// A falling raindrop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Raindrop {
    /// Position x.
    pub x: f32,
    /// Position y.
    pub y: f32,
    /// Fall per frame.
    pub speed: f32,
}

/// A falling snowflake.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snowflake {
    /// Position x.
    pub x: f32,
    /// Position y.
    pub y: f32,
    /// Fall per frame.
    pub speed: f32,
}

/// A flickering star. Opacity is re-rolled every frame; only the
/// position persists.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    /// Position x.
    pub x: f32,
    /// Position y, upper 60% of the field.
    pub y: f32,
    /// Draw radius.
    pub radius: f32,
    /// This frame's opacity, `[0, 1)`.
    pub alpha: f32,
}

/// The drifting sun or moon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CelestialBody {
    /// Daytime sun (clear and cloudy skies).
    Sun {
        /// Center x.
        x: f32,
        /// Center y.
        y: f32,
    },
    /// Night-time moon.
    Moon {
        /// Center x.
        x: f32,
        /// Center y.
        y: f32,
    },
}

/// Per-theme decorative state, advanced once per frame.
#[derive(Clone, Debug)]
pub struct BackgroundAnimator {
    /// Theme this backdrop was built for.
    pub theme: Theme,
    /// Cloud puffs (empty on clear and night skies).
    pub clouds: Vec<CloudPuff>,
    /// Raindrops (rain only).
    pub raindrops: Vec<Raindrop>,
    /// Snowflakes (snow only).
    pub snowflakes: Vec<Snowflake>,
    /// Stars (night only).
    pub stars: Vec<Star>,
    /// Sun, moon, or neither (rain and snow skies hide it).
    pub celestial: Option<CelestialBody>,
    rng: SessionRng,
}

impl BackgroundAnimator {
    /// Build the decorative set for a theme.
    pub fn for_theme(theme: Theme, mut rng: SessionRng) -> Self {
        let mut clouds = Vec::new();
        let mut raindrops = Vec::new();
        let mut snowflakes = Vec::new();
        let mut stars = Vec::new();

        if matches!(theme, Theme::Clouds | Theme::Rain | Theme::Snow) {
            for i in 0..CLOUD_COUNT {
                clouds.push(CloudPuff {
                    x: rng.next_f32() * FIELD_WIDTH,
                    y: 40.0 + 80.0 * i as f32,
                    speed: rng.range_f32(1.0, 2.0),
                });
            }
        }

        if theme == Theme::Rain {
            for _ in 0..RAINDROP_COUNT {
                raindrops.push(Raindrop {
                    x: rng.next_f32() * FIELD_WIDTH,
                    y: rng.next_f32() * FIELD_HEIGHT,
                    speed: rng.range_f32(3.0, 5.0),
                });
            }
        }

        if theme == Theme::Snow {
            for _ in 0..SNOWFLAKE_COUNT {
                snowflakes.push(Snowflake {
                    x: rng.next_f32() * FIELD_WIDTH,
                    y: rng.next_f32() * FIELD_HEIGHT,
                    speed: rng.range_f32(1.0, 2.0),
                });
            }
        }

        if theme == Theme::Night {
            for _ in 0..STAR_COUNT {
                stars.push(Star {
                    x: rng.next_f32() * FIELD_WIDTH,
                    y: rng.next_f32() * FIELD_HEIGHT * 0.6,
                    radius: rng.range_f32(0.5, 2.0),
                    alpha: 1.0,
                });
            }
        }

        let celestial = match theme {
            Theme::Clear | Theme::Clouds => Some(CelestialBody::Sun {
                x: FIELD_WIDTH - 60.0,
                y: 60.0,
            }),
            Theme::Night => Some(CelestialBody::Moon {
                x: FIELD_WIDTH - 80.0,
                y: 80.0,
            }),
            Theme::Rain | Theme::Snow => None,
        };

        Self {
            theme,
            clouds,
            raindrops,
            snowflakes,
            stars,
            celestial,
            rng,
        }
    }

    /// Advance one frame: drift, fall, wrap, flicker.
    pub fn advance(&mut self) {
        for cloud in &mut self.clouds {
            cloud.x -= cloud.speed;
            if cloud.x < -CLOUD_WRAP {
                cloud.x = FIELD_WIDTH + CLOUD_WRAP;
            }
        }

        for drop in &mut self.raindrops {
            drop.y += drop.speed;
            if drop.y > FIELD_HEIGHT {
                drop.x = self.rng.next_f32() * FIELD_WIDTH;
                drop.y = -12.0;
            }
        }

        for flake in &mut self.snowflakes {
            flake.y += flake.speed;
            if flake.y > FIELD_HEIGHT {
                flake.x = self.rng.next_f32() * FIELD_WIDTH;
                flake.y = -4.0;
            }
        }

        for star in &mut self.stars {
            star.alpha = self.rng.next_f32();
        }

        match &mut self.celestial {
            Some(CelestialBody::Sun { x, .. }) => {
                *x -= SUN_DRIFT;
                if *x < -SUN_RADIUS {
                    *x = FIELD_WIDTH + SUN_RADIUS;
                }
            }
            Some(CelestialBody::Moon { x, .. }) => {
                *x -= MOON_DRIFT;
                if *x < -MOON_RADIUS {
                    *x = FIELD_WIDTH + MOON_RADIUS;
                }
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator(theme: Theme) -> BackgroundAnimator {
        BackgroundAnimator::for_theme(theme, SessionRng::new(99))
    }

    #[test]
    fn test_population_per_theme() {
        let clear = animator(Theme::Clear);
        assert!(clear.clouds.is_empty());
        assert!(matches!(clear.celestial, Some(CelestialBody::Sun { .. })));

        let clouds = animator(Theme::Clouds);
        assert_eq!(clouds.clouds.len(), CLOUD_COUNT);
        assert!(clouds.raindrops.is_empty());
        assert!(matches!(clouds.celestial, Some(CelestialBody::Sun { .. })));

        let rain = animator(Theme::Rain);
        assert_eq!(rain.clouds.len(), CLOUD_COUNT);
        assert_eq!(rain.raindrops.len(), RAINDROP_COUNT);
        assert!(rain.celestial.is_none());

        let snow = animator(Theme::Snow);
        assert_eq!(snow.snowflakes.len(), SNOWFLAKE_COUNT);
        assert!(snow.celestial.is_none());

        let night = animator(Theme::Night);
        assert_eq!(night.stars.len(), STAR_COUNT);
        assert!(night.clouds.is_empty());
        assert!(matches!(night.celestial, Some(CelestialBody::Moon { .. })));
    }

    #[test]
    fn test_distribution_bounds() {
        let rain = animator(Theme::Rain);
        for (i, cloud) in rain.clouds.iter().enumerate() {
            assert_eq!(cloud.y, 40.0 + 80.0 * i as f32);
            assert!((1.0..2.0).contains(&cloud.speed));
        }
        for drop in &rain.raindrops {
            assert!((3.0..5.0).contains(&drop.speed));
        }

        let snow = animator(Theme::Snow);
        for flake in &snow.snowflakes {
            assert!((1.0..2.0).contains(&flake.speed));
        }

        let night = animator(Theme::Night);
        for star in &night.stars {
            assert!((0.5..2.0).contains(&star.radius));
            assert!(star.y < FIELD_HEIGHT * 0.6);
        }
    }

    #[test]
    fn test_cloud_wraps_around() {
        let mut backdrop = animator(Theme::Clouds);
        backdrop.clouds[0].x = -CLOUD_WRAP + 0.5;
        backdrop.clouds[0].speed = 1.0;

        backdrop.advance();
        assert_eq!(backdrop.clouds[0].x, FIELD_WIDTH + CLOUD_WRAP);
    }

    #[test]
    fn test_raindrop_respawns_above_field() {
        let mut backdrop = animator(Theme::Rain);
        backdrop.raindrops[0].y = FIELD_HEIGHT - 0.1;
        backdrop.raindrops[0].speed = 4.0;

        backdrop.advance();
        assert_eq!(backdrop.raindrops[0].y, -12.0);
        assert!((0.0..FIELD_WIDTH).contains(&backdrop.raindrops[0].x));
    }

    #[test]
    fn test_snowflake_respawns_above_field() {
        let mut backdrop = animator(Theme::Snow);
        backdrop.snowflakes[0].y = FIELD_HEIGHT + 0.5;

        backdrop.advance();
        assert_eq!(backdrop.snowflakes[0].y, -4.0);
    }

    #[test]
    fn test_sun_and_moon_drift_and_wrap() {
        let mut clear = animator(Theme::Clear);
        if let Some(CelestialBody::Sun { x, .. }) = clear.celestial {
            clear.advance();
            match clear.celestial {
                Some(CelestialBody::Sun { x: x2, .. }) => assert_eq!(x2, x - SUN_DRIFT),
                _ => unreachable!(),
            }
        }
        clear.celestial = Some(CelestialBody::Sun { x: -SUN_RADIUS - 0.1, y: 60.0 });
        clear.advance();
        match clear.celestial {
            Some(CelestialBody::Sun { x, .. }) => assert_eq!(x, FIELD_WIDTH + SUN_RADIUS),
            _ => unreachable!(),
        }

        let mut night = animator(Theme::Night);
        night.celestial = Some(CelestialBody::Moon { x: -MOON_RADIUS - 0.1, y: 80.0 });
        night.advance();
        match night.celestial {
            Some(CelestialBody::Moon { x, .. }) => assert_eq!(x, FIELD_WIDTH + MOON_RADIUS),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_star_flicker_rerolls_alpha() {
        let mut night = animator(Theme::Night);
        night.advance();
        let first: Vec<f32> = night.stars.iter().map(|s| s.alpha).collect();
        night.advance();
        let second: Vec<f32> = night.stars.iter().map(|s| s.alpha).collect();

        // 50 independent draws; all matching would mean a stuck stream
        assert_ne!(first, second);
        for alpha in second {
            assert!((0.0..1.0).contains(&alpha));
        }
    }

    #[test]
    fn test_same_seed_same_backdrop() {
        let a = animator(Theme::Rain);
        let b = animator(Theme::Rain);
        assert_eq!(a.clouds, b.clouds);
        assert_eq!(a.raindrops, b.raindrops);
    }
}
