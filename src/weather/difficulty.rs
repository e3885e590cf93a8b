//! Difficulty Profiles
//!
//! Each theme maps to a fixed obstacle gap and scroll speed. The table
//! is the observable difficulty contract: rain is the tightest gap,
//! night the fastest scroll.

use serde::{Deserialize, Serialize};

use crate::core::units::FIELD_HEIGHT;
use crate::weather::theme::Theme;

/// Obstacle gap and scroll speed for one theme.
///
/// A pure function of [`Theme`]; recomputed on demand, never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    /// Vertical opening between the top and bottom obstacle halves.
    /// Always larger than the avatar diameter.
    pub gap_height: f32,
    /// World scroll per frame, logical units.
    pub scroll_speed: f32,
}

impl Difficulty {
    /// Look up the difficulty profile for a theme.
    ///
    /// The gap divisors and speeds are exact and covered by tests;
    /// changing them changes observable difficulty.
    pub fn for_theme(theme: Theme) -> Difficulty {
        let (gap_divisor, scroll_speed) = match theme {
            Theme::Clear => (4.0, 3.0),
            Theme::Clouds => (4.7, 3.7),
            Theme::Rain => (6.0, 4.5),
            Theme::Snow => (5.7, 4.0),
            Theme::Night => (4.3, 4.7),
        };

        Difficulty {
            gap_height: FIELD_HEIGHT / gap_divisor,
            scroll_speed,
        }
    }
}

impl Theme {
    /// Shorthand for [`Difficulty::for_theme`].
    pub fn difficulty(self) -> Difficulty {
        Difficulty::for_theme(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::units::AVATAR_RADIUS;

    #[test]
    fn test_exact_table_values() {
        let clear = Difficulty::for_theme(Theme::Clear);
        assert_eq!(clear.gap_height, FIELD_HEIGHT / 4.0);
        assert_eq!(clear.scroll_speed, 3.0);

        let clouds = Difficulty::for_theme(Theme::Clouds);
        assert_eq!(clouds.gap_height, FIELD_HEIGHT / 4.7);
        assert_eq!(clouds.scroll_speed, 3.7);

        let rain = Difficulty::for_theme(Theme::Rain);
        assert_eq!(rain.gap_height, FIELD_HEIGHT / 6.0);
        assert_eq!(rain.scroll_speed, 4.5);

        let snow = Difficulty::for_theme(Theme::Snow);
        assert_eq!(snow.gap_height, FIELD_HEIGHT / 5.7);
        assert_eq!(snow.scroll_speed, 4.0);

        let night = Difficulty::for_theme(Theme::Night);
        assert_eq!(night.gap_height, FIELD_HEIGHT / 4.3);
        assert_eq!(night.scroll_speed, 4.7);
    }

    #[test]
    fn test_pure_and_repeatable() {
        for theme in Theme::ALL {
            assert_eq!(Difficulty::for_theme(theme), Difficulty::for_theme(theme));
            assert_eq!(theme.difficulty(), Difficulty::for_theme(theme));
        }
    }

    #[test]
    fn test_rain_has_tightest_gap() {
        let rain = Difficulty::for_theme(Theme::Rain);
        for theme in Theme::ALL {
            if theme != Theme::Rain {
                assert!(rain.gap_height < Difficulty::for_theme(theme).gap_height);
            }
        }
    }

    #[test]
    fn test_night_has_fastest_scroll() {
        let night = Difficulty::for_theme(Theme::Night);
        for theme in Theme::ALL {
            if theme != Theme::Night {
                assert!(night.scroll_speed > Difficulty::for_theme(theme).scroll_speed);
            }
        }
    }

    #[test]
    fn test_gap_exceeds_avatar_diameter() {
        for theme in Theme::ALL {
            assert!(Difficulty::for_theme(theme).gap_height > 2.0 * AVATAR_RADIUS);
        }
    }

    #[test]
    fn test_scroll_speed_positive() {
        for theme in Theme::ALL {
            assert!(Difficulty::for_theme(theme).scroll_speed > 0.0);
        }
    }
}
