//! Obstacle Track
//!
//! Owns the ordered run of obstacle columns: spawning, scrolling,
//! pass detection, and recycling. The reference density keeps exactly
//! one pending column ahead of the frontmost at all times; the recycle
//! trigger is the lead column scrolling fully off the left edge.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::core::rng::SessionRng;
use crate::core::units::{FIELD_HEIGHT, FIELD_WIDTH, OBSTACLE_MARGIN, OBSTACLE_WIDTH};

/// One obstacle column: a top half down to `top_height` and a bottom
/// half from `bottom_y`, with the passable gap between them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge; scrolls left each frame.
    pub x: f32,
    /// Bottom of the top half.
    pub top_height: f32,
    /// Top of the bottom half. `bottom_y - top_height` equals the
    /// session gap at creation.
    pub bottom_y: f32,
    /// Set exactly once, when the column scrolls behind the avatar.
    pub passed: bool,
}

impl Obstacle {
    /// Right edge of the column.
    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.x + OBSTACLE_WIDTH
    }

    /// Height of the passable gap.
    #[inline]
    pub fn gap(&self) -> f32 {
        self.bottom_y - self.top_height
    }
}

/// The scrolling run of obstacle columns.
#[derive(Clone, Debug)]
pub struct ObstacleTrack {
    pub(crate) columns: VecDeque<Obstacle>,
    gap: f32,
}

impl ObstacleTrack {
    /// Empty track with a fixed per-session gap height.
    pub fn new(gap: f32) -> Self {
        Self {
            columns: VecDeque::new(),
            gap,
        }
    }

    /// The gap height every spawned column gets.
    pub fn gap_height(&self) -> f32 {
        self.gap
    }

    /// Remove every column.
    pub fn clear(&mut self) {
        self.columns.clear();
    }

    /// Append one column at the right edge.
    ///
    /// `top_height` is uniform in `[50, H - gap - 50)`, keeping the
    /// margin clear at both field edges.
    pub fn spawn(&mut self, rng: &mut SessionRng) {
        let band = FIELD_HEIGHT - self.gap - 2.0 * OBSTACLE_MARGIN;
        let top_height = rng.next_f32() * band + OBSTACLE_MARGIN;

        self.columns.push_back(Obstacle {
            x: FIELD_WIDTH,
            top_height,
            bottom_y: top_height + self.gap,
            passed: false,
        });
    }

    /// Scroll every column left.
    pub fn advance(&mut self, speed: f32) {
        for column in &mut self.columns {
            column.x -= speed;
        }
    }

    /// Retire columns fully off the left edge, spawning one replacement
    /// per retirement to hold the steady-state density.
    pub fn recycle(&mut self, rng: &mut SessionRng) {
        while self
            .columns
            .front()
            .is_some_and(|column| column.trailing_edge() < 0.0)
        {
            self.columns.pop_front();
            self.spawn(rng);
        }
    }

    /// Flip `passed` (idempotently, exactly once per column) on every
    /// column whose trailing edge is behind `avatar_x`. Returns how
    /// many flipped this frame; each one is worth a point.
    pub fn check_passes(&mut self, avatar_x: f32) -> u32 {
        let mut passes = 0;
        for column in &mut self.columns {
            if !column.passed && column.trailing_edge() < avatar_x {
                column.passed = true;
                passes += 1;
            }
        }
        passes
    }

    /// Iterate the active columns, oldest (leftmost) first.
    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.columns.iter()
    }

    /// Number of active columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the track is empty.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
