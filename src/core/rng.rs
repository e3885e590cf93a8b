//! Deterministic Random Number Generator
//!
//! Uses Xorshift128+ for fast, high-quality, deterministic randomness.
//! Given the same seed, produces an identical sequence on all platforms.
//! Spawn heights, particle speeds, and star flicker all draw from here,
//! so a session is fully replayable from its seed.

use sha2::{Digest, Sha256};

/// Deterministic PRNG using the Xorshift128+ algorithm.
///
/// # Example
///
/// ```
/// use skydrift::core::rng::SessionRng;
///
/// let mut rng = SessionRng::new(12345);
/// let value = rng.next_u64();
/// assert_eq!(value, 6233086606872742541); // Always the same!
/// ```
#[derive(Clone, Debug)]
pub struct SessionRng {
    state: [u64; 2],
}

impl Default for SessionRng {
    fn default() -> Self {
        Self::new(0)
    }
}

impl SessionRng {
    /// Create a new RNG from a 64-bit seed.
    ///
    /// Uses SplitMix64 to initialize the internal state, ensuring
    /// good distribution even from weak seeds.
    pub fn new(seed: u64) -> Self {
        let mut s = seed;
        let state0 = splitmix64(&mut s);
        let state1 = splitmix64(&mut s);

        // State must never be all zeros
        let state = if state0 == 0 && state1 == 0 {
            [1, 1]
        } else {
            [state0, state1]
        };

        Self { state }
    }

    /// Generate the next 64-bit random value.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(24) ^ s1 ^ (s1 << 16);
        self.state[1] = s1.rotate_left(37);

        result
    }

    /// Generate a random `f32` in `[0, 1)`.
    ///
    /// Uses the upper 24 bits so every value is exactly representable.
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        ((self.next_u64() >> 40) as f32) * (1.0 / (1u32 << 24) as f32)
    }

    /// Generate a random `f32` in `[lo, hi)`.
    #[inline]
    pub fn range_f32(&mut self, lo: f32, hi: f32) -> f32 {
        if lo >= hi {
            return lo;
        }
        lo + self.next_f32() * (hi - lo)
    }

    /// Generate a random integer in range `[0, max)`.
    #[inline]
    pub fn next_int(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        // Simple modulo - slight bias for very large max, but acceptable
        (self.next_u64() % max as u64) as u32
    }

    /// Get current state (for checkpointing/debugging).
    pub fn state(&self) -> [u64; 2] {
        self.state
    }

    /// Restore from saved state.
    pub fn set_state(&mut self, state: [u64; 2]) {
        self.state = state;
    }
}

/// SplitMix64 for seed initialization.
/// Produces well-distributed values from sequential seeds.
#[inline]
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// Derive a session seed from the weather fetch that configured it.
///
/// The seed is a pure function of the location label, the reported
/// condition, and the local hour, so two sessions started from the same
/// weather observation lay out identical obstacle runs.
pub fn derive_session_seed(location_label: &str, condition: &str, local_hour: u32) -> u64 {
    let mut hasher = Sha256::new();

    // Domain separator
    hasher.update(b"SKYDRIFT_SEED_V1");

    hasher.update(location_label.as_bytes());
    hasher.update([0u8]);
    hasher.update(condition.as_bytes());
    hasher.update(local_hour.to_le_bytes());

    let hash = hasher.finalize();

    // First 8 bytes as seed
    u64::from_le_bytes(hash[0..8].try_into().unwrap_or([0; 8]))
}

// =============================================================================
// TESTS
// =============================================================================
