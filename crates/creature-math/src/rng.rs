//! Linear-congruential pseudo-random stream.
//!
//! Every creature is reproducible from its seed, so the generator is a tiny
//! LCG with fixed constants rather than a general-purpose RNG. The draw order
//! is part of the contract: reordering calls changes every later value.

/// LCG multiplier.
pub const LCG_MULTIPLIER: i64 = 9301;
/// LCG increment.
pub const LCG_INCREMENT: i64 = 49297;
/// LCG modulus; also the divisor that maps state into `[0, 1)`.
pub const LCG_MODULUS: i64 = 233_280;

/// Deterministic pseudo-random stream seeded from an integer.
///
/// One instance is owned by one generation run and used strictly sequentially.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lcg {
    state: i64,
}

impl Lcg {
    /// Creates a stream from `seed`.
    ///
    /// The seed is reduced modulo [`LCG_MODULUS`] up front; this is exact,
    /// since the first step only depends on the seed's residue.
    pub fn new(seed: i64) -> Self {
        Self {
            state: seed.rem_euclid(LCG_MODULUS),
        }
    }

    /// Advances the state and returns a float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * LCG_MULTIPLIER + LCG_INCREMENT).rem_euclid(LCG_MODULUS);
        self.state as f64 / LCG_MODULUS as f64
    }

    /// Returns `min + next * (max - min)`.
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Picks one element of `items`, or `None` if the slice is empty.
    ///
    /// An empty slice does not advance the stream.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = (self.next_f64() * items.len() as f64).floor() as usize;
        items.get(idx.min(items.len() - 1))
    }

    /// Current internal state, mostly useful for debugging reproducibility.
    pub fn state(&self) -> i64 {
        self.state
    }
}
