//! Random number generators.
//!
//! Pricers never reach for an ambient generator: they take a
//! [`NormalVariates`] source from the caller, so seeding and reproducibility
//! stay under the caller's control.  Two sources are provided:
//!
//! * [`InverseCumulativeNormalRng`] — Mersenne Twister (`rand_mt`) uniforms
//!   mapped through the inverse normal CDF.
//! * [`StandardNormalRng`] — any `rand` generator sampled through
//!   `rand_distr::StandardNormal`.

use bsm_core::Real;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use rand_mt::Mt19937GenRand64;

/// A source of independent standard-normal deviates.
pub trait NormalVariates {
    /// Draw the next `N(0, 1)` deviate.
    fn next_normal(&mut self) -> Real;
}

impl<T: NormalVariates + ?Sized> NormalVariates for &mut T {
    fn next_normal(&mut self) -> Real {
        (**self).next_normal()
    }
}

/// A [`NormalVariates`] source that can be rebuilt from a 64-bit seed.
///
/// Parallel simulation uses this to give every chunk of paths its own
/// deterministic stream.
pub trait SeedableNormal: NormalVariates + Sized {
    /// Construct the generator for `seed`.
    fn from_seed(seed: u64) -> Self;
}

/// Derive the seed of sub-stream `stream` from a master `seed`.
///
/// Uses the SplitMix64 finaliser so that neighbouring streams start from
/// unrelated states.
pub fn derive_seed(seed: u64, stream: u64) -> u64 {
    let mut z = seed.wrapping_add(stream.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

// ─── Mersenne Twister ─────────────────────────────────────────────────────────

/// A uniform pseudo-random number generator based on the Mersenne Twister
/// MT19937-64 algorithm.
pub struct MersenneTwisterUniformRng {
    rng: Mt19937GenRand64,
}

impl MersenneTwisterUniformRng {
    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mt19937GenRand64::new(seed),
        }
    }

    /// Generate the next uniform deviate in `[0, 1)`.
    pub fn next_real(&mut self) -> Real {
        // top 53 bits → exactly representable multiple of 2^-53
        (self.rng.next_u64() >> 11) as Real * (1.0 / (1u64 << 53) as Real)
    }
}

/// An inverse-cumulative normal random number generator.
///
/// Wraps a Mersenne Twister and transforms its output through the inverse
/// CDF of the standard normal distribution.
pub struct InverseCumulativeNormalRng {
    inner: MersenneTwisterUniformRng,
}

impl InverseCumulativeNormalRng {
    /// Create a new generator backed by a Mersenne Twister with the given
    /// seed.
    pub fn new(seed: u64) -> Self {
        Self {
            inner: MersenneTwisterUniformRng::new(seed),
        }
    }

    /// Generate the next standard-normal deviate.
    pub fn next_real(&mut self) -> Real {
        // Avoid exact 0, which would produce -∞
        let u = loop {
            let u = self.inner.next_real();
            if u > 0.0 {
                break u;
            }
        };
        crate::distributions::normal_cdf_inverse(u)
    }
}

impl NormalVariates for InverseCumulativeNormalRng {
    fn next_normal(&mut self) -> Real {
        self.next_real()
    }
}

impl SeedableNormal for InverseCumulativeNormalRng {
    fn from_seed(seed: u64) -> Self {
        Self::new(seed)
    }
}

// ─── rand adapter ─────────────────────────────────────────────────────────────

/// Standard-normal deviates from any `rand` generator.
pub struct StandardNormalRng<R> {
    rng: R,
}

impl<R: Rng> StandardNormalRng<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Recover the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

/// [`StandardNormalRng`] over `rand`'s `StdRng`.
pub type StdNormalRng = StandardNormalRng<StdRng>;

impl StandardNormalRng<StdRng> {
    /// A `StdRng`-backed source seeded from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> NormalVariates for StandardNormalRng<R> {
    fn next_normal(&mut self) -> Real {
        self.rng.sample(StandardNormal)
    }
}

impl SeedableNormal for StandardNormalRng<StdRng> {
    fn from_seed(seed: u64) -> Self {
        Self::seeded(seed)
    }
}
