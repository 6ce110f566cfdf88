//! RNG module - deterministic linear congruential sequence
//!
//! The generator is stateless: the current seed lives in the game state
//! value and `hash` maps it to the next seed. Identical initial seeds
//! reproduce identical piece sequences bit-for-bit, which the scenario
//! tests rely on.

/// LCG multiplier (glibc constants for the 2^31 modulus).
pub const MULTIPLIER: u64 = 1_103_515_245;
/// LCG increment.
pub const INCREMENT: u64 = 12_345;
/// LCG modulus, fixed at 2^31.
pub const MODULUS: u64 = 1 << 31;

/// Advance the seed: `next = (A * seed + C) mod 2^31`.
///
/// Computed in u64 so the multiply cannot overflow.
pub fn hash(seed: u32) -> u32 {
    ((MULTIPLIER * u64::from(seed) + INCREMENT) % MODULUS) as u32
}

/// Scale a seed to a shape selector in `[0, 6]`.
pub fn scale(seed: u32) -> u32 {
    seed % 7
}
