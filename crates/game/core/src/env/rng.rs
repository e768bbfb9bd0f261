//! Deterministic dice for the encounter engine.
//!
//! Rolls are never drawn from a stateful generator. Every draw hashes four
//! coordinates into a seed with [`compute_seed`] and feeds it to a stateless
//! [`RngOracle`]:
//!
//! - the encounter seed chosen by the caller,
//! - a nonce that [`RollStream`] bumps once per draw,
//! - the [`CombatantId`] the roll is made for,
//! - the mechanic rolling, as a [`RollContext`].
//!
//! `RollContext` is a closed enum whose discriminants are the context values
//! mixed into the seed. Adding a mechanic means adding a variant with a new
//! number; renumbering an existing variant changes every log for a given seed.
//!
//! Rolls whose outcome is already decided (a 0% or 100% chance, a
//! single-value range) consume no draw, so the nonce sequence only depends on
//! rolls that could have gone either way.

use crate::state::CombatantId;

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a d100 (1-100 inclusive).
    ///
    /// Common for percentage-based mechanics like dodge chance.
    fn roll_d100(&self, seed: u64) -> u32 {
        (self.next_u32(seed) % 100) + 1
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = u64::from(max - min) + 1;
        let offset = u64::from(self.next_u32(seed)) % span;
        // offset <= max - min, so the sum stays within u32
        min + offset as u32
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR variant: 32-bit output from 64-bit state. Stateless here; the
/// caller supplies the state as a seed, which keeps every roll addressable.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Mixes the four roll coordinates into one 64-bit seed.
///
/// `nonce` comes from [`RollStream`], `actor_id` is the raw [`CombatantId`]
/// and `context` is a [`RollContext`] discriminant.
pub fn compute_seed(encounter_seed: u64, nonce: u64, actor_id: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash style mixing
    let mut hash = encounter_seed;

    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (actor_id as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Mechanic a roll is made for. Mixed into the seed so two mechanics rolled
/// back to back never share a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum RollContext {
    Dodge = 0,
    Crit = 1,
    MagicBranch = 2,
    Damage = 3,
    Block = 4,
    Burn = 5,
    Freeze = 6,
    Slow = 7,
}

/// Sequential roll source for one encounter.
///
/// Wraps a stateless [`RngOracle`] and advances a nonce on every draw. Draws
/// whose outcome is already decided (0% or 100% chance, single-value ranges)
/// do not consume a nonce, so content tweaks at the extremes do not shift
/// unrelated rolls.
pub struct RollStream<'a> {
    rng: &'a dyn RngOracle,
    seed: u64,
    nonce: u64,
}

impl<'a> RollStream<'a> {
    pub fn new(rng: &'a dyn RngOracle, seed: u64) -> Self {
        Self {
            rng,
            seed,
            nonce: 0,
        }
    }

    /// Number of rolls consumed so far.
    pub fn draws(&self) -> u64 {
        self.nonce
    }

    fn next_seed(&mut self, actor: CombatantId, context: RollContext) -> u64 {
        let seed = compute_seed(self.seed, self.nonce, actor.0, context as u32);
        self.nonce += 1;
        seed
    }

    /// Percentage check: true when a d100 lands at or below `chance`.
    pub fn chance(&mut self, actor: CombatantId, context: RollContext, chance: u32) -> bool {
        match chance {
            0 => false,
            100.. => true,
            _ => {
                let seed = self.next_seed(actor, context);
                let roll = self.rng.roll_d100(seed);
                tracing::trace!(?actor, ?context, roll, chance, "percentage roll");
                roll <= chance
            }
        }
    }

    /// Uniform draw in `[min, max]`.
    pub fn range(&mut self, actor: CombatantId, context: RollContext, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let seed = self.next_seed(actor, context);
        self.rng.range(seed, min, max)
    }
}
