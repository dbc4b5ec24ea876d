//! Deterministic pseudo-random numbers for piece selection.
//!
//! A single linear congruential generator drives every draw in a game. The
//! whole stream is determined by the entropy fed to the first [`hash`]
//! call, which is what makes games replayable from a single recorded seed.

use super::cell::ShapeKind;

/// Multiplier of the congruential step (the classic `glibc` constant).
const MULTIPLIER: u64 = 1_103_515_245;
/// Increment of the congruential step.
const INCREMENT: u64 = 12_345;
/// Modulus of the congruential step. All hashes live in `[0, MODULUS)`.
const MODULUS: u64 = 1 << 31;

/// Advances the generator by one step.
///
/// The next seed is derived from the previous one as
/// `(a * seed + c) mod 2^31`. Inputs are reduced into the modulus first,
/// so the multiplication cannot overflow a `u64`.
#[must_use]
pub const fn hash(value: u64) -> u64 {
    (MULTIPLIER * (value % MODULUS) + INCREMENT) % MODULUS
}

/// Maps a hash onto a catalog index in `[0, ShapeKind::LEN - 1]`.
///
/// The hash is projected linearly onto the index range and rounded to the
/// nearest index, with halves rounding up. Integer arithmetic only; the
/// intermediate product stays well inside a `u64`.
#[must_use]
#[expect(clippy::cast_possible_truncation)]
pub const fn scale(hash: u64) -> usize {
    const STEPS: u64 = ShapeKind::LEN as u64 - 1;
    const SPAN: u64 = MODULUS - 1;
    let h = hash % MODULUS;
    ((2 * STEPS * h + SPAN) / (2 * SPAN)) as usize
}
