//! WideFnv: FNV-1a string hashing tuned for object keys.
//!
//! Object keys are hashed on every lookup, so this crate keeps two paths:
//!
//! - Keys up to [`SHORT_KEY_MAX`] bytes use plain 64-bit FNV-1a, one byte at
//!   a time. Most keys in structured payloads are this short.
//! - Longer keys (with the `wide` feature, on by default) are consumed 32
//!   bytes per round as four independent 64-bit lanes. The lanes have no data
//!   dependency on each other, so the loop pipelines and auto-vectorizes.
//!
//! Which path runs depends only on the key length, so equal keys always hash
//! equal. Hash values are not meant to match any other FNV implementation
//! beyond the scalar path.
//!
//! # Example
//!
//! ```
//! use core::hash::BuildHasher;
//! use axzdict_wide_fnv::{WideFnvBuildHasher, fnv1a};
//!
//! assert_eq!(fnv1a(b"a"), 0xaf63_dc4c_8601_ec8c);
//!
//! let build = WideFnvBuildHasher;
//! assert_eq!(build.hash_one("name"), build.hash_one(String::from("name")));
//! ```

#![no_std]
#![deny(unsafe_code)]

use core::hash::{BuildHasher, Hasher};

/// FNV-1a 64-bit offset basis.
pub const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;

/// FNV-1a 64-bit prime.
pub const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Longest key (in bytes) hashed by the byte-at-a-time path.
pub const SHORT_KEY_MAX: usize = 16;

const WORD: usize = 8;
const LANES: usize = 4;
const BLOCK: usize = WORD * LANES;

// Distinct seeds so that permuting whole words across lanes changes the hash.
const LANE_SEEDS: [u64; LANES] = [
    FNV_OFFSET,
    FNV_OFFSET ^ 0x9e37_79b9_7f4a_7c15,
    FNV_OFFSET ^ 0xc2b2_ae3d_27d4_eb4f,
    FNV_OFFSET ^ 0x1656_67b1_9e37_79f9,
];

#[inline(always)]
fn mix(state: u64, word: u64) -> u64 {
    (state ^ word).wrapping_mul(FNV_PRIME)
}

#[inline(always)]
fn fold_bytes(state: u64, bytes: &[u8]) -> u64 {
    bytes.iter().fold(state, |acc, &b| mix(acc, u64::from(b)))
}

#[inline(always)]
fn read_word(chunk: &[u8]) -> u64 {
    let mut word = [0u8; WORD];
    word.copy_from_slice(chunk);
    u64::from_le_bytes(word)
}

/// Plain 64-bit FNV-1a.
#[inline]
pub fn fnv1a(bytes: &[u8]) -> u64 {
    fold_bytes(FNV_OFFSET, bytes)
}

/// Four-lane FNV-1a variant for long keys.
///
/// Full 32-byte blocks are spread over four lanes, the lanes are folded into
/// one state, then the remaining words and bytes are folded in order. The
/// length is mixed last so that keys differing only by trailing zero bytes
/// still differ.
pub fn fnv1a_wide(bytes: &[u8]) -> u64 {
    let mut lanes = LANE_SEEDS;
    let mut blocks = bytes.chunks_exact(BLOCK);
    for block in &mut blocks {
        for (lane, word) in lanes.iter_mut().zip(block.chunks_exact(WORD)) {
            *lane = mix(*lane, read_word(word));
        }
    }

    let mut state = lanes.iter().fold(FNV_OFFSET, |acc, &lane| mix(acc, lane));

    let mut words = blocks.remainder().chunks_exact(WORD);
    for word in &mut words {
        state = mix(state, read_word(word));
    }
    state = fold_bytes(state, words.remainder());

    mix(state, bytes.len() as u64)
}

/// Hash a key, picking the path from its length.
#[inline]
pub fn hash_bytes(bytes: &[u8]) -> u64 {
    if cfg!(feature = "wide") && bytes.len() > SHORT_KEY_MAX {
        fnv1a_wide(bytes)
    } else {
        fnv1a(bytes)
    }
}

/// Key equality with cheap early exits.
///
/// Lengths are compared first, then pointer identity (the same shared key
/// compared with itself), then the contents a word at a time.
#[inline]
pub fn bytes_equal(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if core::ptr::eq(a.as_ptr(), b.as_ptr()) {
        return true;
    }

    let mut lhs = a.chunks_exact(WORD);
    let mut rhs = b.chunks_exact(WORD);
    for (l, r) in (&mut lhs).zip(&mut rhs) {
        if read_word(l) != read_word(r) {
            return false;
        }
    }
    lhs.remainder() == rhs.remainder()
}

// =============================================================================
// Hasher / BuildHasher
// =============================================================================

/// Streaming hasher used by the object map.
///
/// Each `write` call hashes its slice with [`hash_bytes`] and folds the
/// result into the running state. `finish` applies a 64-bit finalizer, since
/// hashbrown takes its control bits from the top of the hash and raw FNV
/// output is weak there.
#[derive(Debug, Clone, Copy)]
pub struct WideFnvHasher {
    state: u64,
}

static_assertions::assert_eq_size!(WideFnvHasher, u64);

impl Default for WideFnvHasher {
    fn default() -> Self {
        Self { state: FNV_OFFSET }
    }
}

impl Hasher for WideFnvHasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.state = mix(self.state, hash_bytes(bytes));
    }

    #[inline]
    fn write_u8(&mut self, i: u8) {
        self.state = mix(self.state, u64::from(i));
    }

    #[inline]
    fn write_u32(&mut self, i: u32) {
        self.state = mix(self.state, u64::from(i));
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.state = mix(self.state, i);
    }

    #[inline]
    fn write_usize(&mut self, i: usize) {
        self.state = mix(self.state, i as u64);
    }

    #[inline]
    fn finish(&self) -> u64 {
        let mut h = self.state;
        h ^= h >> 33;
        h = h.wrapping_mul(0xff51_afd7_ed55_8ccd);
        h ^= h >> 33;
        h = h.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
        h ^= h >> 33;
        h
    }
}

/// Stateless [`BuildHasher`] for [`WideFnvHasher`].
///
/// Deterministic across runs and processes. Object keys come from the
/// embedding application rather than from untrusted peers, so no per-map
/// random seed is used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WideFnvBuildHasher;

static_assertions::assert_impl_all!(WideFnvBuildHasher: Send, Sync, Copy);

impl BuildHasher for WideFnvBuildHasher {
    type Hasher = WideFnvHasher;

    #[inline]
    fn build_hasher(&self) -> WideFnvHasher {
        WideFnvHasher::default()
    }
}
