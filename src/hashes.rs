use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Hashes an element through its `Hash` implementation with a fixed-key
/// hasher, so the same value always lands on the same 64-bit hash within a
/// build. This is the primary hash of the double-hashing pair.
pub fn identity_hash<T: Hash + ?Sized>(element: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    element.hash(&mut hasher);
    hasher.finish()
}

/// Avalanche hash over a 32-bit integer: a fixed XOR-shift/multiply sequence
/// that spreads single-bit input differences across the whole output word.
pub fn avalanche_u32(value: u32) -> u32 {
    let mut x = value;
    x = (!x).wrapping_add(x << 15);
    x ^= x >> 12;
    x = x.wrapping_add(x << 2);
    x ^= x >> 4;
    x = x.wrapping_mul(2057);
    x ^= x >> 16;
    x
}

/// Polynomial hash over a string's UTF-16 code units with a final avalanche
/// pass. The empty string is valid input and hashes to 0.
///
/// Accumulation runs in signed 32-bit arithmetic, so `>>` is an arithmetic
/// shift once the accumulator goes negative.
pub fn polynomial_str(s: &str) -> u32 {
    let mut hash: i32 = 0;

    for unit in s.encode_utf16() {
        hash = hash.wrapping_add(i32::from(unit));
        hash = hash.wrapping_add(hash << 10);
        hash ^= hash >> 6;
    }

    hash = hash.wrapping_add(hash << 3);
    hash ^= hash >> 11;
    hash = hash.wrapping_add(hash << 15);

    hash as u32
}

/// Secondary hash of the double-hashing pair, resolved at compile time.
///
/// Only the built-in kinds implement this: 32-bit integers and strings. Any
/// other element type must supply its own secondary hash through
/// [`BloomFilter::with_hasher`](crate::BloomFilter::with_hasher). A good
/// implementation is well distributed and in particular avoids returning 0,
/// which collapses every probe to a single bit (see the filter docs).
pub trait SecondaryHash {
    fn secondary_hash(&self) -> u32;
}

impl SecondaryHash for u32 {
    fn secondary_hash(&self) -> u32 {
        avalanche_u32(*self)
    }
}

impl SecondaryHash for i32 {
    fn secondary_hash(&self) -> u32 {
        avalanche_u32(*self as u32)
    }
}

impl SecondaryHash for str {
    fn secondary_hash(&self) -> u32 {
        polynomial_str(self)
    }
}

impl SecondaryHash for String {
    fn secondary_hash(&self) -> u32 {
        polynomial_str(self)
    }
}

impl<H: SecondaryHash + ?Sized> SecondaryHash for &H {
    fn secondary_hash(&self) -> u32 {
        (**self).secondary_hash()
    }
}
