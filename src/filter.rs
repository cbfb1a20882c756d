use std::hash::Hash;

use thiserror::Error;

use crate::hashes::{identity_hash, SecondaryHash};

/// Construction-time errors. `add` and `contains` cannot fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),
    #[error("hash count k must be at least 1, got {0}")]
    InvalidK(u32),
}

/// A Bloom filter: approximate set membership with false positives but no
/// false negatives.
///
/// Each element is mapped to `k` bit positions by double hashing: the primary
/// hash comes from the element's `Hash` implementation, the secondary hash
/// from a function fixed at construction, and probe `i` lands on
/// `|(primary + i * secondary) mod capacity|`. Once a bit is set it is never
/// cleared; there is no deletion.
///
/// The filter is a plain mutable value with no internal locking. `add` takes
/// `&mut self`, so concurrent use requires external synchronization (the
/// stored secondary hash is `Send + Sync`, so wrapping the filter in a
/// `Mutex` or `RwLock` works).
///
/// A secondary hash that returns 0 collapses all `k` probes to a single
/// index, degrading the filter to one bit per element. The built-in hashes
/// are well distributed; callers of [`with_hasher`](BloomFilter::with_hasher)
/// are responsible for supplying one that is.
pub struct BloomFilter<T> {
    bits: Vec<bool>,
    k: u32,
    set_bits: usize,
    secondary: Box<dyn Fn(&T) -> u32 + Send + Sync>,
}

impl<T: SecondaryHash> BloomFilter<T> {
    /// Creates a filter with `capacity` bits and `k` probes per element,
    /// using the built-in secondary hash for `T`.
    ///
    /// Only 32-bit integers and strings have a built-in secondary hash; any
    /// other element type must go through [`with_hasher`](Self::with_hasher).
    pub fn new(capacity: usize, k: u32) -> Result<Self, FilterError> {
        Self::with_hasher(capacity, k, |element: &T| element.secondary_hash())
    }
}

impl<T> BloomFilter<T> {
    /// Creates a filter with `capacity` bits, `k` probes per element, and an
    /// explicit secondary hash function.
    pub fn with_hasher<F>(capacity: usize, k: u32, secondary: F) -> Result<Self, FilterError>
    where
        F: Fn(&T) -> u32 + Send + Sync + 'static,
    {
        if capacity < 1 {
            return Err(FilterError::InvalidCapacity(capacity));
        }
        if k < 1 {
            return Err(FilterError::InvalidK(k));
        }

        Ok(BloomFilter {
            bits: vec![false; capacity],
            k,
            set_bits: 0,
            secondary: Box::new(secondary),
        })
    }

    /// Number of bits in the filter.
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Number of probes per `add`/`contains`.
    pub fn hash_count(&self) -> u32 {
        self.k
    }

    /// Number of bits currently set to one.
    pub fn set_bits(&self) -> usize {
        self.set_bits
    }

    /// Whether nothing has been added yet.
    pub fn is_empty(&self) -> bool {
        self.set_bits == 0
    }
}

impl<T: Hash> BloomFilter<T> {
    /// Adds an element to the filter. Always succeeds; re-adding an element
    /// is a no-op.
    pub fn add(&mut self, element: &T) {
        let primary = identity_hash(element);
        let secondary = (self.secondary)(element);

        for index in probe_indices(primary, secondary, self.k, self.bits.len()) {
            if !self.bits[index] {
                self.bits[index] = true;
                self.set_bits += 1;
            }
        }
    }

    /// Tests whether an element is possibly in the set.
    ///
    /// Returns `false` only if the element was definitely never added.
    /// Returns `true` for every element previously passed to `add` on this
    /// filter, and possibly for elements never added (a false positive, with
    /// probability governed by the load factor and `k`).
    pub fn contains(&self, element: &T) -> bool {
        let primary = identity_hash(element);
        let secondary = (self.secondary)(element);

        for index in probe_indices(primary, secondary, self.k, self.bits.len()) {
            if !self.bits[index] {
                return false;
            }
        }

        true
    }
}

/// Double hashing: probe `i` lands on `|(primary + i * secondary) mod
/// capacity|`, with the secondary hash sign-extended from 32 bits and the
/// combination wrapping. Reduction happens before taking the absolute value,
/// so the result is always within capacity.
///
/// Nothing forces the secondary hash to be coprime with the capacity, so the
/// probes only approximate k independent hash functions; this is the
/// standard weak variant of double hashing and is kept as-is.
fn probe_indices(
    primary: u64,
    secondary: u32,
    hash_count: u32,
    capacity: usize,
) -> impl Iterator<Item = usize> {
    let primary = primary as i64;
    let secondary = i64::from(secondary as i32);
    let capacity = capacity as i64;

    (0..hash_count).map(move |i| {
        let combined = primary.wrapping_add(i64::from(i).wrapping_mul(secondary));
        (combined % capacity).unsigned_abs() as usize
    })
}
