//! Simple generic Bloom filter using double hashing.
//!
//! A [`BloomFilter`] answers "have I seen this element before?" in constant
//! space with one-sided error: `contains` can return `true` for an element
//! that was never added, but never returns `false` for one that was. The k
//! probed bit positions are derived from two hashes per element: the
//! element's own `Hash` implementation and a secondary hash, either one of
//! the built-ins (32-bit integers and strings, see [`SecondaryHash`]) or a
//! caller-supplied function.
//!
//! ```
//! use bloomset::BloomFilter;
//!
//! let mut filter = BloomFilter::<u32>::new(1000, 3).unwrap();
//! filter.add(&42);
//!
//! assert!(filter.contains(&42));
//! assert!(!filter.contains(&43));
//! ```

pub mod filter;
pub mod hashes;

pub use filter::{BloomFilter, FilterError};
pub use hashes::{avalanche_u32, polynomial_str, SecondaryHash};
