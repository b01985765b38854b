// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Two levels perfect hash for the rank primes products.
//!
//! A product is hashed with a seeded xxh3 into a bucket index and a base slot,
//! the final slot in the values table is the base slot displaced by the bucket
//! adjustment:
//!
//! ```text
//!   h    = xxh3(product, seed)
//!   slot = (h mod size + adjust[(h >> 32) mod 512]) mod size
//! ```
//!
//! Buckets are placed from the largest to the smallest, each bucket takes the
//! first displacement that moves all its products to free slots.
use log::debug;
use std::cmp::Reverse;
use xxhash_rust::xxh3::xxh3_64_with_seed;

use crate::TableError;

/// Number of adjustment entries.
pub(crate) const ADJUST_SIZE: usize = 512;

/// Initial number of slots in the values table.
///
/// First fit displacement over 512 buckets stops finding free slots for the
/// 4888 repeated ranks products below a load factor of about 0.7.
const INITIAL_VALUES_SIZE: usize = 7168;

/// Values table growth when no seed works for a size.
const VALUES_SIZE_STEP: usize = 512;

/// Adjustments are stored as u16.
const MAX_VALUES_SIZE: usize = 1 << 16;

/// Seeds to try before growing the values table.
const SEEDS_PER_SIZE: u64 = 256;

/// A perfect hash from prime products to hand values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PerfectHash {
    seed: u64,
    adjust: Box<[u16]>,
    values: Box<[u16]>,
}

impl PerfectHash {
    /// Builds a perfect hash for the given `(product, value)` entries.
    ///
    /// Products must be unique and values must be non zero.
    pub fn build(entries: &[(u32, u16)]) -> Result<Self, TableError> {
        let mut seed = 0;
        let mut size = INITIAL_VALUES_SIZE;

        while size <= MAX_VALUES_SIZE {
            for _ in 0..SEEDS_PER_SIZE {
                if let Some(hash) = Self::try_build(entries, seed, size) {
                    debug!(
                        "Perfect hash for {} products: seed={seed} slots={size} adjustments={}",
                        entries.len(),
                        ADJUST_SIZE
                    );
                    return Ok(hash);
                }

                seed += 1;
            }

            debug!("No perfect hash with {size} slots, growing values table");
            size += VALUES_SIZE_STEP;
        }

        Err(TableError::NoPerfectHash(entries.len()))
    }

    /// Looks up the value for a product.
    ///
    /// A product that was not in the build entries returns an unspecified value.
    #[inline]
    pub fn get(&self, product: u32) -> u16 {
        let (bucket, base) = slots(product, self.seed, self.values.len());
        let slot = (base + self.adjust[bucket] as usize) % self.values.len();
        self.values[slot]
    }

    /// Number of slots in the values table.
    pub fn values_len(&self) -> usize {
        self.values.len()
    }

    /// Number of entries in the adjustment table.
    pub fn adjust_len(&self) -> usize {
        self.adjust.len()
    }

    fn try_build(entries: &[(u32, u16)], seed: u64, size: usize) -> Option<Self> {
        let mut buckets = vec![Vec::new(); ADJUST_SIZE];
        for &(product, value) in entries {
            let (bucket, base) = slots(product, seed, size);
            buckets[bucket].push((base, value));
        }

        // Two products with the same bucket and base can never be separated.
        for bucket in &buckets {
            let mut bases = bucket.iter().map(|&(base, _)| base).collect::<Vec<_>>();
            bases.sort_unstable();
            if bases.windows(2).any(|w| w[0] == w[1]) {
                return None;
            }
        }

        let mut order = (0..ADJUST_SIZE).collect::<Vec<_>>();
        order.sort_by_key(|&b| Reverse(buckets[b].len()));

        let mut adjust = vec![0u16; ADJUST_SIZE];
        let mut values = vec![0u16; size];

        for b in order {
            let bucket = &buckets[b];
            if bucket.is_empty() {
                break;
            }

            let shift = (0..size).find(|&shift| {
                bucket
                    .iter()
                    .all(|&(base, _)| values[(base + shift) % size] == 0)
            })?;

            for &(base, value) in bucket {
                values[(base + shift) % size] = value;
            }

            adjust[b] = shift as u16;
        }

        Some(Self {
            seed,
            adjust: adjust.into_boxed_slice(),
            values: values.into_boxed_slice(),
        })
    }
}

/// Returns the bucket and base slot for a product.
#[inline]
fn slots(product: u32, seed: u64, size: usize) -> (usize, usize) {
    let h = xxh3_64_with_seed(&product.to_le_bytes(), seed);
    let bucket = (h >> 32) as usize % ADJUST_SIZE;
    let base = (h & 0xffff_ffff) as usize % size;
    (bucket, base)
}
