// src/huffman/freq.rs

//! Byte-value frequency statistics, the sole input to tree construction.

use crate::utils::error::Result;
use std::io::{self, Read};

const SCAN_BUF_LEN: usize = 8 * 1024;

/// Occurrence counts for every possible byte value 0..=255.
///
/// The sum of all counts equals the number of bytes scanned. A table is
/// built once per compress call (or reconstructed from a persisted header
/// during decompress) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreqTable {
    counts: [u64; 256],
}

impl FreqTable {
    /// Creates an empty table with all counts at zero.
    pub fn new() -> Self {
        Self { counts: [0; 256] }
    }

    /// Wraps an existing count array, e.g. one decoded from a header.
    pub fn from_counts(counts: [u64; 256]) -> Self {
        Self { counts }
    }

    /// Builds a table by reading the source to exhaustion.
    pub fn scan<R: Read>(source: &mut R) -> Result<Self> {
        let mut table = Self::new();
        let mut buf = [0u8; SCAN_BUF_LEN];
        loop {
            match source.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => {
                    for &byte in &buf[..n] {
                        table.tally(byte);
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(table)
    }

    /// Records one occurrence of `byte`.
    pub fn tally(&mut self, byte: u8) {
        self.counts[byte as usize] += 1;
    }

    /// The count recorded for `byte`.
    pub fn get(&self, byte: u8) -> u64 {
        self.counts[byte as usize]
    }

    /// Total number of bytes scanned.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Number of byte values with a nonzero count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// The full 256-entry count array, in byte-value order.
    pub fn counts(&self) -> &[u64; 256] {
        &self.counts
    }

    /// Iterates `(byte, count)` over nonzero entries in ascending byte order.
    pub fn nonzero(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(i, &c)| (i as u8, c))
    }
}

impl Default for FreqTable {
    fn default() -> Self {
        Self::new()
    }
}
