// src/huffman/codebook.rs

//! Derivation of per-symbol bit-strings from a Huffman tree.
//!
//! Codes are root-to-leaf paths: the zero-branch contributes a 0 bit, the
//! one-branch a 1. Distinct leaves give distinct paths, so the resulting
//! table is prefix-free by construction.

use crate::huffman::freq::FreqTable;
use crate::huffman::tree::{HuffTree, NodeId, NodeKind};
use bitvec::prelude::*;
use std::fmt;

type Code = BitVec<u8, Msb0>;

/// Mapping from byte value to its assigned code. Byte values absent from
/// the frequency table have no entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBook {
    codes: [Option<Code>; 256],
}

impl CodeBook {
    /// Walks the tree depth-first and records the accumulated path at each
    /// leaf. A lone-leaf tree has no branches to walk, so its single symbol
    /// is assigned the fixed one-bit code "0".
    pub fn from_tree(tree: &HuffTree) -> Self {
        let mut codes: [Option<Code>; 256] = std::array::from_fn(|_| None);
        match tree.node(tree.root()).kind {
            NodeKind::Leaf(symbol) => {
                codes[symbol as usize] = Some(bitvec![u8, Msb0; 0]);
            }
            NodeKind::Internal { .. } => {
                let mut path = Code::new();
                walk(tree, tree.root(), &mut path, &mut codes);
            }
        }
        Self { codes }
    }

    /// Builds the tree and derives its codes in one step. `None` when the
    /// table is entirely zero. Lets a caller holding only a decoded header
    /// inspect the codes without re-running compression.
    pub fn from_frequencies(freqs: &FreqTable) -> Option<Self> {
        HuffTree::build(freqs).map(|tree| Self::from_tree(&tree))
    }

    /// The code assigned to `byte`, if any.
    pub fn code(&self, byte: u8) -> Option<&BitSlice<u8, Msb0>> {
        self.codes[byte as usize].as_deref()
    }

    /// Iterates `(byte, code)` over assigned entries in ascending byte order.
    pub fn assigned(&self) -> impl Iterator<Item = (u8, &BitSlice<u8, Msb0>)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.as_deref().map(|code| (i as u8, code)))
    }

    /// Number of byte values holding a code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(|c| c.is_none())
    }
}

fn walk(tree: &HuffTree, id: NodeId, path: &mut Code, codes: &mut [Option<Code>; 256]) {
    match tree.node(id).kind {
        NodeKind::Leaf(symbol) => {
            codes[symbol as usize] = Some(path.clone());
        }
        NodeKind::Internal { zero, one } => {
            path.push(false);
            walk(tree, zero, path, codes);
            path.pop();
            path.push(true);
            walk(tree, one, path, codes);
            path.pop();
        }
    }
}

/// Renders one `byte -> bits` line per assigned symbol, for diagnostic
/// display of a code table.
impl fmt::Display for CodeBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (byte, code) in self.assigned() {
            let bits: String = code
                .iter()
                .by_vals()
                .map(|b| if b { '1' } else { '0' })
                .collect();
            if byte.is_ascii_graphic() {
                writeln!(f, "{:#04x} '{}' -> {}", byte, byte as char, bits)?;
            } else {
                writeln!(f, "{:#04x}     -> {}", byte, bits)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_of(pairs: &[(u8, u64)]) -> FreqTable {
        let mut counts = [0u64; 256];
        for &(b, c) in pairs {
            counts[b as usize] = c;
        }
        FreqTable::from_counts(counts)
    }

    #[test]
    fn single_symbol_gets_the_fixed_code_zero() {
        let book = CodeBook::from_frequencies(&table_of(&[(b'z', 9)])).unwrap();
        assert_eq!(book.len(), 1);
        let code = book.code(b'z').unwrap();
        assert_eq!(code.len(), 1);
        assert!(!code[0]);
    }

    #[test]
    fn absent_symbols_have_no_entry() {
        let book = CodeBook::from_frequencies(&table_of(&[(b'a', 3), (b'b', 1)])).unwrap();
        assert!(book.code(b'c').is_none());
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn two_symbols_get_one_bit_each() {
        let book = CodeBook::from_frequencies(&table_of(&[(b'a', 3), (b'b', 1)])).unwrap();
        assert_eq!(book.code(b'a').unwrap().len(), 1);
        assert_eq!(book.code(b'b').unwrap().len(), 1);
        // the two codes must differ in their single bit
        assert_ne!(book.code(b'a').unwrap()[0], book.code(b'b').unwrap()[0]);
    }

    #[test]
    fn codes_are_prefix_free() {
        let freqs = table_of(&[
            (b'a', 45),
            (b'b', 13),
            (b'c', 12),
            (b'd', 16),
            (b'e', 9),
            (b'f', 5),
        ]);
        let book = CodeBook::from_frequencies(&freqs).unwrap();
        let entries: Vec<_> = book.assigned().collect();
        assert_eq!(entries.len(), 6);
        for (i, &(_, a)) in entries.iter().enumerate() {
            for (j, &(_, b)) in entries.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a), "code {:?} is a prefix of {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn more_frequent_symbols_never_get_longer_codes() {
        let freqs = table_of(&[(1, 100), (2, 50), (3, 10), (4, 1)]);
        let book = CodeBook::from_frequencies(&freqs).unwrap();
        let mut entries: Vec<(u8, usize)> = book
            .assigned()
            .map(|(byte, code)| (byte, code.len()))
            .collect();
        entries.sort_by_key(|&(byte, _)| byte);
        for window in entries.windows(2) {
            // bytes 1..=4 are in descending frequency order
            assert!(window[0].1 <= window[1].1);
        }
    }

    #[test]
    fn rebuild_from_same_frequencies_is_identical() {
        let freqs = table_of(&[(10, 5), (20, 5), (30, 5), (40, 5), (50, 2)]);
        let a = CodeBook::from_frequencies(&freqs).unwrap();
        let b = CodeBook::from_frequencies(&freqs).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn display_lists_one_line_per_symbol() {
        let book = CodeBook::from_frequencies(&table_of(&[(b'a', 3), (b'b', 1)])).unwrap();
        let rendered = book.to_string();
        assert_eq!(rendered.lines().count(), 2);
        assert!(rendered.contains("'a'"));
        assert!(rendered.contains("'b'"));
    }
}
