//! Static Huffman machinery: frequency statistics, optimal tree
//! construction, and per-symbol code derivation.

pub mod codebook;
pub mod freq;
pub mod tree;

pub use codebook::CodeBook;
pub use freq::FreqTable;
pub use tree::HuffTree;
