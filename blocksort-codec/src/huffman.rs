//! Huffman coding over a 256-entry frequency table.
//!
//! Only the frequency table travels in the container; the decoder rebuilds
//! the tree from it. Construction is therefore fully deterministic: nodes are
//! ordered by `(frequency, tiebreak)` where a leaf's tiebreak is its symbol
//! and an internal node's is `256 + creation index`. Every key is unique, so
//! the merge sequence does not depend on heap internals or insertion order.
//!
//! A table with a single used symbol yields a lone leaf. Its code is the one
//! bit `0`; the encoder still emits that bit per occurrence, but the decoder
//! reads nothing and repeats the symbol `n` times.

use crate::config::FREQ_TABLE_LEN;
use blocksort_core::error::Result;
use blocksort_core::{BitReader, BitWriter};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Symbol counts indexed by byte value.
pub type FrequencyTable = [u32; FREQ_TABLE_LEN];

/// Count how often each byte value occurs in `symbols`.
pub fn count_frequencies(symbols: &[u8]) -> FrequencyTable {
    let mut freqs = [0u32; FREQ_TABLE_LEN];
    for &sym in symbols {
        freqs[sym as usize] += 1;
    }
    freqs
}

/// A node of a Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    /// A symbol with its frequency.
    Leaf {
        /// Byte value.
        symbol: u8,
        /// Occurrence count.
        freq: u64,
    },
    /// Merge of two subtrees.
    Internal {
        /// Sum of both children.
        freq: u64,
        /// Subtree reached by a `0` bit.
        left: Box<HuffmanNode>,
        /// Subtree reached by a `1` bit.
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    /// Aggregate frequency of this subtree.
    pub fn freq(&self) -> u64 {
        match self {
            Self::Leaf { freq, .. } | Self::Internal { freq, .. } => *freq,
        }
    }
}

/// A variable-length code, right-aligned in `bits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code {
    /// Code bits, the first bit to emit being the most significant.
    pub bits: u64,
    /// Number of bits.
    pub len: u8,
}

impl Code {
    /// Append this code to `writer`.
    #[inline]
    pub fn write(&self, writer: &mut BitWriter) {
        for i in (0..self.len).rev() {
            writer.write_bit((self.bits >> i) & 1 == 1);
        }
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in (0..self.len).rev() {
            write!(f, "{}", (self.bits >> i) & 1)?;
        }
        Ok(())
    }
}

/// Symbol to code mapping for every symbol present in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: [Option<Code>; FREQ_TABLE_LEN],
}

impl CodeTable {
    /// Code for `symbol`, if it has a non-zero frequency.
    pub fn get(&self, symbol: u8) -> Option<Code> {
        self.codes[symbol as usize]
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.iter().flatten().count()
    }

    /// Whether no symbol has a code.
    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(Option::is_none)
    }

    /// Longest code length.
    pub fn max_len(&self) -> u8 {
        self.codes.iter().flatten().map(|c| c.len).max().unwrap_or(0)
    }

    /// Payload size in bits for a stream with the given frequencies.
    pub fn encoded_bits(&self, freqs: &FrequencyTable) -> u64 {
        self.codes
            .iter()
            .zip(freqs.iter())
            .filter_map(|(code, &freq)| code.map(|c| c.len as u64 * freq as u64))
            .sum()
    }
}

/// A subtree waiting in the merge heap.
///
/// Ordered so that `BinaryHeap` pops the lowest `(freq, key)` first. Keys are
/// unique: leaves use their symbol, merged nodes `256 + creation index`.
#[derive(Debug)]
struct Pending {
    freq: u64,
    key: usize,
    node: HuffmanNode,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        (self.freq, self.key) == (other.freq, other.key)
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.freq, other.key).cmp(&(self.freq, self.key))
    }
}

/// A Huffman tree rebuilt identically on both sides from a frequency table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffmanNode,
}

impl HuffmanTree {
    /// Build a tree from `freqs`; `None` when every count is zero.
    pub fn build(freqs: &FrequencyTable) -> Option<Self> {
        let mut heap: BinaryHeap<Pending> = freqs
            .iter()
            .enumerate()
            .filter(|&(_, &freq)| freq > 0)
            .map(|(symbol, &freq)| Pending {
                freq: u64::from(freq),
                key: symbol,
                node: HuffmanNode::Leaf {
                    symbol: symbol as u8,
                    freq: u64::from(freq),
                },
            })
            .collect();

        let mut next_key = FREQ_TABLE_LEN;
        let root = loop {
            let left = heap.pop()?;
            let Some(right) = heap.pop() else {
                break left.node;
            };

            let freq = left.freq + right.freq;
            heap.push(Pending {
                freq,
                key: next_key,
                node: HuffmanNode::Internal {
                    freq,
                    left: Box::new(left.node),
                    right: Box::new(right.node),
                },
            });
            next_key += 1;
        };

        log::trace!("huffman tree built, root frequency {}", root.freq());
        Some(Self { root })
    }

    /// Root node.
    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    /// The symbol of a lone-leaf tree.
    pub fn single_symbol(&self) -> Option<u8> {
        match self.root {
            HuffmanNode::Leaf { symbol, .. } => Some(symbol),
            HuffmanNode::Internal { .. } => None,
        }
    }

    /// Assign codes by depth-first walk: `0` for left, `1` for right.
    pub fn code_table(&self) -> CodeTable {
        let mut codes = [None; FREQ_TABLE_LEN];

        if let Some(symbol) = self.single_symbol() {
            codes[symbol as usize] = Some(Code { bits: 0, len: 1 });
            return CodeTable { codes };
        }

        fn walk(node: &HuffmanNode, prefix: Code, codes: &mut [Option<Code>; FREQ_TABLE_LEN]) {
            match node {
                HuffmanNode::Leaf { symbol, .. } => codes[*symbol as usize] = Some(prefix),
                HuffmanNode::Internal { left, right, .. } => {
                    let deeper = |bit: u64| Code {
                        bits: (prefix.bits << 1) | bit,
                        len: prefix.len + 1,
                    };
                    walk(left, deeper(0), codes);
                    walk(right, deeper(1), codes);
                }
            }
        }

        walk(&self.root, Code { bits: 0, len: 0 }, &mut codes);
        CodeTable { codes }
    }

    /// Decode one symbol by walking from the root.
    ///
    /// A lone-leaf tree returns its symbol without consuming a bit.
    pub fn decode_symbol(&self, reader: &mut BitReader<'_>) -> Result<u8> {
        let mut node = &self.root;
        loop {
            match node {
                HuffmanNode::Leaf { symbol, .. } => return Ok(*symbol),
                HuffmanNode::Internal { left, right, .. } => {
                    node = if reader.read_bit()? { right.as_ref() } else { left.as_ref() };
                }
            }
        }
    }

    /// Decode exactly `count` symbols.
    pub fn decode(&self, reader: &mut BitReader<'_>, count: usize) -> Result<Vec<u8>> {
        if let Some(symbol) = self.single_symbol() {
            return Ok(vec![symbol; count]);
        }

        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            out.push(self.decode_symbol(reader)?);
        }
        Ok(out)
    }
}

/// Bit-pack `symbols` with `codes`, zero-padding the final byte.
pub fn pack(symbols: &[u8], codes: &CodeTable, freqs: &FrequencyTable) -> Vec<u8> {
    let bits = codes.encoded_bits(freqs);
    let mut writer = BitWriter::with_capacity(bits.div_ceil(8) as usize);
    for &sym in symbols {
        if let Some(code) = codes.get(sym) {
            code.write(&mut writer);
        }
    }
    writer.finish()
}
