//! Move-to-Front (rank-list) transform.
//!
//! Each byte is replaced by its position in a 256-entry recency list, after
//! which the byte moves to the front of the list. Runs left by the BWT turn
//! into runs of zeros. Encoder and decoder start from the identity order and
//! apply the same moves, so their lists never diverge.

/// Fixed-capacity recency list over all byte values.
///
/// `rank` is the inverse permutation of `order`, so lookups are O(1).
#[derive(Debug, Clone)]
struct RecencyList {
    order: [u8; 256],
    rank: [u8; 256],
}

impl RecencyList {
    /// Identity order `0, 1, ..., 255`.
    fn identity() -> Self {
        let mut order = [0u8; 256];
        for (slot, value) in order.iter_mut().zip(0..=255u8) {
            *slot = value;
        }
        Self { order, rank: order }
    }

    /// Current rank of `byte`.
    fn rank_of(&self, byte: u8) -> usize {
        self.rank[byte as usize] as usize
    }

    /// Move the entry at `rank` to the front and return it.
    fn promote(&mut self, rank: usize) -> u8 {
        let byte = self.order[rank];
        self.order.copy_within(0..rank, 1);
        self.order[0] = byte;
        for &moved in &self.order[1..=rank] {
            self.rank[moved as usize] += 1;
        }
        self.rank[byte as usize] = 0;
        byte
    }
}

/// Perform Move-to-Front transform.
pub fn transform(data: &[u8]) -> Vec<u8> {
    let mut list = RecencyList::identity();
    let mut result = Vec::with_capacity(data.len());

    for &byte in data {
        let rank = list.rank_of(byte);
        result.push(rank as u8);
        list.promote(rank);
    }

    result
}

/// Perform inverse Move-to-Front transform.
pub fn inverse_transform(ranks: &[u8]) -> Vec<u8> {
    let mut list = RecencyList::identity();
    ranks
        .iter()
        .map(|&rank| list.promote(rank as usize))
        .collect()
}
