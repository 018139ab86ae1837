//! Suffix array construction by prefix doubling.
//!
//! Each round sorts positions by the pair `(rank[i], rank[i + k])` and
//! re-ranks them, doubling `k` until every suffix has a distinct rank. A read
//! past the end of the input sorts before every real rank, so a shorter suffix
//! precedes any longer suffix it is a prefix of. The loop finishes in
//! `O(log n)` rounds of `O(n log n)` each.

/// Build the suffix array of `data`.
///
/// The result is a permutation of `0..data.len()` such that the suffix
/// starting at `sa[i]` is lexicographically smaller than the one at
/// `sa[i + 1]`.
pub fn build(data: &[u8]) -> Vec<usize> {
    let n = data.len();
    let mut sa: Vec<usize> = (0..n).collect();
    if n <= 1 {
        return sa;
    }

    let mut rank: Vec<usize> = data.iter().map(|&b| b as usize).collect();
    let mut next = vec![0usize; n];
    let mut k = 1;

    loop {
        // Shift second-half ranks by one so that 0 means "past the end".
        let key = |i: usize| (rank[i], rank.get(i + k).map_or(0, |&r| r + 1));

        sa.sort_unstable_by_key(|&i| key(i));

        next[sa[0]] = 0;
        for w in 1..n {
            let (prev, curr) = (sa[w - 1], sa[w]);
            next[curr] = next[prev] + usize::from(key(prev) != key(curr));
        }

        std::mem::swap(&mut rank, &mut next);

        if rank[sa[n - 1]] == n - 1 {
            break;
        }
        k *= 2;
    }

    sa
}
