//! Burrows-Wheeler block transform driven by a suffix array.
//!
//! The forward transform expects its input to end with a sentinel byte that
//! occurs nowhere else. With a unique terminator the suffix order equals the
//! rotation order, so the suffix array from [`crate::suffix_array`] yields the
//! BWT directly.

use crate::suffix_array;
use blocksort_core::error::{BlocksortError, Result};

/// Pick the smallest byte value that does not occur in `data`.
///
/// Fails with `AlphabetExhausted` when all 256 values are present.
pub fn select_sentinel(data: &[u8]) -> Result<u8> {
    let mut present = [false; 256];
    for &byte in data {
        present[byte as usize] = true;
    }

    present
        .iter()
        .position(|&p| !p)
        .map(|value| value as u8)
        .ok_or(BlocksortError::AlphabetExhausted)
}

/// Copy `data` and terminate it with a freshly selected sentinel.
pub fn append_sentinel(data: &[u8]) -> Result<(Vec<u8>, u8)> {
    let sentinel = select_sentinel(data)?;
    let mut extended = Vec::with_capacity(data.len() + 1);
    extended.extend_from_slice(data);
    extended.push(sentinel);
    Ok((extended, sentinel))
}

/// Perform the transform from a precomputed suffix array.
///
/// Returns the last column and the primary index (the row holding the
/// untouched input).
pub fn transform_with_suffix_array(data: &[u8], sa: &[usize]) -> (Vec<u8>, usize) {
    debug_assert_eq!(data.len(), sa.len());

    let n = data.len();
    let mut primary_index = 0;
    let mut transformed = Vec::with_capacity(n);

    for (row, &start) in sa.iter().enumerate() {
        if start == 0 {
            primary_index = row;
        }
        transformed.push(data[(start + n - 1) % n]);
    }

    (transformed, primary_index)
}

/// Perform the transform on sentinel-terminated data.
pub fn transform(data: &[u8]) -> (Vec<u8>, usize) {
    if data.is_empty() {
        return (Vec::new(), 0);
    }

    let sa = suffix_array::build(data);
    transform_with_suffix_array(data, &sa)
}

/// Perform the inverse transform.
///
/// Walks the LF mapping from `primary_index`, filling the output from the
/// back. The result is the sentinel-terminated sequence the forward
/// transform saw.
pub fn inverse_transform(data: &[u8], primary_index: usize) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Ok(Vec::new());
    }

    let n = data.len();
    if primary_index >= n {
        return Err(BlocksortError::malformed_header(format!(
            "primary index {} out of range for {} symbols",
            primary_index, n
        )));
    }

    // rank_of[i]: occurrences of data[i] strictly before position i
    let mut counts = [0usize; 256];
    let mut rank_of = vec![0usize; n];
    for (i, &byte) in data.iter().enumerate() {
        rank_of[i] = counts[byte as usize];
        counts[byte as usize] += 1;
    }

    // first_occurrence[c]: number of bytes smaller than c
    let mut first_occurrence = [0usize; 256];
    let mut total = 0;
    for (first, &count) in first_occurrence.iter_mut().zip(counts.iter()) {
        *first = total;
        total += count;
    }

    let mut result = vec![0u8; n];
    let mut idx = primary_index;
    for slot in result.iter_mut().rev() {
        let byte = data[idx];
        *slot = byte;
        idx = first_occurrence[byte as usize] + rank_of[idx];
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_sentinel() {
        assert_eq!(select_sentinel(b"").unwrap(), 0);
        assert_eq!(select_sentinel(b"banana").unwrap(), 0);
        assert_eq!(select_sentinel(&[0, 1, 2, 4]).unwrap(), 3);

        let all: Vec<u8> = (0..=255).collect();
        assert!(matches!(
            select_sentinel(&all),
            Err(BlocksortError::AlphabetExhausted)
        ));

        let mut missing_last: Vec<u8> = (0..255).collect();
        missing_last.reverse();
        assert_eq!(select_sentinel(&missing_last).unwrap(), 255);
    }

    #[test]
    fn test_bwt_empty() {
        let (transformed, ptr) = transform(b"");
        assert!(transformed.is_empty());
        assert_eq!(ptr, 0);
        assert!(inverse_transform(b"", 0).unwrap().is_empty());
    }

    #[test]
    fn test_bwt_single() {
        let (transformed, ptr) = transform(b"\x00");
        assert_eq!(transformed, b"\x00");
        assert_eq!(ptr, 0);
        assert_eq!(inverse_transform(&transformed, ptr).unwrap(), b"\x00");
    }

    #[test]
    fn test_bwt_banana() {
        let (extended, sentinel) = append_sentinel(b"banana").unwrap();
        assert_eq!(sentinel, 0);

        let (transformed, ptr) = transform(&extended);
        assert_eq!(transformed, b"annb\x00aa");
        assert_eq!(ptr, 4);

        let recovered = inverse_transform(&transformed, ptr).unwrap();
        assert_eq!(recovered, b"banana\x00");
    }

    #[test]
    fn test_bwt_roundtrip() {
        let test_cases = [
            b"hello world".as_slice(),
            b"abracadabra",
            b"mississippi",
            b"aaaaa",
            b"abcde",
            b"the quick brown fox jumps over the lazy dog",
            &[3, 2, 1, 0, 255, 254],
        ];

        for data in test_cases {
            let (extended, _) = append_sentinel(data).unwrap();
            let (transformed, ptr) = transform(&extended);
            let recovered = inverse_transform(&transformed, ptr).unwrap();
            assert_eq!(recovered, extended, "Failed for: {:?}", data);
        }
    }

    #[test]
    fn test_bwt_groups_similar() {
        let (extended, _) = append_sentinel(b"abababababab").unwrap();
        let (transformed, _) = transform(&extended);

        let runs = 1 + transformed.windows(2).filter(|w| w[0] != w[1]).count();
        assert!(runs <= 4, "BWT should group similar bytes, got {} runs", runs);
    }

    #[test]
    fn test_inverse_rejects_bad_primary_index() {
        let err = inverse_transform(b"annb\x00aa", 7).unwrap_err();
        assert!(matches!(err, BlocksortError::MalformedHeader { .. }));
    }
}
