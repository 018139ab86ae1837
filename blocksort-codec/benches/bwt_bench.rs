//! Timing run for the suffix-array BWT, forward and inverse.

use blocksort_codec::{bwt, suffix_array};

fn main() {
    // Prefix doubling re-sorts once per doubling round; long runs of one
    // byte force the most rounds.
    let test_cases = vec![
        ("small_text", generate_text(1024)),
        ("medium_text", generate_text(64 * 1024)),
        ("large_text", generate_text(256 * 1024)),
        ("small_random", generate_random(1024)),
        ("medium_random", generate_random(64 * 1024)),
        ("small_repeated", generate_repeated(1024)),
        ("medium_repeated", generate_repeated(16 * 1024)),
    ];

    println!("Suffix-array BWT Benchmarks");
    println!("===========================\n");

    for (name, data) in &test_cases {
        println!("Test: {} ({} bytes)", name, data.len());

        let (extended, _sentinel) = match bwt::append_sentinel(data) {
            Ok(v) => v,
            Err(e) => {
                println!("  skipped: {}\n", e);
                continue;
            }
        };

        let start = std::time::Instant::now();
        let sa = suffix_array::build(&extended);
        let sort_time = start.elapsed();

        let start = std::time::Instant::now();
        let (transformed, primary_index) = bwt::transform_with_suffix_array(&extended, &sa);
        let forward_time = start.elapsed();

        let start = std::time::Instant::now();
        let reconstructed = match bwt::inverse_transform(&transformed, primary_index) {
            Ok(v) => v,
            Err(e) => panic!("inverse BWT failed for {}: {}", name, e),
        };
        let inverse_time = start.elapsed();

        assert_eq!(reconstructed, extended, "BWT roundtrip failed for {}", name);

        let mbps = |secs: f64| data.len() as f64 / secs / 1024.0 / 1024.0;
        println!(
            "  Sort:     {:7.2} MB/s ({:8} µs)",
            mbps(sort_time.as_secs_f64()),
            sort_time.as_micros()
        );
        println!(
            "  Forward:  {:7.2} MB/s ({:8} µs)",
            mbps(forward_time.as_secs_f64()),
            forward_time.as_micros()
        );
        println!(
            "  Inverse:  {:7.2} MB/s ({:8} µs)",
            mbps(inverse_time.as_secs_f64()),
            inverse_time.as_micros()
        );
        println!(
            "  Total:    {:8} µs",
            (sort_time + forward_time + inverse_time).as_micros()
        );
        println!();
    }
}

fn generate_text(size: usize) -> Vec<u8> {
    let words: &[&[u8]] = &[
        b"the", b"quick", b"brown", b"fox", b"jumps", b"over", b"lazy", b"dog", b"and", b"runs",
        b"through", b"forest", b"near", b"river", b"under", b"blue", b"sky",
    ];

    let mut data = Vec::with_capacity(size);
    let mut seed = 42u32;

    while data.len() < size {
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        let word_idx = (seed as usize) % words.len();
        data.extend_from_slice(words[word_idx]);
        data.push(b' ');
    }
    data.truncate(size);
    data
}

fn generate_random(size: usize) -> Vec<u8> {
    // Upper bits only, and 0xFF is reserved so a sentinel stays free
    let mut data = Vec::with_capacity(size);
    let mut seed = 12345u32;
    for _ in 0..size {
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        data.push(((seed >> 16) as u8).min(0xFE));
    }
    data
}

fn generate_repeated(size: usize) -> Vec<u8> {
    let pattern = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let mut data = Vec::with_capacity(size);
    while data.len() < size {
        data.extend_from_slice(pattern);
    }
    data.truncate(size);
    data
}
