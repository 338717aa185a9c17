//! Stress test: distribution of mapped symbols over many draws.
//!
//! The bucket mapping is only approximately uniform when 256 is not a
//! multiple of the alphabet size; these tests bound how far it can drift.

use std::collections::HashMap;

use randcode::mapper::{bucket_index, map_bytes};
use randcode::{Alphabet, Generator, Preset, SeededSource};

#[test]
fn stress_exact_bucket_counts_over_all_bytes() {
    let all_bytes: Vec<u8> = (0..=u8::MAX).collect();
    for size in 1..=256usize {
        let mut counts = vec![0usize; size];
        for &byte in &all_bytes {
            counts[bucket_index(byte, size)] += 1;
        }
        let floor = 256 / size;
        let ceil = floor + usize::from(256 % size != 0);
        assert!(
            counts.iter().all(|&c| c == floor || c == ceil),
            "size {size}: bucket widths {counts:?}"
        );
    }
}

#[test]
fn stress_power_of_two_alphabets_are_exactly_uniform() {
    let all_bytes: Vec<u8> = (0..=u8::MAX).collect();
    for preset in [Preset::Hex, Preset::UrlSafe] {
        let alphabet = preset.alphabet();
        let out = map_bytes(&all_bytes, &alphabet);
        let mut counts: HashMap<char, usize> = HashMap::new();
        for c in out.chars() {
            *counts.entry(c).or_default() += 1;
        }
        let expected = 256 / alphabet.len();
        assert_eq!(counts.len(), alphabet.len());
        assert!(counts.values().all(|&c| c == expected), "{preset}");
    }
}

#[test]
fn stress_100k_digits_are_roughly_uniform() {
    let generator = Generator::with_source(SeededSource::insecure_from_seed(1234));
    let digits = generator.number(100_000, false).expect("digits");

    let mut counts = [0usize; 10];
    for c in digits.bytes() {
        counts[usize::from(c - b'0')] += 1;
    }
    // Buckets are 25 or 26 bytes wide: expected shares 9.77% / 10.16%.
    for (digit, &count) in counts.iter().enumerate() {
        assert!(
            (9_000..=11_000).contains(&count),
            "digit {digit} drawn {count} times"
        );
    }
}

#[test]
fn stress_large_alphabet_all_symbols_seen() {
    let alphabet = Alphabet::from_symbols((0..200u32).filter_map(|i| char::from_u32(0x0400 + i)))
        .expect("alphabet");
    let generator = Generator::new();
    let s = generator.string(20_000, &alphabet).expect("string");
    for &symbol in alphabet.symbols() {
        assert!(s.contains(symbol), "symbol {symbol:?} never drawn");
    }
}
