//! Concurrency test: one generator shared across threads.
//!
//! Generators hold no mutable state, so parallel calls need no locking and
//! must not produce colliding outputs.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::thread;

use randcode::{Generator, PasswordBlock, Preset, SeededSource};

#[test]
fn stress_50_threads_share_one_generator() {
    let generator = Arc::new(Generator::new());
    let tokens = Arc::new(Mutex::new(Vec::new()));

    let mut handles = Vec::new();
    for _ in 0..50 {
        let generator = Arc::clone(&generator);
        let tokens = Arc::clone(&tokens);
        let handle = thread::spawn(move || {
            for _ in 0..100 {
                let token = generator.alphanumeric(24).expect("token");
                tokens.lock().unwrap().push(token);
            }
        });
        handles.push(handle);
    }

    for h in handles {
        h.join().unwrap();
    }

    let tokens = tokens.lock().unwrap();
    assert_eq!(tokens.len(), 5_000);
    let unique: HashSet<&String> = tokens.iter().collect();
    assert_eq!(unique.len(), 5_000, "24-symbol tokens should never collide");
}

#[test]
fn stress_parallel_passwords_keep_their_shape() {
    let generator = Arc::new(Generator::new());
    let blocks = Arc::new(vec![
        PasswordBlock::new(Preset::Digits).length(2, 4).sticky(true),
        PasswordBlock::new(Preset::Letters),
    ]);

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let generator = Arc::clone(&generator);
            let blocks = Arc::clone(&blocks);
            thread::spawn(move || {
                for _ in 0..200 {
                    let password = generator.password(16, &blocks).expect("password");
                    assert_eq!(password.len(), 16);
                    let digits = password.chars().filter(char::is_ascii_digit).count();
                    assert!((2..=4).contains(&digits));
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}

#[test]
fn stress_seeded_source_is_shareable() {
    let generator = Arc::new(Generator::with_source(SeededSource::insecure_from_seed(8)));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let generator = Arc::clone(&generator);
            thread::spawn(move || {
                for _ in 0..500 {
                    assert_eq!(generator.hex(16).expect("hex").len(), 16);
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}
