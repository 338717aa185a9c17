//! Integration tests: password plans, sticky blocks, shuffling and plan errors.

use std::cell::Cell;

use randcode::source::from_fn;
use randcode::{Alphabet, Generator, PasswordBlock, PasswordPlan, Preset, RandomError, SeededSource};

#[test]
fn sticky_digits_and_scattered_letters() {
    let generator = Generator::new();
    let blocks = [
        PasswordBlock::new(Preset::Digits).length(2, 4).sticky(true),
        PasswordBlock::new(Preset::Letters),
    ];

    let mut digit_positions = std::collections::HashSet::new();
    for _ in 0..300 {
        let password = generator.password(10, &blocks).expect("password");
        assert_eq!(password.chars().count(), 10);

        let first = password.find(|c: char| c.is_ascii_digit()).expect("digits present");
        let last = password.rfind(|c: char| c.is_ascii_digit()).expect("digits present");
        let run = &password[first..=last];
        assert!(run.chars().all(|c| c.is_ascii_digit()), "digits split: {password}");
        assert!((2..=4).contains(&run.len()), "run length: {password}");
        assert!(password.chars().filter(|c| !c.is_ascii_digit()).all(|c| c.is_ascii_alphabetic()));

        digit_positions.insert(first);
    }
    // The sticky run is shuffled; it must not always land in the same place.
    assert!(digit_positions.len() > 1);
}

#[test]
fn over_allocated_plan_fails_before_drawing() {
    let draws = Cell::new(0u32);
    let generator = Generator::with_source(from_fn(|buf: &mut [u8]| {
        draws.set(draws.get() + 1);
        buf.fill(0);
        Ok(())
    }));
    let blocks = [
        PasswordBlock::new(Alphabet::new("xyz").expect("alphabet")).length(3, 3),
        PasswordBlock::new(Alphabet::new("XYZ").expect("alphabet")).length(4, 4),
    ];

    let err = generator.password(5, &blocks).expect_err("3 + 4 > 5");
    assert!(matches!(err, RandomError::InvalidBlockPlan(_)));
    assert_eq!(draws.get(), 0, "no bytes may be drawn for an invalid plan");
}

#[test]
fn min_greater_than_max_is_rejected() {
    let generator = Generator::new();
    let blocks = [
        PasswordBlock::new(Preset::Digits).length(4, 1),
        PasswordBlock::new(Preset::Letters),
    ];
    assert!(matches!(
        generator.password(10, &blocks),
        Err(RandomError::InvalidBlockPlan(_))
    ));
}

#[test]
fn last_block_fills_up() {
    let generator = Generator::new();
    let blocks = [
        PasswordBlock::new(Preset::Uppercase).length(1, 1),
        PasswordBlock::new(Preset::Digits).length(1, 1),
        PasswordBlock::new(Preset::Lowercase).length(1, 2),
    ];
    let password = generator.password(20, &blocks).expect("password");
    assert_eq!(password.len(), 20);
    assert_eq!(password.chars().filter(char::is_ascii_lowercase).count(), 18);
}

#[test]
fn seeded_generation_is_reproducible() {
    let plan = PasswordPlan::new(16)
        .block(PasswordBlock::new(Preset::Digits).length(2, 3).sticky(true))
        .block(PasswordBlock::new(Alphabet::new("!#%&").expect("alphabet")).length(1, 2))
        .block(PasswordBlock::new(Preset::Letters));

    let a = Generator::with_source(SeededSource::insecure_from_seed(2024))
        .password_plan(&plan)
        .expect("password");
    let b = Generator::with_source(SeededSource::insecure_from_seed(2024))
        .password_plan(&plan)
        .expect("password");
    assert_eq!(a, b);
    assert_eq!(a.len(), 16);
}

#[test]
fn json_plan_drives_generation() {
    let plan = PasswordPlan::from_json(
        r#"{
            "length": 14,
            "blocks": [
                {"preset": "uppercase", "min_length": 1, "max_length": 2},
                {"alphabet": "-_.", "min_length": 1, "max_length": 1, "sticky": true},
                {"preset": "lowercase"}
            ]
        }"#,
    )
    .expect("plan");

    let password = Generator::new().password_plan(&plan).expect("password");
    assert_eq!(password.len(), 14);
    assert_eq!(password.chars().filter(|c| "-_.".contains(*c)).count(), 1);
}
