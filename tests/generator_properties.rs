//! Property-based tests for password generation, strength scoring and the
//! history log.

use passgen::models::{alphabet_for, CharacterClass, ClassSelection, GenerationRequest};
use passgen::services::{evaluate, generate_password, strength, HistoryLog, HISTORY_CAPACITY};
use passgen::storage::Storage;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Any non-empty subset of the four character classes
fn arb_selection() -> impl Strategy<Value = ClassSelection> {
    (1u8..16).prop_map(|mask| {
        CharacterClass::all()
            .into_iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, class)| class)
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_password_has_requested_length_and_alphabet(
        selection in arb_selection(),
        length in 0usize..64,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let request = GenerationRequest::new(selection.clone(), length);
        let password = generate_password(&mut rng, &request).unwrap();

        let alphabet = alphabet_for(&selection);
        prop_assert_eq!(password.len(), length);
        prop_assert!(password.as_str().chars().all(|c| alphabet.contains(c)));
    }

    #[test]
    fn strength_is_deterministic_and_bounded(password in "\\PC{0,40}") {
        prop_assert_eq!(evaluate(&password), evaluate(&password));
        prop_assert!(strength::score(&password) <= 8);
        prop_assert_eq!(evaluate(&password).is_none(), password.is_empty());
    }

    #[test]
    fn history_never_exceeds_capacity(count in 0usize..40) {
        let storage = Storage::in_memory();
        let log = HistoryLog::new(&storage);
        for i in 0..count {
            log.append(&format!("pw-{}", i)).unwrap();
        }

        let entries = log.list().unwrap();
        prop_assert_eq!(entries.len(), count.min(HISTORY_CAPACITY));
        if count > 0 {
            let newest = format!("pw-{}", count - 1);
            prop_assert_eq!(&entries[0].password, &newest);
        }
    }
}

#[test]
fn empty_selection_is_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    let request = GenerationRequest::new(ClassSelection::new(), 12);
    assert!(generate_password(&mut rng, &request).is_err());
}
