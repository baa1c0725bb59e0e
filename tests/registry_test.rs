//! Concurrency and end-to-end tests for the session registry.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::thread;

use melting_snowman::{FixedWord, RegistryError, SessionRegistry};

fn banana_registry() -> Arc<SessionRegistry> {
    Arc::new(SessionRegistry::with_words(Arc::new(FixedWord::new(
        "banana",
    ))))
}

#[test]
fn test_concurrent_creates_yield_unique_gapless_ids() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 25;

    let registry = banana_registry();
    let mut handles = Vec::new();

    for _ in 0..THREADS {
        let registry = Arc::clone(&registry);
        handles.push(thread::spawn(move || {
            (0..PER_THREAD)
                .map(|_| registry.create_session().unwrap())
                .collect::<Vec<_>>()
        }));
    }

    let mut ids = BTreeSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(ids.insert(id), "duplicate session ID {id}");
        }
    }

    let expected: BTreeSet<u64> = (1..=(THREADS * PER_THREAD) as u64).collect();
    assert_eq!(ids, expected);
    assert_eq!(registry.count(), THREADS * PER_THREAD);
}

#[test]
fn test_concurrent_guesses_lose_no_updates() {
    const THREADS: usize = 8;
    const PER_THREAD: u64 = 25;

    let registry = banana_registry();
    let id = registry.create_session().unwrap();

    let mut handles = Vec::new();
    for _ in 0..THREADS {
        let registry = Arc::clone(&registry);
        handles.push(thread::spawn(move || {
            for _ in 0..PER_THREAD {
                registry.apply_guess(id, "a").unwrap();
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    let status = registry.status(id).unwrap();
    assert_eq!(status.guess_count, THREADS as u64 * PER_THREAD);
}

#[test]
fn test_full_game_scenario() {
    let registry = banana_registry();

    let id = registry.create_session().unwrap();
    assert_eq!(id, 1);

    let status = registry.status(id).unwrap();
    assert_eq!(status.word, "banana");
    assert_eq!(status.guess_count, 0);

    let outcome = registry.apply_guess(id, "a").unwrap();
    assert_eq!(outcome.occurrences, 3);
    assert_eq!(outcome.word, "banana");
    assert_eq!(outcome.guess_count, 1);

    let outcome = registry.apply_guess(id, "z").unwrap();
    assert_eq!(outcome.occurrences, 0);
    assert_eq!(outcome.word, "banana");
    assert_eq!(outcome.guess_count, 2);
}

#[test]
fn test_not_found_regardless_of_other_sessions() {
    let registry = banana_registry();
    for _ in 0..5 {
        registry.create_session().unwrap();
    }

    assert_eq!(
        registry.status(999),
        Err(RegistryError::NotFound { id: 999 })
    );
    assert_eq!(
        registry.apply_guess(999, "a"),
        Err(RegistryError::NotFound { id: 999 })
    );
    assert_eq!(registry.count(), 5);
}
