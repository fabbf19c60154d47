//! Password generation.
//!
//! Draws one character at a time from a working copy of the charset. Once a
//! character has been drawn `max_duplicate` times it is dropped from the
//! working set and can never be drawn again. There is no backtracking, so the
//! cap always holds, but the result is not uniform over all valid passwords:
//! later positions choose from a smaller pool.

use std::collections::HashMap;

use log::{debug, warn};
use zeroize::Zeroizing;

use super::charset::Charset;
use crate::entropy::RandomSource;
use crate::error::{Error, Result};

/// A generated password, wiped from memory on drop.
pub type Password = Zeroizing<String>;

/// Smallest duplicate limit that can still produce `length` characters.
pub fn minimum_duplicate_limit(length: usize, charset_len: usize) -> usize {
    if charset_len == 0 {
        return usize::MAX;
    }
    length.div_ceil(charset_len)
}

/// `charset_len * max_duplicate >= length`, with 0 meaning no limit.
pub fn feasible(charset_len: usize, length: usize, max_duplicate: usize) -> bool {
    if length == 0 {
        return true;
    }
    if charset_len == 0 {
        return false;
    }
    max_duplicate == 0 || charset_len.saturating_mul(max_duplicate) >= length
}

/// Generate one password of `length` characters from `charset`.
///
/// `max_duplicate == 0` allows unlimited repeats.
pub fn generate<R: RandomSource + ?Sized>(
    charset: &Charset,
    length: usize,
    max_duplicate: usize,
    rng: &mut R,
) -> Result<Password> {
    let mut password = Zeroizing::new(String::new());
    if length == 0 {
        return Ok(password);
    }
    if charset.is_empty() {
        return Err(Error::EmptyCharset);
    }
    // Reserve the worst case up front: a reallocation would free an unwiped copy.
    let widest = charset.iter().map(char::len_utf8).max().unwrap_or(1);
    length
        .checked_mul(widest)
        .and_then(|bytes| password.try_reserve_exact(bytes).ok())
        .ok_or(Error::TooLong { length })?;

    let mut working: Zeroizing<Vec<char>> = Zeroizing::new(charset.iter().collect());
    let mut counts: HashMap<char, usize> = HashMap::new();
    let mut produced = 0;

    debug!(
        "generating {length} chars from {} candidates, max duplicate {max_duplicate}",
        working.len()
    );

    while produced < length {
        let Some(&c) = rng.choose(working.as_slice()) else {
            let minimum = minimum_duplicate_limit(length, charset.len());
            warn!("working set exhausted after {produced} of {length} characters");
            return Err(Error::Exhausted {
                produced,
                length,
                minimum,
            });
        };
        password.push(c);
        produced += 1;

        if max_duplicate > 0 {
            let seen = counts.entry(c).or_insert(0);
            *seen += 1;
            if *seen >= max_duplicate
                && let Some(pos) = working.iter().position(|w| *w == c)
            {
                working.remove(pos);
                debug!("working set shrank to {}", working.len());
            }
        }
    }

    Ok(password)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::entropy::scripted::Scripted;
    use crate::pass::charset::CharClasses;

    fn init() {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Trace)
            .try_init();
    }

    fn occurrences(password: &str) -> HashMap<char, usize> {
        let mut counts = HashMap::new();
        for c in password.chars() {
            *counts.entry(c).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn length_and_membership_without_limit() {
        init();
        let charset = Charset::build(&CharClasses::all(), "", "");
        let mut rng = StdRng::seed_from_u64(1);
        for length in [1, 8, 12, 64, 300] {
            let pass = generate(&charset, length, 0, &mut rng).unwrap();
            assert_eq!(pass.chars().count(), length);
            assert!(pass.chars().all(|c| charset.iter().any(|x| x == c)));
        }
    }

    #[test]
    fn single_char_charset_repeats() {
        let charset: Charset = "x".chars().collect();
        let mut rng = StdRng::seed_from_u64(2);
        let pass = generate(&charset, 5, 0, &mut rng).unwrap();
        assert_eq!(pass.as_str(), "xxxxx");
    }

    #[test]
    fn zero_length_is_empty() {
        let mut rng = StdRng::seed_from_u64(3);
        let charset: Charset = "abc".chars().collect();
        assert!(generate(&charset, 0, 0, &mut rng).unwrap().is_empty());
        assert!(generate(&charset, 0, 1, &mut rng).unwrap().is_empty());
        assert!(generate(&Charset::default(), 0, 0, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn empty_charset_fails() {
        let mut rng = StdRng::seed_from_u64(4);
        let err = generate(&Charset::default(), 3, 0, &mut rng).unwrap_err();
        assert!(matches!(err, Error::EmptyCharset));
    }

    #[test]
    fn cap_respected() {
        init();
        let charset: Charset = "ABC".chars().collect();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let pass = generate(&charset, 6, 2, &mut rng).unwrap();
            assert_eq!(pass.len(), 6);
            let counts = occurrences(&pass);
            assert_eq!(counts.len(), 3);
            assert!(counts.values().all(|n| *n == 2), "{}", pass.as_str());
        }
    }

    #[test]
    fn cap_respected_below_boundary() {
        let charset = Charset::build(&CharClasses { digits: true, ..Default::default() }, "", "");
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..100 {
            let pass = generate(&charset, 15, 2, &mut rng).unwrap();
            assert_eq!(pass.len(), 15);
            assert!(occurrences(&pass).values().all(|n| *n <= 2));
        }
    }

    #[test]
    fn exact_boundary_succeeds() {
        let charset: Charset = "abcde".chars().collect();
        let mut rng = StdRng::seed_from_u64(7);
        let pass = generate(&charset, 5, 1, &mut rng).unwrap();
        let mut chars: Vec<char> = pass.chars().collect();
        chars.sort_unstable();
        assert_eq!(chars, vec!['a', 'b', 'c', 'd', 'e']);
    }

    #[test]
    fn past_boundary_fails_explicitly() {
        let charset: Charset = "abcde".chars().collect();
        let mut rng = StdRng::seed_from_u64(8);
        match generate(&charset, 6, 1, &mut rng) {
            Err(Error::Exhausted {
                produced,
                length,
                minimum,
            }) => {
                assert_eq!(produced, 5);
                assert_eq!(length, 6);
                assert_eq!(minimum, 2);
            }
            other => panic!("expected exhaustion, got {other:?}"),
        }
    }

    #[test]
    fn exhausted_characters_are_not_drawn_again() {
        // Always pick index 0: 'a' twice, then 'a' is gone and 'b' is index 0.
        let charset: Charset = "abc".chars().collect();
        let mut src = Scripted::new(&[0]);
        let pass = generate(&charset, 6, 2, &mut src).unwrap();
        assert_eq!(pass.as_str(), "aabbcc");
    }

    #[test]
    fn remaining_order_is_kept_after_removal() {
        // After 'b' (index 1) is used up, index 1 points at 'c'.
        let charset: Charset = "abc".chars().collect();
        let mut src = Scripted::new(&[1, 1, 0]);
        let pass = generate(&charset, 3, 1, &mut src).unwrap();
        assert_eq!(pass.as_str(), "bca");
    }

    #[test]
    fn multibyte_charset_never_reallocates() {
        let charset: Charset = "äöü€".chars().collect();
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..50 {
            let pass = generate(&charset, 10, 0, &mut rng).unwrap();
            assert_eq!(pass.chars().count(), 10);
            // '€' is 3 bytes, so 30 bytes were reserved before drawing.
            assert_eq!(pass.capacity(), 30);
        }
    }

    #[test]
    fn huge_length_is_an_error() {
        let charset: Charset = "ab".chars().collect();
        let mut rng = StdRng::seed_from_u64(14);
        let err = generate(&charset, usize::MAX, 0, &mut rng).unwrap_err();
        assert!(matches!(err, Error::TooLong { length: usize::MAX }));

        let wide: Charset = "€".chars().collect();
        let err = generate(&wide, usize::MAX / 2, 0, &mut rng).unwrap_err();
        assert!(matches!(err, Error::TooLong { .. }));
    }

    #[test]
    fn charset_untouched() {
        let charset: Charset = "ab".chars().collect();
        let before = charset.clone();
        let mut rng = StdRng::seed_from_u64(9);
        generate(&charset, 4, 2, &mut rng).unwrap();
        assert_eq!(charset, before);
    }

    #[test]
    fn seeded_runs_repeat() {
        let charset = Charset::build(&CharClasses::all(), "", "");
        let a = generate(&charset, 20, 1, &mut StdRng::seed_from_u64(10)).unwrap();
        let b = generate(&charset, 20, 1, &mut StdRng::seed_from_u64(10)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn minimum_limit() {
        assert_eq!(minimum_duplicate_limit(6, 5), 2);
        assert_eq!(minimum_duplicate_limit(5, 5), 1);
        assert_eq!(minimum_duplicate_limit(0, 5), 0);
        assert_eq!(minimum_duplicate_limit(12, 95), 1);
    }

    #[test]
    fn feasibility() {
        assert!(feasible(5, 5, 1));
        assert!(!feasible(5, 6, 1));
        assert!(feasible(3, 6, 2));
        assert!(feasible(1, 1000, 0));
        assert!(feasible(0, 0, 3));
        assert!(!feasible(0, 1, 0));
    }
}
