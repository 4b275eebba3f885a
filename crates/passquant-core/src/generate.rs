//! Cryptographically random password generation.
//!
//! Thin wrapper over the `rand` CSPRNG. The alphabet is the full 94-character
//! pool the entropy model recognizes: ASCII letters, digits, and punctuation.

use log::debug;
use rand::Rng;

/// The 94-character generation alphabet: lowercase, uppercase, digits,
/// ASCII punctuation. Matches the four classes of [`crate::pool`].
pub const GENERATION_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789\
      !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Generate a random password of `length` characters.
///
/// Each character is drawn independently and uniformly from
/// [`GENERATION_ALPHABET`] using `rand::rng()`, a cryptographically secure
/// generator.
pub fn generate_password(length: usize) -> String {
    let mut rng = rand::rng();
    let password: String = (0..length)
        .map(|_| GENERATION_ALPHABET[rng.random_range(0..GENERATION_ALPHABET.len())] as char)
        .collect();
    debug!(
        "generated {length}-char password from {}-char alphabet",
        GENERATION_ALPHABET.len()
    );
    password
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::FULL_POOL;

    #[test]
    fn test_alphabet_covers_full_pool() {
        assert_eq!(GENERATION_ALPHABET.len() as u32, FULL_POOL);
        // No duplicate characters.
        let mut seen = [false; 128];
        for &b in GENERATION_ALPHABET {
            assert!(!seen[b as usize], "duplicate {:?}", b as char);
            seen[b as usize] = true;
        }
    }

    #[test]
    fn test_generated_length() {
        for len in [0, 1, 6, 12, 64] {
            assert_eq!(generate_password(len).chars().count(), len);
        }
    }

    #[test]
    fn test_generated_chars_in_alphabet() {
        let password = generate_password(256);
        for c in password.chars() {
            assert!(GENERATION_ALPHABET.contains(&(c as u8)), "{c:?}");
        }
    }

    #[test]
    fn test_generated_passwords_differ() {
        // 94^32 possibilities; a collision would indicate a broken RNG hookup.
        assert_ne!(generate_password(32), generate_password(32));
    }
}
