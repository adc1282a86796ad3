//! Short code generation.

use rand::Rng;

/// Fixed 64-character alphabet for short codes: alphanumerics plus `-` and
/// `_`. URL-safe, so codes never need percent-encoding.
pub const CODE_ALPHABET: &[u8; 64] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-_";

/// Produces candidate short codes for the shortening coordinator.
///
/// Implementations must be callable concurrently without shared mutable
/// state. Generation is not required to avoid collisions; the coordinator's
/// retry loop handles those against the store.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Returns a string of exactly `length` characters drawn from
    /// [`CODE_ALPHABET`].
    fn generate(&self, length: usize) -> String;
}

/// Uniform random code generator.
///
/// Draws characters with replacement from [`CODE_ALPHABET`] using the
/// thread-local RNG, so concurrent workers never contend on a shared
/// randomness source. Not cryptographically secure; codes are identifiers,
/// not secrets.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomCodeGenerator;

impl RandomCodeGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self, length: usize) -> String {
        let mut rng = rand::rng();
        (0..length)
            .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_alphabet_has_no_duplicates() {
        let unique: HashSet<u8> = CODE_ALPHABET.iter().copied().collect();
        assert_eq!(unique.len(), CODE_ALPHABET.len());
    }

    #[test]
    fn test_generate_exact_length() {
        let generator = RandomCodeGenerator::new();
        for length in [1, 6, 10, 32] {
            assert_eq!(generator.generate(length).chars().count(), length);
        }
    }

    #[test]
    fn test_generate_zero_length() {
        let generator = RandomCodeGenerator::new();
        assert_eq!(generator.generate(0), "");
    }

    #[test]
    fn test_generate_stays_in_alphabet() {
        let generator = RandomCodeGenerator::new();
        let code = generator.generate(256);
        assert!(code.bytes().all(|b| CODE_ALPHABET.contains(&b)));
    }

    #[test]
    fn test_generate_produces_distinct_codes() {
        let generator = RandomCodeGenerator::new();
        let codes: HashSet<String> = (0..1000).map(|_| generator.generate(10)).collect();
        // 64^10 codespace, 1000 draws: a repeat would point at a broken RNG.
        assert_eq!(codes.len(), 1000);
    }
}
