//! Salt sources for short code generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Characters a salt is drawn from.
pub const SALT_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Default salt length.
pub const DEFAULT_SALT_LENGTH: usize = 6;

/// Source of per-attempt salt strings.
///
/// Injected into [`crate::application::services::ShortenerService`] so tests
/// can supply fixed sequences.
#[cfg_attr(test, mockall::automock)]
pub trait SaltSource: Send + Sync {
    /// Returns a salt of exactly `length` characters.
    fn salt(&self, length: usize) -> String;
}

/// Process-wide PRNG salt source.
///
/// Not suitable for secrets: the salt only has to make repeated collisions
/// unlikely.
pub struct RandomSalt {
    rng: Mutex<StdRng>,
}

impl RandomSalt {
    /// Creates a salt source seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Creates a reproducible salt source.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomSalt {
    fn default() -> Self {
        Self::new()
    }
}

impl SaltSource for RandomSalt {
    fn salt(&self, length: usize) -> String {
        // A panic while holding the lock cannot leave the RNG half-updated.
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        (0..length)
            .map(|_| SALT_ALPHABET[rng.random_range(0..SALT_ALPHABET.len())] as char)
            .collect()
    }
}
