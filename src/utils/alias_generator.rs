//! Random alias generation.
//!
//! The generator owns its random source instead of reaching for a
//! process-wide one, so tests can seed it and get reproducible aliases.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

use crate::utils::alias_validator::ALPHABET;

/// Produces fixed-length aliases drawn uniformly from [`ALPHABET`].
///
/// No uniqueness guarantee is made here. Collisions surface as
/// [`StoreError::AliasExists`](crate::domain::repositories::StoreError) when
/// the alias is persisted.
pub struct AliasGenerator {
    rng: Mutex<StdRng>,
}

impl AliasGenerator {
    /// Creates a generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a deterministic generator. Two generators with the same seed
    /// yield the same sequence of aliases.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Generates an alias of exactly `length` characters.
    pub fn generate(&self, length: usize) -> String {
        // A poisoned lock still holds a usable RNG state.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        (0..length)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

impl std::fmt::Debug for AliasGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AliasGenerator").finish_non_exhaustive()
    }
}
