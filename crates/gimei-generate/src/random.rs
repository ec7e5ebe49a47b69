use std::fmt;
use std::sync::{Mutex, PoisonError};

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Replaceable random source shared by every sampler of a [`Gimei`](crate::Gimei).
///
/// A composite record draws all of its values inside one [`SharedRng::with`]
/// call, so concurrent callers never interleave draws within a record.
pub struct SharedRng {
    inner: Mutex<Box<dyn RngCore + Send>>,
}

impl SharedRng {
    pub fn new(rng: impl RngCore + Send + 'static) -> Self {
        Self {
            inner: Mutex::new(Box::new(rng)),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_rng(&mut rand::rng()))
    }

    /// Replaces the source. Later draws come from `rng` only.
    pub fn set(&self, rng: impl RngCore + Send + 'static) {
        *self.lock() = Box::new(rng);
    }

    pub fn reseed(&self, seed: u64) {
        self.set(ChaCha8Rng::seed_from_u64(seed));
    }

    pub fn with<T>(&self, draw: impl FnOnce(&mut dyn RngCore) -> T) -> T {
        let mut rng = self.lock();
        draw(rng.as_mut())
    }

    // Poisoning is ignored; RNG state is valid between draws.
    fn lock(&self) -> std::sync::MutexGuard<'_, Box<dyn RngCore + Send>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SharedRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl fmt::Debug for SharedRng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedRng").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws(rng: &SharedRng, count: usize) -> Vec<u64> {
        (0..count).map(|_| rng.with(|rng| rng.next_u64())).collect()
    }

    #[test]
    fn reseeding_replays_the_sequence() {
        let rng = SharedRng::seeded(7);
        let first = draws(&rng, 8);
        rng.reseed(7);
        assert_eq!(draws(&rng, 8), first);
    }

    #[test]
    fn set_replaces_the_source() {
        let rng = SharedRng::from_entropy();
        rng.set(ChaCha8Rng::seed_from_u64(99));
        let expected = draws(&SharedRng::seeded(99), 4);
        assert_eq!(draws(&rng, 4), expected);
    }
}
