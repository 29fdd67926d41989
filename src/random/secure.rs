//! ChaCha20 generator seeded once from the operating system.
//!
//! The generator is created lazily on first use and lives for the rest
//! of the process. There is no way to reseed it or to construct it from
//! a caller-chosen seed: manually captured entropy must never be
//! replayable.

use rand_chacha::ChaCha20Rng;
use rand_core::{CryptoRng, OsRng, RngCore, SeedableRng};
use std::sync::{Mutex, MutexGuard, OnceLock};
use thiserror::Error;

static SHARED: OnceLock<SecureRandom> = OnceLock::new();

/// Errors that can occur while setting up the random source.
#[derive(Debug, Error)]
pub enum RandomError {
    #[error("secure randomness unavailable: {0}")]
    Unavailable(#[from] rand_core::Error),
}

/// Thread-safe CSPRNG backed by ChaCha20.
///
/// `&SecureRandom` implements [`RngCore`] and [`CryptoRng`], so a shared
/// reference can be handed to any number of sessions. Calls are
/// serialised through an internal mutex.
pub struct SecureRandom {
    inner: Mutex<ChaCha20Rng>,
}

impl SecureRandom {
    /// Creates a generator seeded from the OS entropy source.
    ///
    /// Fails rather than falling back to a weaker generator.
    pub fn from_os_entropy() -> Result<Self, RandomError> {
        let mut seed = [0u8; 32];
        OsRng.try_fill_bytes(&mut seed)?;

        Ok(Self {
            inner: Mutex::new(ChaCha20Rng::from_seed(seed)),
        })
    }

    /// Returns the process-wide generator, initialising it on first call.
    pub fn shared() -> Result<&'static SecureRandom, RandomError> {
        if let Some(rng) = SHARED.get() {
            return Ok(rng);
        }

        let rng = Self::from_os_entropy()?;
        // A racing thread may have won; its generator is kept and ours dropped.
        let mut installed = false;
        let shared = SHARED.get_or_init(|| {
            installed = true;
            rng
        });
        if installed {
            tracing::info!("Shared secure random source initialised from OS entropy");
        }
        Ok(shared)
    }

    fn lock(&self) -> MutexGuard<'_, ChaCha20Rng> {
        // A panic while holding the lock cannot leave ChaCha20 in a weaker state.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl std::fmt::Debug for SecureRandom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecureRandom").finish_non_exhaustive()
    }
}

impl RngCore for &SecureRandom {
    fn next_u32(&mut self) -> u32 {
        self.lock().next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.lock().next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.lock().fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.lock().try_fill_bytes(dest)
    }
}

impl CryptoRng for &SecureRandom {}
