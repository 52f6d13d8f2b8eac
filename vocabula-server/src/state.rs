//! Process-wide server state.
//!
//! The server is single-tenant per process: it holds at most one pending
//! vocab list, replaced atomically only after parsing succeeds, and a
//! single seeded RNG that concurrent `/session` handlers serialize on so a
//! fixed seed reproduces responses byte for byte.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::{Mutex, RwLock};
use tracing::info;

use vocabula_lego::VocabList;
use vocabula_transfero::Synonyms;

/// Environment variable that seeds the per-process RNG when set to an
/// integer; otherwise the system clock seeds it.
pub const RANDOM_SEED_ENV: &str = "VOCAB_TUISTER_RANDOM_SEED";

/// Application state shared across handlers.
pub struct AppState {
    /// The last fully committed vocab list, if any.
    pub vocab: RwLock<Option<VocabList>>,
    /// The per-process sampling RNG.
    pub rng: Mutex<StdRng>,
    /// The synonym provider, opened once and shared read-only.
    pub synonyms: Arc<dyn Synonyms>,
}

impl AppState {
    /// Build state with an explicit seed.
    pub fn with_seed(seed: u64, synonyms: Arc<dyn Synonyms>) -> AppState {
        AppState {
            vocab: RwLock::new(None),
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            synonyms,
        }
    }

    /// Build state seeded from the environment, falling back to the clock.
    pub fn from_env(synonyms: Arc<dyn Synonyms>) -> AppState {
        let seed = match seed_from_env() {
            Some(seed) => {
                info!(seed, "seeding RNG from {RANDOM_SEED_ENV}");
                seed
            }
            None => clock_seed(),
        };
        AppState::with_seed(seed, synonyms)
    }
}

fn seed_from_env() -> Option<u64> {
    std::env::var(RANDOM_SEED_ENV)
        .ok()?
        .trim()
        .parse::<i64>()
        .ok()
        .map(|seed| seed as u64)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
