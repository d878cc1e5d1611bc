use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::RandomSource;

/// Боевой RNG: `thread_rng` из `rand`.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn uniform_inclusive(&mut self, low: i64, high: i64) -> i64 {
        rand::thread_rng().gen_range(low..=high)
    }

    fn uniform_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Позволяет воспроизводить один и тот же розыгрыш при одинаковом seed.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn uniform_inclusive(&mut self, low: i64, high: i64) -> i64 {
        self.inner.gen_range(low..=high)
    }

    fn uniform_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.inner.gen_range(0..len)
    }
}

/// RNG на выбор: системный или с seed (dev-CLI, конфиг).
#[derive(Clone, Debug)]
pub enum SessionRng {
    System(SystemRng),
    Seeded(DeterministicRng),
}

impl SessionRng {
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => SessionRng::Seeded(DeterministicRng::from_seed(s)),
            None => SessionRng::System(SystemRng),
        }
    }
}

impl RandomSource for SessionRng {
    fn uniform_inclusive(&mut self, low: i64, high: i64) -> i64 {
        match self {
            SessionRng::System(r) => r.uniform_inclusive(low, high),
            SessionRng::Seeded(r) => r.uniform_inclusive(low, high),
        }
    }

    fn uniform_index(&mut self, len: usize) -> usize {
        match self {
            SessionRng::System(r) => r.uniform_index(len),
            SessionRng::Seeded(r) => r.uniform_index(len),
        }
    }
}
