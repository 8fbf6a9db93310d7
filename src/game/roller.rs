use rand::{rngs::StdRng, Rng, SeedableRng};

/// Source of die faces. Implementations must return a value in `1..=max`.
pub trait Roller {
    fn roll_in_range(&mut self, max: u32) -> u32;
}

/// `Roller` backed by rand's `StdRng`. Seeded rollers replay the same faces.
#[derive(Debug, Clone)]
pub struct RngRoller {
    rng: StdRng,
}

impl RngRoller {
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_os_rng() }
    }
}

impl Roller for RngRoller {
    fn roll_in_range(&mut self, max: u32) -> u32 {
        self.rng.random_range(1..=max)
    }
}
