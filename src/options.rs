use probskip_skiplist::prelude::{Result, SkipList};
use rand::{SeedableRng, rngs::StdRng};

#[derive(Debug, Clone)]
pub struct SkipListOptions {
    probability: f64,

    max_level: usize,

    seed: Option<u64>,
}

impl Default for SkipListOptions {
    fn default() -> Self {
        Self {
            probability: 0.5,
            max_level: 16,
            seed: None,
        }
    }
}

impl SkipListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chance that a key is raised one more level, in (0, 1).
    pub fn probability(&mut self, p: f64) -> &mut Self {
        self.probability = p;
        self
    }

    /// Upper bound on the number of levels.
    pub fn max_level(&mut self, max_level: usize) -> &mut Self {
        self.max_level = max_level;
        self
    }

    /// Fixes the coin flips so shapes are reproducible.
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(&self) -> Result<SkipList<StdRng>> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        tracing::debug!("build skip list with {:?}", self);
        SkipList::with_coin(self.probability, self.max_level, rng)
    }
}
