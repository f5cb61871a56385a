use std::collections::VecDeque;

use rand::Rng;

/// Source of the Bernoulli trials that decide whether a key is raised.
pub trait Coin {
    /// Returns `true` with probability `p`.
    fn flip(&mut self, p: f64) -> bool;
}

impl<R: Rng> Coin for R {
    fn flip(&mut self, p: f64) -> bool {
        self.random_bool(p)
    }
}

/// Replays a fixed sequence of outcomes, then lands tails forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedCoin {
    outcomes: VecDeque<bool>,
    drawn: usize,
}

impl ScriptedCoin {
    pub fn new(outcomes: impl IntoIterator<Item = bool>) -> Self {
        Self {
            outcomes: outcomes.into_iter().collect(),
            drawn: 0,
        }
    }

    pub fn push(&mut self, outcome: bool) -> &mut Self {
        self.outcomes.push_back(outcome);
        self
    }

    /// Number of flips taken so far.
    pub fn drawn(&self) -> usize {
        self.drawn
    }

    pub fn remaining(&self) -> usize {
        self.outcomes.len()
    }
}

impl Coin for ScriptedCoin {
    fn flip(&mut self, _p: f64) -> bool {
        self.drawn += 1;
        self.outcomes.pop_front().unwrap_or(false)
    }
}
