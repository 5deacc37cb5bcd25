use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use guess_core::model::GuessRange;

/// Source of hidden targets for new rounds.
pub trait TargetPicker {
    /// Returns a value inside `range`.
    fn pick(&mut self, range: GuessRange) -> u32;
}

/// Uniform draw over the whole range.
#[derive(Debug, Clone)]
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    /// Picker seeded from the operating system.
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible picker for tests and demos.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl TargetPicker for RandomPicker {
    fn pick(&mut self, range: GuessRange) -> u32 {
        self.rng.random_range(range.min()..=range.max())
    }
}

/// Replays a fixed list of targets, wrapping around at the end.
///
/// An empty list always yields the range minimum.
#[derive(Debug, Clone, Default)]
pub struct FixedPicker {
    targets: Vec<u32>,
    next: usize,
}

impl FixedPicker {
    #[must_use]
    pub fn new(targets: impl Into<Vec<u32>>) -> Self {
        Self {
            targets: targets.into(),
            next: 0,
        }
    }
}

impl TargetPicker for FixedPicker {
    fn pick(&mut self, range: GuessRange) -> u32 {
        if self.targets.is_empty() {
            return range.min();
        }
        let target = self.targets[self.next % self.targets.len()];
        self.next = self.next.wrapping_add(1);
        target
    }
}
