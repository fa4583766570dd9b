use rand::{rngs::StdRng, Rng, SeedableRng};

/// Strategy for choosing one cocktail out of a qualifying set
///
/// Matching always returns the full set; picking a single result is a
/// separate step so the matchers stay deterministic.
pub trait SelectionPolicy: Send + Sync {
    /// Index of the chosen candidate, or `None` when there are none
    fn choose_index(&self, len: usize) -> Option<usize>;

    /// Policy name for logging
    fn name(&self) -> &'static str;
}

/// Uniformly random choice using the thread-local generator
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformRandom;

impl SelectionPolicy for UniformRandom {
    fn choose_index(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(rand::rng().random_range(0..len))
    }

    fn name(&self) -> &'static str {
        "uniform_random"
    }
}

/// Uniformly random choice that is reproducible for a given seed
#[derive(Debug, Clone, Copy)]
pub struct SeededRandom {
    seed: u64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl SelectionPolicy for SeededRandom {
    fn choose_index(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let mut rng = StdRng::seed_from_u64(self.seed);
        Some(rng.random_range(0..len))
    }

    fn name(&self) -> &'static str {
        "seeded_random"
    }
}

/// Always the first candidate, e.g. the best-ranked recipe
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstMatch;

impl SelectionPolicy for FirstMatch {
    fn choose_index(&self, len: usize) -> Option<usize> {
        (len > 0).then_some(0)
    }

    fn name(&self) -> &'static str {
        "first_match"
    }
}

/// Policy for an optional seed: seeded when given, otherwise uniform
pub fn policy_for_seed(seed: Option<u64>) -> Box<dyn SelectionPolicy> {
    match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(UniformRandom),
    }
}

/// Applies a policy to a slice of candidates
pub fn select<'a, T>(policy: &dyn SelectionPolicy, candidates: &'a [T]) -> Option<&'a T> {
    policy
        .choose_index(candidates.len())
        .and_then(|index| candidates.get(index))
}
