//! Strategies for choosing which catalog entries go into a document.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses `count` catalog indices out of `0..catalog_len`.
///
/// Implementations are expected to return distinct, in-range indices; the
/// generator rejects anything else.
pub trait TemplateSelector {
    fn select(&mut self, catalog_len: usize, count: usize) -> Vec<usize>;
}

/// Uniform sampling without replacement.
#[derive(Debug)]
pub struct RandomSelector<R> {
    rng: R,
}

impl<R: Rng> RandomSelector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSelector<StdRng> {
    /// Seeded from the operating system; output differs between runs.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Same seed, same selection.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TemplateSelector for RandomSelector<R> {
    fn select(&mut self, catalog_len: usize, count: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.rng, catalog_len, count.min(catalog_len)).into_vec()
    }
}

/// Always returns the same indices, whatever it is asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSelector {
    indices: Vec<usize>,
}

impl FixedSelector {
    pub fn new(indices: impl Into<Vec<usize>>) -> Self {
        Self {
            indices: indices.into(),
        }
    }
}

impl TemplateSelector for FixedSelector {
    fn select(&mut self, _catalog_len: usize, _count: usize) -> Vec<usize> {
        self.indices.clone()
    }
}
