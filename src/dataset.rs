//! Random datasets for the bar chart

use rand::Rng;

/// The array being visualized
///
/// Values are mutated in place by the active step generator; the length never
/// changes once generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    values: Vec<i32>,
}

impl Dataset {
    pub fn new(values: Vec<i32>) -> Self {
        Dataset { values }
    }

    /// Generate `count` uniformly random values in `[min, max]` (inclusive)
    ///
    /// The caller guarantees `min <= max`.
    pub fn generate<R: Rng + ?Sized>(count: usize, min: i32, max: i32, rng: &mut R) -> Self {
        let values = (0..count).map(|_| rng.gen_range(min..=max)).collect();
        Dataset { values }
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut [i32] {
        &mut self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest value, or 0 for an empty dataset
    pub fn min(&self) -> i32 {
        self.values.iter().copied().min().unwrap_or(0)
    }

    /// Largest value, or 0 for an empty dataset
    pub fn max(&self) -> i32 {
        self.values.iter().copied().max().unwrap_or(0)
    }
}

impl From<Vec<i32>> for Dataset {
    fn from(values: Vec<i32>) -> Self {
        Dataset::new(values)
    }
}
