#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type Float = f64;
pub type Label = usize;

/// How each data point contributes to the class histogram.
///
/// This is the run-time counterpart of the `USE_WEIGHTS` const parameter on
/// [`evaluate`](crate::information_gain::evaluate). Dispatch on it once per
/// call, outside any per-element loop.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Weighting {
    /// Every point counts once; weights are ignored.
    #[default]
    Uniform,
    /// Every point counts by its weight.
    Weighted,
}

impl Weighting {
    pub fn uses_weights(self) -> bool {
        matches!(self, Weighting::Weighted)
    }
}

/// One candidate node: the labels reaching it and, for weighted scoring, the
/// index-aligned weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Partition<'a> {
    pub labels: &'a [Label],
    pub weights: &'a [Float],
}

impl<'a> Partition<'a> {
    /// A partition scored without weights.
    pub fn unweighted(labels: &'a [Label]) -> Self {
        Self {
            labels,
            weights: &[],
        }
    }

    pub fn weighted(labels: &'a [Label], weights: &'a [Float]) -> Self {
        Self { labels, weights }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
