#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::checked::try_evaluate;
use crate::information_gain::evaluate;
use crate::{Float, Partition, Result};

/// Scores every partition with [`evaluate`], returning the scores in input
/// order.
///
/// With the `parallel` feature the partitions are scored on the rayon pool.
/// Each call only reads its own partition, so the result does not depend on
/// the feature.
pub fn evaluate_batch<const USE_WEIGHTS: bool>(
    partitions: &[Partition<'_>],
    num_classes: usize,
) -> Vec<Float> {
    log::trace!(
        "evaluating {} partitions over {} classes",
        partitions.len(),
        num_classes
    );

    #[cfg(feature = "parallel")]
    {
        partitions
            .par_iter()
            .map(|p| evaluate::<USE_WEIGHTS>(p.labels, num_classes, p.weights))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        partitions
            .iter()
            .map(|p| evaluate::<USE_WEIGHTS>(p.labels, num_classes, p.weights))
            .collect()
    }
}

/// Checked [`evaluate_batch`]: every partition goes through
/// [`try_evaluate`], and the first rejected partition (in input order) is
/// returned as the error.
pub fn try_evaluate_batch<const USE_WEIGHTS: bool>(
    partitions: &[Partition<'_>],
    num_classes: usize,
) -> Result<Vec<Float>> {
    #[cfg(feature = "parallel")]
    {
        partitions
            .par_iter()
            .map(|p| try_evaluate::<USE_WEIGHTS>(p.labels, num_classes, p.weights))
            .collect::<Vec<_>>()
            .into_iter()
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        partitions
            .iter()
            .map(|p| try_evaluate::<USE_WEIGHTS>(p.labels, num_classes, p.weights))
            .collect()
    }
}
