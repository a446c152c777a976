use crate::information_gain;
use crate::{Float, Label, Weighting};

/// A split-quality criterion a tree builder can be generic over.
///
/// Implementors are stateless; everything is an associated function so the
/// criterion is chosen at compile time (`DecisionTree<F: FitnessFunction>`),
/// and `USE_WEIGHTS` keeps the weighted and unweighted loops separate.
pub trait FitnessFunction {
    /// Scores the labels reaching a node. Higher is purer.
    fn evaluate<const USE_WEIGHTS: bool>(
        labels: &[Label],
        num_classes: usize,
        weights: &[Float],
    ) -> Float;

    /// Difference between the best and worst attainable score for
    /// `num_classes` classes.
    fn range(num_classes: usize) -> Float;

    /// Like [`evaluate`](FitnessFunction::evaluate) with the mode picked at
    /// run time. The choice is made once, before the per-label loop.
    fn evaluate_with(
        weighting: Weighting,
        labels: &[Label],
        num_classes: usize,
        weights: &[Float],
    ) -> Float {
        match weighting {
            Weighting::Uniform => Self::evaluate::<false>(labels, num_classes, weights),
            Weighting::Weighted => Self::evaluate::<true>(labels, num_classes, weights),
        }
    }
}

/// The information gain criterion (negated base-2 entropy).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InformationGain;

impl FitnessFunction for InformationGain {
    fn evaluate<const USE_WEIGHTS: bool>(
        labels: &[Label],
        num_classes: usize,
        weights: &[Float],
    ) -> Float {
        information_gain::evaluate::<USE_WEIGHTS>(labels, num_classes, weights)
    }

    fn range(num_classes: usize) -> Float {
        information_gain::range(num_classes)
    }
}
