use proptest::prelude::*;

use crate::batch::evaluate_batch;
use crate::checked::try_evaluate;
use crate::information_gain::{evaluate, evaluate_counts, range};
use crate::{Float, Label, Partition};

const TOL: Float = 1e-9;

/// Up to 64 labels drawn from `1..=12` classes.
fn labels_and_classes() -> impl Strategy<Value = (Vec<Label>, usize)> {
    (1..=12usize).prop_flat_map(|k| (prop::collection::vec(0..k, 0..64), Just(k)))
}

/// Labels with index-aligned non-negative weights.
fn weighted_labels() -> impl Strategy<Value = (Vec<Label>, Vec<Float>, usize)> {
    labels_and_classes().prop_flat_map(|(labels, k)| {
        let n = labels.len();
        (
            Just(labels),
            prop::collection::vec(0.0..50.0f64, n),
            Just(k),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_unweighted_within_range((labels, k) in labels_and_classes()) {
        let gain = evaluate::<false>(&labels, k, &[]);
        prop_assert!(gain.is_finite());
        prop_assert!(gain <= 0.0, "gain = {} > 0", gain);
        prop_assert!(gain >= -range(k) - TOL, "gain = {} below -log2({})", gain, k);
    }

    #[test]
    fn prop_weighted_within_range((labels, weights, k) in weighted_labels()) {
        let gain = evaluate::<true>(&labels, k, &weights);
        prop_assert!(gain.is_finite());
        prop_assert!(gain <= 0.0, "gain = {} > 0", gain);
        prop_assert!(gain >= -range(k) - TOL, "gain = {} below -log2({})", gain, k);
    }

    #[test]
    fn prop_constant_weights_match_unweighted(
        (labels, k) in labels_and_classes(),
        w in 0.001..1000.0f64,
    ) {
        let weights = vec![w; labels.len()];
        let unweighted = evaluate::<false>(&labels, k, &[]);
        let weighted = evaluate::<true>(&labels, k, &weights);
        prop_assert!((unweighted - weighted).abs() < TOL, "{} vs {}", unweighted, weighted);
    }

    #[test]
    fn prop_zero_weights_are_pure((labels, k) in labels_and_classes()) {
        let weights = vec![0.0; labels.len()];
        prop_assert_eq!(evaluate::<true>(&labels, k, &weights), 0.0);
    }

    #[test]
    fn prop_single_class_is_pure(n in 1..64usize, k in 1..12usize, class in 0..12usize) {
        let labels = vec![class % k; n];
        let weights = vec![1.5; n];
        prop_assert_eq!(evaluate::<false>(&labels, k, &[]), 0.0);
        prop_assert_eq!(evaluate::<true>(&labels, k, &weights), 0.0);
    }

    #[test]
    fn prop_counts_agree_with_labels((labels, weights, k) in weighted_labels()) {
        let mut counts = vec![0.0; k];
        let mut total = 0.0;
        for (&label, &weight) in labels.iter().zip(&weights) {
            counts[label] += weight;
            total += weight;
        }
        let from_counts = if labels.is_empty() { 0.0 } else { evaluate_counts(&counts, total) };
        prop_assert_eq!(from_counts, evaluate::<true>(&labels, k, &weights));
    }

    #[test]
    fn prop_checked_agrees_on_valid_input((labels, weights, k) in weighted_labels()) {
        prop_assert_eq!(
            try_evaluate::<true>(&labels, k, &weights),
            Ok(evaluate::<true>(&labels, k, &weights))
        );
        prop_assert_eq!(
            try_evaluate::<false>(&labels, k, &[]),
            Ok(evaluate::<false>(&labels, k, &[]))
        );
    }

    #[test]
    fn prop_batch_matches_single_calls(
        parts in prop::collection::vec(prop::collection::vec(0..5usize, 0..20), 0..8),
    ) {
        let partitions: Vec<Partition<'_>> =
            parts.iter().map(|p| Partition::unweighted(p)).collect();
        let scores = evaluate_batch::<false>(&partitions, 5);
        prop_assert_eq!(scores.len(), parts.len());
        for (score, labels) in scores.iter().zip(&parts) {
            prop_assert_eq!(*score, evaluate::<false>(labels, 5, &[]));
        }
    }
}
