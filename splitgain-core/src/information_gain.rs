use crate::{Float, Label};

/// Computes the **information gain** of a node from its labels.
///
/// Information gain here is the negated Shannon entropy (base 2) of the class
/// distribution reaching the node. Purer nodes score higher.
///
/// # Definition
///
/// With `f_c` the (weighted) share of class `c`:
///
/// ```text
/// G = Σ_c f_c · log₂(f_c)        over classes with f_c > 0
/// ```
///
/// - `G = 0` for a **pure** node (one class only) or an empty node
/// - `G = -log₂(k)` when all `k` classes are evenly represented
///
/// # Modes
///
/// `USE_WEIGHTS` selects the algorithm at compile time:
///
/// - `false`: every label counts once and `weights` is ignored (pass `&[]`).
/// - `true`: label `i` counts `weights[i]`. Weights must be index-aligned
///   with `labels` and non-negative.
///
/// Each mode is its own monomorphized loop, so this can be called once per
/// candidate split without a per-element branch.
///
/// # Parameters
///
/// - `labels`: Class index of every sample in the node, each `< num_classes`.
/// - `num_classes`: Number of classes in the dataset. Classes absent from
///   `labels` are allowed and contribute nothing.
/// - `weights`: Per-sample weights (weighted mode only).
///
/// # Returns
///
/// - A value in `[-log₂(num_classes), 0]`.
/// - `0.0` if `labels` is empty.
/// - `0.0` in weighted mode if the weights sum to exactly zero.
///
/// # Panics
///
/// Panics if a label is `>= num_classes`. Use
/// [`try_evaluate`](crate::checked::try_evaluate) when the inputs are not
/// already known to be valid.
///
/// # Examples
///
/// ```rust
/// use splitgain_core::information_gain::evaluate;
///
/// let gain = evaluate::<false>(&[0, 0, 1, 1], 2, &[]);
/// assert_eq!(gain, -1.0);
///
/// let gain = evaluate::<true>(&[0, 0, 0, 1], 2, &[1.0, 1.0, 1.0, 1.0]);
/// assert!((gain + 0.811_278).abs() < 1e-6);
/// ```
pub fn evaluate<const USE_WEIGHTS: bool>(
    labels: &[Label],
    num_classes: usize,
    weights: &[Float],
) -> Float {
    if labels.is_empty() {
        return 0.0;
    }

    let mut counts = vec![0.0; num_classes];

    if USE_WEIGHTS {
        debug_assert_eq!(labels.len(), weights.len());

        let mut total = 0.0;
        for (&label, &weight) in labels.iter().zip(weights) {
            counts[label] += weight;
            total += weight;
        }

        evaluate_counts(&counts, total)
    } else {
        for &label in labels {
            counts[label] += 1.0;
        }

        evaluate_counts(&counts, labels.len() as Float)
    }
}

/// Computes the information gain of an already accumulated class histogram.
///
/// `counts[c]` is the (weighted) count of class `c` and `total` their sum.
/// Useful when a split sweep keeps left/right histograms up to date
/// incrementally instead of re-reading labels.
///
/// Returns `0.0` when `total == 0.0`.
///
/// ```rust
/// use splitgain_core::information_gain::evaluate_counts;
///
/// assert_eq!(evaluate_counts(&[2.0, 2.0, 0.0], 4.0), -1.0);
/// assert_eq!(evaluate_counts(&[0.0, 0.0], 0.0), 0.0);
/// ```
pub fn evaluate_counts(counts: &[Float], total: Float) -> Float {
    if total == 0.0 {
        return 0.0;
    }

    let mut gain = 0.0;
    for &count in counts {
        // 0 · log₂(0) is taken as 0
        if count > 0.0 {
            let f = count / total;
            gain += f * f.log2();
        }
    }

    gain
}

/// Returns the range of [`evaluate`] for `num_classes` classes.
///
/// The best value is `0` (pure node) and the worst is `-log₂(num_classes)`
/// (even distribution), so the range is `log₂(num_classes)`. Callers divide
/// by it to compare gains across nodes with different class counts.
///
/// `num_classes` must be positive; see
/// [`try_range`](crate::checked::try_range) for a checked version.
pub fn range(num_classes: usize) -> Float {
    (num_classes as Float).log2()
}
