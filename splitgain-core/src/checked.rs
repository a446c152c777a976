//! Bounds-checked entry points.
//!
//! [`information_gain::evaluate`] trusts its caller: an out-of-range label
//! panics and a misaligned weight vector only trips a debug assertion. The
//! functions here validate the same contract first and report violations as
//! [`SplitGainError`]. On valid input they return exactly what the unchecked
//! functions return.

use log::debug;

use crate::information_gain;
use crate::{Float, Label, Result, SplitGainError};

/// Checked [`information_gain::evaluate`].
///
/// Validates, in order:
///
/// 1. `num_classes > 0`
/// 2. weighted mode: `weights.len() == labels.len()`
/// 3. every label is `< num_classes`
/// 4. weighted mode: every weight is finite and non-negative
///
/// and reports the first violation found.
///
/// # Errors
///
/// - [`SplitGainError::InvalidClassCount`] if `num_classes == 0`
/// - [`SplitGainError::ShapeMismatch`] if the weights are not index-aligned
/// - [`SplitGainError::LabelOutOfRange`] for the first bad label
/// - [`SplitGainError::InvalidWeight`] for the first bad weight
///
/// # Examples
///
/// ```rust
/// use splitgain_core::checked::try_evaluate;
/// use splitgain_core::SplitGainError;
///
/// assert_eq!(try_evaluate::<false>(&[0, 1], 2, &[]), Ok(-1.0));
/// assert!(matches!(
///     try_evaluate::<false>(&[0, 2], 2, &[]),
///     Err(SplitGainError::LabelOutOfRange { index: 1, label: 2, .. })
/// ));
/// ```
pub fn try_evaluate<const USE_WEIGHTS: bool>(
    labels: &[Label],
    num_classes: usize,
    weights: &[Float],
) -> Result<Float> {
    validate::<USE_WEIGHTS>(labels, num_classes, weights)?;
    Ok(information_gain::evaluate::<USE_WEIGHTS>(
        labels,
        num_classes,
        weights,
    ))
}

/// Checked [`information_gain::range`].
///
/// # Errors
///
/// [`SplitGainError::InvalidClassCount`] if `num_classes == 0`.
pub fn try_range(num_classes: usize) -> Result<Float> {
    check_class_count(num_classes)?;
    Ok(information_gain::range(num_classes))
}

/// Checks the caller contract of [`information_gain::evaluate`] without
/// evaluating.
pub fn validate<const USE_WEIGHTS: bool>(
    labels: &[Label],
    num_classes: usize,
    weights: &[Float],
) -> Result<()> {
    check_class_count(num_classes)?;

    if USE_WEIGHTS && weights.len() != labels.len() {
        debug!(
            "rejecting weights: {} weights for {} labels",
            weights.len(),
            labels.len()
        );
        return Err(SplitGainError::ShapeMismatch {
            expected: format!("{} weights", labels.len()),
            got: format!("{} weights", weights.len()),
        });
    }

    if let Some((index, &label)) = labels
        .iter()
        .enumerate()
        .find(|&(_, &label)| label >= num_classes)
    {
        debug!("rejecting label {label} at index {index} (num_classes = {num_classes})");
        return Err(SplitGainError::LabelOutOfRange {
            index,
            label,
            num_classes,
        });
    }

    if USE_WEIGHTS {
        if let Some((index, &weight)) = weights
            .iter()
            .enumerate()
            .find(|&(_, &weight)| !weight.is_finite() || weight < 0.0)
        {
            debug!("rejecting weight {weight} at index {index}");
            return Err(SplitGainError::InvalidWeight { index, weight });
        }
    }

    Ok(())
}

fn check_class_count(num_classes: usize) -> Result<()> {
    if num_classes == 0 {
        debug!("rejecting class count of zero");
        return Err(SplitGainError::InvalidClassCount { num_classes });
    }
    Ok(())
}
