use thiserror::Error;

use crate::{Float, Label};

/// Contract violations reported by the checked entry points.
///
/// The unchecked fast path never produces these; it trusts its caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplitGainError {
    /// Zero classes were requested.
    #[error("number of classes must be positive, got {num_classes}")]
    InvalidClassCount { num_classes: usize },

    /// Shape or length mismatch between index-aligned inputs.
    #[error("shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: String, got: String },

    /// A label outside `[0, num_classes)`.
    #[error("label {label} at index {index} is out of range for {num_classes} classes")]
    LabelOutOfRange {
        index: usize,
        label: Label,
        num_classes: usize,
    },

    /// A negative or non-finite weight.
    #[error("weight {weight} at index {index} is not a finite non-negative value")]
    InvalidWeight { index: usize, weight: Float },
}

pub type Result<T> = std::result::Result<T, SplitGainError>;
