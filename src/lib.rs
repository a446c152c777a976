//! Information-gain split criterion for decision tree construction.
//!
//! ```rust
//! use splitgain::{evaluate, range};
//!
//! let gain = evaluate::<false>(&[0, 0, 1, 1], 2, &[]);
//! assert_eq!(gain / range(2), -1.0);
//! ```

// Re-export public API
pub use splitgain_core::*;
