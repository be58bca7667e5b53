//! # Error Types
//!
//! Domain-specific error types for quoteforge-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  quoteforge-core errors (this file)                                    │
//! │  ├── CoreError        - Line/quote editing failures                    │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  quoteforge-cli errors (separate crate)                                │
//! │  └── CliError         - What the terminal user sees                    │
//! │                                                                         │
//! │  NOTE: the calculator and aggregator never return errors. Inputs are   │
//! │  clamped or skipped, never rejected.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors from the editing operations on quotes and quote lines.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The line carries no snapshot for this multiplier id.
    ///
    /// ## When This Occurs
    /// - Detaching a multiplier twice
    /// - Setting a partial quantity before applying the multiplier
    #[error("Multiplier {multiplier_id} is not applied to this line")]
    MultiplierNotApplied { multiplier_id: String },

    /// Line index past the end of the quote.
    #[error("Quote has {len} items, no item at index {index}")]
    ItemIndexOutOfRange { index: usize, len: usize },

    /// Validation error (wraps ValidationError), e.g. from
    /// `Quote::set_item_quantity`.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the [`crate::validation`] collaborator, which callers run
/// before handing data to the engine.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// NaN or infinite number.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Invalid format (e.g., empty id).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., the same multiplier applied twice).
    #[error("{field} '{value}' appears more than once")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
