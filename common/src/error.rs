//! Validation errors raised by the formula builder core.
//!
//! Every variant describes a rejected operation: the store, draft or session
//! is left exactly as it was and the caller is expected to re-prompt. Missing
//! ids on store mutations are not errors; they are reported as no-ops.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormulaError {
    #[error("formula requires at least one ingredient")]
    EmptyFormula,

    #[error("formula name is required")]
    MissingName,

    #[error("formula name must be at most {max} characters (got {len})")]
    NameTooLong { len: usize, max: usize },

    #[error("dosage for '{id}' must be a positive number (got {dosage})")]
    InvalidDosage { id: String, dosage: f64 },

    #[error("'{form}' is not an available form for '{id}'")]
    InvalidForm { id: String, form: String },

    #[error("'{id}' appears more than once in the formula")]
    DuplicateIngredient { id: String },

    #[error("unknown ingredient '{id}'")]
    UnknownIngredient { id: String },

    #[error("description must be at most {max} characters (got {len})")]
    DescriptionTooLong { len: usize, max: usize },

    #[error("cannot {action} while {stage}")]
    InvalidTransition {
        stage: &'static str,
        action: &'static str,
    },
}
