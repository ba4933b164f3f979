//! Input validation for wizard actions.
//!
//! Checks use Stillwater's `Validation` so every problem with a submission
//! is reported at once: a payment form with a missing name and a malformed
//! email yields both errors, not just the first.
//!
//! # Example
//!
//! ```rust
//! use symptom_wizard::config::AgeRange;
//! use symptom_wizard::validation::{check_age, into_result, ValidationError};
//!
//! let range = AgeRange { min: 1, max: 120 };
//! assert_eq!(into_result(check_age(30, &range)), Ok(30));
//! assert_eq!(
//!     into_result(check_age(0, &range)),
//!     Err(vec![ValidationError::AgeOutOfRange { age: 0, min: 1, max: 120 }])
//! );
//! ```

mod errors;
mod payment;

pub use errors::ValidationError;
pub use payment::{check_email, check_payment, check_phone};

use crate::config::AgeRange;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a validation check, accumulating every error.
pub type Checked<T> = Validation<T, NonEmptyVec<ValidationError>>;

/// Check that a submitted age lies in the accepted range.
pub fn check_age(age: u32, range: &AgeRange) -> Checked<u32> {
    if range.contains(age) {
        Validation::success(age)
    } else {
        Validation::fail(ValidationError::AgeOutOfRange {
            age,
            min: range.min,
            max: range.max,
        })
    }
}

/// Turn a predicate into a check carrying `error` on failure.
pub(crate) fn ensure(condition: bool, error: ValidationError) -> Checked<()> {
    if condition {
        Validation::success(())
    } else {
        Validation::fail(error)
    }
}

/// Run every check and keep all failures.
pub(crate) fn all(checks: Vec<Checked<()>>) -> Checked<()> {
    Validation::all_vec(checks).map(|_| ())
}

/// Collapse a validation into a `Result` with the errors in check order.
pub fn into_result<T>(checked: Checked<T>) -> Result<T, Vec<ValidationError>> {
    match checked {
        Validation::Success(value) => Ok(value),
        Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
    }
}
