//! Required-flag validation
//!
//! Commands declare their required flags in a fixed order. Validation walks
//! that list and reports the first flag that is missing, before any request
//! is made.

use crate::error::{Error, Result};

/// A flag value that can be checked for presence.
///
/// Empty strings and numeric zero count as unset.
pub trait FlagValue {
    fn is_unset(&self) -> bool;
}

impl FlagValue for String {
    fn is_unset(&self) -> bool {
        self.is_empty()
    }
}

impl FlagValue for u64 {
    fn is_unset(&self) -> bool {
        *self == 0
    }
}

impl<T: FlagValue> FlagValue for Option<T> {
    fn is_unset(&self) -> bool {
        self.as_ref().is_none_or(|v| v.is_unset())
    }
}

/// A required flag: its name without dashes, and its resolved value
pub struct Requirement<'a> {
    name: &'static str,
    value: &'a dyn FlagValue,
}

/// Declare `name` as required with the given value
pub fn flag<'a>(name: &'static str, value: &'a dyn FlagValue) -> Requirement<'a> {
    Requirement { name, value }
}

/// Check requirements in order and fail on the first unset one.
pub fn validate(requirements: &[Requirement<'_>]) -> Result<()> {
    match requirements.iter().find(|r| r.value.is_unset()) {
        Some(missing) => Err(Error::invalid_command(missing.name)),
        None => Ok(()),
    }
}

/// Implemented by argument sets that have required flags
pub trait Validate {
    /// Required flags, in the order they are checked
    fn required(&self) -> Vec<Requirement<'_>>;

    fn validate(&self) -> Result<()> {
        validate(&self.required())
    }
}
