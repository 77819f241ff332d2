//! Reasons a shift leaves the text as it was.
//!
//! None of these reach the user as errors. The orchestration layer turns each
//! one into an unapplied [`crate::ShiftReport`] and the document stays intact.

use core_shiftables::ShiftableType;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Unshifted {
    /// No shiftable type recognised the candidate.
    #[error("no shiftable type matched")]
    NoMatch,
    /// A type matched but could not compute a value.
    #[error("{0} matched but produced no value")]
    Malformed(ShiftableType),
    /// A type applies but the user switched the conversion off.
    #[error("{0} is disabled by preferences")]
    PreferenceGated(ShiftableType),
    /// The transform ran and returned the candidate unchanged.
    #[error("shift left the text unchanged")]
    Unchanged,
}

impl Unshifted {
    /// Label used in structured logs.
    pub const fn reason(self) -> &'static str {
        match self {
            Unshifted::NoMatch => "no_match",
            Unshifted::Malformed(_) => "malformed",
            Unshifted::PreferenceGated(_) => "preference_gated",
            Unshifted::Unchanged => "unchanged",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_type() {
        let err = Unshifted::PreferenceGated(ShiftableType::PhpArray);
        assert_eq!(err.to_string(), "php-array is disabled by preferences");
        assert_eq!(err.reason(), "preference_gated");
        assert_eq!(Unshifted::NoMatch.to_string(), "no shiftable type matched");
    }
}
