use super::Error;

/// Error when a mutation would break a model invariant.
///
/// This occurs when:
/// - An identifier field is not of type `id` or `uuid`
/// - A relationship side is given a field owned by another model
/// - A constraint or transition references something its owner does not have
///
/// The error is raised at the point of mutation and the mutation is not applied.
#[derive(Debug)]
pub(super) struct InvariantViolation {
    message: Box<str>,
}

impl std::error::Error for InvariantViolation {}

impl core::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invariant violation: {}", self.message)
    }
}

impl Error {
    /// Creates an invariant violation error.
    pub fn invariant_violation(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvariantViolation(InvariantViolation {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invariant violation error.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvariantViolation(_))
    }
}
