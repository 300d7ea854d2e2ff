use super::Error;

/// Error when a foreign key must point at a model that has no identifier.
#[derive(Debug)]
pub(super) struct MissingIdentifier {
    model: Box<str>,
}

impl std::error::Error for MissingIdentifier {}

impl core::fmt::Display for MissingIdentifier {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "missing identifier: no identifier available for model `{}`",
            self.model
        )
    }
}

impl Error {
    /// Creates a missing identifier error.
    pub fn missing_identifier(model: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingIdentifier(MissingIdentifier {
            model: model.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing identifier error.
    pub fn is_missing_identifier(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingIdentifier(_))
    }
}
