use super::Error;

/// Error when two models are linked by more reference fields than can be
/// paired.
///
/// This occurs when one model declares several fields typed as a second model
/// while that second model also points back. The engine cannot tell which
/// fields belong together, and it never guesses.
#[derive(Debug)]
pub(super) struct AmbiguousRelationship {
    model: Box<str>,
    remote: Box<str>,
}

impl std::error::Error for AmbiguousRelationship {}

impl core::fmt::Display for AmbiguousRelationship {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "ambiguous relationship: multiple relationships found between the same models `{}` and `{}`; this is not supported",
            self.model, self.remote
        )
    }
}

impl Error {
    /// Creates an ambiguous relationship error naming both models.
    pub fn ambiguous_relationship(model: impl Into<String>, remote: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::AmbiguousRelationship(
            AmbiguousRelationship {
                model: model.into().into(),
                remote: remote.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an ambiguous relationship error.
    pub fn is_ambiguous_relationship(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::AmbiguousRelationship(_))
    }
}
