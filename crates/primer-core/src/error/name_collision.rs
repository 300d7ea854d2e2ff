use super::Error;

/// Error when a field cannot be generated because every candidate name is
/// already taken on the model.
///
/// This occurs when:
/// - A model has no identifier but already defines `id` and `<model>Id`
/// - A foreign key field would reuse the name of an existing field
/// - An audit timestamp field would reuse the name of a non-timestamp field
#[derive(Debug)]
pub(super) struct NameCollision {
    model: Box<str>,
    candidates: Vec<String>,
}

impl std::error::Error for NameCollision {}

impl core::fmt::Display for NameCollision {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "name collision: cannot generate field on model `{}`; candidate names ",
            self.model
        )?;

        for (i, candidate) in self.candidates.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "`{candidate}`")?;
        }

        if self.candidates.len() == 1 {
            f.write_str(" is already defined")
        } else {
            f.write_str(" are already defined")
        }
    }
}

impl Error {
    /// Creates a name collision error listing every name that was tried.
    pub fn name_collision<I, S>(model: impl Into<String>, candidates: I) -> Error
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Error::from(super::ErrorKind::NameCollision(NameCollision {
            model: model.into().into(),
            candidates: candidates.into_iter().map(Into::into).collect(),
        }))
    }

    /// Returns `true` if this error is a name collision error.
    pub fn is_name_collision(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NameCollision(_))
    }
}
