use super::Error;

/// Error when a field was classified as a model reference but the model is
/// not part of the bundle.
#[derive(Debug)]
pub(super) struct UnresolvedReference {
    model: Box<str>,
    field: Box<str>,
    ty: Box<str>,
    bundle: Box<str>,
}

impl std::error::Error for UnresolvedReference {}

impl core::fmt::Display for UnresolvedReference {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unresolved reference: field `{}::{}` has type `{}` but no such model is registered in bundle `{}`",
            self.model, self.field, self.ty, self.bundle
        )
    }
}

impl Error {
    /// Creates an unresolved reference error.
    pub fn unresolved_reference(
        model: impl Into<String>,
        field: impl Into<String>,
        ty: impl Into<String>,
        bundle: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::UnresolvedReference(UnresolvedReference {
            model: model.into().into(),
            field: field.into().into(),
            ty: ty.into().into(),
            bundle: bundle.into().into(),
        }))
    }

    /// Returns `true` if this error is an unresolved reference error.
    pub fn is_unresolved_reference(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnresolvedReference(_))
    }
}
