use super::NativeType;

/// A field's declared type after classification against a bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// A scalar type tag
    Native(NativeType),

    /// The name of a business model; the field is a reference field
    Model(String),

    /// The name of a dataset; the field holds one of the dataset's elements
    Dataset(String),

    /// Neither native nor known to the bundle
    Unknown(String),
}

impl FieldType {
    pub fn is_native(&self) -> bool {
        matches!(self, Self::Native(..))
    }

    pub fn as_native(&self) -> Option<NativeType> {
        match self {
            Self::Native(native) => Some(*native),
            _ => None,
        }
    }

    pub fn is_model(&self) -> bool {
        matches!(self, Self::Model(..))
    }

    /// Returns the referenced model name if this is a reference field type.
    pub fn as_model(&self) -> Option<&str> {
        match self {
            Self::Model(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_dataset(&self) -> bool {
        matches!(self, Self::Dataset(..))
    }
}
