use crate::schema::app::NativeType;
use serde::{Deserialize, Serialize};

/// Options for relational field generation.
///
/// The configuration loader deserializes this from the project file; every
/// key is optional and falls back to [`RelationalConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelationalConfig {
    /// Type given to identifier fields synthesized for models without one
    pub identifier_type: IdentifierType,

    /// Whether audited models receive `created` / `updated` timestamp fields
    pub audit_fields: bool,
}

/// Native types allowed for model identifiers
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierType {
    /// Auto-incremented 8-byte integer
    #[default]
    Id,

    /// Version 4 UUID
    Uuid,
}

impl Default for RelationalConfig {
    fn default() -> Self {
        Self {
            identifier_type: IdentifierType::Id,
            audit_fields: true,
        }
    }
}

impl RelationalConfig {
    /// Create a new RelationalConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identifier type used for generated identifiers
    pub fn identifier_type(mut self, identifier_type: IdentifierType) -> Self {
        self.identifier_type = identifier_type;
        self
    }

    /// Enable or disable audit timestamp generation
    pub fn audit_fields(mut self, audit_fields: bool) -> Self {
        self.audit_fields = audit_fields;
        self
    }
}

impl IdentifierType {
    pub fn native(self) -> NativeType {
        match self {
            Self::Id => NativeType::Id,
            Self::Uuid => NativeType::Uuid,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.native().as_str()
    }
}

impl From<IdentifierType> for NativeType {
    fn from(value: IdentifierType) -> Self {
        value.native()
    }
}
