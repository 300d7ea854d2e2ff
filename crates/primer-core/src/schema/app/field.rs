mod native;
pub use native::NativeType;

mod ty;
pub use ty::FieldType;

use super::{ModelId, SideId};
use std::fmt;

#[derive(Debug, Clone)]
pub struct Field {
    /// Uniquely identifies the field within the bundle. Assigned when the
    /// field is added to a model.
    pub(crate) id: FieldId,

    /// The field name, unique within the owning model
    pub name: String,

    /// Declared type: a native type tag or the name of another model
    pub ty: String,

    pub description: String,

    /// Default value, as written in the model definition
    pub default: Option<String>,

    /// Example value used by documentation and fixtures
    pub example: Option<String>,

    /// True if a value must always be provided
    pub mandatory: bool,

    /// True if the value is controlled by the system rather than the user
    pub managed: bool,

    /// True if the field is used to look records up
    pub searchable: bool,

    /// True if the field was synthesized rather than declared
    pub generated: bool,

    /// True if the field holds zero or more values of `ty`
    pub list: bool,

    /// True if the field is the owning model's primary key. Only the owning
    /// model may change this once the field is added.
    pub(crate) identifier: bool,

    /// The relationship side this field is navigating, set by the bundle.
    pub(crate) relation: Option<SideId>,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId {
    pub model: ModelId,
    pub index: usize,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            id: FieldId::placeholder(),
            name: name.into(),
            ty: ty.into(),
            description: String::new(),
            default: None,
            example: None,
            mandatory: false,
            managed: false,
            searchable: false,
            generated: false,
            list: false,
            identifier: false,
            relation: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    pub fn mandatory(mut self, mandatory: bool) -> Self {
        self.mandatory = mandatory;
        self
    }

    pub fn managed(mut self, managed: bool) -> Self {
        self.managed = managed;
        self
    }

    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    pub fn generated(mut self, generated: bool) -> Self {
        self.generated = generated;
        self
    }

    pub fn list(mut self, list: bool) -> Self {
        self.list = list;
        self
    }

    /// Requests that the field becomes its model's identifier when added.
    pub fn identifier(mut self, identifier: bool) -> Self {
        self.identifier = identifier;
        self
    }

    /// Gets the id.
    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn is_mandatory(&self) -> bool {
        self.mandatory
    }

    pub fn is_managed(&self) -> bool {
        self.managed
    }

    pub fn is_searchable(&self) -> bool {
        self.searchable
    }

    pub fn is_generated(&self) -> bool {
        self.generated
    }

    pub fn is_list(&self) -> bool {
        self.list
    }

    pub fn is_identifier(&self) -> bool {
        self.identifier
    }

    /// The relationship side this field navigates, if any.
    pub fn relation(&self) -> Option<SideId> {
        self.relation
    }

    /// The declared type parsed as a native type, if it is one.
    pub fn native_type(&self) -> Option<NativeType> {
        NativeType::from_name(&self.ty)
    }

    /// Returns true for managed `datetime` fields whose name starts with
    /// `created`.
    pub fn is_created_timestamp(&self) -> bool {
        self.is_managed_date_time() && self.name.to_lowercase().starts_with("created")
    }

    /// Returns true for managed `datetime` fields whose name starts with
    /// `updated`.
    pub fn is_updated_timestamp(&self) -> bool {
        self.is_managed_date_time() && self.name.to_lowercase().starts_with("updated")
    }

    fn is_managed_date_time(&self) -> bool {
        self.managed && self.native_type().is_some_and(NativeType::is_date_time)
    }
}

impl FieldId {
    pub(crate) const fn placeholder() -> Self {
        Self {
            model: ModelId::placeholder(),
            index: usize::MAX,
        }
    }
}

impl From<&Self> for FieldId {
    fn from(val: &Self) -> Self {
        *val
    }
}

impl From<&Field> for FieldId {
    fn from(val: &Field) -> Self {
        val.id
    }
}

impl fmt::Debug for FieldId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "FieldId({}/{})", self.model.0, self.index)
    }
}
