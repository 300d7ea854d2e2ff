use super::{Constraint, Field, FieldId, NativeType, SideId, StateMachine};
use crate::{Error, Result};
use indexmap::IndexMap;
use std::fmt;

#[derive(Debug, Clone)]
pub struct Model {
    /// Uniquely identifies the model within the bundle
    pub(crate) id: ModelId,

    /// Name of the model, unique within the bundle
    pub name: String,

    pub description: String,

    /// Audited models keep `created` / `updated` timestamps
    pub audited: bool,

    /// Fields keyed by name, in insertion order
    fields: IndexMap<String, Field>,

    /// Index of the active identifier field
    identifier: Option<usize>,

    /// Flags the active identifier had before it was promoted
    identifier_flags: Option<IdentifierFlags>,

    unique_constraints: Vec<Constraint>,

    pub state_machine: Option<StateMachine>,
}

/// Field flags overridden by identifier promotion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct IdentifierFlags {
    managed: bool,
    mandatory: bool,
    generated: bool,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ModelId(pub usize);

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ModelId::placeholder(),
            name: name.into(),
            description: String::new(),
            audited: false,
            fields: IndexMap::new(),
            identifier: None,
            identifier_flags: None,
            unique_constraints: vec![],
            state_machine: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn audited(mut self, audited: bool) -> Self {
        self.audited = audited;
        self
    }

    /// Builder form of [`Model::add_field`].
    pub fn with_field(mut self, field: Field) -> Result<Self> {
        self.add_field(field)?;
        Ok(self)
    }

    pub fn id(&self) -> ModelId {
        self.id
    }

    pub fn is_audited(&self) -> bool {
        self.audited
    }

    /// Adds a field, replacing any field with the same name in place.
    ///
    /// A field flagged as identifier is promoted with
    /// [`Model::promote_identifier`]. Replacing a field that currently
    /// navigates a relationship is rejected.
    pub fn add_field(&mut self, mut field: Field) -> Result<FieldId> {
        if field.identifier {
            check_identifier_type(&field)?;
        }

        if let Some(existing) = self.fields.get(&field.name) {
            if existing.relation.is_some() {
                return Err(Error::invariant_violation(format!(
                    "field `{}::{}` is part of a relationship and cannot be replaced",
                    self.name, field.name
                )));
            }
        }

        let promote = field.identifier;
        // Promotion sets the flag once the field is in place.
        field.identifier = false;
        field.relation = None;

        let (index, replaced) = self.fields.insert_full(field.name.clone(), field);
        let id = self.id.field(index);
        self.fields[index].id = id;

        if replaced.is_some() && self.identifier == Some(index) {
            // The previous identifier is gone, so there is nothing to restore.
            self.identifier = None;
            self.identifier_flags = None;
        }

        if promote {
            self.promote_index(index);
        }

        Ok(id)
    }

    /// Makes the named field the model's only identifier.
    ///
    /// The previous identifier, if any, is demoted and gets back the
    /// `managed`, `mandatory` and `generated` flags it had before its own
    /// promotion. The promoted field's flags are recorded, then forced to
    /// `true`.
    pub fn promote_identifier(&mut self, name: &str) -> Result<FieldId> {
        let Some(index) = self.fields.get_index_of(name) else {
            return Err(Error::invariant_violation(format!(
                "model `{}` has no field `{name}` to promote as identifier",
                self.name
            )));
        };

        check_identifier_type(&self.fields[index])?;
        self.promote_index(index);
        Ok(self.id.field(index))
    }

    fn promote_index(&mut self, index: usize) {
        if self.identifier == Some(index) {
            return;
        }

        if let Some(previous) = self.identifier.take() {
            let flags = self.identifier_flags.take();
            let field = &mut self.fields[previous];
            field.identifier = false;
            if let Some(flags) = flags {
                field.managed = flags.managed;
                field.mandatory = flags.mandatory;
                field.generated = flags.generated;
            }
        }

        let field = &mut self.fields[index];
        self.identifier_flags = Some(IdentifierFlags {
            managed: field.managed,
            mandatory: field.mandatory,
            generated: field.generated,
        });
        field.identifier = true;
        field.managed = true;
        field.mandatory = true;
        field.generated = true;
        self.identifier = Some(index);
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    #[track_caller]
    pub fn field_by_id(&self, id: impl Into<FieldId>) -> &Field {
        let field_id = id.into();
        assert_eq!(self.id, field_id.model);
        &self.fields[field_id.index]
    }

    pub(crate) fn field_by_index_mut(&mut self, index: usize) -> &mut Field {
        &mut self.fields[index]
    }

    pub fn fields(&self) -> impl ExactSizeIterator<Item = &Field> + '_ {
        self.fields.values()
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn identifier(&self) -> Option<&Field> {
        self.identifier.map(|index| &self.fields[index])
    }

    /// Returns the identifier if it is mandatory, managed and of type `id`
    /// or `uuid`.
    pub fn usable_identifier(&self) -> Option<&Field> {
        self.identifier().filter(|field| is_usable_identifier(field))
    }

    pub fn mandatory_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields().filter(|field| field.mandatory)
    }

    pub fn searchable_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields().filter(|field| field.searchable)
    }

    pub fn managed_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields().filter(|field| field.managed)
    }

    /// Relationship sides navigated by this model's fields, in field order.
    ///
    /// Passive sides, the ones without a field, are only reachable through
    /// [`Bundle::sides_of`](super::Bundle::sides_of).
    pub fn relations(&self) -> Vec<SideId> {
        self.fields().filter_map(|field| field.relation).collect()
    }

    pub fn created_timestamp_field(&self) -> Option<&Field> {
        self.managed_fields().find(|field| field.is_created_timestamp())
    }

    pub fn updated_timestamp_field(&self) -> Option<&Field> {
        self.managed_fields().find(|field| field.is_updated_timestamp())
    }

    pub fn is_managed_timestamp(&self) -> bool {
        self.created_timestamp_field().is_some() || self.updated_timestamp_field().is_some()
    }

    pub fn unique_constraints(&self) -> &[Constraint] {
        &self.unique_constraints
    }

    /// Adds a unique constraint. Every field it names must belong to the
    /// model.
    pub fn add_unique_constraint(&mut self, constraint: Constraint) -> Result<()> {
        if let Some(missing) = constraint
            .fields()
            .iter()
            .find(|name| !self.fields.contains_key(name.as_str()))
        {
            return Err(Error::invariant_violation(format!(
                "constraint `{}` references field `{missing}` which is not defined on model `{}`",
                constraint.name, self.name
            )));
        }

        self.unique_constraints.push(constraint);
        Ok(())
    }

    /// True if a single-field unique constraint covers `name`.
    pub fn is_unique_field(&self, name: &str) -> bool {
        self.unique_constraints
            .iter()
            .any(|constraint| constraint.fields() == [name])
    }

    /// Assigns the model's position in its bundle, re-keying every field id.
    /// Relation handles point into another bundle's arena and are dropped.
    pub(crate) fn set_id(&mut self, id: ModelId) {
        self.id = id;
        for (index, field) in self.fields.values_mut().enumerate() {
            field.id = id.field(index);
            field.relation = None;
        }
    }
}

fn check_identifier_type(field: &Field) -> Result<()> {
    match field.native_type() {
        Some(native) if native.is_identifier_type() => Ok(()),
        _ => Err(Error::invariant_violation(format!(
            "invalid identifier type provided: {}; must be either `{}` or `{}`",
            field.ty,
            NativeType::Id,
            NativeType::Uuid,
        ))),
    }
}

pub(crate) fn is_usable_identifier(field: &Field) -> bool {
    field.mandatory
        && field.managed
        && field
            .native_type()
            .is_some_and(|native| native.is_identifier_type())
}

impl ModelId {
    /// Create a `FieldId` representing the current model's field at index
    /// `index`.
    pub const fn field(self, index: usize) -> FieldId {
        FieldId { model: self, index }
    }

    pub(crate) const fn placeholder() -> Self {
        Self(usize::MAX)
    }
}

impl From<&Self> for ModelId {
    fn from(src: &Self) -> Self {
        *src
    }
}

impl From<&Model> for ModelId {
    fn from(value: &Model) -> Self {
        value.id
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ModelId({})", self.0)
    }
}
