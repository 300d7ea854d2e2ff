use super::{
    Dataset, Event, Field, FieldId, FieldType, JoinTable, Model, ModelId, Relationship,
    RelationshipId, RelationshipSide, RelationshipType, Side, SideId,
};
use crate::schema::{DefaultResolver, TypeNames, TypeResolver};
use crate::{Error, Result};
use indexmap::IndexMap;

/// The registry of everything an application declares.
///
/// Models, events and datasets are keyed by name; adding a second item with
/// an existing name replaces the first one in place. The bundle also owns
/// the relationship arena built by inference.
#[derive(Debug, Clone, Default)]
pub struct Bundle {
    pub namespace: String,
    pub name: String,
    pub description: String,

    models: IndexMap<String, Model>,
    events: IndexMap<String, Event>,
    datasets: IndexMap<String, Dataset>,

    pub(crate) relationships: Vec<Relationship>,
    pub(crate) join_tables: Vec<JoinTable>,
}

impl Bundle {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Registers a model, replacing any model with the same name.
    ///
    /// The model keeps the position of the one it replaces, so its
    /// [`ModelId`] is stable. A model already linked by a relationship
    /// cannot be replaced. Relations carried by the incoming fields are
    /// cleared; inference links them again.
    pub fn add_model(&mut self, mut model: Model) -> Result<ModelId> {
        if let Some(index) = self.models.get_index_of(&model.name) {
            let id = ModelId(index);
            if self.relationships.iter().any(|rel| rel.involves(id)) {
                return Err(Error::invariant_violation(format!(
                    "model `{}` is part of a relationship and cannot be replaced",
                    model.name
                )));
            }
        }

        let id = ModelId(self.models.get_index_of(&model.name).unwrap_or(self.models.len()));
        model.set_id(id);
        self.models.insert(model.name.clone(), model);
        Ok(id)
    }

    /// Get a model by ID
    #[track_caller]
    pub fn model(&self, id: impl Into<ModelId>) -> &Model {
        self.models
            .get_index(id.into().0)
            .map(|(_, model)| model)
            .expect("invalid model ID")
    }

    #[track_caller]
    pub(crate) fn model_mut(&mut self, id: impl Into<ModelId>) -> &mut Model {
        self.models
            .get_index_mut(id.into().0)
            .map(|(_, model)| model)
            .expect("invalid model ID")
    }

    pub fn model_by_name(&self, name: &str) -> Option<&Model> {
        self.models.get(name)
    }

    pub fn model_id(&self, name: &str) -> Option<ModelId> {
        self.models.get_index_of(name).map(ModelId)
    }

    pub fn models(&self) -> impl ExactSizeIterator<Item = &Model> + '_ {
        self.models.values()
    }

    pub(crate) fn model_ids(&self) -> impl Iterator<Item = ModelId> {
        (0..self.models.len()).map(ModelId)
    }

    pub fn add_event(&mut self, event: Event) {
        self.events.insert(event.name.clone(), event);
    }

    pub fn event(&self, name: &str) -> Option<&Event> {
        self.events.get(name)
    }

    pub fn events(&self) -> impl ExactSizeIterator<Item = &Event> + '_ {
        self.events.values()
    }

    pub fn add_dataset(&mut self, dataset: Dataset) {
        self.datasets.insert(dataset.name.clone(), dataset);
    }

    pub fn dataset(&self, name: &str) -> Option<&Dataset> {
        self.datasets.get(name)
    }

    pub fn datasets(&self) -> impl ExactSizeIterator<Item = &Dataset> + '_ {
        self.datasets.values()
    }

    /// Get a field by ID
    #[track_caller]
    pub fn field(&self, id: impl Into<FieldId>) -> &Field {
        let id = id.into();
        self.model(id.model).field_by_id(id)
    }

    #[track_caller]
    pub(crate) fn field_mut(&mut self, id: FieldId) -> &mut Field {
        self.model_mut(id.model).field_by_index_mut(id.index)
    }

    /// Classifies a field's declared type against the models and datasets
    /// currently registered.
    pub fn classify(&self, field: &Field) -> FieldType {
        DefaultResolver.resolve(&field.ty, &TypeNames::collect(self))
    }

    /// Creates a relationship between two models and links the given fields
    /// to their sides.
    ///
    /// Each field must belong to its side's model, name the opposite model
    /// as its type and not already navigate another relationship. Types are
    /// classified with the [`DefaultResolver`].
    pub fn add_relationship(
        &mut self,
        ty: RelationshipType,
        left: (ModelId, Option<FieldId>),
        right: (ModelId, Option<FieldId>),
    ) -> Result<RelationshipId> {
        self.add_relationship_with(DefaultResolver, ty, left, right)
    }

    /// Same as [`Bundle::add_relationship`], with field types classified by
    /// `resolver`.
    pub fn add_relationship_with(
        &mut self,
        resolver: impl TypeResolver,
        ty: RelationshipType,
        left: (ModelId, Option<FieldId>),
        right: (ModelId, Option<FieldId>),
    ) -> Result<RelationshipId> {
        let names = TypeNames::collect(self);

        for ((model, field), remote) in [(left, right.0), (right, left.0)] {
            if let Some(field) = field {
                self.check_side_field(&resolver, &names, model, field, remote, None)?;
            }
        }

        if let (Some(l), Some(r)) = (left.1, right.1) {
            if l == r {
                return Err(Error::invariant_violation(format!(
                    "field `{}::{}` cannot navigate both sides of a relationship",
                    self.model(l.model).name,
                    self.field(l).name
                )));
            }
        }

        let id = RelationshipId(self.relationships.len());
        self.relationships
            .push(Relationship::new(id, ty, left.0, right.0));

        for (side, field) in [(Side::Left, left.1), (Side::Right, right.1)] {
            if let Some(field) = field {
                self.link(SideId { relationship: id, side }, field);
            }
        }

        Ok(id)
    }

    /// Attaches a field to a relationship side, or detaches the current one.
    ///
    /// The previous field, if any, loses its `relation`. Passing `None`
    /// turns the relationship into a unidirectional one; the remote side is
    /// untouched. Any foreign key recorded on the side is discarded when the
    /// field changes.
    pub fn set_side_field(&mut self, side: SideId, field: Option<FieldId>) -> Result<()> {
        self.set_side_field_with(DefaultResolver, side, field)
    }

    /// Same as [`Bundle::set_side_field`], with the field's type classified
    /// by `resolver`.
    pub fn set_side_field_with(
        &mut self,
        resolver: impl TypeResolver,
        side: SideId,
        field: Option<FieldId>,
    ) -> Result<()> {
        let Some(relationship) = self.relationships.get(side.relationship.0) else {
            return Err(Error::invariant_violation(format!(
                "relationship {:?} does not exist in bundle `{}`",
                side.relationship, self.name
            )));
        };

        let model = relationship.side(side.side).model;
        let remote = relationship.side(side.side.opposite()).model;
        let previous = relationship.side(side.side).field;

        if previous == field {
            return Ok(());
        }

        if let Some(field) = field {
            let names = TypeNames::collect(self);
            self.check_side_field(&resolver, &names, model, field, remote, Some(side))?;
        }

        if let Some(previous) = previous {
            self.field_mut(previous).relation = None;
        }

        let entry = self.side_mut(side);
        entry.field = None;
        entry.foreign_key = None;

        if let Some(field) = field {
            self.link(side, field);
        }

        Ok(())
    }

    fn check_side_field(
        &self,
        resolver: &impl TypeResolver,
        names: &TypeNames,
        model: ModelId,
        field: FieldId,
        remote: ModelId,
        side: Option<SideId>,
    ) -> Result<()> {
        let owner = self.model(model);

        if field.model != model || field.index >= owner.fields().len() {
            return Err(Error::invariant_violation(format!(
                "field {field:?} does not belong to model `{}`",
                owner.name
            )));
        }

        let target = self.field(field);
        let remote = self.model(remote);

        if resolver.resolve(&target.ty, names).as_model() != Some(remote.name.as_str()) {
            return Err(Error::invariant_violation(format!(
                "field `{}::{}` has type `{}` and cannot navigate to model `{}`",
                owner.name, target.name, target.ty, remote.name
            )));
        }

        if target.relation.is_some() && target.relation != side {
            return Err(Error::invariant_violation(format!(
                "field `{}::{}` is already part of another relationship",
                owner.name, target.name
            )));
        }

        Ok(())
    }

    fn link(&mut self, side: SideId, field: FieldId) {
        self.side_mut(side).field = Some(field);
        self.field_mut(field).relation = Some(side);
    }

    #[track_caller]
    pub fn relationship(&self, id: RelationshipId) -> &Relationship {
        self.relationships
            .get(id.0)
            .expect("invalid relationship ID")
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    #[track_caller]
    pub fn side(&self, id: SideId) -> &RelationshipSide {
        self.relationship(id.relationship).side(id.side)
    }

    #[track_caller]
    pub fn remote_side(&self, id: SideId) -> &RelationshipSide {
        self.side(id.remote())
    }

    #[track_caller]
    pub(crate) fn side_mut(&mut self, id: SideId) -> &mut RelationshipSide {
        self.relationships
            .get_mut(id.relationship.0)
            .expect("invalid relationship ID")
            .side_mut(id.side)
    }

    /// Every side pinned to `model`, including passive ones.
    pub fn sides_of(&self, model: ModelId) -> Vec<SideId> {
        self.relationships
            .iter()
            .flat_map(|rel| [rel.left(), rel.right()])
            .filter(|side| side.model() == model)
            .map(RelationshipSide::id)
            .collect()
    }

    /// Distinct models reachable from `model` through one relationship, in
    /// relationship order.
    pub fn linked_models(&self, model: ModelId) -> Vec<ModelId> {
        let mut linked = vec![];

        for side in self.sides_of(model) {
            let remote = self.remote_side(side).model();
            if !linked.contains(&remote) {
                linked.push(remote);
            }
        }

        linked
    }

    pub fn join_tables(&self) -> &[JoinTable] {
        &self.join_tables
    }

    pub fn join_table(&self, relationship: RelationshipId) -> Option<&JoinTable> {
        self.join_tables
            .iter()
            .find(|table| table.relationship == relationship)
    }

    pub(crate) fn record_join_table(&mut self, join_table: JoinTable) {
        match self
            .join_tables
            .iter_mut()
            .find(|table| table.relationship == join_table.relationship)
        {
            Some(existing) => *existing = join_table,
            None => self.join_tables.push(join_table),
        }
    }
}
