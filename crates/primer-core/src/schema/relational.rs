use super::app::{
    Bundle, Field, FieldId, ForeignKey, JoinTable, Model, ModelId, NativeType, RelationshipId,
    RelationshipType, SideId,
};
use super::app::is_usable_identifier;
use super::{db, Name};
use crate::{Error, IdentifierType, RelationalConfig, Result};
use tracing::debug;

const IDENTIFIER_DESCRIPTION: &str = "DB unique identifier field";
const FOREIGN_KEY_DESCRIPTION: &str = "Foreign relationship field";

/// Adds the fields a relational store needs to materialize the bundle's
/// models and relationships.
///
/// Runs after inference and takes the relationship arena as it is: a field
/// detached with [`Bundle::set_side_field`] is not linked again. Existing
/// fields are never overwritten: a needed name that is already taken is
/// reported as a name collision.
pub fn generate_relational_fields(bundle: &mut Bundle, config: &RelationalConfig) -> Result<()> {
    let model_ids: Vec<_> = bundle.model_ids().collect();

    for &id in &model_ids {
        if bundle.model(id).usable_identifier().is_none() {
            generate_identifier_field(bundle.model_mut(id), config.identifier_type)?;
        }
    }

    let relationship_ids: Vec<_> = bundle.relationships().iter().map(|rel| rel.id()).collect();

    for id in relationship_ids {
        match bundle.relationship(id).foreign_key_side() {
            Some(side) => link_foreign_key(bundle, SideId { relationship: id, side })?,
            None => record_join_table(bundle, id)?,
        }
    }

    if config.audit_fields {
        for &id in &model_ids {
            if bundle.model(id).is_audited() {
                generate_timestamp_fields(bundle.model_mut(id))?;
            }
        }
    }

    Ok(())
}

/// Gives the model a fresh identifier field.
///
/// The field is named `id`, or `<model>Id` when `id` is taken. An existing
/// `id` field that already qualifies as an identifier is promoted instead.
pub fn generate_identifier_field(model: &mut Model, ty: IdentifierType) -> Result<FieldId> {
    if let Some(existing) = model.field("id") {
        if is_usable_identifier(existing) {
            debug!(model = %model.name, "promoting existing `id` field as identifier");
            return model.promote_identifier("id");
        }
    }

    let fallback = format!("{}Id", Name::new(&model.name).camel_case());

    let name = match ["id", fallback.as_str()]
        .into_iter()
        .find(|candidate| !model.has_field(candidate))
    {
        Some(name) => name.to_string(),
        None => return Err(Error::name_collision(&model.name, ["id", fallback.as_str()])),
    };

    let field = Field::new(&name, ty.as_str())
        .description(IDENTIFIER_DESCRIPTION)
        .mandatory(true)
        .managed(true)
        .generated(true)
        .identifier(true);

    let id = model.add_field(field)?;
    debug!(model = %model.name, field = %name, ty = ty.as_str(), "generated identifier field");
    Ok(id)
}

/// Adds a field on `model` navigating to `remote`, named after the remote
/// model. The caller attaches it to a relationship side.
pub fn generate_foreign_key_field(
    bundle: &mut Bundle,
    model: ModelId,
    remote: ModelId,
) -> Result<FieldId> {
    let remote = bundle.model(remote);

    if remote.identifier().is_none() {
        return Err(Error::missing_identifier(&remote.name));
    }

    let name = Name::new(&remote.name).camel_case();
    let field = Field::new(&name, &remote.name)
        .description(FOREIGN_KEY_DESCRIPTION)
        .managed(true)
        .generated(true);

    let owner = bundle.model_mut(model);
    if owner.has_field(&name) {
        return Err(Error::name_collision(&owner.name, [name]));
    }

    let id = owner.add_field(field)?;
    debug!(model = %owner.name, field = %name, "generated foreign key field");
    Ok(id)
}

/// Adds `created` and `updated` managed timestamps unless the model already
/// tracks them.
pub fn generate_timestamp_fields(model: &mut Model) -> Result<()> {
    let missing = [
        (
            "created",
            "Time at which the record was created",
            model.created_timestamp_field().is_none(),
        ),
        (
            "updated",
            "Time at which the record was last updated",
            model.updated_timestamp_field().is_none(),
        ),
    ];

    for (name, description, needed) in missing {
        if !needed {
            continue;
        }

        if model.has_field(name) {
            return Err(Error::name_collision(&model.name, [name]));
        }

        model.add_field(
            Field::new(name, NativeType::DateTime.as_str())
                .description(description)
                .managed(true)
                .generated(true),
        )?;

        debug!(model = %model.name, field = name, "generated timestamp field");
    }

    Ok(())
}

/// Ensures the side carrying the key column has a field, then records the
/// key against the remote identifier.
fn link_foreign_key(bundle: &mut Bundle, side: SideId) -> Result<()> {
    let model = bundle.side(side).model();
    let remote = bundle.remote_side(side).model();

    let field = match bundle.side(side).field() {
        Some(field) => field,
        None => {
            let field = generate_foreign_key_field(bundle, model, remote)?;
            bundle.set_side_field(side, Some(field))?;
            field
        }
    };

    let remote_model = bundle.model(remote);
    let Some(target) = remote_model.identifier() else {
        return Err(Error::missing_identifier(&remote_model.name));
    };

    let Some(ty) = target.native_type() else {
        return Err(Error::invariant_violation(format!(
            "identifier `{}::{}` has non-native type `{}`",
            remote_model.name, target.name, target.ty
        )));
    };

    let foreign_key = ForeignKey {
        field,
        column: format!(
            "{}{}",
            bundle.field(field).name,
            Name::new(&target.name).upper_camel_case()
        ),
        target: target.id(),
        ty,
    };

    debug!(
        model = %bundle.model(model).name,
        column = %foreign_key.column,
        "recorded foreign key"
    );

    bundle.side_mut(side).foreign_key = Some(foreign_key);
    Ok(())
}

fn record_join_table(bundle: &mut Bundle, id: RelationshipId) -> Result<()> {
    let relationship = bundle.relationship(id);
    debug_assert_eq!(relationship.ty(), RelationshipType::ManyToMany);

    let left = relationship.left().model();
    let right = relationship.right().model();

    let join_table = JoinTable {
        relationship: id,
        name: db::relation_table_name(bundle, id)?,
        left,
        right,
        left_key: identifier_of(bundle, left)?,
        right_key: identifier_of(bundle, right)?,
    };

    debug!(name = %join_table.name, "recorded join table");
    bundle.record_join_table(join_table);
    Ok(())
}

fn identifier_of(bundle: &Bundle, model: ModelId) -> Result<FieldId> {
    let model = bundle.model(model);
    model
        .identifier()
        .map(Field::id)
        .ok_or_else(|| Error::missing_identifier(&model.name))
}
