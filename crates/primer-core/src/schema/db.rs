//! Naming and column-set helpers used when laying models out as tables.

use super::app::{Bundle, Field, FieldId, Model, RelationshipId, RelationshipType, SideId};
use super::Name;
use crate::{Error, Result};

/// A secondary index on a model's table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    /// `<column>_idx`
    pub name: String,
    pub fields: Vec<FieldId>,
    pub description: String,
}

/// Snake-cased `<namespace> <name>`, with the last word singularized.
pub fn database_name(bundle: &Bundle) -> String {
    let name = Name::new(&format!("{} {}", bundle.namespace, bundle.name));
    inflect_last(name, 1)
}

/// The model name snake-cased with its last word pluralized: `BlogPost`
/// maps to `blog_posts`.
pub fn table_name(model: &Model) -> String {
    inflect_last(Name::new(&model.name), 2)
}

/// Name of the join table backing a many-to-many relationship:
/// `<left table>_<right table>`.
pub fn relation_table_name(bundle: &Bundle, id: RelationshipId) -> Result<String> {
    let relationship = bundle.relationship(id);

    if relationship.ty() != RelationshipType::ManyToMany {
        return Err(Error::invariant_violation(format!(
            "relation tables can only be created for many-to-many relationships; {id:?} is {}",
            relationship.ty()
        )));
    }

    Ok(format!(
        "{}_{}",
        table_name(bundle.model(relationship.left().model())),
        table_name(bundle.model(relationship.right().model()))
    ))
}

pub fn audit_table_name(model: &Model) -> String {
    format!("{}_logs", table_name(model))
}

/// The field name snake-cased. Fields holding a foreign key get an `_id`
/// suffix unless their name already ends with `id`.
pub fn column_name(bundle: &Bundle, field: &Field) -> String {
    let mut name = Name::new(&field.name).snake_case();

    if let Some(side) = field.relation() {
        if is_valid_foreign_key(bundle, side) && !name.ends_with("id") {
            name.push_str("_id");
        }
    }

    name
}

/// Column referencing `model` from another table, e.g. `user_id`.
pub fn model_column_name(model: &Model) -> String {
    format!("{}_id", Name::new(&model.name).snake_case())
}

/// Returns true if the side's table stores the relationship as a column.
pub fn is_valid_foreign_key(bundle: &Bundle, side: SideId) -> bool {
    bundle.relationship(side.relationship).foreign_key_side() == Some(side.side)
}

/// One index per searchable field, then one per foreign key column.
pub fn indexes(bundle: &Bundle, model: &Model) -> Vec<Index> {
    let mut indexes: Vec<_> = model
        .searchable_fields()
        .map(|field| index(bundle, field, "To optimize search queries".to_string()))
        .collect();

    for side in model.relations() {
        if !is_valid_foreign_key(bundle, side) {
            continue;
        }

        let Some(field) = bundle.side(side).field() else {
            continue;
        };

        let remote = bundle.model(bundle.remote_side(side).model());
        indexes.push(index(
            bundle,
            bundle.field(field),
            format!("{} foreign key", remote.name),
        ));
    }

    indexes
}

fn index(bundle: &Bundle, field: &Field, description: String) -> Index {
    Index {
        name: format!("{}_idx", column_name(bundle, field)),
        fields: vec![field.id()],
        description,
    }
}

/// Fields stored as columns of the model's own table.
///
/// List fields live elsewhere, as do relation fields whose key is held by
/// the other side.
pub fn database_fields<'a>(bundle: &Bundle, model: &'a Model) -> Vec<&'a Field> {
    model
        .fields()
        .filter(|field| !field.list)
        .filter(|field| {
            field
                .relation()
                .map_or(true, |side| is_valid_foreign_key(bundle, side))
        })
        .collect()
}

/// Fields whose changes are written to the audit table.
///
/// Generated fields other than the identifier, lists and the managed
/// timestamps are skipped. `include_id` controls whether the identifier is
/// part of the set.
pub fn audited_fields(model: &Model, include_id: bool) -> Vec<&Field> {
    let identifier = model.identifier().map(Field::id);

    model
        .fields()
        .filter(|field| {
            let is_identifier = Some(field.id()) == identifier;

            if is_identifier {
                return include_id;
            }

            !field.generated
                && !field.list
                && !field.is_created_timestamp()
                && !field.is_updated_timestamp()
        })
        .collect()
}

fn inflect_last(mut name: Name, count: isize) -> String {
    if let Some(last) = name.parts.last_mut() {
        *last = pluralizer::pluralize(last, count, false);
    }
    name.snake_case()
}
