use super::RelationshipId;
use crate::schema::app::{FieldId, ModelId, NativeType};

/// Column storing the remote identifier on the side that owns the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    /// The relation field the key backs
    pub field: FieldId,

    /// Name of the key column, e.g. `authorId`
    pub column: String,

    /// The remote model's identifier field
    pub target: FieldId,

    /// Type copied from the remote identifier
    pub ty: NativeType,
}

/// Shape of the table backing a many-to-many relationship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinTable {
    pub relationship: RelationshipId,
    pub name: String,
    pub left: ModelId,
    pub right: ModelId,

    /// Identifier of the left model
    pub left_key: FieldId,

    /// Identifier of the right model
    pub right_key: FieldId,
}
