use super::{ForeignKey, RelationshipId};
use crate::schema::app::{FieldId, ModelId};

/// One endpoint of a relationship.
#[derive(Debug, Clone)]
pub struct RelationshipSide {
    pub(crate) relationship: RelationshipId,
    pub(crate) side: Side,

    /// Model the side is pinned to
    pub(crate) model: ModelId,

    /// Field of `model` navigating to the other side. `None` for the passive
    /// end of a unidirectional relationship.
    pub(crate) field: Option<FieldId>,

    /// Set by relational field generation on the side storing the key
    pub(crate) foreign_key: Option<ForeignKey>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Left,
    Right,
}

/// Handle to one side of a relationship in the bundle's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SideId {
    pub relationship: RelationshipId,
    pub side: Side,
}

impl RelationshipSide {
    pub(super) fn new(relationship: RelationshipId, side: Side, model: ModelId) -> Self {
        Self {
            relationship,
            side,
            model,
            field: None,
            foreign_key: None,
        }
    }

    pub fn id(&self) -> SideId {
        SideId {
            relationship: self.relationship,
            side: self.side,
        }
    }

    pub fn relationship(&self) -> RelationshipId {
        self.relationship
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn is_left(&self) -> bool {
        self.side == Side::Left
    }

    pub fn is_right(&self) -> bool {
        self.side == Side::Right
    }

    pub fn model(&self) -> ModelId {
        self.model
    }

    pub fn field(&self) -> Option<FieldId> {
        self.field
    }

    pub fn foreign_key(&self) -> Option<&ForeignKey> {
        self.foreign_key.as_ref()
    }
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl SideId {
    /// The other side of the same relationship
    pub fn remote(self) -> SideId {
        SideId {
            relationship: self.relationship,
            side: self.side.opposite(),
        }
    }
}
