mod foreign_key;
pub use foreign_key::{ForeignKey, JoinTable};

mod side;
pub use side::{RelationshipSide, Side, SideId};

use super::ModelId;
use std::fmt;

/// A binary edge between two models.
///
/// Relationships live in the bundle's arena and are addressed by
/// [`RelationshipId`]. Their type never changes once created.
#[derive(Debug, Clone)]
pub struct Relationship {
    pub(crate) id: RelationshipId,
    pub(crate) ty: RelationshipType,
    pub(crate) left: RelationshipSide,
    pub(crate) right: RelationshipSide,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct RelationshipId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipType {
    OneToOne,
    /// The left side is the "one" end, the right side the "many" end.
    OneToMany,
    ManyToMany,
}

impl Relationship {
    pub(crate) fn new(
        id: RelationshipId,
        ty: RelationshipType,
        left: ModelId,
        right: ModelId,
    ) -> Self {
        Self {
            id,
            ty,
            left: RelationshipSide::new(id, Side::Left, left),
            right: RelationshipSide::new(id, Side::Right, right),
        }
    }

    pub fn id(&self) -> RelationshipId {
        self.id
    }

    pub fn ty(&self) -> RelationshipType {
        self.ty
    }

    pub fn left(&self) -> &RelationshipSide {
        &self.left
    }

    pub fn right(&self) -> &RelationshipSide {
        &self.right
    }

    pub fn side(&self, side: Side) -> &RelationshipSide {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub(crate) fn side_mut(&mut self, side: Side) -> &mut RelationshipSide {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Both sides carry a navigable field.
    pub fn is_bidirectional(&self) -> bool {
        self.left.field.is_some() && self.right.field.is_some()
    }

    /// The side whose table stores the foreign key column, if any.
    ///
    /// One-to-one relationships store it on the left, one-to-many on the
    /// "many" end (right). Many-to-many relationships need a join table.
    pub fn foreign_key_side(&self) -> Option<Side> {
        match self.ty {
            RelationshipType::OneToOne => Some(Side::Left),
            RelationshipType::OneToMany => Some(Side::Right),
            RelationshipType::ManyToMany => None,
        }
    }

    pub fn involves(&self, model: ModelId) -> bool {
        self.left.model == model || self.right.model == model
    }
}

impl RelationshipType {
    /// Derives the type from the list-ness of both ends.
    pub fn from_list_flags(left_list: bool, right_list: bool) -> Self {
        match (left_list, right_list) {
            (false, false) => Self::OneToOne,
            (true, true) => Self::ManyToMany,
            _ => Self::OneToMany,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneToOne => "OneToOne",
            Self::OneToMany => "OneToMany",
            Self::ManyToMany => "ManyToMany",
        }
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for RelationshipId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "RelationshipId({})", self.0)
    }
}
