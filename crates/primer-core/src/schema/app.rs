//! Application-level model: bundles, business models, fields and the
//! relationship graph derived from them.

mod bundle;
pub use bundle::Bundle;

mod constraint;
pub use constraint::Constraint;

mod dataset;
pub use dataset::{Dataset, DatasetElement};

mod event;
pub use event::Event;

mod field;
pub use field::{Field, FieldId, FieldType, NativeType};

mod model;
pub use model::{Model, ModelId};
pub(crate) use model::is_usable_identifier;

mod relation;
pub use relation::{
    ForeignKey, JoinTable, Relationship, RelationshipId, RelationshipSide, RelationshipType, Side,
    SideId,
};

mod state_machine;
pub use state_machine::{State, StateMachine, Transition};
