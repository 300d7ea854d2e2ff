pub mod app;

pub mod db;

mod infer;
pub use infer::{infer_relationships, Inference};

mod name;
pub use name::Name;

mod relational;
pub use relational::{
    generate_foreign_key_field, generate_identifier_field, generate_relational_fields,
    generate_timestamp_fields,
};

mod resolve;
pub use resolve::{DefaultResolver, TypeNames, TypeResolver};

use crate::{RelationalConfig, Result};
use app::Bundle;

/// Runs relationship inference followed by relational field generation.
///
/// This is the full derivation pass the renderer expects: once it returns
/// `Ok`, every reference field carries a relation, every model has an
/// identifier, and every foreign key and join table is recorded.
pub fn derive(bundle: &mut Bundle, config: &RelationalConfig) -> Result<()> {
    infer_relationships(bundle)?;
    generate_relational_fields(bundle, config)
}
