mod error;
pub use error::{Error, IntoError};

pub mod config;
pub use config::{IdentifierType, RelationalConfig};

pub mod schema;
pub use schema::app::Bundle;
pub use schema::{derive, generate_relational_fields, infer_relationships};

/// A Result type alias that uses Primer's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
