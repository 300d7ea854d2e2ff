/// A set of fields whose combined values must be unique across all records
/// of a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    pub name: String,

    pub description: String,

    /// Message reported to the user when the constraint is violated
    pub error_message: String,

    /// Names of the constrained fields, in declaration order
    fields: Vec<String>,
}

impl Constraint {
    pub fn unique(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            error_message: String::new(),
            fields: vec![],
        }
    }

    pub fn field(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.fields.contains(&name) {
            self.fields.push(name);
        }
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn error_message(mut self, error_message: impl Into<String>) -> Self {
        self.error_message = error_message.into();
        self
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field == name)
    }
}
