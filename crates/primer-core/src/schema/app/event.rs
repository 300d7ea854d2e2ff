use super::Field;
use indexmap::IndexMap;

/// A business event, optionally tied to the model it is about.
#[derive(Debug, Clone)]
pub struct Event {
    pub name: String,

    /// Stable identifier used on the wire
    pub code: String,

    pub description: String,

    /// Name of the business model the event relates to
    pub model: Option<String>,

    fields: IndexMap<String, Field>,
}

impl Event {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            description: String::new(),
            model: None,
            fields: IndexMap::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.add_field(field);
        self
    }

    /// Adds a field, replacing any field with the same name.
    pub fn add_field(&mut self, field: Field) {
        self.fields.insert(field.name.clone(), field);
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> impl ExactSizeIterator<Item = &Field> + '_ {
        self.fields.values()
    }

    pub fn mandatory_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields().filter(|field| field.mandatory)
    }
}
