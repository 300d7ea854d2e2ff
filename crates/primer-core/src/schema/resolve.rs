use super::app::{Bundle, FieldType, NativeType};
use indexmap::IndexSet;

/// Names a field type can refer to, collected from a bundle before any
/// field is classified.
#[derive(Debug, Clone, Default)]
pub struct TypeNames {
    models: IndexSet<String>,
    datasets: IndexSet<String>,
}

/// Classifies declared field types.
///
/// Inference receives a resolver once and uses it for every field, so
/// callers can plug in their own rules (for example to map aliases onto
/// model names).
pub trait TypeResolver {
    fn resolve(&self, ty: &str, names: &TypeNames) -> FieldType;
}

/// Model names first, matched exactly. Then native tags, matched
/// case-insensitively. Then dataset names.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultResolver;

impl TypeNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collect(bundle: &Bundle) -> Self {
        Self {
            models: bundle.models().map(|model| model.name.clone()).collect(),
            datasets: bundle
                .datasets()
                .map(|dataset| dataset.name.clone())
                .collect(),
        }
    }

    pub fn with_model(mut self, name: impl Into<String>) -> Self {
        self.models.insert(name.into());
        self
    }

    pub fn with_dataset(mut self, name: impl Into<String>) -> Self {
        self.datasets.insert(name.into());
        self
    }

    pub fn is_model(&self, name: &str) -> bool {
        self.models.contains(name)
    }

    pub fn is_dataset(&self, name: &str) -> bool {
        self.datasets.contains(name)
    }
}

impl TypeResolver for DefaultResolver {
    fn resolve(&self, ty: &str, names: &TypeNames) -> FieldType {
        if names.is_model(ty) {
            FieldType::Model(ty.to_string())
        } else if let Some(native) = NativeType::from_name(ty) {
            FieldType::Native(native)
        } else if names.is_dataset(ty) {
            FieldType::Dataset(ty.to_string())
        } else {
            FieldType::Unknown(ty.to_string())
        }
    }
}

impl<T: TypeResolver + ?Sized> TypeResolver for &T {
    fn resolve(&self, ty: &str, names: &TypeNames) -> FieldType {
        (**self).resolve(ty, names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_names_win_over_native_tags() {
        let names = TypeNames::new().with_model("Email").with_dataset("Country");

        assert_eq!(
            DefaultResolver.resolve("Email", &names),
            FieldType::Model("Email".into())
        );
        assert_eq!(
            DefaultResolver.resolve("email", &names),
            FieldType::Native(NativeType::Email)
        );
        assert_eq!(
            DefaultResolver.resolve("Country", &names),
            FieldType::Dataset("Country".into())
        );
        assert_eq!(
            DefaultResolver.resolve("Planet", &names),
            FieldType::Unknown("Planet".into())
        );
    }
}
