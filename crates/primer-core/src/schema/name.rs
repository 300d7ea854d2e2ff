use heck::{ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};

/// A model or field name split into lower-case words.
///
/// `Name::new("UserStats")`, `Name::new("user_stats")` and
/// `Name::new("user-stats")` all produce the parts `["user", "stats"]`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name {
    pub parts: Vec<String>,
}

impl Name {
    pub fn new(src: &str) -> Self {
        let snake = src.to_snake_case();
        let parts = snake
            .split('_')
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect();
        Self { parts }
    }

    pub fn camel_case(&self) -> String {
        self.snake_case().to_lower_camel_case()
    }

    pub fn upper_camel_case(&self) -> String {
        self.snake_case().to_upper_camel_case()
    }

    pub fn snake_case(&self) -> String {
        self.parts.join("_")
    }

    pub fn upper_snake_case(&self) -> String {
        self.snake_case().to_shouty_snake_case()
    }
}

#[cfg(test)]
mod tests {
    use super::Name;

    #[test]
    fn splits_on_case_and_separators() {
        assert_eq!(Name::new("UserStats").parts, ["user", "stats"]);
        assert_eq!(Name::new("user-stats").parts, ["user", "stats"]);
        assert_eq!(Name::new("user stats").parts, ["user", "stats"]);
    }

    #[test]
    fn casing() {
        let name = Name::new("TestEntity");
        assert_eq!(name.camel_case(), "testEntity");
        assert_eq!(name.upper_camel_case(), "TestEntity");
        assert_eq!(name.snake_case(), "test_entity");
        assert_eq!(name.upper_snake_case(), "TEST_ENTITY");
    }
}
