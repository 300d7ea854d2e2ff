use super::{Field, NativeType};
use crate::{Error, Result};
use indexmap::IndexMap;

/// A fixed set of records shipped with the application, such as a list of
/// countries or user roles.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub name: String,
    pub description: String,
    fields: IndexMap<String, Field>,
    elements: Vec<DatasetElement>,
}

/// One record of a dataset: field name to raw value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetElement {
    values: IndexMap<String, String>,
}

impl Dataset {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            fields: IndexMap::new(),
            elements: vec![],
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Adds a field. Datasets only hold single-valued native fields.
    pub fn add_field(&mut self, field: Field) -> Result<()> {
        if field.native_type().is_none() {
            return Err(Error::invariant_violation(format!(
                "{} has an unsupported field type: {}; dataset `{}` only supports native fields",
                field.name, field.ty, self.name
            )));
        }

        if field.list {
            return Err(Error::invariant_violation(format!(
                "{} has an unsupported field type: dataset `{}` does not support list fields",
                field.name, self.name
            )));
        }

        self.fields.insert(field.name.clone(), field);
        Ok(())
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> impl ExactSizeIterator<Item = &Field> + '_ {
        self.fields.values()
    }

    pub fn elements(&self) -> &[DatasetElement] {
        &self.elements
    }

    /// Adds an element after checking that it provides a compatible value
    /// for every field and nothing else.
    pub fn add_element(&mut self, element: DatasetElement) -> Result<()> {
        let mut missing: Vec<&str> = self.fields.keys().map(String::as_str).collect();
        let mut unknown = vec![];
        let mut invalid = vec![];

        for (name, value) in &element.values {
            match self.fields.get(name) {
                Some(field) => {
                    missing.retain(|candidate| candidate != name);

                    let compatible = field
                        .native_type()
                        .is_some_and(|native| is_valid_value(native, value));

                    if !compatible {
                        invalid.push(format!("{name} ({value} is not a valid {})", field.ty));
                    }
                }
                None => unknown.push(name.as_str()),
            }
        }

        let prefix = format!("Invalid element for dataset {}", self.name);

        if !missing.is_empty() {
            let mut message = format!("{prefix}. Missing fields: {}", missing.join(","));
            if !unknown.is_empty() {
                message.push_str(&format!(". Unknown fields: {}", unknown.join(",")));
            }
            return Err(Error::validation(message));
        }

        if !unknown.is_empty() {
            return Err(Error::validation(format!(
                "{prefix}. Unknown fields: {}",
                unknown.join(",")
            )));
        }

        if !invalid.is_empty() {
            return Err(Error::validation(format!(
                "{prefix}. The following values are not compatible with their associated field: {}",
                invalid.join(",")
            )));
        }

        self.elements.push(element);
        Ok(())
    }
}

impl DatasetElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Checks that a raw value can be stored in a field of the given type.
pub(crate) fn is_valid_value(ty: NativeType, value: &str) -> bool {
    use NativeType::*;

    match ty {
        Uuid => uuid::Uuid::parse_str(value).is_ok_and(|uuid| uuid.get_version_num() == 4),
        String | Text | Password | RandomString => true,
        Email => is_email(value),
        Url => url::Url::parse(value).is_ok(),
        Phone => is_e164_phone(value),
        Date | Time | DateTime => is_temporal(value),
        Bool | Boolean => matches!(
            value.to_ascii_lowercase().as_str(),
            "true" | "false" | "1" | "0" | "yes" | "no" | "on" | "off"
        ),
        Int | Integer | Id | Long => value.trim().parse::<i64>().is_ok(),
        Float | Double | Decimal => value.trim().parse::<f64>().is_ok_and(f64::is_finite),
        Price => is_price(value),
    }
}

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

/// E.164: a `+`, then up to 15 digits, the first of which is not zero.
fn is_e164_phone(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('+') else {
        return false;
    };

    (2..=15).contains(&digits.len())
        && digits.chars().all(|c| c.is_ascii_digit())
        && !digits.starts_with('0')
}

fn is_temporal(value: &str) -> bool {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

    DateTime::parse_from_rfc3339(value).is_ok()
        || NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").is_ok()
        || NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").is_ok()
        || NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
        || NaiveTime::parse_from_str(value, "%H:%M:%S").is_ok()
        || NaiveTime::parse_from_str(value, "%H:%M").is_ok()
}

/// Plain numbers or US-formatted currency amounts such as `$1,234.50`.
fn is_price(value: &str) -> bool {
    let amount = value.trim();
    let amount = amount.strip_prefix('$').unwrap_or(amount);
    let amount: std::string::String = amount.chars().filter(|c| *c != ',').collect();
    !amount.is_empty() && amount.parse::<f64>().is_ok_and(f64::is_finite)
}
