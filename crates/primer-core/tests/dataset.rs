use primer_core::schema::app::*;
use primer_core::Bundle;

fn countries() -> Dataset {
    let mut dataset = Dataset::new("Country").description("ISO countries");
    dataset
        .add_field(Field::new("code", "string").identifier(true))
        .unwrap();
    dataset.add_field(Field::new("name", "string")).unwrap();
    dataset.add_field(Field::new("website", "url")).unwrap();
    dataset
}

fn canada() -> DatasetElement {
    DatasetElement::new()
        .value("code", "CA")
        .value("name", "Canada")
        .value("website", "https://www.canada.ca")
}

#[test]
fn valid_element_is_added() {
    let mut dataset = countries();
    dataset.add_element(canada()).unwrap();

    assert_eq!(dataset.elements().len(), 1);
    assert_eq!(dataset.elements()[0].get("name"), Some("Canada"));
}

#[test]
fn missing_and_unknown_fields() {
    let mut dataset = countries();

    let err = dataset
        .add_element(DatasetElement::new().value("code", "FR").value("capital", "Paris"))
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(
        err.to_string(),
        "validation failed: Invalid element for dataset Country. Missing fields: name,website. Unknown fields: capital"
    );

    let err = dataset
        .add_element(canada().value("capital", "Ottawa"))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "validation failed: Invalid element for dataset Country. Unknown fields: capital"
    );

    assert!(dataset.elements().is_empty());
}

#[test]
fn incompatible_values() {
    let mut dataset = countries();

    let err = dataset
        .add_element(canada().value("website", "not a url"))
        .unwrap_err();
    assert!(err.is_validation());
    assert!(
        err.to_string()
            .ends_with("not compatible with their associated field: website (not a url is not a valid url)"),
        "{err}"
    );
}

#[test]
fn value_types() {
    let mut dataset = Dataset::new("Sample");
    for (name, ty) in [
        ("key", "uuid"),
        ("email", "email"),
        ("phone", "phone"),
        ("day", "date"),
        ("at", "datetime"),
        ("active", "boolean"),
        ("count", "integer"),
        ("ratio", "double"),
        ("price", "price"),
    ] {
        dataset.add_field(Field::new(name, ty)).unwrap();
    }

    let valid = DatasetElement::new()
        .value("key", "0b3f8c5e-8d3a-4c1e-9f6b-2a7d9e4c1b05")
        .value("email", "jane@example.com")
        .value("phone", "+15145551234")
        .value("day", "2024-02-29")
        .value("at", "2024-02-29T10:15:00Z")
        .value("active", "yes")
        .value("count", "42")
        .value("ratio", "0.5")
        .value("price", "$1,234.50");
    dataset.add_element(valid.clone()).unwrap();

    for (name, value) in [
        ("key", "not-a-uuid"),
        ("email", "jane.example.com"),
        ("phone", "514-555-1234"),
        ("day", "2024-02-30"),
        ("at", "yesterday"),
        ("active", "maybe"),
        ("count", "4.2"),
        ("ratio", "half"),
        ("price", "$$1"),
    ] {
        let err = dataset
            .add_element(valid.clone().value(name, value))
            .unwrap_err();
        assert!(err.to_string().contains(name), "{name}: {err}");
    }

    assert_eq!(dataset.elements().len(), 1);
}

#[test]
fn non_finite_numbers_are_rejected() {
    let mut dataset = Dataset::new("Rates");
    dataset.add_field(Field::new("ratio", "float")).unwrap();
    dataset.add_field(Field::new("price", "price")).unwrap();

    for (name, value) in [
        ("ratio", "NaN"),
        ("ratio", "inf"),
        ("ratio", "-infinity"),
        ("price", "NaN"),
        ("price", "$inf"),
    ] {
        let element = DatasetElement::new()
            .value("ratio", "1.5")
            .value("price", "9.99")
            .value(name, value);
        let err = dataset.add_element(element).unwrap_err();
        assert!(err.is_validation(), "{name}={value}: {err}");
    }

    assert!(dataset.elements().is_empty());
}

#[test]
fn only_native_scalar_fields() {
    let mut dataset = Dataset::new("Role");

    let err = dataset.add_field(Field::new("owner", "User")).unwrap_err();
    assert!(err.is_invariant_violation());

    let err = dataset
        .add_field(Field::new("tags", "string").list(true))
        .unwrap_err();
    assert!(err.is_invariant_violation());

    assert_eq!(dataset.fields().len(), 0);
}

#[test]
fn dataset_fields_classify_as_datasets() {
    let mut bundle = Bundle::new("Primer", "Geo");
    bundle.add_dataset(countries());
    bundle
        .add_model(
            Model::new("Address")
                .with_field(Field::new("country", "Country"))
                .unwrap(),
        )
        .unwrap();

    let address = bundle.model_by_name("Address").unwrap();
    let country = address.field("country").unwrap();
    assert_eq!(bundle.classify(country), FieldType::Dataset("Country".into()));
    assert_eq!(bundle.dataset("Country").unwrap().description, "ISO countries");
}
