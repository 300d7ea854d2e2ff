use primer_core::schema::app::*;

fn order() -> Model {
    Model::new("Order")
        .with_field(Field::new("number", "id").searchable(true))
        .unwrap()
        .with_field(Field::new("reference", "uuid").mandatory(true))
        .unwrap()
        .with_field(Field::new("total", "price").mandatory(true))
        .unwrap()
}

fn identifiers(model: &Model) -> Vec<&str> {
    model
        .fields()
        .filter(|field| field.is_identifier())
        .map(|field| field.name.as_str())
        .collect()
}

#[test]
fn promotion_forces_flags() {
    let mut model = order();
    model.promote_identifier("number").unwrap();

    let number = model.identifier().unwrap();
    assert_eq!(number.name, "number");
    assert!(number.is_mandatory());
    assert!(number.is_managed());
    assert!(number.is_generated());
    assert!(number.is_searchable());
}

#[test]
fn promotion_demotes_and_restores_previous_identifier() {
    let mut model = order();
    model.promote_identifier("number").unwrap();
    model.promote_identifier("reference").unwrap();

    assert_eq!(identifiers(&model), ["reference"]);

    let number = model.field("number").unwrap();
    assert!(!number.is_identifier());
    assert!(!number.is_mandatory());
    assert!(!number.is_managed());
    assert!(!number.is_generated());

    // And back again: `reference` was mandatory before its promotion.
    model.promote_identifier("number").unwrap();
    assert_eq!(identifiers(&model), ["number"]);

    let reference = model.field("reference").unwrap();
    assert!(reference.is_mandatory());
    assert!(!reference.is_managed());
    assert!(!reference.is_generated());
}

#[test]
fn promoting_the_current_identifier_is_a_noop() {
    let mut model = order();
    model.promote_identifier("number").unwrap();
    model.promote_identifier("number").unwrap();
    model.promote_identifier("reference").unwrap();

    // The snapshot taken on first promotion survives.
    assert!(!model.field("number").unwrap().is_managed());
}

#[test]
fn identifier_flag_on_add_promotes() {
    let mut model = order();
    model
        .add_field(Field::new("key", "UUID").identifier(true))
        .unwrap();
    model
        .add_field(Field::new("code", "id").identifier(true))
        .unwrap();

    assert_eq!(identifiers(&model), ["code"]);
    assert!(!model.field("key").unwrap().is_managed());
}

#[test]
fn identifier_must_be_id_or_uuid() {
    let mut model = order();

    let err = model.promote_identifier("total").unwrap_err();
    assert!(err.is_invariant_violation());
    assert!(
        err.to_string()
            .contains("invalid identifier type provided: price"),
        "{err}"
    );

    let err = model
        .add_field(Field::new("slug", "string").identifier(true))
        .unwrap_err();
    assert!(err.is_invariant_violation());
    assert!(model.identifier().is_none());
    assert!(!model.has_field("slug"));
}

#[test]
fn promoting_unknown_field_fails() {
    let mut model = order();
    let err = model.promote_identifier("missing").unwrap_err();
    assert!(err.is_invariant_violation());
}

#[test]
fn replacing_a_field_keeps_its_index() {
    let mut model = order();
    let before = model.field("reference").unwrap().id();

    let after = model
        .add_field(Field::new("reference", "string").mandatory(false))
        .unwrap();

    assert_eq!(before, after);
    assert_eq!(model.fields().len(), 3);
    assert_eq!(model.field("reference").unwrap().ty, "string");
}

#[test]
fn replacing_the_identifier_clears_it() {
    let mut model = order();
    model.promote_identifier("number").unwrap();
    model.add_field(Field::new("number", "int")).unwrap();

    assert!(model.identifier().is_none());
    assert!(identifiers(&model).is_empty());
}

#[test]
fn usable_identifier() {
    let mut model = order();
    assert!(model.usable_identifier().is_none());

    model.promote_identifier("reference").unwrap();
    assert_eq!(model.usable_identifier().unwrap().name, "reference");
}

#[test]
fn field_queries() {
    let model = order();

    let mandatory: Vec<_> = model.mandatory_fields().map(|f| f.name.as_str()).collect();
    assert_eq!(mandatory, ["reference", "total"]);

    let searchable: Vec<_> = model.searchable_fields().map(|f| f.name.as_str()).collect();
    assert_eq!(searchable, ["number"]);

    assert_eq!(model.managed_fields().count(), 0);
    assert!(!model.is_managed_timestamp());
}

#[test]
fn unique_constraints() {
    let mut model = order();
    model
        .add_unique_constraint(
            Constraint::unique("uniqueReference")
                .field("reference")
                .error_message("Reference already in use"),
        )
        .unwrap();
    model
        .add_unique_constraint(Constraint::unique("uniqueTotal").field("number").field("total"))
        .unwrap();

    assert!(model.is_unique_field("reference"));
    assert!(!model.is_unique_field("number"));
    assert!(!model.is_unique_field("total"));
    assert_eq!(model.unique_constraints().len(), 2);

    let err = model
        .add_unique_constraint(Constraint::unique("bad").field("nope"))
        .unwrap_err();
    assert!(err.is_invariant_violation());
    assert!(err.to_string().contains("nope"), "{err}");
    assert_eq!(model.unique_constraints().len(), 2);
}

#[test]
fn timestamp_detection() {
    let model = Model::new("Invoice")
        .with_field(Field::new("createdOn", "datetime").managed(true))
        .unwrap()
        .with_field(Field::new("updatedOn", "datetime"))
        .unwrap();

    assert_eq!(model.created_timestamp_field().unwrap().name, "createdOn");
    assert!(model.updated_timestamp_field().is_none());
    assert!(model.is_managed_timestamp());
}
