use super::*;

const TITLE_ID: &str = "fa564e0f-0c70-4ab9-b863-0177e6ddd247";

#[test]
fn name_reference_renders_name_attribute() {
    let field = FieldRef::name("Title").unwrap();

    assert_eq!(field.to_markup(), "<FieldRef Name='Title' />");
    assert!(field.is_ascending());
}

#[test]
fn descending_reference_emits_ascending_false() {
    let field = FieldRef::name("Modified").unwrap().descending();

    assert_eq!(
        field.to_markup(),
        "<FieldRef Name='Modified' Ascending='FALSE' />"
    );
    assert_eq!(
        field.with_ascending(true).to_markup(),
        "<FieldRef Name='Modified' />"
    );
}

#[test]
fn id_reference_renders_braced_lowercase_guid() {
    let field = FieldRef::parse_id(&TITLE_ID.to_uppercase()).unwrap();

    assert_eq!(
        field.to_markup(),
        format!("<FieldRef ID='{{{TITLE_ID}}}' />")
    );
    assert_eq!(
        FieldRef::parse_id(&format!("{{{TITLE_ID}}}")).unwrap(),
        field
    );
}

#[test]
fn malformed_identifier_is_rejected() {
    assert_eq!(
        FieldRef::parse_id("{not-a-guid}"),
        Err(QueryError::InvalidIdentifier {
            value: "{not-a-guid}".to_string(),
        })
    );
}

#[test]
fn empty_name_and_nil_id_are_missing_references() {
    assert_eq!(FieldRef::name(""), Err(QueryError::MissingFieldReference));
    assert_eq!(
        FieldRef::id(Uuid::nil()),
        Err(QueryError::MissingFieldReference)
    );
    assert_eq!(
        "".into_field_ref(),
        Err(QueryError::MissingFieldReference)
    );
}

#[test]
fn conversions_produce_matching_references() {
    let id = Uuid::parse_str(TITLE_ID).unwrap();

    assert_eq!(
        "Title".into_field_ref().unwrap(),
        FieldRef::name("Title").unwrap()
    );
    assert_eq!(
        String::from("Title").into_field_ref().unwrap(),
        FieldRef::name("Title").unwrap()
    );
    assert_eq!(id.into_field_ref().unwrap(), FieldRef::id(id).unwrap());
    assert_eq!(
        *id.into_field_ref().unwrap().ident(),
        FieldIdent::Id(id)
    );
}
