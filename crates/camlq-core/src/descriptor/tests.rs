use super::*;

fn name(field: &str) -> FieldRef {
    FieldRef::name(field).unwrap()
}

#[test]
fn empty_order_by_renders_nothing() {
    assert_eq!(OrderBy::default().to_markup(), "");
    assert_eq!(OrderBy::new([]).to_markup(), "");
}

#[test]
fn order_by_wraps_field_refs_in_priority_order() {
    let order = OrderBy::new([name("Priority").descending(), name("Title")]);

    assert_eq!(
        order.to_markup(),
        "<OrderBy><FieldRef Name='Priority' Ascending='FALSE' /><FieldRef Name='Title' /></OrderBy>"
    );
    assert_eq!(order.len(), 2);
}

#[test]
fn single_and_then_accumulate_keys() {
    let order = OrderBy::single("Modified", false)
        .unwrap()
        .then(name("ID"));

    assert_eq!(
        order.to_markup(),
        "<OrderBy><FieldRef Name='Modified' Ascending='FALSE' /><FieldRef Name='ID' /></OrderBy>"
    );
}

#[test]
fn order_by_fields_rejects_empty_names() {
    assert_eq!(
        OrderBy::fields(["Title", ""]),
        Err(QueryError::MissingFieldReference)
    );
}

#[test]
fn view_fields_have_no_enclosing_tag() {
    let view = ViewFields::fields(["Title", "Author"]).unwrap();

    assert_eq!(
        view.to_markup(),
        "<FieldRef Name='Title' /><FieldRef Name='Author' />"
    );
    assert_eq!(ViewFields::default().to_markup(), "");
}

#[test]
fn descriptors_iterate_their_fields() {
    let view = ViewFields::new([name("A"), name("B")]);
    let names: Vec<_> = view.into_iter().map(|field| field.to_markup()).collect();

    assert_eq!(names, ["<FieldRef Name='A' />", "<FieldRef Name='B' />"]);
}
