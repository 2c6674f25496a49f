use super::*;
use crate::{builder::*, field::FieldRef};

fn name(field: &str) -> FieldRef {
    FieldRef::name(field).unwrap()
}

#[test]
fn scope_is_absent_until_set() {
    let query = CamlQuery::new().filter(eq("F", 3).unwrap());

    assert_eq!(query.executor_options().view_attributes, None);
}

#[test]
fn files_only_scope_renders_view_attribute() {
    let options = CamlQuery::new()
        .filter(eq("F", 3).unwrap())
        .scope(Scope::FilesOnly)
        .executor_options();

    assert_eq!(
        options.view_attributes.as_deref(),
        Some("Scope=\"FilesOnly\"")
    );
}

#[test]
fn every_scope_renders_its_variant_name() {
    for (scope, expected) in [
        (Scope::Recursive, "Scope=\"Recursive\""),
        (Scope::RecursiveAll, "Scope=\"RecursiveAll\""),
        (Scope::FilesOnly, "Scope=\"FilesOnly\""),
    ] {
        let options = QueryOptions {
            scope: Some(scope),
            ..QueryOptions::default()
        };
        assert_eq!(options.view_attributes().as_deref(), Some(expected));
    }
}

#[test]
fn predicate_and_order_render_where_then_order_by() {
    let query = CamlQuery::new()
        .filter(is_null("F").unwrap())
        .order_by(OrderBy::new([name("F")]));

    assert_eq!(
        query.query_fragment(),
        "<Where><IsNull><FieldRef Name='F' /></IsNull></Where><OrderBy><FieldRef Name='F' /></OrderBy>"
    );
}

#[test]
fn predicate_only_renders_where() {
    let query = CamlQuery::new().filter(is_not_null("H").unwrap());

    assert_eq!(
        query.query_fragment(),
        "<Where><IsNotNull><FieldRef Name='H' /></IsNotNull></Where>"
    );
}

#[test]
fn order_only_renders_order_by_alone() {
    let query = CamlQuery::new().order_by(OrderBy::single("Title", false).unwrap());

    assert_eq!(
        query.query_fragment(),
        "<OrderBy><FieldRef Name='Title' Ascending='FALSE' /></OrderBy>"
    );
}

#[test]
fn nothing_set_renders_empty_fragment() {
    assert_eq!(CamlQuery::new().query_fragment(), "");
    assert_eq!(CamlQuery::new().executor_options().query, "");
}

#[test]
fn vacuous_predicate_is_treated_as_absent() {
    let query = CamlQuery::new()
        .filter(and([]))
        .order_by(OrderBy::new([name("ID")]));

    assert_eq!(
        query.query_fragment(),
        "<OrderBy><FieldRef Name='ID' /></OrderBy>"
    );

    let empty_in = in_list("F", Vec::<i32>::new()).unwrap();
    assert_eq!(CamlQuery::new().filter(empty_in).query_fragment(), "");
}

#[test]
fn repeated_filter_ands_predicates() {
    let query = CamlQuery::new()
        .filter(eq("A", 1).unwrap())
        .filter(eq("B", 2).unwrap());

    assert_eq!(
        query.query_fragment(),
        "<Where><And><Eq><FieldRef Name='A' /><Value Type='Integer'>1</Value></Eq><Eq><FieldRef Name='B' /><Value Type='Integer'>2</Value></Eq></And></Where>"
    );
}

#[test]
fn executor_options_carry_all_scalars() {
    let options = CamlQuery::new()
        .filter(eq("Done", false).unwrap())
        .view_fields(ViewFields::fields(["Title", "Done"]).unwrap())
        .view_fields_only(true)
        .row_limit(50)
        .executor_options();

    assert_eq!(
        options,
        ExecutorOptions {
            query: "<Where><Eq><FieldRef Name='Done' /><Value Type='Boolean'>0</Value></Eq></Where>"
                .to_string(),
            view_fields: Some("<FieldRef Name='Title' /><FieldRef Name='Done' />".to_string()),
            view_attributes: None,
            view_fields_only: true,
            row_limit: 50,
        }
    );
}

#[test]
fn view_fields_absent_unless_set() {
    let options = CamlQuery::new()
        .order_by(OrderBy::new([name("ID")]))
        .executor_options();

    assert_eq!(options.view_fields, None);
    assert!(!options.view_fields_only);
    assert_eq!(options.row_limit, 0);
}

#[test]
fn options_deserialize_with_defaults() {
    let options: QueryOptions = serde_json::from_str(r#"{"scope":"RecursiveAll"}"#).unwrap();

    assert_eq!(
        options,
        QueryOptions {
            scope: Some(Scope::RecursiveAll),
            view_fields_only: false,
            row_limit: 0,
        }
    );

    let query = CamlQuery::new()
        .filter(is_null("F").unwrap())
        .with_options(options);
    assert_eq!(query.options().scope, Some(Scope::RecursiveAll));
    assert_eq!(
        query.executor_options().view_attributes.as_deref(),
        Some("Scope=\"RecursiveAll\"")
    );
}

#[test]
fn executor_options_serialize_absent_values_as_null() {
    let options = CamlQuery::new()
        .filter(is_null("F").unwrap())
        .row_limit(10)
        .executor_options();
    let json = serde_json::to_value(&options).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "query": "<Where><IsNull><FieldRef Name='F' /></IsNull></Where>",
            "view_fields": null,
            "view_attributes": null,
            "view_fields_only": false,
            "row_limit": 10,
        })
    );
}
