use crate::{
    error::QueryError,
    field::IntoFieldRef,
    predicate::{
        CheckOp, CheckPredicate, CompareOp, ComparePredicate, InPredicate, Predicate, ValueFlags,
    },
    value::CamlValue,
};
use camlq_primitives::ValueType;
use std::fmt::Display;

/// Equality against a typed value.
pub fn eq(field: impl IntoFieldRef, value: impl CamlValue) -> Result<Predicate, QueryError> {
    typed(CompareOp::Eq, field, value)
}

/// Equality with an explicit value type.
pub fn eq_as(
    field: impl IntoFieldRef,
    value_type: ValueType,
    value: impl Display,
) -> Result<Predicate, QueryError> {
    compare(CompareOp::Eq, field, value_type, value.to_string())
}

/// Inequality against a typed value.
pub fn neq(field: impl IntoFieldRef, value: impl CamlValue) -> Result<Predicate, QueryError> {
    typed(CompareOp::Neq, field, value)
}

/// Inequality with an explicit value type.
pub fn neq_as(
    field: impl IntoFieldRef,
    value_type: ValueType,
    value: impl Display,
) -> Result<Predicate, QueryError> {
    compare(CompareOp::Neq, field, value_type, value.to_string())
}

pub fn lt(field: impl IntoFieldRef, value: impl CamlValue) -> Result<Predicate, QueryError> {
    typed(CompareOp::Lt, field, value)
}

pub fn lt_as(
    field: impl IntoFieldRef,
    value_type: ValueType,
    value: impl Display,
) -> Result<Predicate, QueryError> {
    compare(CompareOp::Lt, field, value_type, value.to_string())
}

pub fn gt(field: impl IntoFieldRef, value: impl CamlValue) -> Result<Predicate, QueryError> {
    typed(CompareOp::Gt, field, value)
}

pub fn gt_as(
    field: impl IntoFieldRef,
    value_type: ValueType,
    value: impl Display,
) -> Result<Predicate, QueryError> {
    compare(CompareOp::Gt, field, value_type, value.to_string())
}

pub fn leq(field: impl IntoFieldRef, value: impl CamlValue) -> Result<Predicate, QueryError> {
    typed(CompareOp::Leq, field, value)
}

pub fn leq_as(
    field: impl IntoFieldRef,
    value_type: ValueType,
    value: impl Display,
) -> Result<Predicate, QueryError> {
    compare(CompareOp::Leq, field, value_type, value.to_string())
}

pub fn geq(field: impl IntoFieldRef, value: impl CamlValue) -> Result<Predicate, QueryError> {
    typed(CompareOp::Geq, field, value)
}

pub fn geq_as(
    field: impl IntoFieldRef,
    value_type: ValueType,
    value: impl Display,
) -> Result<Predicate, QueryError> {
    compare(CompareOp::Geq, field, value_type, value.to_string())
}

/// Substring match on a text field.
pub fn contains(field: impl IntoFieldRef, value: impl Into<String>) -> Result<Predicate, QueryError> {
    compare(CompareOp::Contains, field, ValueType::Text, value.into())
}

pub fn contains_as(
    field: impl IntoFieldRef,
    value_type: ValueType,
    value: impl Display,
) -> Result<Predicate, QueryError> {
    compare(CompareOp::Contains, field, value_type, value.to_string())
}

/// Prefix match on a text field.
pub fn begins_with(
    field: impl IntoFieldRef,
    value: impl Into<String>,
) -> Result<Predicate, QueryError> {
    compare(CompareOp::BeginsWith, field, ValueType::Text, value.into())
}

pub fn begins_with_as(
    field: impl IntoFieldRef,
    value_type: ValueType,
    value: impl Display,
) -> Result<Predicate, QueryError> {
    compare(CompareOp::BeginsWith, field, value_type, value.to_string())
}

/// Multi-value field contains the given value.
pub fn includes(
    field: impl IntoFieldRef,
    value_type: ValueType,
    value: impl Display,
) -> Result<Predicate, QueryError> {
    compare(CompareOp::Includes, field, value_type, value.to_string())
}

/// Multi-value field does not contain the given value.
pub fn not_includes(
    field: impl IntoFieldRef,
    value_type: ValueType,
    value: impl Display,
) -> Result<Predicate, QueryError> {
    compare(CompareOp::NotIncludes, field, value_type, value.to_string())
}

pub fn is_null(field: impl IntoFieldRef) -> Result<Predicate, QueryError> {
    check(CheckOp::IsNull, field)
}

pub fn is_not_null(field: impl IntoFieldRef) -> Result<Predicate, QueryError> {
    check(CheckOp::IsNotNull, field)
}

/// Membership in a list of typed values. The value type comes from `V`,
/// so an empty list is still well-typed (and renders as nothing).
pub fn in_list<V: CamlValue>(
    field: impl IntoFieldRef,
    values: impl IntoIterator<Item = V>,
) -> Result<Predicate, QueryError> {
    membership(
        field,
        V::VALUE_TYPE,
        values.into_iter().map(|value| value.to_caml_text()),
    )
}

pub fn in_list_as(
    field: impl IntoFieldRef,
    value_type: ValueType,
    values: impl IntoIterator<Item = impl Display>,
) -> Result<Predicate, QueryError> {
    membership(
        field,
        value_type,
        values.into_iter().map(|value| value.to_string()),
    )
}

/// `IsNull(field) OR field = ''` on a text field.
pub fn is_null_or_empty(field: impl IntoFieldRef) -> Result<Predicate, QueryError> {
    is_null_or_empty_as(field, ValueType::Text)
}

pub fn is_null_or_empty_as(
    field: impl IntoFieldRef,
    value_type: ValueType,
) -> Result<Predicate, QueryError> {
    let field = field.into_field_ref()?;

    Ok(Predicate::or([
        is_null(&field)?,
        eq_as(field, value_type, "")?,
    ]))
}

/// Inclusive range: `field >= low AND field <= high`.
pub fn between<V: CamlValue>(
    field: impl IntoFieldRef,
    low: V,
    high: V,
) -> Result<Predicate, QueryError> {
    let field = field.into_field_ref()?;

    Ok(Predicate::and([geq(&field, low)?, leq(field, high)?]))
}

pub fn between_as(
    field: impl IntoFieldRef,
    value_type: ValueType,
    low: impl Display,
    high: impl Display,
) -> Result<Predicate, QueryError> {
    let field = field.into_field_ref()?;

    Ok(Predicate::and([
        geq_as(&field, value_type, low)?,
        leq_as(field, value_type, high)?,
    ]))
}

#[must_use]
pub fn and(children: impl IntoIterator<Item = Predicate>) -> Predicate {
    Predicate::and(children)
}

#[must_use]
pub fn or(children: impl IntoIterator<Item = Predicate>) -> Predicate {
    Predicate::or(children)
}

fn typed<V: CamlValue>(
    op: CompareOp,
    field: impl IntoFieldRef,
    value: V,
) -> Result<Predicate, QueryError> {
    compare(op, field, V::VALUE_TYPE, value.to_caml_text())
}

/// Internal helper to construct comparison predicates.
/// No schema lookup occurs here; the value is stored as given.
fn compare(
    op: CompareOp,
    field: impl IntoFieldRef,
    value_type: ValueType,
    value: String,
) -> Result<Predicate, QueryError> {
    let field = field.into_field_ref()?;

    Ok(ComparePredicate::new(op, field, value_type, value).into())
}

fn check(op: CheckOp, field: impl IntoFieldRef) -> Result<Predicate, QueryError> {
    Ok(CheckPredicate {
        op,
        field: field.into_field_ref()?,
    }
    .into())
}

fn membership(
    field: impl IntoFieldRef,
    value_type: ValueType,
    values: impl Iterator<Item = String>,
) -> Result<Predicate, QueryError> {
    Ok(InPredicate {
        field: field.into_field_ref()?,
        value_type,
        values: values.collect(),
        flags: ValueFlags::default(),
    }
    .into())
}
