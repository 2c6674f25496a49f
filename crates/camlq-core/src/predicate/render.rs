use super::ast::{
    CheckPredicate, ComparePredicate, InPredicate, LogicalOp, LogicalPredicate, Predicate,
    ValueFlags,
};
use crate::value::escape;
use camlq_primitives::ValueType;
use std::fmt;

impl Predicate {
    /// Render this node as a markup fragment. May be empty for vacuous
    /// membership tests and for combinators with no non-empty operands.
    #[must_use]
    pub fn to_markup(&self) -> String {
        self.to_string()
    }

    /// Whether this node renders as the empty string, decided structurally.
    #[must_use]
    pub fn is_vacuous(&self) -> bool {
        match self {
            Self::Compare(_) | Self::Check(_) => false,
            Self::In(membership) => membership.values.is_empty(),
            Self::Logical(logical) => logical.children.iter().all(Self::is_vacuous),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compare(cmp) => fmt::Display::fmt(cmp, f),
            Self::Check(check) => fmt::Display::fmt(check, f),
            Self::In(membership) => fmt::Display::fmt(membership, f),
            Self::Logical(logical) => fmt::Display::fmt(logical, f),
        }
    }
}

impl fmt::Display for ComparePredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.op.tag();

        write!(f, "<{tag}>{}", self.field)?;
        write_value(f, self.value_type, &self.value, self.flags)?;
        write!(f, "</{tag}>")
    }
}

impl fmt::Display for CheckPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.op.tag();

        write!(f, "<{tag}>{}</{tag}>", self.field)
    }
}

impl fmt::Display for InPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.values.is_empty() {
            return Ok(());
        }

        write!(f, "<In>{}<Values>", self.field)?;
        for value in &self.values {
            write_value(f, self.value_type, value, self.flags)?;
        }

        f.write_str("</Values></In>")
    }
}

impl fmt::Display for LogicalPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operands = self.children.iter().map(ToString::to_string);

        f.write_str(&flatten_logical(self.op, operands))
    }
}

/// Combine already-rendered operands under a binary-only logical tag.
///
/// Empty operands are dropped. No operands render as nothing, a single
/// operand renders as itself, and longer lists nest to the left:
/// `[a, b, c]` becomes `<Op><Op>ab</Op>c</Op>`.
#[must_use]
pub fn flatten_logical(op: LogicalOp, operands: impl IntoIterator<Item = String>) -> String {
    let operands: Vec<String> = operands
        .into_iter()
        .filter(|markup| !markup.is_empty())
        .collect();

    let Some((first, rest)) = operands.split_first() else {
        return String::new();
    };

    let tag = op.tag();
    let body_len: usize = operands.iter().map(String::len).sum();
    let mut out = String::with_capacity(body_len + rest.len() * (2 * tag.len() + 5));

    // all opening tags up front, one closing tag after each later operand
    for _ in rest {
        out.push('<');
        out.push_str(tag);
        out.push('>');
    }
    out.push_str(first);
    for operand in rest {
        out.push_str(operand);
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }

    out
}

fn write_value(
    f: &mut fmt::Formatter<'_>,
    value_type: ValueType,
    value: &str,
    flags: ValueFlags,
) -> fmt::Result {
    write!(f, "<Value Type='{value_type}'")?;
    if flags.lookup_id {
        f.write_str(" LookupId='TRUE'")?;
    }
    if flags.include_time_value {
        f.write_str(" IncludeTimeValue='TRUE'")?;
    }

    write!(f, ">{}</Value>", escape(value, value_type))
}
