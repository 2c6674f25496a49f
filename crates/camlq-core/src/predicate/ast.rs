use crate::field::FieldRef;
use camlq_primitives::ValueType;
use std::ops::{BitAnd, BitOr};

///
/// Predicate AST
///
/// Closed grammar of `<Where>` contents. Nodes own their children and are
/// never mutated after construction; every consuming method returns a new
/// value.
///

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CompareOp {
    Eq,
    Neq,
    Lt,
    Gt,
    Leq,
    Geq,
    Contains,
    BeginsWith,
    Includes,
    NotIncludes,
}

impl CompareOp {
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Eq => "Eq",
            Self::Neq => "Neq",
            Self::Lt => "Lt",
            Self::Gt => "Gt",
            Self::Leq => "Leq",
            Self::Geq => "Geq",
            Self::Contains => "Contains",
            Self::BeginsWith => "BeginsWith",
            Self::Includes => "Includes",
            Self::NotIncludes => "NotIncludes",
        }
    }
}

///
/// CheckOp
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CheckOp {
    IsNull,
    IsNotNull,
}

impl CheckOp {
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::IsNull => "IsNull",
            Self::IsNotNull => "IsNotNull",
        }
    }
}

///
/// LogicalOp
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::And => "And",
            Self::Or => "Or",
        }
    }
}

///
/// ValueFlags
///
/// Optional `<Value>` attributes, emitted in declaration order.
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ValueFlags {
    pub lookup_id: bool,
    pub include_time_value: bool,
}

///
/// ComparePredicate
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ComparePredicate {
    pub op: CompareOp,
    pub field: FieldRef,
    pub value_type: ValueType,
    pub value: String,
    pub flags: ValueFlags,
}

impl ComparePredicate {
    #[must_use]
    pub fn new(
        op: CompareOp,
        field: FieldRef,
        value_type: ValueType,
        value: impl Into<String>,
    ) -> Self {
        Self {
            op,
            field,
            value_type,
            value: value.into(),
            flags: ValueFlags::default(),
        }
    }
}

///
/// CheckPredicate
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CheckPredicate {
    pub op: CheckOp,
    pub field: FieldRef,
}

///
/// InPredicate
///
/// Set membership. An empty value list is vacuous and renders as nothing.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InPredicate {
    pub field: FieldRef,
    pub value_type: ValueType,
    pub values: Vec<String>,
    pub flags: ValueFlags,
}

///
/// LogicalPredicate
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LogicalPredicate {
    pub op: LogicalOp,
    pub children: Vec<Predicate>,
}

impl LogicalPredicate {
    #[must_use]
    pub fn new(op: LogicalOp, children: impl IntoIterator<Item = Predicate>) -> Self {
        Self {
            op,
            children: children.into_iter().collect(),
        }
    }

    /// Append one operand.
    #[must_use]
    pub fn push(mut self, child: Predicate) -> Self {
        self.children.push(child);
        self
    }

    /// Append one operand only when `condition` holds.
    #[must_use]
    pub fn push_if(self, child: Predicate, condition: bool) -> Self {
        if condition { self.push(child) } else { self }
    }
}

///
/// Predicate
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Predicate {
    Compare(ComparePredicate),
    Check(CheckPredicate),
    In(InPredicate),
    Logical(LogicalPredicate),
}

impl Predicate {
    #[must_use]
    pub fn and(children: impl IntoIterator<Item = Self>) -> Self {
        Self::Logical(LogicalPredicate::new(LogicalOp::And, children))
    }

    #[must_use]
    pub fn or(children: impl IntoIterator<Item = Self>) -> Self {
        Self::Logical(LogicalPredicate::new(LogicalOp::Or, children))
    }

    /// Mark every value-carrying node in this subtree with `LookupId='TRUE'`.
    #[must_use]
    pub fn with_lookup_id(self) -> Self {
        self.map_flags(&|flags| ValueFlags {
            lookup_id: true,
            ..flags
        })
    }

    /// Mark every value-carrying node in this subtree with
    /// `IncludeTimeValue='TRUE'`.
    #[must_use]
    pub fn with_time_value(self) -> Self {
        self.map_flags(&|flags| ValueFlags {
            include_time_value: true,
            ..flags
        })
    }

    fn map_flags(self, f: &impl Fn(ValueFlags) -> ValueFlags) -> Self {
        match self {
            Self::Compare(mut cmp) => {
                cmp.flags = f(cmp.flags);
                Self::Compare(cmp)
            }
            Self::In(mut membership) => {
                membership.flags = f(membership.flags);
                Self::In(membership)
            }
            Self::Check(check) => Self::Check(check),
            Self::Logical(LogicalPredicate { op, children }) => Self::Logical(LogicalPredicate {
                op,
                children: children.into_iter().map(|child| child.map_flags(f)).collect(),
            }),
        }
    }
}

impl From<ComparePredicate> for Predicate {
    fn from(cmp: ComparePredicate) -> Self {
        Self::Compare(cmp)
    }
}

impl From<CheckPredicate> for Predicate {
    fn from(check: CheckPredicate) -> Self {
        Self::Check(check)
    }
}

impl From<InPredicate> for Predicate {
    fn from(membership: InPredicate) -> Self {
        Self::In(membership)
    }
}

impl From<LogicalPredicate> for Predicate {
    fn from(logical: LogicalPredicate) -> Self {
        Self::Logical(logical)
    }
}

impl BitAnd for Predicate {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::and([self, rhs])
    }
}

impl BitAnd for &Predicate {
    type Output = Predicate;

    fn bitand(self, rhs: Self) -> Self::Output {
        Predicate::and([self.clone(), rhs.clone()])
    }
}

impl BitOr for Predicate {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::or([self, rhs])
    }
}

impl BitOr for &Predicate {
    type Output = Predicate;

    fn bitor(self, rhs: Self) -> Self::Output {
        Predicate::or([self.clone(), rhs.clone()])
    }
}
