use bson::oid::ObjectId;
use std::collections::BTreeMap;
use std::mem;

/// A single coerced operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Str(String),
    Id(ObjectId),
}

/// Operand of `in`. The element type is chosen for the whole list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueList {
    Int(Vec<i64>),
    Str(Vec<String>),
    Id(Vec<ObjectId>),
}

impl ValueList {
    pub fn len(&self) -> usize {
        match self {
            ValueList::Int(v) => v.len(),
            ValueList::Str(v) => v.len(),
            ValueList::Id(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        let items: Box<dyn Iterator<Item = Value> + '_> = match self {
            ValueList::Int(v) => Box::new(v.iter().copied().map(Value::Int)),
            ValueList::Str(v) => Box::new(v.iter().cloned().map(Value::Str)),
            ValueList::Id(v) => Box::new(v.iter().copied().map(Value::Id)),
        };
        items
    }
}

/// Comparison operations on a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CmpOp {
    Eq(Value),
    Ne(Value),
    Gte(Value),
    Lte(Value),
    Gt(Value),
    Lt(Value),
    In(ValueList),
}

impl CmpOp {
    /// Native operator key, e.g. `$gte`.
    pub const fn operator(&self) -> &'static str {
        match self {
            CmpOp::Eq(_) => "$eq",
            CmpOp::Ne(_) => "$ne",
            CmpOp::Gte(_) => "$gte",
            CmpOp::Lte(_) => "$lte",
            CmpOp::Gt(_) => "$gt",
            CmpOp::Lt(_) => "$lt",
            CmpOp::In(_) => "$in",
        }
    }

    fn same_kind(&self, other: &CmpOp) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }
}

/// All operators applied to one field. They are ANDed together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldPredicate {
    ops: Vec<CmpOp>,
}

impl FieldPredicate {
    pub fn ops(&self) -> &[CmpOp] {
        &self.ops
    }

    /// Add an operator. An operator of the same kind already present is
    /// replaced in place (last write wins).
    pub fn set(&mut self, op: CmpOp) {
        match self.ops.iter_mut().find(|existing| existing.same_kind(&op)) {
            Some(existing) => *existing = op,
            None => self.ops.push(op),
        }
    }
}

/// Backend-agnostic "which records match": field key to its operators.
///
/// Keys are already normalized (snake_case, identifier mapped to `_id`).
/// An empty predicate matches everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Predicate {
    fields: BTreeMap<String, FieldPredicate>,
}

impl Predicate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, op: CmpOp) {
        self.fields.entry(field.into()).or_default().set(op);
    }

    pub fn get(&self, field: &str) -> Option<&FieldPredicate> {
        self.fields.get(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldPredicate)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Sort specification: `direction` is 1 (asc) or -1 (desc).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub field: String,
    pub direction: i8,
}

/// Options passed with a find call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FindOptions {
    pub sort: Option<Sort>,
    pub skip: u64,
    pub limit: Option<u64>,
}
