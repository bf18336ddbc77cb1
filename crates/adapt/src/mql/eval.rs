// crates/adapt/src/mql/eval.rs

use serde_json::Value as Json;
use std::cmp::Ordering;

use crate::mql::ast::{CmpOp, Predicate, Value};

/// Resolve a dotted field path (e.g. "meta.vendor") into a nested JSON value.
///
/// Returns `None` if any segment is missing.
pub fn field_value<'a>(doc: &'a Json, path: &str) -> Option<&'a Json> {
    let mut current = doc;
    for part in path.split('.') {
        current = current.get(part)?;
    }
    Some(current)
}

/// Order a stored JSON value against an operand, when the types are comparable.
///
/// Integers compare with JSON numbers, strings with strings and identifiers
/// with their stored hex form. Anything else is incomparable.
fn compare(actual: &Json, expected: &Value) -> Option<Ordering> {
    match (actual, expected) {
        (Json::Number(a), Value::Int(b)) => match a.as_i64() {
            Some(a) => Some(a.cmp(b)),
            None => a.as_f64()?.partial_cmp(&(*b as f64)),
        },
        (Json::String(a), Value::Str(b)) => Some(a.as_str().cmp(b.as_str())),
        (Json::String(a), Value::Id(b)) => Some(a.to_ascii_lowercase().cmp(&b.to_hex())),
        _ => None,
    }
}

fn equals(actual: Option<&Json>, expected: &Value) -> bool {
    actual
        .and_then(|a| compare(a, expected))
        .is_some_and(Ordering::is_eq)
}

fn ordered(actual: Option<&Json>, expected: &Value, accept: fn(Ordering) -> bool) -> bool {
    actual
        .and_then(|a| compare(a, expected))
        .is_some_and(accept)
}

/// Evaluate a single comparison operator against an optional JSON value.
fn eval_cmp(op: &CmpOp, actual: Option<&Json>) -> bool {
    use CmpOp::*;

    match op {
        // { field: { $eq: value } }
        Eq(expected) => equals(actual, expected),

        // { field: { $ne: value } } also matches a missing field
        Ne(expected) => !equals(actual, expected),

        Gte(expected) => ordered(actual, expected, Ordering::is_ge),
        Lte(expected) => ordered(actual, expected, Ordering::is_le),
        Gt(expected) => ordered(actual, expected, Ordering::is_gt),
        Lt(expected) => ordered(actual, expected, Ordering::is_lt),

        // { field: { $in: [v1, v2, ...] } }
        In(list) => list.iter().any(|v| equals(actual, &v)),
    }
}

/// Evaluate a full predicate against a document. Fields are ANDed.
pub fn eval_predicate(predicate: &Predicate, doc: &Json) -> bool {
    predicate.iter().all(|(path, fp)| {
        let val = field_value(doc, path);
        fp.ops().iter().all(|op| eval_cmp(op, val))
    })
}
