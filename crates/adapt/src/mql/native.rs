//! Translation of the typed predicate into MongoDB-style BSON documents.
//!
//! This is the only place that knows the store's query dialect.

use super::ast::{CmpOp, Predicate, Sort, Value, ValueList};
use bson::{Bson, Document};

fn value_to_bson(value: &Value) -> Bson {
    match value {
        Value::Int(n) => Bson::Int64(*n),
        Value::Str(s) => Bson::String(s.clone()),
        Value::Id(id) => Bson::ObjectId(*id),
    }
}

fn list_to_bson(list: &ValueList) -> Bson {
    Bson::Array(list.iter().map(|v| value_to_bson(&v)).collect())
}

fn operand_to_bson(op: &CmpOp) -> Bson {
    match op {
        CmpOp::Eq(v) | CmpOp::Ne(v) | CmpOp::Gte(v) | CmpOp::Lte(v) | CmpOp::Gt(v) | CmpOp::Lt(v) => {
            value_to_bson(v)
        }
        CmpOp::In(list) => list_to_bson(list),
    }
}

/// `{ field: { "$op": value, ... }, ... }`
pub fn predicate_to_document(predicate: &Predicate) -> Document {
    let mut out = Document::new();
    for (field, fp) in predicate.iter() {
        let mut ops = Document::new();
        for op in fp.ops() {
            ops.insert(op.operator(), operand_to_bson(op));
        }
        out.insert(field, ops);
    }
    out
}

/// `{ field: 1 | -1 }`
pub fn sort_to_document(sort: &Sort) -> Document {
    let mut out = Document::new();
    out.insert(sort.field.clone(), i32::from(sort.direction));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::{doc, oid::ObjectId};

    #[test]
    fn operators_become_dollar_keys() {
        let mut p = Predicate::new();
        p.insert("field1", CmpOp::Eq(Value::Str("value1".into())));
        p.insert("field3", CmpOp::Gte(Value::Int(10)));
        p.insert("field3", CmpOp::Lt(Value::Int(40)));
        p.insert("field7", CmpOp::In(ValueList::Str(vec!["a".into(), "b".into()])));
        p.insert("field8", CmpOp::In(ValueList::Int(vec![50, 60])));

        let d = predicate_to_document(&p);
        assert_eq!(
            d,
            doc! {
                "field1": { "$eq": "value1" },
                "field3": { "$gte": 10_i64, "$lt": 40_i64 },
                "field7": { "$in": ["a", "b"] },
                "field8": { "$in": [50_i64, 60_i64] },
            }
        );
    }

    #[test]
    fn identifiers_become_object_ids() {
        let id = ObjectId::parse_str("60f1b0b3d1f3f3b3b3b3b3b3").unwrap();
        let mut p = Predicate::new();
        p.insert("_id", CmpOp::Ne(Value::Id(id)));

        assert_eq!(predicate_to_document(&p), doc! { "_id": { "$ne": id } });
    }

    #[test]
    fn empty_predicate_is_empty_document() {
        assert!(predicate_to_document(&Predicate::new()).is_empty());
    }

    #[test]
    fn sort_document() {
        let s = Sort {
            field: "sku".into(),
            direction: -1,
        };
        assert_eq!(sort_to_document(&s), doc! { "sku": -1 });
    }
}
