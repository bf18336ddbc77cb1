use async_trait::async_trait;
use bson::oid::ObjectId;
use parking_lot::RwLock;
use serde_json::Value as Json;
use std::cmp::Ordering;

use crate::mql::ast::{FindOptions, Predicate, Sort};
use crate::mql::eval::{eval_predicate, field_value};
use crate::mql::fields::ID_KEY;
use crate::mql::store::DocumentStore;
use crate::mql::StoreError;

// ─────────────────────────────────────────────────────────────────────────────
// In-memory DocumentStore implementation
// ─────────────────────────────────────────────────────────────────────────────

/// Simple in-memory store of JSON documents.
///
/// Used by the server binary and by tests. Every call takes the lock
/// separately, so a `find` and a following `count` may see different data.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    docs: RwLock<Vec<Json>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.docs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.read().is_empty()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    #[tracing::instrument(skip_all)]
    async fn find(&self, predicate: &Predicate, options: &FindOptions) -> Result<Vec<Json>, StoreError> {
        let mut docs: Vec<Json> = self
            .docs
            .read()
            .iter()
            .filter(|doc| eval_predicate(predicate, doc))
            .cloned()
            .collect();

        if let Some(sort) = &options.sort {
            apply_sort(&mut docs, sort);
        }
        Ok(apply_skip_limit(docs, options.skip, options.limit))
    }

    #[tracing::instrument(skip_all)]
    async fn count(&self, predicate: &Predicate) -> Result<u64, StoreError> {
        let n = self
            .docs
            .read()
            .iter()
            .filter(|doc| eval_predicate(predicate, doc))
            .count();
        Ok(n as u64)
    }

    #[tracing::instrument(skip_all)]
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Json>, StoreError> {
        let hex = id.to_hex();
        Ok(self
            .docs
            .read()
            .iter()
            .find(|doc| doc.get(ID_KEY).and_then(Json::as_str) == Some(hex.as_str()))
            .cloned())
    }

    #[tracing::instrument(skip_all)]
    async fn insert(&self, mut doc: Json) -> Result<ObjectId, StoreError> {
        let obj = doc
            .as_object_mut()
            .ok_or_else(|| StoreError::Other("document must be a JSON object".into()))?;

        let id = match obj.get(ID_KEY).and_then(Json::as_str) {
            Some(hex) => ObjectId::parse_str(hex)
                .map_err(|e| StoreError::Other(format!("invalid {ID_KEY}: {e}")))?,
            None => ObjectId::new(),
        };
        obj.insert(ID_KEY.to_string(), Json::String(id.to_hex()));

        let mut docs = self.docs.write();
        if docs
            .iter()
            .any(|d| d.get(ID_KEY).and_then(Json::as_str) == Some(id.to_hex().as_str()))
        {
            return Err(StoreError::Other(format!("duplicate {ID_KEY} {id}")));
        }
        docs.push(doc);
        Ok(id)
    }
}

/// Sort in place by one field; `direction < 0` reverses.
fn apply_sort(docs: &mut [Json], sort: &Sort) {
    if docs.len() <= 1 {
        return;
    }

    docs.sort_by(|a, b| {
        let ord = compare_field(a, b, &sort.field);
        if sort.direction >= 0 {
            ord
        } else {
            ord.reverse()
        }
    });
}

/// Compare a single field across two docs. Missing sorts before present.
fn compare_field(a: &Json, b: &Json, field: &str) -> Ordering {
    use serde_json::Value as J;

    match (field_value(a, field), field_value(b, field)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(J::Number(na)), Some(J::Number(nb))) => match (na.as_i64(), nb.as_i64()) {
            (Some(ia), Some(ib)) => ia.cmp(&ib),
            _ => {
                let fa = na.as_f64().unwrap_or(f64::NAN);
                let fb = nb.as_f64().unwrap_or(f64::NAN);
                fa.partial_cmp(&fb).unwrap_or(Ordering::Equal)
            }
        },
        (Some(J::String(sa)), Some(J::String(sb))) => sa.cmp(sb),
        (Some(J::Bool(ba)), Some(J::Bool(bb))) => ba.cmp(bb),
        // Fallback: debug representation compare.
        (Some(va), Some(vb)) => format!("{:?}", va).cmp(&format!("{:?}", vb)),
    }
}

fn apply_skip_limit(docs: Vec<Json>, skip: u64, limit: Option<u64>) -> Vec<Json> {
    let skip = usize::try_from(skip).unwrap_or(usize::MAX);
    let limit = limit
        .map(|l| usize::try_from(l).unwrap_or(usize::MAX))
        .unwrap_or(usize::MAX);
    docs.into_iter().skip(skip).take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mql::ast::{CmpOp, Value};
    use serde_json::json;

    async fn store_with(docs: Vec<Json>) -> InMemoryDocumentStore {
        let store = InMemoryDocumentStore::new();
        for d in docs {
            store.insert(d).await.expect("insert");
        }
        store
    }

    fn stock_docs() -> Vec<Json> {
        vec![
            json!({ "sku": "a", "stock": 5 }),
            json!({ "sku": "b", "stock": 1 }),
            json!({ "sku": "c", "stock": 9 }),
            json!({ "sku": "d" }),
        ]
    }

    fn skus(docs: &[Json]) -> Vec<&str> {
        docs.iter().map(|d| d["sku"].as_str().unwrap()).collect()
    }

    // ─────────────────────────────────────────────────────────────
    // insert / find_by_id
    // ─────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn insert_assigns_id_and_find_by_id_returns_doc() {
        let store = InMemoryDocumentStore::new();
        assert!(store.is_empty());

        let id = store.insert(json!({ "sku": "a" })).await.unwrap();
        assert_eq!(store.len(), 1);

        let doc = store.find_by_id(id).await.unwrap().expect("doc present");
        assert_eq!(doc["_id"], json!(id.to_hex()));
        assert_eq!(doc["sku"], json!("a"));

        assert!(store.find_by_id(ObjectId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn insert_keeps_given_id_and_rejects_duplicates() {
        let store = InMemoryDocumentStore::new();
        let hex = "60f1b0b3d1f3f3b3b3b3b3b3";

        let id = store.insert(json!({ "_id": hex })).await.unwrap();
        assert_eq!(id.to_hex(), hex);

        let err = store.insert(json!({ "_id": hex })).await.unwrap_err();
        assert!(matches!(err, StoreError::Other(_)));
    }

    #[tokio::test]
    async fn insert_rejects_non_objects() {
        let store = InMemoryDocumentStore::new();
        assert!(store.insert(json!([1, 2])).await.is_err());
    }

    // ─────────────────────────────────────────────────────────────
    // find / count
    // ─────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn find_and_count_use_the_predicate() {
        let store = store_with(stock_docs()).await;
        let mut p = Predicate::new();
        p.insert("stock", CmpOp::Gte(Value::Int(5)));

        let found = store.find(&p, &FindOptions::default()).await.unwrap();
        assert_eq!(skus(&found), vec!["a", "c"]);
        assert_eq!(store.count(&p).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn find_sorts_then_skips_and_limits() {
        let store = store_with(stock_docs()).await;
        let asc = FindOptions {
            sort: Some(Sort {
                field: "stock".into(),
                direction: 1,
            }),
            skip: 1,
            limit: Some(2),
        };
        let found = store.find(&Predicate::new(), &asc).await.unwrap();
        // missing stock sorts first: d, b, a, c
        assert_eq!(skus(&found), vec!["b", "a"]);

        let desc = FindOptions {
            sort: Some(Sort {
                field: "stock".into(),
                direction: -1,
            }),
            skip: 0,
            limit: Some(10),
        };
        let found = store.find(&Predicate::new(), &desc).await.unwrap();
        assert_eq!(skus(&found), vec!["c", "a", "b", "d"]);
    }

    #[tokio::test]
    async fn skip_past_the_end_is_empty() {
        let store = store_with(stock_docs()).await;
        let opts = FindOptions {
            skip: 10,
            limit: Some(10),
            ..FindOptions::default()
        };
        assert!(store.find(&Predicate::new(), &opts).await.unwrap().is_empty());
        assert_eq!(store.count(&Predicate::new()).await.unwrap(), 4);
    }

    #[test]
    fn compare_field_mismatched_types_falls_back() {
        let ord = compare_field(&json!({ "v": 1 }), &json!({ "v": "1" }), "v");
        assert!(matches!(
            ord,
            Ordering::Less | Ordering::Equal | Ordering::Greater
        ));
    }
}
