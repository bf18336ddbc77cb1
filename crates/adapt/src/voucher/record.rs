//! Mapping between API vouchers and stored documents.
//!
//! The API names the primary key `id`; the store keeps it under `_id`.

use domain::voucher::Voucher;
use serde_json::Value as Json;

use crate::mql::{StoreError, ID_FIELD, ID_KEY};

pub fn to_document(voucher: &Voucher) -> Result<Json, StoreError> {
    let mut doc = serde_json::to_value(voucher)?;
    if let Some(obj) = doc.as_object_mut() {
        if let Some(id) = obj.remove(ID_FIELD) {
            obj.insert(ID_KEY.to_string(), id);
        }
    }
    Ok(doc)
}

pub fn from_document(mut doc: Json) -> Result<Voucher, StoreError> {
    if let Some(obj) = doc.as_object_mut() {
        if let Some(id) = obj.remove(ID_KEY) {
            obj.insert(ID_FIELD.to_string(), id);
        }
    }
    Ok(serde_json::from_value(doc)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::oid::ObjectId;
    use serde_json::json;

    fn voucher() -> Voucher {
        Voucher {
            id: ObjectId::parse_str("60f1b0b3d1f3f3b3b3b3b3b3").unwrap(),
            brand_code: "TSEL".into(),
            sku: "TSEL10".into(),
            sku_name: "Telkomsel 10K".into(),
            nominal: 10_000,
            distributor_price: 10_250,
            product_status: "active".into(),
            order_destination: "phone".into(),
            stock: 5,
            vendor: "acme".into(),
        }
    }

    #[test]
    fn id_is_stored_under_primary_key() {
        let doc = to_document(&voucher()).unwrap();
        assert_eq!(doc["_id"], json!("60f1b0b3d1f3f3b3b3b3b3b3"));
        assert!(doc.get("id").is_none());

        assert_eq!(from_document(doc).unwrap(), voucher());
    }

    #[test]
    fn malformed_document_is_a_decode_error() {
        let err = from_document(json!({ "_id": "60f1b0b3d1f3f3b3b3b3b3b3" })).unwrap_err();
        assert!(matches!(err, StoreError::Decode(_)));
    }
}
