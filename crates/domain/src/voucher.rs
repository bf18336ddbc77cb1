use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A stored voucher as returned to API callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voucher {
    #[serde(with = "oid_hex")]
    pub id: ObjectId,
    pub brand_code: String,
    pub sku: String,
    pub sku_name: String,
    pub nominal: i64,
    pub distributor_price: i64,
    pub product_status: String,
    pub order_destination: String,
    pub stock: i64,
    pub vendor: String,
}

/// Body of `POST /api/vouchers`.
///
/// Every field is required: strings must be non-empty and integers
/// non-zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreVoucherRequest {
    pub brand_code: String,
    pub sku: String,
    pub sku_name: String,
    pub nominal: i64,
    pub distributor_price: i64,
    pub product_status: String,
    pub order_destination: String,
    pub stock: i64,
    pub vendor: String,
}

impl StoreVoucherRequest {
    /// Returns one message per missing field, in declaration order.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let text = [
            ("brand_code", &self.brand_code),
            ("sku", &self.sku),
            ("sku_name", &self.sku_name),
            ("product_status", &self.product_status),
            ("order_destination", &self.order_destination),
            ("vendor", &self.vendor),
        ];
        let numbers = [
            ("nominal", self.nominal),
            ("distributor_price", self.distributor_price),
            ("stock", self.stock),
        ];

        let mut errors: Vec<String> = text
            .iter()
            .filter(|(_, v)| v.trim().is_empty())
            .map(|(name, _)| format!("{name} is required"))
            .collect();
        errors.extend(
            numbers
                .iter()
                .filter(|(_, v)| *v == 0)
                .map(|(name, _)| format!("{name} is required")),
        );

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn into_voucher(self, id: ObjectId) -> Voucher {
        Voucher {
            id,
            brand_code: self.brand_code,
            sku: self.sku,
            sku_name: self.sku_name,
            nominal: self.nominal,
            distributor_price: self.distributor_price,
            product_status: self.product_status,
            order_destination: self.order_destination,
            stock: self.stock,
            vendor: self.vendor,
        }
    }
}

/// Serde adapter that writes an `ObjectId` as its 24-char hex string.
pub mod oid_hex {
    use bson::oid::ObjectId;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(id: &ObjectId, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&id.to_hex())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ObjectId, D::Error> {
        let s = String::deserialize(deserializer)?;
        ObjectId::parse_str(&s).map_err(de::Error::custom)
    }
}
