pub mod record;
pub mod service;

pub use service::{VoucherPage, VoucherService};

use crate::mql::{FieldKind, FieldTable, ID_FIELD, ID_KEY};

/// Query-able voucher fields. Query strings may use camelCase names; they
/// are snake_cased before lookup.
pub static VOUCHER_FIELDS: FieldTable = FieldTable::new(&[
    (ID_FIELD, ID_KEY, FieldKind::Identifier),
    ("brand_code", "brand_code", FieldKind::Scalar),
    ("sku", "sku", FieldKind::Scalar),
    ("sku_name", "sku_name", FieldKind::Scalar),
    ("nominal", "nominal", FieldKind::Scalar),
    ("distributor_price", "distributor_price", FieldKind::Scalar),
    ("product_status", "product_status", FieldKind::Scalar),
    ("order_destination", "order_destination", FieldKind::Scalar),
    ("stock", "stock", FieldKind::Scalar),
    ("vendor", "vendor", FieldKind::Scalar),
]);
