use adapt::voucher::VoucherService;
use domain::voucher::StoreVoucherRequest;
use std::path::Path;
use tracing::debug;

use crate::Error;

/// Insert every voucher of a JSON array file through the service.
///
/// Stops at the first voucher that fails validation or storage and
/// returns how many were stored otherwise.
#[tracing::instrument(skip_all)]
pub async fn load_seed(service: &VoucherService, path: &Path) -> Result<usize, Error> {
    let raw = tokio::fs::read(path).await?;
    let requests: Vec<StoreVoucherRequest> = serde_json::from_slice(&raw)?;

    let count = requests.len();
    for request in requests {
        let voucher = service.store(request).await?;
        debug!(id = %voucher.id, sku = %voucher.sku, "seeded voucher");
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use adapt::mql::InMemoryDocumentStore;
    use domain::query::QueryRequest;
    use serde_json::json;
    use std::fs;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn service() -> VoucherService {
        VoucherService::new(Arc::new(InMemoryDocumentStore::new()))
    }

    fn voucher(sku: &str) -> serde_json::Value {
        json!({
            "brand_code": "XL",
            "sku": sku,
            "sku_name": "XL 10K",
            "nominal": 10000,
            "distributor_price": 10100,
            "product_status": "active",
            "order_destination": "phone",
            "stock": 3,
            "vendor": "acme"
        })
    }

    #[tokio::test]
    async fn seeds_every_voucher() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seed.json");
        fs::write(&path, json!([voucher("XL-1"), voucher("XL-2")]).to_string()).unwrap();

        let service = service();
        assert_eq!(load_seed(&service, &path).await.unwrap(), 2);

        let page = service.find_by_filter(&QueryRequest::default()).await.unwrap();
        assert_eq!(page.page_info.total_count, 2);
    }

    #[tokio::test]
    async fn invalid_voucher_stops_the_seed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seed.json");
        let mut bad = voucher("XL-2");
        bad["stock"] = json!(0);
        fs::write(&path, json!([voucher("XL-1"), bad]).to_string()).unwrap();

        let err = load_seed(&service(), &path).await.unwrap_err();
        assert!(matches!(err, Error::Adapt(adapt::Error::Validation(_))));
    }

    #[tokio::test]
    async fn unreadable_or_malformed_files_fail() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            load_seed(&service(), &missing).await.unwrap_err(),
            Error::Io(_)
        ));

        let malformed = dir.path().join("bad.json");
        fs::write(&malformed, "{ not an array").unwrap();
        assert!(matches!(
            load_seed(&service(), &malformed).await.unwrap_err(),
            Error::Seed(_)
        ));
    }
}
