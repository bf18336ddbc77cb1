use bson::oid::ObjectId;
use domain::query::{PageInfo, QueryRequest};
use domain::voucher::{StoreVoucherRequest, Voucher};
use std::sync::Arc;
use tracing::debug;

use super::record::{from_document, to_document};
use super::VOUCHER_FIELDS;
use crate::mql::compiler::{compile, parse_object_id};
use crate::mql::native::{predicate_to_document, sort_to_document};
use crate::mql::{page, DocumentStore, FindOptions, StoreError};
use crate::Error;

/// One page of vouchers plus the metadata for the response headers.
#[derive(Debug, Clone, PartialEq)]
pub struct VoucherPage {
    pub vouchers: Vec<Voucher>,
    pub page_info: PageInfo,
}

/// Voucher use cases on top of a document store.
#[derive(Clone)]
pub struct VoucherService {
    store: Arc<dyn DocumentStore>,
}

impl VoucherService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Compile the request, run find and count, and resolve pagination.
    ///
    /// An empty page is returned as `Ok` with no vouchers. `find` and
    /// `count` run concurrently, so the total may disagree with the page
    /// under concurrent writes.
    #[tracing::instrument(skip_all)]
    pub async fn find_by_filter(&self, request: &QueryRequest) -> Result<VoucherPage, Error> {
        let query = compile(request, &VOUCHER_FIELDS)?;

        debug!(
            filter = %predicate_to_document(&query.predicate),
            sort = ?query.sort.as_ref().map(sort_to_document),
            offset = query.offset,
            limit = query.limit,
            "executing voucher query"
        );

        let options = FindOptions {
            sort: query.sort.clone(),
            skip: query.offset,
            limit: Some(query.limit),
        };
        let (docs, total_count) = futures::try_join!(
            self.store.find(&query.predicate, &options),
            self.store.count(&query.predicate),
        )?;

        let vouchers = docs
            .into_iter()
            .map(from_document)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(VoucherPage {
            vouchers,
            page_info: page::resolve(query.page, query.limit, total_count),
        })
    }

    #[tracing::instrument(skip_all)]
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Voucher>, Error> {
        let id = parse_object_id(id)?;
        match self.store.find_by_id(id).await? {
            Some(doc) => Ok(Some(from_document(doc)?)),
            None => Ok(None),
        }
    }

    /// Validate, insert and read back a new voucher.
    #[tracing::instrument(skip_all)]
    pub async fn store(&self, request: StoreVoucherRequest) -> Result<Voucher, Error> {
        request.validate().map_err(Error::Validation)?;

        let voucher = request.into_voucher(ObjectId::new());
        let id = self.store.insert(to_document(&voucher)?).await?;

        let doc = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| StoreError::Other(format!("inserted voucher {id} not found")))?;
        debug!(%id, "voucher stored");
        Ok(from_document(doc)?)
    }
}
