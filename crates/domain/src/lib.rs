pub mod query;
pub mod response;
pub mod setting;
pub mod voucher;
