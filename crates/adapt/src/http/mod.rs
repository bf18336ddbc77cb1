pub mod app;
pub mod error;
pub mod handler;

pub use app::{build_app, AppState};
pub use error::HttpError;
