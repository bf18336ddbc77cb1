pub mod cli;
pub mod seed;
pub mod settings;

mod error;

pub use error::Error;
