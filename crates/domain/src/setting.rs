use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_CONCURRENCY: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Address the HTTP listener binds to.
    pub host: String,

    pub port: u16,

    /// Upper bound on in-flight HTTP requests.
    pub max_concurrency: usize,

    /// Optional JSON array of vouchers inserted at startup.
    #[serde(default)]
    pub seed: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            seed: None,
        }
    }
}
