// crates/edge/src/settings.rs

use config::{Config, Environment, File};
use domain::setting::{Settings, DEFAULT_HOST, DEFAULT_MAX_CONCURRENCY, DEFAULT_PORT};
use std::path::{Path, PathBuf};

use crate::Error;

/// Prefix of environment variables read into `Settings` (`VOUCHER_PORT`, ...).
pub const ENV_PREFIX: &str = "VOUCHER";

/// Values given on the command line. They win over every other layer.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub seed: Option<PathBuf>,
}

/// Layer defaults, the optional TOML file, `VOUCHER_*` variables and
/// command-line overrides, in that order.
#[tracing::instrument(skip_all)]
pub fn load_settings(file: Option<&Path>, overrides: &Overrides) -> Result<Settings, Error> {
    let mut builder = Config::builder()
        .set_default("host", DEFAULT_HOST)?
        .set_default("port", i64::from(DEFAULT_PORT))?
        .set_default("max_concurrency", DEFAULT_MAX_CONCURRENCY as i64)?;

    if let Some(path) = file {
        builder = builder.add_source(File::from(path).required(true));
    }

    let settings = builder
        .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
        .set_override_option("host", overrides.host.clone())?
        .set_override_option("port", overrides.port.map(i64::from))?
        .set_override_option(
            "seed",
            overrides.seed.as_ref().map(|p| p.display().to_string()),
        )?
        .build()?
        .try_deserialize::<Settings>()?;

    Ok(settings)
}
