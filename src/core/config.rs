use std::path::PathBuf;

use config::Config;
use serde::Deserialize;

use crate::core::error::ConfigError;

#[derive(Debug, Deserialize, Clone)]
pub(crate) struct Args {
    pub(crate) api_base: String,
    pub(crate) log_level: String,
    pub(crate) session_dir: PathBuf,
    pub(crate) enforce_roles: bool,
}

impl Args {
    pub(crate) fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("log_level", "info")?
            .set_default("session_dir", default_session_dir())?
            .set_default("enforce_roles", false)?
            .add_source(config::Environment::with_prefix("STORERATE").try_parsing(true))
            .build()?;

        Ok(config.try_deserialize::<Args>()?)
    }
}

fn default_session_dir() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());

    PathBuf::from(home)
        .join(".storerate")
        .to_string_lossy()
        .into_owned()
}
