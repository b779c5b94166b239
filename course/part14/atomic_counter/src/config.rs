use config::{ConfigError, Environment, File, Source};
use serde::Deserialize;

use crate::{ITERATIONS, START, STEP};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub start: u32,
    pub step: u32,
    pub iterations: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            start: START,
            step: STEP,
            iterations: ITERATIONS,
        }
    }
}

impl RunConfig {
    /// Reads `atomic_counter.{toml,json,..}` if present, then `ATOMIC_COUNTER_*` variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("atomic_counter")
    }

    pub fn load_from(name: &str) -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(File::with_name(name).required(false))
            .add_source(Environment::with_prefix("ATOMIC_COUNTER").try_parsing(true))
            .build()?;
        config.try_deserialize()
    }

    pub fn from_source<S>(source: S) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        let config = config::Config::builder().add_source(source).build()?;
        config.try_deserialize()
    }
}
