//! Configuration for the corpus tool.
//!
//! Loaded from a TOML file when `--config` is given. Every field is optional in
//! the file and falls back to the built-in default. Command-line options and
//! environment variables take precedence, see [`crate::util`].

use std::path::{Path, PathBuf};

use bqfuzz_corpus::{DEFAULT_RNG_SEED, MIN_SEED_COUNT};
use serde::{Deserialize, Serialize};

/// Default corpus directory, relative to the working directory.
const DEFAULT_OUTPUT_DIR: &str = "fuzz/corpus/fuzz_quantization";

/// Corpus tool configuration loaded from TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ToolConfig {
    /// Directory the corpus is written to and verified in.
    #[serde(default = "default_values::output_dir")]
    pub(crate) output_dir: PathBuf,

    /// Seed for the shared PRNG behind the randomized seed families.
    #[serde(default = "default_values::rng_seed")]
    pub(crate) rng_seed: u64,

    /// Fewer seeds than this is reported as a failure.
    ///
    /// Can only raise the bar: values below [`MIN_SEED_COUNT`] are rejected.
    #[serde(default = "default_values::min_seeds")]
    pub(crate) min_seeds: usize,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            output_dir: default_values::output_dir(),
            rng_seed: default_values::rng_seed(),
            min_seeds: default_values::min_seeds(),
        }
    }
}

/// Default value functions for [`serde`].
mod default_values {
    use super::*;

    pub(super) fn output_dir() -> PathBuf {
        DEFAULT_OUTPUT_DIR.into()
    }

    pub(super) fn rng_seed() -> u64 {
        DEFAULT_RNG_SEED
    }

    pub(super) fn min_seeds() -> usize {
        MIN_SEED_COUNT
    }
}

impl ToolConfig {
    /// Loads configuration from a TOML file.
    pub(crate) fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config {path:?}: {e}"))?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the settings keep the corpus adequacy guarantee.
    pub(crate) fn validate(&self) -> anyhow::Result<()> {
        if self.min_seeds < MIN_SEED_COUNT {
            anyhow::bail!(
                "min_seeds = {} is below the required minimum of {MIN_SEED_COUNT}",
                self.min_seeds
            );
        }
        Ok(())
    }
}
