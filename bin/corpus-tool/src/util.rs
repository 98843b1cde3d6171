//! Utility functions for the `bqfuzz-corpus` binary.
//!
//! Setting resolution and subcommand dispatch.

use std::{env, path::PathBuf};

use crate::{
    args::{CmdContext, Subcommand},
    cmd,
    config::ToolConfig,
};

/// Corpus directory environment variable.
pub(crate) const CORPUS_DIR_ENVVAR: &str = "BQFUZZ_CORPUS_DIR";

/// PRNG seed environment variable.
pub(crate) const RNG_SEED_ENVVAR: &str = "BQFUZZ_RNG_SEED";

/// Resolves the corpus directory.
///
/// Priority:
///
/// 1. Command-line argument (if provided)
/// 2. `BQFUZZ_CORPUS_DIR` environment variable (if set)
/// 3. Config file / default
pub(crate) fn resolve_output_dir(arg: Option<&PathBuf>, config: &ToolConfig) -> PathBuf {
    pick_output_dir(arg, env::var_os(CORPUS_DIR_ENVVAR).map(PathBuf::from), config)
}

/// Resolves the PRNG seed, with the same priority as [`resolve_output_dir`].
pub(crate) fn resolve_rng_seed(arg: Option<u64>, config: &ToolConfig) -> anyhow::Result<u64> {
    pick_rng_seed(arg, env::var(RNG_SEED_ENVVAR).ok(), config)
}

fn pick_output_dir(
    arg: Option<&PathBuf>,
    env_val: Option<PathBuf>,
    config: &ToolConfig,
) -> PathBuf {
    arg.cloned()
        .or(env_val)
        .unwrap_or_else(|| config.output_dir.clone())
}

fn pick_rng_seed(
    arg: Option<u64>,
    env_val: Option<String>,
    config: &ToolConfig,
) -> anyhow::Result<u64> {
    if let Some(seed) = arg {
        return Ok(seed);
    }

    if let Some(raw) = env_val {
        return raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid {RNG_SEED_ENVVAR} value {raw:?}: {e}"));
    }

    Ok(config.rng_seed)
}

/// Executes a subcommand.
pub(crate) fn exec_subc(command: Subcommand, ctx: &CmdContext) -> anyhow::Result<()> {
    match command {
        Subcommand::Generate(subc) => cmd::generate::exec(subc, ctx),
        Subcommand::List(subc) => cmd::list::exec(subc, ctx),
        Subcommand::Verify(subc) => cmd::verify::exec(subc, ctx),
    }
}
