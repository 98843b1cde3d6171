//! Command line arguments for the `bqfuzz-corpus` binary.

use std::path::PathBuf;

use argh::FromArgs;

use crate::config::ToolConfig;

/// Args.
#[derive(FromArgs)]
#[argh(description = "generates the binary quantization fuzz corpus")]
pub(crate) struct Args {
    #[argh(option, description = "path to a TOML config file", short = 'c')]
    pub(crate) config: Option<PathBuf>,

    #[argh(switch, description = "emit logs as JSON")]
    pub(crate) log_json: bool,

    #[argh(option, description = "also write logs into this directory")]
    pub(crate) log_dir: Option<PathBuf>,

    #[argh(subcommand)]
    pub(crate) subc: Subcommand,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
pub(crate) enum Subcommand {
    Generate(SubcGenerate),
    List(SubcList),
    Verify(SubcVerify),
}

/// Build the catalog and write it to the corpus directory.
#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "generate",
    description = "generates the seed corpus and writes one file per seed"
)]
pub(crate) struct SubcGenerate {
    #[argh(
        option,
        description = "corpus directory (default fuzz/corpus/fuzz_quantization)",
        short = 'o'
    )]
    pub(crate) output: Option<PathBuf>,

    #[argh(option, description = "PRNG seed (default 42)", short = 's')]
    pub(crate) rng_seed: Option<u64>,

    #[argh(switch, description = "remove files in the directory that are not seeds")]
    pub(crate) clean: bool,

    #[argh(switch, description = "build and check the catalog without writing it")]
    pub(crate) dry_run: bool,
}

/// Print the catalog without touching the filesystem.
#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "list",
    description = "lists every seed with its category and size"
)]
pub(crate) struct SubcList {
    #[argh(option, description = "PRNG seed (default 42)", short = 's')]
    pub(crate) rng_seed: Option<u64>,

    #[argh(switch, description = "print as a JSON array")]
    pub(crate) json: bool,
}

/// Compare an existing corpus directory with a fresh build.
#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "verify",
    description = "checks a corpus directory matches the generated catalog"
)]
pub(crate) struct SubcVerify {
    #[argh(
        option,
        description = "corpus directory (default fuzz/corpus/fuzz_quantization)",
        short = 'o'
    )]
    pub(crate) output: Option<PathBuf>,

    #[argh(option, description = "PRNG seed (default 42)", short = 's')]
    pub(crate) rng_seed: Option<u64>,
}

#[derive(Debug)]
pub(crate) struct CmdContext {
    /// Settings from the config file, or defaults when none was given.
    pub(crate) config: ToolConfig,
}

/// Resolves the command context and subcommand from the parsed command line arguments.
pub(crate) fn resolve_context_and_subcommand(
    args: Args,
) -> anyhow::Result<(CmdContext, Subcommand)> {
    let config = match &args.config {
        Some(path) => ToolConfig::from_file(path)?,
        None => ToolConfig::default(),
    };

    Ok((CmdContext { config }, args.subc))
}

#[cfg(test)]
mod tests {
    use argh::FromArgs;

    use super::*;

    #[test]
    fn test_parse_generate_flags() {
        let args = Args::from_args(
            &["bqfuzz-corpus"],
            &["--log-json", "generate", "-o", "out", "-s", "7", "--clean"],
        )
        .expect("parse");
        assert!(args.log_json);
        assert_eq!(
            args.subc,
            Subcommand::Generate(SubcGenerate {
                output: Some(PathBuf::from("out")),
                rng_seed: Some(7),
                clean: true,
                dry_run: false,
            })
        );
    }

    #[test]
    fn test_parse_list_json() {
        let args = Args::from_args(&["bqfuzz-corpus"], &["list", "--json"]).expect("parse");
        assert_eq!(
            args.subc,
            Subcommand::List(SubcList {
                rng_seed: None,
                json: true,
            })
        );
    }

    #[test]
    fn test_missing_subcommand_is_rejected() {
        assert!(Args::from_args(&["bqfuzz-corpus"], &["--log-json"]).is_err());
    }
}
