//! Command line tool for generating the binary quantization fuzz corpus.
//!
//! Builds the deterministic seed catalog, writes it as one file per seed, and
//! can check an existing corpus directory against a fresh build.

mod args;
mod cmd;
mod config;
mod util;

use bqfuzz_common::logging::{self, FileLoggingConfig, LoggerConfig};

use args::resolve_context_and_subcommand;
use util::exec_subc;

/// Service name used in log output.
const SERVICE_NAME: &str = "bqfuzz-corpus";

fn main() {
    let args: args::Args = argh::from_env();
    let inner = || -> anyhow::Result<()> {
        init_logging(&args)?;
        let (ctx, subc) = resolve_context_and_subcommand(args)?;
        exec_subc(subc, &ctx)?;
        Ok(())
    };
    if let Err(e) = inner() {
        eprintln!("ERROR\n{e:?}");
        std::process::exit(1);
    }
}

fn init_logging(args: &args::Args) -> anyhow::Result<()> {
    logging::init(logger_config(args))?;
    Ok(())
}

/// Builds the logger config; `--log-json` applies to the console and the file.
fn logger_config(args: &args::Args) -> LoggerConfig {
    let mut lconfig = LoggerConfig::new(SERVICE_NAME.to_string()).with_json_logging(args.log_json);
    if let Some(dir) = &args.log_dir {
        lconfig = lconfig.with_file_logging(
            FileLoggingConfig::new(dir.clone(), SERVICE_NAME.to_string())
                .with_json_format(args.log_json),
        );
    }
    lconfig
}
