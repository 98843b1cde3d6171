//! `verify` subcommand: checks a corpus directory against a fresh build.

use bqfuzz_corpus::{build_catalog, verify_corpus};

use crate::{
    args::{CmdContext, SubcVerify},
    util::{resolve_output_dir, resolve_rng_seed},
};

/// Executes the `verify` subcommand.
///
/// Fails when any seed is missing or differs, or when the directory holds
/// files the catalog does not account for.
pub(crate) fn exec(cmd: SubcVerify, ctx: &CmdContext) -> anyhow::Result<()> {
    let rng_seed = resolve_rng_seed(cmd.rng_seed, &ctx.config)?;
    let dir = resolve_output_dir(cmd.output.as_ref(), &ctx.config);

    let catalog = build_catalog(rng_seed)?;
    let report = verify_corpus(&catalog, &dir)?;

    for (label, names) in [
        ("missing", &report.missing),
        ("mismatched", &report.mismatched),
        ("unexpected", &report.unexpected),
    ] {
        for name in names {
            println!("  {label:<10} {name}");
        }
    }

    if !report.is_clean() {
        anyhow::bail!(
            "corpus at {} differs from catalog (seed {rng_seed}): {} missing, {} mismatched, {} unexpected",
            dir.display(),
            report.missing.len(),
            report.mismatched.len(),
            report.unexpected.len()
        );
    }

    println!(
        "Verified {} seed files in {}",
        report.matched,
        dir.display()
    );
    Ok(())
}
