//! `list` subcommand: prints the catalog without writing it.

use bqfuzz_corpus::{build_catalog, Category, Seed};
use serde::Serialize;

use crate::{
    args::{CmdContext, SubcList},
    util::resolve_rng_seed,
};

/// One row of `list` output.
#[derive(Debug, Serialize)]
struct SeedSummary<'a> {
    name: &'a str,
    category: Category,
    len: usize,
    well_formed: bool,
}

impl<'a> From<&'a Seed> for SeedSummary<'a> {
    fn from(seed: &'a Seed) -> Self {
        Self {
            name: seed.name(),
            category: seed.category(),
            len: seed.payload().len(),
            well_formed: seed.has_expected_len(),
        }
    }
}

/// Executes the `list` subcommand.
pub(crate) fn exec(cmd: SubcList, ctx: &CmdContext) -> anyhow::Result<()> {
    let rng_seed = resolve_rng_seed(cmd.rng_seed, &ctx.config)?;
    let catalog = build_catalog(rng_seed)?;
    let rows: Vec<SeedSummary<'_>> = catalog.iter().map(SeedSummary::from).collect();

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for row in &rows {
        let marker = if row.well_formed { "" } else { "  (malformed length)" };
        println!(
            "{:<24} {:<12} {:>5}{marker}",
            row.name,
            row.category.label(),
            row.len
        );
    }

    Ok(())
}
