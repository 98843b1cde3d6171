//! `generate` subcommand: builds the seed catalog and writes the corpus.

use bqfuzz_corpus::{build_catalog, write_corpus, Catalog, WriteOptions};
use tracing::info;

use crate::{
    args::{CmdContext, SubcGenerate},
    util::{resolve_output_dir, resolve_rng_seed},
};

/// Executes the `generate` subcommand.
///
/// The whole catalog is built and its size checked before anything touches the
/// filesystem, so an undersized corpus never replaces a good one.
pub(crate) fn exec(cmd: SubcGenerate, ctx: &CmdContext) -> anyhow::Result<()> {
    let rng_seed = resolve_rng_seed(cmd.rng_seed, &ctx.config)?;
    let out_dir = resolve_output_dir(cmd.output.as_ref(), &ctx.config);

    info!(rng_seed, dir = %out_dir.display(), "building seed catalog");
    let catalog = build_catalog(rng_seed)?;
    catalog.ensure_min_seeds(ctx.config.min_seeds)?;

    print_summary(&catalog);

    if cmd.dry_run {
        println!("\nDry run: {} seeds built, nothing written", catalog.len());
        return Ok(());
    }

    let report = write_corpus(&catalog, &out_dir, WriteOptions { clean: cmd.clean })?;

    println!(
        "\nGenerated {} seed files ({} bytes) in {}",
        report.written,
        report.bytes,
        out_dir.display()
    );
    if report.removed > 0 {
        println!("Removed {} stale files", report.removed);
    }

    Ok(())
}

fn print_summary(catalog: &Catalog) {
    for (category, count) in catalog.category_counts() {
        println!("  {:<12} {count:>4}", category.label());
    }
    println!("  {:<12} {:>4}", "total", catalog.len());
}
