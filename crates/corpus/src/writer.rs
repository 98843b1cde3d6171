//! Persisting a [`Catalog`] as a fuzz corpus directory and checking one against it.
//!
//! Layout is one file per seed, named exactly after the seed with no extension,
//! containing the raw payload and nothing else.

use std::{
    collections::BTreeSet,
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, info, warn};

use crate::{
    catalog::Catalog,
    error::{CorpusError, CorpusResult},
};

/// Options for [`write_corpus`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions {
    /// Remove regular files in the directory that are not in the catalog.
    pub clean: bool,
}

/// Summary of a [`write_corpus`] run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReport {
    /// Seed files written.
    pub written: usize,
    /// Payload bytes written.
    pub bytes: u64,
    /// Stale files removed because of [`WriteOptions::clean`].
    pub removed: usize,
}

/// Outcome of comparing a corpus directory with a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyReport {
    /// Seeds whose file exists with identical contents.
    pub matched: usize,
    /// Seeds with no file.
    pub missing: Vec<String>,
    /// Seeds whose file contents differ.
    pub mismatched: Vec<String>,
    /// Files in the directory that no seed accounts for.
    pub unexpected: Vec<String>,
}

impl VerifyReport {
    /// True when the directory holds exactly the catalog.
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.mismatched.is_empty() && self.unexpected.is_empty()
    }
}

/// Writes every seed in `catalog` into `dir`, creating it if needed.
///
/// Existing files with a seed's name are overwritten. I/O failures abort the
/// run and are returned with the offending path.
pub fn write_corpus(
    catalog: &Catalog,
    dir: &Path,
    opts: WriteOptions,
) -> CorpusResult<WriteReport> {
    fs::create_dir_all(dir).map_err(|e| CorpusError::io(dir, e))?;

    let mut report = WriteReport::default();

    if opts.clean {
        for path in stray_files(catalog, dir)? {
            warn!(path = %path.display(), "removing stale corpus file");
            fs::remove_file(&path).map_err(|e| CorpusError::io(&path, e))?;
            report.removed += 1;
        }
    }

    for seed in catalog.iter() {
        let path = dir.join(seed.name());
        fs::write(&path, seed.payload()).map_err(|e| CorpusError::io(&path, e))?;
        debug!(name = seed.name(), len = seed.payload().len(), "wrote seed");
        report.written += 1;
        report.bytes += seed.payload().len() as u64;
    }

    info!(
        dir = %dir.display(),
        written = report.written,
        bytes = report.bytes,
        removed = report.removed,
        "corpus written"
    );

    Ok(report)
}

/// Compares the files in `dir` with `catalog` byte for byte.
pub fn verify_corpus(catalog: &Catalog, dir: &Path) -> CorpusResult<VerifyReport> {
    let mut report = VerifyReport::default();

    for seed in catalog.iter() {
        let path = dir.join(seed.name());
        match fs::read(&path) {
            Ok(contents) if contents == seed.payload() => report.matched += 1,
            Ok(_) => report.mismatched.push(seed.name().to_owned()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                report.missing.push(seed.name().to_owned())
            }
            Err(e) => return Err(CorpusError::io(path, e)),
        }
    }

    if dir.is_dir() {
        report.unexpected = stray_files(catalog, dir)?
            .iter()
            .map(|path| display_name(path))
            .collect();
    }

    if !report.is_clean() {
        warn!(
            dir = %dir.display(),
            missing = report.missing.len(),
            mismatched = report.mismatched.len(),
            unexpected = report.unexpected.len(),
            "corpus differs from catalog"
        );
    }

    Ok(report)
}

/// Paths of regular files in `dir` that are not seeds in `catalog`, sorted.
///
/// Paths come straight from the directory listing, so names that are not valid
/// UTF-8 can still be removed.
fn stray_files(catalog: &Catalog, dir: &Path) -> CorpusResult<Vec<PathBuf>> {
    let mut stray = BTreeSet::new();
    let entries = fs::read_dir(dir).map_err(|e| CorpusError::io(dir, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| CorpusError::io(dir, e))?;
        let path: PathBuf = entry.path();
        let file_type = entry.file_type().map_err(|e| CorpusError::io(&path, e))?;
        if !file_type.is_file() {
            continue;
        }

        let known = entry
            .file_name()
            .to_str()
            .is_some_and(|name| catalog.contains(name));
        if !known {
            stray.insert(path);
        }
    }

    Ok(stray.into_iter().collect())
}

/// File name of `path` for reporting, with invalid UTF-8 replaced.
fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}
