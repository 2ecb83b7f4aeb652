//! Bundled asset directory
//!
//! One variant ships its images next to the flasher instead of on the
//! asset store. The directory also always provides `boot_app0.bin`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::AssetKind;
use crate::error::{Error, MissingAsset, Result};

/// Check that every one of `kinds` exists in `dir`.
///
/// All missing files are reported together so the directory can be
/// fixed in one pass.
pub fn check(dir: &Path, kinds: &[AssetKind]) -> Result<()> {
    let missing: Vec<MissingAsset> = kinds
        .iter()
        .map(|&kind| MissingAsset {
            kind,
            path: dir.join(kind.file_name()),
        })
        .filter(|m| !m.path.is_file())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::MissingLocalAsset { missing })
    }
}

/// Copy `kind` from `dir` into `work_dir` under its fixed name
pub fn copy(dir: &Path, kind: AssetKind, work_dir: &Path) -> Result<PathBuf> {
    let src = dir.join(kind.file_name());
    if !src.is_file() {
        return Err(Error::MissingLocalAsset {
            missing: vec![MissingAsset { kind, path: src }],
        });
    }

    let dest = work_dir.join(kind.file_name());
    if same_file(&src, &dest) {
        log::debug!("{} already in place", dest.display());
        return Ok(dest);
    }

    fs::copy(&src, &dest).map_err(|e| Error::io(&dest, e))?;
    log::debug!("Copied {} to {}", src.display(), dest.display());
    Ok(dest)
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
