//! Asset acquisition
//!
//! Turns a [`FlashPlan`] into files in the working directory. Each asset
//! comes from exactly one [`AssetSource`], decided by [`asset_source`]:
//!
//! - a SPIFFS image built from a local project, when one is given and the
//!   plan writes SPIFFS
//! - `boot_app0.bin` from the bundled directory, always
//! - everything else from the bundled directory for bundled profiles,
//!   otherwise downloaded from the profile's URLs
//!
//! Every bundled file is checked before anything is fetched. Acquisition
//! then runs in [`AssetKind::ACQUISITION_ORDER`] and stops at the first
//! error.

pub mod bundled;
mod download;
mod spiffs_build;

pub use download::{Fetch, FetchError, HttpFetcher};
pub use spiffs_build::{find_spiffs_image, ImageBuilder, PioBuilder};

use std::collections::BTreeMap;
use std::fmt;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::catalog::{AssetKind, FirmwareProfile};
use crate::error::{Error, Result};
use crate::layout::FlashPlan;
use crate::progress::{capitalized, Progress};

/// Caller choices that shape planning and acquisition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcquisitionOptions {
    /// Flash a SPIFFS image if the variant allows it
    pub want_spiffs: bool,
    /// Build SPIFFS from this PlatformIO project instead of downloading it
    pub spiffs_project: Option<PathBuf>,
    /// Ignore the selected variant and flash the SOTA Relay build
    pub sota_override: bool,
    /// Copy bundled profiles from the bundled directory
    pub use_bundled_assets: bool,
}

impl Default for AcquisitionOptions {
    fn default() -> Self {
        Self {
            want_spiffs: true,
            spiffs_project: None,
            sota_override: false,
            use_bundled_assets: true,
        }
    }
}

/// Where one asset of a run comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetSource<'a> {
    /// Built from this PlatformIO project
    Build(&'a Path),
    /// Copied from the bundled directory
    Bundled,
    /// Downloaded; `None` when the profile publishes no URL for it
    Download(Option<&'static str>),
}

impl fmt::Display for AssetSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetSource::Build(project) => write!(f, "built from {}", project.display()),
            AssetSource::Bundled => write!(f, "bundled directory"),
            AssetSource::Download(Some(url)) => write!(f, "{}", url),
            AssetSource::Download(None) => write!(f, "-"),
        }
    }
}

/// Decide where `kind` comes from when `plan` runs with `options`.
///
/// A SPIFFS project only counts when the plan writes SPIFFS. boot_app0 is
/// never published online, so it is always bundled.
pub fn asset_source<'a>(
    profile: &FirmwareProfile,
    plan: &FlashPlan,
    options: &'a AcquisitionOptions,
    kind: AssetKind,
) -> AssetSource<'a> {
    match (kind, options.spiffs_project.as_deref()) {
        (AssetKind::Spiffs, Some(project)) if plan.writes(AssetKind::Spiffs) => {
            AssetSource::Build(project)
        }
        (AssetKind::BootApp0, _) => AssetSource::Bundled,
        _ if profile.bundled && options.use_bundled_assets => AssetSource::Bundled,
        _ => AssetSource::Download(profile.assets.url(kind)),
    }
}

/// A file ready to be flashed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAsset {
    /// Which asset this is
    pub kind: AssetKind,
    /// Location in the working directory
    pub path: PathBuf,
    /// Size in bytes
    pub size: u64,
    /// Hex SHA-256 of the contents
    pub sha256: String,
}

impl ResolvedAsset {
    /// Describe the file at `path`, hashing its contents
    pub fn from_file(kind: AssetKind, path: PathBuf) -> Result<Self> {
        let file = File::open(&path).map_err(|e| Error::io(&path, e))?;
        let mut reader = BufReader::new(file);
        let mut hasher = Sha256::new();
        let mut buf = [0u8; 8192];
        let mut size = 0u64;
        loop {
            let n = reader.read(&mut buf).map_err(|e| Error::io(&path, e))?;
            if n == 0 {
                break;
            }
            hasher.update(&buf[..n]);
            size += n as u64;
        }
        let sha256 = format!("{:x}", hasher.finalize());

        Ok(Self {
            kind,
            path,
            size,
            sha256,
        })
    }
}

/// The acquired files of one run, keyed by kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedAssets {
    assets: BTreeMap<AssetKind, ResolvedAsset>,
}

impl ResolvedAssets {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an asset
    pub fn insert(&mut self, asset: ResolvedAsset) {
        self.assets.insert(asset.kind, asset);
    }

    /// Look up an asset
    pub fn get(&self, kind: AssetKind) -> Option<&ResolvedAsset> {
        self.assets.get(&kind)
    }

    /// Check whether `kind` was acquired
    pub fn contains(&self, kind: AssetKind) -> bool {
        self.assets.contains_key(&kind)
    }

    /// Number of acquired assets
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Whether nothing was acquired
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Iterate in kind order
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedAsset> {
        self.assets.values()
    }
}

/// Fetches, copies or builds the assets a plan needs
pub struct AssetAcquirer<F, B> {
    fetcher: F,
    builder: B,
    work_dir: PathBuf,
    bundled_dir: PathBuf,
}

impl<F: Fetch, B: ImageBuilder> AssetAcquirer<F, B> {
    /// Create an acquirer writing into `work_dir`
    pub fn new(
        fetcher: F,
        builder: B,
        work_dir: impl Into<PathBuf>,
        bundled_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fetcher,
            builder,
            work_dir: work_dir.into(),
            bundled_dir: bundled_dir.into(),
        }
    }

    /// The fetcher, for inspection
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Acquire every asset `plan` writes.
    ///
    /// On success the returned set contains exactly
    /// [`FlashPlan::required_assets`].
    pub fn acquire(
        &mut self,
        profile: &FirmwareProfile,
        plan: &FlashPlan,
        options: &AcquisitionOptions,
        progress: &mut dyn Progress,
    ) -> Result<ResolvedAssets> {
        let sources: Vec<(AssetKind, AssetSource<'_>)> = plan
            .required_assets()
            .into_iter()
            .map(|kind| (kind, asset_source(profile, plan, options, kind)))
            .collect();

        fs::create_dir_all(&self.work_dir).map_err(|e| Error::io(&self.work_dir, e))?;

        let bundled: Vec<AssetKind> = sources
            .iter()
            .filter(|(_, source)| *source == AssetSource::Bundled)
            .map(|&(kind, _)| kind)
            .collect();
        if !bundled.is_empty() {
            log::info!(
                "Using {} bundled file(s) for {} from {}",
                bundled.len(),
                profile.name,
                self.bundled_dir.display()
            );
            bundled::check(&self.bundled_dir, &bundled)?;
        }

        let mut assets = ResolvedAssets::new();
        for (kind, source) in sources {
            let path = match source {
                AssetSource::Build(project) => self.build_spiffs(project, progress)?,
                AssetSource::Bundled => self.copy_bundled(kind, progress)?,
                AssetSource::Download(url) => self.download(kind, url, progress)?,
            };
            let asset = ResolvedAsset::from_file(kind, path)?;
            log::debug!(
                "{}: {} bytes, sha256 {}",
                asset.path.display(),
                asset.size,
                asset.sha256
            );
            assets.insert(asset);
        }

        if !plan.writes(AssetKind::BootApp0) && profile.family.may_use_boot_app0() {
            let path = self.bundled_dir.join(AssetKind::BootApp0.file_name());
            if !path.is_file() {
                log::warn!(
                    "{} not found; {} needs it when flashed with SPIFFS",
                    path.display(),
                    profile.name
                );
            }
        }

        Ok(assets)
    }

    fn download(
        &mut self,
        kind: AssetKind,
        url: Option<&str>,
        progress: &mut dyn Progress,
    ) -> Result<PathBuf> {
        let url = url.ok_or(Error::Download {
            kind,
            url: String::new(),
            source: FetchError::NoLocation,
        })?;
        let dest = self.work_dir.join(kind.file_name());

        progress.stage(&format!("Downloading {}...", kind.label()));
        log::info!("Downloading {} from {}", kind, url);

        let file = File::create(&dest).map_err(|e| Error::io(&dest, e))?;
        let mut out = BufWriter::new(file);
        let bytes = self
            .fetcher
            .fetch(kind, url, &mut out, progress)
            .map_err(|source| Error::Download {
                kind,
                url: url.to_string(),
                source,
            })?;
        out.flush().map_err(|e| Error::io(&dest, e))?;

        log::debug!("Wrote {} bytes to {}", bytes, dest.display());
        progress.stage(&format!("{} downloaded", capitalized(kind)));
        Ok(dest)
    }

    fn copy_bundled(&mut self, kind: AssetKind, progress: &mut dyn Progress) -> Result<PathBuf> {
        let dest = bundled::copy(&self.bundled_dir, kind, &self.work_dir)?;
        progress.stage(&format!("Copied {}", kind.file_name()));
        Ok(dest)
    }

    fn build_spiffs(&mut self, project: &Path, progress: &mut dyn Progress) -> Result<PathBuf> {
        progress.stage("Building SPIFFS from project...");
        self.builder.build(project)?;

        let image = find_spiffs_image(project)?;
        log::info!("Using SPIFFS image {}", image.display());

        let dest = self.work_dir.join(AssetKind::Spiffs.file_name());
        fs::copy(&image, &dest).map_err(|e| Error::io(&dest, e))?;
        progress.stage("SPIFFS built");
        Ok(dest)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Serves `url` bytes for every request, or fails for one kind
    #[derive(Debug, Default)]
    pub struct FakeFetcher {
        pub requests: Vec<String>,
        pub fail: Option<(AssetKind, u16)>,
    }

    impl Fetch for FakeFetcher {
        fn fetch(
            &mut self,
            kind: AssetKind,
            url: &str,
            out: &mut dyn Write,
            progress: &mut dyn Progress,
        ) -> std::result::Result<u64, FetchError> {
            self.requests.push(url.to_string());
            if let Some((failing, status)) = self.fail {
                if failing == kind {
                    return Err(FetchError::Status(status));
                }
            }
            progress.download_started(kind, Some(url.len() as u64));
            out.write_all(url.as_bytes())?;
            progress.download_finished();
            Ok(url.len() as u64)
        }
    }

    /// Writes `.pio/build/esp32dev/spiffs.bin` into the project
    #[derive(Debug, Default)]
    pub struct FakeBuilder {
        pub builds: usize,
    }

    impl ImageBuilder for FakeBuilder {
        fn build(&mut self, project: &Path) -> Result<()> {
            self.builds += 1;
            let env = project.join(".pio/build/esp32dev");
            fs::create_dir_all(&env).map_err(|e| Error::io(&env, e))?;
            fs::write(env.join("spiffs.bin"), b"built-spiffs")
                .map_err(|e| Error::io(&env, e))
        }
    }

    /// Bundled directory holding the given assets
    pub fn bundle_with(dir: &Path, kinds: &[AssetKind]) {
        fs::create_dir_all(dir).unwrap();
        for kind in kinds {
            fs::write(dir.join(kind.file_name()), kind.file_name()).unwrap();
        }
    }
}
