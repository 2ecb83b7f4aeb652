//! Remote asset download

use std::io::{self, Read, Write};
use std::time::Duration;

use thiserror::Error;

use crate::catalog::AssetKind;
use crate::progress::Progress;

const CHUNK_SIZE: usize = 8192;

/// Why a download failed
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS or protocol error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Server answered with a non-success status
    #[error("server returned HTTP {0}")]
    Status(u16),
    /// Reading the body or writing the file failed
    #[error("transfer failed: {0}")]
    Io(#[from] io::Error),
    /// The profile has no remote location for this asset
    #[error("no remote location")]
    NoLocation,
}

/// Source of remote bytes
pub trait Fetch {
    /// Stream `url` into `out`, returning the number of bytes written
    fn fetch(
        &mut self,
        kind: AssetKind,
        url: &str,
        out: &mut dyn Write,
        progress: &mut dyn Progress,
    ) -> Result<u64, FetchError>;
}

/// Blocking HTTP(S) fetcher
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

fn client_builder(connect_timeout: Duration) -> reqwest::blocking::ClientBuilder {
    // only the connection is bounded; a transfer runs while bytes keep arriving
    reqwest::blocking::Client::builder()
        .connect_timeout(connect_timeout)
        .timeout(None)
        .user_agent(concat!("ncdflash/", env!("CARGO_PKG_VERSION")))
}

impl HttpFetcher {
    /// Build a client that gives up on servers not accepting a connection
    /// within `connect_timeout`. Transfers themselves are not time-limited.
    pub fn new(connect_timeout: Duration) -> Result<Self, FetchError> {
        let client = client_builder(connect_timeout).build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(
        &mut self,
        kind: AssetKind,
        url: &str,
        out: &mut dyn Write,
        progress: &mut dyn Progress,
    ) -> Result<u64, FetchError> {
        log::debug!("GET {}", url);
        let mut response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let total = response.content_length();
        log::trace!("{}: content length {:?}", kind, total);
        progress.download_started(kind, total);

        let mut buf = [0u8; CHUNK_SIZE];
        let mut written = 0u64;
        loop {
            let n = response.read(&mut buf)?;
            if n == 0 {
                break;
            }
            out.write_all(&buf[..n])?;
            written += n as u64;
            progress.download_progress(written);
        }
        out.flush()?;
        progress.download_finished();

        Ok(written)
    }
}
