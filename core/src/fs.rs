use std::io;
use std::path::Path;

use tokio::fs;
use tracing::{Instrument, info_span};

use wadeploy_common::ports::DeployFileSystem;

/// Local paths and mapped UNC paths alike, through `tokio::fs`.
pub struct LocalFileSystem;

#[async_trait::async_trait]
impl DeployFileSystem for LocalFileSystem {
    async fn is_accessible_dir(&self, path: &Path) -> bool {
        match fs::metadata(path).await {
            Ok(meta) => meta.is_dir(),
            Err(err) => {
                tracing::debug!("{} is not accessible: {err}", path.display());
                false
            }
        }
    }

    async fn exists(&self, path: &Path) -> bool {
        fs::try_exists(path).await.unwrap_or(false)
    }

    async fn copy_file(&self, from: &Path, to: &Path) -> io::Result<u64> {
        let span = info_span!("copy", indicatif.pb_show = true, to = %to.display());
        fs::copy(from, to).instrument(span).await
    }
}
