use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the metadata document inside a bundle directory.
pub const INFO_FILE_NAME: &str = "info.toml";
/// File name of the executable script inside a bundle directory.
pub const SCRIPT_FILE_NAME: &str = "script.lua";

#[derive(Debug, Error)]
pub enum FileStoreError {
    #[error("failed to create bundle directory: {0}")]
    CreateDir(std::io::Error),
    #[error("failed to write {name}: {source}")]
    Write {
        name: &'static str,
        source: std::io::Error,
    },
    #[error("failed to remove bundle directory: {0}")]
    Remove(std::io::Error),
}

/// Public static paths of a stored bundle, as served by the file collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredBundle {
    pub info_path: String,
    pub script_path: String,
}

/// On-disk store for scenario bundles.
///
/// Each bundle lives under `<root>/scenarios/<scenario-id>/` and holds the two
/// uploaded files verbatim. Bundles are never mutated after creation.
pub struct BundleStore {
    root: PathBuf,
}

impl BundleStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn bundle_dir(&self, scenario_id: &str) -> PathBuf {
        self.root.join("scenarios").join(scenario_id)
    }

    /// Writes both bundle files under a fresh directory keyed by `scenario_id`.
    ///
    /// The bytes land on disk exactly as uploaded; no re-serialization of the
    /// parsed metadata happens here.
    pub async fn write_bundle(
        &self,
        scenario_id: &str,
        info_bytes: &[u8],
        script_bytes: &[u8],
    ) -> Result<StoredBundle, FileStoreError> {
        let dir = self.bundle_dir(scenario_id);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(FileStoreError::CreateDir)?;

        write_file(&dir.join(INFO_FILE_NAME), INFO_FILE_NAME, info_bytes).await?;
        write_file(&dir.join(SCRIPT_FILE_NAME), SCRIPT_FILE_NAME, script_bytes).await?;

        Ok(StoredBundle {
            info_path: format!("/scenarios/{}/{}", scenario_id, INFO_FILE_NAME),
            script_path: format!("/scenarios/{}/{}", scenario_id, SCRIPT_FILE_NAME),
        })
    }

    /// Removes a bundle directory and everything in it.
    ///
    /// A missing directory is not an error: the saga may compensate before any
    /// file reached the disk.
    pub async fn remove_bundle(&self, scenario_id: &str) -> Result<(), FileStoreError> {
        let dir = self.bundle_dir(scenario_id);
        match tokio::fs::remove_dir_all(&dir).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(FileStoreError::Remove(e)),
        }
    }
}

async fn write_file(
    path: &Path,
    name: &'static str,
    bytes: &[u8],
) -> Result<(), FileStoreError> {
    tokio::fs::write(path, bytes)
        .await
        .map_err(|source| FileStoreError::Write { name, source })
}
