use crate::ports::outbound::ManifestReader;
use crate::shared::error::SbomError;
use crate::shared::security::read_checked;
use crate::shared::Result;
use std::path::Path;

/// FileSystemReader adapter for reading snapcraft manifests from disk
///
/// Refuses symbolic links, non-regular files and files above the size limit.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestReader for FileSystemReader {
    fn read_manifest(&self, manifest_path: &Path) -> Result<String> {
        if !manifest_path.exists() {
            return Err(SbomError::ManifestNotFound {
                path: manifest_path.to_path_buf(),
                suggestion: format!(
                    "\"{}\" does not exist.\n   \
                     Run in a directory containing snapcraft.yaml, or pass the manifest path as an argument.",
                    manifest_path.display()
                ),
            }
            .into());
        }

        read_checked(manifest_path, "snapcraft manifest").map_err(|e| {
            SbomError::FileReadError {
                path: manifest_path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
