use crate::sbom_generation::domain::SnapManifest;
use crate::sbom_generation::services::ManifestParser;
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::path::Path;

/// ManifestReader port for loading a snapcraft manifest
///
/// Implementations only supply the raw text; parsing is shared so every
/// reader yields the same `SnapManifest` for the same content.
pub trait ManifestReader {
    /// Reads the raw content of the manifest at `manifest_path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The manifest does not exist
    /// - The file cannot be read due to permissions or I/O errors
    fn read_manifest(&self, manifest_path: &Path) -> Result<String>;

    /// Reads and parses the manifest
    ///
    /// # Errors
    /// Returns `SbomError::ManifestParseError` when the content is not a
    /// usable snapcraft manifest, plus any error from `read_manifest`.
    fn read_and_parse_manifest(&self, manifest_path: &Path) -> Result<SnapManifest> {
        let content = self.read_manifest(manifest_path)?;

        ManifestParser::parse(&content).map_err(|e| {
            SbomError::ManifestParseError {
                path: manifest_path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
