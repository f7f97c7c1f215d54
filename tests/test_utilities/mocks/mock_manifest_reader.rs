use snapcraft_sbom::prelude::*;
use std::path::Path;

/// Mock ManifestReader serving fixed content, or failing when none is set
pub struct MockManifestReader {
    content: Option<String>,
}

impl MockManifestReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    pub fn missing() -> Self {
        Self { content: None }
    }
}

impl ManifestReader for MockManifestReader {
    fn read_manifest(&self, manifest_path: &Path) -> Result<String> {
        self.content
            .clone()
            .ok_or_else(|| anyhow::anyhow!("mock manifest not found: {}", manifest_path.display()))
    }
}
