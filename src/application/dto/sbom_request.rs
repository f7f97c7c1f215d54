use std::path::PathBuf;

/// SbomRequest - Internal request DTO for SBOM generation use case
///
/// Built by the CLI from arguments and the optional config file.
#[derive(Debug, Clone)]
pub struct SbomRequest {
    /// Path to the snapcraft manifest
    pub manifest_path: PathBuf,
    /// Patterns for excluding parts by name
    pub exclude_patterns: Vec<String>,
    /// Organisation recorded as the SBOM supplier
    pub supplier: Option<String>,
}

impl SbomRequest {
    pub fn new(
        manifest_path: PathBuf,
        exclude_patterns: Vec<String>,
        supplier: Option<String>,
    ) -> Self {
        Self {
            manifest_path,
            exclude_patterns,
            supplier,
        }
    }
}
