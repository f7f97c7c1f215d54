use crate::sbom_generation::domain::SbomMetadata;
use chrono::Utc;
use uuid::Uuid;

/// Tool name recorded in generated SBOMs
pub const TOOL_NAME: &str = "snapcraft-sbom";

/// Supplier recorded when none is configured
pub const DEFAULT_SUPPLIER: &str = "Unknown";

/// SbomGenerator service for generating SBOM metadata
///
/// Creates metadata conforming to the CycloneDX specification: a fresh
/// timestamp and a unique `urn:uuid:` serial number per document.
pub struct SbomGenerator;

impl SbomGenerator {
    /// Generates SBOM metadata with current timestamp and unique serial number
    ///
    /// # Arguments
    /// * `tool_name` - Name of the tool generating the SBOM
    /// * `tool_version` - Version of the tool
    /// * `supplier` - Organisation supplying the snap; also recorded as tool vendor
    pub fn generate_metadata(tool_name: &str, tool_version: &str, supplier: &str) -> SbomMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let serial_number = format!("urn:uuid:{}", Uuid::new_v4());

        SbomMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            supplier.to_string(),
            supplier.to_string(),
            serial_number,
        )
    }

    /// Generates metadata for this tool, using the compile-time crate version
    pub fn generate_default_metadata(supplier: Option<&str>) -> SbomMetadata {
        Self::generate_metadata(
            TOOL_NAME,
            env!("CARGO_PKG_VERSION"),
            supplier.unwrap_or(DEFAULT_SUPPLIER),
        )
    }
}
