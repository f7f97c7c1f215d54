use crate::sbom_generation::domain::{EnrichedPart, SbomMetadata, SnapManifest};

/// SbomResponse - Internal response DTO from SBOM generation use case
///
/// This DTO contains the rich data structures produced by the use case,
/// which adapters can then format into the appropriate output format.
#[derive(Debug, Clone)]
pub struct SbomResponse {
    /// The parsed manifest, kept for the snap's own identity
    pub manifest: SnapManifest,
    /// Remote parts with inferred package name and version
    pub enriched_parts: Vec<EnrichedPart>,
    /// SBOM metadata (timestamp, tool info, serial number)
    pub metadata: SbomMetadata,
}

impl SbomResponse {
    pub fn new(
        manifest: SnapManifest,
        enriched_parts: Vec<EnrichedPart>,
        metadata: SbomMetadata,
    ) -> Self {
        Self {
            manifest,
            enriched_parts,
            metadata,
        }
    }
}
