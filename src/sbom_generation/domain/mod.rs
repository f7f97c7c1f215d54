pub mod enriched_part;
pub mod part;
pub mod sbom_metadata;
pub mod snap_manifest;

pub use enriched_part::EnrichedPart;
pub use part::PartRecord;
pub use sbom_metadata::SbomMetadata;
pub use snap_manifest::SnapManifest;
