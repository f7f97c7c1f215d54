//! Builder for constructing SbomReadModel from domain objects

use super::component_view::{ComponentView, PropertyView};
use super::sbom_read_model::{SbomMetadataView, SbomReadModel, SubjectView};
use crate::sbom_generation::domain::{EnrichedPart, SbomMetadata, SnapManifest};

/// Version shown for components and snaps without a known version
pub const UNKNOWN_VERSION: &str = "unknown";

/// Builder for constructing SbomReadModel from domain objects
pub struct SbomReadModelBuilder;

impl SbomReadModelBuilder {
    /// Builds a SbomReadModel from domain objects
    ///
    /// # Arguments
    /// * `parts` - Enriched remote parts, in manifest order
    /// * `metadata` - SBOM metadata (timestamp, tool info, serial number)
    /// * `manifest` - The parsed manifest, for the snap's own identity
    pub fn build(
        parts: &[EnrichedPart],
        metadata: &SbomMetadata,
        manifest: &SnapManifest,
    ) -> SbomReadModel {
        SbomReadModel {
            metadata: Self::build_metadata(metadata),
            subject: Self::build_subject(manifest),
            components: parts.iter().map(Self::build_component).collect(),
        }
    }

    fn build_metadata(metadata: &SbomMetadata) -> SbomMetadataView {
        SbomMetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            tool_vendor: metadata.tool_vendor().to_string(),
            supplier: metadata.supplier().to_string(),
            serial_number: metadata.serial_number().to_string(),
        }
    }

    fn build_subject(manifest: &SnapManifest) -> Option<SubjectView> {
        manifest.name().map(|name| SubjectView {
            bom_ref: format!("snap:{}", name),
            name: name.to_string(),
            version: manifest.version().unwrap_or(UNKNOWN_VERSION).to_string(),
            description: manifest.summary().map(str::to_string),
        })
    }

    /// Part names are unique within a manifest, so they make stable bom-refs
    fn build_component(enriched: &EnrichedPart) -> ComponentView {
        ComponentView {
            bom_ref: format!("part:{}", enriched.name()),
            name: enriched.package_name.clone(),
            version: enriched
                .version
                .clone()
                .unwrap_or_else(|| UNKNOWN_VERSION.to_string()),
            source_url: enriched.source().to_string(),
            properties: Self::build_properties(enriched),
        }
    }

    fn build_properties(enriched: &EnrichedPart) -> Vec<PropertyView> {
        let part = &enriched.part;
        let optional = [
            ("snapcraft:plugin", part.plugin()),
            ("snapcraft:source-type", part.source_type()),
            ("snapcraft:source-tag", part.source_tag()),
            ("snapcraft:source-branch", part.source_branch()),
            ("snapcraft:source-commit", part.source_commit()),
            ("snapcraft:source-depth", part.source_depth()),
        ];

        std::iter::once(PropertyView::new("snapcraft:part", part.name()))
            .chain(
                optional
                    .into_iter()
                    .filter_map(|(name, value)| value.map(|v| PropertyView::new(name, v))),
            )
            .collect()
    }
}
