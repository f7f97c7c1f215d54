//! SBOM read model for query operations
//!
//! This module provides the main read model struct that aggregates
//! all SBOM data in a formatter-friendly shape.

use super::component_view::ComponentView;

/// Main read model for SBOM data
#[derive(Debug, Clone)]
pub struct SbomReadModel {
    /// SBOM metadata
    pub metadata: SbomMetadataView,
    /// The snap the SBOM describes, when the manifest names it
    pub subject: Option<SubjectView>,
    /// One component per remote part, in manifest order
    pub components: Vec<ComponentView>,
}

/// View representation of SBOM metadata
#[derive(Debug, Clone)]
pub struct SbomMetadataView {
    /// Timestamp when the SBOM was created
    pub timestamp: String,
    /// Name of the tool that generated the SBOM
    pub tool_name: String,
    /// Version of the tool
    pub tool_version: String,
    /// Vendor of the tool
    pub tool_vendor: String,
    /// Supplier of the described snap
    pub supplier: String,
    /// Serial number of the SBOM
    pub serial_number: String,
}

/// View representation of the snap itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectView {
    pub bom_ref: String,
    pub name: String,
    pub version: String,
    pub description: Option<String>,
}
