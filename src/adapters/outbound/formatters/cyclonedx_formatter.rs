use crate::application::read_models::{
    ComponentView, SbomMetadataView, SbomReadModel, SubjectView,
};
use crate::ports::outbound::SbomFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Bom {
    #[serde(rename = "bomFormat")]
    bom_format: String,
    #[serde(rename = "specVersion")]
    spec_version: String,
    version: u32,
    #[serde(rename = "serialNumber")]
    serial_number: String,
    metadata: Metadata,
    components: Vec<Component>,
}

#[derive(Debug, Serialize)]
struct Metadata {
    timestamp: String,
    tools: Vec<Tool>,
    supplier: Supplier,
    #[serde(skip_serializing_if = "Option::is_none")]
    component: Option<Component>,
}

#[derive(Debug, Serialize)]
struct Tool {
    vendor: String,
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct Supplier {
    name: String,
}

#[derive(Debug, Serialize)]
struct Component {
    #[serde(rename = "type")]
    component_type: String,
    #[serde(rename = "bom-ref")]
    bom_ref: String,
    name: String,
    version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(rename = "externalReferences", skip_serializing_if = "Vec::is_empty")]
    external_references: Vec<ExternalReference>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    properties: Vec<Property>,
}

#[derive(Debug, Serialize)]
struct ExternalReference {
    #[serde(rename = "type")]
    reference_type: String,
    url: String,
}

#[derive(Debug, Serialize)]
struct Property {
    name: String,
    value: String,
}

/// CycloneDxFormatter adapter for generating CycloneDX 1.6 JSON format
///
/// This adapter implements the SbomFormatter port for CycloneDX format.
pub struct CycloneDxFormatter;

impl CycloneDxFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CycloneDxFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for CycloneDxFormatter {
    fn format(&self, model: &SbomReadModel) -> Result<String> {
        let bom = Bom {
            bom_format: "CycloneDX".to_string(),
            spec_version: "1.6".to_string(),
            version: 1,
            serial_number: model.metadata.serial_number.clone(),
            metadata: self.build_metadata(&model.metadata, model.subject.as_ref()),
            components: model
                .components
                .iter()
                .map(|c| self.build_component(c))
                .collect(),
        };

        serde_json::to_string_pretty(&bom).map_err(Into::into)
    }
}

impl CycloneDxFormatter {
    /// Build metadata from SbomMetadataView and the optional snap subject
    fn build_metadata(&self, metadata: &SbomMetadataView, subject: Option<&SubjectView>) -> Metadata {
        Metadata {
            timestamp: metadata.timestamp.clone(),
            tools: vec![Tool {
                vendor: metadata.tool_vendor.clone(),
                name: metadata.tool_name.clone(),
                version: metadata.tool_version.clone(),
            }],
            supplier: Supplier {
                name: metadata.supplier.clone(),
            },
            component: subject.map(|s| self.build_subject(s)),
        }
    }

    fn build_subject(&self, subject: &SubjectView) -> Component {
        Component {
            component_type: "application".to_string(),
            bom_ref: subject.bom_ref.clone(),
            name: subject.name.clone(),
            version: subject.version.clone(),
            description: subject.description.clone(),
            external_references: Vec::new(),
            properties: Vec::new(),
        }
    }

    /// Build a library component; the part source becomes its VCS reference
    fn build_component(&self, component: &ComponentView) -> Component {
        Component {
            component_type: "library".to_string(),
            bom_ref: component.bom_ref.clone(),
            name: component.name.clone(),
            version: component.version.clone(),
            description: None,
            external_references: vec![ExternalReference {
                reference_type: "vcs".to_string(),
                url: component.source_url.clone(),
            }],
            properties: component
                .properties
                .iter()
                .map(|p| Property {
                    name: p.name.clone(),
                    value: p.value.clone(),
                })
                .collect(),
        }
    }
}
