//! Component view structs for read model
//!
//! These structs provide a flattened view of one enriched part.

/// View representation of a software component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentView {
    /// BOM reference identifier, unique within the document
    pub bom_ref: String,
    /// Inferred package name
    pub name: String,
    /// Inferred version, or `unknown`
    pub version: String,
    /// Remote source, recorded as a VCS external reference
    pub source_url: String,
    /// Snapcraft provenance of the component
    pub properties: Vec<PropertyView>,
}

/// A name/value pair attached to a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyView {
    pub name: String,
    pub value: String,
}

impl PropertyView {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
