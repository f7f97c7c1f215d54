/// SbomMetadata value object representing document-level SBOM metadata
#[derive(Debug, Clone)]
pub struct SbomMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    tool_vendor: String,
    supplier: String,
    serial_number: String,
}

impl SbomMetadata {
    pub fn new(
        timestamp: String,
        tool_name: String,
        tool_version: String,
        tool_vendor: String,
        supplier: String,
        serial_number: String,
    ) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            tool_vendor,
            supplier,
            serial_number,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn tool_vendor(&self) -> &str {
        &self.tool_vendor
    }

    pub fn supplier(&self) -> &str {
        &self.supplier
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sbom_metadata_new() {
        let metadata = SbomMetadata::new(
            "2024-01-01T00:00:00Z".to_string(),
            "snapcraft-sbom".to_string(),
            "0.1.0".to_string(),
            "Example Corp".to_string(),
            "Example Corp".to_string(),
            "urn:uuid:12345".to_string(),
        );

        assert_eq!(metadata.timestamp(), "2024-01-01T00:00:00Z");
        assert_eq!(metadata.tool_name(), "snapcraft-sbom");
        assert_eq!(metadata.tool_version(), "0.1.0");
        assert_eq!(metadata.tool_vendor(), "Example Corp");
        assert_eq!(metadata.supplier(), "Example Corp");
        assert_eq!(metadata.serial_number(), "urn:uuid:12345");
    }
}
