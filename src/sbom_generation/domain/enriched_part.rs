use super::PartRecord;

/// EnrichedPart represents a remote part with its inferred package identity
///
/// This is the hand-off from the inference engine to SBOM assembly.
/// `package_name` is never empty; `version` is `None` when no heuristic
/// produced a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedPart {
    pub part: PartRecord,
    pub package_name: String,
    pub version: Option<String>,
}

impl EnrichedPart {
    pub fn new(part: PartRecord, package_name: String, version: Option<String>) -> Self {
        Self {
            part,
            package_name,
            version,
        }
    }

    /// The declared part name from the manifest
    pub fn name(&self) -> &str {
        self.part.name()
    }

    pub fn source(&self) -> &str {
        self.part.source()
    }
}
