use super::PartRecord;
use crate::sbom_generation::policies::RemoteSourcePolicy;

/// SnapManifest aggregate: the snap's own identity plus its source-bearing parts
///
/// Parts keep the order in which they were declared in the manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapManifest {
    name: Option<String>,
    version: Option<String>,
    summary: Option<String>,
    parts: Vec<PartRecord>,
}

impl SnapManifest {
    pub fn new(
        name: Option<String>,
        version: Option<String>,
        summary: Option<String>,
        parts: Vec<PartRecord>,
    ) -> Self {
        Self {
            name,
            version,
            summary,
            parts,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// All parts that declare a `source`, local or remote
    pub fn parts(&self) -> &[PartRecord] {
        &self.parts
    }

    /// Parts whose source is a fetchable remote reference, in manifest order
    pub fn remote_parts(&self) -> Vec<PartRecord> {
        self.parts
            .iter()
            .filter(|part| RemoteSourcePolicy::is_remote(part.source()))
            .cloned()
            .collect()
    }

    /// Number of parts dropped by `remote_parts` because their source is local
    pub fn local_part_count(&self) -> usize {
        self.parts
            .iter()
            .filter(|part| !RemoteSourcePolicy::is_remote(part.source()))
            .count()
    }
}
