use crate::sbom_generation::domain::{EnrichedPart, PartRecord};
use crate::sbom_generation::policies::{PackageNameInference, VersionInference};

/// PartEnricher service attaching an inferred package identity to each part
///
/// Every part is handled independently; output order equals input order.
pub struct PartEnricher;

impl PartEnricher {
    /// Infers package name (part name as fallback) and version for one part
    pub fn enrich(part: PartRecord) -> EnrichedPart {
        let package_name = PackageNameInference::infer(part.source(), part.name());
        let version = VersionInference::infer(&part);
        EnrichedPart::new(part, package_name, version)
    }

    pub fn enrich_all(parts: Vec<PartRecord>) -> Vec<EnrichedPart> {
        parts.into_iter().map(Self::enrich).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enrich_repository_part() {
        let part = PartRecord::new("alpha", "https://github.com/example/lib-alpha.git")
            .with_source_tag(Some("v2.4.8".to_string()));

        let enriched = PartEnricher::enrich(part);
        assert_eq!(enriched.name(), "alpha");
        assert_eq!(enriched.package_name, "lib-alpha");
        assert_eq!(enriched.version.as_deref(), Some("2.4.8"));
    }

    #[test]
    fn test_enrich_falls_back_to_part_name() {
        let part = PartRecord::new("mirror", "ftp://ftp.example.org/pub/archive.tar.gz");

        let enriched = PartEnricher::enrich(part);
        assert_eq!(enriched.package_name, "mirror");
        assert_eq!(enriched.version, None);
    }

    #[test]
    fn test_enrich_all_preserves_order() {
        let parts = vec![
            PartRecord::new("zeta", "https://example.com/tool-zeta-v1.9.2.tar.gz"),
            PartRecord::new("alpha", "https://github.com/example/lib-alpha.git"),
            PartRecord::new("delta", "https://example.com/lib-delta-3.1.4.tar.xz"),
        ];

        let enriched = PartEnricher::enrich_all(parts);
        let names: Vec<&str> = enriched.iter().map(|e| e.package_name.as_str()).collect();
        assert_eq!(names, vec!["tool-zeta", "lib-alpha", "lib-delta"]);
        assert_eq!(enriched[0].version.as_deref(), Some("1.9.2"));
        assert_eq!(enriched[1].version, None);
        assert_eq!(enriched[2].version.as_deref(), Some("3.1.4"));
    }

    #[test]
    fn test_enrich_is_deterministic() {
        let part = PartRecord::new("gamma", "git@github.com:example/lib-gamma.git")
            .with_source_commit(Some("abc1234567890def".to_string()));

        let first = PartEnricher::enrich(part.clone());
        let second = PartEnricher::enrich(part);
        assert_eq!(first, second);
        assert_eq!(first.package_name, "lib-gamma");
        assert_eq!(first.version.as_deref(), Some("abc1234"));
    }
}
