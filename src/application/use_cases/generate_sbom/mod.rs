use crate::application::dto::{SbomRequest, SbomResponse};
use crate::ports::outbound::{ManifestReader, ProgressReporter};
use crate::sbom_generation::domain::{EnrichedPart, PartRecord, SnapManifest};
use crate::sbom_generation::policies::VersionInference;
use crate::sbom_generation::services::{PartEnricher, PartFilter, SbomGenerator};
use crate::shared::error::SbomError;
use crate::shared::Result;

/// GenerateSbomUseCase - Core use case for SBOM generation
///
/// This use case orchestrates the SBOM generation workflow using
/// generic dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `MR` - ManifestReader implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateSbomUseCase<MR, PR> {
    manifest_reader: MR,
    progress_reporter: PR,
}

impl<MR, PR> GenerateSbomUseCase<MR, PR>
where
    MR: ManifestReader,
    PR: ProgressReporter,
{
    /// Creates a new GenerateSbomUseCase with injected dependencies
    pub fn new(manifest_reader: MR, progress_reporter: PR) -> Self {
        Self {
            manifest_reader,
            progress_reporter,
        }
    }

    /// Executes the SBOM generation use case
    ///
    /// # Arguments
    /// * `request` - SBOM generation request containing manifest path and options
    ///
    /// # Returns
    /// SbomResponse containing the manifest, enriched remote parts and metadata
    pub fn execute(&self, request: SbomRequest) -> Result<SbomResponse> {
        // Step 1: Read and parse the manifest
        let manifest = self.read_and_report_manifest(&request)?;

        // Step 2: Keep only parts with a remote source
        let remote_parts = self.select_remote_parts(&manifest);

        // Step 3: Apply exclusion filters
        let filtered_parts = self.apply_exclusion_filters(remote_parts, &request)?;

        // Step 4: Infer package names and versions
        let enriched_parts = PartEnricher::enrich_all(filtered_parts);
        self.report_part_details(&enriched_parts);

        // Step 5: Build and return response
        let metadata = SbomGenerator::generate_default_metadata(request.supplier.as_deref());
        Ok(SbomResponse::new(manifest, enriched_parts, metadata))
    }

    fn read_and_report_manifest(&self, request: &SbomRequest) -> Result<SnapManifest> {
        let manifest = self
            .manifest_reader
            .read_and_parse_manifest(&request.manifest_path)?;

        self.progress_reporter.report(&format!(
            "Snap name: {}",
            manifest.name().unwrap_or("(unnamed)")
        ));

        Ok(manifest)
    }

    fn select_remote_parts(&self, manifest: &SnapManifest) -> Vec<PartRecord> {
        let remote_parts = manifest.remote_parts();

        let local_count = manifest.local_part_count();
        if local_count > 0 {
            self.progress_reporter.report(&format!(
                "Skipped {} part(s) with a local source",
                local_count
            ));
        }
        self.progress_reporter.report(&format!(
            "Found {} parts with source:",
            remote_parts.len()
        ));

        remote_parts
    }

    /// Applies exclusion filters to the remote parts
    ///
    /// # Errors
    /// Returns an error if a pattern is invalid or if every part is excluded
    fn apply_exclusion_filters(
        &self,
        parts: Vec<PartRecord>,
        request: &SbomRequest,
    ) -> Result<Vec<PartRecord>> {
        if request.exclude_patterns.is_empty() {
            return Ok(parts);
        }

        let filter = PartFilter::new(request.exclude_patterns.clone())?;
        let original_count = parts.len();
        let filtered = filter.filter_parts(parts);

        let excluded_count = original_count - filtered.len();
        if excluded_count > 0 {
            self.progress_reporter.report(&format!(
                "Excluded {} part(s) based on filters",
                excluded_count
            ));
        }

        if filtered.is_empty() && original_count > 0 {
            return Err(SbomError::Validation {
                message: format!(
                    "All {} part(s) were excluded by the provided filters. \
                     The SBOM would be empty. Please adjust your exclusion patterns.",
                    original_count
                ),
            }
            .into());
        }

        for pattern in filter.unmatched_patterns() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Exclude pattern '{}' did not match any parts.",
                pattern
            ));
        }

        Ok(filtered)
    }

    fn report_part_details(&self, parts: &[EnrichedPart]) {
        for enriched in parts {
            let part = &enriched.part;
            self.progress_reporter
                .report(&format!("\nPart: {}", part.name()));
            self.progress_reporter
                .report_detail("Package Name", &enriched.package_name);
            let version = match VersionInference::infer_with_signal(part) {
                Some((signal, version)) => format!("{} ({})", version, signal),
                None => "(not detected)".to_string(),
            };
            self.progress_reporter.report_detail("Version", &version);
            self.progress_reporter.report_detail("Source", part.source());

            let optional = [
                ("Type", part.source_type()),
                ("Tag", part.source_tag()),
                ("Branch", part.source_branch()),
                ("Commit", part.source_commit()),
            ];
            for (label, value) in optional {
                if let Some(value) = value {
                    self.progress_reporter.report_detail(label, value);
                }
            }
        }
    }
}
