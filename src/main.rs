mod cli;
mod config;

use cli::Args;
use config::ConfigFile;
use snapcraft_sbom::adapters::outbound::console::StderrProgressReporter;
use snapcraft_sbom::adapters::outbound::filesystem::FileSystemReader;
use snapcraft_sbom::adapters::outbound::formatters::CycloneDxFormatter;
use snapcraft_sbom::application::dto::SbomRequest;
use snapcraft_sbom::application::factories::{PresenterFactory, PresenterType};
use snapcraft_sbom::application::read_models::SbomReadModelBuilder;
use snapcraft_sbom::application::use_cases::GenerateSbomUseCase;
use snapcraft_sbom::ports::outbound::{ProgressReporter, SbomFormatter};
use snapcraft_sbom::shared::error::ExitCode;
use snapcraft_sbom::shared::Result;
use std::path::Path;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    let args = Args::parse_args();
    let progress_reporter = StderrProgressReporter::new(args.verbose);

    let config = load_config(&args)?.unwrap_or_default();
    let request = build_request(&args, config);
    let presenter_type = PresenterType::from_output(args.output.clone());

    progress_reporter.report(&format!("Processing: {}", args.snapcraft_file.display()));
    progress_reporter.report(&presenter_type.describe());

    // Create use case with injected dependencies
    let use_case = GenerateSbomUseCase::new(FileSystemReader::new(), progress_reporter);
    let response = use_case.execute(request)?;

    let read_model = SbomReadModelBuilder::build(
        &response.enriched_parts,
        &response.metadata,
        &response.manifest,
    );
    let formatted_output = CycloneDxFormatter::new().format(&read_model)?;

    PresenterFactory::create(presenter_type).present(&formatted_output)?;

    progress_reporter.report(&format!(
        "\nAdded {} components to SBOM",
        read_model.components.len()
    ));
    progress_reporter.report_completion("✓ SBOM generated successfully!");

    Ok(())
}

/// Loads the explicit config file, or discovers one next to the manifest
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    if let Some(path) = &args.config {
        return config::load_config_from_path(path).map(Some);
    }

    let manifest_dir = args
        .snapcraft_file
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    config::discover_config(manifest_dir)
}

/// CLI exclusions come first, followed by those from the config file
fn build_request(args: &Args, config: ConfigFile) -> SbomRequest {
    let mut exclude_patterns = args.exclude.clone();
    exclude_patterns.extend(config.exclude_parts.unwrap_or_default());

    SbomRequest::new(args.snapcraft_file.clone(), exclude_patterns, config.supplier)
}
