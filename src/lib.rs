//! snapcraft-sbom - SBOM generation tool for snapcraft projects
//!
//! This library turns the `parts` of a `snapcraft.yaml` manifest into a
//! CycloneDX Software Bill of Materials, inferring each part's package name
//! and version from its source declarations.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_generation`): Parts, the inference heuristics and domain services
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use snapcraft_sbom::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = GenerateSbomUseCase::new(
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(false),
//! );
//!
//! let request = SbomRequest::new(PathBuf::from("snapcraft.yaml"), vec![], None);
//! let response = use_case.execute(request)?;
//!
//! let model = SbomReadModelBuilder::build(
//!     &response.enriched_parts,
//!     &response.metadata,
//!     &response.manifest,
//! );
//! let output = CycloneDxFormatter::new().format(&model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```
//!
//! The inference engine can also be used on its own:
//!
//! ```
//! use snapcraft_sbom::prelude::*;
//!
//! assert!(is_remote_source("https://github.com/example/lib-alpha.git"));
//! assert_eq!(
//!     extract_package_name("https://github.com/example/lib-alpha.git", "alpha"),
//!     "lib-alpha"
//! );
//!
//! let part = PartRecord::new("alpha", "https://github.com/example/lib-alpha.git")
//!     .with_source_tag(Some("v2.4.8".to_string()));
//! assert_eq!(extract_version(&part).as_deref(), Some("2.4.8"));
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::CycloneDxFormatter;
    pub use crate::application::dto::{SbomRequest, SbomResponse};
    pub use crate::application::read_models::{SbomReadModel, SbomReadModelBuilder};
    pub use crate::application::use_cases::GenerateSbomUseCase;
    pub use crate::ports::outbound::{
        ManifestReader, OutputPresenter, ProgressReporter, SbomFormatter,
    };
    pub use crate::sbom_generation::domain::{
        EnrichedPart, PartRecord, SbomMetadata, SnapManifest,
    };
    pub use crate::sbom_generation::policies::{
        extract_package_name, extract_version, is_remote_source, VersionSignal,
    };
    pub use crate::sbom_generation::services::{
        ManifestParser, PartEnricher, PartFilter, SbomGenerator,
    };
    pub use crate::shared::Result;
}
