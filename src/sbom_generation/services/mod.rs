mod manifest_parser;
mod part_enricher;
mod part_filter;
mod sbom_generator;

pub use manifest_parser::ManifestParser;
pub use part_enricher::PartEnricher;
pub use part_filter::PartFilter;
pub use sbom_generator::{SbomGenerator, DEFAULT_SUPPLIER, TOOL_NAME};
