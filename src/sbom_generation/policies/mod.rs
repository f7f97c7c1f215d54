//! Inference policies: ordered heuristics over part sources and VCS refs.
//!
//! All functions here are pure and deterministic, so callers may run them
//! from any thread without coordination.

mod name_inference;
mod remote_source;
mod version_inference;

pub use name_inference::PackageNameInference;
pub use remote_source::{RemoteSourcePolicy, REMOTE_PREFIXES};
pub use version_inference::{VersionInference, VersionSignal};

use crate::sbom_generation::domain::PartRecord;

/// Returns true iff `source` is a fetchable remote reference
pub fn is_remote_source(source: &str) -> bool {
    RemoteSourcePolicy::is_remote(source)
}

/// Derives a package name from `source`, falling back to `fallback`
pub fn extract_package_name(source: &str, fallback: &str) -> String {
    PackageNameInference::infer(source, fallback)
}

/// Picks the best available version for `part`, if any
pub fn extract_version(part: &PartRecord) -> Option<String> {
    VersionInference::infer(part)
}
