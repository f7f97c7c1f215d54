use crate::application::read_models::SbomReadModel;
use crate::shared::Result;

/// SbomFormatter port for formatting SBOM output
///
/// This port abstracts the serialization of the SBOM read model into a
/// document format (CycloneDX JSON).
pub trait SbomFormatter {
    /// Formats the SBOM read model
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &SbomReadModel) -> Result<String>;
}
