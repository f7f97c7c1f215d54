use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Mirrors the conventions of the snapcraft tooling: any failure while
/// reading, parsing or writing is reported as an application error, while
/// argument errors keep clap's own exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// SBOM generated and written
    Success = 0,
    /// Application error (manifest missing, parse failure, file I/O error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for SBOM generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping a hint line on every user-facing failure.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("snapcraft manifest not found: {path}\n\n💡 Hint: {suggestion}")]
    ManifestNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse snapcraft manifest: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is valid snapcraft YAML")]
    ManifestParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Invalid config file: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    InvalidConfig {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Validation error for user-supplied options
    #[error("Validation error: {message}")]
    Validation { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
    }

    #[test]
    fn test_manifest_not_found_display() {
        let error = SbomError::ManifestNotFound {
            path: PathBuf::from("/work/snap/snapcraft.yaml"),
            suggestion: "Pass the manifest path explicitly".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("snapcraft manifest not found"));
        assert!(display.contains("/work/snap/snapcraft.yaml"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("Pass the manifest path explicitly"));
    }

    #[test]
    fn test_manifest_parse_error_display() {
        let error = SbomError::ManifestParseError {
            path: PathBuf::from("snapcraft.yaml"),
            details: "mapping values are not allowed here".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse snapcraft manifest"));
        assert!(display.contains("mapping values are not allowed here"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = SbomError::FileWriteError {
            path: PathBuf::from("/out/sbom.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/out/sbom.json"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_invalid_config_display() {
        let error = SbomError::InvalidConfig {
            path: PathBuf::from("snapcraft-sbom.config.yml"),
            reason: "exclude_parts[0] must not be empty".to_string(),
            hint: "Remove the empty entry".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid config file"));
        assert!(display.contains("exclude_parts[0] must not be empty"));
        assert!(display.contains("Remove the empty entry"));
    }

    #[test]
    fn test_validation_display() {
        let error = SbomError::Validation {
            message: "bad pattern".to_string(),
        };
        assert_eq!(format!("{}", error), "Validation error: bad pattern");
    }
}
