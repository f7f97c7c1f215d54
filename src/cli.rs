use clap::Parser;
use std::path::PathBuf;

/// Convert a Snapcraft YAML file to SBOM format (JSON)
#[derive(Parser, Debug)]
#[command(name = "snapcraft-sbom")]
#[command(version)]
#[command(about = "Convert a Snapcraft YAML file to SBOM format (JSON).", long_about = None)]
pub struct Args {
    /// Path to the snapcraft.yaml file
    #[arg(value_name = "SNAPCRAFT_FILE", default_value = "snapcraft.yaml")]
    pub snapcraft_file: PathBuf,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print progress and per-part details to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Exclude parts matching patterns (supports wildcards: *)
    /// Can be specified multiple times: -e "lib-a" -e "tool-*"
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Path to a config file (defaults to snapcraft-sbom.config.yml next to the manifest)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
