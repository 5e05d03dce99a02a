use clap::Parser;

use sbom_test_app::config::CliOverrides;

/// Exercise an HTTP client, TLS, SQLite and zlib for SBOM tooling
#[derive(Parser, Debug)]
#[command(name = "sbom-test-app")]
#[command(version)]
#[command(about = "Exercise an HTTP client, TLS, SQLite and zlib for SBOM tooling", long_about = None)]
pub struct Args {
    /// Text to process (defaults to "sample data")
    #[arg(short, long)]
    pub input: Option<String>,

    /// Path to a config file (defaults to ./sbom-test-app.config.yml if present)
    #[arg(short, long)]
    pub config: Option<String>,

    /// zlib compression level: 0 (store) to 9 (best)
    #[arg(short = 'l', long, value_parser = clap::value_parser!(u32).range(0..=9))]
    pub compression_level: Option<u32>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            input: self.input.clone(),
            compression_level: self.compression_level,
        }
    }
}
