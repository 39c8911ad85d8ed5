use super::OutputFormat;
use crate::domain::ports::ConfigProvider;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "folio")]
#[command(about = "Render a single-page portfolio site from a static configuration")]
pub struct CliConfig {
    /// Portfolio document (.toml or .json); the built-in portfolio is used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory the rendered site is written to
    #[arg(short, long, visible_alias = "output", default_value = "./dist")]
    pub output_path: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Render without entrance or hover animations
    #[arg(long)]
    pub no_motion: bool,

    /// Load and validate the portfolio, print a summary, write nothing
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn motion_enabled(&self) -> bool {
        !self.no_motion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["folio"]);

        assert_eq!(config.config, None);
        assert_eq!(config.output_path, "./dist");
        assert_eq!(config.format, OutputFormat::Html);
        assert!(config.motion_enabled());
        assert!(!config.dry_run);
    }

    #[test]
    fn test_flags() {
        let config = CliConfig::parse_from([
            "folio",
            "--config",
            "me.toml",
            "--output-path",
            "site",
            "--format",
            "json",
            "--no-motion",
            "--dry-run",
        ]);

        assert_eq!(config.config, Some(PathBuf::from("me.toml")));
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert!(!config.motion_enabled());
        assert!(config.dry_run);
        assert_eq!(config.output_path(), "site");
    }

    #[test]
    fn test_output_alias_and_no_year_flag() {
        let config = CliConfig::parse_from(["folio", "--output", "public"]);
        assert_eq!(config.output_path(), "public");

        let result = CliConfig::try_parse_from(["folio", "--year", "1999"]);
        assert!(result.is_err());
    }
}
