#[cfg(feature = "cli")]
pub mod cli;
pub mod defaults;
pub mod portfolio_file;

use crate::domain::ports::ConfigProvider;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
}

impl OutputFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            OutputFormat::Html => "index.html",
            OutputFormat::Json => "site.json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Html => f.write_str("html"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Output settings for a library caller that does not go through the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub output_path: String,
    pub format: OutputFormat,
    pub motion: bool,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            output_path: "./dist".to_string(),
            format: OutputFormat::Html,
            motion: true,
        }
    }
}

impl ConfigProvider for SiteSettings {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn motion_enabled(&self) -> bool {
        self.motion
    }
}
