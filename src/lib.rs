pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::storage::LocalStorage;
pub use crate::config::defaults::{portfolio as default_portfolio, BuiltinSource};
pub use crate::config::portfolio_file::{FileSource, PortfolioFile};
pub use crate::config::{OutputFormat, SiteSettings};
pub use crate::core::{
    engine::SiteEngine,
    html::to_document,
    pipeline::StaticSitePipeline,
    render::{render, render_now, RenderContext},
    tree::VisualTree,
};
pub use crate::domain::model::Portfolio;
pub use crate::utils::error::{Result, SiteError};
