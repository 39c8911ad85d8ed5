use crate::config::OutputFormat;
use crate::core::html;
use crate::core::motion::MotionTheme;
use crate::core::render::{current_year, render, RenderContext};
use crate::core::{ConfigProvider, Portfolio, PortfolioSource, RenderedSite, SitePipeline, Storage};
use crate::utils::error::Result;
use std::path::Path;

pub struct StaticSitePipeline<S: Storage, C: ConfigProvider, P: PortfolioSource> {
    storage: S,
    config: C,
    source: P,
}

impl<S: Storage, C: ConfigProvider, P: PortfolioSource> StaticSitePipeline<S, C, P> {
    pub fn new(storage: S, config: C, source: P) -> Self {
        Self {
            storage,
            config,
            source,
        }
    }

    /// Footer year is always the current calendar year.
    pub fn render_context(&self) -> RenderContext {
        RenderContext::new(
            current_year(),
            MotionTheme::from_flag(self.config.motion_enabled()),
        )
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, P: PortfolioSource> SitePipeline for StaticSitePipeline<S, C, P> {
    async fn source(&self) -> Result<Portfolio> {
        tracing::debug!("Loading portfolio from {}", self.source.describe());
        self.source.load()
    }

    async fn render(&self, portfolio: Portfolio) -> Result<RenderedSite> {
        let ctx = self.render_context();
        tracing::debug!(
            "Rendering with year {} (motion {})",
            ctx.year,
            if ctx.motion.is_enabled() { "on" } else { "off" }
        );

        let tree = render(&portfolio, &ctx);
        let format = self.config.output_format();
        let contents = match format {
            OutputFormat::Html => html::to_document(&tree),
            OutputFormat::Json => serde_json::to_string_pretty(&tree)?,
        };

        Ok(RenderedSite {
            file_name: format.file_name().to_string(),
            contents,
            section_count: tree.sections.len(),
        })
    }

    async fn publish(&self, site: RenderedSite) -> Result<String> {
        tracing::debug!(
            "Writing {} ({} bytes)",
            site.file_name,
            site.contents.len()
        );
        self.storage
            .write_file(&site.file_name, site.contents.as_bytes())
            .await?;

        Ok(Path::new(self.config.output_path())
            .join(&site.file_name)
            .display()
            .to_string())
    }
}
