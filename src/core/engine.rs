use crate::core::{Portfolio, SitePipeline};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

pub struct SiteEngine<P: SitePipeline> {
    pipeline: P,
}

impl<P: SitePipeline> SiteEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Loads and validates the portfolio without rendering anything.
    pub async fn check(&self) -> Result<Portfolio> {
        let portfolio = self.pipeline.source().await?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Loading portfolio...");
        let portfolio = self.check().await?;
        tracing::debug!(
            "Loaded {} socials, {} skill groups, {} projects, {} experiences",
            portfolio.socials.len(),
            portfolio.skills.len(),
            portfolio.projects.len(),
            portfolio.experiences.len()
        );

        tracing::info!("Rendering site...");
        let site = self.pipeline.render(portfolio).await?;
        tracing::debug!("Rendered {} sections", site.section_count);

        tracing::info!("Publishing site...");
        let output_path = self.pipeline.publish(site).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults;
    use crate::core::RenderedSite;
    use crate::utils::error::SiteError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Counts render calls so tests can tell whether rendering happened.
    struct CountingPipeline {
        portfolio: Portfolio,
        renders: Arc<AtomicUsize>,
    }

    #[async_trait::async_trait]
    impl SitePipeline for CountingPipeline {
        async fn source(&self) -> Result<Portfolio> {
            Ok(self.portfolio.clone())
        }

        async fn render(&self, _portfolio: Portfolio) -> Result<RenderedSite> {
            self.renders.fetch_add(1, Ordering::SeqCst);
            Ok(RenderedSite {
                file_name: "index.html".to_string(),
                contents: String::new(),
                section_count: 6,
            })
        }

        async fn publish(&self, site: RenderedSite) -> Result<String> {
            Ok(format!("dist/{}", site.file_name))
        }
    }

    #[tokio::test]
    async fn test_run_renders_valid_portfolio() {
        let renders = Arc::new(AtomicUsize::new(0));
        let engine = SiteEngine::new(CountingPipeline {
            portfolio: defaults::portfolio(),
            renders: renders.clone(),
        });

        assert_eq!(engine.run().await.unwrap(), "dist/index.html");
        assert_eq!(renders.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalid_portfolio_never_reaches_render() {
        let mut portfolio = defaults::portfolio();
        portfolio.skills[1].category = portfolio.skills[0].category.clone();

        let renders = Arc::new(AtomicUsize::new(0));
        let engine = SiteEngine::new(CountingPipeline {
            portfolio,
            renders: renders.clone(),
        });

        let err = engine.run().await.unwrap_err();
        assert!(matches!(err, SiteError::ConfigError { .. }));
        assert_eq!(renders.load(Ordering::SeqCst), 0);
    }
}
