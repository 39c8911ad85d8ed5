use crate::config::OutputFormat;
use crate::domain::model::{Portfolio, RenderedSite};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Where the portfolio comes from: the built-in content or a document on disk.
pub trait PortfolioSource: Send + Sync {
    fn load(&self) -> Result<Portfolio>;
    fn describe(&self) -> String;
}

#[async_trait]
pub trait SitePipeline: Send + Sync {
    async fn source(&self) -> Result<Portfolio>;
    async fn render(&self, portfolio: Portfolio) -> Result<RenderedSite>;
    async fn publish(&self, site: RenderedSite) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    fn output_format(&self) -> OutputFormat;
    fn motion_enabled(&self) -> bool;
}

impl<T: PortfolioSource + ?Sized> PortfolioSource for Box<T> {
    fn load(&self) -> Result<Portfolio> {
        (**self).load()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
