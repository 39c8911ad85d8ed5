pub mod engine;
pub mod glyph;
pub mod html;
pub mod motion;
pub mod pipeline;
pub mod render;
pub mod tree;

pub use crate::domain::model::{Portfolio, RenderedSite};
pub use crate::domain::ports::{ConfigProvider, PortfolioSource, SitePipeline, Storage};
pub use crate::utils::error::Result;
