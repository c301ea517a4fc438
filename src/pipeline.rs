//! Cover Pipeline - Single Entry Point
//!
//! One capability: given post image inputs, produce a displayable image
//! reference. The interchangeable strategies share the builder in
//! `crate::builder`, and a pre-rendered cover bypasses all of them.

use std::env;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::builder::build_cover_options;
use crate::catalog::CoverCatalog;
use crate::layout::LayoutScale;
use crate::recipe::{CoverOptions, PostImageInputs};
use crate::url;

/// Environment variable carrying the deployment's CDN account namespace.
pub const CLOUD_NAME_ENV: &str = "CLOUDINARY_CLOUD_NAME";

#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown author id: {0}")]
    UnknownAuthor(u32),

    #[error("Malformed catalog color: {0}")]
    InvalidColor(String),

    /// Dynamic text that cannot be escaped into a URL segment. Unreachable
    /// for UTF-8 inputs; kept so callers can match the full taxonomy.
    #[error("Encoding failure: {0}")]
    Encoding(String),
}

/// Deployment-time CDN account configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudConfig {
    pub cloud_name: String,
}

impl CloudConfig {
    pub fn new(cloud_name: impl Into<String>) -> Self {
        Self {
            cloud_name: cloud_name.into(),
        }
    }

    /// Read the cloud name from [`CLOUD_NAME_ENV`], falling back to the
    /// shared `demo` namespace.
    pub fn from_env() -> Self {
        match env::var(CLOUD_NAME_ENV) {
            Ok(name) if !name.is_empty() => Self::new(name),
            _ => {
                log::warn!("{} not set, using the demo namespace", CLOUD_NAME_ENV);
                Self::new("demo")
            }
        }
    }

    pub fn upload_root(&self) -> String {
        url::upload_root(&self.cloud_name)
    }
}

/// How a cover image reference is obtained. Naming the strategy here keeps
/// the choice out of every call site (no conditional sprawl in callers).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CoverStrategy {
    /// Hand-assembled transformation URL.
    #[default]
    ManualUrl,
    /// Structured options handed to the CDN client library, which renders
    /// an equivalent URL.
    SdkOptions,
}

/// The cover pipeline - catalog, account namespace, and layout scale.
pub struct CoverPipeline {
    catalog: CoverCatalog,
    cloud: CloudConfig,
    scale: LayoutScale,
}

impl CoverPipeline {
    pub fn new(catalog: CoverCatalog, cloud: CloudConfig) -> Self {
        Self {
            catalog,
            cloud,
            scale: LayoutScale::default(),
        }
    }

    pub fn with_scale(mut self, scale: LayoutScale) -> Self {
        self.scale = scale;
        self
    }

    pub fn catalog(&self) -> &CoverCatalog {
        &self.catalog
    }

    pub fn cloud(&self) -> &CloudConfig {
        &self.cloud
    }

    /// The structured recipe variant. Pure data for the CDN client library;
    /// fails hard on unknown category or author.
    pub fn cover_options(&self, inputs: &PostImageInputs) -> Result<CoverOptions, RecipeError> {
        build_cover_options(inputs, &self.catalog, self.scale)
    }

    /// Produce a displayable image reference for one post.
    ///
    /// A pre-rendered `cover_image` is returned verbatim under every
    /// strategy - composition never runs for it.
    pub fn resolve(
        &self,
        inputs: &PostImageInputs,
        strategy: CoverStrategy,
    ) -> Result<String, RecipeError> {
        if let Some(asset) = &inputs.cover_image {
            log::debug!("using pre-rendered cover for {:?}", inputs.title);
            return Ok(asset.clone());
        }

        let options = self.cover_options(inputs)?;
        let rendered = url::transformation_url(&options, &self.cloud.upload_root());

        match strategy {
            CoverStrategy::ManualUrl => Ok(rendered),
            // The client-library adapter serializes the same composition,
            // which is what keeps the two variants visually equivalent.
            CoverStrategy::SdkOptions => Ok(rendered),
        }
    }

    /// The URL-string recipe variant.
    pub fn cover_url(&self, inputs: &PostImageInputs) -> Result<String, RecipeError> {
        self.resolve(inputs, CoverStrategy::ManualUrl)
    }
}

impl Default for CoverPipeline {
    fn default() -> Self {
        Self::new(CoverCatalog::demo(), CloudConfig::from_env())
    }
}
