//! CoverGen Core - Deterministic Blog Cover Recipes
//!
//! # The Ground Rules (Non-Negotiable)
//! 1. Recipes Are Pure Data
//! 2. Same Inputs, Same Recipe
//! 3. Lookup Misses Fail Loud
//! 4. Both Variants, One Composition
//! 5. Catalogs Are Injected, Never Global

pub mod builder;
pub mod catalog;
pub mod color;
pub mod layout;
pub mod pipeline;
pub mod posts;
pub mod recipe;
pub mod url;

pub use builder::build_cover_options;
pub use catalog::{AuthorDetails, CategoryStyle, CoverCatalog, DEFAULT_CATEGORY};
pub use color::Rgb;
pub use layout::LayoutScale;
pub use pipeline::{CloudConfig, CoverPipeline, CoverStrategy, RecipeError, CLOUD_NAME_ENV};
pub use recipe::{CoverOptions, Overlay, PostImageInputs};
