//! Composition Data Model
//!
//! Typed descriptors for one composed cover image. `CoverOptions` serializes
//! to the exact camelCase shape the CDN SDK consumes; the URL variant renders
//! the same value through `url::transformation_url`.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Fraction the category color is darkened by for title/author text.
pub const TITLE_DARKEN: f64 = 0.2;
/// Fraction the category color is lightened by for the badge symbol.
pub const SYMBOL_LIGHTEN: f64 = 0.3;

/// Per-post inputs to the recipe builder. Ephemeral - constructed per render.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostImageInputs {
    pub title: String,
    /// Absent means the documented default category, not an error.
    #[serde(default)]
    pub category: Option<String>,
    pub author: u32,
    /// Pre-rendered cover asset. When set, composition is bypassed entirely.
    #[serde(default)]
    pub cover_image: Option<String>,
}

impl PostImageInputs {
    pub fn new(title: impl Into<String>, author: u32) -> Self {
        Self {
            title: title.into(),
            category: None,
            author,
            cover_image: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_cover_image(mut self, asset: impl Into<String>) -> Self {
        self.cover_image = Some(asset.into());
        self
    }
}

/// Anchor point an overlay is positioned relative to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gravity {
    West,
    Center,
    NorthWest,
}

impl Gravity {
    pub fn as_directive(self) -> &'static str {
        match self {
            Gravity::West => "west",
            Gravity::Center => "center",
            Gravity::NorthWest => "north_west",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Position {
    pub gravity: Gravity,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Crop {
    Fit,
    Scale,
}

impl Crop {
    pub fn as_directive(self) -> &'static str {
        match self {
            Crop::Fit => "fit",
            Crop::Scale => "scale",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Radius {
    /// Circular mask.
    Max,
}

/// Sizing and masking applied to a single overlay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Effect {
    pub width: u32,
    pub height: u32,
    pub crop: Crop,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<Radius>,
    /// Fill behind the overlay, e.g. `rgb:ff9900`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub text: String,
    pub font_size: u32,
    /// `#`-prefixed hex, matching the SDK convention.
    pub color: String,
    pub font_family: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    /// Keep glyph whitespace instead of auto-trimming (badge symbols are
    /// padded with spaces on purpose).
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub no_trim: bool,
}

/// The payload of one overlay: either a CDN image asset or styled text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum OverlaySource {
    #[serde(rename_all = "camelCase")]
    Image { public_id: String },
    Text { text: TextStyle },
}

/// One layer composited onto the background at a position with effects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Overlay {
    #[serde(flatten)]
    pub source: OverlaySource,
    pub position: Position,
    pub effects: Vec<Effect>,
}

impl Overlay {
    pub fn is_text(&self) -> bool {
        matches!(self.source, OverlaySource::Text { .. })
    }
}

/// Base-image tint applied before any overlay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ColorizeEffect {
    /// Colorize strength in percent.
    pub colorize: u8,
    /// `rgb:`-prefixed hex.
    pub color: String,
}

/// The structured recipe variant: background asset, base effects, and the
/// overlay stack in bottom-to-top order. Pure data, no hidden state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CoverOptions {
    pub width: u32,
    pub height: u32,
    pub overlays: Vec<Overlay>,
    pub alt: String,
    pub sizes: String,
    /// Public id of the background asset.
    pub src: String,
    pub effects: Vec<ColorizeEffect>,
}

/// The three colors one category resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverPalette {
    pub base: Rgb,
    pub title: Rgb,
    pub symbol: Rgb,
}

impl CoverPalette {
    /// Derive the palette from a category's base color. `None` if the
    /// catalog entry holds a malformed hex string.
    pub fn from_base_hex(hex: &str) -> Option<Self> {
        let base = Rgb::from_hex(hex)?;
        Some(Self {
            base,
            title: base.darken(TITLE_DARKEN),
            symbol: base.lighten(SYMBOL_LIGHTEN),
        })
    }
}
