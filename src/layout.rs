//! Layout Scales - Geometry Constant Tables
//!
//! Two canvas sizes share one layout: `Card` for list-page covers and
//! `Compact` for thumbnails. Compact is Card with every absolute measurement
//! halved, so the avatar-to-canvas and text-box-to-canvas ratios are
//! identical across scales.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LayoutScale {
    #[default]
    Card,
    Compact,
}

/// Absolute geometry for one scale. All offsets are relative to each
/// overlay's gravity anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub canvas_width: u32,
    pub canvas_height: u32,

    /// Title text: west-anchored in the right half, fit to a bounding box.
    pub title_font_size: u32,
    pub title_x: i32,
    pub title_y: i32,
    pub title_box_width: u32,
    pub title_box_height: u32,

    /// Author name: center gravity with a negative x offset so it sits
    /// directly under the avatar.
    pub author_font_size: u32,
    pub author_x: i32,
    pub author_y: i32,
    pub author_box_width: u32,
    pub author_box_height: u32,

    /// Avatar: west-anchored, circular mask.
    pub avatar_x: i32,
    pub avatar_y: i32,
    pub avatar_size: u32,

    /// Category badge: top-left corner of the avatar, circular, filled.
    pub badge_font_size: u32,
    pub badge_x: i32,
    pub badge_y: i32,
    pub badge_size: u32,
}

const CARD: Geometry = Geometry {
    canvas_width: 2048,
    canvas_height: 1024,
    title_font_size: 164,
    title_x: 832,
    title_y: 0,
    title_box_width: 1152,
    title_box_height: 896,
    author_font_size: 62,
    author_x: -601,
    author_y: 384,
    author_box_width: 640,
    author_box_height: 512,
    avatar_x: 102,
    avatar_y: 0,
    avatar_size: 640,
    badge_font_size: 154,
    badge_x: 140,
    badge_y: 140,
    badge_size: 192,
};

const COMPACT: Geometry = Geometry {
    canvas_width: 1024,
    canvas_height: 512,
    title_font_size: 82,
    title_x: 416,
    title_y: 0,
    title_box_width: 576,
    title_box_height: 448,
    author_font_size: 31,
    author_x: -300,
    author_y: 192,
    author_box_width: 320,
    author_box_height: 256,
    avatar_x: 51,
    avatar_y: 0,
    avatar_size: 320,
    badge_font_size: 77,
    badge_x: 70,
    badge_y: 70,
    badge_size: 96,
};

impl LayoutScale {
    pub fn geometry(self) -> &'static Geometry {
        match self {
            LayoutScale::Card => &CARD,
            LayoutScale::Compact => &COMPACT,
        }
    }
}
