//! Recipe Builder - Single Composition Step
//!
//! Both output variants (transformation URL and SDK options) are
//! serializations of the one `CoverOptions` value built here, so they cannot
//! drift apart: same four overlays, same stacking order, same derived colors.

use crate::catalog::{CoverCatalog, DEFAULT_CATEGORY};
use crate::layout::LayoutScale;
use crate::pipeline::RecipeError;
use crate::recipe::{
    ColorizeEffect, CoverOptions, CoverPalette, Crop, Effect, Gravity, Overlay, OverlaySource,
    Position, PostImageInputs, Radius, TextStyle,
};

/// Colorize strength applied to the background, in percent.
pub const COLORIZE_STRENGTH: u8 = 20;

const FONT_FAMILY: &str = "Arial";

/// Build the structured recipe for one post. Fails hard on an unknown
/// category tag or author id; a broken cover is a content-authoring bug that
/// must surface, not render silently.
pub fn build_cover_options(
    inputs: &PostImageInputs,
    catalog: &CoverCatalog,
    scale: LayoutScale,
) -> Result<CoverOptions, RecipeError> {
    let tag = inputs.category.as_deref().unwrap_or(DEFAULT_CATEGORY);
    let style = catalog
        .get_category(Some(tag))
        .ok_or_else(|| RecipeError::UnknownCategory(tag.to_string()))?;
    let author = catalog
        .get_author(inputs.author)
        .ok_or(RecipeError::UnknownAuthor(inputs.author))?;
    let palette = CoverPalette::from_base_hex(&style.color)
        .ok_or_else(|| RecipeError::InvalidColor(style.color.clone()))?;

    let g = scale.geometry();
    let title_color = format!("#{}", palette.title.to_hex());

    // Stacking order is significant: each overlay composites onto the
    // previous one. Avatar first, title last.
    let avatar = Overlay {
        source: OverlaySource::Image {
            public_id: author.public_id.clone(),
        },
        position: Position {
            gravity: Gravity::West,
            x: g.avatar_x,
            y: g.avatar_y,
        },
        effects: vec![Effect {
            width: g.avatar_size,
            height: g.avatar_size,
            crop: Crop::Fit,
            radius: Some(Radius::Max),
            background: None,
        }],
    };

    let author_name = Overlay {
        source: OverlaySource::Text {
            text: TextStyle {
                text: author.name.clone(),
                font_size: g.author_font_size,
                color: title_color.clone(),
                font_family: FONT_FAMILY.into(),
                font_weight: None,
                text_align: Some("center".into()),
                no_trim: false,
            },
        },
        position: Position {
            gravity: Gravity::Center,
            x: g.author_x,
            y: g.author_y,
        },
        effects: vec![Effect {
            width: g.author_box_width,
            height: g.author_box_height,
            crop: Crop::Fit,
            radius: None,
            background: None,
        }],
    };

    let badge = Overlay {
        source: OverlaySource::Text {
            text: TextStyle {
                text: style.symbol.clone(),
                font_size: g.badge_font_size,
                color: format!("#{}", palette.symbol.to_hex()),
                font_family: FONT_FAMILY.into(),
                font_weight: Some("bold".into()),
                text_align: Some("center".into()),
                no_trim: true,
            },
        },
        position: Position {
            gravity: Gravity::NorthWest,
            x: g.badge_x,
            y: g.badge_y,
        },
        effects: vec![Effect {
            width: g.badge_size,
            height: g.badge_size,
            crop: Crop::Scale,
            radius: Some(Radius::Max),
            background: Some(format!("rgb:{}", style.color)),
        }],
    };

    let title = Overlay {
        source: OverlaySource::Text {
            text: TextStyle {
                text: inputs.title.clone(),
                font_size: g.title_font_size,
                color: title_color,
                font_family: FONT_FAMILY.into(),
                font_weight: None,
                text_align: None,
                no_trim: false,
            },
        },
        position: Position {
            gravity: Gravity::West,
            x: g.title_x,
            y: g.title_y,
        },
        effects: vec![Effect {
            width: g.title_box_width,
            height: g.title_box_height,
            crop: Crop::Fit,
            radius: None,
            background: None,
        }],
    };

    Ok(CoverOptions {
        width: g.canvas_width,
        height: g.canvas_height,
        overlays: vec![avatar, author_name, badge, title],
        alt: inputs.title.clone(),
        sizes: "100vw".into(),
        src: catalog.background_id.clone(),
        effects: vec![ColorizeEffect {
            colorize: COLORIZE_STRENGTH,
            color: format!("rgb:{}", style.color),
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_stacking_order() {
        let catalog = CoverCatalog::demo();
        let inputs = PostImageInputs::new("Stacking", 1).with_category("dev");
        let options = build_cover_options(&inputs, &catalog, LayoutScale::Card).unwrap();

        assert_eq!(options.overlays.len(), 4);
        assert!(!options.overlays[0].is_text(), "avatar composites first");
        assert!(options.overlays[1].is_text());
        assert!(options.overlays[2].is_text());
        assert!(options.overlays[3].is_text(), "title composites last");
    }

    #[test]
    fn test_title_and_author_share_color() {
        let catalog = CoverCatalog::demo();
        let inputs = PostImageInputs::new("Colors", 2).with_category("life");
        let options = build_cover_options(&inputs, &catalog, LayoutScale::Card).unwrap();

        let text_color = |overlay: &Overlay| match &overlay.source {
            OverlaySource::Text { text } => text.color.clone(),
            OverlaySource::Image { .. } => panic!("expected text overlay"),
        };

        assert_eq!(
            text_color(&options.overlays[1]),
            text_color(&options.overlays[3])
        );
        assert_ne!(
            text_color(&options.overlays[2]),
            text_color(&options.overlays[3])
        );
    }

    #[test]
    fn test_unknown_category_is_hard_error() {
        let catalog = CoverCatalog::demo();
        let inputs = PostImageInputs::new("Oops", 1).with_category("sports");
        let err = build_cover_options(&inputs, &catalog, LayoutScale::Card).unwrap_err();
        assert!(matches!(err, RecipeError::UnknownCategory(tag) if tag == "sports"));
    }

    #[test]
    fn test_malformed_catalog_color_is_hard_error() {
        let mut catalog = CoverCatalog::new("bg");
        catalog.register_category(
            "dev",
            crate::catalog::CategoryStyle {
                color: "zzzzzz".into(),
                symbol: " ? ".into(),
            },
        );
        catalog.register_author(
            1,
            crate::catalog::AuthorDetails {
                name: "A".into(),
                public_id: "a".into(),
            },
        );

        let inputs = PostImageInputs::new("Oops", 1);
        let err = build_cover_options(&inputs, &catalog, LayoutScale::Card).unwrap_err();
        assert!(matches!(err, RecipeError::InvalidColor(_)));
    }
}
