//! Transformation-URL Assembly
//!
//! Renders a `CoverOptions` value as the slash-delimited instruction path the
//! image CDN fetches directly. Segment order is significant - each layer
//! stacks on the previous one - and the background asset id is always the
//! terminal segment.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::recipe::{ColorizeEffect, CoverOptions, Overlay, OverlaySource, TextStyle};

/// Characters left verbatim by JS `encodeURIComponent`; everything else in a
/// dynamic segment is percent-encoded, including `/` and `,` which the CDN
/// treats as delimiters.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode dynamic text for use inside an instruction segment.
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}

/// Decode one encoded segment back to text. Lossy only for invalid UTF-8,
/// which [`encode_component`] never produces.
pub fn decode_component(text: &str) -> String {
    percent_decode_str(text).decode_utf8_lossy().into_owned()
}

/// Escape an overlay asset id for a `l_` directive: every `/` becomes `:`
/// (the slash is the segment delimiter), then the result is percent-encoded.
pub fn escape_overlay_id(public_id: &str) -> String {
    encode_component(&public_id.replace('/', ":"))
}

/// Base of every delivery URL for one account namespace.
pub fn upload_root(cloud_name: &str) -> String {
    format!("https://res.cloudinary.com/{}/image/upload", cloud_name)
}

/// Render the full transformation URL: base effects, one segment per
/// overlay in stacking order, then the background asset id verbatim.
pub fn transformation_url(options: &CoverOptions, root: &str) -> String {
    let mut segments: Vec<String> = options.effects.iter().map(colorize_segment).collect();
    segments.extend(options.overlays.iter().map(overlay_segment));

    format!("{}/{}/{}", root, segments.join("/"), options.src)
}

fn colorize_segment(effect: &ColorizeEffect) -> String {
    format!("e_colorize:{},co_{}", effect.colorize, effect.color)
}

/// One comma-joined instruction segment for an overlay. Directive order
/// within a segment is canonical here; only segment order carries meaning.
pub fn overlay_segment(overlay: &Overlay) -> String {
    let mut directives = vec![
        match &overlay.source {
            OverlaySource::Image { public_id } => format!("l_{}", escape_overlay_id(public_id)),
            OverlaySource::Text { text } => format!(
                "l_text:{}:{}",
                font_spec(text),
                encode_component(&text.text)
            ),
        },
        format!("g_{}", overlay.position.gravity.as_directive()),
    ];

    if let OverlaySource::Text { text } = &overlay.source {
        directives.push(format!("co_rgb:{}", text.color.trim_start_matches('#')));
    }

    directives.push(format!("x_{}", overlay.position.x));
    directives.push(format!("y_{}", overlay.position.y));

    for effect in &overlay.effects {
        directives.push(format!("w_{}", effect.width));
        directives.push(format!("h_{}", effect.height));
        directives.push(format!("c_{}", effect.crop.as_directive()));
        if effect.radius.is_some() {
            directives.push("r_max".into());
        }
        if let Some(background) = &effect.background {
            directives.push(format!("b_{}", background));
        }
    }

    if let OverlaySource::Text { text } = &overlay.source {
        if text.no_trim {
            directives.push("fl_text_no_trim".into());
        }
    }

    directives.join(",")
}

/// Font directive for a text overlay, e.g. `arial_164`, `arial_62_center`,
/// `arial_154_bold_center`.
fn font_spec(text: &TextStyle) -> String {
    let mut spec = format!("{}_{}", text.font_family.to_lowercase(), text.font_size);
    if let Some(weight) = &text.font_weight {
        spec.push('_');
        spec.push_str(weight);
    }
    if let Some(align) = &text.text_align {
        spec.push('_');
        spec.push_str(align);
    }
    spec
}
