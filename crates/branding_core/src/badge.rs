//! Badge CSS and markup substitution.
//!
//! Both blocks are located with regular expressions, not a parser. The CSS
//! rule body must not contain nested braces, and the markup span ends at the
//! first `</div>` after the opening tag even if another `<div>` opened in
//! between. Only the first match of each pattern is replaced.

use crate::config::BADGE_CLASS;
use crate::image::EncodedImage;
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// Replacement badge rule
pub const BADGE_CSS: &str = ".branding-badge {
      position: absolute;
      top: 15px;
      right: 15px;
      z-index: 50;
      opacity: 0.9;
      width: 64px;
    }";

/// `.branding-badge { ... }` with a brace-free body
static CSS_RULE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\.{}\s*\{{[^}}]+\}}", regex::escape(BADGE_CLASS)))
        .expect("badge CSS pattern is valid")
});

/// `<div class="branding-badge">` up to the nearest `</div>`
static HTML_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r#"<div class="{}">[\s\S]*?</div>"#,
        regex::escape(BADGE_CLASS)
    ))
    .expect("badge markup pattern is valid")
});

/// Replacement badge markup embedding `image`
#[must_use]
pub fn badge_html(image: &EncodedImage) -> String {
    format!(
        r#"<div class="branding-badge">
      <img src="{}" alt="Thank Donors" style="width: 100%; height: auto;" />
    </div>"#,
        image.data_uri()
    )
}

/// Result of one substitution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    /// Text after substitution
    pub content: String,
    /// Byte range of the replaced span in the input, if one matched
    pub span: Option<Range<usize>>,
}

impl Splice {
    /// Check if a block was found and replaced
    #[must_use]
    pub fn is_replaced(&self) -> bool {
        self.span.is_some()
    }
}

/// Result of both substitutions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpliceOutcome {
    /// Text after both substitutions
    pub content: String,
    /// Whether the CSS rule was replaced
    pub css_replaced: bool,
    /// Whether the markup block was replaced
    pub html_replaced: bool,
}

/// Replace the first badge CSS rule
#[must_use]
pub fn replace_css(text: &str) -> Splice {
    splice_first(&CSS_RULE, text, BADGE_CSS)
}

/// Replace the first badge markup block
#[must_use]
pub fn replace_html(text: &str, image: &EncodedImage) -> Splice {
    splice_first(&HTML_BLOCK, text, &badge_html(image))
}

/// Apply the CSS then the markup substitution
#[must_use]
pub fn apply(text: &str, image: &EncodedImage) -> SpliceOutcome {
    let css = replace_css(text);
    match &css.span {
        Some(span) => tracing::debug!(start = span.start, end = span.end, "replaced badge CSS"),
        None => tracing::debug!("no badge CSS rule found"),
    }

    let html = replace_html(&css.content, image);
    match &html.span {
        Some(span) => tracing::debug!(start = span.start, end = span.end, "replaced badge markup"),
        None => tracing::debug!("no badge markup found"),
    }

    SpliceOutcome {
        css_replaced: css.is_replaced(),
        html_replaced: html.is_replaced(),
        content: html.content,
    }
}

// Inserts `replacement` literally; no `$` group expansion.
fn splice_first(pattern: &Regex, text: &str, replacement: &str) -> Splice {
    let Some(found) = pattern.find(text) else {
        return Splice {
            content: text.to_string(),
            span: None,
        };
    };

    let mut content = String::with_capacity(text.len() - found.len() + replacement.len());
    content.push_str(&text[..found.start()]);
    content.push_str(replacement);
    content.push_str(&text[found.end()..]);

    Splice {
        content,
        span: Some(found.range()),
    }
}
