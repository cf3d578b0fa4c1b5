//! Static tag and attribute tables.
//!
//! Both tables are `'static` data; lookups never allocate. Tag names and
//! attribute names match ASCII case-insensitively.

use crate::style::{BOLD_WEIGHT, StylePatch, TextDecoration};

/// Name of the synthetic element wrapping every fragment.
pub const ROOT_TAG: &str = "root";

/// Style attribute settable from markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleAttribute {
    Color,
    BackgroundColor,
    FontWeight,
    FontSize,
    FontFamily,
    TextDecoration,
    Link,
}

impl StyleAttribute {
    /// Spellings accepted in markup.
    #[must_use]
    pub fn names(self) -> &'static [&'static str] {
        match self {
            Self::Color => &["color"],
            Self::BackgroundColor => &["background-color", "backgroundColor"],
            Self::FontWeight => &["font-weight", "fontWeight"],
            Self::FontSize => &["font-size", "fontSize"],
            Self::FontFamily => &["font-family", "fontFamily"],
            Self::TextDecoration => &["text-decoration", "textDecoration"],
            Self::Link => &["href"],
        }
    }

    fn matches(self, name: &str) -> bool {
        self.names()
            .iter()
            .any(|alias| alias.eq_ignore_ascii_case(name))
    }

    /// Apply a raw attribute value to `patch`.
    ///
    /// Numeric values that do not parse leave the patch unchanged.
    #[must_use]
    pub fn apply(self, patch: StylePatch, value: &str) -> StylePatch {
        match self {
            Self::Color => patch.color(value),
            Self::BackgroundColor => patch.background_color(value),
            Self::FontFamily => patch.font_family(value),
            Self::Link => patch.link(value),
            Self::TextDecoration => patch.text_decoration(TextDecoration::parse(value)),
            Self::FontWeight => match value.parse::<i32>() {
                Ok(weight) => patch.font_weight(weight),
                Err(_) => patch,
            },
            Self::FontSize => match value.parse::<f64>() {
                Ok(size) if size.is_finite() => patch.font_size(size),
                _ => patch,
            },
        }
    }
}

const SPAN_ATTRIBUTES: &[StyleAttribute] = &[
    StyleAttribute::Color,
    StyleAttribute::BackgroundColor,
    StyleAttribute::FontWeight,
    StyleAttribute::FontSize,
    StyleAttribute::FontFamily,
    StyleAttribute::TextDecoration,
    StyleAttribute::Link,
];

/// Recognized element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Bold,
    Underline,
    Strike,
    Italic,
    Anchor,
    Span,
    Root,
}

/// Every recognized tag with its spellings.
const TAGS: &[(Tag, &[&str])] = &[
    (Tag::Bold, &["b", "bold", "strong"]),
    (Tag::Underline, &["u", "underline"]),
    (Tag::Strike, &["s", "strike", "strikethrough", "del"]),
    (Tag::Italic, &["i", "italic", "em"]),
    (Tag::Anchor, &["a"]),
    (Tag::Span, &["span", "font"]),
    (Tag::Root, &[ROOT_TAG]),
];

impl Tag {
    /// Resolve an element name. `None` means the element is unknown and
    /// acts as a transparent container.
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        TAGS.iter()
            .find(|(_, names)| names.iter().any(|n| n.eq_ignore_ascii_case(name)))
            .map(|(tag, _)| *tag)
    }

    /// Style change applied regardless of attributes.
    #[must_use]
    pub fn implicit_patch(self) -> StylePatch {
        match self {
            Self::Bold => StylePatch::new().font_weight(BOLD_WEIGHT),
            Self::Underline => StylePatch::new().text_decoration(TextDecoration::Underline),
            Self::Strike => StylePatch::new().text_decoration(TextDecoration::LineThrough),
            Self::Italic | Self::Anchor | Self::Span | Self::Root => StylePatch::new(),
        }
    }

    #[must_use]
    pub fn allowed_attributes(self) -> &'static [StyleAttribute] {
        match self {
            Self::Anchor => &[StyleAttribute::Link],
            Self::Span => SPAN_ATTRIBUTES,
            Self::Bold | Self::Underline | Self::Strike | Self::Italic | Self::Root => &[],
        }
    }

    /// Resolve an attribute name against the ones this tag allows.
    #[must_use]
    pub fn attribute(self, name: &str) -> Option<StyleAttribute> {
        self.allowed_attributes()
            .iter()
            .copied()
            .find(|attribute| attribute.matches(name))
    }
}
