//! Immutable style attribute bag.
//!
//! [`StyleAttributes`] values are never mutated. A new value is produced with
//! [`StyleAttributes::derive`], which overrides the fields set in a
//! [`StylePatch`] and copies the rest.

use std::hash::{DefaultHasher, Hash, Hasher};

use serde::{Serialize, Serializer};

/// Font weight applied by bold tags.
pub const BOLD_WEIGHT: i32 = 700;

/// Text decoration value.
///
/// The two well-known literals map to named variants; anything else is kept
/// verbatim so a renderer can decide what to do with it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TextDecoration {
    /// `underline`
    Underline,
    /// `line-through`
    LineThrough,
    /// Any other value, as written in the markup.
    Passthrough(String),
}

impl TextDecoration {
    /// Map a raw attribute value to a decoration. Never fails.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "underline" => Self::Underline,
            "line-through" => Self::LineThrough,
            other => Self::Passthrough(other.to_owned()),
        }
    }

    /// The decoration as it would be written in markup.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Underline => "underline",
            Self::LineThrough => "line-through",
            Self::Passthrough(value) => value,
        }
    }
}

impl Serialize for TextDecoration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The raw field tuple shared by [`StyleAttributes`] and [`StylePatch`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct StyleFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_weight: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text_decoration: Option<TextDecoration>,
}

// Font size compares bitwise so equality stays reflexive.
impl PartialEq for StyleFields {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color
            && self.background_color == other.background_color
            && self.link == other.link
            && self.font_weight == other.font_weight
            && self.font_size.map(f64::to_bits) == other.font_size.map(f64::to_bits)
            && self.font_family == other.font_family
            && self.text_decoration == other.text_decoration
    }
}

impl Eq for StyleFields {}

impl Hash for StyleFields {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.color.hash(state);
        self.background_color.hash(state);
        self.link.hash(state);
        self.font_weight.hash(state);
        self.font_size.map(f64::to_bits).hash(state);
        self.font_family.hash(state);
        self.text_decoration.hash(state);
    }
}

/// Immutable set of optional style attributes.
///
/// Equality and hashing cover every field. The hash is computed once at
/// construction.
///
/// # Example
///
/// ```
/// use tint_markup::{StyleAttributes, StylePatch};
///
/// let base = StyleAttributes::default();
/// let bold = base.derive(&StylePatch::new().font_weight(700));
/// assert!(bold.is_bold());
/// assert!(!base.is_bold());
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct StyleAttributes {
    #[serde(flatten)]
    fields: StyleFields,
    #[serde(skip)]
    hash: u64,
}

impl StyleAttributes {
    fn from_fields(fields: StyleFields) -> Self {
        let mut hasher = DefaultHasher::new();
        fields.hash(&mut hasher);
        Self {
            hash: hasher.finish(),
            fields,
        }
    }

    /// Create a new value with the patched fields overridden.
    ///
    /// Fields the patch leaves unset are copied from `self`.
    #[must_use]
    pub fn derive(&self, patch: &StylePatch) -> Self {
        if patch.is_empty() {
            return self.clone();
        }
        let base = &self.fields;
        let over = &patch.fields;
        Self::from_fields(StyleFields {
            color: over.color.clone().or_else(|| base.color.clone()),
            background_color: over
                .background_color
                .clone()
                .or_else(|| base.background_color.clone()),
            link: over.link.clone().or_else(|| base.link.clone()),
            font_weight: over.font_weight.or(base.font_weight),
            font_size: over.font_size.or(base.font_size),
            font_family: over.font_family.clone().or_else(|| base.font_family.clone()),
            text_decoration: over
                .text_decoration
                .clone()
                .or_else(|| base.text_decoration.clone()),
        })
    }

    /// Foreground color, verbatim.
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.fields.color.as_deref()
    }

    /// Background color, verbatim.
    #[must_use]
    pub fn background_color(&self) -> Option<&str> {
        self.fields.background_color.as_deref()
    }

    /// Link target, verbatim.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.fields.link.as_deref()
    }

    #[must_use]
    pub fn font_weight(&self) -> Option<i32> {
        self.fields.font_weight
    }

    #[must_use]
    pub fn font_size(&self) -> Option<f64> {
        self.fields.font_size
    }

    #[must_use]
    pub fn font_family(&self) -> Option<&str> {
        self.fields.font_family.as_deref()
    }

    #[must_use]
    pub fn text_decoration(&self) -> Option<&TextDecoration> {
        self.fields.text_decoration.as_ref()
    }

    /// Whether the font weight is exactly [`BOLD_WEIGHT`].
    #[must_use]
    pub fn is_bold(&self) -> bool {
        self.fields.font_weight == Some(BOLD_WEIGHT)
    }

    /// Whether no attribute is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Default for StyleAttributes {
    fn default() -> Self {
        Self::from_fields(StyleFields::default())
    }
}

impl PartialEq for StyleAttributes {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && self.fields == other.fields
    }
}

impl Eq for StyleAttributes {}

impl Hash for StyleAttributes {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

/// A set of field overrides for [`StyleAttributes::derive`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StylePatch {
    fields: StyleFields,
}

impl StylePatch {
    /// Create a patch that overrides nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.fields.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.fields.background_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.fields.link = Some(link.into());
        self
    }

    #[must_use]
    pub fn font_weight(mut self, weight: i32) -> Self {
        self.fields.font_weight = Some(weight);
        self
    }

    #[must_use]
    pub fn font_size(mut self, size: f64) -> Self {
        self.fields.font_size = Some(size);
        self
    }

    #[must_use]
    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.fields.font_family = Some(family.into());
        self
    }

    #[must_use]
    pub fn text_decoration(mut self, decoration: TextDecoration) -> Self {
        self.fields.text_decoration = Some(decoration);
        self
    }

    /// Whether the patch overrides no field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields == StyleFields::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample() -> StyleAttributes {
        StyleAttributes::default().derive(
            &StylePatch::new()
                .color("#ff0000")
                .font_size(14.5)
                .text_decoration(TextDecoration::Underline),
        )
    }

    #[test]
    fn test_derive_with_empty_patch_is_identity() {
        let style = sample();
        assert_eq!(style.derive(&StylePatch::new()), style);
    }

    #[test]
    fn test_derive_disjoint_patches_commute() {
        let base = sample();
        let a = StylePatch::new().font_weight(700).link("https://dart.dev");
        let b = StylePatch::new().background_color("blue").font_family("Roboto");

        let ab = base.derive(&a).derive(&b);
        let ba = base.derive(&b).derive(&a);

        assert_eq!(ab, ba);
        assert_eq!(ab.font_weight(), Some(700));
        assert_eq!(ab.font_family(), Some("Roboto"));
    }

    #[test]
    fn test_derive_overrides_and_copies() {
        let base = sample();
        let derived = base.derive(&StylePatch::new().color("green"));

        assert_eq!(derived.color(), Some("green"));
        assert_eq!(derived.font_size(), Some(14.5));
        assert_eq!(derived.text_decoration(), Some(&TextDecoration::Underline));
        // Original is untouched
        assert_eq!(base.color(), Some("#ff0000"));
    }

    #[test]
    fn test_equal_values_hash_equal() {
        let mut set = HashSet::new();
        set.insert(sample());
        set.insert(sample());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_nan_font_size_is_reflexive() {
        let style = StyleAttributes::default().derive(&StylePatch::new().font_size(f64::NAN));
        assert_eq!(style, style.clone());
    }

    #[test]
    fn test_default_is_empty() {
        assert!(StyleAttributes::default().is_empty());
        assert!(!sample().is_empty());
    }

    #[test]
    fn test_is_bold_requires_exact_weight() {
        let semi = StyleAttributes::default().derive(&StylePatch::new().font_weight(600));
        assert!(!semi.is_bold());
        assert!(semi.derive(&StylePatch::new().font_weight(BOLD_WEIGHT)).is_bold());
    }

    #[test]
    fn test_text_decoration_parse() {
        assert_eq!(TextDecoration::parse("underline"), TextDecoration::Underline);
        assert_eq!(
            TextDecoration::parse("line-through"),
            TextDecoration::LineThrough
        );
        assert_eq!(
            TextDecoration::parse("Underline"),
            TextDecoration::Passthrough("Underline".to_owned())
        );
        assert_eq!(TextDecoration::parse("overline").as_str(), "overline");
    }

    #[test]
    fn test_serialize_skips_unset_fields_and_hash() {
        let style = StyleAttributes::default().derive(
            &StylePatch::new()
                .font_weight(700)
                .text_decoration(TextDecoration::LineThrough),
        );
        let json = serde_json::to_value(&style).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "fontWeight": 700, "textDecoration": "line-through" })
        );
    }
}
