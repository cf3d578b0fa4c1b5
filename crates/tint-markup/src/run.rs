//! Styled text runs produced by the façades.

use serde::Serialize;

use crate::descriptor::Descriptor;
use crate::style::StyleAttributes;

/// A span of non-empty text with one style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextRun {
    text: String,
    style: StyleAttributes,
}

impl TextRun {
    /// Create a run. Callers guarantee `text` is non-empty.
    #[must_use]
    pub fn new(text: impl Into<String>, style: StyleAttributes) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn style(&self) -> &StyleAttributes {
        &self.style
    }

    /// Shorthand for `self.style().is_bold()`.
    #[must_use]
    pub fn is_bold(&self) -> bool {
        self.style.is_bold()
    }
}

/// A [`TextRun`] with the diagnostics in effect for its text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerboseTextRun {
    #[serde(flatten)]
    run: TextRun,
    descriptor: Descriptor,
}

impl VerboseTextRun {
    #[must_use]
    pub fn new(run: TextRun, descriptor: Descriptor) -> Self {
        Self { run, descriptor }
    }

    #[must_use]
    pub fn run(&self) -> &TextRun {
        &self.run
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.run.text()
    }

    #[must_use]
    pub fn style(&self) -> &StyleAttributes {
        self.run.style()
    }

    #[must_use]
    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }
}

/// Runs the coalescer can merge.
pub(crate) trait Coalesce {
    /// Whether `next` may be folded into `self`.
    fn merges_with(&self, next: &Self) -> bool;

    /// Fold the text of a run that [`Coalesce::merges_with`] accepted.
    fn absorb(&mut self, next: Self);

    fn is_text_empty(&self) -> bool;
}

impl Coalesce for TextRun {
    fn merges_with(&self, next: &Self) -> bool {
        self.style == next.style
    }

    fn absorb(&mut self, next: Self) {
        self.text.push_str(&next.text);
    }

    fn is_text_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Coalesce for VerboseTextRun {
    fn merges_with(&self, next: &Self) -> bool {
        self.run.merges_with(&next.run) && self.descriptor == next.descriptor
    }

    fn absorb(&mut self, next: Self) {
        self.run.absorb(next.run);
    }

    fn is_text_empty(&self) -> bool {
        self.run.is_text_empty()
    }
}
