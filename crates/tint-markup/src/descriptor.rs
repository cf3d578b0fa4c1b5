//! Non-fatal diagnostics attached to verbose runs.

use serde::Serialize;

/// Unrecognized markup in effect for a run.
///
/// `unrecognized_tag` holds only the innermost element's status: a recognized
/// element nested in an unknown one clears it. `unrecognized_attributes`
/// accumulates along the whole ancestor chain, in document order and without
/// deduplication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Descriptor {
    /// Name of the unknown element, as written.
    pub unrecognized_tag: Option<String>,
    /// Attribute names not allowed on the element that carried them.
    pub unrecognized_attributes: Vec<String>,
}

impl Descriptor {
    /// Create an empty descriptor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any unrecognized construct was recorded.
    #[must_use]
    pub fn has_issues(&self) -> bool {
        self.unrecognized_tag.is_some() || !self.unrecognized_attributes.is_empty()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.has_issues()
    }

    /// Descriptor for an element's subtree.
    ///
    /// The tag slot is replaced by the element's own status; the attribute
    /// names are appended to the inherited ones.
    #[must_use]
    pub(crate) fn descend(&self, unrecognized_tag: Option<&str>, attributes: Vec<String>) -> Self {
        let mut unrecognized_attributes = self.unrecognized_attributes.clone();
        unrecognized_attributes.extend(attributes);
        Self {
            unrecognized_tag: unrecognized_tag.map(str::to_owned),
            unrecognized_attributes,
        }
    }
}
