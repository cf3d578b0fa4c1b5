//! Inline markup to styled text runs.
//!
//! This crate turns strings with lightweight HTML-like tags into an ordered
//! sequence of [`TextRun`]s that any text surface can render:
//!
//! ```text
//! hello <b>dart and <u>flutter</u></b>
//! ```
//!
//! becomes three runs: `"hello "` (unstyled), `"dart and "` (bold) and
//! `"flutter"` (bold, underlined).
//!
//! # Entry points
//!
//! - [`parse`]: lenient. Returns `None` for unparsable input.
//! - [`parse_verbose`]: reports why parsing failed, and attaches a
//!   [`Descriptor`] of unrecognized tags and attributes to every run.
//!
//! Both entry points coalesce adjacent text with the same style, so no two
//! consecutive runs are style-identical.
//!
//! # Example
//!
//! ```
//! let runs = tint_markup::parse("hello <bold>dart</bold>").unwrap();
//! assert_eq!(runs.len(), 2);
//! assert_eq!(runs[1].text(), "dart");
//! assert!(runs[1].is_bold());
//!
//! assert!(tint_markup::parse("hello <b>world").is_none());
//! ```

pub mod catalog;
mod coalesce;
mod descriptor;
mod entities;
mod error;
mod parser;
mod run;
mod style;
pub mod tree;
mod walker;

use std::future::{Ready, ready};

pub use descriptor::Descriptor;
pub use error::{FailureKind, MarkupError, ParseError};
pub use parser::MarkupParser;
pub use run::{TextRun, VerboseTextRun};
pub use style::{BOLD_WEIGHT, StyleAttributes, StylePatch, TextDecoration};

/// Parse markup into styled runs, best effort.
///
/// Returns `None` when the input is malformed or has unbalanced tags.
/// `Some(vec![])` means the input was valid but had no text.
#[must_use]
pub fn parse(text: &str) -> Option<Vec<TextRun>> {
    if text.is_empty() {
        return Some(Vec::new());
    }
    match MarkupParser::new().parse(text) {
        Ok(document) => {
            let runs = walker::walk::<TextRun>(document.root());
            tracing::trace!(run_count = runs.len(), "Parsed markup");
            Some(runs)
        }
        Err(e) => {
            tracing::debug!(error = %e, kind = %e.kind(), "Discarding unparsable markup");
            None
        }
    }
}

/// Parse markup into styled runs with diagnostics.
///
/// Unknown tags and attributes never fail the call; they are recorded in
/// each run's [`Descriptor`].
///
/// # Errors
///
/// Returns [`MarkupError::DocumentMalformed`] for syntax errors and
/// [`MarkupError::InvalidTag`] for unclosed or mismatched tags. Both carry
/// the parser error as their source.
pub fn parse_verbose(text: &str) -> Result<Vec<VerboseTextRun>, MarkupError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    let document = MarkupParser::new().parse(text).map_err(|e| {
        tracing::debug!(error = %e, kind = %e.kind(), "Markup failed to parse");
        MarkupError::from(e)
    })?;
    let runs = walker::walk::<VerboseTextRun>(document.root());
    tracing::trace!(run_count = runs.len(), "Parsed markup");
    Ok(runs)
}

/// [`parse_verbose`] as an already-resolved future.
///
/// The work happens before this function returns; awaiting never suspends.
pub fn parse_verbose_deferred(text: &str) -> Ready<Result<Vec<VerboseTextRun>, MarkupError>> {
    ready(parse_verbose(text))
}
