//! Catalog entry validation.
//!
//! Every entry goes through the verbose parser. A parse failure becomes the
//! entry's only diagnostic; otherwise the first run carrying unrecognized
//! markup is reported.

use rayon::prelude::*;
use serde::Serialize;
use tint_markup::{Descriptor, FailureKind, VerboseTextRun};

use crate::catalog::{Catalog, CatalogEntry};

/// Validation result for one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub(crate) enum Outcome {
    Valid,
    Failed {
        kind: FailureKind,
        message: String,
        cause: String,
    },
    Issues {
        unrecognized_tag: Option<String>,
        unrecognized_attributes: Vec<String>,
    },
}

impl Outcome {
    fn from_descriptor(descriptor: &Descriptor) -> Self {
        Self::Issues {
            unrecognized_tag: descriptor.unrecognized_tag.clone(),
            unrecognized_attributes: descriptor.unrecognized_attributes.clone(),
        }
    }
}

/// Validate one markup string.
pub(crate) fn validate_text(text: &str) -> Outcome {
    match tint_markup::parse_verbose(text) {
        Err(err) => Outcome::Failed {
            kind: err.kind(),
            message: err.to_string(),
            cause: err.cause().to_string(),
        },
        Ok(runs) => runs
            .iter()
            .map(VerboseTextRun::descriptor)
            .find(|descriptor| descriptor.has_issues())
            .map_or(Outcome::Valid, Outcome::from_descriptor),
    }
}

/// One-line description of unrecognized markup.
pub(crate) fn describe_issues(tag: Option<&str>, attributes: &[String]) -> String {
    let mut parts = Vec::new();
    if let Some(tag) = tag {
        parts.push(format!("unrecognized tag <{tag}>"));
    }
    if !attributes.is_empty() {
        parts.push(format!(
            "unrecognized attribute(s) {}",
            attributes.join(", ")
        ));
    }
    parts.join("; ")
}

/// Validation result for one catalog entry.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct EntryReport {
    pub(crate) file: String,
    pub(crate) key: String,
    #[serde(flatten)]
    pub(crate) outcome: Outcome,
}

/// Counts per outcome.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Summary {
    pub(crate) valid: usize,
    pub(crate) failed: usize,
    pub(crate) issues: usize,
}

impl Summary {
    pub(crate) fn from_reports(reports: &[EntryReport]) -> Self {
        reports
            .iter()
            .fold(Self::default(), |mut summary, report| {
                match report.outcome {
                    Outcome::Valid => summary.valid += 1,
                    Outcome::Failed { .. } => summary.failed += 1,
                    Outcome::Issues { .. } => summary.issues += 1,
                }
                summary
            })
    }

    pub(crate) fn total(&self) -> usize {
        self.valid + self.failed + self.issues
    }

    /// Whether the run should fail.
    pub(crate) fn is_failure(&self, fail_on_issues: bool) -> bool {
        self.failed > 0 || (fail_on_issues && self.issues > 0)
    }
}

/// Validate every entry of every catalog.
///
/// Entries are validated in parallel; reports keep catalog then entry order.
pub(crate) fn validate_catalogs(catalogs: &[Catalog]) -> Vec<EntryReport> {
    let entries: Vec<(String, &CatalogEntry)> = catalogs
        .iter()
        .flat_map(|catalog| {
            let file = catalog.path.display().to_string();
            catalog
                .entries
                .iter()
                .map(move |entry| (file.clone(), entry))
        })
        .collect();

    entries
        .into_par_iter()
        .map(|(file, entry)| EntryReport {
            file,
            key: entry.key.clone(),
            outcome: validate_text(&entry.value),
        })
        .collect()
}
