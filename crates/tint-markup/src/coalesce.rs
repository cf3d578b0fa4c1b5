//! Adjacent-run merging.

use crate::run::Coalesce;

/// Growing output sequence where no two neighbours merge.
///
/// Only the last run is ever compared, so each push is O(1) amortized.
#[derive(Debug)]
pub(crate) struct Coalescer<R> {
    runs: Vec<R>,
}

impl<R: Coalesce> Coalescer<R> {
    pub(crate) fn new() -> Self {
        Self { runs: Vec::new() }
    }

    /// Append `run`, or fold its text into the last run when they merge.
    /// Runs with empty text are dropped.
    pub(crate) fn push(&mut self, run: R) {
        if run.is_text_empty() {
            return;
        }
        if let Some(last) = self.runs.last_mut()
            && last.merges_with(&run)
        {
            last.absorb(run);
            return;
        }
        self.runs.push(run);
    }

    pub(crate) fn finish(self) -> Vec<R> {
        self.runs
    }
}
