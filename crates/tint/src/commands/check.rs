//! `tint check` command implementation.

use std::path::PathBuf;

use clap::Args;
use tint_config::{CliSettings, Config};

use super::Format;
use crate::catalog::Catalog;
use crate::error::CliError;
use crate::output::Output;
use crate::validate::{EntryReport, Outcome, Summary, describe_issues, validate_catalogs};

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Catalog files to check (default: `catalogs.include` from tint.toml).
    files: Vec<PathBuf>,

    /// Path to configuration file (default: auto-discover tint.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Report unrecognized tags and attributes without failing.
    #[arg(long)]
    no_fail_on_issues: bool,

    /// Also check `@`-prefixed keys.
    #[arg(long)]
    include_metadata: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if catalogs cannot be loaded or any entry fails validation.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            fail_on_issues: self.no_fail_on_issues.then_some(false),
            skip_metadata: self.include_metadata.then_some(false),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let paths = if self.files.is_empty() {
            config.catalogs_resolved.expand()?
        } else {
            self.files
        };
        if paths.is_empty() {
            output.info("\nAdd catalog patterns to your tint.toml:");
            output.info("\n[catalogs]");
            output.info(r#"include = ["l10n/*.arb"]"#);
            return Err(CliError::Validation("no catalog files to check".to_owned()));
        }

        let catalogs = paths
            .iter()
            .map(|path| Catalog::load(path, config.catalogs_resolved.skip_metadata))
            .collect::<Result<Vec<_>, _>>()?;

        let reports = validate_catalogs(&catalogs);
        let summary = Summary::from_reports(&reports);

        match self.format {
            Format::Text => print_text_report(output, &reports, &summary, catalogs.len()),
            Format::Json => output.data(&serde_json::to_string_pretty(&reports)?),
        }

        if summary.is_failure(config.validate.fail_on_issues) {
            return Err(CliError::Validation(format!(
                "{} of {} entries did not pass",
                summary.failed + summary.issues,
                summary.total()
            )));
        }
        Ok(())
    }
}

fn print_text_report(output: &Output, reports: &[EntryReport], summary: &Summary, files: usize) {
    for report in reports {
        match &report.outcome {
            Outcome::Valid => {}
            Outcome::Failed { kind, cause, .. } => {
                output.error(&format!("{}: {}: {kind}: {cause}", report.file, report.key));
            }
            Outcome::Issues {
                unrecognized_tag,
                unrecognized_attributes,
            } => {
                output.warning(&format!(
                    "{}: {}: {}",
                    report.file,
                    report.key,
                    describe_issues(unrecognized_tag.as_deref(), unrecognized_attributes)
                ));
            }
        }
    }

    output.separator();
    output.highlight(&format!(
        "Checked {} entries in {files} catalog(s)",
        summary.total()
    ));
    if summary.failed == 0 && summary.issues == 0 {
        output.success("All entries valid.");
    } else {
        output.info(&format!(
            "{} valid, {} with issues, {} failed",
            summary.valid, summary.issues, summary.failed
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_with_explicit_files() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("tint.toml");
        std::fs::write(&config_path, "").unwrap();
        let catalog = dir.path().join("app_en.arb");
        std::fs::write(&catalog, r#"{"ok": "<b>fine</b>", "@ok": {}}"#).unwrap();

        let args = CheckArgs {
            files: vec![catalog],
            config: Some(config_path),
            format: Format::Json,
            no_fail_on_issues: false,
            include_metadata: false,
        };
        args.execute(&Output::new()).unwrap();
    }

    #[test]
    fn test_execute_fails_on_broken_entry() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("tint.toml");
        std::fs::write(&config_path, "[catalogs]\ninclude = [\"*.arb\"]\n").unwrap();
        std::fs::write(
            dir.path().join("app_en.arb"),
            r#"{"broken": "<b>unclosed"}"#,
        )
        .unwrap();

        let args = CheckArgs {
            files: Vec::new(),
            config: Some(config_path),
            format: Format::Text,
            no_fail_on_issues: true,
            include_metadata: false,
        };
        let err = args.execute(&Output::new()).unwrap_err();
        assert!(matches!(err, CliError::Validation(_)));
    }

    #[test]
    fn test_execute_issues_pass_when_not_failing_on_issues() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("tint.toml");
        std::fs::write(&config_path, "[validate]\nfail_on_issues = false\n").unwrap();
        let catalog = dir.path().join("app_en.arb");
        std::fs::write(&catalog, r#"{"odd": "<hi>there</hi>"}"#).unwrap();

        let args = CheckArgs {
            files: vec![catalog],
            config: Some(config_path),
            format: Format::Text,
            no_fail_on_issues: false,
            include_metadata: false,
        };
        args.execute(&Output::new()).unwrap();
    }
}
