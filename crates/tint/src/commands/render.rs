//! `tint render` and `tint inspect` command implementations.

use clap::Args;
use tint_markup::{Descriptor, StyleAttributes, TextRun};

use super::Format;
use crate::error::CliError;
use crate::output::Output;
use crate::validate::describe_issues;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markup to render.
    text: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if the markup cannot be parsed.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let runs = tint_markup::parse(&self.text)
            .ok_or_else(|| CliError::Validation("unparsable markup".to_owned()))?;

        match self.format {
            Format::Json => output.data(&serde_json::to_string_pretty(&runs)?),
            Format::Text => {
                for run in &runs {
                    output.data(&describe_run(run));
                }
            }
        }
        Ok(())
    }
}

/// Arguments for the inspect command.
#[derive(Args)]
pub(crate) struct InspectArgs {
    /// Markup to inspect.
    text: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

impl InspectArgs {
    /// Execute the inspect command.
    ///
    /// # Errors
    ///
    /// Returns an error if the markup cannot be parsed.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let runs = match tint_markup::parse_verbose(&self.text) {
            Ok(runs) => runs,
            Err(err) => {
                output.error(&format!("{}: {}", err.kind(), err.cause()));
                return Err(CliError::Validation(err.to_string()));
            }
        };

        match self.format {
            Format::Json => output.data(&serde_json::to_string_pretty(&runs)?),
            Format::Text => {
                for run in &runs {
                    output.data(&describe_run(run.run()));
                    if run.descriptor().has_issues() {
                        output.warning(&format!("    {}", describe_descriptor(run.descriptor())));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Quoted run text followed by its style.
fn describe_run(run: &TextRun) -> String {
    format!("{:?}  {}", run.text(), describe_style(run.style()))
}

/// Space-separated `name=value` pairs for the set attributes.
fn describe_style(style: &StyleAttributes) -> String {
    if style.is_empty() {
        return "(plain)".to_owned();
    }
    let mut parts = Vec::new();
    if let Some(weight) = style.font_weight() {
        parts.push(format!("font-weight={weight}"));
    }
    if let Some(size) = style.font_size() {
        parts.push(format!("font-size={size}"));
    }
    if let Some(family) = style.font_family() {
        parts.push(format!("font-family={family}"));
    }
    if let Some(decoration) = style.text_decoration() {
        parts.push(format!("text-decoration={}", decoration.as_str()));
    }
    if let Some(color) = style.color() {
        parts.push(format!("color={color}"));
    }
    if let Some(color) = style.background_color() {
        parts.push(format!("background-color={color}"));
    }
    if let Some(link) = style.link() {
        parts.push(format!("href={link}"));
    }
    parts.join(" ")
}

fn describe_descriptor(descriptor: &Descriptor) -> String {
    describe_issues(
        descriptor.unrecognized_tag.as_deref(),
        &descriptor.unrecognized_attributes,
    )
}
