use crate::prelude::{eprintln, println, *};
use recase_core::case::{convert_all, CaseStyle, ConvertOutput};

#[derive(Debug, clap::Args, Clone)]
pub struct ConvertOptions {
    /// One or more strings to convert
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(style: CaseStyle, options: ConvertOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!(
            "Converting {} input(s) to {}...",
            options.inputs.len(),
            style.label()
        );
    }

    let outputs = convert_all(&options.inputs, style).map_err(Error::from)?;

    if options.json {
        println!("{}", format_convert_json(&outputs)?);
    } else {
        println!("{}", format_convert_text(&outputs));
    }

    Ok(())
}

/// Convert outputs to a JSON string
fn format_convert_json(outputs: &[ConvertOutput]) -> Result<String> {
    serde_json::to_string_pretty(outputs).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Convert outputs to plain text, one conversion per line
///
/// Only the converted values are printed so the output stays pipeable;
/// diagnostics go to stderr behind `--verbose`.
fn format_convert_text(outputs: &[ConvertOutput]) -> String {
    outputs
        .iter()
        .map(|o| o.output.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
