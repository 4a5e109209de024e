use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use recase_core::case::{convert, CaseStyle};

/// One doc-style example input per style, shown by `recase styles`.
const STYLE_EXAMPLES: [(CaseStyle, &str); 3] = [
    (CaseStyle::Camel, "first name"),
    (CaseStyle::Kebab, "Hello World"),
    (CaseStyle::Dot, "First-Name"),
];

#[derive(Debug, clap::Args, Clone)]
pub struct StylesOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct StyleInfo {
    pub style: CaseStyle,
    pub label: &'static str,
    pub example_input: &'static str,
    pub example_output: String,
}

pub fn run(options: StylesOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Listing {} supported case styles...", STYLE_EXAMPLES.len());
    }

    let infos = style_infos()?;

    if options.json {
        println!("{}", format_styles_json(&infos)?);
    } else {
        println!("{}", "SUPPORTED CASE STYLES".bright_cyan().bold());
        println!();

        let mut table = new_table();
        table.add_row(prettytable::row!["Style", "Command", "Example"]);
        for info in &infos {
            table.add_row(prettytable::row![
                info.label,
                format!("recase {}", command_name(info.style)),
                format!("{} -> {}", info.example_input, info.example_output),
            ]);
        }
        table.printstd();
    }

    Ok(())
}

/// Build the style listing by running each example through the converter
fn style_infos() -> Result<Vec<StyleInfo>> {
    let mut infos = Vec::with_capacity(STYLE_EXAMPLES.len());

    for (style, example_input) in STYLE_EXAMPLES {
        let example_output = convert(example_input, style).map_err(Error::from)?;
        infos.push(StyleInfo {
            style,
            label: style.label(),
            example_input,
            example_output,
        });
    }

    Ok(infos)
}

/// Convert style infos to a JSON string
fn format_styles_json(infos: &[StyleInfo]) -> Result<String> {
    serde_json::to_string_pretty(infos).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Subcommand that produces the given style
fn command_name(style: CaseStyle) -> &'static str {
    match style {
        CaseStyle::Camel => "camel",
        CaseStyle::Kebab => "kebab",
        CaseStyle::Dot => "dot",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_infos_covers_all_styles() {
        let infos = style_infos().unwrap();

        assert_eq!(infos.len(), 3);
        assert_eq!(infos[0].example_output, "firstName");
        assert_eq!(infos[1].example_output, "hello-world");
        assert_eq!(infos[2].example_output, "first.name");
    }

    #[test]
    fn test_format_styles_json_basic() {
        let infos = style_infos().unwrap();

        let json = format_styles_json(&infos).unwrap();

        assert!(json.contains("\"style\": \"camel\""));
        assert!(json.contains("\"label\": \"kebab-case\""));
        assert!(json.contains("\"example_input\": \"First-Name\""));
        assert!(json.contains("\"example_output\": \"first.name\""));
    }

    #[test]
    fn test_command_name_matches_cli_surface() {
        assert_eq!(command_name(CaseStyle::Camel), "camel");
        assert_eq!(command_name(CaseStyle::Kebab), "kebab");
        assert_eq!(command_name(CaseStyle::Dot), "dot");
    }
}
