#![allow(unused)]

use crate::prelude::*;
use clap::Parser;
use recase_core::case::CaseStyle;

mod convert;
mod error;
mod prelude;
mod styles;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Convert identifier-like strings between camelCase, kebab-case, and dot.case"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "RECASE_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Convert inputs to camelCase ("first name" -> "firstName")
    Camel(convert::ConvertOptions),

    /// Convert inputs to kebab-case ("Hello World" -> "hello-world")
    Kebab(convert::ConvertOptions),

    /// Convert inputs to dot.case ("First-Name" -> "first.name")
    Dot(convert::ConvertOptions),

    /// List the supported case styles with example conversions
    Styles(styles::StylesOptions),
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Camel(options) => convert::run(CaseStyle::Camel, options, app.global),
        SubCommands::Kebab(options) => convert::run(CaseStyle::Kebab, options, app.global),
        SubCommands::Dot(options) => convert::run(CaseStyle::Dot, options, app.global),
        SubCommands::Styles(options) => styles::run(options, app.global),
    }
}
