//! Parse command implementation

use std::process::ExitCode;

use clap::Args;

use crate::commands::InputArgs;
use crate::error::CliError;
use crate::output;

#[derive(Args, Debug)]
pub struct ParseArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format (compact, pretty, json, yaml)
    #[arg(long, default_value = "compact")]
    pub format: String,
}

/// Handle the parse command
pub fn handle_parse(args: &ParseArgs) -> Result<ExitCode, CliError> {
    let result = args.input.import()?;

    let rendered = match args.format.as_str() {
        "compact" => output::format_compact_output(&result),
        "pretty" => output::format_pretty_output(&result),
        "json" => serde_json::to_string_pretty(&result.report)
            .map_err(|e| CliError::Export(e.to_string()))?,
        "yaml" => {
            serde_yaml::to_string(&result.report).map_err(|e| CliError::Export(e.to_string()))?
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}",
                other
            )));
        }
    };

    println!("{}", rendered);
    Ok(ExitCode::SUCCESS)
}
