//! Check command implementation

use std::process::ExitCode;

use clap::Args;
use cmm_report_core::ToleranceValidator;

use crate::commands::InputArgs;
use crate::error::CliError;
use crate::output;

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format (table, json)
    #[arg(long, default_value = "table")]
    pub format: String,
}

/// Handle the check command
///
/// Exits with a non-zero status when any reading is out of tolerance.
pub fn handle_check(args: &CheckArgs) -> Result<ExitCode, CliError> {
    let result = args.input.import()?;
    let summary = ToleranceValidator::new().validate(&result.report);

    let rendered = match args.format.as_str() {
        "table" => output::format_check_output(&summary),
        "json" => {
            serde_json::to_string_pretty(&summary).map_err(|e| CliError::Export(e.to_string()))?
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}",
                other
            )));
        }
    };

    println!("{}", rendered);

    if summary.is_ok() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}
