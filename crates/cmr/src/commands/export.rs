//! Export command implementation

use std::path::PathBuf;
use std::process::ExitCode;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use clap::Args;
use cmm_report_core::export::default_filename;
use cmm_report_core::{CsvExporter, DetailTable, JsonExporter, TableOptions, XlsxExporter};

use crate::commands::InputArgs;
use crate::error::CliError;

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format (csv, xlsx, json)
    #[arg(long, default_value = "csv")]
    pub format: String,

    /// Output path (default: timestamped name in the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Romanize Japanese labels into ASCII
    #[arg(long)]
    pub romanize: bool,

    /// Omit the UTF-8 BOM from CSV output
    #[arg(long)]
    pub no_bom: bool,
}

/// Handle the export command
pub fn handle_export(args: &ExportArgs) -> Result<ExitCode, CliError> {
    let result = args.input.import()?;
    let table = DetailTable::from_report(
        &result.report,
        &TableOptions {
            romanize_labels: args.romanize,
        },
    );

    let (bytes, extension) = match args.format.as_str() {
        "csv" => {
            let exported = CsvExporter::new().include_bom(!args.no_bom).export(&table)?;
            (exported.content.into_bytes(), "csv")
        }
        "json" => {
            let exported = JsonExporter::new().export_table(&table)?;
            (exported.content.into_bytes(), "json")
        }
        "xlsx" => {
            let exported = XlsxExporter::new().export(&table)?;
            let bytes = BASE64
                .decode(exported.content.as_bytes())
                .map_err(|e| CliError::Export(e.to_string()))?;
            (bytes, "xlsx")
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}",
                other
            )));
        }
    };

    let path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(default_filename(extension)));
    std::fs::write(&path, &bytes)
        .map_err(|e| CliError::FileWriteError(path.clone(), e.to_string()))?;

    eprintln!("Exported {} row(s) to {}", table.len(), path.display());
    Ok(ExitCode::SUCCESS)
}
