//! CLI command implementations

pub mod check;
pub mod export;
pub mod parse;

use std::io::Read;
use std::path::PathBuf;

use cmm_report_core::{ImportResult, ParserOptions, PdfImporter, TextImporter};

use crate::error::CliError;

/// Input arguments shared by all commands
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Input report file (.pdf selects PDF mode); use '-' for stdin
    pub input: String,

    /// Treat the input as text even if the name ends in .pdf
    #[arg(long)]
    pub text: bool,

    /// Force a text encoding label (e.g. shift_jis) instead of detecting one
    #[arg(long)]
    pub encoding: Option<String>,

    /// Keep signed values instead of absolute-value normalization
    #[arg(long)]
    pub signed: bool,
}

impl InputArgs {
    fn parser_options(&self) -> ParserOptions {
        ParserOptions {
            absolute_values: !self.signed,
            ..ParserOptions::default()
        }
    }

    fn text_importer(&self) -> TextImporter {
        let importer = TextImporter::with_options(self.parser_options());
        match &self.encoding {
            Some(label) => importer.with_encoding(label.as_str()),
            None => importer,
        }
    }

    /// Load and parse the requested input
    pub fn import(&self) -> Result<ImportResult, CliError> {
        if self.input == "-" {
            let mut bytes = Vec::new();
            std::io::stdin()
                .read_to_end(&mut bytes)
                .map_err(|e| CliError::InvalidArgument(format!("Failed to read stdin: {}", e)))?;
            return Ok(self.text_importer().import_bytes(&bytes)?);
        }

        let path = PathBuf::from(&self.input);
        let is_pdf = !self.text
            && path
                .extension()
                .map(|ext| ext.eq_ignore_ascii_case("pdf"))
                .unwrap_or(false);

        if is_pdf {
            Ok(PdfImporter::with_options(self.parser_options()).import_path(&path)?)
        } else {
            Ok(self.text_importer().import_path(&path)?)
        }
    }
}
