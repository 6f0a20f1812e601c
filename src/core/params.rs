use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::CleanupPolicy;

/// Batch parameters suitable for config files and CLI overrides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificateParams {
    /// Template document copied for every row
    pub template: PathBuf,
    /// Directory where intermediate documents are written
    pub work_dir: PathBuf,
    /// Directory the converter writes artifacts into
    pub output_dir: PathBuf,
    /// Appended to the name: `<name>-<suffix>.docx`
    pub suffix: String,
    /// 0-based index of the placeholder among the body paragraphs
    pub paragraph_index: usize,
    pub font_size_pt: f32,
    pub font_name: String,
    pub delimiter: char,
    /// Converter program, resolved through PATH
    pub converter: String,
    /// `--convert-to` target; the part before `:` is the artifact extension
    pub convert_to: String,
    pub cleanup: CleanupPolicy,
    pub continue_on_error: bool,
}

impl Default for CertificateParams {
    fn default() -> Self {
        Self {
            template: PathBuf::from("HSPC-Certificate.docx"),
            work_dir: PathBuf::from("."),
            output_dir: PathBuf::from("advanced-certificates"),
            suffix: "HSPC-Certificate".to_string(),
            paragraph_index: 4,
            font_size_pt: 48.0,
            font_name: "Plantagenet Cherokee".to_string(),
            delimiter: ',',
            converter: "soffice".to_string(),
            convert_to: "pdf:writer_pdf_Export".to_string(),
            cleanup: CleanupPolicy::Always,
            continue_on_error: false,
        }
    }
}

impl CertificateParams {
    /// Load parameters from a JSON file; missing keys take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.font_size_pt.is_finite() || self.font_size_pt <= 0.0 {
            return Err(Error::InvalidArgument {
                arg: "font_size_pt",
                value: self.font_size_pt.to_string(),
            });
        }
        if self.font_name.trim().is_empty() {
            return Err(Error::InvalidArgument {
                arg: "font_name",
                value: self.font_name.clone(),
            });
        }
        if self.suffix.is_empty() {
            return Err(Error::InvalidArgument {
                arg: "suffix",
                value: String::new(),
            });
        }
        if self.converter.trim().is_empty() {
            return Err(Error::InvalidArgument {
                arg: "converter",
                value: self.converter.clone(),
            });
        }
        if matches!(self.delimiter, '"' | '\n' | '\r') {
            return Err(Error::InvalidArgument {
                arg: "delimiter",
                value: self.delimiter.escape_default().to_string(),
            });
        }
        Ok(())
    }
}
