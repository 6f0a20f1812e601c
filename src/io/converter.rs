use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::{Error, Result};

/// Turns a saved document into its output artifact inside `output_dir`.
pub trait Converter {
    fn convert(&self, source: &Path, output_dir: &Path) -> Result<()>;
}

/// Headless office-suite conversion (`soffice --headless --convert-to ...`).
#[derive(Debug, Clone)]
pub struct SofficeConverter {
    pub program: String,
    pub convert_to: String,
}

impl SofficeConverter {
    pub fn new(program: impl Into<String>, convert_to: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            convert_to: convert_to.into(),
        }
    }

    pub fn args(&self, source: &Path, output_dir: &Path) -> Vec<String> {
        vec![
            "--headless".to_string(),
            "--convert-to".to_string(),
            self.convert_to.clone(),
            "--outdir".to_string(),
            output_dir.to_string_lossy().into_owned(),
            source.to_string_lossy().into_owned(),
        ]
    }
}

impl Default for SofficeConverter {
    fn default() -> Self {
        Self::new("soffice", "pdf:writer_pdf_Export")
    }
}

impl Converter for SofficeConverter {
    fn convert(&self, source: &Path, output_dir: &Path) -> Result<()> {
        let args = self.args(source, output_dir);
        debug!("Running {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|e| Error::ConverterSpawn {
                program: self.program.clone(),
                source: e,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.trim().is_empty() {
            debug!("{}: {}", self.program, stdout.trim_end());
        }
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            debug!("{} stderr: {}", self.program, stderr.trim_end());
        }

        if !output.status.success() {
            return Err(Error::ConversionFailed {
                document: source.to_path_buf(),
                status: output.status,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_headless_pdf_export_arguments() {
        let converter = SofficeConverter::default();
        let args = converter.args(
            Path::new("Alice Smith-HSPC-Certificate.docx"),
            Path::new("advanced-certificates/"),
        );
        assert_eq!(
            args,
            vec![
                "--headless",
                "--convert-to",
                "pdf:writer_pdf_Export",
                "--outdir",
                "advanced-certificates/",
                "Alice Smith-HSPC-Certificate.docx",
            ]
        );
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let converter = SofficeConverter::new("certbatch-no-such-converter", "pdf");
        let err = converter
            .convert(Path::new("a.docx"), Path::new("out"))
            .unwrap_err();
        assert!(matches!(err, Error::ConverterSpawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn exit_status_is_checked() {
        let ok = SofficeConverter::new("true", "pdf");
        assert!(ok.convert(Path::new("a.docx"), Path::new("out")).is_ok());

        let failing = SofficeConverter::new("false", "pdf");
        match failing.convert(Path::new("a.docx"), Path::new("out")) {
            Err(Error::ConversionFailed { document, status }) => {
                assert_eq!(document, Path::new("a.docx"));
                assert!(!status.success());
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
