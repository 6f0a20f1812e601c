//! High-level, ergonomic library API: generate one certificate, or run a whole
//! roster through template fill-in and conversion. Prefer these entrypoints over
//! the low-level `io` modules when embedding certbatch.
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::core::naming::{artifact_path, intermediate_path, target_extension};
use crate::core::params::CertificateParams;
use crate::core::roster::open_roster;
use crate::error::{Error, Result};
use crate::io::converter::Converter;
use crate::io::docx::{Placeholder, fill_placeholder};

/// Batch processing report
#[derive(Debug, Clone, Copy)]
pub struct BatchReport {
    pub generated: usize,
    /// Rows that failed while `continue_on_error` was set
    pub failed: usize,
    pub started_at: DateTime<Utc>,
    pub elapsed: Duration,
}

impl std::fmt::Display for BatchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Generated {} certificates in {:.1}s",
            self.generated,
            self.elapsed.as_secs_f64()
        )
    }
}

/// Produce the certificate for one name and return the expected artifact path.
///
/// Copies the template to `<work_dir>/<name>-<suffix>.docx`, fills the
/// placeholder paragraph, runs the converter into `output_dir`, then removes
/// the intermediate according to `params.cleanup`.
pub fn generate_certificate(
    name: &str,
    params: &CertificateParams,
    converter: &dyn Converter,
) -> Result<PathBuf> {
    let intermediate = intermediate_path(&params.work_dir, name, &params.suffix);
    if is_same_file(&params.template, &intermediate) {
        return Err(Error::OverwritesTemplate { path: intermediate });
    }

    let outcome = fill_and_convert(name, &intermediate, params, converter);

    let cleanup = if outcome.is_err() && params.cleanup.keeps_failed() {
        if intermediate.exists() {
            warn!("Keeping intermediate document {:?}", intermediate);
        }
        Ok(())
    } else {
        remove_intermediate(&intermediate)
    };
    outcome?;
    cleanup?;

    let artifact = artifact_path(
        &params.output_dir,
        &intermediate,
        target_extension(&params.convert_to),
    );
    if !artifact.exists() {
        warn!("Converter reported success but {:?} was not written", artifact);
    }
    Ok(artifact)
}

fn fill_and_convert(
    name: &str,
    intermediate: &Path,
    params: &CertificateParams,
    converter: &dyn Converter,
) -> Result<()> {
    fs::copy(&params.template, intermediate)?;

    fill_placeholder(
        intermediate,
        &Placeholder {
            paragraph_index: params.paragraph_index,
            text: name,
            font_size_pt: params.font_size_pt,
            font_name: &params.font_name,
        },
    )?;

    converter.convert(intermediate, &params.output_dir)
}

/// Both paths exist and resolve to the same file.
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn remove_intermediate(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Generate one certificate per row of the roster at `input`.
///
/// Rows are processed strictly in order, one at a time. The first failure aborts
/// the batch unless `params.continue_on_error` is set, in which case it is logged
/// and counted in `BatchReport::failed`. Errors reading the roster always abort.
pub fn process_roster(
    input: &Path,
    params: &CertificateParams,
    converter: &dyn Converter,
) -> Result<BatchReport> {
    params.validate()?;

    let started_at = Utc::now();
    let start = Instant::now();
    let mut generated = 0;
    let mut failed = 0;
    let mut output_ready = false;

    for recipient in open_roster(input, params.delimiter)? {
        let recipient = recipient?;

        if !output_ready {
            fs::create_dir_all(&params.output_dir)?;
            output_ready = true;
        }

        match generate_certificate(&recipient.name, params, converter) {
            Ok(artifact) => {
                info!("Generated: {} -> {:?}", recipient.name, artifact);
                generated += 1;
            }
            Err(e) if params.continue_on_error => {
                warn!("Error on line {} ({}): {}", recipient.line, recipient.name, e);
                failed += 1;
            }
            Err(e) => return Err(e),
        }
    }

    let report = BatchReport {
        generated,
        failed,
        started_at,
        elapsed: start.elapsed(),
    };
    debug!(
        "Batch started at {} finished: generated={} failed={}",
        report.started_at.to_rfc3339(),
        report.generated,
        report.failed
    );
    Ok(report)
}
