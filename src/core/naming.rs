//! Deterministic file names for intermediate documents and converted artifacts.
use std::path::{Path, PathBuf};

/// Extension of the intermediate word-processor document
pub const DOCUMENT_EXTENSION: &str = "docx";

/// `<name>-<suffix>.docx`
pub fn intermediate_file_name(name: &str, suffix: &str) -> String {
    format!("{}-{}.{}", name, suffix, DOCUMENT_EXTENSION)
}

pub fn intermediate_path(work_dir: &Path, name: &str, suffix: &str) -> PathBuf {
    work_dir.join(intermediate_file_name(name, suffix))
}

/// File extension produced by a converter target such as `pdf:writer_pdf_Export`.
pub fn target_extension(convert_to: &str) -> &str {
    convert_to.split(':').next().unwrap_or(convert_to)
}

/// Where the converter writes its output for `source`: the source's base name
/// with the extension replaced, inside `output_dir`.
pub fn artifact_path(output_dir: &Path, source: &Path, extension: &str) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    output_dir.join(format!("{}.{}", stem, extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_the_certificate_pattern() {
        let intermediate = intermediate_path(Path::new("."), "Alice Smith", "HSPC-Certificate");
        assert_eq!(
            intermediate,
            Path::new(".").join("Alice Smith-HSPC-Certificate.docx")
        );

        let artifact = artifact_path(Path::new("advanced-certificates"), &intermediate, "pdf");
        assert_eq!(
            artifact,
            Path::new("advanced-certificates").join("Alice Smith-HSPC-Certificate.pdf")
        );
    }

    #[test]
    fn dotted_names_keep_their_dots() {
        let intermediate = intermediate_path(Path::new("work"), "J. R. Doe", "Cert");
        let artifact = artifact_path(Path::new("out"), &intermediate, "pdf");
        assert_eq!(artifact, Path::new("out").join("J. R. Doe-Cert.pdf"));
    }

    #[test]
    fn extension_is_the_filter_prefix() {
        assert_eq!(target_extension("pdf:writer_pdf_Export"), "pdf");
        assert_eq!(target_extension("odt"), "odt");
    }
}
