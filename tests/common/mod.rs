use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

pub const DOCUMENT_PART: &str = "word/document.xml";

/// Five-paragraph certificate body with the placeholder on the fifth line.
pub fn certificate_xml() -> String {
    let mut body = String::new();
    for text in ["Hackathon", "Certificate", "of Achievement", "presented to", "STUDENT NAME"] {
        body.push_str(&format!("<w:p><w:r><w:t>{text}</w:t></w:r></w:p>"));
    }
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}<w:sectPr/></w:body></w:document>"#
    )
}

pub fn write_template(path: &Path) {
    let file = std::fs::File::create(path).unwrap();
    let mut zip = ZipWriter::new(file);
    for (name, content) in [
        ("[Content_Types].xml", "<Types/>".to_string()),
        (DOCUMENT_PART, certificate_xml()),
    ] {
        zip.start_file(name, SimpleFileOptions::default()).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    }
    zip.finish().unwrap();
}

pub fn read_document(path: &Path) -> String {
    let mut archive = ZipArchive::new(std::fs::File::open(path).unwrap()).unwrap();
    let mut out = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .unwrap()
        .read_to_string(&mut out)
        .unwrap();
    out
}

/// Stand-in for `soffice`: copies the source document to `<outdir>/<stem>.pdf`.
/// Exits non-zero for sources whose name starts with `FAIL`.
#[cfg(unix)]
pub fn write_fake_converter(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("fake-soffice");
    std::fs::write(
        &script,
        r#"#!/bin/sh
out=""
while [ $# -gt 1 ]; do
  if [ "$1" = "--outdir" ]; then out="$2"; fi
  shift
done
base=$(basename "$1" .docx)
case "$base" in FAIL*) echo "cannot convert $1" >&2; exit 3;; esac
cp "$1" "$out/$base.pdf"
echo "convert $1 -> $out/$base.pdf"
"#,
    )
    .unwrap();
    let mut perms = std::fs::metadata(&script).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&script, perms).unwrap();
    script
}
