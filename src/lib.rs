#![doc = r#"
certbatch — batch generation of personalized certificates.

Given a name list and a word-processor template (`.docx`), certbatch produces one
filled-in document per name and converts it to PDF with a headless office suite
(`soffice`). The intermediate documents are removed as it goes; only the converted
artifacts remain.

Requirements
------------
- LibreOffice (or any `soffice`-compatible converter) on `PATH` for the default converter.
- Rust 2024 edition toolchain.

Quick start: run a roster
-------------------------
```rust,no_run
use std::path::Path;
use certbatch::{process_roster, CertificateParams, SofficeConverter};

fn main() -> certbatch::Result<()> {
    let params = CertificateParams::default();
    let converter = SofficeConverter::new(&params.converter, &params.convert_to);

    let report = process_roster(Path::new("names.csv"), &params, &converter)?;
    println!("{report}");
    Ok(())
}
```

One certificate with custom formatting
--------------------------------------
```rust,no_run
use std::path::PathBuf;
use certbatch::{generate_certificate, CertificateParams, CleanupPolicy, SofficeConverter};

fn main() -> certbatch::Result<()> {
    let params = CertificateParams {
        template: PathBuf::from("award.docx"),
        output_dir: PathBuf::from("out"),
        paragraph_index: 2,
        font_size_pt: 36.0,
        font_name: "Garamond".to_string(),
        cleanup: CleanupPolicy::KeepOnFailure,
        ..Default::default()
    };
    std::fs::create_dir_all(&params.output_dir)?;

    let artifact = generate_certificate("Ada Lovelace", &params, &SofficeConverter::default())?;
    println!("wrote {}", artifact.display());
    Ok(())
}
```

Error handling
--------------
All public functions return `certbatch::Result<T>`; match on `certbatch::Error` to
handle specific cases.

```rust,no_run
use std::path::Path;
use certbatch::{process_roster, CertificateParams, Error, SofficeConverter};

fn main() {
    let params = CertificateParams::default();
    match process_roster(Path::new("names.csv"), &params, &SofficeConverter::default()) {
        Ok(report) => println!("{report}"),
        Err(Error::PlaceholderMissing { index, found }) => {
            eprintln!("template has {found} paragraphs, need index {index}")
        }
        Err(Error::ConverterSpawn { program, .. }) => eprintln!("is {program} installed?"),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level entry points and `BatchReport`.
- [`core`] — parameters, the streaming roster reader and file naming.
- [`io`] — `.docx` placeholder editing and the external converter.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use core::params::CertificateParams;
pub use core::roster::{Recipient, RosterReader, open_roster};
pub use error::{Error, Result};
pub use types::CleanupPolicy;

pub use io::converter::{Converter, SofficeConverter};
pub use io::docx::{Placeholder, fill_placeholder, rewrite_placeholder};

pub use api::{BatchReport, generate_certificate, process_roster};
