//! I/O layer for the document side of a certificate run.
//! Provides `docx` package editing (placeholder fill-in over zip + XML)
//! and the external `converter` process.
pub mod docx;
pub use docx::{Placeholder, fill_placeholder, rewrite_placeholder};

pub mod converter;
pub use converter::{Converter, SofficeConverter};
