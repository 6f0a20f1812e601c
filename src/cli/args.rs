use clap::Parser;
use std::path::PathBuf;

use certbatch::CleanupPolicy;

#[derive(Parser, Debug)]
#[command(
    name = "certbatch",
    version,
    about = "Generate personalized PDF certificates from a name list"
)]
pub struct CliArgs {
    /// CSV file whose first column holds the names (prompted for when omitted)
    pub input: Option<PathBuf>,

    /// JSON file with batch parameters; the flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Template document copied for every name
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Directory for intermediate documents
    #[arg(long)]
    pub work_dir: Option<PathBuf>,

    /// Directory the converter writes PDFs into
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// File name suffix: `<name>-<suffix>.docx`
    #[arg(long)]
    pub suffix: Option<String>,

    /// 0-based index of the placeholder paragraph in the template body
    #[arg(long)]
    pub paragraph: Option<usize>,

    /// Font size of the name, in points
    #[arg(long)]
    pub font_size: Option<f32>,

    /// Font family of the name
    #[arg(long)]
    pub font_name: Option<String>,

    /// Field delimiter of the name list
    #[arg(long)]
    pub delimiter: Option<char>,

    /// Converter program (must be on PATH)
    #[arg(long)]
    pub converter: Option<String>,

    /// Converter target, e.g. pdf:writer_pdf_Export
    #[arg(long)]
    pub convert_to: Option<String>,

    /// What to do with an intermediate document when its row fails
    #[arg(long, value_enum)]
    pub cleanup: Option<CleanupPolicy>,

    /// Keep going after a failed row instead of aborting the batch
    #[arg(long, default_value_t = false)]
    pub continue_on_error: bool,

    /// Enable logging (filter with RUST_LOG)
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
