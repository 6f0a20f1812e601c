use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use certbatch::{CertificateParams, SofficeConverter, process_roster};

use super::args::CliArgs;
use super::errors::AppError;

const PROMPT: &str = "Enter a csv to read: ";

/// Ask for the roster path on `output` and read one line from `input`.
fn prompt_for_input<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<PathBuf, AppError> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let path = line.trim_end_matches(['\r', '\n']);
    if path.trim().is_empty() {
        return Err(AppError::MissingArgument {
            arg: "input".to_string(),
        });
    }
    Ok(PathBuf::from(path))
}

/// Config file (or defaults) first, then any flag given on the command line.
fn resolve_params(args: &CliArgs) -> Result<CertificateParams, AppError> {
    let mut params = match &args.config {
        Some(path) => CertificateParams::from_json_file(path)?,
        None => CertificateParams::default(),
    };

    if let Some(template) = &args.template {
        params.template = template.clone();
    }
    if let Some(work_dir) = &args.work_dir {
        params.work_dir = work_dir.clone();
    }
    if let Some(output_dir) = &args.output_dir {
        params.output_dir = output_dir.clone();
    }
    if let Some(suffix) = &args.suffix {
        params.suffix = suffix.clone();
    }
    if let Some(index) = args.paragraph {
        params.paragraph_index = index;
    }
    if let Some(size) = args.font_size {
        params.font_size_pt = size;
    }
    if let Some(font) = &args.font_name {
        params.font_name = font.clone();
    }
    if let Some(delimiter) = args.delimiter {
        params.delimiter = delimiter;
    }
    if let Some(converter) = &args.converter {
        params.converter = converter.clone();
    }
    if let Some(convert_to) = &args.convert_to {
        params.convert_to = convert_to.clone();
    }
    if let Some(cleanup) = args.cleanup {
        params.cleanup = cleanup;
    }
    if args.continue_on_error {
        params.continue_on_error = true;
    }

    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let params = resolve_params(&args)?;

    let input = match args.input {
        Some(path) => path,
        None => {
            let stdin = std::io::stdin();
            prompt_for_input(&mut stdin.lock(), &mut std::io::stdout())?
        }
    };

    info!("Reading names from: {:?}", input);
    info!("Template: {:?}", params.template);
    info!("Output directory: {:?}", params.output_dir);
    info!("Cleanup policy: {}", params.cleanup);

    let converter = SofficeConverter::new(&params.converter, &params.convert_to);
    let report = process_roster(&input, &params, &converter).map_err(AppError::from)?;

    if report.failed > 0 {
        warn!("Failed: {}", report.failed);
        eprintln!("{} certificates failed", report.failed);
    }
    println!("{}", report);

    Ok(())
}
