//! Convert a detector's inference dump for a photographed duty roster into
//! an iCalendar file.

mod resolve;

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use log::{info, LevelFilter};
use serde::Deserialize;

use shiftgrid::{
    assemble_roster, write_calendar, ImageSize, Month, RawOutput, RosterParams,
    DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_TIMEZONE,
};

/// On-disk handoff format written by the model-inference step.
#[derive(Debug, Deserialize)]
struct InferenceDump {
    image_width: u32,
    image_height: u32,
    class_names: Vec<String>,
    output: RawOutput,
}

#[derive(Parser, Debug)]
#[command(
    name = "shiftgrid",
    version,
    about = "Convert duty-roster detections into an iCalendar file"
)]
struct Cli {
    /// Inference dump JSON produced by the detector step.
    input: PathBuf,

    /// Output .ics path.
    #[arg(short, long, default_value = "dienstplan.ics")]
    output: PathBuf,

    /// Target month as MM.YYYY.
    #[arg(short, long)]
    month: Option<String>,

    /// Roster image filename to derive the month from
    /// (dienstplan_MM.YYYY.jpg).
    #[arg(long, conflicts_with = "month")]
    image: Option<PathBuf>,

    /// Directory to scan for the newest dienstplan_MM.YYYY.jpg.
    #[arg(long, conflicts_with_all = ["month", "image"])]
    scan: Option<PathBuf>,

    /// Confidence threshold for keeping detections.
    #[arg(short, long, default_value_t = DEFAULT_CONFIDENCE_THRESHOLD)]
    threshold: f32,

    /// Calendar timezone identifier.
    #[arg(long, default_value = DEFAULT_TIMEZONE)]
    timezone: String,

    /// JSON file overriding the builtin shift-time table.
    #[arg(long)]
    registry: Option<PathBuf>,

    /// Write the assembled day/shift entries as JSON.
    #[arg(long)]
    report: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Pipeline(#[from] shiftgrid::PipelineError),

    #[error("no month given; pass --month, --image or --scan")]
    NoMonth,

    #[error("invalid month {0:?}, expected MM.YYYY")]
    BadMonth(String),

    #[error("no filename matching dienstplan_MM.YYYY.jpg in {0:?}")]
    NoRosterImage(PathBuf),

    #[error("cannot derive a month from image filename {0:?}")]
    BadImageName(PathBuf),
}

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let _ = shiftgrid::core::init_with_level(level);

    let month = target_month(&cli)?;
    let dump: InferenceDump = serde_json::from_str(&fs::read_to_string(&cli.input)?)?;

    let mut params = RosterParams {
        confidence_threshold: cli.threshold,
        timezone: cli.timezone.clone(),
        ..RosterParams::default()
    };
    if let Some(path) = &cli.registry {
        params.registry = serde_json::from_str(&fs::read_to_string(path)?)?;
    }

    let image = ImageSize {
        width: dump.image_width,
        height: dump.image_height,
    };
    let entries = assemble_roster(&dump.output, image, &dump.class_names, month, &params)?;

    if let Some(path) = &cli.report {
        fs::write(path, serde_json::to_string_pretty(&entries)?)?;
        info!("wrote report {}", path.display());
    }

    let calendar = write_calendar(&entries, &params.registry, month.first_day(), &params.timezone);
    let events = calendar.matches("BEGIN:VEVENT").count();
    fs::write(&cli.output, calendar)?;
    info!(
        "wrote {} ({events} events for {:02}.{})",
        cli.output.display(),
        month.month(),
        month.year()
    );
    Ok(())
}

fn target_month(cli: &Cli) -> Result<Month, CliError> {
    if let Some(spec) = &cli.month {
        return resolve::parse_month_spec(spec).ok_or_else(|| CliError::BadMonth(spec.clone()));
    }
    let image = match (&cli.image, &cli.scan) {
        (Some(image), _) => image.clone(),
        (None, Some(dir)) => {
            resolve::newest_roster_image(dir)?.ok_or_else(|| CliError::NoRosterImage(dir.clone()))?
        }
        (None, None) => return Err(CliError::NoMonth),
    };
    let name = image
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    resolve::month_from_filename(name).ok_or_else(|| CliError::BadImageName(image.clone()))
}
