use serde::{Deserialize, Serialize};

use shiftgrid_core::{assemble, ImageSize, RosterEntry, RosterGrid, ShiftRegistry};
use shiftgrid_decode::{decode, RawOutput, DEFAULT_CONFIDENCE_THRESHOLD};
use shiftgrid_ics::{write_calendar, Month, DEFAULT_TIMEZONE};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors produced by the end-to-end helpers.
///
/// Only malformed raw output is fatal; off-grid detections, unknown codes
/// and overflow entries degrade to fewer calendar events instead.
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Decode(#[from] shiftgrid_decode::DecodeError),
}

/// Tunable settings of the recognition pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RosterParams {
    #[serde(default)]
    pub grid: RosterGrid,
    #[serde(default = "default_threshold")]
    pub confidence_threshold: f32,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default)]
    pub registry: ShiftRegistry,
}

impl Default for RosterParams {
    fn default() -> Self {
        Self {
            grid: RosterGrid::default(),
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            timezone: DEFAULT_TIMEZONE.to_string(),
            registry: ShiftRegistry::builtin(),
        }
    }
}

fn default_threshold() -> f32 {
    DEFAULT_CONFIDENCE_THRESHOLD
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

/// Decode raw output and assemble the day/shift sequence for one month.
#[cfg_attr(
    feature = "tracing",
    instrument(
        level = "info",
        skip(raw, class_names, params),
        fields(width = image.width, height = image.height)
    )
)]
pub fn assemble_roster(
    raw: &RawOutput,
    image: ImageSize,
    class_names: &[String],
    month: Month,
    params: &RosterParams,
) -> Result<Vec<RosterEntry>, PipelineError> {
    let detections = decode(raw, image, params.confidence_threshold)?;
    Ok(assemble(
        &detections,
        &params.grid,
        image,
        month.day_count(),
        class_names,
        &params.registry,
    ))
}

/// Full pipeline: raw detector output to iCalendar text.
///
/// Re-running with identical inputs produces byte-identical text.
#[cfg_attr(feature = "tracing", instrument(level = "info", skip_all))]
pub fn parse_roster(
    raw: &RawOutput,
    image: ImageSize,
    class_names: &[String],
    month: Month,
    params: &RosterParams,
) -> Result<String, PipelineError> {
    let entries = assemble_roster(raw, image, class_names, month, params)?;
    Ok(write_calendar(
        &entries,
        &params.registry,
        month.first_day(),
        &params.timezone,
    ))
}

/// Convenience overload using `RosterParams::default()`.
pub fn parse_roster_default(
    raw: &RawOutput,
    image: ImageSize,
    class_names: &[String],
    month: Month,
) -> Result<String, PipelineError> {
    parse_roster(raw, image, class_names, month, &RosterParams::default())
}
