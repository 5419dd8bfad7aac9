use chrono::{Days, NaiveDate};
use log::debug;

use shiftgrid_core::{RosterEntry, ShiftRegistry};

/// Timezone identifier of the reference deployment.
pub const DEFAULT_TIMEZONE: &str = "Europe/Berlin";

const CALENDAR_HEADER: &str = "BEGIN:VCALENDAR\nVERSION:2.0\nCALSCALE:GREGORIAN\n";
const CALENDAR_FOOTER: &str = "END:VCALENDAR\n";

/// Render roster entries into iCalendar text.
///
/// Entries are emitted in the order given, one VEVENT per entry whose shift
/// code is in the registry; the rest contribute nothing. The envelope is
/// always present, so zero entries yield a valid empty calendar.
pub fn write_calendar(
    entries: &[RosterEntry],
    registry: &ShiftRegistry,
    month_start: NaiveDate,
    tz_id: &str,
) -> String {
    let mut out = String::from(CALENDAR_HEADER);
    let mut events = 0usize;
    for entry in entries {
        let Some(code) = entry.shift_code.as_deref() else {
            continue;
        };
        // registry membership was checked at assembly; a miss here means the
        // registry changed underneath us, treated as one more no-shift day
        let Some(window) = registry.get(code) else {
            continue;
        };
        let date = month_start + Days::new(u64::from(entry.day_index));
        let day = date.format("%Y%m%d");
        let start = window.start.format("%H%M");
        let end = window.end.format("%H%M");
        out.push_str(&format!(
            "BEGIN:VEVENT\nSUMMARY:{code}\nDTSTART;TZID={tz_id}:{day}T{start}00\nDTEND;TZID={tz_id}:{day}T{end}00\nEND:VEVENT\n"
        ));
        events += 1;
    }
    out.push_str(CALENDAR_FOOTER);
    debug!("emitted {events} calendar events for {} entries", entries.len());
    out
}
