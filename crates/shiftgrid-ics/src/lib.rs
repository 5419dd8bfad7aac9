//! Month arithmetic and iCalendar emission.
//!
//! The emitter renders assembled roster entries into the plain-text
//! VCALENDAR document consumed by the calendar frontend. The wire format is
//! fixed: `\n` line endings, no folding, no escaping (shift codes are
//! alphanumeric).

mod emit;
mod month;

pub use emit::{write_calendar, DEFAULT_TIMEZONE};
pub use month::Month;
