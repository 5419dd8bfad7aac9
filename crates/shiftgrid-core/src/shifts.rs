use std::collections::BTreeMap;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Start and end wall-clock times of one shift, minute granularity.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShiftWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// Immutable shift-code → time-window table.
///
/// Built once at startup and shared read-only by the assembly and emission
/// stages. An unknown code is a normal lookup outcome, not an error: the
/// detector's class list may carry labels (vacation markers, blank cells)
/// that produce no calendar event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShiftRegistry {
    table: BTreeMap<String, ShiftWindow>,
}

impl ShiftRegistry {
    /// The ten shift codes of the reference deployment.
    pub fn builtin() -> Self {
        let table = [
            ("F01", (6, 45), (14, 0)),
            ("F04", (6, 45), (10, 30)),
            ("F06", (7, 0), (14, 0)),
            ("F07", (7, 0), (13, 30)),
            ("F09", (7, 0), (13, 0)),
            ("F10", (7, 0), (12, 30)),
            ("F13", (7, 0), (10, 30)),
            ("F14", (7, 0), (10, 0)),
            ("S01", (13, 45), (21, 0)),
            ("S04", (13, 45), (20, 30)),
        ]
        .into_iter()
        .map(|(code, start, end)| {
            (
                code.to_string(),
                ShiftWindow {
                    start: wall_clock(start),
                    end: wall_clock(end),
                },
            )
        })
        .collect();
        Self { table }
    }

    /// Build a registry from an explicit code → window table.
    pub fn from_table(table: BTreeMap<String, ShiftWindow>) -> Self {
        Self { table }
    }

    pub fn get(&self, code: &str) -> Option<&ShiftWindow> {
        self.table.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.table.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Registered codes in sorted order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }
}

impl Default for ShiftRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn wall_clock((hour, minute): (u32, u32)) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("builtin shift table holds valid times")
}
