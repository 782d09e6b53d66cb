//! Fixed-column metadata shared by every scout line.
//!
//! Column layout (0-indexed after the action code, semicolon-separated):
//! 1-6 modifier flags, 7 timestamp `HH.MM.SS`, 8 set number, 9 home
//! rotation, 10 away rotation, 12 video offset in seconds, 14-19 home
//! on-court positions P1..P6, 20-25 away positions. Everything else is
//! reserved. Blank columns leave fields absent, never zero.

use chrono::NaiveTime;

const FLAG_COLUMNS: std::ops::RangeInclusive<usize> = 1..=6;
const TIMESTAMP_COLUMN: usize = 7;
const SET_NUMBER_COLUMN: usize = 8;
const HOME_ROTATION_COLUMN: usize = 9;
const AWAY_ROTATION_COLUMN: usize = 10;
const VIDEO_OFFSET_COLUMN: usize = 12;
const HOME_POSITIONS_START: usize = 14;
const AWAY_POSITIONS_START: usize = 20;

const SKILL_FOCUS_MARKER: &str = "s";
const POINT_SCORED_MARKER: &str = "p";
const CONTINUATION_MARKER: &str = "c";

/// Modifier markers scattered over the first six metadata columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineFlags {
    pub skill_focus: bool,
    pub point_scored: bool,
    pub continuation: bool,
}

/// Decoded trailing columns of one scout line.
#[derive(Debug, Clone, Default)]
pub struct LineMeta {
    pub timestamp: Option<NaiveTime>,
    pub set_number: Option<u8>,
    pub home_rotation: Option<u8>,
    pub away_rotation: Option<u8>,
    pub video_offset: Option<i64>,
    pub home_positions: Option<[u8; 6]>,
    pub away_positions: Option<[u8; 6]>,
    pub flags: LineFlags,
}

fn col<'a>(fields: &[&'a str], idx: usize) -> Option<&'a str> {
    fields.get(idx).map(|f| f.trim()).filter(|f| !f.is_empty())
}

fn col_num<T: std::str::FromStr>(fields: &[&str], idx: usize) -> Option<T> {
    col(fields, idx).and_then(|f| f.parse().ok())
}

/// A position array is only produced when all six columns carry a number;
/// a half-filled lineup says nothing useful about who is on court.
fn positions(fields: &[&str], start: usize) -> Option<[u8; 6]> {
    let mut slots = [0u8; 6];
    for (offset, slot) in slots.iter_mut().enumerate() {
        *slot = col_num(fields, start + offset)?;
    }
    Some(slots)
}

/// Extract the fixed-position metadata from a scout line's field list.
pub fn decode_line_meta(fields: &[&str]) -> LineMeta {
    let mut flags = LineFlags::default();
    for idx in FLAG_COLUMNS {
        match col(fields, idx) {
            Some(SKILL_FOCUS_MARKER) => flags.skill_focus = true,
            Some(POINT_SCORED_MARKER) => flags.point_scored = true,
            Some(CONTINUATION_MARKER) => flags.continuation = true,
            _ => {}
        }
    }

    LineMeta {
        timestamp: col(fields, TIMESTAMP_COLUMN)
            .and_then(|f| NaiveTime::parse_from_str(f, "%H.%M.%S").ok()),
        set_number: col_num(fields, SET_NUMBER_COLUMN),
        home_rotation: col_num(fields, HOME_ROTATION_COLUMN),
        away_rotation: col_num(fields, AWAY_ROTATION_COLUMN),
        video_offset: col_num(fields, VIDEO_OFFSET_COLUMN),
        home_positions: positions(fields, HOME_POSITIONS_START),
        away_positions: positions(fields, AWAY_POSITIONS_START),
        flags,
    }
}
