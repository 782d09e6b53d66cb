//! Per-line decoding: classification, action grammar, and metadata columns.
//!
//! Everything in this module is stateless and referentially transparent;
//! lines decode independently of each other and may be processed in any
//! order. Only the assembler downstream needs the stream in order.

mod action;
mod classifier;
mod codes;
mod metadata;

pub use action::decode_action;
pub use classifier::{LINEUP_MARKER, LineType, classify, team_for_prefix};
pub use metadata::{LineFlags, LineMeta, decode_line_meta};

use libero_types::{GameAction, TeamSide};

macro_rules! parse_u8 {
    ($s:expr) => {
        $s.parse::<u8>().unwrap_or_default()
    };
}

/// The typed payload of a classified scout line.
#[derive(Debug, Clone)]
pub enum LineEvent {
    Action(GameAction),
    Point {
        team: TeamSide,
        home: u8,
        away: u8,
    },
    Rotation {
        team: TeamSide,
        rotation: u8,
    },
    Substitution {
        team: TeamSide,
        player_out: u8,
        player_in: u8,
    },
    SetEnd,
    Timeout {
        team: TeamSide,
    },
    Lineup {
        team: TeamSide,
        player: u8,
    },
    RotationInit {
        team: TeamSide,
        rotation: u8,
    },
    PlayerEntry {
        team: TeamSide,
        player: u8,
    },
}

impl LineEvent {
    pub fn line_type(&self) -> LineType {
        match self {
            LineEvent::Action(_) => LineType::Action,
            LineEvent::Point { .. } => LineType::Point,
            LineEvent::Rotation { .. } => LineType::Rotation,
            LineEvent::Substitution { .. } => LineType::Substitution,
            LineEvent::SetEnd => LineType::SetEnd,
            LineEvent::Timeout { .. } => LineType::Timeout,
            LineEvent::Lineup { .. } => LineType::Lineup,
            LineEvent::RotationInit { .. } => LineType::RotationInit,
            LineEvent::PlayerEntry { .. } => LineType::PlayerEntry,
        }
    }
}

/// One fully decoded scout line, ready for the assembly fold.
#[derive(Debug, Clone)]
pub struct ParsedScoutLine {
    pub line_number: u64,
    pub code: String,
    pub event: LineEvent,
    pub meta: LineMeta,
}

/// Decode a single scout line: classify the leading code token, decode the
/// type-specific payload, and extract the trailing metadata columns.
///
/// Unclassifiable lines produce no record; they are reported on the
/// diagnostic channel and dropped so one bad line never aborts the match.
pub fn parse_scout_line(line_number: u64, line: &str) -> Option<ParsedScoutLine> {
    let fields: Vec<&str> = line.trim().split(';').collect();
    let code = fields[0].trim();

    let Some(line_type) = classify(code) else {
        tracing::warn!(line_number, raw = line, "unclassifiable scout line, skipping");
        return None;
    };

    let meta = decode_line_meta(&fields);
    let event = build_event(line_type, code)?;

    Some(ParsedScoutLine {
        line_number,
        code: code.to_string(),
        event,
        meta,
    })
}

/// Build the typed payload for an already classified code token. The
/// classifier guaranteed the positional shape, so the extraction here is
/// straight slicing.
fn build_event(line_type: LineType, code: &str) -> Option<LineEvent> {
    if line_type == LineType::SetEnd {
        return Some(LineEvent::SetEnd);
    }

    let team = team_for_prefix(code.as_bytes()[0])?;
    let event = match line_type {
        LineType::Action => LineEvent::Action(decode_action(code, team)),
        LineType::Point => {
            let (home, away) = code[2..].split_once(':')?;
            LineEvent::Point {
                team,
                home: parse_u8!(home),
                away: parse_u8!(away),
            }
        }
        LineType::Rotation => LineEvent::Rotation {
            team,
            rotation: parse_u8!(code[2..3]),
        },
        LineType::Substitution => LineEvent::Substitution {
            team,
            player_out: parse_u8!(code[2..4]),
            player_in: parse_u8!(code[5..7]),
        },
        LineType::Timeout => LineEvent::Timeout { team },
        LineType::Lineup => LineEvent::Lineup {
            team,
            player: parse_u8!(code[1..3]),
        },
        LineType::RotationInit => LineEvent::RotationInit {
            team,
            rotation: parse_u8!(code[2..3]),
        },
        LineType::PlayerEntry => LineEvent::PlayerEntry {
            team,
            player: parse_u8!(code[2..4]),
        },
        LineType::SetEnd => unreachable!(),
    };

    Some(event)
}
