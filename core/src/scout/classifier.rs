//! Line classification for scout codes.
//!
//! Given the leading code token of a line, ordered pattern rules assign
//! exactly one `LineType`. Order matters: several patterns are prefixes of
//! each other (`*P05` is a player entry, `*05...` an action), so the first
//! matching rule wins and anything unmatched is left to the caller to log
//! and skip.

use libero_types::TeamSide;

/// Marker token appended to starting-lineup codes.
pub const LINEUP_MARKER: &str = ">LUp";

/// Closed tag set for classifiable scout lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    Action,
    Point,
    Rotation,
    Substitution,
    SetEnd,
    Timeout,
    Lineup,
    RotationInit,
    PlayerEntry,
}

/// Side encoded by the leading prefix character: `*` home, `a` away.
pub fn team_for_prefix(prefix: u8) -> Option<TeamSide> {
    match prefix {
        b'*' => Some(TeamSide::Home),
        b'a' => Some(TeamSide::Away),
        _ => None,
    }
}

fn all_digits(bytes: &[u8]) -> bool {
    !bytes.is_empty() && bytes.iter().all(u8::is_ascii_digit)
}

/// Classify a leading code token. Returns `None` for unclassifiable lines.
pub fn classify(code: &str) -> Option<LineType> {
    let bytes = code.as_bytes();

    // Set boundary markers ("**1set") carry no team prefix
    if code.starts_with("**") && code.ends_with("set") {
        return Some(LineType::SetEnd);
    }

    if bytes.len() < 2 || team_for_prefix(bytes[0]).is_none() {
        return None;
    }
    let body = &bytes[1..];

    // Lineup codes: "*05>LUp" (starting player) or "*z1>LUp" (initial
    // rotation). The marker claims the line even when the body is malformed.
    if code.contains(LINEUP_MARKER) {
        if let Some(stripped) = code.strip_suffix(LINEUP_MARKER) {
            let inner = &stripped.as_bytes()[1..];
            if inner.len() == 2 && all_digits(inner) {
                return Some(LineType::Lineup);
            }
            if inner.len() == 2 && inner[0] == b'z' && inner[1].is_ascii_digit() {
                return Some(LineType::RotationInit);
            }
        }
        return None;
    }

    // "*P05": player entering the court mid-set
    if body.len() == 3 && body[0] == b'P' && all_digits(&body[1..]) {
        return Some(LineType::PlayerEntry);
    }

    // "*p25:23": point marker carrying the authoritative score
    if body.first() == Some(&b'p')
        && let Some((home, away)) = code[2..].split_once(':')
        && all_digits(home.as_bytes())
        && all_digits(away.as_bytes())
    {
        return Some(LineType::Point);
    }

    // "*z4": rotation update
    if body.len() == 2 && body[0] == b'z' && body[1].is_ascii_digit() {
        return Some(LineType::Rotation);
    }

    // "*c05:12": substitution, outgoing:incoming
    if body.len() == 6
        && body[0] == b'c'
        && all_digits(&body[1..3])
        && body[3] == b':'
        && all_digits(&body[4..6])
    {
        return Some(LineType::Substitution);
    }

    // "*T": timeout, nothing else allowed after the prefix
    if body == b"T" {
        return Some(LineType::Timeout);
    }

    // "*13..." or "*$$...": a decodable game action
    if body.len() >= 2 && (all_digits(&body[..2]) || &body[..2] == b"$$") {
        return Some(LineType::Action);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_end_marker() {
        assert_eq!(classify("**1set"), Some(LineType::SetEnd));
        assert_eq!(classify("**4set"), Some(LineType::SetEnd));
    }

    #[test]
    fn test_lineup_and_rotation_init() {
        assert_eq!(classify("*05>LUp"), Some(LineType::Lineup));
        assert_eq!(classify("a12>LUp"), Some(LineType::Lineup));
        assert_eq!(classify("*z1>LUp"), Some(LineType::RotationInit));
        assert_eq!(classify("az6>LUp"), Some(LineType::RotationInit));
        // Marker with a malformed body is unclassifiable
        assert_eq!(classify("*z>LUp"), None);
        assert_eq!(classify("*123>LUp"), None);
    }

    #[test]
    fn test_player_entry_wins_over_action() {
        assert_eq!(classify("*P05"), Some(LineType::PlayerEntry));
        assert_eq!(classify("aP14"), Some(LineType::PlayerEntry));
        // Lowercase p with scores is a point, not a player entry
        assert_eq!(classify("*p25:23"), Some(LineType::Point));
    }

    #[test]
    fn test_point_rotation_substitution_timeout() {
        assert_eq!(classify("*p5:4"), Some(LineType::Point));
        assert_eq!(classify("ap25:27"), Some(LineType::Point));
        assert_eq!(classify("*z4"), Some(LineType::Rotation));
        assert_eq!(classify("az1"), Some(LineType::Rotation));
        assert_eq!(classify("*c05:12"), Some(LineType::Substitution));
        assert_eq!(classify("ac10:02"), Some(LineType::Substitution));
        assert_eq!(classify("*T"), Some(LineType::Timeout));
        assert_eq!(classify("aT"), Some(LineType::Timeout));
    }

    #[test]
    fn test_actions_including_team_error() {
        assert_eq!(classify("*13SH+"), Some(LineType::Action));
        assert_eq!(classify("a07AH#V5~47CH2"), Some(LineType::Action));
        assert_eq!(classify("*$$&H#"), Some(LineType::Action));
        assert_eq!(classify("a$$&H="), Some(LineType::Action));
    }

    #[test]
    fn test_unclassifiable_lines() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("*"), None);
        assert_eq!(classify("x13SH+"), None);
        assert_eq!(classify("*x9"), None);
        assert_eq!(classify("*p25-23"), None);
        // "*T" must be exact
        assert_eq!(classify("*T2"), None);
    }
}
