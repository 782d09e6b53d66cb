//! Section splitting for the bracket-delimited scout log format.
//!
//! A log file is a flat sequence of `[3XXX]` headers, each followed by the
//! semicolon-separated data lines of that section. The splitter routes every
//! non-empty line into the bucket of the most recently seen header; lines
//! under an unrecognized header are dropped rather than failing, since the
//! format carries optional and undocumented sections.

pub mod combos;
pub mod match_info;
pub mod roster;

use memchr::memchr_iter;

pub const MATCH_HEADER: &str = "[3MATCH]";
pub const TEAMS_HEADER: &str = "[3TEAMS]";
pub const SET_HEADER: &str = "[3SET]";
pub const PLAYERS_HOME_HEADER: &str = "[3PLAYERS-H]";
pub const PLAYERS_AWAY_HEADER: &str = "[3PLAYERS-V]";
pub const ATTACK_COMBINATION_HEADER: &str = "[3ATTACKCOMBINATION]";
pub const SETTER_CALL_HEADER: &str = "[3SETTERCALL]";
pub const VIDEO_HEADER: &str = "[3VIDEO]";
pub const SCOUT_HEADER: &str = "[3SCOUT]";

/// One raw line of the scout section, kept with its 1-based position in the
/// file for diagnostics.
#[derive(Debug, Clone)]
pub struct ScoutLine {
    pub line_number: u64,
    pub raw: String,
}

impl ScoutLine {
    /// The leading code token: everything before the first field separator.
    pub fn code(&self) -> &str {
        match self.raw.split_once(';') {
            Some((code, _)) => code,
            None => &self.raw,
        }
    }
}

/// The named line-groups of one log file.
#[derive(Debug, Clone, Default)]
pub struct MatchSections {
    pub match_info: Vec<String>,
    pub teams: Vec<String>,
    pub set_scores: Vec<String>,
    pub home_players: Vec<String>,
    pub away_players: Vec<String>,
    pub attack_combinations: Vec<String>,
    pub setter_calls: Vec<String>,
    pub video: Vec<String>,
    pub scout: Vec<ScoutLine>,
}

enum Bucket {
    MatchInfo,
    Teams,
    SetScores,
    HomePlayers,
    AwayPlayers,
    AttackCombinations,
    SetterCalls,
    Video,
    Scout,
}

fn route_header(header: &str) -> Option<Bucket> {
    match header {
        MATCH_HEADER => Some(Bucket::MatchInfo),
        TEAMS_HEADER => Some(Bucket::Teams),
        SET_HEADER => Some(Bucket::SetScores),
        PLAYERS_HOME_HEADER => Some(Bucket::HomePlayers),
        PLAYERS_AWAY_HEADER => Some(Bucket::AwayPlayers),
        ATTACK_COMBINATION_HEADER => Some(Bucket::AttackCombinations),
        SETTER_CALL_HEADER => Some(Bucket::SetterCalls),
        VIDEO_HEADER => Some(Bucket::Video),
        SCOUT_HEADER => Some(Bucket::Scout),
        _ => None,
    }
}

/// Break the raw log text into named line-groups.
///
/// Tolerates both `\n` and `\r\n` line endings; every line is trimmed before
/// routing and empty lines are skipped.
pub fn split_sections(text: &str) -> MatchSections {
    let bytes = text.as_bytes();
    let mut sections = MatchSections::default();
    let mut current: Option<Bucket> = None;

    let mut line_number: u64 = 0;
    let mut start = 0;
    let mut line_ranges: Vec<(usize, usize)> = Vec::new();
    for end in memchr_iter(b'\n', bytes) {
        line_ranges.push((start, end));
        start = end + 1;
    }
    if start < bytes.len() {
        line_ranges.push((start, bytes.len()));
    }

    for (start, end) in line_ranges {
        line_number += 1;
        let line = text[start..end].trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            current = route_header(line);
            continue;
        }

        match current {
            Some(Bucket::MatchInfo) => sections.match_info.push(line.to_string()),
            Some(Bucket::Teams) => sections.teams.push(line.to_string()),
            Some(Bucket::SetScores) => sections.set_scores.push(line.to_string()),
            Some(Bucket::HomePlayers) => sections.home_players.push(line.to_string()),
            Some(Bucket::AwayPlayers) => sections.away_players.push(line.to_string()),
            Some(Bucket::AttackCombinations) => {
                sections.attack_combinations.push(line.to_string())
            }
            Some(Bucket::SetterCalls) => sections.setter_calls.push(line.to_string()),
            Some(Bucket::Video) => sections.video.push(line.to_string()),
            Some(Bucket::Scout) => sections.scout.push(ScoutLine {
                line_number,
                raw: line.to_string(),
            }),
            None => {}
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_route_to_most_recent_header() {
        let text = "[3TEAMS]\nHOM;Home VC;0\nAWY;Away VC;0\n[3SCOUT]\n*13SH+;;;\n";
        let sections = split_sections(text);
        assert_eq!(sections.teams.len(), 2);
        assert_eq!(sections.scout.len(), 1);
        assert_eq!(sections.scout[0].code(), "*13SH+");
        assert!(sections.match_info.is_empty());
    }

    #[test]
    fn test_unrecognized_header_drops_following_lines() {
        let text = "[3UNDOCUMENTED]\ngarbage;1;2\n[3SCOUT]\n*13SH+\n";
        let sections = split_sections(text);
        assert_eq!(sections.scout.len(), 1);
        // The garbage line went nowhere
        let total = sections.teams.len() + sections.match_info.len() + sections.video.len();
        assert_eq!(total, 0);
    }

    #[test]
    fn test_crlf_and_blank_lines_tolerated() {
        let text = "[3SCOUT]\r\n*13SH+;;\r\n\r\na02RH#\r\n";
        let sections = split_sections(text);
        assert_eq!(sections.scout.len(), 2);
        assert_eq!(sections.scout[0].raw, "*13SH+;;");
        assert_eq!(sections.scout[1].code(), "a02RH#");
    }

    #[test]
    fn test_scout_lines_keep_file_line_numbers() {
        let text = "[3VIDEO]\nCamera0=match.mp4\n[3SCOUT]\n*13SH+\n";
        let sections = split_sections(text);
        assert_eq!(sections.scout[0].line_number, 4);
    }

    #[test]
    fn test_lines_before_any_header_are_dropped() {
        let text = "stray;line\n[3SCOUT]\n*13SH+\n";
        let sections = split_sections(text);
        assert_eq!(sections.scout.len(), 1);
    }

    #[test]
    fn test_code_token_without_separator_is_whole_line() {
        let line = ScoutLine {
            line_number: 1,
            raw: "*T".to_string(),
        };
        assert_eq!(line.code(), "*T");
    }
}
