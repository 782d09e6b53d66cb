//! File-level entry points: load a scout log and run the full pipeline.
//!
//! The pipeline is an embarrassingly-parallel decode pass (every scout line
//! decodes from its own text alone) followed by a strictly sequential fold
//! (each line's effect on score/rotation/position state depends on all
//! prior lines). Two different logs share nothing and can be parsed
//! concurrently by the caller.

use std::borrow::Cow;
use std::fs::File;
use std::path::Path;

use encoding_rs::WINDOWS_1252;
use memmap2::Mmap;
use rayon::prelude::*;

use libero_types::MatchRecord;

use crate::assembler::MatchAssembler;
use crate::error::ScoutError;
use crate::scout::{ParsedScoutLine, parse_scout_line};
use crate::sections::{
    combos::{parse_attack_combinations, parse_setter_calls},
    match_info::{parse_match_info, parse_set_scores, parse_teams, parse_video_path},
    roster::parse_roster,
    split_sections,
};

/// Parse a scout log file into a structured match record.
pub fn parse_match_file<P: AsRef<Path>>(path: P) -> Result<MatchRecord, ScoutError> {
    let file = File::open(path)?;
    let mmap = unsafe { Mmap::map(&file)? };
    let text = decode_bytes(mmap.as_ref());
    parse_match_str(&text)
}

/// Parse an already loaded scout log.
pub fn parse_match_str(text: &str) -> Result<MatchRecord, ScoutError> {
    let sections = split_sections(text);
    if sections.scout.is_empty() {
        return Err(ScoutError::MissingSection { name: "3SCOUT" });
    }

    let info = parse_match_info(&sections.match_info)?;
    let (home_team, away_team) = parse_teams(&sections.teams)?;

    // Map phase: stateless per-line decode, order-independent
    let parsed: Vec<Option<ParsedScoutLine>> = sections
        .scout
        .par_iter()
        .map(|line| parse_scout_line(line.line_number, &line.raw))
        .collect();

    // Reduce phase: the fold must see lines in order
    let mut assembler = MatchAssembler::new();
    for line in parsed.iter().flatten() {
        assembler.process(line);
    }
    let assembled = assembler.finish();

    Ok(MatchRecord {
        info,
        home_team,
        away_team,
        home_players: parse_roster(&sections.home_players),
        away_players: parse_roster(&sections.away_players),
        declared_set_scores: parse_set_scores(&sections.set_scores),
        attack_combinations: parse_attack_combinations(&sections.attack_combinations),
        setter_calls: parse_setter_calls(&sections.setter_calls),
        video_path: parse_video_path(&sections.video),
        sets: assembled.sets,
        timeouts: assembled.timeouts,
        substitutions: assembled.substitutions,
    })
}

/// Scout files from older tooling arrive as Windows-1252; decode as UTF-8
/// when valid and fall back otherwise.
fn decode_bytes(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            let (text, _, _) = WINDOWS_1252.decode(bytes);
            text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libero_types::TeamSide;

    const MINIMAL_LOG: &str = "\
[3MATCH]
18/10/2025;20.30;2025/2026;Regional League;LIBERO-1.0
[3TEAMS]
HOM;Home VC;0;A. Coach;
AWY;Away VC;0;B. Coach;
[3SCOUT]
*13SH+
a02RH#
*p1:0
";

    #[test]
    fn test_minimal_log_parses() {
        let record = parse_match_str(MINIMAL_LOG).expect("parse");
        assert_eq!(record.home_team.code, "HOM");
        assert_eq!(record.away_team.name, "Away VC");
        assert_eq!(record.rally_count(), 1);
        assert_eq!(record.sets[0].rallies[0].point_winner, TeamSide::Home);
    }

    #[test]
    fn test_missing_scout_section_is_fatal() {
        let text = "[3MATCH]\n18/10/2025;;;;\n[3TEAMS]\nHOM;Home;0\nAWY;Away;0\n";
        let err = parse_match_str(text).unwrap_err();
        assert!(matches!(err, ScoutError::MissingSection { name: "3SCOUT" }));
    }

    #[test]
    fn test_windows_1252_bytes_decode() {
        // "Présentation" with a Windows-1252 e-acute (0xE9), invalid UTF-8
        let bytes = b"Pr\xE9sentation";
        let text = decode_bytes(bytes);
        assert_eq!(text, "Présentation");
    }

    #[test]
    fn test_utf8_passes_through_borrowed() {
        let text = decode_bytes("plain ascii".as_bytes());
        assert!(matches!(text, Cow::Borrowed(_)));
    }
}
