//! Positional parsers for the mandatory header sections and the simple
//! tabular ones: match info, teams, declared set scores, and the video file
//! path. Match info and teams are assumed mandatory; a missing line there is
//! a hard failure, unlike anything in the scout section.

use libero_types::{MatchInfo, SetScore, TeamInfo};

use crate::error::ScoutError;

fn col<'a>(fields: &[&'a str], idx: usize) -> Option<&'a str> {
    fields.get(idx).map(|f| f.trim()).filter(|f| !f.is_empty())
}

fn col_string(fields: &[&str], idx: usize) -> Option<String> {
    col(fields, idx).map(str::to_string)
}

/// Parse the `[3MATCH]` section: one mandatory line with date, time,
/// season, competition, and the scouting program version.
pub fn parse_match_info(lines: &[String]) -> Result<MatchInfo, ScoutError> {
    let line = lines.first().ok_or(ScoutError::MissingSection {
        name: "3MATCH",
    })?;
    let fields: Vec<&str> = line.split(';').collect();

    Ok(MatchInfo {
        date: col_string(&fields, 0),
        time: col_string(&fields, 1),
        season: col_string(&fields, 2),
        competition: col_string(&fields, 3),
        scout_version: col_string(&fields, 4),
    })
}

/// Parse the `[3TEAMS]` section: exactly one line per side, home first.
pub fn parse_teams(lines: &[String]) -> Result<(TeamInfo, TeamInfo), ScoutError> {
    if lines.len() < 2 {
        return Err(ScoutError::MalformedSection {
            name: "3TEAMS",
            reason: format!("expected 2 team lines, found {}", lines.len()),
        });
    }

    Ok((parse_team_line(&lines[0]), parse_team_line(&lines[1])))
}

fn parse_team_line(line: &str) -> TeamInfo {
    let fields: Vec<&str> = line.split(';').collect();
    TeamInfo {
        code: col_string(&fields, 0).unwrap_or_default(),
        name: col_string(&fields, 1).unwrap_or_default(),
        sets_won: col(&fields, 2).and_then(|f| f.parse().ok()).unwrap_or(0),
        head_coach: col_string(&fields, 3),
        assistant_coach: col_string(&fields, 4),
    }
}

/// Parse the `[3SET]` section: per set, the running score at the 8/16/21
/// technical marks, the final score, and the duration in minutes.
/// Malformed lines are skipped with a diagnostic; the section is optional.
pub fn parse_set_scores(lines: &[String]) -> Vec<SetScore> {
    lines
        .iter()
        .filter_map(|line| {
            let fields: Vec<&str> = line.split(';').collect();
            let (home_final, away_final) = score_pair(col(&fields, 4)?)?;

            Some(SetScore {
                partial_scores: (1..=3)
                    .filter_map(|idx| col(&fields, idx).and_then(score_pair))
                    .collect(),
                home_final,
                away_final,
                duration_minutes: col(&fields, 5).and_then(|f| f.parse().ok()),
            })
        })
        .collect()
}

fn score_pair(field: &str) -> Option<(u8, u8)> {
    let (home, away) = field.split_once('-')?;
    Some((home.trim().parse().ok()?, away.trim().parse().ok()?))
}

/// Parse the `[3VIDEO]` section: `Camera0=<path>` assignments, first one
/// wins.
pub fn parse_video_path(lines: &[String]) -> Option<String> {
    lines
        .iter()
        .find_map(|line| line.split_once('='))
        .map(|(_, path)| path.trim().to_string())
        .filter(|path| !path.is_empty())
}
