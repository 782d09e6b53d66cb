//! The assembled match skeleton and the tabular-section records feeding it.

use serde::{Deserialize, Serialize};

use crate::rally::{Rally, Substitution, Timeout};

/// Header information for the match itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchInfo {
    /// Match date as written in the log (`DD/MM/YYYY`), not validated.
    pub date: Option<String>,
    pub time: Option<String>,
    pub season: Option<String>,
    pub competition: Option<String>,
    /// Version string of the scouting program that produced the file.
    pub scout_version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamInfo {
    pub code: String,
    pub name: String,
    pub sets_won: u8,
    pub head_coach: Option<String>,
    pub assistant_coach: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Player {
    pub number: u8,
    pub last_name: String,
    pub first_name: String,
    pub nickname: Option<String>,
    /// Role code as written in the roster (setter, middle, ...), unmapped.
    pub role: Option<String>,
    pub is_libero: bool,
}

/// Declared per-set result from the set-score section: running scores at the
/// 8/16/21 technical marks plus the final score and duration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetScore {
    pub partial_scores: Vec<(u8, u8)>,
    pub home_final: u8,
    pub away_final: u8,
    pub duration_minutes: Option<u16>,
}

/// Dictionary entry naming a rehearsed attack pattern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttackCombination {
    pub code: String,
    pub start_zone: Option<u8>,
    pub side: Option<String>,
    pub ball_type: Option<String>,
    pub description: String,
}

/// Dictionary entry naming a set-distribution pattern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetterCall {
    pub code: String,
    pub description: String,
}

/// The rallies of one played set, in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetRecord {
    pub number: u8,
    pub rallies: Vec<Rally>,
}

impl SetRecord {
    /// Final score of the set as assembled, taken from the last closed rally.
    pub fn final_score(&self) -> Option<(u8, u8)> {
        self.rallies
            .last()
            .map(|r| (r.home_score_after, r.away_score_after))
    }
}

/// The full structured match: metadata, rosters, dictionaries, and the
/// assembled event stream. Pure in-memory output of the parse; nothing here
/// is derived statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchRecord {
    pub info: MatchInfo,
    pub home_team: TeamInfo,
    pub away_team: TeamInfo,
    pub home_players: Vec<Player>,
    pub away_players: Vec<Player>,
    pub declared_set_scores: Vec<SetScore>,
    pub attack_combinations: Vec<AttackCombination>,
    pub setter_calls: Vec<SetterCall>,
    pub video_path: Option<String>,
    pub sets: Vec<SetRecord>,
    pub timeouts: Vec<Timeout>,
    pub substitutions: Vec<Substitution>,
}

impl MatchRecord {
    pub fn rally_count(&self) -> usize {
        self.sets.iter().map(|s| s.rallies.len()).sum()
    }
}
