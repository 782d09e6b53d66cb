//! Point-scoring units and the point-in-time events observed between them.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::action::{GameAction, TeamSide};

/// One point of play: every action between two consecutive point markers.
///
/// Built by the rally assembler when a point marker closes it and never
/// mutated afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rally {
    pub set_number: u8,
    /// 1-based within the set; restarts at 1 at every set boundary.
    pub number: u32,
    pub home_score_before: u8,
    pub away_score_before: u8,
    pub home_score_after: u8,
    pub away_score_after: u8,
    pub serving_team: TeamSide,
    pub point_winner: TeamSide,
    /// Ordered actions, sequence indices `0..n-1`.
    pub actions: Vec<GameAction>,
    /// Video offset (seconds) of the first action, when scouted.
    pub video_start: Option<i64>,
    /// Video offset (seconds) of the last action, when scouted.
    pub video_end: Option<i64>,
    /// Rotation numbers as last known going into the rally.
    pub home_rotation: Option<u8>,
    pub away_rotation: Option<u8>,
    /// Jersey numbers occupying positions P1..P6, as last known.
    pub home_positions: Option<[u8; 6]>,
    pub away_positions: Option<[u8; 6]>,
}

/// A timeout called by one bench, stamped with the game state at that moment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timeout {
    pub team: TeamSide,
    pub set_number: u8,
    pub home_score: u8,
    pub away_score: u8,
    pub timestamp: Option<NaiveTime>,
    pub video_offset: Option<i64>,
}

/// A player exchange, stamped like a timeout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Substitution {
    pub team: TeamSide,
    pub set_number: u8,
    pub home_score: u8,
    pub away_score: u8,
    pub player_out: u8,
    pub player_in: u8,
    pub timestamp: Option<NaiveTime>,
    pub video_offset: Option<i64>,
}
