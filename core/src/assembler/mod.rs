//! Rally assembly: the sequential fold over the decoded line stream.
//!
//! A single left-to-right pass carries score, rotation, and on-court
//! position state across lines and set boundaries, folding the stream into
//! Rally records plus Timeout and Substitution events. Per-line decoding is
//! order-independent; this fold is the one part of the pipeline that must
//! see the stream in order.

use libero_types::{GameAction, Rally, SetRecord, Skill, Substitution, TeamSide, Timeout};

use crate::scout::{LineEvent, LineMeta, ParsedScoutLine};


/// Everything the fold produced: rallies grouped by set, plus the
/// point-in-time events observed along the way.
#[derive(Debug, Clone, Default)]
pub struct AssembledMatch {
    pub sets: Vec<SetRecord>,
    pub timeouts: Vec<Timeout>,
    pub substitutions: Vec<Substitution>,
}

/// An action waiting for its rally to close, together with the per-line
/// metadata the rally snapshot needs.
#[derive(Debug, Clone)]
struct PendingAction {
    action: GameAction,
    video_offset: Option<i64>,
}

/// Mutable cross-line state. Reset at each set boundary; rotation and
/// position values carry forward from the most recent line that supplied
/// them and apply to the next rally closed.
#[derive(Debug, Clone)]
struct AssemblyState {
    set_number: u8,
    home_score: u8,
    away_score: u8,
    rally_number: u32,
    pending: Vec<PendingAction>,
    home_rotation: Option<u8>,
    away_rotation: Option<u8>,
    home_positions: Option<[u8; 6]>,
    away_positions: Option<[u8; 6]>,
}

impl Default for AssemblyState {
    fn default() -> Self {
        AssemblyState {
            set_number: 1,
            home_score: 0,
            away_score: 0,
            rally_number: 0,
            pending: Vec::new(),
            home_rotation: None,
            away_rotation: None,
            home_positions: None,
            away_positions: None,
        }
    }
}

#[derive(Debug, Default)]
pub struct MatchAssembler {
    state: AssemblyState,
    sets: Vec<SetRecord>,
    timeouts: Vec<Timeout>,
    substitutions: Vec<Substitution>,
}

impl MatchAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one decoded line into the match. Position and rotation updates
    /// from the line's metadata apply before the type-specific handling, so
    /// a rally snapshot always reflects the latest known state at close.
    pub fn process(&mut self, line: &ParsedScoutLine) {
        self.apply_meta(&line.meta);

        match &line.event {
            LineEvent::Action(action) => {
                self.state.pending.push(PendingAction {
                    action: action.clone(),
                    video_offset: line.meta.video_offset,
                });
            }
            LineEvent::Point { team, home, away } => {
                self.close_rally(*home, *away, *team);
            }
            LineEvent::SetEnd => self.end_set(line),
            LineEvent::Rotation { team, rotation }
            | LineEvent::RotationInit { team, rotation } => match team {
                TeamSide::Home => self.state.home_rotation = Some(*rotation),
                TeamSide::Away => self.state.away_rotation = Some(*rotation),
            },
            LineEvent::Timeout { team } => {
                self.timeouts.push(Timeout {
                    team: *team,
                    set_number: self.state.set_number,
                    home_score: self.state.home_score,
                    away_score: self.state.away_score,
                    timestamp: line.meta.timestamp,
                    video_offset: line.meta.video_offset,
                });
            }
            LineEvent::Substitution {
                team,
                player_out,
                player_in,
            } => {
                self.substitutions.push(Substitution {
                    team: *team,
                    set_number: self.state.set_number,
                    home_score: self.state.home_score,
                    away_score: self.state.away_score,
                    player_out: *player_out,
                    player_in: *player_in,
                    timestamp: line.meta.timestamp,
                    video_offset: line.meta.video_offset,
                });
            }
            // On-court composition is already captured through the per-line
            // position columns; these are informational here.
            LineEvent::Lineup { .. } | LineEvent::PlayerEntry { .. } => {}
        }
    }

    /// Finish the fold. A truncated log can leave actions with no trailing
    /// point marker; they close into one final rally whose winner is
    /// inferred from the side currently leading (home on ties).
    pub fn finish(mut self) -> AssembledMatch {
        if !self.state.pending.is_empty() {
            let winner = if self.state.away_score > self.state.home_score {
                TeamSide::Away
            } else {
                TeamSide::Home
            };
            let (home, away) = match winner {
                TeamSide::Home => (self.state.home_score + 1, self.state.away_score),
                TeamSide::Away => (self.state.home_score, self.state.away_score + 1),
            };
            tracing::warn!(
                set_number = self.state.set_number,
                actions = self.state.pending.len(),
                "stream ended mid-rally, closing with inferred winner"
            );
            self.close_rally(home, away, winner);
        }

        AssembledMatch {
            sets: self.sets,
            timeouts: self.timeouts,
            substitutions: self.substitutions,
        }
    }

    fn apply_meta(&mut self, meta: &LineMeta) {
        if meta.home_rotation.is_some() {
            self.state.home_rotation = meta.home_rotation;
        }
        if meta.away_rotation.is_some() {
            self.state.away_rotation = meta.away_rotation;
        }
        if meta.home_positions.is_some() {
            self.state.home_positions = meta.home_positions;
        }
        if meta.away_positions.is_some() {
            self.state.away_positions = meta.away_positions;
        }
    }

    /// A point marker closes the rally in progress. The marker's score is
    /// authoritative: it becomes the new running score rather than a +1
    /// step, since the two may disagree in edge cases.
    fn close_rally(&mut self, marker_home: u8, marker_away: u8, marker_team: TeamSide) {
        if self.state.pending.is_empty() {
            // Defensive no-op; should not occur with well-formed input
            return;
        }

        let point_winner = if marker_home > self.state.home_score {
            TeamSide::Home
        } else if marker_away > self.state.away_score {
            TeamSide::Away
        } else {
            marker_team
        };

        let serving_team = self
            .state
            .pending
            .iter()
            .find(|p| p.action.skill == Skill::Serve)
            .map(|p| p.action.team)
            .unwrap_or(TeamSide::Home);

        self.state.rally_number += 1;
        let rally_number = self.state.rally_number;

        let video_start = self.state.pending.first().and_then(|p| p.video_offset);
        let video_end = self.state.pending.last().and_then(|p| p.video_offset);

        let actions: Vec<GameAction> = self
            .state
            .pending
            .drain(..)
            .enumerate()
            .map(|(idx, mut pending)| {
                pending.action.rally_number = rally_number;
                pending.action.sequence = idx as u32;
                pending.action
            })
            .collect();

        let rally = Rally {
            set_number: self.state.set_number,
            number: rally_number,
            home_score_before: self.state.home_score,
            away_score_before: self.state.away_score,
            home_score_after: marker_home,
            away_score_after: marker_away,
            serving_team,
            point_winner,
            actions,
            video_start,
            video_end,
            home_rotation: self.state.home_rotation,
            away_rotation: self.state.away_rotation,
            home_positions: self.state.home_positions,
            away_positions: self.state.away_positions,
        };

        self.current_set().rallies.push(rally);
        self.state.home_score = marker_home;
        self.state.away_score = marker_away;
    }

    /// A set marker always wins: stray accumulated actions are discarded
    /// with a diagnostic rather than leaking into the next set.
    fn end_set(&mut self, line: &ParsedScoutLine) {
        if !self.state.pending.is_empty() {
            tracing::warn!(
                line_number = line.line_number,
                set_number = self.state.set_number,
                discarded = self.state.pending.len(),
                "set boundary reached with unclosed actions, discarding"
            );
            self.state.pending.clear();
        }

        self.state.set_number += 1;
        self.state.home_score = 0;
        self.state.away_score = 0;
        self.state.rally_number = 0;
    }

    fn current_set(&mut self) -> &mut SetRecord {
        let number = self.state.set_number;
        let missing = self.sets.last().map(|s| s.number != number).unwrap_or(true);
        if missing {
            self.sets.push(SetRecord {
                number,
                rallies: Vec::new(),
            });
        }
        self.sets.last_mut().expect("set record just ensured")
    }
}
