//! Decoded game actions and the closed code sets they are built from.
//!
//! Every single-character code in the scout grammar maps to one of these
//! enums. Unrecognized codes never fail the decode; each set carries a
//! documented fallback variant instead.

use serde::{Deserialize, Serialize};

/// Which bench a line belongs to, derived from the `*`/`a` prefix convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    pub fn opponent(self) -> TeamSide {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }
}

/// The seven scouted fundamentals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Skill {
    Serve,
    Reception,
    Set,
    Attack,
    Block,
    Dig,
    Freeball,
}

impl Skill {
    /// Single-digit zone codes populate the start zone for the receiving
    /// fundamentals and the end zone for everything else.
    pub fn zone_digit_is_start(self) -> bool {
        matches!(self, Skill::Reception | Skill::Dig)
    }

    pub fn as_code(self) -> char {
        match self {
            Skill::Serve => 'S',
            Skill::Reception => 'R',
            Skill::Set => 'E',
            Skill::Attack => 'A',
            Skill::Block => 'B',
            Skill::Dig => 'D',
            Skill::Freeball => 'F',
        }
    }
}

/// Tempo/trajectory of the ball for the action, from the 6-letter code set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BallType {
    /// `H` - also the fallback for unrecognized codes
    #[default]
    High,
    /// `M`
    Half,
    /// `Q`
    Quick,
    /// `T`
    Tense,
    /// `U`
    Super,
    /// `O`
    Other,
}

impl BallType {
    pub fn as_code(self) -> char {
        match self {
            BallType::High => 'H',
            BallType::Half => 'M',
            BallType::Quick => 'Q',
            BallType::Tense => 'T',
            BallType::Super => 'U',
            BallType::Other => 'O',
        }
    }
}

/// Six-grade evaluation scale shared by all skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Quality {
    /// `#`
    Perfect,
    /// `+`
    Positive,
    /// `!` - also the fallback for unrecognized codes
    #[default]
    Neutral,
    /// `-`
    Negative,
    /// `/`
    Poor,
    /// `=`
    Error,
}

impl Quality {
    pub fn as_code(self) -> char {
        match self {
            Quality::Perfect => '#',
            Quality::Positive => '+',
            Quality::Neutral => '!',
            Quality::Negative => '-',
            Quality::Poor => '/',
            Quality::Error => '=',
        }
    }
}

/// One decoded game event from a scout line's compact action code.
///
/// Built once by the action decoder; the rally assembler later stamps in
/// `rally_number` and `sequence` when the owning rally closes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameAction {
    pub team: TeamSide,
    /// Jersey number. 0 is the sentinel for a team-level error (`$$`),
    /// not an individual player.
    pub player_number: u8,
    pub is_team_error: bool,
    pub is_opponent_error: bool,
    pub skill: Skill,
    pub ball_type: BallType,
    pub quality: Quality,
    /// Two-character attack combination code. Mutually exclusive with
    /// `setter_call`.
    pub combination: Option<String>,
    /// Two-character `K`-prefixed set-distribution code.
    pub setter_call: Option<String>,
    pub start_zone: Option<u8>,
    pub end_zone: Option<u8>,
    /// `A`..`D` refinement of the end zone.
    pub end_subzone: Option<char>,
    pub end_effect: Option<char>,
    pub receive_effect: Option<char>,
    pub num_blockers: Option<u8>,
    pub in_net: bool,
    /// 1-based rally number within the set, stamped by the assembler.
    pub rally_number: u32,
    /// 0-based position within the rally, stamped by the assembler.
    pub sequence: u32,
}

impl GameAction {
    /// Fresh action with nothing decoded yet beyond side and the neutral
    /// defaults. The decoder fills the rest in.
    pub fn new(team: TeamSide) -> Self {
        GameAction {
            team,
            player_number: 0,
            is_team_error: false,
            is_opponent_error: false,
            skill: Skill::Serve,
            ball_type: BallType::default(),
            quality: Quality::default(),
            combination: None,
            setter_call: None,
            start_zone: None,
            end_zone: None,
            end_subzone: None,
            end_effect: None,
            receive_effect: None,
            num_blockers: None,
            in_net: false,
            rally_number: 0,
            sequence: 0,
        }
    }
}
