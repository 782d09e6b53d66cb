pub mod action;
pub mod match_record;
pub mod rally;

pub use action::{BallType, GameAction, Quality, Skill, TeamSide};
pub use match_record::{
    AttackCombination, MatchInfo, MatchRecord, Player, SetRecord, SetScore, SetterCall, TeamInfo,
};
pub use rally::{Rally, Substitution, Timeout};
