//! Static lookup tables for the single-character code sets of the scout
//! grammar. Lookups that miss fall back to the defaults documented on the
//! enums in `libero-types`.

use libero_types::{BallType, Quality, Skill};
use phf::{Map, Set, phf_map, phf_set};

pub static SKILL_CODES: Map<u8, Skill> = phf_map! {
    b'S' => Skill::Serve,
    b'R' => Skill::Reception,
    b'E' => Skill::Set,
    b'A' => Skill::Attack,
    b'B' => Skill::Block,
    b'D' => Skill::Dig,
    b'F' => Skill::Freeball,
};

pub static BALL_TYPES: Map<u8, BallType> = phf_map! {
    b'H' => BallType::High,
    b'M' => BallType::Half,
    b'Q' => BallType::Quick,
    b'T' => BallType::Tense,
    b'U' => BallType::Super,
    b'O' => BallType::Other,
};

pub static QUALITIES: Map<u8, Quality> = phf_map! {
    b'#' => Quality::Perfect,
    b'+' => Quality::Positive,
    b'!' => Quality::Neutral,
    b'-' => Quality::Negative,
    b'/' => Quality::Poor,
    b'=' => Quality::Error,
};

/// Letters at the effect position that describe the receive side of the
/// contact. Any other uppercase letter there is a generic end-effect.
pub static RECEIVE_EFFECTS: Set<u8> = phf_set! {
    b'P', b'N', b'O', b'E', b'L',
};

pub fn skill_for(code: u8) -> Skill {
    SKILL_CODES.get(&code).copied().unwrap_or(Skill::Serve)
}

pub fn ball_type_for(code: u8) -> BallType {
    BALL_TYPES.get(&code).copied().unwrap_or_default()
}

pub fn quality_for(code: u8) -> Quality {
    QUALITIES.get(&code).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_codes_map_to_variants() {
        assert_eq!(skill_for(b'A'), Skill::Attack);
        assert_eq!(skill_for(b'F'), Skill::Freeball);
        assert_eq!(ball_type_for(b'Q'), BallType::Quick);
        assert_eq!(quality_for(b'='), Quality::Error);
    }

    #[test]
    fn test_unrecognized_codes_fall_back_to_defaults() {
        assert_eq!(skill_for(b'X'), Skill::Serve);
        assert_eq!(ball_type_for(b'Z'), BallType::High);
        assert_eq!(quality_for(b'?'), Quality::Neutral);
    }

    #[test]
    fn test_receive_effect_alphabet_is_disjoint_from_subzones() {
        for b in b'A'..=b'D' {
            assert!(!RECEIVE_EFFECTS.contains(&b));
        }
    }
}
