//! Decoder for the compact action-code grammar.
//!
//! A left-to-right positional scan over the code bytes with one named
//! sub-routine per grammar production. Several productions peek ahead a
//! variable number of bytes before committing, which is why this is an
//! explicit cursor rather than a regular expression.
//!
//! The decoder is total: every branch has a safe default, so a malformed
//! code yields a plausible action instead of aborting the match parse.

use libero_types::{GameAction, Skill, TeamSide};
use memchr::memchr;

use super::codes::{RECEIVE_EFFECTS, ball_type_for, quality_for, skill_for};

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Cursor { bytes, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }

    fn eat(&mut self, pat: &[u8]) -> bool {
        if self.remaining().starts_with(pat) {
            self.pos += pat.len();
            true
        } else {
            false
        }
    }

    fn skip_while(&mut self, byte: u8) {
        while self.peek() == Some(byte) {
            self.pos += 1;
        }
    }
}

/// Decode one action code already classified as `LineType::Action`.
///
/// `code` is the full leading token including the team-prefix character at
/// position 0; the side itself is supplied by the caller, which derived it
/// from that prefix.
pub fn decode_action(code: &str, team: TeamSide) -> GameAction {
    let mut action = GameAction::new(team);
    let mut cur = Cursor::new(code.as_bytes());
    cur.pos = 1; // team prefix already consumed by the classifier

    read_player(&mut cur, &mut action);
    read_skill_block(&mut cur, &mut action);
    read_combo(&mut cur, &mut action);
    read_zones(&mut cur, &mut action);

    action
}

/// Two jersey digits, or the `$$` team-error sentinel, then the optional
/// opponent-error marker.
fn read_player(cur: &mut Cursor, action: &mut GameAction) {
    if cur.eat(b"$$") {
        action.player_number = 0;
        action.is_team_error = true;
    } else {
        let tens = cur.bump().unwrap_or(b'0');
        let ones = cur.bump().unwrap_or(b'0');
        action.player_number = (tens - b'0') * 10 + (ones - b'0');
    }

    if cur.peek() == Some(b'&') {
        action.is_opponent_error = true;
        cur.bump();
    }
}

/// Skill, ball type, and quality, one character each. The `$$&` shape drops
/// the skill character entirely and defaults to a free ball.
fn read_skill_block(cur: &mut Cursor, action: &mut GameAction) {
    action.skill = if action.is_team_error && action.is_opponent_error {
        Skill::Freeball
    } else {
        match cur.bump() {
            Some(b) => skill_for(b),
            None => Skill::Serve,
        }
    };

    if let Some(b) = cur.bump() {
        action.ball_type = ball_type_for(b);
    }
    if let Some(b) = cur.bump() {
        action.quality = quality_for(b);
    }
}

/// Optional two-character combination token: present only when two more
/// characters exist and neither is the zone separator. A leading `K` marks a
/// setter call instead of an attack combination.
fn read_combo(cur: &mut Cursor, action: &mut GameAction) {
    let rem = cur.remaining();
    if rem.len() < 2 || rem[0] == b'~' || rem[1] == b'~' {
        return;
    }
    let token = String::from_utf8_lossy(&rem[..2]).into_owned();
    cur.pos += 2;

    if token.starts_with('K') {
        action.setter_call = Some(token);
    } else {
        action.combination = Some(token);
    }
}

/// Zone section, anchored at the first `~` from the current scan position.
/// Missing separator means the code simply ends after the combo fields; all
/// zone fields stay absent.
fn read_zones(cur: &mut Cursor, action: &mut GameAction) {
    let Some(rel) = memchr(b'~', cur.remaining()) else {
        return;
    };
    cur.pos += rel;

    // Shape (a): the in-net marker sitting directly at the separator
    if cur.eat(b"~~~N") {
        action.in_net = true;
        return;
    }

    cur.skip_while(b'~');
    read_zone_digits(cur, action);

    if let Some(b @ b'A'..=b'D') = cur.peek() {
        action.end_subzone = Some(b as char);
        cur.bump();
    }

    // Shape (b): the in-net marker after the sub-zone; otherwise a single
    // uppercase letter is an effect, split by the receive allow-list.
    if cur.eat(b"~~N") {
        action.in_net = true;
    } else if let Some(b) = cur.peek()
        && b.is_ascii_uppercase()
    {
        if RECEIVE_EFFECTS.contains(&b) {
            action.receive_effect = Some(b as char);
        } else {
            action.end_effect = Some(b as char);
        }
        cur.bump();
    }

    cur.skip_while(b'~');
    if let Some(b @ b'0'..=b'3') = cur.peek() {
        action.num_blockers = Some(b - b'0');
        cur.bump();
    }
}

/// One digit or two. Two digits are start and end zone; a lone digit is a
/// start zone for the receiving fundamentals and an end zone for everything
/// else. That asymmetry is a quirk of the format, not an accident.
fn read_zone_digits(cur: &mut Cursor, action: &mut GameAction) {
    let Some(first) = cur.peek().filter(u8::is_ascii_digit) else {
        return;
    };
    cur.bump();

    if let Some(second) = cur.peek().filter(u8::is_ascii_digit) {
        cur.bump();
        action.start_zone = Some(first - b'0');
        action.end_zone = Some(second - b'0');
    } else if action.skill.zone_digit_is_start() {
        action.start_zone = Some(first - b'0');
    } else {
        action.end_zone = Some(first - b'0');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libero_types::{BallType, Quality};

    fn decode(code: &str) -> GameAction {
        let team = match code.as_bytes()[0] {
            b'*' => TeamSide::Home,
            _ => TeamSide::Away,
        };
        decode_action(code, team)
    }

    #[test]
    fn test_plain_serve_without_zone_section() {
        let action = decode("*13SH+");
        assert_eq!(action.team, TeamSide::Home);
        assert_eq!(action.player_number, 13);
        assert_eq!(action.skill, Skill::Serve);
        assert_eq!(action.ball_type, BallType::High);
        assert_eq!(action.quality, Quality::Positive);
        assert_eq!(action.start_zone, None);
        assert_eq!(action.end_zone, None);
        assert!(!action.in_net);
    }

    #[test]
    fn test_attack_with_combo_zones_subzone_and_blockers() {
        let action = decode("a07AH#V5~47CH2");
        assert_eq!(action.team, TeamSide::Away);
        assert_eq!(action.player_number, 7);
        assert_eq!(action.skill, Skill::Attack);
        assert_eq!(action.quality, Quality::Perfect);
        assert_eq!(action.combination.as_deref(), Some("V5"));
        assert_eq!(action.setter_call, None);
        assert_eq!(action.start_zone, Some(4));
        assert_eq!(action.end_zone, Some(7));
        assert_eq!(action.end_subzone, Some('C'));
        assert_eq!(action.num_blockers, Some(2));
    }

    #[test]
    fn test_team_error_with_opponent_error_skips_skill() {
        let action = decode("*$$&H#");
        assert!(action.is_team_error);
        assert!(action.is_opponent_error);
        assert_eq!(action.player_number, 0);
        assert_eq!(action.skill, Skill::Freeball);
        assert_eq!(action.ball_type, BallType::High);
        assert_eq!(action.quality, Quality::Perfect);
    }

    #[test]
    fn test_in_net_after_subzone() {
        let action = decode("*08SM=~~~15C~~N");
        assert_eq!(action.player_number, 8);
        assert_eq!(action.skill, Skill::Serve);
        assert_eq!(action.ball_type, BallType::Half);
        assert_eq!(action.quality, Quality::Error);
        assert_eq!(action.start_zone, Some(1));
        assert_eq!(action.end_zone, Some(5));
        assert_eq!(action.end_subzone, Some('C'));
        assert!(action.in_net);
    }

    #[test]
    fn test_in_net_directly_at_separator() {
        let action = decode("*10SH=~~~N");
        assert!(action.in_net);
        assert_eq!(action.start_zone, None);
        assert_eq!(action.end_zone, None);
        assert_eq!(action.end_subzone, None);
    }

    #[test]
    fn test_single_digit_is_start_zone_for_reception_and_dig() {
        let reception = decode("a02RH#~5");
        assert_eq!(reception.skill, Skill::Reception);
        assert_eq!(reception.start_zone, Some(5));
        assert_eq!(reception.end_zone, None);

        let dig = decode("*11DH+~6");
        assert_eq!(dig.start_zone, Some(6));
        assert_eq!(dig.end_zone, None);
    }

    #[test]
    fn test_single_digit_is_end_zone_for_other_skills() {
        let attack = decode("*09AH+~4");
        assert_eq!(attack.skill, Skill::Attack);
        assert_eq!(attack.start_zone, None);
        assert_eq!(attack.end_zone, Some(4));
    }

    #[test]
    fn test_setter_call_is_exclusive_with_combination() {
        let action = decode("*06EH#K1~3");
        assert_eq!(action.setter_call.as_deref(), Some("K1"));
        assert_eq!(action.combination, None);
        assert_eq!(action.end_zone, Some(3));
    }

    #[test]
    fn test_no_combo_when_separator_follows_quality() {
        let action = decode("*09AH+~45");
        assert_eq!(action.combination, None);
        assert_eq!(action.start_zone, Some(4));
        assert_eq!(action.end_zone, Some(5));
    }

    #[test]
    fn test_receive_effect_split_from_end_effect() {
        // 'P' sits in the receive allow-list
        let reception = decode("a02RH#~5P");
        assert_eq!(reception.receive_effect, Some('P'));
        assert_eq!(reception.end_effect, None);

        // 'H' does not
        let attack = decode("a07AH#V5~47CH2");
        assert_eq!(attack.end_effect, Some('H'));
        assert_eq!(attack.receive_effect, None);
    }

    #[test]
    fn test_unrecognized_codes_default_not_fail() {
        let action = decode("*13XY?");
        assert_eq!(action.skill, Skill::Serve);
        assert_eq!(action.ball_type, BallType::High);
        assert_eq!(action.quality, Quality::Neutral);
    }

    #[test]
    fn test_truncated_codes_are_total() {
        let action = decode("*13");
        assert_eq!(action.player_number, 13);
        assert_eq!(action.skill, Skill::Serve);
        assert_eq!(action.ball_type, BallType::High);
        assert_eq!(action.quality, Quality::Neutral);

        let action = decode("*13S");
        assert_eq!(action.skill, Skill::Serve);
    }

    #[test]
    fn test_opponent_error_after_player_number() {
        let action = decode("*05&AH+~4");
        assert_eq!(action.player_number, 5);
        assert!(!action.is_team_error);
        assert!(action.is_opponent_error);
        assert_eq!(action.skill, Skill::Attack);
    }

    #[test]
    fn test_blockers_after_in_net_suffix() {
        let action = decode("*07AH-~~4A~~N2");
        assert_eq!(action.end_zone, Some(4));
        assert_eq!(action.end_subzone, Some('A'));
        assert!(action.in_net);
        assert_eq!(action.num_blockers, Some(2));
    }
}
