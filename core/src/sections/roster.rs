//! Player roster extraction for the `[3PLAYERS-H]` / `[3PLAYERS-V]`
//! sections. Straight positional fields; a row that does not carry a jersey
//! number is skipped with a diagnostic rather than failing the parse.

use hashbrown::HashMap;
use libero_types::Player;

const NUMBER_COLUMN: usize = 1;
const LAST_NAME_COLUMN: usize = 9;
const FIRST_NAME_COLUMN: usize = 10;
const NICKNAME_COLUMN: usize = 11;
const ROLE_COLUMN: usize = 13;
const LIBERO_COLUMN: usize = 14;

fn col<'a>(fields: &[&'a str], idx: usize) -> Option<&'a str> {
    fields.get(idx).map(|f| f.trim()).filter(|f| !f.is_empty())
}

pub fn parse_roster(lines: &[String]) -> Vec<Player> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(idx, line)| {
            let fields: Vec<&str> = line.split(';').collect();
            let Some(number) = col(&fields, NUMBER_COLUMN).and_then(|f| f.parse().ok()) else {
                tracing::warn!(row = idx + 1, raw = line.as_str(), "roster row without jersey number, skipping");
                return None;
            };

            Some(Player {
                number,
                last_name: col(&fields, LAST_NAME_COLUMN).unwrap_or_default().to_string(),
                first_name: col(&fields, FIRST_NAME_COLUMN).unwrap_or_default().to_string(),
                nickname: col(&fields, NICKNAME_COLUMN).map(str::to_string),
                role: col(&fields, ROLE_COLUMN).map(str::to_string),
                is_libero: col(&fields, LIBERO_COLUMN) == Some("L"),
            })
        })
        .collect()
}

/// Index a roster by jersey number for O(1) lookups when resolving the
/// player numbers scattered through scout lines. Duplicate numbers keep the
/// first row, matching the roster's declaration order.
pub fn roster_index(players: &[Player]) -> HashMap<u8, &Player> {
    let mut index = HashMap::with_capacity(players.len());
    for player in players {
        index.entry(player.number).or_insert(player);
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_roster_rows_positional() {
        let players = parse_roster(&lines(&[
            "0;10;1;2;3;4;5;6;7;DOE;Jane;JD;8;OH;",
            "0;05;1;2;3;4;5;6;7;ROE;Riley;;8;LI;L",
        ]));
        assert_eq!(players.len(), 2);
        assert_eq!(players[0].number, 10);
        assert_eq!(players[0].last_name, "DOE");
        assert_eq!(players[0].first_name, "Jane");
        assert_eq!(players[0].nickname.as_deref(), Some("JD"));
        assert_eq!(players[0].role.as_deref(), Some("OH"));
        assert!(!players[0].is_libero);

        assert_eq!(players[1].number, 5);
        assert_eq!(players[1].nickname, None);
        assert!(players[1].is_libero);
    }

    #[test]
    fn test_row_without_number_is_skipped() {
        let players = parse_roster(&lines(&[
            "0;;1;2;3;4;5;6;7;GHOST;Player;;8;;",
            "0;09;1;2;3;4;5;6;7;REAL;Player;;8;;",
        ]));
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].number, 9);
    }

    #[test]
    fn test_empty_section_is_empty_roster() {
        assert!(parse_roster(&[]).is_empty());
    }

    #[test]
    fn test_roster_index_keeps_first_duplicate() {
        let players = parse_roster(&lines(&[
            "0;09;1;2;3;4;5;6;7;FIRST;Row;;8;;",
            "0;09;1;2;3;4;5;6;7;SECOND;Row;;8;;",
        ]));
        let index = roster_index(&players);
        assert_eq!(index.len(), 1);
        assert_eq!(index[&9].last_name, "FIRST");
    }
}
