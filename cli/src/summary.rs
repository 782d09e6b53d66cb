//! Plain-text match summary for the terminal.

use libero_core::sections::roster::roster_index;
use libero_types::{MatchRecord, Player, TeamSide};

pub fn print_match(record: &MatchRecord) {
    println!(
        "{} ({}) vs {} ({})",
        record.home_team.name, record.home_team.code, record.away_team.name, record.away_team.code,
    );
    if let Some(date) = &record.info.date {
        println!("played {date}");
    }

    for set in &record.sets {
        let score = set
            .final_score()
            .map(|(h, a)| format!("{h}:{a}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "set {}: {} rallies, final {}",
            set.number,
            set.rallies.len(),
            score,
        );
    }

    println!(
        "{} rallies, {} timeouts, {} substitutions",
        record.rally_count(),
        record.timeouts.len(),
        record.substitutions.len(),
    );

    let home_roster = roster_index(&record.home_players);
    let away_roster = roster_index(&record.away_players);
    for sub in &record.substitutions {
        let roster = match sub.team {
            TeamSide::Home => &home_roster,
            TeamSide::Away => &away_roster,
        };
        println!(
            "  sub (set {}, {}:{}): {} -> {}",
            sub.set_number,
            sub.home_score,
            sub.away_score,
            player_name(roster.get(&sub.player_out).copied(), sub.player_out),
            player_name(roster.get(&sub.player_in).copied(), sub.player_in),
        );
    }
}

fn player_name(player: Option<&Player>, number: u8) -> String {
    match player {
        Some(p) => format!("#{number} {}", p.last_name),
        None => format!("#{number}"),
    }
}
