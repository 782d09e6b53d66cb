//! Dictionaries declared in the log: attack combinations and setter calls.
//! These name the two-character codes the action decoder later encounters in
//! scout lines.

use libero_types::{AttackCombination, SetterCall};

fn col<'a>(fields: &[&'a str], idx: usize) -> Option<&'a str> {
    fields.get(idx).map(|f| f.trim()).filter(|f| !f.is_empty())
}

/// `[3ATTACKCOMBINATION]`: code;start zone;side;ball type;description
pub fn parse_attack_combinations(lines: &[String]) -> Vec<AttackCombination> {
    lines
        .iter()
        .filter_map(|line| {
            let fields: Vec<&str> = line.split(';').collect();
            let code = col(&fields, 0)?;

            Some(AttackCombination {
                code: code.to_string(),
                start_zone: col(&fields, 1).and_then(|f| f.parse().ok()),
                side: col(&fields, 2).map(str::to_string),
                ball_type: col(&fields, 3).map(str::to_string),
                description: col(&fields, 4).unwrap_or_default().to_string(),
            })
        })
        .collect()
}

/// `[3SETTERCALL]`: code;description
pub fn parse_setter_calls(lines: &[String]) -> Vec<SetterCall> {
    lines
        .iter()
        .filter_map(|line| {
            let fields: Vec<&str> = line.split(';').collect();
            let code = col(&fields, 0)?;

            Some(SetterCall {
                code: code.to_string(),
                description: col(&fields, 1).unwrap_or_default().to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_attack_combinations() {
        let combos = parse_attack_combinations(&lines(&[
            "X5;4;L;Q;Quick in front",
            "V5;4;L;H;High ball to 4",
            ";;;;no code",
        ]));
        assert_eq!(combos.len(), 2);
        assert_eq!(combos[0].code, "X5");
        assert_eq!(combos[0].start_zone, Some(4));
        assert_eq!(combos[1].description, "High ball to 4");
    }

    #[test]
    fn test_setter_calls() {
        let calls = parse_setter_calls(&lines(&["K1;Front quick", "K2;Back quick"]));
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].code, "K1");
        assert_eq!(calls[1].description, "Back quick");
    }
}
