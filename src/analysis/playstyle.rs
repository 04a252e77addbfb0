use super::types::PlayStyle;
use crate::domain::MatchRecord;

/// Champion and role habits over the same matches the metrics use.
/// Ties go to whatever was played most recently (first in the list).
pub fn summarize_playstyle(matches: &[MatchRecord], puuid: &str) -> PlayStyle {
    let records: Vec<_> = matches
        .iter()
        .filter(|m| m.duration_secs > 0)
        .filter_map(|m| m.participant(puuid))
        .filter(|p| !p.early_surrender)
        .collect();

    let champions = tally(records.iter().map(|p| p.champion.as_str()));
    let roles = tally(
        records
            .iter()
            .map(|p| p.role.as_str())
            .filter(|r| !r.is_empty() && *r != "Invalid"),
    );

    let top_champion = most_common(&champions);

    PlayStyle {
        most_played_champion: top_champion.map(|(name, _)| name.to_string()),
        most_played_games: top_champion.map(|(_, count)| count).unwrap_or(0),
        main_role: most_common(&roles).map(|(role, _)| role.to_string()),
        champion_pool_size: champions.len(),
    }
}

/// Counts in first-seen order
fn tally<'a>(items: impl Iterator<Item = &'a str>) -> Vec<(&'a str, usize)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for item in items.filter(|i| !i.is_empty()) {
        match counts.iter_mut().find(|(name, _)| *name == item) {
            Some((_, count)) => *count += 1,
            None => counts.push((item, 1)),
        }
    }
    counts
}

fn most_common<'a>(counts: &[(&'a str, usize)]) -> Option<(&'a str, usize)> {
    counts.iter().fold(None, |best, &(name, count)| match best {
        Some((_, best_count)) if best_count >= count => best,
        _ => Some((name, count)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MatchParticipantRecord;

    fn game(champion: &str, role: &str) -> MatchRecord {
        MatchRecord {
            match_id: format!("KR_{champion}"),
            queue_id: 420,
            duration_secs: 1500,
            started_at: None,
            participants: vec![MatchParticipantRecord {
                puuid: "me".to_string(),
                champion: champion.to_string(),
                role: role.to_string(),
                kills: 1,
                deaths: 1,
                assists: 1,
                minions_killed: 100,
                vision_score: 10,
                damage_dealt: 10000,
                gold_earned: 8000,
                win: true,
                early_surrender: false,
            }],
        }
    }

    #[test]
    fn test_most_played_and_pool() {
        let matches = vec![
            game("Ahri", "MIDDLE"),
            game("Lux", "UTILITY"),
            game("Lux", "MIDDLE"),
            game("Ahri", "MIDDLE"),
            game("Syndra", "MIDDLE"),
        ];
        let style = summarize_playstyle(&matches, "me");

        // Ahri and Lux tie on 2, Ahri was seen first
        assert_eq!(style.most_played_champion.as_deref(), Some("Ahri"));
        assert_eq!(style.most_played_games, 2);
        assert_eq!(style.main_role.as_deref(), Some("MIDDLE"));
        assert_eq!(style.champion_pool_size, 3);
    }

    #[test]
    fn test_empty_history() {
        let style = summarize_playstyle(&[], "me");
        assert_eq!(style, PlayStyle::default());

        let style = summarize_playstyle(&[game("Ahri", "")], "someone-else");
        assert_eq!(style.champion_pool_size, 0);
    }

    #[test]
    fn test_blank_role_ignored() {
        let style = summarize_playstyle(&[game("Ahri", ""), game("Ahri", "Invalid")], "me");
        assert_eq!(style.main_role, None);
        assert_eq!(style.most_played_games, 2);
    }
}
