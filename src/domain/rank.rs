use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::models::LeagueEntryDto;

pub const SOLO_QUEUE: &str = "RANKED_SOLO_5x5";
pub const FLEX_QUEUE: &str = "RANKED_FLEX_SR";
/// Queue marker for a tier guessed from match history
pub const ESTIMATED_QUEUE: &str = "ESTIMATED";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Emerald,
    Diamond,
    Master,
    Grandmaster,
    Challenger,
}

impl Tier {
    pub const ALL: [Tier; 10] = [
        Tier::Iron,
        Tier::Bronze,
        Tier::Silver,
        Tier::Gold,
        Tier::Platinum,
        Tier::Emerald,
        Tier::Diamond,
        Tier::Master,
        Tier::Grandmaster,
        Tier::Challenger,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Iron => "IRON",
            Tier::Bronze => "BRONZE",
            Tier::Silver => "SILVER",
            Tier::Gold => "GOLD",
            Tier::Platinum => "PLATINUM",
            Tier::Emerald => "EMERALD",
            Tier::Diamond => "DIAMOND",
            Tier::Master => "MASTER",
            Tier::Grandmaster => "GRANDMASTER",
            Tier::Challenger => "CHALLENGER",
        }
    }

    /// Apex tiers have no divisions
    pub fn is_apex(&self) -> bool {
        *self >= Tier::Master
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Tier::ALL
            .into_iter()
            .find(|t| t.as_str() == upper)
            .ok_or_else(|| format!("unknown tier: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankEntry {
    pub queue_type: String,
    pub tier: Tier,
    pub division: Option<String>,
    pub league_points: i32,
    pub wins: i32,
    pub losses: i32,
}

impl RankEntry {
    pub fn games(&self) -> i32 {
        self.wins + self.losses
    }

    /// Season win rate in percent, `None` before any ranked game
    pub fn win_rate(&self) -> Option<f64> {
        let games = self.games();
        (games > 0).then(|| self.wins as f64 / games as f64 * 100.0)
    }

    /// `GOLD II`, or just the tier name for apex tiers
    pub fn label(&self) -> String {
        match &self.division {
            Some(division) if !self.tier.is_apex() => format!("{} {}", self.tier, division),
            _ => self.tier.to_string(),
        }
    }

    /// Solo queue wins over flex; other queues and unknown tiers are ignored
    pub fn pick_preferred(entries: &[LeagueEntryDto]) -> Option<RankEntry> {
        [SOLO_QUEUE, FLEX_QUEUE].iter().find_map(|queue| {
            entries
                .iter()
                .filter(|e| e.queue_type == *queue)
                .find_map(|e| RankEntry::try_from(e).ok())
        })
    }
}

impl TryFrom<&LeagueEntryDto> for RankEntry {
    type Error = String;

    fn try_from(dto: &LeagueEntryDto) -> Result<Self, Self::Error> {
        Ok(Self {
            queue_type: dto.queue_type.clone(),
            tier: dto.tier.parse()?,
            division: dto.rank.clone().filter(|r| !r.is_empty()),
            league_points: dto.league_points,
            wins: dto.wins,
            losses: dto.losses,
        })
    }
}

/// Where a player's rank came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RankSource {
    SummonerId,
    Puuid,
    Estimated,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankStanding {
    #[serde(flatten)]
    pub entry: RankEntry,
    pub source: RankSource,
}

impl RankStanding {
    pub fn is_estimated(&self) -> bool {
        self.source == RankSource::Estimated
    }

    /// The entry the scorer may treat as real league data
    pub fn official_entry(&self) -> Option<&RankEntry> {
        (!self.is_estimated()).then_some(&self.entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(queue: &str, tier: &str, rank: &str) -> LeagueEntryDto {
        LeagueEntryDto {
            queue_type: queue.to_string(),
            tier: tier.to_string(),
            rank: Some(rank.to_string()),
            league_points: 40,
            wins: 30,
            losses: 20,
        }
    }

    #[test]
    fn test_tier_ordering_and_parsing() {
        assert!(Tier::Iron < Tier::Gold);
        assert!(Tier::Grandmaster < Tier::Challenger);
        assert_eq!("gold".parse::<Tier>(), Ok(Tier::Gold));
        assert_eq!(" CHALLENGER ".parse::<Tier>(), Ok(Tier::Challenger));
        assert!("WOOD".parse::<Tier>().is_err());
        assert!(Tier::Master.is_apex());
        assert!(!Tier::Diamond.is_apex());
    }

    #[test]
    fn test_solo_queue_preferred() {
        let entries = vec![
            entry(FLEX_QUEUE, "PLATINUM", "I"),
            entry("CHERRY", "GOLD", "I"),
            entry(SOLO_QUEUE, "SILVER", "II"),
        ];

        let picked = RankEntry::pick_preferred(&entries).unwrap();
        assert_eq!(picked.tier, Tier::Silver);
        assert_eq!(picked.label(), "SILVER II");
        assert_eq!(picked.win_rate(), Some(60.0));
    }

    #[test]
    fn test_flex_used_without_solo() {
        let entries = vec![entry(FLEX_QUEUE, "MASTER", "I")];
        let picked = RankEntry::pick_preferred(&entries).unwrap();
        assert_eq!(picked.label(), "MASTER");

        assert!(RankEntry::pick_preferred(&[]).is_none());
    }

    #[test]
    fn test_estimated_standing_is_not_official() {
        let entry = RankEntry::try_from(&entry(SOLO_QUEUE, "GOLD", "IV")).unwrap();
        let standing = RankStanding {
            entry,
            source: RankSource::Estimated,
        };
        assert!(standing.official_entry().is_none());
    }
}
