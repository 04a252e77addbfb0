use serde::Serialize;

pub const DEFAULT_WIN_RATE: f64 = 50.0;
pub const DEFAULT_KDA: f64 = 1.0;
pub const DEFAULT_CS_PER_MIN: f64 = 5.0;
pub const DEFAULT_DAMAGE_PER_MIN: f64 = 400.0;
pub const DEFAULT_GOLD_PER_MIN: f64 = 300.0;
pub const DEFAULT_VISION_PER_MIN: f64 = 1.0;
pub const DEFAULT_CONSISTENCY: f64 = 50.0;

/// Averages over the analyzed matches. Win rate and consistency are 0-100.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    pub recent_win_rate: f64,
    pub avg_kda: f64,
    pub avg_kills: f64,
    pub avg_deaths: f64,
    pub avg_assists: f64,
    pub avg_cs_per_min: f64,
    pub avg_damage_per_min: f64,
    pub avg_gold_per_min: f64,
    pub avg_vision_per_min: f64,
    pub consistency: f64,
    pub games_analyzed: usize,
    pub wins: usize,
}

/// Used when no match could be attributed to the player
impl Default for PerformanceMetrics {
    fn default() -> Self {
        Self {
            recent_win_rate: DEFAULT_WIN_RATE,
            avg_kda: DEFAULT_KDA,
            avg_kills: 0.0,
            avg_deaths: 0.0,
            avg_assists: 0.0,
            avg_cs_per_min: DEFAULT_CS_PER_MIN,
            avg_damage_per_min: DEFAULT_DAMAGE_PER_MIN,
            avg_gold_per_min: DEFAULT_GOLD_PER_MIN,
            avg_vision_per_min: DEFAULT_VISION_PER_MIN,
            consistency: DEFAULT_CONSISTENCY,
            games_analyzed: 0,
            wins: 0,
        }
    }
}

impl PerformanceMetrics {
    pub fn losses(&self) -> usize {
        self.games_analyzed - self.wins
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayStyle {
    pub most_played_champion: Option<String>,
    pub most_played_games: usize,
    pub main_role: Option<String>,
    pub champion_pool_size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Ascending,
    Stable,
    Descending,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Ascending => "ascending",
            Trend::Stable => "stable",
            Trend::Descending => "descending",
        }
    }
}

/// Text produced for a score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Narrative {
    pub one_line: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PotentialAnalysis {
    pub score: u8,
    pub one_line: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub trend: Trend,
}

impl PotentialAnalysis {
    pub fn new(score: u8, trend: Trend, narrative: Narrative) -> Self {
        Self {
            score,
            one_line: narrative.one_line,
            strengths: narrative.strengths,
            improvements: narrative.improvements,
            trend,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trend_label(trend: Trend) -> &'static str {
        trend.as_str()
    }

    #[test]
    fn test_trend_label_matches_serialized_form() {
        for trend in [Trend::Ascending, Trend::Stable, Trend::Descending] {
            let json = serde_json::to_value(trend).unwrap();
            assert_eq!(json, trend_label(trend));
        }
    }
}
