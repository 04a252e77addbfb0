pub mod metrics;
pub mod narrative;
pub mod playstyle;
pub mod scorer;
pub mod types;

pub use metrics::aggregate_metrics;
pub use narrative::generate_narrative;
pub use playstyle::summarize_playstyle;
pub use scorer::{ScoringTables, derive_trend, estimate_tier, potential_score, score_from_matches};
pub use types::{Narrative, PerformanceMetrics, PlayStyle, PotentialAnalysis, Trend};

use crate::domain::RankEntry;

/// Score, trend and text for already aggregated inputs
pub fn evaluate_potential(
    rank: Option<&RankEntry>,
    metrics: &PerformanceMetrics,
    playstyle: &PlayStyle,
    tables: &ScoringTables,
) -> PotentialAnalysis {
    let score = potential_score(rank, metrics, tables);
    let trend = derive_trend(metrics);
    let narrative = generate_narrative(score, trend, metrics, playstyle);
    PotentialAnalysis::new(score, trend, narrative)
}
