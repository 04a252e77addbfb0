use log::debug;

use super::types::{PerformanceMetrics, Trend};
use crate::domain::{RankEntry, Tier};

const ASCENDING_MIN_WIN_RATE: f64 = 60.0;
const ASCENDING_MIN_KDA: f64 = 2.0;
const DESCENDING_MAX_WIN_RATE: f64 = 45.0;
const DESCENDING_MAX_KDA: f64 = 1.5;

/// Bonus granted when a metric reaches `min`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub min: f64,
    pub bonus: i32,
}

const fn at_least(min: f64, bonus: i32) -> Threshold {
    Threshold { min, bonus }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankWeights {
    pub tier: f64,
    pub kda: f64,
    pub cs: f64,
    pub vision: f64,
    pub win_rate: f64,
    pub consistency: f64,
}

/// Lookup tables for both scoring formulas. Threshold lists are ordered
/// from the highest bar down; the first one reached applies.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringTables {
    pub match_base: i32,
    pub kda_bonuses: Vec<Threshold>,
    pub win_rate_bonuses: Vec<Threshold>,
    pub cs_bonuses: Vec<Threshold>,
    pub vision_bonuses: Vec<Threshold>,
    pub tier_scores: Vec<(Tier, f64)>,
    pub weights: RankWeights,
    /// Match-only score floor for each tier we are willing to guess
    pub estimation_bands: Vec<(u8, Tier)>,
}

impl Default for ScoringTables {
    fn default() -> Self {
        Self {
            match_base: 50,
            kda_bonuses: vec![
                at_least(3.0, 25),
                at_least(2.0, 15),
                at_least(1.5, 10),
                at_least(1.0, 5),
            ],
            win_rate_bonuses: vec![
                at_least(70.0, 25),
                at_least(60.0, 20),
                at_least(55.0, 15),
                at_least(50.0, 10),
            ],
            cs_bonuses: vec![at_least(8.0, 15), at_least(6.5, 10), at_least(5.0, 5)],
            vision_bonuses: vec![at_least(2.0, 10), at_least(1.5, 5)],
            tier_scores: vec![
                (Tier::Iron, 15.0),
                (Tier::Bronze, 25.0),
                (Tier::Silver, 35.0),
                (Tier::Gold, 45.0),
                (Tier::Platinum, 55.0),
                (Tier::Emerald, 65.0),
                (Tier::Diamond, 75.0),
                (Tier::Master, 85.0),
                (Tier::Grandmaster, 90.0),
                (Tier::Challenger, 95.0),
            ],
            weights: RankWeights {
                tier: 0.30,
                kda: 0.25,
                cs: 0.15,
                vision: 0.15,
                win_rate: 0.10,
                consistency: 0.05,
            },
            estimation_bands: vec![
                (85, Tier::Diamond),
                (75, Tier::Emerald),
                (65, Tier::Platinum),
                (58, Tier::Gold),
                (50, Tier::Silver),
            ],
        }
    }
}

impl ScoringTables {
    pub fn tier_score(&self, tier: Tier) -> f64 {
        self.tier_scores
            .iter()
            .find(|(t, _)| *t == tier)
            .map(|(_, score)| *score)
            .unwrap_or(0.0)
    }
}

/// Potential score in 0..=100. Real league data switches to the weighted
/// formula; without it the score comes from match stats alone.
pub fn potential_score(
    rank: Option<&RankEntry>,
    metrics: &PerformanceMetrics,
    tables: &ScoringTables,
) -> u8 {
    match rank {
        Some(entry) => score_with_rank(entry, metrics, tables),
        None => score_from_matches(metrics, tables),
    }
}

pub fn score_from_matches(metrics: &PerformanceMetrics, tables: &ScoringTables) -> u8 {
    let total = tables.match_base
        + bonus(&tables.kda_bonuses, metrics.avg_kda)
        + bonus(&tables.win_rate_bonuses, metrics.recent_win_rate)
        + bonus(&tables.cs_bonuses, metrics.avg_cs_per_min)
        + bonus(&tables.vision_bonuses, metrics.avg_vision_per_min);

    debug!("Match-only score before clamp: {}", total);
    total.clamp(0, 100) as u8
}

pub fn score_with_rank(
    entry: &RankEntry,
    metrics: &PerformanceMetrics,
    tables: &ScoringTables,
) -> u8 {
    let w = &tables.weights;
    let weighted = tables.tier_score(entry.tier) * w.tier
        + (metrics.avg_kda * 25.0).min(100.0) * w.kda
        + (metrics.avg_cs_per_min * 12.0).min(100.0) * w.cs
        + (metrics.avg_vision_per_min * 40.0).min(100.0) * w.vision
        + metrics.recent_win_rate * w.win_rate
        + metrics.consistency * w.consistency;

    debug!("Rank-weighted score for {}: {:.2}", entry.label(), weighted);
    weighted.round().clamp(0.0, 100.0) as u8
}

fn bonus(thresholds: &[Threshold], value: f64) -> i32 {
    thresholds
        .iter()
        .find(|t| value >= t.min)
        .map(|t| t.bonus)
        .unwrap_or(0)
}

pub fn derive_trend(metrics: &PerformanceMetrics) -> Trend {
    let win_rate = metrics.recent_win_rate;
    let kda = metrics.avg_kda;

    if win_rate > ASCENDING_MIN_WIN_RATE && kda > ASCENDING_MIN_KDA {
        Trend::Ascending
    } else if win_rate < DESCENDING_MAX_WIN_RATE && kda < DESCENDING_MAX_KDA {
        Trend::Descending
    } else {
        Trend::Stable
    }
}

/// Guess a tier from the match-only score; `None` below the lowest band
pub fn estimate_tier(match_score: u8, tables: &ScoringTables) -> Option<Tier> {
    tables
        .estimation_bands
        .iter()
        .find(|(floor, _)| match_score >= *floor)
        .map(|(_, tier)| *tier)
}
