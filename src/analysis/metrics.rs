use log::debug;
use ndarray::Array1;

use super::types::{DEFAULT_CONSISTENCY, PerformanceMetrics};
use crate::domain::{MatchParticipantRecord, MatchRecord};

/// Metrics of a single match for the analyzed player
#[derive(Debug, Clone, PartialEq)]
pub struct MatchMetrics {
    pub kda: f64,
    pub kills: f64,
    pub deaths: f64,
    pub assists: f64,
    pub cs_per_min: f64,
    pub damage_per_min: f64,
    pub gold_per_min: f64,
    pub vision_per_min: f64,
    pub win: bool,
}

impl MatchMetrics {
    fn from_record(record: &MatchParticipantRecord, minutes: f64) -> Self {
        Self {
            kda: kda(record.kills, record.deaths, record.assists),
            kills: record.kills as f64,
            deaths: record.deaths as f64,
            assists: record.assists as f64,
            cs_per_min: record.minions_killed as f64 / minutes,
            damage_per_min: record.damage_dealt as f64 / minutes,
            gold_per_min: record.gold_earned as f64 / minutes,
            vision_per_min: record.vision_score as f64 / minutes,
            win: record.win,
        }
    }
}

pub fn kda(kills: u32, deaths: u32, assists: u32) -> f64 {
    (kills + assists) as f64 / deaths.max(1) as f64
}

/// Per-match metrics for every match the player took part in.
/// Matches without the player, remakes and zero-length games are skipped.
pub fn collect_match_metrics(matches: &[MatchRecord], puuid: &str) -> Vec<MatchMetrics> {
    matches
        .iter()
        .filter_map(|m| {
            let Some(record) = m.participant(puuid) else {
                debug!("Player not found in match {}, skipping", m.match_id);
                return None;
            };
            if record.early_surrender || m.duration_secs <= 0 {
                debug!("Match {} is a remake, skipping", m.match_id);
                return None;
            }
            Some(MatchMetrics::from_record(record, m.duration_minutes()))
        })
        .collect()
}

/// Aggregate a player's recent matches. Never fails: with no usable match
/// the documented defaults are returned.
pub fn aggregate_metrics(matches: &[MatchRecord], puuid: &str) -> PerformanceMetrics {
    let per_match = collect_match_metrics(matches, puuid);
    aggregate_match_metrics(&per_match)
}

pub fn aggregate_match_metrics(per_match: &[MatchMetrics]) -> PerformanceMetrics {
    if per_match.is_empty() {
        return PerformanceMetrics::default();
    }

    let wins = per_match.iter().filter(|m| m.win).count();
    let games = per_match.len();

    PerformanceMetrics {
        recent_win_rate: wins as f64 / games as f64 * 100.0,
        avg_kda: mean_of(per_match, |m| m.kda),
        avg_kills: mean_of(per_match, |m| m.kills),
        avg_deaths: mean_of(per_match, |m| m.deaths),
        avg_assists: mean_of(per_match, |m| m.assists),
        avg_cs_per_min: mean_of(per_match, |m| m.cs_per_min),
        avg_damage_per_min: mean_of(per_match, |m| m.damage_per_min),
        avg_gold_per_min: mean_of(per_match, |m| m.gold_per_min),
        avg_vision_per_min: mean_of(per_match, |m| m.vision_per_min),
        consistency: consistency(per_match),
        games_analyzed: games,
        wins,
    }
}

/// Average of the KDA, damage/min and vision/min spreads, each mapped to 0-100
pub fn consistency(per_match: &[MatchMetrics]) -> f64 {
    if per_match.len() <= 1 {
        return DEFAULT_CONSISTENCY;
    }

    let spreads = [
        std_dev_of(per_match, |m| m.kda),
        std_dev_of(per_match, |m| m.damage_per_min),
        std_dev_of(per_match, |m| m.vision_per_min),
    ];

    spreads.iter().map(|&sd| spread_to_score(sd)).sum::<f64>() / spreads.len() as f64
}

fn spread_to_score(std_dev: f64) -> f64 {
    (100.0 - std_dev * 20.0).clamp(0.0, 100.0)
}

fn column(per_match: &[MatchMetrics], field: impl Fn(&MatchMetrics) -> f64) -> Array1<f64> {
    per_match.iter().map(field).collect()
}

fn mean_of(per_match: &[MatchMetrics], field: impl Fn(&MatchMetrics) -> f64) -> f64 {
    column(per_match, field).mean().unwrap_or(0.0)
}

/// Population standard deviation
fn std_dev_of(per_match: &[MatchMetrics], field: impl Fn(&MatchMetrics) -> f64) -> f64 {
    column(per_match, field).std(0.0)
}
