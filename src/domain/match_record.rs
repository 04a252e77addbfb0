use chrono::{DateTime, Utc};
use serde::Serialize;

use super::models::{MatchDto, ParticipantDto};

/// One player's line in one match
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchParticipantRecord {
    pub puuid: String,
    pub champion: String,
    pub role: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub minions_killed: u32,
    pub vision_score: u32,
    pub damage_dealt: u64,
    pub gold_earned: u64,
    pub win: bool,
    pub early_surrender: bool,
}

impl From<&ParticipantDto> for MatchParticipantRecord {
    fn from(p: &ParticipantDto) -> Self {
        let role = if p.team_position.is_empty() {
            p.individual_position.clone()
        } else {
            p.team_position.clone()
        };

        Self {
            puuid: p.puuid.clone(),
            champion: p.champion_name.clone(),
            role,
            kills: p.kills,
            deaths: p.deaths,
            assists: p.assists,
            minions_killed: p.total_minions_killed + p.neutral_minions_killed,
            vision_score: p.vision_score,
            damage_dealt: p.total_damage_dealt_to_champions,
            gold_earned: p.gold_earned,
            win: p.win,
            early_surrender: p.game_ended_in_early_surrender,
        }
    }
}

/// A finished match reduced to what the analysis needs
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub match_id: String,
    pub queue_id: i32,
    pub duration_secs: i64,
    pub started_at: Option<DateTime<Utc>>,
    pub participants: Vec<MatchParticipantRecord>,
}

impl MatchRecord {
    pub fn participant(&self, puuid: &str) -> Option<&MatchParticipantRecord> {
        self.participants.iter().find(|p| p.puuid == puuid)
    }

    pub fn duration_minutes(&self) -> f64 {
        self.duration_secs as f64 / 60.0
    }
}

impl From<&MatchDto> for MatchRecord {
    fn from(dto: &MatchDto) -> Self {
        let info = &dto.info;
        Self {
            match_id: dto.metadata.match_id.clone(),
            queue_id: info.queue_id,
            duration_secs: normalize_duration(info.game_duration, info.game_end_timestamp),
            started_at: info
                .game_start_timestamp
                .and_then(DateTime::<Utc>::from_timestamp_millis),
            participants: info.participants.iter().map(MatchParticipantRecord::from).collect(),
        }
    }
}

/// Matches created before patch 11.20 carry no `gameEndTimestamp` and
/// report `gameDuration` in milliseconds.
fn normalize_duration(game_duration: i64, game_end_timestamp: Option<i64>) -> i64 {
    match game_end_timestamp {
        Some(_) => game_duration,
        None => game_duration / 1000,
    }
}
